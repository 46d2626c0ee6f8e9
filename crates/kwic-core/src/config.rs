//! Index configuration for kwic
//!
//! Configuration is read from an explicit `--config` file or from the global
//! location `~/.config/kwic/config.toml` (`KWIC_CONFIG_DIR` overrides the directory).

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{KwicError, Result};

pub use types::{
    ContextConfig, DedupConfig, DuplicatePolicy, IndexConfig, LanguageConfig, SearchAdvance,
    CONFIG_FORMAT_VERSION,
};

const CONFIG_DIR: &str = "kwic";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "KWIC_CONFIG_DIR";

impl IndexConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            KwicError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: IndexConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load the global configuration, falling back to defaults when absent
    pub fn load_global() -> Result<Self> {
        let path = Self::global_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KwicError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.context.keep_chars == 0 {
            bail_invalid!("context.keep_chars", "must be at least 1");
        }
        if self.context.keep_chars > self.context.max_chars {
            bail_invalid!(
                "context.keep_chars",
                format!(
                    "{} exceeds context.max_chars ({})",
                    self.context.keep_chars, self.context.max_chars
                )
            );
        }
        if self.context.min_token_chars == 0 {
            bail_invalid!("context.min_token_chars", "must be at least 1");
        }

        // `fr` and `FR-ca` would both claim the same lookups
        let mut subtags = HashSet::new();
        for key in self.languages.keys() {
            if !subtags.insert(primary_subtag(key)) {
                bail_invalid!(
                    "languages",
                    format!("{} repeats language {}", key, primary_subtag(key))
                );
            }
        }
        Ok(())
    }

    /// Language-specific overrides for a language tag (matched on the primary subtag)
    pub fn language(&self, tag: &str) -> Option<&LanguageConfig> {
        let wanted = primary_subtag(tag);
        self.languages
            .iter()
            .find(|(key, _)| primary_subtag(key) == wanted)
            .map(|(_, language)| language)
    }

    fn global_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    KwicError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }
}

/// Lowercased primary subtag of a language tag: `fr-CA` and `FR_ca` become `fr`.
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
