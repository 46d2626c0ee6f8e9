use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A kwic command isolated from the user's configuration: the global
/// config directory points into `dir`, which holds no config file.
pub fn kwic(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("kwic");
    cmd.env("KWIC_CONFIG_DIR", dir.join("config"))
        .env_remove("KWIC_CONFIG")
        .env_remove("KWIC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub const THESAURUS: &str = r#"[
  {
    "uri": "http://example.org/c/1",
    "schemes": ["http://example.org/animals"],
    "prefLabels": [{"value": "Big Cats", "lang": "en"}, {"value": "grands félins", "lang": "fr"}],
    "altLabels": [{"value": "Felines", "lang": "en"}]
  },
  {
    "uri": "http://example.org/c/2",
    "schemes": ["http://example.org/plants"],
    "prefLabels": [{"value": "Flowering Plants", "lang": "en"}]
  }
]"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}
