//! CLI commands for kwic

pub mod build;
pub mod dispatch;
pub mod tokenize;
