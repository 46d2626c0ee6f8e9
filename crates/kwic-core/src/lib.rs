//! Kwic Core Library
//!
//! Keyword-in-context index generation for thesaurus labels: tokenization with
//! stopword suppression, context extraction, duplicate removal and collated
//! sorting.

pub mod config;
pub mod error;
pub mod format;
pub mod kwic;
pub mod label;
pub mod logging;
pub mod records;
pub mod refid;
pub mod rows;
pub mod text;
pub mod thesaurus;
