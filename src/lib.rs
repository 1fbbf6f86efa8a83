//! # pr-title-fix
//!
//! Normalizes issue references in pull request titles: `fOo+1234: Fix a thing`
//! becomes `FOO-1234: Fix a thing` when `FOO` is a known prefix.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixer;
pub mod logging;
pub mod prefixes;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fixer::{Fixer, IssueMatch};
pub use report::Report;
