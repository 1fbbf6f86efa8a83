//! Parsing of the issue prefix list
//!
//! Prefixes usually arrive as a single comma separated value from the
//! environment (e.g. `ISSUE_PREFIXES="FOO, BAR,BAZ"`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Split a comma separated prefix list
///
/// Entries are trimmed, empty entries are dropped and duplicates are removed
/// keeping the first occurrence.
pub fn parse(list: &str) -> Vec<String> {
    normalize(SEPARATOR.split(list.trim()))
}

/// Clean up prefixes that were already split (e.g. from a config file)
pub fn normalize<I, S>(prefixes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for prefix in prefixes {
        let prefix = prefix.as_ref().trim();
        if prefix.is_empty() || out.iter().any(|p| p == prefix) {
            continue;
        }
        out.push(prefix.to_string());
    }
    out
}
