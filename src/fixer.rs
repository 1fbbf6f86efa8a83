//! Issue reference detection and rewriting
//!
//! A [`Fixer`] holds the known issue key prefixes and a single pull request
//! title. It finds references such as `fOo+1234` and rewrites them to the
//! canonical `FOO-1234`, leaving the rest of the title untouched.

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::Result;

/// Separator used in the canonical form of an issue reference
pub const CANONICAL_SEPARATOR: char = '-';

/// A single issue reference located in a title
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IssueMatch {
    /// The matched text exactly as it appears in the title (e.g. "fOo+1234")
    pub full: String,
    /// The prefix as it appears in the title (e.g. "fOo")
    pub prefix: String,
    /// The issue number digits (e.g. "1234")
    pub number: String,
    /// Byte offset where the match starts in the title
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
}

impl IssueMatch {
    fn from_captures(caps: &Captures) -> Option<Self> {
        let whole = caps.get(0)?;
        let prefix = caps.name("prefix")?;
        let number = caps.name("number")?;

        Some(Self {
            full: whole.as_str().to_string(),
            prefix: prefix.as_str().to_string(),
            number: number.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        })
    }

    /// The `[full, prefix, number]` decomposition of the match
    pub fn parts(&self) -> [&str; 3] {
        [&self.full, &self.prefix, &self.number]
    }

    /// Render the reference as `PREFIX-NUMBER`
    ///
    /// The prefix is the upper-cased text found in the title, not the
    /// configured prefix entry.
    pub fn canonical(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix.to_uppercase(),
            CANONICAL_SEPARATOR,
            self.number
        )
    }

    /// Whether the reference is already written in canonical form
    pub fn is_canonical(&self) -> bool {
        self.full == self.canonical()
    }
}

/// Finds and corrects issue references in one pull request title
#[derive(Debug, Clone)]
pub struct Fixer {
    prefixes: Vec<String>,
    raw: String,
    pattern: Option<Regex>,
}

impl Fixer {
    /// Create a fixer for `raw` using the known issue `prefixes`
    ///
    /// An empty prefix list or an empty title is accepted; both simply never
    /// match. Fails only if the regex engine rejects the generated pattern.
    pub fn new<I, S>(prefixes: I, raw: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        let pattern = build_pattern(&prefixes)?;

        Ok(Self {
            prefixes,
            raw: raw.into(),
            pattern,
        })
    }

    /// The prefixes this fixer was built with, in the order supplied
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The title as supplied
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Find the first issue reference in the title
    pub fn extract(&self) -> Option<IssueMatch> {
        let caps = self.pattern.as_ref()?.captures(&self.raw)?;
        IssueMatch::from_captures(&caps)
    }

    /// Iterate over every non-overlapping issue reference, in title order
    pub fn matches(&self) -> impl Iterator<Item = IssueMatch> + '_ {
        self.pattern
            .iter()
            .flat_map(move |re| re.captures_iter(&self.raw))
            .filter_map(|caps| IssueMatch::from_captures(&caps))
    }

    /// The `(found, canonical)` pairs for references that need rewriting
    pub fn corrections(&self) -> Vec<(String, String)> {
        self.matches()
            .filter(|m| !m.is_canonical())
            .map(|m| {
                let canonical = m.canonical();
                (m.full, canonical)
            })
            .collect()
    }

    /// Produce the title with every issue reference in canonical form
    pub fn apply(&self) -> String {
        let Some(re) = &self.pattern else {
            return self.raw.clone();
        };

        re.replace_all(&self.raw, |caps: &Captures| {
            match IssueMatch::from_captures(caps) {
                Some(m) => {
                    let canonical = m.canonical();
                    if canonical != m.full {
                        tracing::debug!(found = %m.full, fixed = %canonical, "rewriting issue reference");
                    }
                    canonical
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
    }

    /// Whether `apply` would return something other than the raw title
    pub fn needs_fix(&self) -> bool {
        self.matches().any(|m| !m.is_canonical())
    }
}

/// Build the case-insensitive reference pattern for the given prefixes
///
/// Returns `None` when there is no usable prefix, so nothing can match.
fn build_pattern(prefixes: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = prefixes
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();

    if alternatives.is_empty() {
        tracing::debug!("no usable prefixes, matching disabled");
        return Ok(None);
    }

    let pattern = format!(
        r"(?i)\b(?P<prefix>{})\W(?P<number>[0-9]+)",
        alternatives.join("|")
    );
    tracing::debug!(%pattern, "compiled issue reference pattern");

    Ok(Some(Regex::new(&pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: [&str; 3] = ["FOO", "BAR", "BAZ"];
    const DESC: &str = ": Fix a thing";

    fn fixer(title: &str) -> Fixer {
        Fixer::new(PREFIXES, title).unwrap()
    }

    #[test]
    fn test_new_stores_inputs_verbatim() {
        let fixer = fixer("foo 1234 Fix a thing");
        assert_eq!(fixer.prefixes(), &["FOO", "BAR", "BAZ"]);
        assert_eq!(fixer.raw(), "foo 1234 Fix a thing");
    }

    #[test]
    fn test_extract_wrong_case() {
        let found = fixer("fOo-1234 Fix a thing").extract().unwrap();
        assert_eq!(found.parts(), ["fOo-1234", "fOo", "1234"]);
        assert_eq!(found.start, 0);
        assert_eq!(found.end, 8);
    }

    #[test]
    fn test_extract_wrong_separator() {
        let found = fixer("FOO+1234 Fix a thing").extract().unwrap();
        assert_eq!(found.parts(), ["FOO+1234", "FOO", "1234"]);
    }

    #[test]
    fn test_extract_space_separator() {
        let found = fixer("foo 1234 Fix a thing").extract().unwrap();
        assert_eq!(found.parts(), ["foo 1234", "foo", "1234"]);
    }

    #[test]
    fn test_extract_returns_first_of_many() {
        let fixer = fixer("FOO-1234,BAR-567 Fix a thing");
        let found = fixer.extract().unwrap();
        assert_eq!(found.parts(), ["FOO-1234", "FOO", "1234"]);
        // stateless: a second call sees the same reference
        assert_eq!(fixer.extract().unwrap(), found);
    }

    #[test]
    fn test_matches_yields_every_reference() {
        let fixer = fixer("FOO-1234,BAR-567 Fix a thing");
        let parts: Vec<[String; 3]> = fixer
            .matches()
            .map(|m| [m.full, m.prefix, m.number])
            .collect();
        assert_eq!(
            parts,
            vec![
                ["FOO-1234".to_string(), "FOO".to_string(), "1234".to_string()],
                ["BAR-567".to_string(), "BAR".to_string(), "567".to_string()],
            ]
        );
    }

    #[test]
    fn test_extract_enforces_word_boundary_at_start() {
        assert_eq!(fixer("lumbar 739 Fix a thing").extract(), None);
        assert_eq!(fixer("xfoo-12 Fix a thing").extract(), None);
        assert_eq!(fixer("2BAR-12 Fix a thing").extract(), None);
    }

    #[test]
    fn test_extract_rejects_word_character_separator() {
        assert_eq!(fixer("FOO_1234 Fix a thing").extract(), None);
        assert_eq!(fixer("FOOX1234 Fix a thing").extract(), None);
        assert_eq!(fixer("FOO1234 Fix a thing").extract(), None);
    }

    #[test]
    fn test_extract_requires_single_separator_and_digits() {
        assert_eq!(fixer("FOO--1234 Fix a thing").extract(), None);
        assert_eq!(fixer("FOO-abc Fix a thing").extract(), None);
        assert_eq!(fixer("FOO- Fix a thing").extract(), None);
    }

    #[test]
    fn test_extract_unknown_prefix() {
        assert_eq!(fixer("QUX-1234 Fix a thing").extract(), None);
    }

    #[test]
    fn test_extract_keeps_number_as_text() {
        let found = fixer("bar-000123456789012345678901234567890").extract().unwrap();
        assert_eq!(found.number, "000123456789012345678901234567890");
    }

    #[test]
    fn test_apply_fixes_case() {
        let title = format!("fOo-1234{}", DESC);
        assert_eq!(fixer(&title).apply(), format!("FOO-1234{}", DESC));
    }

    #[test]
    fn test_apply_fixes_separator() {
        let title = format!("FOO+5678{}", DESC);
        assert_eq!(fixer(&title).apply(), format!("FOO-5678{}", DESC));
    }

    #[test]
    fn test_apply_fixes_multiple_references() {
        let title = format!("fOo-1234, FOO+5678{}", DESC);
        assert_eq!(fixer(&title).apply(), "FOO-1234, FOO-5678: Fix a thing");
    }

    #[test]
    fn test_apply_preserves_text_between_references() {
        let title = "baz/1 and  bar.22 ; FOO-3: Fix a thing";
        assert_eq!(
            fixer(title).apply(),
            "BAZ-1 and  BAR-22 ; FOO-3: Fix a thing"
        );
    }

    #[test]
    fn test_apply_without_match_returns_raw() {
        let title = "lumbar 739 Fix a thing";
        assert_eq!(fixer(title).apply(), title);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let titles = [
            "fOo-1234, FOO+5678: Fix a thing",
            "foo 1 bar 2 baz 3",
            "[bar:77] nothing else",
            "no references at all",
        ];
        for title in titles {
            let once = fixer(title).apply();
            let twice = fixer(&once).apply();
            assert_eq!(once, twice, "not a fixed point for {:?}", title);
        }
    }

    #[test]
    fn test_apply_uppercases_found_prefix_not_configured_one() {
        let fixer = Fixer::new(["foo"], "Foo+9: lowercase config").unwrap();
        assert_eq!(fixer.apply(), "FOO-9: lowercase config");
    }

    #[test]
    fn test_prefixes_are_literal_text() {
        let fixer = Fixer::new(["A.B"], "AXB-1 and a.b-2").unwrap();
        let found: Vec<String> = fixer.matches().map(|m| m.full).collect();
        assert_eq!(found, vec!["a.b-2".to_string()]);
        assert_eq!(fixer.apply(), "AXB-1 and A.B-2");
    }

    #[test]
    fn test_overlapping_prefixes() {
        let fixer = Fixer::new(["FOO", "FOOBAR"], "foobar+1 foo+2").unwrap();
        assert_eq!(fixer.apply(), "FOOBAR-1 FOO-2");
    }

    #[test]
    fn test_empty_prefixes_never_match() {
        let fixer = Fixer::new(Vec::<String>::new(), "FOO-1 - 23").unwrap();
        assert_eq!(fixer.extract(), None);
        assert_eq!(fixer.apply(), "FOO-1 - 23");

        let fixer = Fixer::new([""], " 23").unwrap();
        assert_eq!(fixer.extract(), None);
        assert_eq!(fixer.apply(), " 23");
    }

    #[test]
    fn test_empty_title() {
        let fixer = fixer("");
        assert_eq!(fixer.extract(), None);
        assert_eq!(fixer.apply(), "");
        assert!(!fixer.needs_fix());
    }

    #[test]
    fn test_canonical_and_is_canonical() {
        let fixer = fixer("FOO-1 bar+2");
        let found: Vec<IssueMatch> = fixer.matches().collect();
        assert!(found[0].is_canonical());
        assert!(!found[1].is_canonical());
        assert_eq!(found[1].canonical(), "BAR-2");
    }

    #[test]
    fn test_corrections_skip_canonical_references() {
        let mixed = fixer("FOO-1, bar+2: thing");
        assert_eq!(
            mixed.corrections(),
            vec![("bar+2".to_string(), "BAR-2".to_string())]
        );
        assert!(mixed.needs_fix());

        let clean = fixer("FOO-1: thing");
        assert!(clean.corrections().is_empty());
        assert!(!clean.needs_fix());
    }

    #[test]
    fn test_fixer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fixer>();

        let shared = std::sync::Arc::new(fixer("fOo-1234: thing"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let fixer = shared.clone();
                std::thread::spawn(move || fixer.apply())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "FOO-1234: thing");
        }
    }
}
