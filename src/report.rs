use serde::Serialize;

use crate::fixer::{Fixer, IssueMatch};

/// A single rewritten issue reference
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The reference as found in the title (e.g. "fOo+1234")
    pub found: String,
    /// The canonical form it was rewritten to (e.g. "FOO-1234")
    pub fixed: String,
}

/// Outcome of checking one title, suitable for JSON output
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The title as supplied
    pub original: String,
    /// The title with every issue reference in canonical form
    pub fixed: String,
    /// Whether `fixed` differs from `original`
    pub changed: bool,
    /// The first issue reference found, if any
    pub first_match: Option<IssueMatch>,
    /// References that were rewritten
    pub corrections: Vec<Correction>,
}

impl Report {
    /// Build a report from a fixer
    pub fn from_fixer(fixer: &Fixer) -> Self {
        let fixed = fixer.apply();
        let corrections = fixer
            .corrections()
            .into_iter()
            .map(|(found, fixed)| Correction { found, fixed })
            .collect();

        Self {
            original: fixer.raw().to_string(),
            changed: fixed != fixer.raw(),
            fixed,
            first_match: fixer.extract(),
            corrections,
        }
    }

    /// Render the report as pretty printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
