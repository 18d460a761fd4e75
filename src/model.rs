//! In-memory representation of a compiled pattern and its policy.

use std::fmt;

use regex::Regex;
use serde::Deserialize;

/// How strongly a match should be treated once found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// What the caller's downstream sink should do with a surviving match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOnMatch {
    Redact,
    Alert,
    Block,
    Log,
    Report,
}

impl fmt::Display for ActionOnMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOnMatch::Redact => write!(f, "redact"),
            ActionOnMatch::Alert => write!(f, "alert"),
            ActionOnMatch::Block => write!(f, "block"),
            ActionOnMatch::Log => write!(f, "log"),
            ActionOnMatch::Report => write!(f, "report"),
        }
    }
}

/// Severity and the action to take, bundled the way a pattern file expresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Policy {
    pub severity: Severity,
    pub action_on_match: ActionOnMatch,
}

/// `match`/`nomatch` example strings from a pattern file, kept around for the
/// test harness rather than discarded at load time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Examples {
    #[serde(default)]
    pub r#match: Vec<String>,
    #[serde(default)]
    pub nomatch: Vec<String>,
}

/// An immutable, compiled pattern.
///
/// Produced only by [`crate::loader::load_patterns`]; never constructed by
/// hand outside tests, since construction implies having already passed
/// schema validation and regex compilation.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub id: String,
    pub namespace: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub regex: Regex,
    pub verifier_name: Option<String>,
    pub mask: String,
    pub policy: Policy,
    pub examples: Examples,
}

impl Pattern {
    /// Whether this pattern is in scope for the given scan-context location
    /// tag. `None` means "scan everything".
    pub fn matches_location(&self, location_filter: Option<&str>) -> bool {
        match location_filter {
            Some(tag) => self.location == tag,
            None => true,
        }
    }
}

/// A half-open byte-offset span, `[start, end)`, into the scanned input.
pub type Span = (usize, usize);

/// A single surviving detection, emitted by the scanner.
#[derive(Debug, Clone)]
pub struct Match {
    pub pattern_id: String,
    pub span: Span,
    pub matched_text: String,
    pub policy: Policy,
    pub mask: String,
}

impl Match {
    pub fn start(&self) -> usize {
        self.span.0
    }

    pub fn end(&self) -> usize {
        self.span.1
    }
}

/// Pattern id validity: lowercase alphanumeric plus `_`/`-`.
pub(crate) fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert!(is_valid_id("us_ssn"));
        assert!(is_valid_id("kr-rrn-13"));
        assert!(is_valid_id("a"));
    }

    #[test]
    fn invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("US_SSN"));
        assert!(!is_valid_id("has space"));
        assert!(!is_valid_id("has.dot"));
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Critical.to_string(), "critical");
        assert_eq!(ActionOnMatch::Redact.to_string(), "redact");
    }
}
