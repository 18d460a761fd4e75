//! pii-scan: a pattern detection engine for personally identifiable
//! information (PII) and secret material in arbitrary text.
//!
//! Given a corpus of declarative pattern definitions — each pairing a
//! regular expression with a named semantic verifier and a redaction
//! policy — the engine yields the set of matches that simultaneously
//! satisfy the regex, the verifier, and any location constraint.
//!
//! # Quick start
//!
//! ```no_run
//! use pii_scan::{load_patterns_from_dir, scan};
//!
//! let patterns = load_patterns_from_dir("patterns").unwrap();
//! let matches = scan(&patterns, "card 4111-1111-1111-1111 on file", None);
//! for m in matches {
//!     println!("{}: {:?}", m.pattern_id, m.matched_text);
//! }
//! ```
//!
//! # Architecture
//!
//! Two subsystems do the real work. The **pattern loader** ([`loader`])
//! parses declarative pattern files into an executable pattern table,
//! validating each against a linear-time regex engine. The **verifier
//! library** (reached through the [`registry`]) implements roughly thirty
//! semantic validators: national-ID checksums, calendar-aware composite
//! IDs, Shannon-entropy scoring, and timestamp/RNG discrimination
//! heuristics. The [`scanner`] ties the two together.
//!
//! The engine is a pure function from `(text, pattern set) -> matches`. It
//! does no network I/O, no persistent storage, and no probabilistic
//! ranking; callers select which pattern namespaces are active.

mod error;
mod loader;
mod model;
mod refdata;
mod registry;
mod scanner;
mod verify;

pub use error::{LoadError, Result};
pub use loader::{load_patterns, load_patterns_from_dir, load_patterns_with_registry, PatternSet};
pub use model::{ActionOnMatch, Examples, Match, Pattern, Policy, Severity, Span};
pub use refdata::{default_cache, RefDataCache};
pub use registry::{
    default_registry, lookup_verifier, register_verifier, unregister_verifier, VerifierFn,
    VerifierRegistry,
};
pub use scanner::{scan, Scanner};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn end_to_end_iban_scenario() {
        // Spec scenario 1.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("financial.yml");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(
            br#"
namespace: financial
description: financial identifiers
patterns:
  - id: iban
    location: body
    category: financial
    description: IBAN
    pattern: "[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}"
    verification: iban_mod97
    mask: "[IBAN]"
    policy:
      severity: high
      action_on_match: redact
"#,
        )
        .unwrap();

        let patterns = load_patterns(&[path]).unwrap();
        let matches = scan(&patterns, "GB82WEST12345698765432", None);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, (0, 22));
    }

    #[test]
    fn public_api_surface_is_usable() {
        let registry = VerifierRegistry::with_builtins();
        assert!(registry.lookup("luhn").is_some());

        register_verifier("always_true", |_| true);
        assert!(lookup_verifier("always_true").unwrap()("anything"));
        assert!(unregister_verifier("always_true"));
    }
}
