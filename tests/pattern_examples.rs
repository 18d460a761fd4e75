//! Generic invariant checks over every bundled pattern's declared
//! `examples.match`/`examples.nomatch` strings, independent of any specific
//! pattern's identity.

use pii_scan::{load_patterns_from_dir, lookup_verifier};

#[test]
fn every_match_example_actually_matches_and_verifies() {
    let patterns = load_patterns_from_dir("patterns").unwrap();

    for pattern in patterns.patterns() {
        for example in &pattern.examples.r#match {
            let found = pattern.regex.find(example);
            assert!(
                found.is_some(),
                "pattern '{}' example '{example}' should match its regex",
                pattern.id
            );

            if let Some(verifier_name) = &pattern.verifier_name {
                let verifier = lookup_verifier(verifier_name)
                    .unwrap_or_else(|| panic!("verifier '{verifier_name}' must be registered"));
                let matched_text = found.unwrap().as_str();
                assert!(
                    verifier(matched_text),
                    "pattern '{}' example '{example}' should pass verifier '{verifier_name}'",
                    pattern.id
                );
            }
        }
    }
}

#[test]
fn every_nomatch_example_fails_regex_or_verifier() {
    let patterns = load_patterns_from_dir("patterns").unwrap();

    for pattern in patterns.patterns() {
        for example in &pattern.examples.nomatch {
            let found = pattern.regex.find(example);

            let passes = match (&found, &pattern.verifier_name) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(m), Some(verifier_name)) => {
                    let verifier = lookup_verifier(verifier_name)
                        .unwrap_or_else(|| panic!("verifier '{verifier_name}' must be registered"));
                    verifier(m.as_str())
                }
            };

            assert!(
                !passes,
                "pattern '{}' nomatch example '{example}' unexpectedly matched and verified",
                pattern.id
            );
        }
    }
}

#[test]
fn every_verifier_named_by_a_bundled_pattern_resolves() {
    let patterns = load_patterns_from_dir("patterns").unwrap();

    for pattern in patterns.patterns() {
        if let Some(name) = &pattern.verifier_name {
            assert!(
                lookup_verifier(name).is_some(),
                "pattern '{}' names unresolved verifier '{name}'",
                pattern.id
            );
        }
    }
}
