//! Runs an active pattern set against input text, applying verifiers and
//! location filtering to turn regex candidates into surviving matches.

use std::panic::{self, AssertUnwindSafe};

use log::warn;
use rayon::prelude::*;

use crate::loader::PatternSet;
use crate::model::{Match, Policy};
use crate::registry::{default_registry, VerifierRegistry};

/// Scans input against a [`PatternSet`], optionally narrowed by a registry
/// other than the process-wide default.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    patterns: &'a PatternSet,
    registry: &'a VerifierRegistry,
}

impl<'a> Scanner<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self {
            patterns,
            registry: default_registry(),
        }
    }

    pub fn with_registry(patterns: &'a PatternSet, registry: &'a VerifierRegistry) -> Self {
        Self { patterns, registry }
    }

    /// Run every in-scope pattern against `input`, returning surviving
    /// matches ordered by non-decreasing start offset.
    pub fn scan(&self, input: &str, location_filter: Option<&str>) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .patterns
            .patterns()
            .iter()
            .filter(|pattern| pattern.matches_location(location_filter))
            .flat_map(|pattern| self.scan_one(pattern, input))
            .collect();

        matches.sort_by_key(|m| m.start());
        matches
    }

    /// Scan several independent inputs in parallel, one [`Scanner::scan`]
    /// call per input. The pattern set and registry are read-only and
    /// shared across threads without cloning.
    pub fn scan_parallel(&self, inputs: &[&str], location_filter: Option<&str>) -> Vec<Vec<Match>> {
        inputs
            .par_iter()
            .map(|input| self.scan(input, location_filter))
            .collect()
    }

    fn scan_one(&self, pattern: &crate::model::Pattern, input: &str) -> Vec<Match> {
        pattern
            .regex
            .find_iter(input)
            .filter_map(|candidate| {
                let matched_text = candidate.as_str();

                if let Some(verifier_name) = &pattern.verifier_name {
                    let verifier = match self.registry.lookup(verifier_name) {
                        Some(f) => f,
                        None => {
                            warn!(
                                "pattern '{}' names unresolved verifier '{}' at scan time",
                                pattern.id, verifier_name
                            );
                            return None;
                        }
                    };
                    // Verifiers are spec'd to be total and never panic, but a
                    // pattern's regex can still hand a verifier non-ASCII or
                    // otherwise unexpected text it wasn't written for. Treat a
                    // panic as the documented RuntimeError case: log it and
                    // drop the candidate, never abort the scan.
                    let verified = panic::catch_unwind(AssertUnwindSafe(|| verifier(matched_text)));
                    match verified {
                        Ok(true) => {}
                        Ok(false) => return None,
                        Err(_) => {
                            warn!(
                                "verifier '{}' panicked on pattern '{}' match {:?}; dropping candidate",
                                verifier_name, pattern.id, matched_text
                            );
                            return None;
                        }
                    }
                }

                Some(Match {
                    pattern_id: pattern.id.clone(),
                    span: (candidate.start(), candidate.end()),
                    matched_text: matched_text.to_string(),
                    policy: pattern.policy,
                    mask: pattern.mask.clone(),
                })
            })
            .collect()
    }
}

/// Scan `input` against `patterns` using the process-wide default registry.
pub fn scan(patterns: &PatternSet, input: &str, location_filter: Option<&str>) -> Vec<Match> {
    Scanner::new(patterns).scan(input, location_filter)
}

impl Policy {
    /// Numeric ranking used when a caller wants to keep only the highest
    /// severity among overlapping matches; the core itself never collapses
    /// overlaps.
    pub fn severity_rank(&self) -> u8 {
        match self.severity {
            crate::model::Severity::Low => 0,
            crate::model::Severity::Medium => 1,
            crate::model::Severity::High => 2,
            crate::model::Severity::Critical => 3,
        }
    }
}
