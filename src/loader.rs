//! Declarative pattern-file loading: YAML in, a validated [`PatternSet`] out.
//!
//! Loading is strict — the first invalid pattern aborts the whole batch —
//! and walks the implicit state machine `unloaded → parsed → validated →
//! compiled → registered` per pattern. There is no partial success.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{LoadError, Result};
use crate::model::{is_valid_id, Examples, Pattern, Policy};
use crate::registry::VerifierRegistry;

#[derive(Debug, Deserialize)]
struct RawPatternFile {
    namespace: String,
    #[allow(dead_code)]
    description: String,
    patterns: Vec<RawPattern>,
}

#[derive(Debug, Deserialize)]
struct RawPattern {
    id: String,
    location: String,
    category: String,
    description: String,
    pattern: String,
    #[serde(default)]
    flags: Vec<RegexFlag>,
    verification: Option<String>,
    mask: String,
    policy: Policy,
    #[serde(default)]
    examples: Examples,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
enum RegexFlag {
    #[serde(rename = "IGNORECASE")]
    IgnoreCase,
    #[serde(rename = "MULTILINE")]
    Multiline,
    #[serde(rename = "DOTALL")]
    DotAll,
    #[serde(rename = "VERBOSE")]
    Verbose,
}

/// A compiled, validated collection of patterns ready for scanning.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile_regex(path: &Path, id: &str, pattern: &str, flags: &[RegexFlag]) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.contains(&RegexFlag::IgnoreCase))
        .multi_line(flags.contains(&RegexFlag::Multiline))
        .dot_matches_new_line(flags.contains(&RegexFlag::DotAll))
        .ignore_whitespace(flags.contains(&RegexFlag::Verbose))
        .build()
        .map_err(|source| LoadError::Regex {
            path: path.to_path_buf(),
            id: id.to_string(),
            source,
        })
}

fn compile_one(path: &Path, raw: RawPattern, registry: &VerifierRegistry) -> Result<Pattern> {
    if !is_valid_id(&raw.id) {
        return Err(LoadError::Schema {
            path: path.to_path_buf(),
            id: raw.id,
            reason: "id must match ^[a-z0-9_-]+$".to_string(),
        });
    }

    let regex = compile_regex(path, &raw.id, &raw.pattern, &raw.flags)?;

    if let Some(name) = &raw.verification {
        if registry.lookup(name).is_none() {
            return Err(LoadError::UnknownVerifier {
                path: path.to_path_buf(),
                id: raw.id,
                verifier: name.clone(),
            });
        }
    }

    Ok(Pattern {
        id: raw.id,
        namespace: String::new(), // filled in by the caller, which knows the file's namespace
        location: raw.location,
        category: raw.category,
        description: raw.description,
        regex,
        verifier_name: raw.verification,
        mask: raw.mask,
        policy: raw.policy,
        examples: raw.examples,
    })
}

fn load_one_file(path: &Path, registry: &VerifierRegistry) -> Result<Vec<Pattern>> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw_file: RawPatternFile =
        serde_yaml::from_str(&contents).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let namespace = raw_file.namespace;
    raw_file
        .patterns
        .into_iter()
        .map(|raw| {
            let mut pattern = compile_one(path, raw, registry)?;
            pattern.namespace = namespace.clone();
            Ok(pattern)
        })
        .collect()
}

/// Load and validate every pattern file in `paths` against `registry`,
/// producing one [`PatternSet`]. Aborts on the first invalid pattern found,
/// in file order; pattern dispatch itself never depends on load order.
pub fn load_patterns_with_registry(
    paths: &[impl AsRef<Path>],
    registry: &VerifierRegistry,
) -> Result<PatternSet> {
    let mut patterns = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for path in paths {
        for pattern in load_one_file(path.as_ref(), registry)? {
            if !seen_ids.insert(pattern.id.clone()) {
                return Err(LoadError::DuplicateId(pattern.id));
            }
            patterns.push(pattern);
        }
    }

    Ok(PatternSet { patterns })
}

/// Load and validate every pattern file in `paths` against the process-wide
/// default verifier registry.
pub fn load_patterns(paths: &[impl AsRef<Path>]) -> Result<PatternSet> {
    load_patterns_with_registry(paths, crate::registry::default_registry())
}

/// Load every `*.yml`/`*.yaml` file directly under `dir` (non-recursive).
pub fn load_patterns_from_dir(dir: impl AsRef<Path>) -> Result<PatternSet> {
    let dir = dir.as_ref();
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml")))
        .collect();
    files.sort();

    load_patterns(&files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_pattern_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    const MINIMAL_YAML: &str = r#"
namespace: test
description: a test namespace
patterns:
  - id: sample_id
    location: body
    category: pii
    description: a sample pattern
    pattern: "\\d{3}-\\d{4}"
    mask: "[REDACTED]"
    policy:
      severity: low
      action_on_match: redact
    examples:
      match: ["123-4567"]
      nomatch: ["abc"]
"#;

    #[test]
    fn loads_a_well_formed_pattern_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pattern_file(dir.path(), "sample.yml", MINIMAL_YAML);

        let set = load_patterns(&[path]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.patterns()[0].id, "sample_id");
        assert_eq!(set.patterns()[0].namespace, "test");
    }

    #[test]
    fn rejects_invalid_id() {
        let dir = tempfile::tempdir().unwrap();
        let bad = MINIMAL_YAML.replace("sample_id", "Sample_ID");
        let path = write_pattern_file(dir.path(), "bad.yml", &bad);

        let err = load_patterns(&[path]).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
    }

    #[test]
    fn rejects_unknown_verifier() {
        let dir = tempfile::tempdir().unwrap();
        let bad = MINIMAL_YAML.replacen(
            "mask: \"[REDACTED]\"",
            "verification: does_not_exist\n    mask: \"[REDACTED]\"",
            1,
        );
        let path = write_pattern_file(dir.path(), "bad.yml", &bad);

        let err = load_patterns(&[path]).unwrap_err();
        assert!(matches!(err, LoadError::UnknownVerifier { .. }));
    }

    #[test]
    fn rejects_bad_regex() {
        let dir = tempfile::tempdir().unwrap();
        let bad = MINIMAL_YAML.replace(r#"pattern: "\\d{3}-\\d{4}""#, r#"pattern: "(unclosed""#);
        let path = write_pattern_file(dir.path(), "bad.yml", &bad);

        let err = load_patterns(&[path]).unwrap_err();
        assert!(matches!(err, LoadError::Regex { .. }));
    }

    #[test]
    fn rejects_duplicate_ids_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_pattern_file(dir.path(), "a.yml", MINIMAL_YAML);
        let second = write_pattern_file(dir.path(), "b.yml", MINIMAL_YAML);

        let err = load_patterns(&[first, second]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(_)));
    }

    #[test]
    fn applies_case_insensitive_flag() {
        let dir = tempfile::tempdir().unwrap();
        let with_flag = MINIMAL_YAML.replace(
            "pattern: \"\\\\d{3}-\\\\d{4}\"",
            "pattern: \"abc\"\n    flags: [IGNORECASE]",
        );
        let path = write_pattern_file(dir.path(), "flag.yml", &with_flag);

        let set = load_patterns(&[path]).unwrap();
        assert!(set.patterns()[0].regex.is_match("ABC"));
    }
}
