//! Lazy-loaded reference data (postal codes, province lists, ...) backing
//! certain verifiers.
//!
//! Loading reads a CSV-style file: one value per line after an initial
//! header line, blanks ignored. A missing file is not an error — the
//! verifier that wanted it falls back to heuristics. Loaded sets are cached
//! for the process lifetime and never invalidated.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use once_cell::sync::Lazy;

type DataSet = Arc<HashSet<String>>;

/// Single-flight-per-key cache: the first caller to ask for a given key
/// pays the I/O cost and every other caller, racing or not, converges on
/// the same loaded set.
pub struct RefDataCache {
    dir: PathBuf,
    slots: Mutex<HashMap<String, Arc<OnceLock<DataSet>>>>,
}

impl RefDataCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Look up (loading on first access) the reference set for `filename`.
    /// Returns an empty set if the file is absent or unreadable.
    pub fn get(&self, filename: &str) -> DataSet {
        let slot = {
            let mut slots = self.slots.lock().expect("refdata lock poisoned");
            slots
                .entry(filename.to_string())
                .or_insert_with(|| Arc::new(OnceLock::new()))
                .clone()
        };

        slot.get_or_init(|| Arc::new(load_file(&self.dir.join(filename))))
            .clone()
    }
}

fn load_file(path: &Path) -> HashSet<String> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return HashSet::new(),
    };

    contents
        .lines()
        .skip(1) // header
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Process-wide default cache, reading from `./datas` relative to the
/// current working directory — mirrors the original's `<pkg>/datas/` layout.
static DEFAULT_CACHE: Lazy<RefDataCache> = Lazy::new(|| RefDataCache::new("datas"));

/// Borrow the process-wide default reference-data cache.
pub fn default_cache() -> &'static RefDataCache {
    &DEFAULT_CACHE
}
