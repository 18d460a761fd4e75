//! Verifiers that don't fit a larger family: character-class and
//! coordinate/script shape checks.

use once_cell::sync::Lazy;
use regex::Regex;

static DMS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,3})°\s*(\d{1,2})′\s*(\d{1,2}(?:\.\d+)?)″\s*([NSEW])")
        .expect("static DMS pattern is valid")
});

/// True iff `value` contains at least one Unicode alphabetic character.
pub(crate) fn contains_letter(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
}

/// Degrees-minutes-seconds coordinate, e.g. `37°46′29.7″N`. Degrees must
/// fit the direction's range (0..=90 for N/S, 0..=180 for E/W); minutes and
/// seconds must be < 60.
pub(crate) fn dms_coordinate(value: &str) -> bool {
    let caps = match DMS_PATTERN.captures(value) {
        Some(c) => c,
        None => return false,
    };

    let degrees: u32 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let minutes: u32 = match caps[2].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let seconds: f64 = match caps[3].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let direction = caps[4].to_ascii_uppercase();

    if minutes > 59 || seconds >= 60.0 {
        return false;
    }

    match direction.as_str() {
        "N" | "S" => degrees <= 90,
        "E" | "W" => degrees <= 180,
        _ => false,
    }
}

const CJK_MAX_LEN: usize = 6;

fn is_cjk_char(c: char) -> bool {
    let code = c as u32;
    (0x4E00..=0x9FFF).contains(&code)
        || (0xAC00..=0xD7AF).contains(&code)
        || (0x3040..=0x309F).contains(&code)
        || (0x30A0..=0x30FF).contains(&code)
}

/// A CJK name match should be a short, single-script run (2-6 characters)
/// rather than a fragment of a longer sentence or mixed-script string.
pub(crate) fn cjk_name_standalone(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.chars().count() > CJK_MAX_LEN {
        return false;
    }

    value.chars().all(is_cjk_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_letter_detects_any_alphabetic() {
        assert!(contains_letter("abc123"));
        assert!(contains_letter("가나다"));
        assert!(!contains_letter("123-456"));
    }

    #[test]
    fn dms_coordinate_accepts_valid_latitude() {
        // Spec scenario 6.
        assert!(dms_coordinate("37°46′29.7″N"));
    }

    #[test]
    fn dms_coordinate_rejects_out_of_range_degrees() {
        assert!(!dms_coordinate("91°0′0″N"));
    }

    #[test]
    fn dms_coordinate_accepts_longitude_up_to_180() {
        assert!(dms_coordinate("122°25′9.8″W"));
        assert!(!dms_coordinate("181°0′0″W"));
    }

    #[test]
    fn cjk_name_standalone_rejects_long_or_mixed_script() {
        assert!(!cjk_name_standalone(""));
        assert!(!cjk_name_standalone("ABC가나다"));
        assert!(!cjk_name_standalone("가나다라마바사"));
    }

    #[test]
    fn cjk_name_standalone_accepts_short_runs() {
        assert!(cjk_name_standalone("홍길동"));
        assert!(cjk_name_standalone("田中太郎"));
    }
}
