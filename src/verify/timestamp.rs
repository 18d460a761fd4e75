//! Timestamp-vs-identifier discrimination. Account numbers, IDs, and
//! reference codes often collide with the numeric shape of a Unix
//! timestamp or a compact datetime; these verifiers tell them apart.

use super::date::is_valid_date;
use super::util::digits_only;

fn looks_like_unix_seconds(digits: &str) -> bool {
    digits.len() == 10
        && digits
            .parse::<u64>()
            .map(|n| (1_000_000_000..=9_999_999_999).contains(&n))
            .unwrap_or(false)
}

fn looks_like_unix_millis(digits: &str) -> bool {
    digits.len() == 13
        && digits
            .parse::<u64>()
            .map(|n| (1_000_000_000_000..=9_999_999_999_999).contains(&n))
            .unwrap_or(false)
}

fn looks_like_compact_datetime(digits: &str) -> bool {
    if digits.len() != 14 {
        return false;
    }
    let year: i32 = match digits[0..4].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let month: u32 = match digits[4..6].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let day: u32 = match digits[6..8].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if !(1900..=2099).contains(&year) || !is_valid_date(year, month, day) {
        return false;
    }
    let hour: u32 = match digits[8..10].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let minute: u32 = match digits[10..12].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let second: u32 = match digits[12..14].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    hour <= 23 && minute <= 59 && second <= 59
}

/// True unless the digit-only projection of `value` looks like a Unix
/// timestamp (seconds or milliseconds) or a 14-digit compact datetime.
pub(crate) fn not_timestamp(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.is_empty() {
        return true;
    }

    !(looks_like_unix_seconds(&digits)
        || looks_like_unix_millis(&digits)
        || looks_like_compact_datetime(&digits))
}

/// Like [`not_timestamp`] but more permissive when the raw value carries
/// separators (`-`, `/`, space): formatted account numbers rarely collide
/// with a bare timestamp, so only an unambiguous compact-datetime shape is
/// rejected in that case.
pub(crate) fn generic_number_not_timestamp(value: &str) -> bool {
    let has_separators = value.chars().any(|c| matches!(c, '-' | ' ' | '/'));
    let digits = digits_only(value);
    if digits.is_empty() {
        return true;
    }

    if has_separators {
        return !(digits.len() >= 14 && compact_datetime_prefix_valid(&digits));
    }

    !(looks_like_unix_seconds(&digits)
        || looks_like_unix_millis(&digits)
        || (digits.len() >= 14 && compact_datetime_prefix_valid(&digits)))
}

fn compact_datetime_prefix_valid(digits: &str) -> bool {
    let year: i32 = match digits[0..4].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let month: u32 = match digits[4..6].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let day: u32 = match digits[6..8].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    (1900..=2099).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
}

const KNOWN_BANK_PREFIXES: &[&str] =
    &["110", "120", "150", "190", "830", "1002", "301", "3333", "100"];

fn max_consecutive_ascending(digits: &[u8]) -> usize {
    let mut run = 0;
    let mut best = 0;
    for w in digits.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Korean bank accounts are free-form digit strings that frequently
/// collide with timestamps. A known bank-code prefix relaxes the check to
/// a narrow current-era Unix-seconds band; otherwise the full timestamp
/// check applies plus a run-of-6-ascending-digits rejection.
pub(crate) fn korean_bank_account_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.is_empty() {
        return false;
    }

    let has_known_prefix = KNOWN_BANK_PREFIXES.iter().any(|p| digits.starts_with(p));

    if has_known_prefix {
        if digits.len() == 10 {
            if let Ok(num) = digits.parse::<u64>() {
                if (1_600_000_000..=1_800_000_000).contains(&num) {
                    return false;
                }
            }
        }
        return true;
    }

    if looks_like_unix_seconds(&digits) || looks_like_unix_millis(&digits) {
        return false;
    }
    if digits.len() == 14 && compact_datetime_prefix_valid(&digits) {
        return false;
    }

    if digits.len() >= 10 {
        let bytes: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        if max_consecutive_ascending(&bytes) >= 6 {
            return false;
        }
    }

    true
}
