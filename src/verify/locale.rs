//! Postal-code plausibility, backed by an optional reference dataset with a
//! heuristic fallback when the dataset isn't present.

use crate::refdata::default_cache;
use super::util::digits_only;

fn is_sequential(digits: &[u8]) -> bool {
    let ascending = digits.windows(2).all(|w| w[1] == w[0] + 1);
    let descending = digits.windows(2).all(|w| w[0] == w[1] + 1);
    ascending || descending
}

/// US ZIP / ZIP+4. With reference data loaded, checks exact (5-digit) or
/// base-prefix (9-digit) membership. Without it, rejects `00000`,
/// all-same-digit, sequential, and round (multiple of 10000) codes.
pub(crate) fn us_zipcode_valid(value: &str) -> bool {
    let digits = digits_only(value);

    let zips = default_cache().get("us_zipcodes.csv");
    if !zips.is_empty() {
        match digits.len() {
            5 => return zips.contains(&digits),
            9 => return zips.contains(&digits[..5]),
            // Unexpected length even though data is present: fall back to
            // heuristics just in case the regex matched something else.
            _ => {}
        }
    }

    if digits.len() != 5 && digits.len() != 9 {
        return false;
    }
    let base = &digits[..5];
    let bytes: Vec<u8> = base.bytes().map(|b| b - b'0').collect();

    if bytes.iter().all(|b| *b == bytes[0]) {
        return false;
    }
    if is_sequential(&bytes) {
        return false;
    }
    match base.parse::<u32>() {
        Ok(n) if n % 10_000 == 0 => false,
        Ok(_) => true,
        Err(_) => false,
    }
}

/// Korean postal code (5-digit, post-2015 format). Same data-then-heuristic
/// shape as [`us_zipcode_valid`], without the 9-digit variant.
pub(crate) fn korean_zipcode_valid(value: &str) -> bool {
    let zips = default_cache().get("kr_zipcodes.csv");
    if !zips.is_empty() {
        let stripped: String = value.chars().filter(|c| *c != '-').collect();
        return zips.contains(value) || zips.contains(&stripped);
    }

    let digits = digits_only(value);
    if digits.len() != 5 {
        return false;
    }
    let bytes: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();

    if bytes.iter().all(|b| *b == bytes[0]) {
        return false;
    }
    if is_sequential(&bytes) {
        return false;
    }
    match digits.parse::<u32>() {
        Ok(n) if n % 10_000 == 0 => false,
        Ok(_) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These run against the bundled `datas/*.csv` fixtures (present at the
    // crate root, where `cargo test` sets the working directory), so they
    // exercise the data-backed branch of `default_cache()`. The heuristic
    // fallback for a missing file is covered directly in `refdata.rs`.

    #[test]
    fn us_zipcode_rejects_codes_absent_from_reference_data() {
        assert!(!us_zipcode_valid("00000"));
        assert!(!us_zipcode_valid("11111"));
        assert!(!us_zipcode_valid("12345"));
    }

    #[test]
    fn us_zipcode_accepts_codes_present_in_reference_data() {
        assert!(us_zipcode_valid("90210"));
        assert!(us_zipcode_valid("90210-1234"));
    }

    #[test]
    fn korean_zipcode_rejects_codes_absent_from_reference_data() {
        assert!(!korean_zipcode_valid("00000"));
        assert!(!korean_zipcode_valid("12345"));
    }

    #[test]
    fn korean_zipcode_accepts_codes_present_in_reference_data() {
        assert!(korean_zipcode_valid("06236"));
    }

    #[test]
    fn us_zipcode_falls_through_to_heuristics_for_lengths_reference_data_cant_answer() {
        // Reference data is present but only ever holds 5- and 9-digit
        // zips; a 6-digit candidate isn't handled by the data branch, so
        // this exercises the fallthrough to the heuristic block rather than
        // a short-circuit `false`. The heuristic itself also rejects
        // non-5/9-digit input, so the outcome still ends up `false` here.
        assert!(!us_zipcode_valid("111111"));
    }

    #[test]
    fn is_sequential_detects_ascending_and_descending_runs() {
        assert!(is_sequential(&[1, 2, 3, 4, 5]));
        assert!(is_sequential(&[5, 4, 3, 2, 1]));
        assert!(!is_sequential(&[1, 2, 4, 5, 6]));
    }
}
