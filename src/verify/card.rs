//! Credit-card BIN (Bank Identification Number) range checks.

use super::checksum::luhn;
use super::util::digits_only;

fn prefix_in_range(digits: &str, width: usize, low: u32, high: u32) -> bool {
    digits.len() >= width
        && digits[..width]
            .parse::<u32>()
            .map(|p| (low..=high).contains(&p))
            .unwrap_or(false)
}

fn is_known_bin(digits: &str) -> bool {
    if digits.starts_with('4') {
        return true;
    }
    if prefix_in_range(digits, 2, 51, 55) {
        return true;
    }
    if prefix_in_range(digits, 4, 2221, 2720) {
        return true;
    }
    if prefix_in_range(digits, 2, 34, 34) || prefix_in_range(digits, 2, 37, 37) {
        return true;
    }
    if digits.starts_with("6011") || digits.starts_with("65") {
        return true;
    }
    if prefix_in_range(digits, 3, 644, 649) {
        return true;
    }
    if prefix_in_range(digits, 6, 622_126, 622_925) {
        return true;
    }
    if prefix_in_range(digits, 4, 3528, 3589) {
        return true;
    }
    if digits.starts_with("62") {
        return true;
    }
    if prefix_in_range(digits, 2, 36, 36) || prefix_in_range(digits, 2, 38, 38) {
        return true;
    }
    if prefix_in_range(digits, 3, 300, 305) {
        return true;
    }

    false
}

/// Card number BIN must fall within a known network's issuing range
/// (Visa, Mastercard, Amex, Discover, JCB, UnionPay, Diners) and the full
/// number must pass Luhn.
pub(crate) fn credit_card_bin_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    is_known_bin(&digits) && luhn(&digits)
}
