//! Checksum-family verifiers: Luhn, IBAN mod-97, Verhoeff, and the
//! weighted-digit national-ID schemes of Table W.

use super::date::is_valid_date;
use super::util::{all_same_char, digits_only};

/// Classical mod-10 checksum over right-to-left doubling of every second
/// digit. Formatted numbers with spaces/dashes are accepted; empty or
/// all-non-digit input is rejected.
pub(crate) fn luhn(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// IBAN mod-97: rotate the first 4 characters to the tail, remap letters to
/// `10..35`, interpret as a big integer, and require `value mod 97 == 1`.
pub(crate) fn iban_mod97(value: &str) -> bool {
    let iban: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if iban.len() < 4 {
        return false;
    }

    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);

    let mut numeric = String::with_capacity(rearranged.len() * 2);
    for c in rearranged.chars() {
        if c.is_ascii_digit() {
            numeric.push(c);
        } else if c.is_ascii_uppercase() {
            numeric.push_str(&(c as u32 - 'A' as u32 + 10).to_string());
        } else {
            return false;
        }
    }

    mod97_big(&numeric) == Some(1)
}

/// `value mod 97` for a decimal-digit string too large for a native integer,
/// computed by folding in one digit at a time.
fn mod97_big(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut rem: u64 = 0;
    for b in digits.bytes() {
        rem = (rem * 10 + (b - b'0') as u64) % 97;
    }
    Some(rem)
}

/// Verhoeff dihedral-group checksum, used by India's Aadhaar.
pub(crate) fn india_aadhaar_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 12 {
        return false;
    }
    if digits.starts_with('0') || digits.starts_with('1') {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    const D: [[u8; 10]; 10] = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
        [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
        [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
        [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
        [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
        [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
        [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
        [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
        [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    ];
    const P: [[u8; 10]; 8] = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
        [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
        [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
        [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
        [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
        [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
        [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
    ];

    let mut c: usize = 0;
    for (i, ch) in digits.chars().rev().enumerate() {
        let d = ch.to_digit(10).unwrap() as usize;
        c = D[c][P[i % 8][d] as usize] as usize;
    }
    c == 0
}

/// Chinese National ID (18 digits): province area code, Gregorian birth
/// date, weighted mod-11 check digit.
pub(crate) fn cn_national_id_valid(value: &str) -> bool {
    let id: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if id.len() != 18 {
        return false;
    }

    const PROVINCES: &[&str] = &[
        "11", "12", "13", "14", "15", "21", "22", "23", "31", "32", "33", "34", "35", "36", "37",
        "41", "42", "43", "44", "45", "46", "50", "51", "52", "53", "54", "61", "62", "63", "64",
        "65", "71", "81", "82", "91",
    ];
    if !PROVINCES.contains(&&id[..2]) {
        return false;
    }

    let bytes = id.as_bytes();
    if !bytes[..17].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let year: i32 = match id[6..10].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };
    let month: u32 = match id[10..12].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let day: u32 = match id[12..14].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    if !(1900..=2100).contains(&year) || !is_valid_date(year, month, day) {
        return false;
    }

    const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
    const CHECK_DIGITS: [u8; 11] = *b"10X98765432";

    let total: u32 = (0..17)
        .map(|i| (bytes[i] - b'0') as u32 * WEIGHTS[i])
        .sum();
    let expected = CHECK_DIGITS[(total % 11) as usize];

    bytes[17] == expected
}

/// Taiwan National ID: one birth-place letter plus nine digits, weighted
/// mod-10 checksum.
pub(crate) fn tw_national_id_valid(value: &str) -> bool {
    let id: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if id.len() != 10 {
        return false;
    }
    let mut chars = id.chars();
    let letter = chars.next().unwrap();
    if !letter.is_ascii_alphabetic() {
        return false;
    }
    if matches!(letter, 'I' | 'O' | 'W') {
        return false;
    }
    let rest = &id[1..];
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let letter_code = letter as u32 - 'A' as u32 + 10;
    let gender = rest.as_bytes()[0] - b'0';
    if gender != 1 && gender != 2 {
        return false;
    }

    let first_digit = letter_code / 10;
    let second_digit = letter_code % 10;
    let mut total = first_digit * 1 + second_digit * 9;

    const WEIGHTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
    let digits: Vec<u32> = rest.bytes().map(|b| (b - b'0') as u32).collect();
    for (w, d) in WEIGHTS.iter().zip(digits.iter().take(8)) {
        total += w * d;
    }
    total += digits[8];

    total % 10 == 0
}

/// India PAN: `AAAAA9999A` with a valid entity-type letter, rejecting a
/// handful of obvious placeholder prefixes.
pub(crate) fn india_pan_valid(value: &str) -> bool {
    let pan: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if pan.len() != 10 {
        return false;
    }
    let bytes = pan.as_bytes();
    if !bytes[..5].iter().all(u8::is_ascii_alphabetic)
        || !bytes[5..9].iter().all(u8::is_ascii_digit)
        || !bytes[9].is_ascii_alphabetic()
    {
        return false;
    }

    const VALID_ENTITY: &[u8] = b"ABCFGHJKLPT";
    if !VALID_ENTITY.contains(&bytes[3]) {
        return false;
    }

    !matches!(&pan[..5], "AAAAA" | "ABCDE" | "XXXXX" | "ZZZZZ")
}

/// Korean Business Registration Number (사업자등록번호).
pub(crate) fn kr_business_registration_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 10 {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    const WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];
    let bytes = digits.as_bytes();
    let mut total = 0u32;
    for i in 0..9 {
        let digit = (bytes[i] - b'0') as u32;
        total += digit * WEIGHTS[i];
        if i == 8 {
            total += (digit * 5) / 10;
        }
    }
    let check = (10 - (total % 10)) % 10;
    (bytes[9] - b'0') as u32 == check
}

/// Korean Corporate Registration Number (법인등록번호).
pub(crate) fn kr_corporate_registration_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 13 {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    const WEIGHTS: [u32; 12] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2];
    let bytes = digits.as_bytes();
    let mut total = 0u32;
    for i in 0..12 {
        let mut product = (bytes[i] - b'0') as u32 * WEIGHTS[i];
        if product > 9 {
            product -= 9;
        }
        total += product;
    }
    let check = (10 - (total % 10)) % 10;
    (bytes[12] - b'0') as u32 == check
}

/// Japanese My Number (マイナンバー): 12 digits, weighted mod-11 checksum.
pub(crate) fn jp_my_number_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 12 {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }
    if digits == "123456789012" || digits == "012345678901" {
        return false;
    }

    const WEIGHTS: [u32; 11] = [6, 5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
    let bytes = digits.as_bytes();
    let total: u32 = (0..11).map(|i| (bytes[i] - b'0') as u32 * WEIGHTS[i]).sum();
    let remainder = total % 11;
    let expected = if remainder <= 1 { 0 } else { 11 - remainder };

    (bytes[11] - b'0') as u32 == expected
}

/// Dutch BSN (Burgerservicenummer): 8 or 9 digits, "11-proof" weighted sum.
pub(crate) fn netherlands_bsn_valid(value: &str) -> bool {
    let mut digits = digits_only(value);
    if digits.len() == 8 {
        digits.insert(0, '0');
    } else if digits.len() != 9 {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    const WEIGHTS: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];
    let bytes = digits.as_bytes();
    let total: i32 = (0..9).map(|i| (bytes[i] - b'0') as i32 * WEIGHTS[i]).sum();

    total.rem_euclid(11) == 0
}

const SPAIN_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

/// Spanish DNI: 8 digits plus a letter derived from `number mod 23`.
pub(crate) fn spain_dni_valid(value: &str) -> bool {
    let dni: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if dni.len() != 9 {
        return false;
    }
    if !dni[..8].bytes().all(|b| b.is_ascii_digit()) || !dni.as_bytes()[8].is_ascii_alphabetic() {
        return false;
    }

    let number: u32 = dni[..8].parse().unwrap();
    let expected = SPAIN_LETTERS.as_bytes()[(number % 23) as usize] as char;

    dni.chars().nth(8).unwrap() == expected
}

/// Spanish NIE: leading `X`/`Y`/`Z` remapped to `0`/`1`/`2`, then the DNI
/// checksum.
pub(crate) fn spain_nie_valid(value: &str) -> bool {
    let nie: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if nie.len() != 9 {
        return false;
    }
    let lead = nie.as_bytes()[0];
    if !matches!(lead, b'X' | b'Y' | b'Z') {
        return false;
    }
    if !nie[1..8].bytes().all(|b| b.is_ascii_digit()) || !nie.as_bytes()[8].is_ascii_alphabetic() {
        return false;
    }

    let replacement = match lead {
        b'X' => '0',
        b'Y' => '1',
        _ => '2',
    };
    let number_str = format!("{replacement}{}", &nie[1..8]);
    let number: u32 = number_str.parse().unwrap();
    let expected = SPAIN_LETTERS.as_bytes()[(number % 23) as usize] as char;

    nie.chars().nth(8).unwrap() == expected
}

/// US SSN: rejects the area/group/serial ranges reserved by the SSA.
pub(crate) fn us_ssn_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 9 {
        return false;
    }

    let area: u32 = digits[0..3].parse().unwrap();
    let group: u32 = digits[3..5].parse().unwrap();
    let serial: u32 = digits[5..9].parse().unwrap();

    if area == 0 || area == 666 || area >= 900 {
        return false;
    }
    if group == 0 {
        return false;
    }
    if serial == 0 {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_valid_card_numbers() {
        assert!(luhn("4111-1111-1111-1111"));
        assert!(luhn("4111111111111111"));
    }

    #[test]
    fn luhn_rejects_bad_checksum_and_empty() {
        assert!(!luhn("4111111111111112"));
        assert!(!luhn(""));
        assert!(!luhn("abcd"));
    }

    #[test]
    fn luhn_is_formatting_independent() {
        assert_eq!(luhn("4111111111111111"), luhn("4111-1111-1111-1111"));
    }

    #[test]
    fn iban_round_trip() {
        assert!(iban_mod97("GB82WEST12345698765432"));
        assert!(iban_mod97("GB82 WEST 1234 5698 7654 32"));
    }

    #[test]
    fn iban_rejects_bad_checksum() {
        assert!(!iban_mod97("GB82WEST12345698765431"));
    }

    #[test]
    fn aadhaar_rejects_bad_prefix_and_repeats() {
        assert!(!india_aadhaar_valid("011234567890"));
        assert!(!india_aadhaar_valid("222222222222"));
    }

    #[test]
    fn tw_id_checksum() {
        assert!(tw_national_id_valid("A123456789"));
        assert!(!tw_national_id_valid("A123456788"));
    }

    #[test]
    fn tw_id_rejects_io_and_w_birthplace_letters_even_with_valid_checksum_arithmetic() {
        assert!(!tw_national_id_valid("I100000004"));
        assert!(!tw_national_id_valid("O100000004"));
        assert!(!tw_national_id_valid("W100000004"));
    }

    #[test]
    fn checksum_verifiers_never_panic_on_non_ascii_input() {
        assert!(!iban_mod97("AAAÉ"));
        assert!(!cn_national_id_valid("11ÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉ"));
        assert!(!tw_national_id_valid("AÉÉÉÉÉÉÉÉÉ"));
        assert!(!india_pan_valid("AÉAAA1234A"));
        assert!(!spain_dni_valid("1234567É É"));
        assert!(!spain_nie_valid("XÉ234567É"));
    }

    #[test]
    fn pan_rejects_placeholder_prefixes() {
        assert!(!india_pan_valid("AAAAA1234A"));
    }

    #[test]
    fn ssn_rejects_reserved_ranges() {
        assert!(!us_ssn_valid("000-12-3456"));
        assert!(!us_ssn_valid("666-12-3456"));
        assert!(!us_ssn_valid("900-12-3456"));
        assert!(!us_ssn_valid("123-00-4567"));
        assert!(!us_ssn_valid("123-45-0000"));
    }

    #[test]
    fn ssn_accepts_plausible_number() {
        assert!(us_ssn_valid("123-45-6789"));
    }

    #[test]
    fn bsn_eight_digit_is_zero_padded() {
        // 11-proof: 1*9 + 1*8 + 1*7 + 2*6 + 9*5 + 9*4 + 0*3 + 6*2 + 1*-1 = ...
        assert!(netherlands_bsn_valid("111222333"));
    }
}
