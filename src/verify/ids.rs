//! Composite national IDs that combine calendar-date validation with a
//! checksum: Korean RRN/ARC, Polish PESEL, French NIR, Belgian RRN, Finnish
//! HETU, and Swedish personnummer.

use super::checksum::luhn;
use super::date::is_valid_date;
use super::util::{all_same_char, digits_only};

/// Korean Resident Registration Number (주민등록번호): `YYMMDD-NXXXXXX`.
pub(crate) fn kr_rrn_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 13 {
        return false;
    }

    let yy: i32 = digits[0..2].parse().unwrap();
    let month: u32 = digits[2..4].parse().unwrap();
    let day: u32 = digits[4..6].parse().unwrap();
    let century: u32 = digits.as_bytes()[6] as u32 - '0' as u32;

    if !(1..=4).contains(&century) {
        return false;
    }
    let year = if century <= 2 { 1900 + yy } else { 2000 + yy };
    if !is_valid_date(year, month, day) {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    const WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];
    let bytes = digits.as_bytes();
    let total: u32 = (0..12).map(|i| (bytes[i] - b'0') as u32 * WEIGHTS[i]).sum();
    let check = (11 - (total % 11)) % 10;

    (bytes[12] - b'0') as u32 == check
}

/// Korean Alien Registration Number (외국인등록번호): same shape as the RRN
/// but with century/gender digits `5..=8` and no checksum beyond date shape.
pub(crate) fn kr_alien_registration_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 13 {
        return false;
    }

    let yy: i32 = digits[0..2].parse().unwrap();
    let month: u32 = digits[2..4].parse().unwrap();
    let day: u32 = digits[4..6].parse().unwrap();
    let century: u32 = digits.as_bytes()[6] as u32 - '0' as u32;

    if !(5..=8).contains(&century) {
        return false;
    }
    let year = if century <= 6 { 1900 + yy } else { 2000 + yy };
    if !is_valid_date(year, month, day) {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    true
}

/// Polish PESEL: month encoding widens by century band (including the
/// 1800s and 2200s bands), then a weighted mod-10 checksum.
pub(crate) fn poland_pesel_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 11 {
        return false;
    }
    if all_same_char(&digits) {
        return false;
    }

    let yy: i32 = digits[0..2].parse().unwrap();
    let mm: u32 = digits[2..4].parse().unwrap();
    let dd: u32 = digits[4..6].parse().unwrap();

    let (year, month) = match mm {
        1..=12 => (1900 + yy, mm),
        21..=32 => (2000 + yy, mm - 20),
        41..=52 => (2100 + yy, mm - 40),
        61..=72 => (2200 + yy, mm - 60),
        81..=92 => (1800 + yy, mm - 80),
        _ => return false,
    };
    if !is_valid_date(year, month, dd) {
        return false;
    }

    const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];
    let bytes = digits.as_bytes();
    let total: u32 = (0..10).map(|i| (bytes[i] - b'0') as u32 * WEIGHTS[i]).sum();
    let check = (10 - (total % 10)) % 10;

    (bytes[10] - b'0') as u32 == check
}

/// French NIR/INSEE number: sex, year, month, department (with Corsica's
/// `2A`/`2B` remapped for the checksum), commune, order, and a mod-97 check.
pub(crate) fn france_insee_valid(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|c| c.is_ascii() && *c != ' ').collect();
    if cleaned.len() != 15 {
        return false;
    }

    let dept = cleaned[5..7].to_uppercase();
    let calc: String = if dept == "2A" {
        format!("{}19{}", &cleaned[..5], &cleaned[7..])
    } else if dept == "2B" {
        format!("{}18{}", &cleaned[..5], &cleaned[7..])
    } else {
        cleaned.clone()
    };

    if !calc.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sex = calc.as_bytes()[0] - b'0';
    if sex != 1 && sex != 2 {
        return false;
    }

    let month: u32 = calc[3..5].parse().unwrap();
    if !(1..=12).contains(&month) {
        return false;
    }

    let base: u64 = calc[..13].parse().unwrap();
    let expected_check = 97 - (base % 97);
    let actual_check: u64 = calc[13..15].parse().unwrap();

    actual_check == expected_check
}

/// Belgian Rijksregisternummer: `YYMMDD-XXX-CC`, mod-97 check digits,
/// trying the 1900s base first and retrying with a leading `2` for people
/// born in 2000 or later.
pub(crate) fn belgium_rrn_valid(value: &str) -> bool {
    let digits = digits_only(value);
    if digits.len() != 11 {
        return false;
    }

    let mm: u32 = digits[2..4].parse().unwrap();
    let dd: u32 = digits[4..6].parse().unwrap();
    if !(1..=12).contains(&mm) || !(1..=31).contains(&dd) {
        return false;
    }

    let base9: u64 = digits[..9].parse().unwrap();
    let check: u64 = digits[9..11].parse().unwrap();

    let expected_1900 = 97 - (base9 % 97);
    if check == expected_1900 {
        return true;
    }

    let base9_2000: u64 = format!("2{}", &digits[..9]).parse().unwrap();
    let expected_2000 = 97 - (base9_2000 % 97);

    check == expected_2000
}

const HETU_CHECK_SEQUENCE: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Finnish HETU (Henkilötunnus): `DDMMYYCZZZQ` with a century sign
/// (`+`/`-`/`A`) and a mod-31 check character.
pub(crate) fn finland_hetu_valid(value: &str) -> bool {
    let hetu: String = value
        .chars()
        .filter(|c| c.is_ascii() && *c != ' ')
        .collect::<String>()
        .to_uppercase();
    if hetu.len() != 11 {
        return false;
    }

    let dd: u32 = match hetu[0..2].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let mm: u32 = match hetu[2..4].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let yy: i32 = match hetu[4..6].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let century_sign = hetu.as_bytes()[6] as char;
    let individual = &hetu[7..10];
    let check_char = hetu.as_bytes()[10] as char;

    if !matches!(century_sign, '+' | '-' | 'A') {
        return false;
    }
    if !individual.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let year = match century_sign {
        '+' => 1800 + yy,
        '-' => 1900 + yy,
        _ => 2000 + yy,
    };
    if !is_valid_date(year, mm, dd) {
        return false;
    }

    let number_str = format!("{}{}", &hetu[0..6], individual);
    let number: u64 = number_str.parse().unwrap();
    let expected = HETU_CHECK_SEQUENCE.as_bytes()[(number % 31) as usize] as char;

    check_char == expected
}

/// Swedish personnummer: Luhn over the last 10 digits (`YYMMDDXXXX`).
pub(crate) fn sweden_personnummer_valid(value: &str) -> bool {
    let digits = digits_only(value);
    let ten = if digits.len() == 12 {
        digits[2..].to_string()
    } else if digits.len() == 10 {
        digits.clone()
    } else {
        return false;
    };

    let mm: u32 = match ten[2..4].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let dd: u32 = match ten[4..6].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if !(1..=12).contains(&mm) || !(1..=31).contains(&dd) {
        return false;
    }

    luhn(&ten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kr_rrn_rejects_bad_checksum() {
        // Matches regex shape but fails the weighted checksum (spec scenario 3).
        assert!(!kr_rrn_valid("900101-1234567"));
    }

    #[test]
    fn kr_rrn_rejects_bad_century_digit() {
        assert!(!kr_rrn_valid("900101-9234567"));
    }

    #[test]
    fn pesel_accepts_widened_century_bands() {
        // Month 81 (== 1800s band, month 1) with an otherwise plausible date
        // shape is accepted at the date-validation stage even though real
        // PESELs rarely use it (spec Open Question: reproduce verbatim).
        assert!(!poland_pesel_valid("00132212345")); // still needs checksum to pass
    }

    #[test]
    fn insee_corsica_department_remap_parses_without_panic() {
        // Corsica department codes must not cause a parse panic even when
        // the checksum ultimately fails.
        assert!(!france_insee_valid("1 85 2A 123 456 78"));
    }

    #[test]
    fn hetu_rejects_invalid_century_sign() {
        assert!(!finland_hetu_valid("010190Z123A"));
    }

    #[test]
    fn insee_and_hetu_never_panic_on_non_ascii_input() {
        assert!(!france_insee_valid("1É85É2AÉ123É456É78"));
        assert!(!finland_hetu_valid("010É90-123É"));
    }

    #[test]
    fn personnummer_rejects_wrong_length() {
        assert!(!sweden_personnummer_valid("12345"));
    }
}
