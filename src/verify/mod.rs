//! Built-in semantic verifiers, grouped one file per algorithm family.
//!
//! Every verifier is a plain `fn(&str) -> bool`: total, deterministic, and
//! never panicking. [`builtin_verifiers`] is the single place that knows
//! every name under which the registry exposes them.

mod card;
mod checksum;
mod date;
mod entropy;
mod ids;
mod locale;
mod misc;
mod network;
mod timestamp;
pub(crate) mod util;

pub(crate) use date::is_valid_date;

/// Every verifier the registry installs at startup, paired with the name
/// pattern files reference it by.
pub(crate) fn builtin_verifiers() -> Vec<(&'static str, fn(&str) -> bool)> {
    vec![
        ("luhn", checksum::luhn),
        ("iban_mod97", checksum::iban_mod97),
        ("india_aadhaar_valid", checksum::india_aadhaar_valid),
        ("cn_national_id_valid", checksum::cn_national_id_valid),
        ("tw_national_id_valid", checksum::tw_national_id_valid),
        ("india_pan_valid", checksum::india_pan_valid),
        ("kr_business_registration_valid", checksum::kr_business_registration_valid),
        ("kr_corporate_registration_valid", checksum::kr_corporate_registration_valid),
        ("jp_my_number_valid", checksum::jp_my_number_valid),
        ("netherlands_bsn_valid", checksum::netherlands_bsn_valid),
        ("spain_dni_valid", checksum::spain_dni_valid),
        ("spain_nie_valid", checksum::spain_nie_valid),
        ("us_ssn_valid", checksum::us_ssn_valid),
        ("kr_rrn_valid", ids::kr_rrn_valid),
        ("kr_alien_registration_valid", ids::kr_alien_registration_valid),
        ("poland_pesel_valid", ids::poland_pesel_valid),
        ("france_insee_valid", ids::france_insee_valid),
        ("belgium_rrn_valid", ids::belgium_rrn_valid),
        ("finland_hetu_valid", ids::finland_hetu_valid),
        ("sweden_personnummer_valid", ids::sweden_personnummer_valid),
        ("high_entropy_token", entropy::high_entropy_token),
        ("not_repeating_pattern", entropy::not_repeating_pattern),
        ("not_timestamp", timestamp::not_timestamp),
        ("generic_number_not_timestamp", timestamp::generic_number_not_timestamp),
        ("korean_bank_account_valid", timestamp::korean_bank_account_valid),
        ("ipv4_public", network::ipv4_public),
        ("us_zipcode_valid", locale::us_zipcode_valid),
        ("korean_zipcode_valid", locale::korean_zipcode_valid),
        ("credit_card_bin_valid", card::credit_card_bin_valid),
        ("contains_letter", misc::contains_letter),
        ("dms_coordinate", misc::dms_coordinate),
        ("cjk_name_standalone", misc::cjk_name_standalone),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: Vec<&str> = builtin_verifiers().into_iter().map(|(n, _)| n).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn every_builtin_is_total_on_empty_input() {
        for (name, f) in builtin_verifiers() {
            let _ = std::panic::catch_unwind(|| f(""))
                .unwrap_or_else(|_| panic!("verifier {name} panicked on empty input"));
        }
    }
}
