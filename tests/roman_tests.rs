use music_file_tag_masks::roman::{int_to_roman, is_valid_roman_word, roman_to_int, RomanError};

#[test]
fn every_value_round_trips() {
    for n in 0..=5000 {
        let numeral = int_to_roman(n).unwrap();
        assert_eq!(roman_to_int(&numeral), Ok(n), "{numeral}");
    }
}

#[test]
fn encodes_canonical_subtractive_forms() {
    assert_eq!(int_to_roman(4).unwrap(), "IV");
    assert_eq!(int_to_roman(9).unwrap(), "IX");
    assert_eq!(int_to_roman(40).unwrap(), "XL");
    assert_eq!(int_to_roman(90).unwrap(), "XC");
    assert_eq!(int_to_roman(900).unwrap(), "CM");
    assert_eq!(int_to_roman(1994).unwrap(), "MCMXCIV");
    assert_eq!(int_to_roman(0).unwrap(), "N");
    assert_eq!(int_to_roman(5001), Err(RomanError::OutOfRange(5001)));
}

#[test]
fn decode_is_case_insensitive() {
    assert_eq!(roman_to_int("xiv"), Ok(14));
    assert_eq!(roman_to_int("McMxCiV"), Ok(1994));
    assert_eq!(roman_to_int("n"), Ok(0));
}

#[test]
fn decode_rejects_malformed_numerals() {
    for bad in ["", "IIIII", "VV", "IC", "VX", "IIX", "NX", "XN", "ABC"] {
        assert!(roman_to_int(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn word_validator_rejects_non_canonical_runs() {
    assert_eq!(is_valid_roman_word("IIIII"), 0);
    assert_eq!(is_valid_roman_word("iiii"), 0);
    assert_eq!(is_valid_roman_word("vv"), 0);
}

#[test]
fn word_validator_stops_at_separators() {
    assert_eq!(is_valid_roman_word("iv"), 2);
    assert_eq!(is_valid_roman_word("XIV"), 3);
    assert_eq!(is_valid_roman_word("iii_part"), 3);
    assert_eq!(is_valid_roman_word("ii."), 2);
    assert_eq!(is_valid_roman_word("vi-b"), 2);
}

#[test]
fn word_validator_refuses_other_letters() {
    assert_eq!(is_valid_roman_word(""), 0);
    assert_eq!(is_valid_roman_word("ivy"), 0);
    assert_eq!(is_valid_roman_word("n"), 0);
    assert_eq!(is_valid_roman_word("hello"), 0);
}
