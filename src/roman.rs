//! Roman numeral encoding, decoding and word detection.

use thiserror::Error;

pub const MAX_ROMAN: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    #[error("{0} cannot be written as a roman numeral (allowed range is 0..=5000)")]
    OutOfRange(u32),
    #[error("'{0}' is not a valid roman numeral")]
    Invalid(String),
}

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Characters that end a word when scanning for a numeral.
const WORD_SEPARATORS: [char; 5] = [' ', '_', '.', ',', '-'];

/// Canonical subtractive encoding. Zero is written as `N`.
pub fn int_to_roman(mut n: u32) -> Result<String, RomanError> {
    if n > MAX_ROMAN {
        return Err(RomanError::OutOfRange(n));
    }
    if n == 0 {
        return Ok("N".to_string());
    }
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    Ok(out)
}

fn symbol_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Longest run of one symbol that can appear in a numeral.
fn max_run(value: u32) -> usize {
    match value {
        1 | 10 | 100 => 4,
        1000 => 5,
        _ => 1,
    }
}

/// Case-insensitive decode. Rejects overlong runs and illegal subtractions.
pub fn roman_to_int(word: &str) -> Result<u32, RomanError> {
    let invalid = || RomanError::Invalid(word.to_string());
    if word.eq_ignore_ascii_case("n") {
        return Ok(0);
    }
    let values = word
        .chars()
        .map(symbol_value)
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(invalid)?;
    if values.is_empty() {
        return Err(invalid());
    }

    let mut total: u32 = 0;
    let mut run = 0;
    let mut prev: Option<u32> = None;
    let mut i = 0;
    while i < values.len() {
        let value = values[i];
        run = if prev == Some(value) { run + 1 } else { 1 };
        if run > max_run(value) {
            return Err(invalid());
        }

        match values.get(i + 1) {
            Some(&next) if next > value => {
                // Only I, X and C subtract, from the next two symbols up, and never from a run.
                if !(matches!(value, 1 | 10 | 100) && next <= value * 10 && run == 1) {
                    return Err(invalid());
                }
                // Whatever follows a subtractive pair must be smaller than the subtracted symbol.
                if values.get(i + 2).is_some_and(|&after| after >= value) {
                    return Err(invalid());
                }
                total += next - value;
                prev = Some(next);
                run = 1;
                i += 2;
            }
            _ => {
                total += value;
                prev = Some(value);
                i += 1;
            }
        }
    }
    if total > MAX_ROMAN {
        return Err(RomanError::OutOfRange(total));
    }
    Ok(total)
}

/// Length of the roman numeral at the start of `word`, or 0.
///
/// The numeral runs up to the first word separator (space, underscore,
/// period, comma or hyphen). It is accepted only if re-encoding its value
/// gives back the same letters, so non-canonical forms such as `IIII` or
/// `IIIII` are refused.
pub fn is_valid_roman_word(word: &str) -> usize {
    let mut len = 0;
    for c in word.chars() {
        if WORD_SEPARATORS.contains(&c) {
            break;
        }
        if !matches!(c.to_ascii_lowercase(), 'i' | 'v' | 'x' | 'l' | 'c' | 'd' | 'm') {
            return 0;
        }
        len += c.len_utf8();
    }
    if len == 0 {
        return 0;
    }

    let candidate = &word[..len];
    match roman_to_int(candidate).and_then(int_to_roman) {
        Ok(encoded) if encoded.eq_ignore_ascii_case(candidate) => len,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtractive_pair_is_followed_by_smaller_symbol() {
        assert_eq!(roman_to_int("XCIX"), Ok(99));
        assert!(roman_to_int("IXI").is_err());
    }
}
