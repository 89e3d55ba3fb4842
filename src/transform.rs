//! Text rewriters applied to field values and generated file names.
//!
//! The steps always run in the order they are declared in
//! [`TransformOptions`]; they do not commute, so `apply` fixes the sequence
//! and each enabled step reads the previous step's output.

use crate::roman::is_valid_roman_word;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("[ _]{2,}").expect("separator run pattern"));

/// Letters after these characters are upper-cased by title case.
const CAPITALIZE_AFTER: [char; 8] = ['(', '[', '{', '"', ':', '.', '`', '-'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFold {
    Upper,
    Lower,
}

/// Replace every `from` with `to`. An empty `from` puts `to` between characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// `_` and `%20` become spaces.
    pub underscore_to_space: bool,
    pub space_to_underscore: bool,
    pub insert_space_before_uppercase: bool,
    /// Runs of spaces/underscores shrink to their first character.
    pub collapse_spaces: bool,
    pub substitute: Option<Substitution>,
    pub case: Option<CaseFold>,
    pub first_letter_uppercase: bool,
    pub title_case: bool,
    pub detect_roman_numerals: bool,
    pub remove_spaces: bool,
    pub title_case_exemptions: Vec<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            underscore_to_space: false,
            space_to_underscore: false,
            insert_space_before_uppercase: false,
            collapse_spaces: false,
            substitute: None,
            case: None,
            first_letter_uppercase: false,
            title_case: false,
            detect_roman_numerals: false,
            remove_spaces: false,
            title_case_exemptions: default_title_case_exemptions(),
        }
    }
}

pub fn default_title_case_exemptions() -> Vec<String> {
    [
        "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "nor", "of", "on", "or",
        "over", "the", "to", "upon", "vs", "with",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl TransformOptions {
    /// True when no step is enabled.
    pub fn is_noop(&self) -> bool {
        !(self.underscore_to_space
            || self.space_to_underscore
            || self.insert_space_before_uppercase
            || self.collapse_spaces
            || self.substitute.is_some()
            || self.case.is_some()
            || self.first_letter_uppercase
            || self.title_case
            || self.remove_spaces)
    }

    pub fn apply(&self, input: &str) -> String {
        let mut s = input.to_string();
        if self.underscore_to_space {
            s = underscore_to_space(&s);
        }
        if self.space_to_underscore {
            s = space_to_underscore(&s);
        }
        if self.insert_space_before_uppercase {
            s = insert_space_before_uppercase(&s);
        }
        if self.collapse_spaces {
            s = collapse_spaces(&s);
        }
        if let Some(sub) = &self.substitute {
            s = substitute(&s, &sub.from, &sub.to);
        }
        match self.case {
            Some(CaseFold::Upper) => s = s.to_uppercase(),
            Some(CaseFold::Lower) => s = s.to_lowercase(),
            None => {}
        }
        if self.first_letter_uppercase {
            s = first_letter_uppercase(&s);
        }
        if self.title_case {
            s = title_case(&s, &self.title_case_exemptions, self.detect_roman_numerals);
        }
        if self.remove_spaces {
            s = remove_spaces(&s);
        }
        s
    }
}

pub fn underscore_to_space(s: &str) -> String {
    s.replace("%20", " ").replace('_', " ")
}

pub fn space_to_underscore(s: &str) -> String {
    s.replace(' ', "_")
}

/// "HelloWorld" -> "Hello World". Nothing is inserted before a leading
/// capital or after an existing space.
pub fn insert_space_before_uppercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p != ' ') {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

pub fn collapse_spaces(s: &str) -> String {
    SEPARATOR_RUN
        .replace_all(s, |caps: &regex::Captures| caps[0][..1].to_string())
        .into_owned()
}

pub fn substitute(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        let mut out = String::with_capacity(s.len() + s.len() * to.len());
        for (i, c) in s.chars().enumerate() {
            if i > 0 {
                out.push_str(to);
            }
            out.push(c);
        }
        return out;
    }
    s.split(from).collect::<Vec<_>>().join(to)
}

/// Lower-case everything, then upper-case the first character.
pub fn first_letter_uppercase(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn remove_spaces(s: &str) -> String {
    s.replace(' ', "")
}

fn is_word_separator(c: char) -> bool {
    c == ' ' || c == '_'
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title case in the style of the Chicago manual.
///
/// Every word gets a capital first letter except the words listed in
/// `exemptions`, which stay lower case unless they open or close the string.
/// With `detect_roman` a word that is a canonical roman numeral is fully
/// upper-cased. Letters following `( [ { " : . ` -` are capitalized last.
pub fn title_case(s: &str, exemptions: &[String], detect_roman: bool) -> String {
    let lower = s.to_lowercase();

    // (start, end) byte spans of the words
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in lower.char_indices() {
        match (is_word_separator(c), start) {
            (true, Some(st)) => {
                spans.push((st, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(st) = start {
        spans.push((st, lower.len()));
    }

    let mut out = String::with_capacity(lower.len());
    let mut cursor = 0;
    let last = spans.len().saturating_sub(1);
    for (index, &(st, end)) in spans.iter().enumerate() {
        out.push_str(&lower[cursor..st]);
        let word = &lower[st..end];
        let roman_len = if detect_roman { is_valid_roman_word(word) } else { 0 };
        if roman_len > 0 {
            out.push_str(&word[..roman_len].to_uppercase());
            out.push_str(&word[roman_len..]);
        } else if index != 0 && index != last && exemptions.iter().any(|e| e.to_lowercase() == word) {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
        cursor = end;
    }
    out.push_str(&lower[cursor..]);

    let mut swept = String::with_capacity(out.len());
    let mut prev: Option<char> = None;
    for c in out.chars() {
        if c.is_lowercase() && prev.is_some_and(|p| CAPITALIZE_AFTER.contains(&p)) {
            swept.extend(c.to_uppercase());
        } else {
            swept.push(c);
        }
        prev = Some(c);
    }
    swept
}
