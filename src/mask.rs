//! Mask grammar checks.
//!
//! A mask mixes literal text with codes written `%<letter>`. Masks are
//! re-validated on every use; nothing parsed from them is kept around.

use crate::fields::is_valid_code;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Substrings that would let a rename mask climb out of its directory.
const PATH_ESCAPES: [&str; 3] = ["//", "./", "../"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// Drives filling tags from a file path.
    TagFill,
    /// Drives building a file path from tags.
    Rename,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask is empty")]
    Empty,
    #[error("mask contains no field code")]
    NoCode,
    #[error("unknown field code '%{code}' at byte {position}")]
    UnknownCode { code: char, position: usize },
    #[error("'%' at byte {position} is not followed by a field code")]
    DanglingPercent { position: usize },
    #[error("mask contains '{pattern}', which is not allowed in a rename mask")]
    PathEscape { pattern: &'static str },
}

pub fn validate(mask: &str, kind: MaskKind) -> Result<(), MaskError> {
    match kind {
        MaskKind::TagFill => validate_tag_mask(mask),
        MaskKind::Rename => validate_rename_mask(mask),
    }
}

pub fn is_valid(mask: &str, kind: MaskKind) -> bool {
    validate(mask, kind).is_ok()
}

/// A tag-fill mask needs at least one code; literal text may go anywhere.
pub fn validate_tag_mask(mask: &str) -> Result<(), MaskError> {
    if mask.is_empty() {
        return Err(MaskError::Empty);
    }
    if count_codes(mask)? == 0 {
        return Err(MaskError::NoCode);
    }
    Ok(())
}

/// A rename mask may hold no code at all, but must not escape its directory.
pub fn validate_rename_mask(mask: &str) -> Result<(), MaskError> {
    if let Some(pattern) = PATH_ESCAPES.into_iter().find(|p| mask.contains(p)) {
        return Err(MaskError::PathEscape { pattern });
    }
    count_codes(mask).map(|_| ())
}

/// Walk the codes from the right, checking each letter against the alphabet.
fn count_codes(mask: &str) -> Result<usize, MaskError> {
    let mut rest = mask;
    let mut count = 0;
    while let Some(position) = rest.rfind('%') {
        match rest[position + 1..].chars().next() {
            None => return Err(MaskError::DanglingPercent { position }),
            Some(code) if !is_valid_code(code) => {
                warn!("Invalid code '%{}' in mask '{}'", code, mask);
                return Err(MaskError::UnknownCode { code, position });
            }
            Some(_) => count += 1,
        }
        rest = &rest[..position];
    }
    Ok(count)
}
