//! Fill tag fields by matching a file path against a tag-fill mask.

use crate::fields::{lookup, IGNORED_CODE};
use crate::mask::{validate_tag_mask, MaskError};
use crate::models::{ExtractionItem, FieldSet};
use crate::transform::{space_to_underscore, underscore_to_space};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

/// Separator between directory levels in masks and paths.
pub const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Turn `_` and `%20` into spaces in both mask and path before matching.
    pub underscore_to_space: bool,
    /// Turn spaces into `_` in both mask and path before matching.
    pub space_to_underscore: bool,
    /// Write extracted values over fields that already hold one.
    pub overwrite: bool,
    /// Known audio extensions, as `*.mp3`, `.mp3` or `mp3`. Case-insensitive.
    pub file_extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            underscore_to_space: false,
            space_to_underscore: false,
            overwrite: false,
            file_extensions: default_file_extensions(),
        }
    }
}

pub fn default_file_extensions() -> Vec<String> {
    vec!["*.mp3", "*.flac", "*.ogg", "*.opus", "*.wav", "*.mp4", "*.m4a", "*.ape", "*.wv", "*.mpc"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A place where the path did not follow the mask. Matching carries on after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// Literal mask text that the path segment did not start with.
    LiteralPrefix { expected: String, found: String },
    /// Literal text after a code that never showed up in the path segment.
    SeparatorNotFound { separator: String, remaining: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// In mask order, `%i` items included.
    pub items: Vec<ExtractionItem>,
    pub mismatches: Vec<Mismatch>,
}

impl Extraction {
    pub fn into_items(self) -> Vec<ExtractionItem> {
        self.items
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Return true if `ext` matches any of the configured extension patterns
/// ("*.mp3", "mp3", ".mp3"), case-insensitive.
pub fn matches_extension(ext: &str, exts: &[String]) -> bool {
    let ext = ext.to_ascii_lowercase();
    for pat in exts {
        let mut p = pat.trim();
        if p.is_empty() {
            continue;
        }
        if let Some(stripped) = p.strip_prefix("*.") {
            p = stripped;
        } else if let Some(stripped) = p.strip_prefix('.') {
            p = stripped;
        }
        if ext == p.to_ascii_lowercase() {
            return true;
        }
    }
    false
}

/// Drop a known extension from the last path component. An unknown or
/// missing extension is logged and the path comes back untouched.
pub fn strip_extension<'a>(path: &'a str, known_extensions: &[String]) -> &'a str {
    let file_start = path.rfind(PATH_SEPARATOR).map(|i| i + 1).unwrap_or(0);
    match path[file_start..].rfind('.') {
        Some(dot) => {
            let dot = file_start + dot;
            let ext = &path[dot + 1..];
            if matches_extension(ext, known_extensions) {
                return &path[..dot];
            }
            warn!("Unknown extension '{}' in '{}', matching the whole name", ext, path);
            path
        }
        None => {
            warn!("No extension in '{}', matching the whole name", path);
            path
        }
    }
}

/// Skip `n` characters of `s`, or all of it.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Match one mask segment against one path segment.
fn match_segment(mask_seg: &str, path_seg: &str, extraction: &mut Extraction) {
    let mut mask_rest = mask_seg;
    let mut path_rest = path_seg;

    while let Some(percent) = mask_rest.find('%') {
        let literal = &mask_rest[..percent];
        if !literal.is_empty() {
            match path_rest.strip_prefix(literal) {
                Some(stripped) => path_rest = stripped,
                None => {
                    error!("Expected '{}' at the start of '{}' (mask segment '{}')", literal, path_rest, mask_seg);
                    extraction.mismatches.push(Mismatch::LiteralPrefix {
                        expected: literal.to_string(),
                        found: path_rest.to_string(),
                    });
                    path_rest = skip_chars(path_rest, literal.chars().count());
                }
            }
        }

        let Some(code) = mask_rest[percent + 1..].chars().next() else {
            break;
        };
        mask_rest = &mask_rest[percent + 1 + code.len_utf8()..];

        let separator = match mask_rest.find('%') {
            Some(next) => &mask_rest[..next],
            None => mask_rest,
        };

        let text = if separator.is_empty() {
            if mask_rest.is_empty() {
                // last code of the segment takes whatever is left
                std::mem::take(&mut path_rest)
            } else {
                // two codes back to back: nothing to split on
                ""
            }
        } else {
            match path_rest.find(separator) {
                Some(at) => {
                    let text = &path_rest[..at];
                    path_rest = &path_rest[at + separator.len()..];
                    text
                }
                None => {
                    error!("Separator '{}' not found in '{}' (mask segment '{}')", separator, path_rest, mask_seg);
                    extraction.mismatches.push(Mismatch::SeparatorNotFound {
                        separator: separator.to_string(),
                        remaining: path_rest.to_string(),
                    });
                    std::mem::take(&mut path_rest)
                }
            }
        };
        mask_rest = &mask_rest[separator.len()..];

        debug!("Matched %{} = '{}'", code, text);
        extraction.items.push(ExtractionItem::new(code, text));
    }
}

/// Match `path` (extension already removed) against a tag-fill mask.
///
/// Mask and path are split into directory segments and paired up from the
/// end, so extra leading segments on either side are ignored. Mismatches
/// are recorded and logged but never abort the match.
pub fn extract(mask: &str, path: &str, opts: &ScanOptions) -> Result<Extraction, MaskError> {
    validate_tag_mask(mask)?;

    let (mask, path) = if opts.underscore_to_space {
        (underscore_to_space(mask), underscore_to_space(path))
    } else if opts.space_to_underscore {
        (space_to_underscore(mask), space_to_underscore(path))
    } else {
        (mask.to_string(), path.to_string())
    };

    let mask_segments: Vec<&str> = mask.split(PATH_SEPARATOR).collect();
    let path_segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let depth = mask_segments.len().min(path_segments.len());

    let mut extraction = Extraction::default();
    let pairs = mask_segments[mask_segments.len() - depth..]
        .iter()
        .zip(&path_segments[path_segments.len() - depth..]);
    for (mask_seg, path_seg) in pairs {
        match_segment(mask_seg, path_seg, &mut extraction);
    }
    Ok(extraction)
}

/// [`extract`] on a path that still carries its extension.
pub fn extract_from_file_path(mask: &str, path: &str, opts: &ScanOptions) -> Result<Extraction, MaskError> {
    extract(mask, strip_extension(path, &opts.file_extensions), opts)
}

/// Store extracted values in `fields`. `%i` items and empty values are
/// skipped, and filled fields are kept unless `overwrite` is set.
/// Returns how many fields were written.
pub fn apply_extraction(items: &[ExtractionItem], fields: &mut FieldSet, overwrite: bool) -> usize {
    let mut written = 0;
    for item in items {
        if item.code == IGNORED_CODE || item.text.is_empty() {
            continue;
        }
        let Some(slot) = lookup(item.code) else {
            warn!("No field for code '%{}'", item.code);
            continue;
        };
        if overwrite || fields.is_empty(slot) {
            fields.set(slot, item.text.clone());
            written += 1;
        }
    }
    written
}
