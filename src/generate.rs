//! Build a new file path from tag values and a rename mask.

use crate::extract::PATH_SEPARATOR;
use crate::fields::{lookup, IGNORED_CODE};
use crate::mask::{validate_rename_mask, MaskError};
use crate::models::{FieldSet, FieldSlot, MaskItem};
use crate::transform::TransformOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Characters no file name may contain.
const ALWAYS_ILLEGAL: [char; 2] = ['/', '\\'];
/// Characters refused by Windows file systems.
const WINDOWS_ILLEGAL: [char; 7] = [':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameEncoding {
    #[default]
    Utf8,
    Ascii,
}

impl fmt::Display for FilenameEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenameEncoding::Utf8 => f.write_str("UTF-8"),
            FilenameEncoding::Ascii => f.write_str("ASCII"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameOptions {
    pub underscore_to_space: bool,
    pub space_to_underscore: bool,
    pub remove_spaces: bool,
    /// Written in place of characters a file name cannot hold.
    pub replacement: String,
    pub windows_compatible: bool,
    /// Zero-pad numeric track number and track total to this width.
    pub track_padding: Option<usize>,
    pub encoding: FilenameEncoding,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            underscore_to_space: false,
            space_to_underscore: false,
            remove_spaces: false,
            replacement: "-".to_string(),
            windows_compatible: false,
            track_padding: None,
            encoding: FilenameEncoding::Utf8,
        }
    }
}

impl RenameOptions {
    fn pipeline(&self) -> TransformOptions {
        TransformOptions {
            underscore_to_space: self.underscore_to_space,
            space_to_underscore: self.space_to_underscore,
            remove_spaces: self.remove_spaces,
            ..TransformOptions::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidMask(#[from] MaskError),
    #[error("'{name}' cannot be represented as a {encoding} file name")]
    Encoding { name: String, encoding: FilenameEncoding },
}

/// Make a field value safe to use as (part of) one path component.
pub fn sanitize_filename_component(value: &str, opts: &RenameOptions) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let illegal = ALWAYS_ILLEGAL.contains(&c)
            || c.is_control()
            || (opts.windows_compatible && WINDOWS_ILLEGAL.contains(&c));
        if illegal {
            out.push_str(&opts.replacement);
        } else {
            out.push(c);
        }
    }
    if opts.windows_compatible {
        let trimmed = out.trim_end_matches(['.', ' ']).len();
        out.truncate(trimmed);
    }
    out
}

fn pad_number(value: &str, width: usize) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>width$}", value, width = width)
    } else {
        value.to_string()
    }
}

fn prepare_field(slot: FieldSlot, value: &str, opts: &RenameOptions, pipeline: &TransformOptions) -> String {
    let value = match (slot, opts.track_padding) {
        (FieldSlot::TrackNumber | FieldSlot::TrackTotal, Some(width)) => pad_number(value, width),
        _ => value.to_string(),
    };
    pipeline.apply(&sanitize_filename_component(&value, opts))
}

/// Split a rename mask into items, last item of the mask first.
pub fn mask_items(mask: &str, fields: &FieldSet, opts: &RenameOptions) -> Vec<MaskItem> {
    let pipeline = opts.pipeline();
    let mut items = Vec::new();
    let mut rest = mask;
    let mut first = true;

    while let Some(percent) = rest.rfind('%') {
        let Some(code) = rest[percent + 1..].chars().next() else {
            break;
        };
        let after = &rest[percent + 1 + code.len_utf8()..];
        if !after.is_empty() {
            let item = if first {
                MaskItem::Trailing(after.to_string())
            } else if after.contains(PATH_SEPARATOR) {
                MaskItem::DirectorySeparator(after.to_string())
            } else {
                MaskItem::Separator(after.to_string())
            };
            items.push(item);
        }
        first = false;

        let slot = if code == IGNORED_CODE { None } else { lookup(code) };
        let item = match slot.and_then(|slot| fields.value(slot).map(|v| (slot, v))) {
            Some((slot, value)) => MaskItem::Field(prepare_field(slot, value, opts, &pipeline)),
            None => MaskItem::EmptyField,
        };
        items.push(item);
        rest = &rest[..percent];
    }

    if !rest.is_empty() {
        items.push(MaskItem::Leading(rest.to_string()));
    }
    items
}

/// Join items (last item of the mask first) into a path, leaving out the
/// literal text around empty fields.
pub fn assemble(items: &[MaskItem]) -> String {
    let mut result = String::new();
    let mut k = 0;
    while k < items.len() {
        // toward the start of the mask: not yet joined
        let before = items.get(k + 1);
        // toward the end of the mask: already joined
        let after = k.checked_sub(1).and_then(|i| items.get(i));

        match &items[k] {
            MaskItem::Trailing(text) => {
                if !matches!(before, Some(MaskItem::EmptyField)) {
                    result.insert_str(0, text);
                }
            }
            MaskItem::EmptyField => match before {
                Some(MaskItem::Separator(_)) => {
                    if !matches!(after, Some(MaskItem::Field(_))) {
                        k += 1;
                    }
                }
                None | Some(MaskItem::Leading(_)) | Some(MaskItem::DirectorySeparator(_)) => {
                    if let Some(MaskItem::Separator(sep)) = after {
                        if result.starts_with(sep.as_str()) {
                            result.replace_range(..sep.len(), "");
                        }
                    }
                }
                _ => {}
            },
            item => result.insert_str(0, item.text()),
        }
        k += 1;
    }
    result
}

/// Generate a path from `fields` using a rename mask.
///
/// Returns `Ok(None)` when the mask yields nothing. A relative mask that
/// names a directory is placed under `current_directory` when one is given.
pub fn generate(
    mask: &str,
    fields: &FieldSet,
    current_directory: Option<&str>,
    opts: &RenameOptions,
) -> Result<Option<String>, GenerateError> {
    validate_rename_mask(mask)?;

    let items = mask_items(mask, fields, opts);
    debug!("Mask '{}' split into {:?}", mask, items);
    let name = assemble(&items);
    if name.is_empty() {
        debug!("Mask '{}' produced an empty name", mask);
        return Ok(None);
    }

    let relative = mask.contains(PATH_SEPARATOR) && !mask.starts_with(PATH_SEPARATOR);
    let path = match current_directory {
        Some(dir) if relative && dir.ends_with(PATH_SEPARATOR) => format!("{dir}{name}"),
        Some(dir) if relative => format!("{dir}{PATH_SEPARATOR}{name}"),
        _ => name,
    };

    check_encoding(&path, opts.encoding)?;
    Ok(Some(path))
}

fn check_encoding(name: &str, encoding: FilenameEncoding) -> Result<(), GenerateError> {
    let representable = !name.contains('\0')
        && match encoding {
            FilenameEncoding::Utf8 => true,
            FilenameEncoding::Ascii => name.is_ascii(),
        };
    if representable {
        Ok(())
    } else {
        warn!("Generated name '{}' cannot be written as {}", name, encoding);
        Err(GenerateError::Encoding { name: name.to_string(), encoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_last_of_mask_first() {
        let mut fields = FieldSet::default();
        fields.set(FieldSlot::Artist, "A");
        let items = mask_items("x%a - %t!", &fields, &RenameOptions::default());
        assert_eq!(
            items,
            vec![
                MaskItem::Trailing("!".into()),
                MaskItem::EmptyField,
                MaskItem::Separator(" - ".into()),
                MaskItem::Field("A".into()),
                MaskItem::Leading("x".into()),
            ]
        );
    }

    #[test]
    fn padding_leaves_non_numeric_values_alone() {
        assert_eq!(pad_number("7", 2), "07");
        assert_eq!(pad_number("7/12", 2), "7/12");
    }
}
