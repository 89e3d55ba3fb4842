//! Run the text pipeline over the fields of one file.

use crate::models::{FieldSet, FieldSlot};
use crate::transform::TransformOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    /// Fields the pipeline touches.
    pub fields: Vec<FieldSlot>,
    pub transform: TransformOptions,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self { fields: FieldSlot::ALL.to_vec(), transform: TransformOptions::default() }
    }
}

/// Rewrite every selected field that holds a value. Returns how many changed.
pub fn process_fields(fields: &mut FieldSet, opts: &ProcessOptions) -> usize {
    if opts.transform.is_noop() {
        return 0;
    }
    let mut changed = 0;
    for &slot in &opts.fields {
        let Some(value) = fields.value(slot) else {
            continue;
        };
        let processed = opts.transform.apply(value);
        if processed != value {
            debug!("{}: '{}' -> '{}'", slot.name(), value, processed);
            fields.set(slot, processed);
            changed += 1;
        }
    }
    changed
}
