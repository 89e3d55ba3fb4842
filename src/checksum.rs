//! File checksums and the "checksum as default comment" option.

use crate::models::{FieldSet, FieldSlot};
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub trait Checksum {
    fn checksum(&self, path: &Path) -> Result<u32>;
}

/// First four bytes of the SHA-256 digest of the file content, big endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Checksum;

impl Checksum for Sha256Checksum {
    fn checksum(&self, path: &Path) -> Result<u32> {
        let mut file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = file.read(&mut buf).with_context(|| format!("reading {}", path.display()))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        let digest = hasher.finalize();
        Ok(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
    }
}

pub fn format_checksum(sum: u32) -> String {
    format!("{:08X}", sum)
}

/// Put the file checksum into an empty comment. Returns true if the comment was written.
pub fn fill_default_comment(fields: &mut FieldSet, path: &Path, checksum: &dyn Checksum, enabled: bool) -> Result<bool> {
    if !enabled || !fields.is_empty(FieldSlot::Comment) {
        return Ok(false);
    }
    let sum = checksum.checksum(path)?;
    debug!("Default comment for {}: {:08X}", path.display(), sum);
    fields.set(FieldSlot::Comment, format_checksum(sum));
    Ok(true)
}
