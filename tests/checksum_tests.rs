use std::fs;
use std::path::Path;
use tempfile::tempdir;

use music_file_tag_masks::checksum::{fill_default_comment, format_checksum, Checksum, Sha256Checksum};
use music_file_tag_masks::models::{FieldSet, FieldSlot};

struct Fixed(u32);

impl Checksum for Fixed {
    fn checksum(&self, _path: &Path) -> anyhow::Result<u32> {
        Ok(self.0)
    }
}

#[test]
fn sha256_checksum_uses_leading_digest_bytes() {
    let td = tempdir().unwrap();
    let p = td.path().join("song.mp3");
    fs::write(&p, b"abc").unwrap();
    // SHA-256("abc") = ba7816bf...
    assert_eq!(Sha256Checksum.checksum(&p).unwrap(), 0xba78_16bf);
    assert_eq!(format_checksum(0xba78_16bf), "BA7816BF");
}

#[test]
fn missing_file_is_an_error() {
    let td = tempdir().unwrap();
    assert!(Sha256Checksum.checksum(&td.path().join("nope.mp3")).is_err());
}

#[test]
fn default_comment_fills_only_empty_comments() {
    let p = Path::new("unused.mp3");
    let mut fields = FieldSet::default();

    assert!(!fill_default_comment(&mut fields, p, &Fixed(0x1234), false).unwrap());
    assert_eq!(fields.get(FieldSlot::Comment), None);

    assert!(fill_default_comment(&mut fields, p, &Fixed(0x1234), true).unwrap());
    assert_eq!(fields.get(FieldSlot::Comment), Some("00001234"));

    assert!(!fill_default_comment(&mut fields, p, &Fixed(0xffff), true).unwrap());
    assert_eq!(fields.get(FieldSlot::Comment), Some("00001234"));
}
