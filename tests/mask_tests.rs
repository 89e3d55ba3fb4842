use music_file_tag_masks::mask::{self, validate_rename_mask, validate_tag_mask, MaskError, MaskKind};

#[test]
fn tag_mask_accepts_literal_text_anywhere() {
    assert!(validate_tag_mask("%a - %b/%n - %t").is_ok());
    assert!(validate_tag_mask("[%n] %t (%y)").is_ok());
    assert!(validate_tag_mask("%n%t").is_ok());
    assert!(validate_tag_mask("%i - %t").is_ok());
}

#[test]
fn tag_mask_needs_a_code() {
    assert_eq!(validate_tag_mask(""), Err(MaskError::Empty));
    assert_eq!(validate_tag_mask("just text"), Err(MaskError::NoCode));
}

#[test]
fn tag_mask_rejects_unknown_or_missing_code() {
    assert!(matches!(validate_tag_mask("%a - %x"), Err(MaskError::UnknownCode { code: 'x', .. })));
    assert!(matches!(validate_tag_mask("%a - %"), Err(MaskError::DanglingPercent { .. })));
    assert!(matches!(validate_tag_mask("%A"), Err(MaskError::UnknownCode { code: 'A', .. })));
}

#[test]
fn rename_mask_rejects_directory_escapes() {
    for m in ["%a//%t", "./%a - %t", "../%a", "%a/../%t"] {
        assert!(
            matches!(validate_rename_mask(m), Err(MaskError::PathEscape { .. })),
            "{m} should be rejected"
        );
    }
}

#[test]
fn rename_mask_without_codes_is_valid() {
    assert!(validate_rename_mask("Untitled").is_ok());
    assert!(validate_rename_mask("").is_ok());
    assert!(validate_rename_mask("%n - %a - %t").is_ok());
    assert!(validate_rename_mask("%a - %b/%n - %t").is_ok());
}

#[test]
fn rename_mask_rejects_unknown_code() {
    assert!(matches!(validate_rename_mask("%n - %q"), Err(MaskError::UnknownCode { code: 'q', .. })));
}

#[test]
fn validity_signal_follows_the_mask_kind() {
    assert!(mask::is_valid("Untitled", MaskKind::Rename));
    assert!(!mask::is_valid("Untitled", MaskKind::TagFill));
}
