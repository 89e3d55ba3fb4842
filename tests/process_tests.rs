use music_file_tag_masks::models::{FieldSet, FieldSlot};
use music_file_tag_masks::process::{process_fields, ProcessOptions};
use music_file_tag_masks::transform::{CaseFold, TransformOptions};

#[test]
fn only_selected_fields_are_rewritten() {
    let mut fields = FieldSet::default();
    fields.set(FieldSlot::Title, "the_great_gig_in_the_sky");
    fields.set(FieldSlot::Artist, "pink_floyd");
    fields.set(FieldSlot::Album, "the_dark_side");

    let opts = ProcessOptions {
        fields: vec![FieldSlot::Title, FieldSlot::Artist],
        transform: TransformOptions { underscore_to_space: true, title_case: true, ..TransformOptions::default() },
    };
    assert_eq!(process_fields(&mut fields, &opts), 2);
    assert_eq!(fields.get(FieldSlot::Title), Some("The Great Gig in the Sky"));
    assert_eq!(fields.get(FieldSlot::Artist), Some("Pink Floyd"));
    assert_eq!(fields.get(FieldSlot::Album), Some("the_dark_side"));
}

#[test]
fn unchanged_and_empty_fields_are_not_counted() {
    let mut fields = FieldSet::default();
    fields.set(FieldSlot::Genre, "ROCK");
    fields.set(FieldSlot::Comment, "");

    let opts = ProcessOptions {
        transform: TransformOptions { case: Some(CaseFold::Upper), ..TransformOptions::default() },
        ..ProcessOptions::default()
    };
    assert_eq!(process_fields(&mut fields, &opts), 0);
    assert_eq!(fields.get(FieldSlot::Comment), Some(""));
}

#[test]
fn disabled_pipeline_changes_nothing() {
    let mut fields = FieldSet::default();
    fields.set(FieldSlot::Title, "a  b");
    assert_eq!(process_fields(&mut fields, &ProcessOptions::default()), 0);
    assert_eq!(fields.get(FieldSlot::Title), Some("a  b"));
}
