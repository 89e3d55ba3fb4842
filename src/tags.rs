use crate::models::{FieldSet, FieldSlot};
use lofty::file::TaggedFileExt;
use lofty::probe::read_from_path;
use lofty::tag::{ItemKey, Tag};
use std::path::Path;

fn item_key(slot: FieldSlot) -> ItemKey {
    match slot {
        FieldSlot::Title => ItemKey::TrackTitle,
        FieldSlot::Artist => ItemKey::TrackArtist,
        FieldSlot::AlbumArtist => ItemKey::AlbumArtist,
        FieldSlot::Album => ItemKey::AlbumTitle,
        FieldSlot::DiscNumber => ItemKey::DiscNumber,
        FieldSlot::Year => ItemKey::RecordingDate,
        FieldSlot::TrackNumber => ItemKey::TrackNumber,
        FieldSlot::TrackTotal => ItemKey::TrackTotal,
        FieldSlot::Genre => ItemKey::Genre,
        FieldSlot::Comment => ItemKey::Comment,
        FieldSlot::Composer => ItemKey::Composer,
        FieldSlot::OriginalArtist => ItemKey::OriginalArtist,
        FieldSlot::Copyright => ItemKey::CopyrightMessage,
        FieldSlot::Url => ItemKey::AudioFileUrl,
        FieldSlot::EncodedBy => ItemKey::EncodedBy,
    }
}

/// Copy the fields of a lofty tag into a `FieldSet`.
pub fn fields_from_tag(tag: &Tag) -> FieldSet {
    let mut fields = FieldSet::default();
    for slot in FieldSlot::ALL {
        if let Some(value) = tag.get_string(&item_key(slot)) {
            fields.set(slot, value);
        }
    }
    fields
}

/// Read the metadata fields of an audio file.
/// A readable file without any tag yields an empty `FieldSet`.
pub fn read_fields(path: &Path) -> anyhow::Result<FieldSet> {
    let tagged_file = read_from_path(path)?;

    let tag: Option<&Tag> = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    Ok(tag.map(fields_from_tag).unwrap_or_default())
}
