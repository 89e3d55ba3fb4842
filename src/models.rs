use serde::{Deserialize, Serialize};

/// One metadata field an audio file can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSlot {
    Title,
    Artist,
    AlbumArtist,
    Album,
    DiscNumber,
    Year,
    TrackNumber,
    TrackTotal,
    Genre,
    Comment,
    Composer,
    OriginalArtist,
    Copyright,
    Url,
    EncodedBy,
}

impl FieldSlot {
    pub const ALL: [FieldSlot; 15] = [
        FieldSlot::Title,
        FieldSlot::Artist,
        FieldSlot::AlbumArtist,
        FieldSlot::Album,
        FieldSlot::DiscNumber,
        FieldSlot::Year,
        FieldSlot::TrackNumber,
        FieldSlot::TrackTotal,
        FieldSlot::Genre,
        FieldSlot::Comment,
        FieldSlot::Composer,
        FieldSlot::OriginalArtist,
        FieldSlot::Copyright,
        FieldSlot::Url,
        FieldSlot::EncodedBy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldSlot::Title => "title",
            FieldSlot::Artist => "artist",
            FieldSlot::AlbumArtist => "album_artist",
            FieldSlot::Album => "album",
            FieldSlot::DiscNumber => "disc_number",
            FieldSlot::Year => "year",
            FieldSlot::TrackNumber => "track_number",
            FieldSlot::TrackTotal => "track_total",
            FieldSlot::Genre => "genre",
            FieldSlot::Comment => "comment",
            FieldSlot::Composer => "composer",
            FieldSlot::OriginalArtist => "original_artist",
            FieldSlot::Copyright => "copyright",
            FieldSlot::Url => "url",
            FieldSlot::EncodedBy => "encoded_by",
        }
    }
}

/// The metadata fields of one file. `None` and `Some("")` both count as
/// "no value" when matching, but are kept apart for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub disc_number: Option<String>,
    pub year: Option<String>,
    pub track_number: Option<String>,
    pub track_total: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,
    pub composer: Option<String>,
    pub original_artist: Option<String>,
    pub copyright: Option<String>,
    pub url: Option<String>,
    pub encoded_by: Option<String>,
}

impl FieldSet {
    pub fn get(&self, slot: FieldSlot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    /// The value of `slot` if it is present and non-empty.
    pub fn value(&self, slot: FieldSlot) -> Option<&str> {
        self.get(slot).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self, slot: FieldSlot) -> bool {
        self.value(slot).is_none()
    }

    pub fn set(&mut self, slot: FieldSlot, value: impl Into<String>) {
        *self.slot_mut(slot) = Some(value.into());
    }

    pub fn clear(&mut self, slot: FieldSlot) {
        *self.slot_mut(slot) = None;
    }

    fn slot_ref(&self, slot: FieldSlot) -> &Option<String> {
        match slot {
            FieldSlot::Title => &self.title,
            FieldSlot::Artist => &self.artist,
            FieldSlot::AlbumArtist => &self.album_artist,
            FieldSlot::Album => &self.album,
            FieldSlot::DiscNumber => &self.disc_number,
            FieldSlot::Year => &self.year,
            FieldSlot::TrackNumber => &self.track_number,
            FieldSlot::TrackTotal => &self.track_total,
            FieldSlot::Genre => &self.genre,
            FieldSlot::Comment => &self.comment,
            FieldSlot::Composer => &self.composer,
            FieldSlot::OriginalArtist => &self.original_artist,
            FieldSlot::Copyright => &self.copyright,
            FieldSlot::Url => &self.url,
            FieldSlot::EncodedBy => &self.encoded_by,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: FieldSlot) -> &mut Option<String> {
        match slot {
            FieldSlot::Title => &mut self.title,
            FieldSlot::Artist => &mut self.artist,
            FieldSlot::AlbumArtist => &mut self.album_artist,
            FieldSlot::Album => &mut self.album,
            FieldSlot::DiscNumber => &mut self.disc_number,
            FieldSlot::Year => &mut self.year,
            FieldSlot::TrackNumber => &mut self.track_number,
            FieldSlot::TrackTotal => &mut self.track_total,
            FieldSlot::Genre => &mut self.genre,
            FieldSlot::Comment => &mut self.comment,
            FieldSlot::Composer => &mut self.composer,
            FieldSlot::OriginalArtist => &mut self.original_artist,
            FieldSlot::Copyright => &mut self.copyright,
            FieldSlot::Url => &mut self.url,
            FieldSlot::EncodedBy => &mut self.encoded_by,
        }
    }
}

/// A `(code, text)` pair produced by matching a path against a mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionItem {
    pub code: char,
    pub text: String,
}

impl ExtractionItem {
    pub fn new(code: char, text: impl Into<String>) -> Self {
        Self { code, text: text.into() }
    }
}

/// Intermediate piece of a path being generated from a rename mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskItem {
    /// Literal text before the first code.
    Leading(String),
    /// Literal text after the last code.
    Trailing(String),
    /// Literal text between two codes.
    Separator(String),
    /// Literal text between two codes that contains a path separator.
    DirectorySeparator(String),
    Field(String),
    EmptyField,
}

impl MaskItem {
    pub fn text(&self) -> &str {
        match self {
            MaskItem::Leading(s)
            | MaskItem::Trailing(s)
            | MaskItem::Separator(s)
            | MaskItem::DirectorySeparator(s)
            | MaskItem::Field(s) => s,
            MaskItem::EmptyField => "",
        }
    }
}
