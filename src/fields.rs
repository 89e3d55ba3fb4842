//! Mask code letters and the field each one stands for.

use crate::models::FieldSlot;

/// Code for text that is matched but never stored.
pub const IGNORED_CODE: char = 'i';

/// Every letter that may follow `%` in a mask.
pub const CODE_ALPHABET: [char; 16] = [
    'a', 'b', 'c', 'd', 'e', 'g', 'i', 'l', 'n', 'o', 'p', 'r', 't', 'u', 'y', 'z',
];

pub fn is_valid_code(code: char) -> bool {
    CODE_ALPHABET.contains(&code)
}

/// Resolve a code letter to its field. `i` is a valid code without a field.
pub fn lookup(code: char) -> Option<FieldSlot> {
    let slot = match code {
        'a' => FieldSlot::Artist,
        'b' => FieldSlot::Album,
        'c' => FieldSlot::Comment,
        'd' => FieldSlot::DiscNumber,
        'e' => FieldSlot::EncodedBy,
        'g' => FieldSlot::Genre,
        'l' => FieldSlot::TrackTotal,
        'n' => FieldSlot::TrackNumber,
        'o' => FieldSlot::OriginalArtist,
        'p' => FieldSlot::Composer,
        'r' => FieldSlot::Copyright,
        't' => FieldSlot::Title,
        'u' => FieldSlot::Url,
        'y' => FieldSlot::Year,
        'z' => FieldSlot::AlbumArtist,
        _ => return None,
    };
    Some(slot)
}

/// Reverse of [`lookup`].
pub fn code_for(slot: FieldSlot) -> char {
    match slot {
        FieldSlot::Artist => 'a',
        FieldSlot::Album => 'b',
        FieldSlot::Comment => 'c',
        FieldSlot::DiscNumber => 'd',
        FieldSlot::EncodedBy => 'e',
        FieldSlot::Genre => 'g',
        FieldSlot::TrackTotal => 'l',
        FieldSlot::TrackNumber => 'n',
        FieldSlot::OriginalArtist => 'o',
        FieldSlot::Composer => 'p',
        FieldSlot::Copyright => 'r',
        FieldSlot::Title => 't',
        FieldSlot::Url => 'u',
        FieldSlot::Year => 'y',
        FieldSlot::AlbumArtist => 'z',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_round_trips_through_its_code() {
        for slot in FieldSlot::ALL {
            assert_eq!(lookup(code_for(slot)), Some(slot));
        }
    }

    #[test]
    fn ignored_code_is_valid_but_has_no_slot() {
        assert!(is_valid_code(IGNORED_CODE));
        assert_eq!(lookup(IGNORED_CODE), None);
        assert!(!is_valid_code('x'));
        assert_eq!(lookup('x'), None);
    }
}
