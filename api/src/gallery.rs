use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::image::{ImageRecord, ImageUuid};

// structs and types

pub type GalleryUuid = i64;

// entry uuids are strings because the editor synthesizes placeholder ids for
// entries that have not been saved yet; see temp_entry_uuid()
pub type EntryUuid = String;

pub const TEMP_ENTRY_PREFIX: &str = "temp-";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gallery {
    pub uid: String,
    pub mtime: i64,
    pub name: String,
    pub note: String,
    pub tags: HashSet<String>,
}

// one row of a gallery's ordered image list: the join record between gallery
// and image, plus the per-gallery metadata
//
// order is a persisted mirror of the entry's position.  it is allowed to go
// sparse while the user edits, but every save submits it re-derived from the
// position, so it is contiguous again after each round-trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub uuid: EntryUuid,
    pub image_uuid: ImageUuid,
    pub description: Option<String>,
    pub order: i64,
    pub image: ImageRecord,
}

// build the placeholder uuid for an entry staged on the client
//
// seq must not repeat within an editing session, since two staging batches
// can land inside the same millisecond
pub fn temp_entry_uuid(millis: i64, seq: u64) -> EntryUuid {
    format!("{TEMP_ENTRY_PREFIX}{millis}-{seq}")
}

pub fn entry_is_temp(uuid: &str) -> bool {
    uuid.starts_with(TEMP_ENTRY_PREFIX)
}

// messages

// fetch gallery details along with the full ordered entry list
endpoint!(GetGallery);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetGalleryReq {
    pub gallery_uuid: GalleryUuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetGalleryResp {
    pub gallery: Gallery,
    pub entries: Vec<GalleryEntry>,
}

// save the whole entry set in one batch
//
// entries still carrying a placeholder uuid are sent as Create so the server
// can mint the join record; everything else updates in place.  the response
// echoes the authoritative entry list, which the editor swallows wholesale to
// resolve the placeholders.
endpoint!(UpdateGalleryEntries);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EntrySave {
    Create {
        image_uuid: ImageUuid,
        description: Option<String>,
        order: i64,
    },
    Update {
        entry_uuid: EntryUuid,
        description: Option<String>,
        order: i64,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateGalleryEntriesReq {
    pub gallery_uuid: GalleryUuid,
    pub entries: Vec<EntrySave>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateGalleryEntriesResp {
    pub entries: Vec<GalleryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uuid_shape() {
        let uuid = temp_entry_uuid(1722470400123, 7);

        assert_eq!(uuid, "temp-1722470400123-7");
        assert!(entry_is_temp(&uuid));

        let pattern = regex::Regex::new(crate::TEMP_ENTRY_REGEX).unwrap();
        assert!(pattern.is_match(&uuid));
    }

    #[test]
    fn server_uuids_are_not_placeholders() {
        assert!(!entry_is_temp("8443"));
        assert!(!entry_is_temp("gallery-entry-8443"));

        let pattern = regex::Regex::new(crate::TEMP_ENTRY_REGEX).unwrap();
        assert!(!pattern.is_match("gallery-entry-8443"));
    }
}
