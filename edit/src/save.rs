use api::gallery::{EntrySave, GalleryEntry, entry_is_temp};

use crate::session::EditSession;

// build the batch payload for the save endpoint
//
// order is re-derived from the entry's position no matter what the in-memory
// numbering looks like: sparse numbering is a display-state tolerance, never
// something that goes over the wire.  entries still carrying a placeholder
// uuid become Create ops keyed by their image, so the server can mint the
// join record; the rest update in place.
pub fn save_payload(entries: &[GalleryEntry]) -> Vec<EntrySave> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            if entry_is_temp(&entry.uuid) {
                EntrySave::Create {
                    image_uuid: entry.image_uuid,
                    description: entry.description.clone(),
                    order: idx as i64,
                }
            } else {
                EntrySave::Update {
                    entry_uuid: entry.uuid.clone(),
                    description: entry.description.clone(),
                    order: idx as i64,
                }
            }
        })
        .collect()
}

impl EditSession {
    pub fn save_payload(&self) -> Vec<EntrySave> {
        save_payload(self.entries())
    }
}
