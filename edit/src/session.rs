use std::collections::HashSet;

use tracing::{debug, warn};

use api::gallery::{EntryUuid, GalleryEntry, temp_entry_uuid};
use api::image::ImageUuid;

use crate::options::EditOptions;
use crate::order;
use crate::resolve::ImageResolver;

// gallery edit session
//
// owns the ordered entry list for one gallery while the user edits it.  every
// operation runs to completion against the in-memory list, and a host holds
// one session per gallery being edited, so there is no cross-talk and no
// locking.  the only async boundary is stage_images(), which appends rather
// than replacing and therefore tolerates edits made while a resolve is in
// flight.
//
// no operation here can fail for a caller-supplied uuid: lookups that miss
// degrade to no-ops, and the resolver boundary degrades to a toast.
#[derive(Clone, Debug, Default)]
pub struct EditSession {
    options: EditOptions,
    entries: Vec<GalleryEntry>,

    // presentational cursor for the drag overlay; carries no ordering meaning
    active_drag: Option<EntryUuid>,

    // two-step removal: request parks the uuid here until confirm or cancel
    pending_removal: Option<EntryUuid>,
    confirm_removal_visible: bool,

    // single transient status message, last write wins
    toast_visible: bool,
    toast_message: String,

    dirty: bool,
    temp_seq: u64,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditOptions) -> Self {
        EditSession {
            options,
            ..Default::default()
        }
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn active_drag(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    pub fn pending_removal(&self) -> Option<&str> {
        self.pending_removal.as_deref()
    }

    pub fn confirm_removal_visible(&self) -> bool {
        self.confirm_removal_visible
    }

    pub fn toast_visible(&self) -> bool {
        self.toast_visible
    }

    pub fn toast_message(&self) -> &str {
        &self.toast_message
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // replace the whole collection, used when loading a gallery and when a
    // successful save echoes back the authoritative entry list (resolving any
    // placeholder uuids)
    //
    // the drag and removal cursors may refer to uuids that no longer exist,
    // so they reset; a visible toast stays up, since the caller may have just
    // emitted it
    pub fn initialize(&mut self, entries: Vec<GalleryEntry>) {
        self.entries = entries;
        self.active_drag = None;
        self.pending_removal = None;
        self.confirm_removal_visible = false;
        self.dirty = false;
    }

    pub fn update_description(&mut self, uuid: &str, description: Option<String>) {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.uuid == uuid) else {
            debug!("description edit for missing entry {uuid}");
            return;
        };

        if entry.description != description {
            entry.description = description;
            self.dirty = true;
        }
    }

    // removal

    pub fn request_removal(&mut self, uuid: &str) {
        self.pending_removal = Some(uuid.to_owned());
        self.confirm_removal_visible = true;
    }

    // filter by uuid rather than splicing an index, so that a reorder landing
    // between request and confirm cannot remove the wrong entry
    pub fn confirm_removal(&mut self) -> bool {
        let pending = self.pending_removal.take();
        self.confirm_removal_visible = false;

        let Some(uuid) = pending else {
            return false;
        };

        let before = self.entries.len();
        self.entries.retain(|entry| entry.uuid != uuid);

        if self.entries.len() == before {
            debug!("removal confirmed for missing entry {uuid}");
            return false;
        }

        // the stored numbering is left sparse unless configured otherwise;
        // the save payload re-derives contiguous order either way
        if self.options.restamp_on_remove {
            order::restamp_order(&mut self.entries);
        }

        self.dirty = true;
        true
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
        self.confirm_removal_visible = false;
    }

    // drag

    pub fn begin_drag(&mut self, uuid: &str) {
        self.active_drag = Some(uuid.to_owned());
    }

    pub fn cancel_drag(&mut self) {
        self.active_drag = None;
    }

    // relocate the source entry to the target's slot
    //
    // dropping outside any target or onto oneself is a cancel, and either
    // entry vanishing mid-drag aborts the move rather than corrupting the
    // list.  returns whether the arrangement actually changed, so callers can
    // decide if the form went dirty.
    pub fn end_drag(&mut self, source: &str, target: Option<&str>) -> bool {
        self.active_drag = None;

        let Some(target) = target else {
            return false;
        };

        if source == target {
            return false;
        }

        let (Some(from), Some(to)) = (
            order::position(&self.entries, source),
            order::position(&self.entries, target),
        ) else {
            debug!("drag aborted, {source} or {target} no longer present");
            return false;
        };

        let before: Vec<EntryUuid> = self.entries.iter().map(|entry| entry.uuid.clone()).collect();

        order::relocate(&mut self.entries, from, to);

        if self
            .entries
            .iter()
            .map(|entry| entry.uuid.as_str())
            .eq(before.iter().map(|uuid| uuid.as_str()))
        {
            return false;
        }

        // leave the stored numbering alone when it already mirrors the new
        // arrangement, so a sequence of drags that lands back where it
        // started does not show up as a diff against the saved state
        if !order::order_matches_index(&self.entries) {
            order::restamp_order(&mut self.entries);
        }

        self.dirty = true;
        true
    }

    // staging

    // append freshly picked images to the end of the list under placeholder
    // uuids
    //
    // a uuid that fails to resolve is skipped rather than aborting the batch:
    // the picker has already closed, so landing the rest beats losing
    // everything.  candidates whose image is already present are dropped
    // silently to keep the one-entry-per-image invariant.
    pub async fn stage_images(&mut self, image_uuids: &[ImageUuid], resolver: &dyn ImageResolver) -> bool {
        if image_uuids.is_empty() {
            return false;
        }

        let mut resolved = Vec::new();
        let mut misses = 0;

        for image_uuid in image_uuids {
            match resolver.resolve(*image_uuid).await {
                Ok(image) => resolved.push(image),
                Err(err) => {
                    warn!("failed to resolve image {image_uuid}: {err}");
                    misses += 1;
                }
            }
        }

        if resolved.is_empty() {
            if misses > 0 {
                self.show_toast("Failed to load selected images");
            }
            return false;
        }

        // drop anything already in the gallery, and repeats within the batch
        let mut seen: HashSet<ImageUuid> =
            self.entries.iter().map(|entry| entry.image_uuid).collect();

        let fresh: Vec<_> = resolved
            .into_iter()
            .filter(|image| seen.insert(image.image_uuid))
            .collect();

        if fresh.is_empty() {
            debug!("staging skipped, all candidates already present");
            self.show_toast("Already in gallery");
            return false;
        }

        // next integer after the current maximum rather than the list length,
        // since the stored numbering can be sparse between saves
        let base = self.entries.iter().map(|entry| entry.order).max().unwrap_or(0);
        let millis = chrono::Utc::now().timestamp_millis();

        let added = fresh.len();

        for (idx, image) in fresh.into_iter().enumerate() {
            self.entries.push(GalleryEntry {
                uuid: temp_entry_uuid(millis, self.temp_seq),
                image_uuid: image.image_uuid,
                description: None,
                order: base + 1 + idx as i64,
                image,
            });
            self.temp_seq += 1;
        }

        if added == 1 {
            self.show_toast("Added 1 image to gallery");
        } else {
            self.show_toast(&format!("Added {added} images to gallery"));
        }

        self.dirty = true;
        true
    }

    // toast

    fn show_toast(&mut self, message: &str) {
        self.toast_message = message.to_owned();
        self.toast_visible = true;
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_visible = false;
    }
}
