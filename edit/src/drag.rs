use api::gallery::EntryUuid;

use crate::order;
use crate::session::EditSession;

// drag gesture surface
//
// pointer, touch, and keyboard adapters all reduce to these three events, so
// the session never depends on a particular gesture library.  Begin only
// drives the drag overlay; Drop carries the ordering semantics; Cancel covers
// gestures aborted before a target was established.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent {
    Begin {
        entry: EntryUuid,
    },
    Drop {
        source: EntryUuid,
        target: Option<EntryUuid>,
    },
    Cancel,
}

impl EditSession {
    // returns whether the arrangement changed, which only a Drop can do
    pub fn apply_drag(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Begin { entry } => {
                self.begin_drag(&entry);
                false
            }
            DragEvent::Drop { source, target } => self.end_drag(&source, target.as_deref()),
            DragEvent::Cancel => {
                self.cancel_drag();
                false
            }
        }
    }

    // keyboard adapter: a single-step reorder is just a drop onto the
    // neighboring entry
    pub fn move_up(&mut self, uuid: &str) -> bool {
        let Some(idx) = order::position(self.entries(), uuid) else {
            return false;
        };

        if idx == 0 {
            return false;
        }

        let target = self.entries()[idx - 1].uuid.clone();
        self.end_drag(uuid, Some(&target))
    }

    pub fn move_down(&mut self, uuid: &str) -> bool {
        let Some(idx) = order::position(self.entries(), uuid) else {
            return false;
        };

        if idx + 1 >= self.entries().len() {
            return false;
        }

        let target = self.entries()[idx + 1].uuid.clone();
        self.end_drag(uuid, Some(&target))
    }
}
