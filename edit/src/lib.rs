// gallery edit-session core
//
// everything a gallery editor needs between "load" and "save": the ordered
// entry list, drag reordering, staging freshly picked images under
// placeholder uuids, two-step removal, and the batch payload that sends the
// whole set back to the server

pub mod drag;
pub mod options;
pub mod order;
pub mod resolve;
pub mod save;
pub mod session;

pub use drag::DragEvent;
pub use options::EditOptions;
pub use resolve::{ApiResolver, ImageResolver};
pub use session::EditSession;
