// Client-side runtime for the media viewing page. The server-rendered page
// builds the entry context and element handles, calls attach_page on its
// load event, and forwards key/pointer/time-update events into the
// components it gets back.

pub mod constants;
pub mod context;
pub mod history;
pub mod models;
pub mod page;
pub mod player;
pub mod preview;
pub mod progress;

pub use context::EntryContext;
pub use page::{PageBindings, PageHandles, attach_page};
