//! State owned by the drop zone between frames.

mod drag;
mod quotes;

pub use drag::{DragTracker, DragTransition};
pub use quotes::QuoteDeck;
