//! Tagging tools: selection, tagging, undo and reset

mod reset_session;
mod select;
mod tag_event;
mod undo_last;

pub use reset_session::ResetSessionTool;
pub use select::SelectTool;
pub use tag_event::TagEventTool;
pub use undo_last::UndoLastTool;
