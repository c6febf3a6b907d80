//! Tagging sessions
//!
//! A session is the explicit owner of one game's state:
//! - `TaggingSession`: context, roster, playbook, event log and selection
//! - `Roster` / `Playbook`: validated player and play lists
//! - `SessionRegistry`: independent sessions keyed by id

mod registry;
mod roster;
mod tagging;

pub use registry::{SessionRegistry, SharedSession, DEFAULT_SESSION_ID};
pub use roster::{Playbook, Roster};
pub use tagging::{SessionOverview, TagRequest, TaggingSession};
