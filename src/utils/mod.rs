//! Utility functions and helpers
//!
//! Atomic export writes and timestamp parsing.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, cleanup_temp_files};
pub use time::{parse_game_date, parse_timestamp};
