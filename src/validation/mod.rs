//! Input validation for the tagging boundary

mod types;

pub use types::{
    normalize_notes, normalize_opponent, normalize_play_label, normalize_player_name,
    MAX_NOTES_CHARS,
};
