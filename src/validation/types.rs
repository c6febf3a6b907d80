//! Input normalization for the tagging boundary
//!
//! Everything that could make an event malformed is rejected here, before
//! the event log ever sees it.

use crate::error::{TaggerError, TaggerResult};

/// Maximum length of the free-text note on a tagged event
pub const MAX_NOTES_CHARS: usize = 200;

/// Trim a play label and reject empty ones
pub fn normalize_play_label(label: &str) -> TaggerResult<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(TaggerError::EmptyPlay);
    }
    Ok(label.to_string())
}

/// Trim a player name and reject empty ones
pub fn normalize_player_name(name: &str) -> TaggerResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaggerError::EmptyPlayerName);
    }
    Ok(name.to_string())
}

/// Trim the opponent name and reject empty ones
pub fn normalize_opponent(opponent: &str) -> TaggerResult<String> {
    let opponent = opponent.trim();
    if opponent.is_empty() {
        return Err(TaggerError::EmptyOpponent);
    }
    Ok(opponent.to_string())
}

/// Drop blank notes and reject notes over the length limit
pub fn normalize_notes(notes: Option<&str>) -> TaggerResult<Option<String>> {
    match notes.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > MAX_NOTES_CHARS => Err(TaggerError::NotesTooLong {
            max: MAX_NOTES_CHARS,
        }),
        Some(text) => Ok(Some(text.to_string())),
    }
}
