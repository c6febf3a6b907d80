//! Roster entry

use serde::{Deserialize, Serialize};

/// A player that can be attributed on tagged events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
}

impl Player {
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }
}
