//! Roster and playbook management
//!
//! Both lists dedupe case-insensitively, so the metrics engine can group
//! play labels by exact match.

use crate::error::{TaggerError, TaggerResult};
use crate::types::Player;
use crate::validation::{normalize_play_label, normalize_player_name};

/// Players available for attribution
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, assigning the next id
    pub fn add(&mut self, name: &str) -> TaggerResult<Player> {
        let name = normalize_player_name(name)?;
        if self.find_by_name(&name).is_some() {
            return Err(TaggerError::DuplicatePlayer(name));
        }

        let player = Player::new(self.next_id, name);
        self.next_id += 1;
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove a player by id
    pub fn remove(&mut self, id: u32) -> TaggerResult<Player> {
        let pos = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TaggerError::UnknownPlayer(id.to_string()))?;
        Ok(self.players.remove(pos))
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Play labels the session can tag
#[derive(Debug, Clone, Default)]
pub struct Playbook {
    plays: Vec<String>,
}

impl Playbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a play label, returning the stored form
    pub fn add(&mut self, label: &str) -> TaggerResult<String> {
        let label = normalize_play_label(label)?;
        if self.find(&label).is_some() {
            return Err(TaggerError::DuplicatePlay(label));
        }
        self.plays.push(label.clone());
        Ok(label)
    }

    /// Remove a play label (case-insensitive match)
    pub fn remove(&mut self, label: &str) -> TaggerResult<String> {
        let pos = self
            .plays
            .iter()
            .position(|p| p.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| TaggerError::UnknownPlay(label.trim().to_string()))?;
        Ok(self.plays.remove(pos))
    }

    /// Canonical stored label for a case-insensitive match
    pub fn find(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        self.plays
            .iter()
            .find(|p| p.eq_ignore_ascii_case(label))
            .map(String::as_str)
    }

    pub fn plays(&self) -> &[String] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}
