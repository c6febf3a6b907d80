//! Tagging session - one game's context, roster, playbook and event log
//!
//! This is the explicit per-session instance the collaborator drives. It
//! validates every input before the event log sees it and holds the
//! transient player/play selection between clicks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{TaggerError, TaggerResult};
use crate::event_log::EventLog;
use crate::metrics::MetricsEngine;
use crate::types::{
    Player, PlayMetric, PlayerMetric, Quarter, SessionContext, SessionTotals, ShotResult,
    TaggedEvent,
};
use crate::validation::{normalize_notes, normalize_opponent};

use super::roster::{Playbook, Roster};

/// A request to record one event
///
/// `player` and `play` fall back to the current selection when omitted.
#[derive(Debug, Clone)]
pub struct TagRequest {
    pub player: Option<String>,
    pub play: Option<String>,
    pub result: ShotResult,
    pub timestamp: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl TagRequest {
    pub fn new(result: ShotResult) -> Self {
        Self {
            player: None,
            play: None,
            result,
            timestamp: None,
            notes: None,
        }
    }

    pub fn play(mut self, play: impl Into<String>) -> Self {
        self.play = Some(play.into());
        self
    }

    pub fn player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Serializable view of a session's setup and progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverview {
    pub context: SessionContext,
    pub players: Vec<Player>,
    pub plays: Vec<String>,
    pub started: bool,
    pub missing: Vec<String>,
    pub event_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_player: Option<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_play: Option<String>,
}

/// State of one tagging session
#[derive(Debug, Clone, Default)]
pub struct TaggingSession {
    context: SessionContext,
    roster: Roster,
    playbook: Playbook,
    log: EventLog,
    started: bool,
    selected_player: Option<u32>,
    selected_play: Option<String>,
}

impl TaggingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set opponent and, optionally, game date and quarter
    pub fn set_context(
        &mut self,
        opponent: &str,
        game_date: Option<NaiveDate>,
        quarter: Option<Quarter>,
    ) -> TaggerResult<&SessionContext> {
        self.update_context(Some(opponent), game_date, quarter)
    }

    /// Change any subset of the context; omitted fields keep their value
    ///
    /// Nothing is applied unless every supplied field is valid.
    pub fn update_context(
        &mut self,
        opponent: Option<&str>,
        game_date: Option<NaiveDate>,
        quarter: Option<Quarter>,
    ) -> TaggerResult<&SessionContext> {
        let opponent = opponent.map(normalize_opponent).transpose()?;

        if let Some(opponent) = opponent {
            self.context.opponent = opponent;
        }
        if let Some(date) = game_date {
            self.context.game_date = date;
        }
        if let Some(quarter) = quarter {
            self.context.quarter = quarter;
        }
        debug!(
            opponent = %self.context.opponent,
            date = %self.context.game_date,
            quarter = %self.context.quarter,
            "session context updated"
        );
        Ok(&self.context)
    }

    /// Move to another period; later events carry the new quarter
    pub fn set_quarter(&mut self, quarter: Quarter) {
        self.context.quarter = quarter;
    }

    pub fn add_player(&mut self, name: &str) -> TaggerResult<Player> {
        let player = self.roster.add(name)?;
        debug!(id = player.id, name = %player.name, "player added");
        Ok(player)
    }

    pub fn remove_player(&mut self, id: u32) -> TaggerResult<Player> {
        let player = self.roster.remove(id)?;
        if self.selected_player == Some(id) {
            self.selected_player = None;
        }
        debug!(id, name = %player.name, "player removed");
        Ok(player)
    }

    pub fn add_play(&mut self, label: &str) -> TaggerResult<String> {
        let label = self.playbook.add(label)?;
        debug!(play = %label, "play added");
        Ok(label)
    }

    pub fn remove_play(&mut self, label: &str) -> TaggerResult<String> {
        let removed = self.playbook.remove(label)?;
        if self.selected_play.as_deref() == Some(removed.as_str()) {
            self.selected_play = None;
        }
        debug!(play = %removed, "play removed");
        Ok(removed)
    }

    /// Setup items still missing before tagging can start
    pub fn missing_requirements(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.context.opponent.is_empty() {
            missing.push("Opponent".to_string());
        }
        if self.playbook.is_empty() {
            missing.push("Plays".to_string());
        }
        missing
    }

    /// Enable tagging once setup is complete
    pub fn start_tagging(&mut self) -> TaggerResult<()> {
        let missing = self.missing_requirements();
        if !missing.is_empty() {
            warn!(?missing, "cannot start tagging");
            return Err(TaggerError::NotReady(missing));
        }
        if !self.started {
            self.started = true;
            info!(opponent = %self.context.opponent, "tagging started");
        }
        Ok(())
    }

    // ---------- Selection ----------

    pub fn select_player(&mut self, id: u32) -> TaggerResult<&Player> {
        let player = self
            .roster
            .get(id)
            .ok_or_else(|| TaggerError::UnknownPlayer(id.to_string()))?;
        self.selected_player = Some(id);
        Ok(player)
    }

    pub fn select_play(&mut self, label: &str) -> TaggerResult<&str> {
        let canonical = self
            .playbook
            .find(label)
            .ok_or_else(|| TaggerError::UnknownPlay(label.trim().to_string()))?
            .to_string();
        self.selected_play = Some(canonical);
        Ok(self.selected_play.as_deref().unwrap_or_default())
    }

    /// Select a player and/or play together; omitted ones keep their value
    ///
    /// Both are checked before either is applied, so a rejected call leaves
    /// the previous selection in place.
    pub fn select(&mut self, player: Option<u32>, play: Option<&str>) -> TaggerResult<()> {
        let play = self.resolve_selection(player, play)?;
        if player.is_some() {
            self.selected_player = player;
        }
        if play.is_some() {
            self.selected_play = play;
        }
        Ok(())
    }

    /// Replace the whole selection; omitted ones become unselected
    pub fn replace_selection(&mut self, player: Option<u32>, play: Option<&str>) -> TaggerResult<()> {
        let play = self.resolve_selection(player, play)?;
        self.selected_player = player;
        self.selected_play = play;
        Ok(())
    }

    fn resolve_selection(&self, player: Option<u32>, play: Option<&str>) -> TaggerResult<Option<String>> {
        if let Some(id) = player {
            if self.roster.get(id).is_none() {
                return Err(TaggerError::UnknownPlayer(id.to_string()));
            }
        }
        play.map(|label| {
            self.playbook
                .find(label)
                .map(str::to_string)
                .ok_or_else(|| TaggerError::UnknownPlay(label.trim().to_string()))
        })
        .transpose()
    }

    pub fn clear_selection(&mut self) {
        self.selected_player = None;
        self.selected_play = None;
    }

    // ---------- Event log ----------

    /// Validate a request and append it to the log
    pub fn tag(&mut self, request: TagRequest) -> TaggerResult<TaggedEvent> {
        if !self.started {
            return Err(TaggerError::NotStarted);
        }

        let play = match request.play.as_deref().or(self.selected_play.as_deref()) {
            Some(label) => self
                .playbook
                .find(label)
                .ok_or_else(|| TaggerError::UnknownPlay(label.trim().to_string()))?
                .to_string(),
            None => return Err(TaggerError::NoPlaySelected),
        };

        let player = match request.player.as_deref() {
            Some(name) => Some(
                self.roster
                    .find_by_name(name)
                    .ok_or_else(|| TaggerError::UnknownPlayer(name.trim().to_string()))?
                    .name
                    .clone(),
            ),
            None => self
                .selected_player
                .and_then(|id| self.roster.get(id))
                .map(|p| p.name.clone()),
        };

        let notes = normalize_notes(request.notes.as_deref())?;

        let event = self.log.append_with_notes(
            &self.context,
            player,
            play,
            request.result,
            request.timestamp,
            notes,
        );
        self.clear_selection();

        info!(
            sequence = event.sequence,
            play = %event.play,
            player = event.player.as_deref().unwrap_or("-"),
            result = %event.result,
            "event tagged"
        );
        Ok(event)
    }

    /// Remove the most recent event; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<TaggedEvent> {
        let removed = self.log.remove_last();
        match &removed {
            Some(event) => info!(sequence = event.sequence, play = %event.play, "event undone"),
            None => debug!("nothing to undo"),
        }
        removed
    }

    /// Clear the log and any in-progress selection
    pub fn reset(&mut self) {
        let cleared = self.log.len();
        self.log.clear();
        self.clear_selection();
        info!(cleared, "session reset");
    }

    // ---------- Reads ----------

    pub fn snapshot(&self) -> Vec<TaggedEvent> {
        self.log.snapshot()
    }

    pub fn metrics(&self) -> Vec<PlayMetric> {
        MetricsEngine::compute(self.log.events())
    }

    pub fn player_metrics(&self) -> Vec<PlayerMetric> {
        MetricsEngine::compute_by_player(self.log.events())
    }

    pub fn totals(&self) -> SessionTotals {
        MetricsEngine::totals(self.log.events())
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            context: self.context.clone(),
            players: self.roster.players().to_vec(),
            plays: self.playbook.plays().to_vec(),
            started: self.started,
            missing: self.missing_requirements(),
            event_count: self.log.len(),
            selected_player: self.selected_player.and_then(|id| self.roster.get(id)).cloned(),
            selected_play: self.selected_play.clone(),
        }
    }
}
