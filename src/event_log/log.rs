//! Event Log - ordered, append-only history with undo
//!
//! The log owns the ordering of raw facts for one session. It performs no
//! playbook or roster validation; callers validate before appending.

use chrono::{DateTime, Utc};

use crate::types::{SessionContext, ShotResult, TaggedEvent};

/// Ordered sequence of tagged events, insertion order = chronological order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TaggedEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new event built from the session context
    ///
    /// Uses `timestamp` verbatim when supplied, otherwise the current time.
    pub fn append(
        &mut self,
        context: &SessionContext,
        player: Option<String>,
        play: impl Into<String>,
        result: ShotResult,
        timestamp: Option<DateTime<Utc>>,
    ) -> TaggedEvent {
        self.append_with_notes(context, player, play, result, timestamp, None)
    }

    /// Append a new event carrying a free-text note
    pub fn append_with_notes(
        &mut self,
        context: &SessionContext,
        player: Option<String>,
        play: impl Into<String>,
        result: ShotResult,
        timestamp: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> TaggedEvent {
        let sequence = self.events.len() as u64 + 1;
        let event = TaggedEvent::new(
            sequence,
            context,
            player,
            play.into(),
            result,
            timestamp.unwrap_or_else(Utc::now),
        )
        .with_notes(notes);

        self.events.push(event.clone());
        event
    }

    /// Remove and return the most recent event (undo)
    ///
    /// Returns `None` and leaves the log untouched when it is empty.
    pub fn remove_last(&mut self) -> Option<TaggedEvent> {
        self.events.pop()
    }

    /// Empty the log
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Copy of the log at call time
    pub fn snapshot(&self) -> Vec<TaggedEvent> {
        self.events.clone()
    }

    /// Borrowed view of the events in order
    pub fn events(&self) -> &[TaggedEvent] {
        &self.events
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<&TaggedEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
