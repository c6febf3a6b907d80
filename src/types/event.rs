//! Tagged event types
//!
//! A [`TaggedEvent`] is one recorded occurrence of a play with its outcome.
//! Events are immutable once appended to the log; the only way to change
//! history is to remove the most recent event.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Quarter, SessionContext};

/// Outcome of a tagged possession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotResult {
    Made2,
    Made3,
    Missed2,
    Missed3,
    Foul,
    /// Any result label outside the fixed set, as read from external data.
    /// Worth nothing and never counted as a shot.
    Unrecognized,
}

impl ShotResult {
    /// The results a user can tag, in display order
    pub const ALL: [ShotResult; 5] = [
        ShotResult::Made2,
        ShotResult::Made3,
        ShotResult::Missed2,
        ShotResult::Missed3,
        ShotResult::Foul,
    ];

    /// Points awarded for this result
    pub fn points(self) -> u32 {
        match self {
            ShotResult::Made2 => 2,
            ShotResult::Made3 => 3,
            _ => 0,
        }
    }

    /// Whether this result is a field-goal attempt
    pub fn is_shot(self) -> bool {
        matches!(
            self,
            ShotResult::Made2 | ShotResult::Made3 | ShotResult::Missed2 | ShotResult::Missed3
        )
    }

    /// Whether this result is a made field goal
    pub fn is_make(self) -> bool {
        matches!(self, ShotResult::Made2 | ShotResult::Made3)
    }

    /// Display label, also used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            ShotResult::Made2 => "Made 2",
            ShotResult::Made3 => "Made 3",
            ShotResult::Missed2 => "Missed 2",
            ShotResult::Missed3 => "Missed 3",
            ShotResult::Foul => "Foul",
            ShotResult::Unrecognized => "Unrecognized",
        }
    }

    /// Map any label to a result, falling back to `Unrecognized`
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or(ShotResult::Unrecognized)
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShotResult {
    type Err = String;

    /// Strict parse used at the append boundary. Accepts the display labels
    /// and their compact forms ("Made2", "made_2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "made2" => Ok(ShotResult::Made2),
            "made3" => Ok(ShotResult::Made3),
            "missed2" => Ok(ShotResult::Missed2),
            "missed3" => Ok(ShotResult::Missed3),
            "foul" => Ok(ShotResult::Foul),
            _ => Err(s.to_string()),
        }
    }
}

impl Serialize for ShotResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShotResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ShotResult::from_label_lossy(&label))
    }
}

/// An immutable record of one tagged play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedEvent {
    /// 1-based position in the log when the event was appended
    pub sequence: u64,

    /// When the event was recorded
    pub timestamp: DateTime<Utc>,

    pub opponent: String,
    pub game_date: NaiveDate,
    pub quarter: Quarter,

    /// Player the play is attributed to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,

    pub play: String,
    pub result: ShotResult,

    /// Fixed at creation from `result`
    pub points: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TaggedEvent {
    /// Build an event, deriving `points` from `result`
    pub fn new(
        sequence: u64,
        context: &SessionContext,
        player: Option<String>,
        play: String,
        result: ShotResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sequence,
            timestamp,
            opponent: context.opponent.clone(),
            game_date: context.game_date,
            quarter: context.quarter,
            player,
            play,
            result,
            points: result.points(),
            notes: None,
        }
    }

    /// Attach a free-text note
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Serialize event to JSON string
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize event from JSON string
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn context() -> SessionContext {
        SessionContext::new(
            "Acadia".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            Quarter::Second,
        )
    }

    #[test]
    fn test_points_lookup() {
        assert_eq!(ShotResult::Made2.points(), 2);
        assert_eq!(ShotResult::Made3.points(), 3);
        assert_eq!(ShotResult::Missed2.points(), 0);
        assert_eq!(ShotResult::Missed3.points(), 0);
        assert_eq!(ShotResult::Foul.points(), 0);
        assert_eq!(ShotResult::Unrecognized.points(), 0);
    }

    #[test]
    fn test_shot_classification() {
        assert!(ShotResult::Missed3.is_shot());
        assert!(!ShotResult::Missed3.is_make());
        assert!(ShotResult::Made2.is_make());
        assert!(!ShotResult::Foul.is_shot());
        assert!(!ShotResult::Unrecognized.is_shot());
    }

    #[test]
    fn test_parse_result_labels() {
        assert_eq!("Made 2".parse::<ShotResult>(), Ok(ShotResult::Made2));
        assert_eq!("missed_3".parse::<ShotResult>(), Ok(ShotResult::Missed3));
        assert_eq!("FOUL".parse::<ShotResult>(), Ok(ShotResult::Foul));
        assert!("Turnover".parse::<ShotResult>().is_err());
    }

    #[test]
    fn test_unknown_result_deserializes_lossy() {
        let parsed: ShotResult = serde_json::from_value(json!("Turnover")).unwrap();
        assert_eq!(parsed, ShotResult::Unrecognized);

        let parsed: ShotResult = serde_json::from_value(json!("Made 3")).unwrap();
        assert_eq!(parsed, ShotResult::Made3);
    }

    #[test]
    fn test_event_points_fixed_at_creation() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 12, 19, 5, 0).unwrap();
        let event = TaggedEvent::new(
            1,
            &context(),
            Some("Jordan".to_string()),
            "PickAndRoll".to_string(),
            ShotResult::Made3,
            ts,
        );

        assert_eq!(event.points, 3);
        assert_eq!(event.opponent, "Acadia");
        assert_eq!(event.quarter, Quarter::Second);
        assert_eq!(event.timestamp, ts);
    }

    #[test]
    fn test_event_serialization() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 12, 19, 5, 0).unwrap();
        let event = TaggedEvent::new(
            4,
            &context(),
            None,
            "Isolation".to_string(),
            ShotResult::Foul,
            ts,
        );

        let json = event.to_json_line().unwrap();
        assert!(json.contains("\"result\":\"Foul\""));
        assert!(json.contains("\"gameDate\":\"2024-01-12\""));
        assert!(json.contains("\"quarter\":\"2\""));
        assert!(!json.contains("\"player\""));

        let parsed = TaggedEvent::from_json_line(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
