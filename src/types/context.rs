//! Game context copied onto every tagged event

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Period of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Quarter {
    #[default]
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "OT")]
    Overtime,
}

impl Quarter {
    pub fn as_str(self) -> &'static str {
        match self {
            Quarter::First => "1",
            Quarter::Second => "2",
            Quarter::Third => "3",
            Quarter::Fourth => "4",
            Quarter::Overtime => "OT",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1" | "Q1" => Ok(Quarter::First),
            "2" | "Q2" => Ok(Quarter::Second),
            "3" | "Q3" => Ok(Quarter::Third),
            "4" | "Q4" => Ok(Quarter::Fourth),
            "OT" => Ok(Quarter::Overtime),
            _ => Err(s.to_string()),
        }
    }
}

/// Session-level context: who we are playing, when, and which period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub opponent: String,
    pub game_date: NaiveDate,
    pub quarter: Quarter,
}

impl SessionContext {
    pub fn new(opponent: String, game_date: NaiveDate, quarter: Quarter) -> Self {
        Self {
            opponent,
            game_date,
            quarter,
        }
    }
}

impl Default for SessionContext {
    /// No opponent yet, today's date, first quarter
    fn default() -> Self {
        Self {
            opponent: String::new(),
            game_date: Local::now().date_naive(),
            quarter: Quarter::First,
        }
    }
}
