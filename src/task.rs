use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed-order bucket of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }

    /// Capitalized form used in menus, e.g. `Morning`.
    pub fn title(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}'")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Period::Morning),
            "afternoon" => Ok(Period::Afternoon),
            "evening" => Ok(Period::Evening),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

/// A time-labelled activity. Tasks carry no identifier; they are found by
/// matching their label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub time: String,
    pub task: String,
}

impl Task {
    pub fn new(time: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            task: task.into(),
        }
    }

    /// Case-insensitive substring match of `query` against the label.
    pub fn matches(&self, query: &str) -> bool {
        self.task.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn reminder(&self) -> String {
        format!("{} - {}", self.time, self.task)
    }
}
