use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const WAKE_TIME: &str = "wake_time";
pub const SLEEP_TIME: &str = "sleep_time";
pub const WORK_HOURS: &str = "work_hours";
pub const BREAK_INTERVAL: &str = "break_interval";

/// Scheduling preferences for a single user.
///
/// The four known keys are typed; anything else merged in through
/// [`Preferences::merge`] is kept in `extra` as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(alias = "wakeTime")]
    pub wake_time: String,
    #[serde(alias = "sleepTime")]
    pub sleep_time: String,
    #[serde(alias = "workHours")]
    pub work_hours: i64,
    /// Minutes between breaks.
    #[serde(alias = "breakInterval")]
    pub break_interval: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            wake_time: "07:00".to_string(),
            sleep_time: "22:00".to_string(),
            work_hours: 8,
            break_interval: 90,
            extra: Map::new(),
        }
    }
}

impl Preferences {
    /// Map snake_case and camelCase spellings onto the canonical key.
    pub fn canonical_key(key: &str) -> Option<&'static str> {
        match key {
            "wake_time" | "wakeTime" => Some(WAKE_TIME),
            "sleep_time" | "sleepTime" => Some(SLEEP_TIME),
            "work_hours" | "workHours" => Some(WORK_HOURS),
            "break_interval" | "breakInterval" => Some(BREAK_INTERVAL),
            _ => None,
        }
    }

    /// Merge a JSON object into the preferences, last write wins per key.
    ///
    /// Values of the wrong shape for a known key are ignored and the previous
    /// value is kept.
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            match Self::canonical_key(key) {
                Some(field @ (WAKE_TIME | SLEEP_TIME)) => match value.as_str() {
                    Some(time) => self.set_time(field, time),
                    None => {
                        tracing::warn!(key = %key, %value, "expected a time string, keeping current value")
                    }
                },
                Some(field) => match Self::integer_from(value) {
                    Some(n) => self.set_integer(field, n),
                    None => {
                        tracing::warn!(key = %key, %value, "expected an integer, keeping current value")
                    }
                },
                None => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Overwrite one known preference from raw text input.
    ///
    /// Time values are stored verbatim. Integer values must parse, otherwise
    /// the current value is retained and an error is returned.
    pub fn set_field(&mut self, name: &str, raw: &str) -> crate::CoachResult<()> {
        let field = Self::canonical_key(name)
            .ok_or_else(|| crate::CoachError::UnknownPreference(name.to_string()))?;
        match field {
            WAKE_TIME | SLEEP_TIME => {
                self.set_time(field, raw.trim());
                Ok(())
            }
            _ => {
                let value = raw.trim().parse::<i64>().map_err(|_| crate::CoachError::InvalidNumber {
                    field,
                    value: raw.to_string(),
                })?;
                self.set_integer(field, value);
                Ok(())
            }
        }
    }

    /// Display form of a single preference, known or extra.
    pub fn value_of(&self, key: &str) -> Option<String> {
        match Self::canonical_key(key) {
            Some(WAKE_TIME) => Some(self.wake_time.clone()),
            Some(SLEEP_TIME) => Some(self.sleep_time.clone()),
            Some(WORK_HOURS) => Some(self.work_hours.to_string()),
            Some(_) => Some(self.break_interval.to_string()),
            None => self.extra.get(key).map(render_extra),
        }
    }

    /// Known preferences first, in a fixed order, then any extra keys.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (WAKE_TIME.to_string(), self.wake_time.clone()),
            (SLEEP_TIME.to_string(), self.sleep_time.clone()),
            (WORK_HOURS.to_string(), self.work_hours.to_string()),
            (BREAK_INTERVAL.to_string(), self.break_interval.to_string()),
        ];
        entries.extend(
            self.extra
                .iter()
                .map(|(key, value)| (key.clone(), render_extra(value))),
        );
        entries
    }

    fn set_time(&mut self, field: &str, time: &str) {
        if field == WAKE_TIME {
            self.wake_time = time.to_string();
        } else {
            self.sleep_time = time.to_string();
        }
    }

    fn set_integer(&mut self, field: &str, value: i64) {
        if field == WORK_HOURS {
            self.work_hours = value;
        } else {
            self.break_interval = value;
        }
    }

    fn integer_from(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn render_extra(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
