use crate::clock;
use crate::preferences::Preferences;
use crate::schedule::DailySchedule;
use crate::task::{Period, Task};
use serde::{Deserialize, Serialize};

/// When a templated task happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Minutes after the preferred wake time.
    AfterWake(i64),
    /// A literal `HH:MM` clock time.
    At(String),
    /// The preferred sleep time.
    Sleep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub anchor: Anchor,
    pub task: String,
}

impl TemplateEntry {
    pub fn new(anchor: Anchor, task: impl Into<String>) -> Self {
        Self {
            anchor,
            task: task.into(),
        }
    }

    fn resolve(&self, preferences: &Preferences) -> Task {
        let time = match &self.anchor {
            Anchor::AfterWake(minutes) => clock::add_minutes(&preferences.wake_time, *minutes),
            Anchor::At(time) => time.clone(),
            Anchor::Sleep => preferences.sleep_time.clone(),
        };
        Task::new(time, self.task.clone())
    }
}

/// Shape of a generated day, one entry list per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub morning: Vec<TemplateEntry>,
    pub afternoon: Vec<TemplateEntry>,
    pub evening: Vec<TemplateEntry>,
}

impl Default for ScheduleTemplate {
    fn default() -> Self {
        Self {
            morning: vec![
                TemplateEntry::new(Anchor::AfterWake(30), "Morning workout"),
                TemplateEntry::new(Anchor::AfterWake(60), "Breakfast"),
                TemplateEntry::new(Anchor::AfterWake(90), "Plan the day"),
            ],
            afternoon: vec![
                TemplateEntry::new(Anchor::At("12:00".into()), "Lunch"),
                TemplateEntry::new(Anchor::At("13:00".into()), "Deep focus work"),
                TemplateEntry::new(Anchor::At("15:30".into()), "Short break and stretch"),
            ],
            evening: vec![
                TemplateEntry::new(Anchor::At("18:00".into()), "Relax and unwind"),
                TemplateEntry::new(Anchor::At("19:00".into()), "Dinner"),
                TemplateEntry::new(Anchor::Sleep, "Reflection and wind down"),
            ],
        }
    }
}

impl ScheduleTemplate {
    pub fn entries(&self, period: Period) -> &[TemplateEntry] {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
            Period::Evening => &self.evening,
        }
    }

    /// Produce a full schedule for the given preferences. Every period is
    /// present in the result, even when its entry list is empty.
    pub fn render(&self, preferences: &Preferences) -> DailySchedule {
        let mut schedule = DailySchedule::new();
        for period in Period::ALL {
            let tasks = self
                .entries(period)
                .iter()
                .map(|entry| entry.resolve(preferences))
                .collect();
            schedule.replace_period(period, tasks);
        }
        schedule
    }
}
