use crate::feedback::ScheduleFeedback;
use crate::preferences::Preferences;
use crate::schedule::DailySchedule;
use crate::task::{Period, Task};
use crate::template::ScheduleTemplate;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Reserved key in learned data whose object is merged into [`Preferences`].
pub const PREFERENCES_KEY: &str = "preferences";

/// In-memory store for one user's preferences, learned data and day plan.
#[derive(Debug, Clone, Default)]
pub struct DailyCoach {
    preferences: Preferences,
    user_data: Map<String, Value>,
    schedule: DailySchedule,
    reminders: Vec<String>,
    template: ScheduleTemplate,
}

impl DailyCoach {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: ScheduleTemplate) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    pub fn user_data(&self) -> &Map<String, Value> {
        &self.user_data
    }

    pub fn schedule(&self) -> &DailySchedule {
        &self.schedule
    }

    pub fn reminders(&self) -> &[String] {
        &self.reminders
    }

    pub fn template(&self) -> &ScheduleTemplate {
        &self.template
    }

    /// Merge learned attributes into the user data. A `preferences` object is
    /// folded into [`Preferences`] instead of being stored.
    pub fn learn_habits(&mut self, data: Map<String, Value>) {
        for (key, value) in data {
            if key == PREFERENCES_KEY {
                match value {
                    Value::Object(patch) => self.preferences.merge(&patch),
                    other => debug!(%other, "ignoring non-object preferences"),
                }
            } else {
                self.user_data.insert(key, value);
            }
        }
        debug!(keys = self.user_data.len(), "learned user habits");
    }

    /// Replace the whole schedule with a freshly rendered template.
    pub fn generate_schedule(&mut self) -> &DailySchedule {
        self.schedule = self.template.render(&self.preferences);
        info!(
            wake_time = %self.preferences.wake_time,
            sleep_time = %self.preferences.sleep_time,
            tasks = self.schedule.task_count(),
            "generated daily schedule"
        );
        &self.schedule
    }

    pub fn set_reminders(&mut self) -> &[String] {
        self.ensure_schedule();
        self.reminders = self.schedule.reminders();
        debug!(count = self.reminders.len(), "reminders set");
        &self.reminders
    }

    /// Apply skips, additions and reschedules, in that order. Nothing here
    /// fails: unknown periods and unmatched names are dropped.
    pub fn adjust_schedule(&mut self, feedback: &ScheduleFeedback) {
        for query in &feedback.skip_tasks {
            let removed = self.schedule.remove_matching(query);
            debug!(query = %query, removed, "skipped tasks");
        }

        for spec in &feedback.add_tasks {
            let period_name = spec.period_or_default();
            let Ok(period) = period_name.parse::<Period>() else {
                debug!(period = %period_name, "dropping task for unknown period");
                continue;
            };
            let task = Task::new(spec.time_or_default(), spec.task_or_default());
            if !self.schedule.push(period, task) {
                debug!(%period, "dropping task, period not in schedule");
            }
        }

        for request in &feedback.reschedule {
            let (Some(task_name), Some(new_time)) =
                (request.task_name.as_deref(), request.new_time.as_deref())
            else {
                continue;
            };
            if task_name.is_empty() || new_time.is_empty() {
                continue;
            }
            if !self.schedule.reschedule_first(task_name, new_time) {
                debug!(task_name, "no task to reschedule");
            }
        }
    }

    pub fn summary(&mut self) -> String {
        self.ensure_schedule();
        self.schedule.summary()
    }

    fn ensure_schedule(&mut self) {
        if self.schedule.is_empty() {
            self.generate_schedule();
        }
    }
}
