use serde::{Deserialize, Serialize};

pub const DEFAULT_PERIOD: &str = "afternoon";
pub const DEFAULT_TIME: &str = "12:00";
pub const DEFAULT_TASK: &str = "New task";

/// A batch of edits for [`crate::DailyCoach::adjust_schedule`].
///
/// Applied in field order: skips, then additions, then reschedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleFeedback {
    #[serde(alias = "skipTasks")]
    pub skip_tasks: Vec<String>,
    #[serde(alias = "addTasks")]
    pub add_tasks: Vec<TaskSpec>,
    pub reschedule: Vec<RescheduleRequest>,
}

impl ScheduleFeedback {
    pub fn from_json(text: &str) -> crate::CoachResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn skip(query: impl Into<String>) -> Self {
        Self {
            skip_tasks: vec![query.into()],
            ..Self::default()
        }
    }

    pub fn add(spec: TaskSpec) -> Self {
        Self {
            add_tasks: vec![spec],
            ..Self::default()
        }
    }

    pub fn move_task(task_name: impl Into<String>, new_time: impl Into<String>) -> Self {
        Self {
            reschedule: vec![RescheduleRequest {
                task_name: Some(task_name.into()),
                new_time: Some(new_time.into()),
            }],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skip_tasks.is_empty() && self.add_tasks.is_empty() && self.reschedule.is_empty()
    }
}

/// A task to append. Missing fields fall back to afternoon, 12:00 and
/// "New task".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSpec {
    pub period: Option<String>,
    pub time: Option<String>,
    pub task: Option<String>,
}

impl TaskSpec {
    pub fn new(period: impl Into<String>, time: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            period: Some(period.into()),
            time: Some(time.into()),
            task: Some(task.into()),
        }
    }

    pub fn period_or_default(&self) -> &str {
        self.period.as_deref().unwrap_or(DEFAULT_PERIOD)
    }

    pub fn time_or_default(&self) -> &str {
        self.time.as_deref().unwrap_or(DEFAULT_TIME)
    }

    pub fn task_or_default(&self) -> &str {
        self.task.as_deref().unwrap_or(DEFAULT_TASK)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RescheduleRequest {
    #[serde(alias = "taskName")]
    pub task_name: Option<String>,
    #[serde(alias = "newTime")]
    pub new_time: Option<String>,
}
