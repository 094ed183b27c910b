use crate::task::{Period, Task};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const SUMMARY_TITLE: &str = "=== Daily Schedule ===";

/// Tasks keyed by period. Iteration always runs morning, afternoon, evening.
///
/// An empty schedule (no periods at all) means nothing has been generated yet;
/// a generated schedule keeps all three periods even if their lists empty out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySchedule {
    periods: BTreeMap<Period, Vec<Task>>,
}

impl DailySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn has_period(&self, period: Period) -> bool {
        self.periods.contains_key(&period)
    }

    pub fn tasks(&self, period: Period) -> &[Task] {
        self.periods.get(&period).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task_count(&self) -> usize {
        self.periods.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, &[Task])> {
        self.periods.iter().map(|(period, tasks)| (*period, tasks.as_slice()))
    }

    pub fn replace_period(&mut self, period: Period, tasks: Vec<Task>) {
        self.periods.insert(period, tasks);
    }

    /// Append to an existing period. Returns `false` when the period is not
    /// part of this schedule.
    pub fn push(&mut self, period: Period, task: Task) -> bool {
        match self.periods.get_mut(&period) {
            Some(tasks) => {
                tasks.push(task);
                true
            }
            None => false,
        }
    }

    /// Remove every task, in every period, whose label contains `query`
    /// (case-insensitive). Returns how many were removed.
    pub fn remove_matching(&mut self, query: &str) -> usize {
        let mut removed = 0;
        for tasks in self.periods.values_mut() {
            let before = tasks.len();
            tasks.retain(|task| !task.matches(query));
            removed += before - tasks.len();
        }
        removed
    }

    /// Move the first task matching `query` to `new_time`. Only one task is
    /// touched across the whole schedule.
    pub fn reschedule_first(&mut self, query: &str, new_time: &str) -> bool {
        let first = self
            .periods
            .values_mut()
            .flat_map(|tasks| tasks.iter_mut())
            .find(|task| task.matches(query));
        match first {
            Some(task) => {
                task.time = new_time.to_string();
                true
            }
            None => false,
        }
    }

    pub fn reminders(&self) -> Vec<String> {
        self.periods
            .values()
            .flat_map(|tasks| tasks.iter().map(Task::reminder))
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(SUMMARY_TITLE);
        out.push('\n');
        for (period, tasks) in self.iter() {
            let _ = write!(out, "\n{}:\n", period.as_str().to_uppercase());
            for task in tasks {
                let _ = writeln!(out, "  {}", task.reminder());
            }
        }
        out
    }
}
