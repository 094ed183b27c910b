pub mod clock;
pub mod coach;
pub mod error;
pub mod feedback;
pub mod preferences;
pub mod schedule;
pub mod task;
pub mod template;

pub use clock::add_minutes;
pub use coach::DailyCoach;
pub use error::{CoachError, CoachResult};
pub use feedback::{RescheduleRequest, ScheduleFeedback, TaskSpec};
pub use preferences::Preferences;
pub use schedule::DailySchedule;
pub use task::{Period, Task};
pub use template::{Anchor, ScheduleTemplate, TemplateEntry};

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`, defaulting
/// to warnings only so prompts on stdout stay readable.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
