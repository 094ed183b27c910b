use daily_coach::{CoachResult, DailyCoach, ScheduleFeedback, TaskSpec};
use serde_json::json;

fn section(title: &str) {
    println!("{title}");
    println!("{}", "-".repeat(60));
}

fn run() -> CoachResult<()> {
    let rule = "=".repeat(60);
    println!("{rule}\nDaily Coach API walk-through\n{rule}\n");

    let mut coach = DailyCoach::new();

    println!("1. Learning user habits...");
    let habits = json!({
        "name": "Alice Smith",
        "occupation": "Software Engineer",
        "goals": ["improve focus", "better work-life balance"],
        "preferences": {
            "wake_time": "06:30",
            "sleep_time": "22:30",
            "work_hours": 8
        }
    });
    if let serde_json::Value::Object(data) = habits {
        coach.learn_habits(data);
    }
    let name = coach
        .user_data()
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    println!("   learned habits for: {name}");
    println!("   wake time: {}", coach.preferences().wake_time);
    println!("   sleep time: {}\n", coach.preferences().sleep_time);

    println!("2. Generating daily schedule...");
    let periods = coach.generate_schedule().period_count();
    println!("   schedule created with {periods} periods\n");

    section("3. Schedule summary:");
    println!("{}", coach.summary());

    println!("4. Setting reminders...");
    println!("   {} reminders set\n", coach.set_reminders().len());

    println!("5. Adding a task...");
    coach.adjust_schedule(&ScheduleFeedback::add(TaskSpec::new(
        "afternoon",
        "16:30",
        "Team standup meeting",
    )));
    println!("   added 'Team standup meeting' at 16:30\n");

    println!("6. Rescheduling lunch...");
    let feedback = ScheduleFeedback::from_json(r#"{"reschedule": [{"task_name": "Lunch", "new_time": "12:30"}]}"#)?;
    coach.adjust_schedule(&feedback);
    println!("   lunch rescheduled to 12:30\n");

    section("7. Updated schedule summary:");
    println!("{}", coach.summary());
    println!("{rule}");
    Ok(())
}

fn main() {
    daily_coach::init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
