use std::io::{self, BufRead, Write};

use daily_coach::{
    CoachError, CoachResult, DailyCoach, Period, ScheduleFeedback, TaskSpec,
    preferences::{BREAK_INTERVAL, SLEEP_TIME, WAKE_TIME, WORK_HOURS},
};
use serde_json::{Map, Value};

struct Console<R> {
    input: R,
    line: String,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Print `text` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        print!("{text}");
        io::stdout().flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }

    fn ask(&mut self, text: &str) -> io::Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }
}

fn display_menu() {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{}DAILY COACH", " ".repeat(24));
    println!("{rule}");
    println!(
        "\nMenu Options:\n  1. Generate Daily Schedule\n  2. Set Reminders\n  3. View Schedule Summary\n  4. Adjust Schedule\n  5. Update Preferences\n  6. Learn User Habits\n  7. Exit"
    );
    println!("{}", "-".repeat(60));
}

fn generate(coach: &mut DailyCoach) {
    println!("\n--- Generating Daily Schedule ---");
    let schedule = coach.generate_schedule();
    println!("\nSchedule generated successfully!");
    println!("\nYou have {} time periods scheduled:", schedule.period_count());
    for (period, _) in schedule.iter() {
        println!("  - {}", period.title());
    }
}

fn reminders(coach: &mut DailyCoach) {
    println!("\n--- Setting Reminders ---");
    let reminders = coach.set_reminders();
    println!("\n{} reminders set:", reminders.len());
    for reminder in reminders {
        println!("  * {reminder}");
    }
}

fn update_preferences<R: BufRead>(console: &mut Console<R>, coach: &mut DailyCoach) -> CoachResult<()> {
    println!("\n--- Update Preferences ---");
    println!("Current preferences:");
    for (key, value) in coach.preferences().entries() {
        println!("  {key}: {value}");
    }
    println!("\nEnter new values (press Enter to keep current):");

    let fields = [
        (WAKE_TIME, "Wake time"),
        (SLEEP_TIME, "Sleep time"),
        (WORK_HOURS, "Work hours"),
        (BREAK_INTERVAL, "Break interval (minutes)"),
    ];
    for (field, label) in fields {
        let current = coach.preferences().value_of(field).unwrap_or_default();
        let raw = console.ask(&format!("{label} [{current}]: "))?;
        if raw.is_empty() {
            continue;
        }
        match coach.preferences_mut().set_field(field, &raw) {
            Ok(()) => {}
            Err(err @ CoachError::InvalidNumber { .. }) => {
                println!("{err}, keeping current value.");
            }
            Err(err) => return Err(err),
        }
    }

    println!("\nPreferences updated successfully!");
    Ok(())
}

fn learn_habits<R: BufRead>(console: &mut Console<R>, coach: &mut DailyCoach) -> CoachResult<()> {
    println!("\n--- Learn User Habits ---");
    println!("Enter information about your habits:");

    let name = console.ask("Your name: ")?;
    let occupation = console.ask("Your occupation: ")?;
    let goals = console.ask("Your main goals (comma-separated): ")?;

    let goals: Vec<Value> = if goals.is_empty() {
        Vec::new()
    } else {
        goals
            .split(',')
            .map(|goal| Value::String(goal.trim().to_string()))
            .collect()
    };

    let mut data = Map::new();
    data.insert("name".into(), Value::String(name));
    data.insert("occupation".into(), Value::String(occupation));
    data.insert("goals".into(), Value::Array(goals));
    coach.learn_habits(data);

    println!("\nHabits learned successfully!");
    println!("Stored data: {}", serde_json::to_string(coach.user_data())?);
    Ok(())
}

fn adjust_schedule<R: BufRead>(console: &mut Console<R>, coach: &mut DailyCoach) -> CoachResult<()> {
    println!("\n--- Adjust Schedule ---");
    println!("1. Skip a task\n2. Add a new task\n3. Reschedule a task\n4. Cancel");

    match console.ask("\nYour choice (1-4): ")?.as_str() {
        "1" => {
            let name = console.ask("Enter task name to skip: ")?;
            coach.adjust_schedule(&ScheduleFeedback::skip(name.as_str()));
            println!("Task '{name}' removed from schedule.");
        }
        "2" => {
            let name = console.ask("Enter task name: ")?;
            let time = console.ask("Enter task time (HH:MM): ")?;
            let period = console.ask("Enter period (morning/afternoon/evening): ")?.to_lowercase();
            let period = match period.parse::<Period>() {
                Ok(period) => period,
                Err(_) => Period::Afternoon,
            };
            coach.adjust_schedule(&ScheduleFeedback::add(TaskSpec::new(
                period.as_str(),
                time,
                name.as_str(),
            )));
            println!("Task '{name}' added to schedule.");
        }
        "3" => {
            let name = console.ask("Enter task name to reschedule: ")?;
            let time = console.ask("Enter new time (HH:MM): ")?;
            coach.adjust_schedule(&ScheduleFeedback::move_task(name.as_str(), time.as_str()));
            println!("Task '{name}' rescheduled to {time}.");
        }
        _ => println!("Cancelled."),
    }
    Ok(())
}

fn run() -> CoachResult<()> {
    println!("\nInitializing Daily Coach...");
    let mut coach = DailyCoach::new();
    println!("Coach initialized successfully!");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    loop {
        display_menu();
        let choice = match console.prompt("\nEnter your choice (1-7): ")? {
            Some(choice) => choice,
            None => {
                println!("\n\nExiting application...");
                "7".to_string()
            }
        };

        match choice.as_str() {
            "1" => generate(&mut coach),
            "2" => reminders(&mut coach),
            "3" => println!("\n{}", coach.summary()),
            "4" => adjust_schedule(&mut console, &mut coach)?,
            "5" => update_preferences(&mut console, &mut coach)?,
            "6" => learn_habits(&mut console, &mut coach)?,
            "7" => {
                println!("\nThank you for using Daily Coach!");
                println!("Stay productive!\n");
                break;
            }
            _ => println!("\nInvalid choice. Please select 1-7."),
        }

        console.prompt("\nPress Enter to continue...")?;
    }
    Ok(())
}

fn main() {
    daily_coach::init_tracing();
    if let Err(err) = run() {
        eprintln!("\nError: {err}");
        std::process::exit(1);
    }
}
