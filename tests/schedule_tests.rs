use daily_coach::{
    Anchor, DailySchedule, Period, Preferences, ScheduleTemplate, Task, TemplateEntry, add_minutes,
};

fn sample() -> DailySchedule {
    let mut schedule = DailySchedule::new();
    schedule.replace_period(Period::Evening, vec![Task::new("19:00", "Dinner")]);
    schedule.replace_period(Period::Morning, vec![Task::new("07:30", "Run"), Task::new("08:00", "Dinner leftovers")]);
    schedule.replace_period(Period::Afternoon, Vec::new());
    schedule
}

#[test]
fn minute_arithmetic_wraps_at_midnight() {
    assert_eq!(add_minutes("10:00", 30), "10:30");
    assert_eq!(add_minutes("23:30", 45), "00:15");
    assert_eq!(add_minutes("not a time", 45), "not a time");
}

#[test]
fn iteration_order_is_fixed_regardless_of_insertion() {
    let schedule = sample();
    let order: Vec<Period> = schedule.iter().map(|(period, _)| period).collect();
    assert_eq!(order, vec![Period::Morning, Period::Afternoon, Period::Evening]);
}

#[test]
fn emptied_periods_keep_schedule_generated() {
    let mut schedule = sample();
    assert_eq!(schedule.remove_matching("dinner"), 2);
    assert_eq!(schedule.remove_matching("run"), 1);
    assert_eq!(schedule.task_count(), 0);
    assert!(!schedule.is_empty());
    assert!(schedule.has_period(Period::Evening));
}

#[test]
fn reschedule_first_scans_in_period_order() {
    let mut schedule = sample();
    assert!(schedule.reschedule_first("DINNER", "09:00"));
    assert_eq!(schedule.tasks(Period::Morning)[1].time, "09:00");
    assert_eq!(schedule.tasks(Period::Evening)[0].time, "19:00");
    assert!(!schedule.reschedule_first("yoga", "09:00"));
}

#[test]
fn push_only_into_existing_periods() {
    let mut schedule = DailySchedule::new();
    assert!(!schedule.push(Period::Morning, Task::new("06:00", "Coffee")));
    assert!(schedule.is_empty());
}

#[test]
fn summary_lists_each_period_with_indented_tasks() {
    let summary = sample().summary();
    let expected = "=== Daily Schedule ===\n\nMORNING:\n  07:30 - Run\n  08:00 - Dinner leftovers\n\nAFTERNOON:\n\nEVENING:\n  19:00 - Dinner\n";
    assert_eq!(summary, expected);
}

#[test]
fn custom_template_renders_all_periods() {
    let template = ScheduleTemplate {
        morning: vec![TemplateEntry::new(Anchor::AfterWake(15), "Meditate")],
        afternoon: Vec::new(),
        evening: vec![TemplateEntry::new(Anchor::Sleep, "Lights out")],
    };
    let mut prefs = Preferences::default();
    prefs.wake_time = "06:50".into();
    let schedule = template.render(&prefs);
    assert_eq!(schedule.period_count(), 3);
    assert_eq!(schedule.tasks(Period::Morning), &[Task::new("07:05", "Meditate")]);
    assert!(schedule.tasks(Period::Afternoon).is_empty());
    assert_eq!(schedule.tasks(Period::Evening), &[Task::new("22:00", "Lights out")]);
}

#[test]
fn default_template_matches_default_preferences() {
    let schedule = ScheduleTemplate::default().render(&Preferences::default());
    let reminders = schedule.reminders();
    assert_eq!(
        reminders,
        vec![
            "07:30 - Morning workout",
            "08:00 - Breakfast",
            "08:30 - Plan the day",
            "12:00 - Lunch",
            "13:00 - Deep focus work",
            "15:30 - Short break and stretch",
            "18:00 - Relax and unwind",
            "19:00 - Dinner",
            "22:00 - Reflection and wind down",
        ]
    );
}

#[test]
fn period_parsing_is_exact() {
    assert_eq!("evening".parse::<Period>(), Ok(Period::Evening));
    assert!("Evening".parse::<Period>().is_err());
    assert!("night".parse::<Period>().is_err());
}

#[test]
fn huge_wake_offsets_still_render() {
    let template = ScheduleTemplate {
        morning: vec![TemplateEntry::new(Anchor::AfterWake(i64::MAX), "Very late start")],
        afternoon: Vec::new(),
        evening: Vec::new(),
    };
    let schedule = template.render(&Preferences::default());
    assert_eq!(schedule.tasks(Period::Morning), &[Task::new("01:07", "Very late start")]);
}

#[test]
fn schedule_serializes_as_period_map() {
    let schedule = ScheduleTemplate::default().render(&Preferences::default());
    let value = serde_json::to_value(&schedule).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["afternoon", "evening", "morning"]);
    assert_eq!(value["afternoon"][0], serde_json::json!({"time": "12:00", "task": "Lunch"}));

    let back: DailySchedule = serde_json::from_value(value).unwrap();
    assert_eq!(back, schedule);
}

#[test]
fn unknown_period_error_names_the_input() {
    let err = "night".parse::<Period>().unwrap_err();
    assert_eq!(err.to_string(), "unknown period 'night'");
}
