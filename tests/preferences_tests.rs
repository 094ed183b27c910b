use daily_coach::{CoachError, Preferences};
use serde_json::{Map, Value, json};

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn merge_accepts_numeric_strings_for_integer_keys() {
    let mut prefs = Preferences::default();
    prefs.merge(&obj(json!({"workHours": "6", "break_interval": 45})));
    assert_eq!(prefs.work_hours, 6);
    assert_eq!(prefs.break_interval, 45);
}

#[test]
fn merge_ignores_wrong_shapes_for_known_keys() {
    let mut prefs = Preferences::default();
    prefs.merge(&obj(json!({"work_hours": "lots", "wake_time": 6})));
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn merge_keeps_unknown_keys_as_extra() {
    let mut prefs = Preferences::default();
    prefs.merge(&obj(json!({"focus_music": "lofi"})));
    assert_eq!(prefs.extra.get("focus_music"), Some(&json!("lofi")));
    let entries = prefs.entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], ("wake_time".to_string(), "07:00".to_string()));
    assert_eq!(entries[4], ("focus_music".to_string(), "lofi".to_string()));
}

#[test]
fn set_field_rejects_bad_numbers_and_keeps_previous_value() {
    let mut prefs = Preferences::default();
    let err = prefs.set_field("work_hours", "eight").unwrap_err();
    assert!(matches!(err, CoachError::InvalidNumber { field: "work_hours", .. }));
    assert_eq!(prefs.work_hours, 8);

    prefs.set_field("work_hours", " 10 ").unwrap();
    assert_eq!(prefs.work_hours, 10);
}

#[test]
fn set_field_stores_times_verbatim() {
    let mut prefs = Preferences::default();
    prefs.set_field("sleepTime", "23:15").unwrap();
    assert_eq!(prefs.value_of("sleep_time").as_deref(), Some("23:15"));
    assert!(matches!(
        prefs.set_field("nap_time", "14:00"),
        Err(CoachError::UnknownPreference(_))
    ));
}

#[test]
fn deserializes_with_camel_case_aliases() {
    let prefs: Preferences = serde_json::from_value(json!({
        "wakeTime": "05:45",
        "sleep_time": "21:30",
        "workHours": 7,
        "break_interval": 60
    }))
    .unwrap();
    assert_eq!(prefs.wake_time, "05:45");
    assert_eq!(prefs.work_hours, 7);
    assert!(prefs.extra.is_empty());
}

#[test]
fn deserializing_partial_preferences_fills_defaults() {
    let prefs: Preferences = serde_json::from_value(json!({"wake_time": "06:00"})).unwrap();
    assert_eq!(prefs.wake_time, "06:00");
    assert_eq!(prefs.sleep_time, "22:00");
    assert_eq!(prefs.work_hours, 8);
    assert_eq!(prefs.break_interval, 90);
}
