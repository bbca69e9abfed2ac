//! Tests for the status store (load, save, update, show)

use std::fs;

use momo_status::StatusError;
use momo_status::adapters::JsonTimelineFile;
use momo_status::core::models::{ProjectUpdate, StatusUpdate};
use momo_status::core::services::{StatusStore, format_timestamp};
use serde_json::Number;

use crate::common::{DASHBOARD, FixedClock, SCENARIO, TimelineFixture, UNORDERED, at};

fn without_last_updated(mut value: serde_json::Value) -> serde_json::Value {
    value["status"].as_object_mut().unwrap().remove("lastUpdated");
    value
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

#[test]
fn load_missing_file_is_not_found() {
    let fixture = TimelineFixture::missing();
    let err = fixture.store(FixedClock(at(9, 0))).load().unwrap_err();
    assert!(matches!(err, StatusError::NotFound { .. }));
    assert!(err.to_string().contains("timeline.json"));
}

#[test]
fn load_malformed_json_is_parse_error() {
    let fixture = TimelineFixture::new("{ \"status\": ");
    let err = fixture.store(FixedClock(at(9, 0))).load().unwrap_err();
    assert!(matches!(err, StatusError::Parse { .. }));
}

#[test]
fn load_wrong_shape_is_parse_error() {
    let fixture = TimelineFixture::new(r#"{"events": []}"#);
    let err = fixture.store(FixedClock(at(9, 0))).load().unwrap_err();
    assert!(matches!(err, StatusError::Parse { .. }));
}

#[test]
fn save_write_failure_is_io_error() {
    let fixture = TimelineFixture::new(SCENARIO);
    let mut doc = fixture.store(FixedClock(at(9, 0))).load().unwrap();

    // A regular file cannot be used as a directory
    let blocked = StatusStore::new(
        JsonTimelineFile::new(fixture.path().join("timeline.json")),
        FixedClock(at(9, 0)),
    );
    let err = blocked.save(&mut doc).unwrap_err();
    assert!(matches!(err, StatusError::Io { .. }));
}

#[test]
fn round_trip_preserves_everything_but_last_updated() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let before: serde_json::Value = serde_json::from_str(DASHBOARD).unwrap();

    let store = fixture.store(FixedClock(at(10, 30)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let after = fixture.json();
    assert_eq!(after["status"]["lastUpdated"], "2026-10-18T10:30:00.000000+08:00");
    assert_eq!(without_last_updated(after), without_last_updated(before));
}

#[test]
fn save_advances_last_updated() {
    let fixture = TimelineFixture::new(SCENARIO);

    let first = fixture.store(FixedClock(at(9, 0)));
    let mut doc = first.load().unwrap();
    first.save(&mut doc).unwrap();
    let t1 = fixture.json()["status"]["lastUpdated"].as_str().unwrap().to_string();

    let second = fixture.store(FixedClock(at(9, 1)));
    let mut doc = second.load().unwrap();
    second.save(&mut doc).unwrap();
    let t2 = fixture.json()["status"]["lastUpdated"].as_str().unwrap().to_string();

    assert!(t2 > t1, "{t2} should be later than {t1}");
}

#[test]
fn save_writes_two_space_indent_and_literal_unicode() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let store = fixture.store(FixedClock(at(9, 0)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let text = fixture.text();
    assert!(text.starts_with("{\n  \"status\": {\n    \"currentActivity\": \"写代码\""));
    assert!(text.contains("\"Momo 网站\""));
    assert!(text.contains("晨跑"));
    assert!(!text.contains("\\u"));
}

#[test]
fn save_keeps_unknown_keys_in_read_order() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let store = fixture.store(FixedClock(at(9, 0)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let text = fixture.text();
    let description = text.find("\"description\"").unwrap();
    let start_time = text.find("\"startTime\"").unwrap();
    let category = text.find("\"category\"").unwrap();
    let tags = text.find("\"tags\"").unwrap();
    assert!(description < start_time);
    assert!(start_time < category);
    assert!(category < tags);
}

#[test]
fn save_reproduces_file_apart_from_last_updated() {
    let fixture = TimelineFixture::new(UNORDERED);
    let store = fixture.store(FixedClock(at(9, 0)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let expected = UNORDERED.replace("\"T0\"", &format!("\"{}\"", format_timestamp(&at(9, 0))));
    assert_eq!(fixture.text(), expected);
}

#[test]
fn update_project_keeps_layout_of_untouched_keys() {
    let fixture = TimelineFixture::new(UNORDERED);
    let store = fixture.store(FixedClock(at(9, 0)));

    let result = store.update_project("y", &ProjectUpdate::default().status("paused")).unwrap();
    assert!(result.found);
    assert_eq!(result.event.unwrap().progress, Some(Number::from(300)));

    let expected = UNORDERED
        .replace("\"T0\"", &format!("\"{}\"", format_timestamp(&at(9, 0))))
        .replace("\"status\": \"active\"", "\"status\": \"paused\"");
    assert_eq!(fixture.text(), expected);
}

#[test]
fn progress_on_event_without_one_is_appended() {
    let fixture = TimelineFixture::new(UNORDERED);
    let store = fixture.store(FixedClock(at(9, 0)));
    store.update_project("x", &ProjectUpdate::default().progress(40)).unwrap();

    let text = fixture.text();
    assert!(text.contains("\"progress\": 40"));
    let json = fixture.json();
    let keys: Vec<&String> = json["events"][0].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["description", "id", "status", "title", "progress"]);
}

#[test]
fn load_count_shaped_status_is_parse_error() {
    let fixture = TimelineFixture::new(
        r#"{"status":{"currentActivity":"A","mood":"M","activeProjects":3,"todayTasks":5},"events":[]}"#,
    );
    let err = fixture.store(FixedClock(at(9, 0))).load().unwrap_err();
    assert!(matches!(err, StatusError::Parse { .. }));
}

#[test]
fn save_replaces_file_without_leftovers() {
    let fixture = TimelineFixture::new(SCENARIO);
    let store = fixture.store(FixedClock(at(9, 0)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let names: Vec<String> = fs::read_dir(fixture.path().parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["timeline.json"]);
}

#[cfg(unix)]
#[test]
fn save_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = TimelineFixture::new(SCENARIO);
    fs::set_permissions(fixture.path(), fs::Permissions::from_mode(0o644)).unwrap();

    let store = fixture.store(FixedClock(at(9, 0)));
    let mut doc = store.load().unwrap();
    store.save(&mut doc).unwrap();

    let mode = fs::metadata(fixture.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn format_timestamp_keeps_offset() {
    assert_eq!(format_timestamp(&at(23, 59)), "2026-10-18T23:59:00.000000+08:00");
}

// =============================================================================
// UPDATE PROJECT
// =============================================================================

#[test]
fn update_project_scenario_changes_only_progress() {
    let fixture = TimelineFixture::new(SCENARIO);
    let store = fixture.store(FixedClock(at(14, 5)));

    let result = store.update_project("x", &ProjectUpdate::default().progress(50)).unwrap();
    assert!(result.found);
    assert_eq!(result.event.unwrap().title, "X");

    let after = fixture.json();
    assert_eq!(after["events"][0]["progress"], 50);
    assert_eq!(after["events"][0]["status"], "doing");
    assert_eq!(after["events"][0]["title"], "X");
    assert_ne!(after["status"]["lastUpdated"], "T0");
    assert_eq!(after["status"]["lastUpdated"], format_timestamp(&at(14, 5)));

    let mut expected: serde_json::Value = serde_json::from_str(SCENARIO).unwrap();
    expected["events"][0]["progress"] = 50.into();
    assert_eq!(without_last_updated(after), without_last_updated(expected));
}

#[test]
fn update_project_unknown_id_writes_nothing() {
    let fixture = TimelineFixture::new(SCENARIO);
    let before = fixture.bytes();
    let store = fixture.store(FixedClock(at(14, 5)));

    let result = store.update_project("y", &ProjectUpdate::default().progress(50)).unwrap();
    assert!(!result.found);
    assert_eq!(result.id, "y");
    assert!(result.event.is_none());
    assert_eq!(fixture.bytes(), before);
}

#[test]
fn update_project_leaves_other_events_untouched() {
    for id in ["website", "agent", "blog"] {
        let fixture = TimelineFixture::new(DASHBOARD);
        let before = fixture.json();
        let store = fixture.store(FixedClock(at(8, 0)));

        store.update_project(id, &ProjectUpdate::default().progress(42)).unwrap();

        let after = fixture.json();
        let events_before = before["events"].as_array().unwrap();
        let events_after = after["events"].as_array().unwrap();
        assert_eq!(events_before.len(), events_after.len());
        for (old, new) in events_before.iter().zip(events_after) {
            if old["id"] == id {
                assert_eq!(new["progress"], 42);
                let mut old = old.clone();
                old["progress"] = 42.into();
                assert_eq!(&old, new);
            } else {
                assert_eq!(old, new);
            }
        }
    }
}

#[test]
fn update_project_sets_status_label() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let store = fixture.store(FixedClock(at(8, 0)));

    let result = store.update_project("agent", &ProjectUpdate::default().status("active")).unwrap();
    assert_eq!(result.event.unwrap().status, "active");

    let after = fixture.json();
    assert_eq!(after["events"][1]["status"], "active");
    assert!(after["events"][1].get("progress").is_none());
}

#[test]
fn update_project_touches_first_duplicate_only() {
    let fixture = TimelineFixture::new(
        r#"{"status":{"currentActivity":"A","mood":"M"},"events":[
            {"id":"dup","title":"First","status":"active","progress":1},
            {"id":"dup","title":"Second","status":"active","progress":2}
        ]}"#,
    );
    let store = fixture.store(FixedClock(at(8, 0)));

    let result = store.update_project("dup", &ProjectUpdate::default().progress(99)).unwrap();
    assert_eq!(result.event.unwrap().title, "First");

    let after = fixture.json();
    assert_eq!(after["events"][0]["progress"], 99);
    assert_eq!(after["events"][1]["progress"], 2);
}

// =============================================================================
// UPDATE STATUS
// =============================================================================

#[test]
fn update_status_with_nothing_changes_only_last_updated() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let before = fixture.json();
    let store = fixture.store(FixedClock(at(11, 0)));

    let result = store.update_status(StatusUpdate::default()).unwrap();
    assert!(result.updated.is_empty());

    let after = fixture.json();
    assert_ne!(after["status"]["lastUpdated"], before["status"]["lastUpdated"]);
    assert_eq!(without_last_updated(after), without_last_updated(before));
}

#[test]
fn update_status_overwrites_given_fields() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let store = fixture.store(FixedClock(at(11, 0)));

    let update = StatusUpdate::default().activity("写文档").mood("开心");
    let result = store.update_status(update).unwrap();
    assert_eq!(result.updated, vec!["currentActivity", "mood"]);
    assert_eq!(result.current_activity, "写文档");

    let after = fixture.json();
    assert_eq!(after["status"]["currentActivity"], "写文档");
    assert_eq!(after["status"]["mood"], "开心");
    assert_eq!(after["status"]["activeProjects"], serde_json::json!(["momo-website", "agent"]));
    assert_eq!(after["status"]["todayTasks"], serde_json::json!(["review PR"]));
}

#[test]
fn update_status_empty_list_clears_but_omitted_list_stays() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let store = fixture.store(FixedClock(at(11, 0)));

    store.update_status(StatusUpdate::default().projects(Vec::new())).unwrap();

    let after = fixture.json();
    assert_eq!(after["status"]["activeProjects"], serde_json::json!([]));
    assert_eq!(after["status"]["todayTasks"], serde_json::json!(["review PR"]));
}

#[test]
fn update_status_on_missing_file_creates_nothing() {
    let fixture = TimelineFixture::missing();
    let store = fixture.store(FixedClock(at(11, 0)));

    let err = store.update_status(StatusUpdate::default().activity("x")).unwrap_err();
    assert!(matches!(err, StatusError::NotFound { .. }));
    assert!(fs::metadata(fixture.path()).is_err());
}

// =============================================================================
// SHOW
// =============================================================================

#[test]
fn show_lists_events_in_document_order() {
    let fixture = TimelineFixture::new(DASHBOARD);
    let overview = fixture.store(FixedClock(at(8, 0))).show().unwrap();

    assert_eq!(overview.current_activity, "写代码");
    assert_eq!(overview.mood, "专注");
    let ids: Vec<&str> = overview.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["website", "agent", "blog"]);
    assert_eq!(overview.events[0].progress, Some(Number::from(60)));
    assert_eq!(overview.events[1].progress, None);
}

#[test]
fn show_does_not_write() {
    let fixture = TimelineFixture::new(SCENARIO);
    let before = fixture.bytes();
    fixture.store(FixedClock(at(8, 0))).show().unwrap();
    assert_eq!(fixture.bytes(), before);
}
