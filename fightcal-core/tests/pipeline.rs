//! End-to-end feed builds from a JSON events file into a temp directory.

use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use fightcal_core::feed::{self, FeedKind, build_feed};
use fightcal_core::source::EventSource;
use fightcal_core::{BuildContext, FightCalError, RawEvent};
use icalendar::parser::{read_calendar, unfold};

fn make_context(hour: u32) -> BuildContext {
    BuildContext::new(
        Utc.with_ymd_and_hms(2025, 3, 20, hour, 5, 0).unwrap(),
        Tz::UTC,
        Tz::America__New_York,
    )
}

fn make_event(name: &str, url: &str) -> RawEvent {
    RawEvent {
        name: name.to_string(),
        date: "1700000000".to_string(),
        location: "UFC APEX, Las Vegas".to_string(),
        url: url.to_string(),
        fight_card: vec![],
        main_card: vec![],
        prelims: vec![],
        early_prelims: vec![],
        prelims_time: None,
        early_prelims_time: None,
    }
}

fn write_events_file(dir: &Path, events: &[RawEvent]) -> PathBuf {
    let path = dir.join("events.json");
    std::fs::write(&path, serde_json::to_string_pretty(events).unwrap()).unwrap();
    path
}

/// (UID, SUMMARY) of every VEVENT plus the calendar name of an .ics document.
fn read_feed(path: &Path) -> (Option<String>, Vec<(String, String)>) {
    let content = std::fs::read_to_string(path).unwrap();
    let unfolded = unfold(&content);
    let calendar = read_calendar(&unfolded).unwrap();

    let cal_name = calendar
        .properties
        .iter()
        .find(|p| p.name == "X-WR-CALNAME")
        .map(|p| p.val.to_string());

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|c| {
            (
                c.find_prop("UID").unwrap().val.to_string(),
                c.find_prop("SUMMARY").unwrap().val.to_string(),
            )
        })
        .collect();

    (cal_name, events)
}

/// Lines that must not change between two builds of the same input.
fn stable_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| {
            ["UID:", "SUMMARY:", "DTSTART:", "DURATION:", "LOCATION:"]
                .iter()
                .any(|prefix| l.starts_with(prefix))
        })
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_single_fight_card_event_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut event = make_event("UFC Fight Night 50", "https://example.com/e1");
    event.fight_card = vec!["A vs B".to_string()];
    let source = EventSource::File(write_events_file(dir.path(), &[event.clone()]));
    let out = dir.path().join("out");

    let reports = feed::run(&source, &make_context(19), &out).await.unwrap();

    assert!(reports.iter().all(|r| r.is_ok()), "{:?}", reports);

    let feed = build_feed(&[event], FeedKind::Full, &make_context(19)).unwrap();
    let entry = &feed.entries[0];
    assert_eq!(entry.uid, "https://example.com/e1");
    assert!(entry.description.starts_with("A vs B\n"));
    assert!(!entry.description.contains("Main Card"));
    assert!(!entry.description.contains("Prelims"));
    assert!(
        entry
            .description
            .ends_with("https://example.com/e1\n\nAccurate as of Mar 20, 3:05 PM EDT"),
        "{}",
        entry.description
    );

    let (cal_name, events) = read_feed(&out.join("UFC.ics"));
    assert_eq!(cal_name.as_deref(), Some("UFC"));
    assert_eq!(
        events,
        vec![(
            "https://example.com/e1".to_string(),
            "UFC Fight Night 50".to_string()
        )]
    );

    let (ppv_name, ppv_events) = read_feed(&out.join("UFC-PPV.ics"));
    assert_eq!(ppv_name.as_deref(), Some("UFC-PPV"));
    assert!(ppv_events.is_empty());
}

#[tokio::test]
async fn test_ppv_event_lands_in_both_feeds() {
    let dir = tempfile::tempdir().unwrap();
    let events = vec![
        make_event("UFC 300", "https://example.com/ufc-300"),
        make_event("UFC Fight Night 50", "https://example.com/fn-50"),
    ];
    let source = EventSource::File(write_events_file(dir.path(), &events));

    feed::run(&source, &make_context(19), dir.path()).await.unwrap();

    let (full_name, full) = read_feed(&dir.path().join("UFC.ics"));
    let full_uids: Vec<&str> = full.iter().map(|(uid, _)| uid.as_str()).collect();
    assert_eq!(full_name.as_deref(), Some("UFC"));
    assert_eq!(
        full_uids,
        vec!["https://example.com/ufc-300", "https://example.com/fn-50"]
    );

    let (ppv_name, ppv) = read_feed(&dir.path().join("UFC-PPV.ics"));
    let ppv_uids: Vec<&str> = ppv.iter().map(|(uid, _)| uid.as_str()).collect();
    assert_eq!(ppv_name.as_deref(), Some("UFC-PPV"));
    assert_eq!(ppv_uids, vec!["https://example.com/ufc-300"]);
}

#[tokio::test]
async fn test_empty_acquisition_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = EventSource::File(write_events_file(dir.path(), &[]));

    let err = feed::run(&source, &make_context(19), dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, FightCalError::NoEvents(_)), "Got: {}", err);
    assert!(!dir.path().join("UFC.ics").exists());
    assert!(!dir.path().join("UFC-PPV.ics").exists());
}

#[tokio::test]
async fn test_non_numeric_date_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut bad = make_event("UFC 301", "https://example.com/ufc-301");
    bad.date = "2024-05-04".to_string();
    let events = vec![make_event("UFC 300", "https://example.com/ufc-300"), bad];
    let source = EventSource::File(write_events_file(dir.path(), &events));

    let err = feed::run(&source, &make_context(19), dir.path())
        .await
        .unwrap_err();

    assert!(
        matches!(err, FightCalError::InvalidEventDate { ref url, .. } if url == "https://example.com/ufc-301"),
        "Got: {}",
        err
    );
    assert!(!dir.path().join("UFC.ics").exists());
    assert!(!dir.path().join("UFC-PPV.ics").exists());
}

#[tokio::test]
async fn test_rebuild_changes_only_the_build_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let mut event = make_event("UFC 300", "https://example.com/ufc-300");
    event.main_card = vec!["Pereira vs Hill".to_string()];
    event.prelims = vec!["Holloway vs Gaethje".to_string()];
    event.prelims_time = Some("1699992800".to_string());
    let source = EventSource::File(write_events_file(dir.path(), &[event]));
    let first_dir = dir.path().join("first");
    let second_dir = dir.path().join("second");

    feed::run(&source, &make_context(19), &first_dir).await.unwrap();
    feed::run(&source, &make_context(21), &second_dir).await.unwrap();

    for file in ["UFC.ics", "UFC-PPV.ics"] {
        let first = stable_lines(&first_dir.join(file));
        let second = stable_lines(&second_dir.join(file));
        assert!(!first.is_empty());
        assert_eq!(first, second, "{file} differs beyond the build stamp");
        assert!(first.contains(&"DURATION:PT3H".to_string()));
    }
}
