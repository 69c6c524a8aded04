//! ICS feed generation.

use crate::constants::PRODUCT_ID;
use crate::entry::CalendarEntry;
use crate::error::{FightCalError, FightCalResult};
use chrono::{DateTime, Duration, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Generate one .ics document for the calendar `cal_name` holding every entry.
///
/// Every entry must belong to `cal_name`, which becomes the document's
/// X-WR-CALNAME. An empty slice yields a calendar with no events.
pub fn generate_feed(
    cal_name: &str,
    entries: &[CalendarEntry],
    generated_at: DateTime<Utc>,
) -> FightCalResult<String> {
    let mut cal = Calendar::new();
    cal.name(cal_name);

    let dtstamp = generated_at.format(ICS_UTC_FORMAT).to_string();

    for entry in entries {
        validate_entry(cal_name, entry)?;

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&entry.uid);
        ics_event.summary(&entry.title);
        ics_event.add_property("DTSTAMP", &dtstamp);

        ics_event.add_property(
            "DTSTART",
            entry.start_utc().format(ICS_UTC_FORMAT).to_string(),
        );
        ics_event.add_property("DURATION", format_duration(entry.duration));

        ics_event.description(&entry.description);

        if !entry.location.is_empty() {
            ics_event.location(&entry.location);
        }

        for reminder in &entry.reminders {
            let trigger = Trigger::before_start(Duration::minutes(reminder.minutes_before));
            ics_event.alarm(Alarm::display(&reminder.message, trigger));
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

fn validate_entry(cal_name: &str, entry: &CalendarEntry) -> FightCalResult<()> {
    if entry.cal_name != cal_name {
        return Err(FightCalError::IcsGenerate(format!(
            "Event {} belongs to calendar '{}', not '{}'",
            entry.uid, entry.cal_name, cal_name
        )));
    }
    if entry.uid.trim().is_empty() {
        return Err(FightCalError::IcsGenerate(format!(
            "Event '{}' has no UID",
            entry.title
        )));
    }
    if entry.title.trim().is_empty() {
        return Err(FightCalError::IcsGenerate(format!(
            "Event {} has an empty title",
            entry.uid
        )));
    }
    Ok(())
}

/// Format a positive duration as an RFC 5545 DURATION value (e.g. `PT3H`).
fn format_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() - hours * 60;

    match (hours, minutes) {
        (0, m) => format!("PT{}M", m),
        (h, 0) => format!("PT{}H", h),
        (h, m) => format!("PT{}H{}M", h, m),
    }
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own product identifier
/// - Remove CALSCALE:GREGORIAN (it's the default)
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODUCT_ID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
