//! Mapping raw events to calendar entries.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::constants::{EVENT_DURATION_HOURS, REMINDER_MINUTES_BEFORE};
use crate::context::BuildContext;
use crate::description::synthesize_description;
use crate::error::FightCalResult;
use crate::raw_event::RawEvent;

/// A display reminder attached to an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Minutes before the entry starts
    pub minutes_before: i64,
    pub message: String,
}

/// A calendar-ready event belonging to one named feed.
#[derive(Debug, Clone)]
pub struct CalendarEntry {
    pub uid: String,
    pub cal_name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Tz>,
    pub duration: Duration,
    pub reminders: Vec<Reminder>,
}

impl CalendarEntry {
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.start + self.duration
    }
}

/// Build the entry for `event` in the calendar named `cal_name`.
///
/// Fails only when the event's start date is not a usable epoch timestamp.
pub fn to_calendar_entry(
    event: &RawEvent,
    cal_name: &str,
    ctx: &BuildContext,
) -> FightCalResult<CalendarEntry> {
    let main_start = event.start_datetime()?;
    let start = main_start.with_timezone(&ctx.timezone);

    Ok(CalendarEntry {
        uid: event.url.clone(),
        cal_name: cal_name.to_string(),
        title: event.name.clone(),
        description: synthesize_description(event, main_start.timestamp(), ctx),
        location: event.location.clone(),
        start,
        duration: Duration::hours(EVENT_DURATION_HOURS),
        reminders: vec![Reminder {
            minutes_before: REMINDER_MINUTES_BEFORE,
            message: format!("{} starting soon!", event.name),
        }],
    })
}
