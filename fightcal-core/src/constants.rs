/// Calendar name of the feed carrying every event.
pub const FULL_CALENDAR_NAME: &str = "UFC";

/// Calendar name of the pay-per-view feed.
pub const PPV_CALENDAR_NAME: &str = "UFC-PPV";

/// Events are assumed to run this long; the source has no end times.
pub const EVENT_DURATION_HOURS: i64 = 3;

pub const REMINDER_MINUTES_BEFORE: i64 = 30;

/// Underline printed below each card section header in descriptions.
pub const SECTION_SEPARATOR: &str = "--------------------";

pub const DEFAULT_FOOTER_TIMEZONE: &str = "America/New_York";

pub const DEFAULT_PROVIDER: &str = "ufc";

pub const PRODUCT_ID: &str = "-//fightcal//UFC Calendar//EN";
