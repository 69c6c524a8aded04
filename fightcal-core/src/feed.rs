//! Feed assembly: select events, map them to entries, serialize, write.
//!
//! The two feeds share nothing but the (immutable) event list, so each one
//! gets its own `FeedReport` and a failure in one never stops the other.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::classify::is_pay_per_view;
use crate::constants::{FULL_CALENDAR_NAME, PPV_CALENDAR_NAME};
use crate::context::BuildContext;
use crate::entry::{CalendarEntry, to_calendar_entry};
use crate::error::{FightCalError, FightCalResult};
use crate::ics::generate_feed;
use crate::raw_event::RawEvent;
use crate::source::EventSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Every event.
    Full,
    /// Numbered (pay-per-view) events only.
    PayPerView,
}

impl FeedKind {
    pub const ALL: [FeedKind; 2] = [FeedKind::Full, FeedKind::PayPerView];

    pub fn cal_name(self) -> &'static str {
        match self {
            FeedKind::Full => FULL_CALENDAR_NAME,
            FeedKind::PayPerView => PPV_CALENDAR_NAME,
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.ics", self.cal_name())
    }

    pub fn includes(self, event: &RawEvent) -> bool {
        match self {
            FeedKind::Full => true,
            FeedKind::PayPerView => is_pay_per_view(event),
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cal_name())
    }
}

/// The entries of one feed, ready to serialize.
#[derive(Debug, Clone)]
pub struct Feed {
    pub kind: FeedKind,
    pub entries: Vec<CalendarEntry>,
}

impl Feed {
    pub fn to_ics(&self, ctx: &BuildContext) -> FightCalResult<String> {
        generate_feed(self.kind.cal_name(), &self.entries, ctx.generated_at)
    }

    /// Serialize and overwrite `<output_dir>/<cal name>.ics`.
    pub fn write(&self, output_dir: &Path, ctx: &BuildContext) -> FightCalResult<PathBuf> {
        let content = self.to_ics(ctx)?;
        let path = output_dir.join(self.kind.file_name());
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Outcome of producing one feed file.
#[derive(Debug)]
pub struct FeedReport {
    pub kind: FeedKind,
    pub path: PathBuf,
    /// Number of entries written, or why the feed was not written.
    pub result: FightCalResult<usize>,
}

impl FeedReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Map the events belonging to `kind` into entries, in source order.
pub fn build_feed(
    events: &[RawEvent],
    kind: FeedKind,
    ctx: &BuildContext,
) -> FightCalResult<Feed> {
    let entries = events
        .iter()
        .filter(|event| kind.includes(event))
        .map(|event| to_calendar_entry(event, kind.cal_name(), ctx))
        .collect::<FightCalResult<Vec<_>>>()?;

    debug!(feed = %kind, count = entries.len(), "built feed");
    Ok(Feed { kind, entries })
}

/// Reject the batch if any event has an unusable start date.
pub fn validate_events(events: &[RawEvent]) -> FightCalResult<()> {
    for event in events {
        event.start_datetime()?;
    }
    Ok(())
}

/// Build and write every feed into `output_dir`.
///
/// Errors returned here are fatal to the whole run and happen before any file
/// is touched. Per-feed failures are reported in the returned list instead.
pub fn write_feeds(
    events: &[RawEvent],
    ctx: &BuildContext,
    output_dir: &Path,
) -> FightCalResult<Vec<FeedReport>> {
    if events.is_empty() {
        return Err(FightCalError::NoEvents("event list".into()));
    }
    validate_events(events)?;

    std::fs::create_dir_all(output_dir)?;

    Ok(FeedKind::ALL
        .into_iter()
        .map(|kind| write_feed(events, kind, ctx, output_dir))
        .collect())
}

fn write_feed(
    events: &[RawEvent],
    kind: FeedKind,
    ctx: &BuildContext,
    output_dir: &Path,
) -> FeedReport {
    let path = output_dir.join(kind.file_name());

    let result = build_feed(events, kind, ctx).and_then(|feed| {
        feed.write(output_dir, ctx)?;
        Ok(feed.entries.len())
    });

    match &result {
        Ok(count) => info!(feed = %kind, count, path = %path.display(), "wrote feed"),
        Err(e) => warn!(feed = %kind, error = %e, "feed not written"),
    }

    FeedReport { kind, path, result }
}

/// Fetch events from `source` and write both feeds.
pub async fn run(
    source: &EventSource,
    ctx: &BuildContext,
    output_dir: &Path,
) -> FightCalResult<Vec<FeedReport>> {
    let events = source.fetch_all_events().await?;
    write_feeds(&events, ctx, output_dir)
}
