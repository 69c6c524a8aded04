//! Core of fightcal: turns upcoming UFC events into calendar feeds.
//!
//! - `raw_event` is the input contract of event sources
//! - `description`, `classify` and `entry` map one event to a calendar entry
//! - `feed` assembles, serializes (via `ics`) and writes the UFC and UFC-PPV feeds
//! - `source` fetches raw events from a provider binary or a JSON file

pub mod classify;
pub mod config;
pub mod constants;
pub mod context;
pub mod description;
pub mod entry;
pub mod error;
pub mod feed;
pub mod ics;
pub mod raw_event;
pub mod source;

pub use context::BuildContext;
pub use entry::{CalendarEntry, Reminder};
pub use error::{FightCalError, FightCalResult};
pub use feed::{Feed, FeedKind, FeedReport};
pub use raw_event::RawEvent;
