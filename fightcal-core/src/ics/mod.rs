//! ICS feed generation.
//!
//! Wraps the icalendar crate and enforces the few rules a feed must satisfy
//! before it is written (see `generate_feed`).

mod generate;

pub use generate::generate_feed;
