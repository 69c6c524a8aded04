//! Pay-per-view detection.
//!
//! Numbered events ("UFC 300") are the pay-per-view cards; everything else
//! (Fight Nights, Contender Series, ...) is not. This is purely a naming
//! heuristic. Whitespace and digits are ASCII only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::raw_event::RawEvent;

static NUMBERED_EVENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UFC(?-u:\s)+[0-9]+").expect("valid numbered event regex"));

pub fn is_pay_per_view(event: &RawEvent) -> bool {
    is_pay_per_view_name(&event.name)
}

pub fn is_pay_per_view_name(name: &str) -> bool {
    NUMBERED_EVENT_RE.is_match(name)
}
