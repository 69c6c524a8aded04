//! Description text for calendar entries.
//!
//! Calendar clients show the description verbatim, so section order and
//! spacing are fixed: unlabeled fight card, main card, prelims, early prelims,
//! event URL, then the build stamp.

use crate::constants::SECTION_SEPARATOR;
use crate::context::BuildContext;
use crate::raw_event::RawEvent;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Build the description for `event`, whose main card starts at `main_start`
/// (epoch seconds).
pub fn synthesize_description(event: &RawEvent, main_start: i64, ctx: &BuildContext) -> String {
    let mut description = String::new();

    if !event.fight_card.is_empty() {
        description.push_str(&event.fight_card.join("\n"));
        description.push('\n');
    }

    if !event.main_card.is_empty() {
        push_section(&mut description, "Main Card", &event.main_card);
    }

    push_timed_section(
        &mut description,
        "Prelims",
        &event.prelims,
        event.prelims_timestamp(),
        main_start,
    );
    push_timed_section(
        &mut description,
        "Early Prelims",
        &event.early_prelims,
        event.early_prelims_timestamp(),
        main_start,
    );

    description.push('\n');
    description.push_str(&event.url);
    description.push_str("\n\n");
    description.push_str("Accurate as of ");
    description.push_str(&format_build_stamp(ctx));

    description
}

/// Render the build time as e.g. `Mar 20, 3:05 PM EDT`.
pub fn format_build_stamp(ctx: &BuildContext) -> String {
    ctx.generated_at
        .with_timezone(&ctx.footer_timezone)
        .format("%b %-d, %-I:%M %p %Z")
        .to_string()
}

fn push_section(description: &mut String, header: &str, entries: &[String]) {
    description.push_str(header);
    description.push('\n');
    description.push_str(SECTION_SEPARATOR);
    description.push('\n');
    description.push_str(&entries.join("\n"));
    description.push('\n');
}

/// Prelim sections are preceded by a blank line and, when they start before
/// the main card, annotated with how many hours earlier.
fn push_timed_section(
    description: &mut String,
    title: &str,
    entries: &[String],
    section_start: Option<i64>,
    main_start: i64,
) {
    if entries.is_empty() {
        return;
    }

    let header = match section_start.and_then(|start| hours_before_main(main_start, start)) {
        Some(hours) => format!("{} ({} hrs before Main)", title, hours),
        None => title.to_string(),
    };

    description.push('\n');
    push_section(description, &header, entries);
}

/// Fractional hours between a section start and the main card, only when the
/// section actually starts earlier.
fn hours_before_main(main_start: i64, section_start: i64) -> Option<f64> {
    let hours = main_start.checked_sub(section_start)? as f64 / SECONDS_PER_HOUR;
    (hours > 0.0).then_some(hours)
}
