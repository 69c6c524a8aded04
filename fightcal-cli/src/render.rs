//! Colored terminal rendering for fightcal-core types.

use fightcal_core::classify::is_pay_per_view;
use fightcal_core::{BuildContext, FeedReport, RawEvent};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for FeedReport {
    fn render(&self) -> String {
        match &self.result {
            Ok(count) => format!(
                "{} {} {}",
                "✓".green(),
                self.path.display(),
                format!("({} {})", count, pluralize("event", *count)).dimmed()
            ),
            Err(e) => format!(
                "{} {} {}",
                "✗".red(),
                self.path.display(),
                e.to_string().red()
            ),
        }
    }
}

/// One line per event: local start time, PPV marker, name.
pub fn render_event(event: &RawEvent, ctx: &BuildContext) -> String {
    let start = event.start_datetime().ok().map(|dt| {
        dt.with_timezone(&ctx.timezone)
            .format("%a %b %-d %Y %H:%M %Z")
            .to_string()
    });

    let start = match start {
        Some(s) => s.dimmed().to_string(),
        None => format!("invalid date '{}'", event.date).red().to_string(),
    };

    let marker = if is_pay_per_view(event) {
        "PPV".yellow().bold().to_string()
    } else {
        "   ".to_string()
    };

    format!("{} {} {}", start, marker, event.name)
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
