use anyhow::{Context, Result};
use fightcal_core::config::FightCalConfig;

use crate::render::render_event;
use crate::utils::tui::with_spinner;

pub async fn run(config: &FightCalConfig) -> Result<()> {
    let ctx = config.build_context()?;
    let source = config.event_source();

    let result = with_spinner(
        format!("Fetching events from {}", source),
        source.fetch_all_events(),
    )
    .await;

    let events = result.with_context(|| format!("Could not fetch events from {}", source))?;

    for event in &events {
        println!("{}", render_event(event, &ctx));
    }

    Ok(())
}
