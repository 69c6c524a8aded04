use anyhow::{Context, Result};
use fightcal_core::config::FightCalConfig;
use fightcal_core::feed;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::render::Render;
use crate::utils::tui::with_spinner;

pub async fn run(config: &FightCalConfig) -> Result<()> {
    let ctx = config.build_context()?;
    let source = config.event_source();
    let output_dir = config.output_path();
    debug!(output_dir = %output_dir.display(), timezone = %ctx.timezone, "building feeds");

    let result = with_spinner(
        format!("Fetching events from {}", source),
        source.fetch_all_events(),
    )
    .await;

    let events = result.with_context(|| format!("Could not fetch events from {}", source))?;
    println!("Fetched {} events from {}", events.len(), source);

    let reports = feed::write_feeds(&events, &ctx, &output_dir)
        .with_context(|| format!("No feeds written to {}", output_dir.display()))?;

    for report in &reports {
        println!("   {}", report.render());
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} feeds could not be written", failed, reports.len());
    }

    println!("{}", "Feeds up to date".green());
    Ok(())
}
