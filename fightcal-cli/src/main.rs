mod commands;
mod logging;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fightcal_core::config::FightCalConfig;

#[derive(Parser)]
#[command(name = "fightcal")]
#[command(about = "Build UFC and UFC-PPV calendar feeds from upcoming events")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use this config file instead of ~/.config/fightcal/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch events and write UFC.ics and UFC-PPV.ics
    Build {
        /// Directory receiving the feeds
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Fetch events and print them without writing anything
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Read events from this JSON file
    #[arg(short, long, conflicts_with = "provider")]
    events: Option<PathBuf>,

    /// Fetch events with fightcal-provider-<NAME>
    #[arg(short, long)]
    provider: Option<String>,
}

impl SourceArgs {
    fn apply(self, config: &mut FightCalConfig) {
        if let Some(file) = self.events {
            config.source.file = Some(file);
        }
        if let Some(provider) = self.provider {
            config.source.provider = provider;
            config.source.file = None;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => FightCalConfig::load_from(path)?,
        None => FightCalConfig::load()?,
    };

    match cli.command {
        Commands::Build { output_dir, source } => {
            source.apply(&mut config);
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            commands::build::run(&config).await
        }
        Commands::List { source } => {
            source.apply(&mut config);
            commands::list::run(&config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_events_flag_overrides_configured_provider() {
        let cli = parse(&["fightcal", "build", "--events", "events.json"]);
        let mut config = FightCalConfig::default();

        let Commands::Build { source, .. } = cli.command else {
            panic!("expected build");
        };
        source.apply(&mut config);

        assert_eq!(config.source.file, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_provider_flag_clears_configured_file() {
        let cli = parse(&["fightcal", "list", "--provider", "mock"]);
        let mut config = FightCalConfig::default();
        config.source.file = Some(PathBuf::from("old.json"));

        let Commands::List { source } = cli.command else {
            panic!("expected list");
        };
        source.apply(&mut config);

        assert_eq!(config.source.provider, "mock");
        assert!(config.source.file.is_none());
    }

    #[test]
    fn test_events_and_provider_conflict() {
        let result = Cli::try_parse_from([
            "fightcal",
            "build",
            "--events",
            "events.json",
            "--provider",
            "ufc",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["fightcal", "build", "-vv", "--config", "/tmp/fightcal.toml"]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/fightcal.toml")));
    }
}
