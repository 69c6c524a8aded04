//! Where raw events come from.

pub mod protocol;
mod provider;

pub use provider::Provider;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FightCalError, FightCalResult};
use crate::raw_event::RawEvent;
use protocol::ListEvents;

#[derive(Debug, Clone)]
pub enum EventSource {
    /// An external `fightcal-provider-<name>` binary.
    Provider(Provider),
    /// A JSON array of raw events on disk.
    File(PathBuf),
}

impl EventSource {
    /// Fetch every upcoming event. An empty result is an error.
    pub async fn fetch_all_events(&self) -> FightCalResult<Vec<RawEvent>> {
        let events = match self {
            EventSource::Provider(provider) => provider.call(ListEvents {}).await?,
            EventSource::File(path) => read_events_file(path).await?,
        };

        if events.is_empty() {
            return Err(FightCalError::NoEvents(self.to_string()));
        }

        info!(count = events.len(), source = %self, "fetched events");
        Ok(events)
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Provider(provider) => write!(f, "provider '{}'", provider.name()),
            EventSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn read_events_file(path: &Path) -> FightCalResult<Vec<RawEvent>> {
    let events_file_error = |reason: String| FightCalError::EventsFile {
        path: path.display().to_string(),
        reason,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| events_file_error(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| events_file_error(e.to_string()))
}
