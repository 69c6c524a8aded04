//! Provider subprocess protocol.
//!
//! Event acquisition lives outside fightcal: a provider is any executable
//! named `fightcal-provider-<name>` on PATH that reads one JSON request line
//! from stdin and answers with one JSON response on stdout.

use crate::error::{FightCalError, FightCalResult};
use crate::source::protocol::{Command, ProviderCommand, Request, Response};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::debug;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn binary_name(&self) -> String {
        format!("fightcal-provider-{}", self.0)
    }

    fn binary_path(&self) -> FightCalResult<PathBuf> {
        let binary_name = self.binary_name();
        which::which(&binary_name).map_err(|_| FightCalError::ProviderNotInstalled(binary_name))
    }

    /// Call a typed provider command and return the result.
    ///
    /// The response type is inferred from the command's associated type,
    /// ensuring compile-time type safety.
    pub async fn call<C: ProviderCommand>(&self, cmd: C) -> FightCalResult<C::Response> {
        let binary_path = self.binary_path()?;
        self.call_binary(&binary_path, cmd).await
    }

    /// Like `call`, against an explicit executable instead of a PATH lookup.
    pub async fn call_binary<C: ProviderCommand>(
        &self,
        binary_path: &std::path::Path,
        cmd: C,
    ) -> FightCalResult<C::Response> {
        timeout(PROVIDER_TIMEOUT, call_raw(binary_path, C::command(), cmd))
            .await
            .map_err(|_| FightCalError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }
}

/// Low-level call that sends a command with params and deserializes the response.
async fn call_raw<P: Serialize, R: serde::de::DeserializeOwned>(
    binary_path: &std::path::Path,
    command: Command,
    params: P,
) -> FightCalResult<R> {
    let params =
        serde_json::to_value(params).map_err(|e| FightCalError::Serialization(e.to_string()))?;
    let request = Request { command, params };
    let request_json =
        serde_json::to_string(&request).map_err(|e| FightCalError::Serialization(e.to_string()))?;

    debug!(binary = %binary_path.display(), ?command, "calling provider");

    let mut child = TokioCommand::new(binary_path)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            FightCalError::Provider(format!("Failed to spawn {}: {}", binary_path.display(), e))
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| FightCalError::Provider("Provider stdin was not captured".into()))?;
    stdin
        .write_all(format!("{request_json}\n").as_bytes())
        .await?;
    drop(stdin);

    let output = child.wait_with_output().await?;

    if !output.status.success() {
        return Err(FightCalError::Provider(format!(
            "Provider exited with status: {}",
            output.status.code().unwrap_or(-1)
        )));
    }

    let response_str = String::from_utf8_lossy(&output.stdout);
    if response_str.trim().is_empty() {
        return Err(FightCalError::Provider("Provider returned no response".into()));
    }

    let response: Response<R> = serde_json::from_str(response_str.trim())
        .map_err(|e| FightCalError::Provider(format!("Failed to parse response: {}", e)))?;

    match response {
        Response::Success { data } => Ok(data),
        Response::Error { error } => Err(FightCalError::Provider(error)),
    }
}
