//! # Courses Function
//!
//! Reads one function event from stdin, dispatches it to the matching
//! controller and writes the proxy-style response to stdout.

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

mod config;
mod controllers;
mod error;
mod event;
mod function;
mod state;
mod telemetry;

use config::FunctionConfig;
use state::FunctionState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = FunctionConfig::from_env();
    let state = FunctionState::in_memory();

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read event from stdin")?;

    let response = function::handle(&state, &config, &input).await;
    let output = serde_json::to_string(&response).context("Failed to serialize response")?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}
