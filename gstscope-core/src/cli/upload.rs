use crate::client::{GstscopeClient, LogQuery, PollPolicy};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// GStreamer debug log to upload
    pub file: PathBuf,

    /// Base URL of a running server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Readiness probes before giving up
    #[arg(long, default_value_t = 10)]
    pub attempts: u32,

    /// Seconds between readiness probes
    #[arg(long, default_value_t = 1)]
    pub delay: u64,
}

/// Upload a file, wait for ingestion and print a short summary.
pub fn run(args: UploadArgs) -> anyhow::Result<()> {
    let body = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let policy = PollPolicy {
        max_attempts: args.attempts,
        delay: Duration::from_secs(args.delay),
    };
    let client = GstscopeClient::with_policy(&args.server, policy)?;

    let session_id = client.upload(body)?;
    println!("session {session_id}");

    let options = client.wait_until_ready(&session_id)?;
    let first = client.logs(
        &session_id,
        &LogQuery {
            per_page: Some(1),
            ..Default::default()
        },
    )?;

    println!("✔ {} entries", first.total);
    println!("✔ {} categories", options.categories.len());
    println!(
        "✔ levels: {}",
        options
            .levels
            .iter()
            .map(|l| l.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("✔ {} pids, {} threads", options.pids.len(), options.threads.len());

    Ok(())
}
