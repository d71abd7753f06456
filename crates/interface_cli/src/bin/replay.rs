//! CMCS Claims - Workflow Replay
//!
//! Replays a JSON script of claim submissions, reviews and document
//! attachments against an in-memory store and prints the final claims.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cmcs-replay -- script.json
//!
//! # Start claim ids at 3 and log JSON at debug level
//! CMCS_FIRST_CLAIM_ID=3 CMCS_LOG_JSON=true CMCS_LOG_LEVEL=debug cargo run --bin cmcs-replay -- script.json
//! ```
//!
//! # Environment Variables
//!
//! * `CMCS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `CMCS_LOG_JSON` - Emit JSON log lines (default: false)
//! * `CMCS_CURRENCY` - Currency for claims without items (default: ZAR)
//! * `CMCS_FIRST_CLAIM_ID` - First claim id (default: 1)
//! * `CMCS_FIRST_DOCUMENT_ID` - First document id (default: 1)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use interface_cli::{init_tracing, parse_script, AppConfig, Replay};

#[derive(Debug, Parser)]
#[command(
    name = "cmcs-replay",
    about = "Replay a claims workflow script and print the resulting claims",
    after_help = "Example:\n  cmcs-replay march-claims.json --compact"
)]
struct Args {
    #[arg(help = "Path to a JSON array of submit/review/attach steps")]
    script: PathBuf,

    #[arg(long, help = "Print single-line JSON instead of pretty output")]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load CMCS_ configuration")?;
    init_tracing(&config.log_level, config.log_json);

    let store_config = config.store_config()?;
    tracing::info!(
        script = %args.script.display(),
        currency = %store_config.currency,
        first_claim_id = store_config.first_claim_id,
        "Starting replay"
    );

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;
    let steps = parse_script(&script)?;

    let mut replay = Replay::new(store_config);
    replay.run(steps)?;

    let claims = replay.summaries()?;
    let output = if args.compact {
        serde_json::to_string(&claims)?
    } else {
        serde_json::to_string_pretty(&claims)?
    };
    println!("{output}");
    Ok(())
}
