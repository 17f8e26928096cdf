#![warn(clippy::pedantic)]

mod args;
mod config;
mod error;
mod google_tts;
mod output;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Error;
use crate::google_tts::GoogleTts;

async fn run() -> Result<(), Error> {
    let args = args::parse(std::env::args_os().skip(1))?;
    let config = Config::from_env()?;

    tracing::debug!(?config, "loaded configuration");

    GoogleTts::new(&config)?
        .synthesize_to_file(&args.text, &args.output)
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the AGI channel
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
