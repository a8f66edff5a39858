use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::process::ExitCode;
use tokio::io::BufReader;
use tokio::runtime::Runtime;

use assistant_bot::{initialize_backend, BotConfig};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the bot's replies
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let result = build_runtime().and_then(|runtime| {
        let result = runtime.block_on(run());
        // A pending stdin read cannot be cancelled; don't wait for it
        runtime.shutdown_background();
        result
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session aborted: {:#}", e);
            println!("\nUnexpected error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

async fn run() -> Result<()> {
    let config = BotConfig::from_env();
    info!("Starting assistant bot");

    let mut session = initialize_backend(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout().lock();

    session
        .run(stdin, &mut stdout, tokio::signal::ctrl_c())
        .await?;

    info!("Assistant bot stopped");
    Ok(())
}
