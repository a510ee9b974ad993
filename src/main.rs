// Copyright 2026 Fedisnap Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use fedisnap::cli;

#[derive(Parser)]
#[command(
    name = "fedisnap",
    about = "Fedisnap — export Mastodon instance data and public timelines to spreadsheets",
    version,
    after_help = "Run 'fedisnap <command> --help' for details on each command."
)]
struct Cli {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export instance metadata, weekly activity, and peers to one workbook
    Instance {
        /// Instance host (e.g. "mastodon.social") or full base URL
        host: String,
        /// Output workbook path
        #[arg(long, default_value = "instance_data.xlsx")]
        out: PathBuf,
        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
    /// Scrape a public timeline in a browser and export posts to one workbook
    Timeline {
        /// Timeline URL (e.g. "https://social.example/public/local")
        url: String,
        /// Output workbook path
        #[arg(long, default_value = "toots.xlsx")]
        out: PathBuf,
        /// Number of scroll passes
        #[arg(long, default_value = "5")]
        scrolls: u32,
        /// Wait after each scroll, in seconds
        #[arg(long, default_value = "3")]
        scroll_delay: u64,
        /// Wait after the initial page load, in seconds
        #[arg(long, default_value = "5")]
        settle: u64,
        /// Delay between engagement API calls, in milliseconds
        #[arg(long, default_value = "200")]
        api_delay_ms: u64,
        /// Per-request timeout for engagement calls, in seconds
        #[arg(long, default_value = "15")]
        timeout: u64,
        /// Override the API base (defaults to the timeline URL's origin)
        #[arg(long)]
        api_base: Option<String>,
        /// Show the browser window instead of running headless
        #[arg(long)]
        headful: bool,
    },
    /// Check environment readiness (Chromium discovery)
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Instance { host, out, timeout } => {
            cli::instance_cmd::run(&host, &out, timeout).await
        }
        Commands::Timeline {
            url,
            out,
            scrolls,
            scroll_delay,
            settle,
            api_delay_ms,
            timeout,
            api_base,
            headful,
        } => {
            cli::timeline_cmd::run(&cli::timeline_cmd::TimelineArgs {
                url,
                out,
                scrolls,
                scroll_delay_secs: scroll_delay,
                settle_secs: settle,
                api_delay_ms,
                timeout_secs: timeout,
                api_base,
                headful,
            })
            .await
        }
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "fedisnap", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
