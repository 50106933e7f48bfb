// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging to stderr
// 3. Generate one page per repository of the organization
// 4. Exit with 0 on success, 1 on any error
// =============================================================================

mod cli;        // src/cli.rs - command-line parsing
mod error;      // src/error.rs - error types
mod github;     // src/github/ - GitHub API access
mod pages;      // src/pages/ - page naming, rendering and writing

#[cfg(test)]
mod test_support;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::Level;

// Identifies us to the GitHub API, which rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        // {:#} prints the whole context chain on one line
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to create HTTP client")?;

    pages::generate(
        &client,
        github::GITHUB_API,
        &cli.organization,
        Path::new(&cli.path),
    )
    .await
    .with_context(|| {
        format!(
            "failed to create project pages for organization '{}'",
            cli.organization
        )
    })
}

// Logs go to stderr; warnings only unless --verbose is given.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
