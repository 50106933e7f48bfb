// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Usage: project-pages <ORGANIZATION> <PATH> [--verbose]
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "project-pages",
    version,
    about = "Parse a GitHub organization and create project pages for Jekyll",
    long_about = "project-pages lists the public repositories of a GitHub organization and \
                  writes one front-matter page per repository into the output directory. \
                  Existing pages with the same name are overwritten."
)]
pub struct Cli {
    /// Organization name (e.g., rust-lang)
    pub organization: String,

    /// Output directory for pages (must already exist)
    pub path: String,

    /// Log each written page to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
