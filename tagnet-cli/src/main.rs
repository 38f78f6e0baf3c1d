//! tagnet CLI - export co-occurrence graphs from a corpus of posts
//!
//! Reads a JSON corpus of posts and writes a tab-separated network table
//! (hashtags, mentions, user-hashtag bipartite) or a node attribute table,
//! ready to import into Cytoscape.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod constants;

use commands::export::{self, ExportArgs};
use config::TagnetConfig;

/// Build hashtag and user co-occurrence networks from a corpus of posts.
#[derive(Parser)]
#[command(name = "tagnet")]
#[command(author, version)]
#[command(
    about = "Reads a JSON file containing posts and exports a Cytoscape or Gephi readable network file"
)]
#[command(after_help = "Examples:
  tagnet --json tweets.json                      Hashtag network to tweets.net
  tagnet -j tweets.json -t mentions -o users.net User co-occurrence network
  tagnet -j tweets.json -t attributes            Node attribute table")]
pub struct Cli {
    /// JSON file containing the posts
    #[arg(short, long, value_name = "PATH")]
    json: PathBuf,

    /// Format of the output file [default: cytoscape]
    #[arg(short, long, value_parser = ["cytoscape", "gephi"])]
    format: Option<String>,

    /// Network or table to build [default: hashtags]
    #[arg(short = 't', long = "type", value_parser = ["hashtags", "mentions", "bipartite", "attributes"])]
    relation: Option<String>,

    /// Output filename [default: tweets.net]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .tagnetrc.toml
    let config = TagnetConfig::load(std::path::Path::new("."));

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let args = ExportArgs::resolve(
        cli.json,
        cli.format.as_deref(),
        cli.relation.as_deref(),
        cli.output,
        &config,
    )?;
    tracing::debug!(?args, "Resolved export arguments");

    export::run(&args, cli.quiet)
}
