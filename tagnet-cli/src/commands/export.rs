//! Export command - build one relation and write it as a table
//!
//! Pipeline: check format, load corpus, index namespaces, aggregate the
//! selected relation, render, write. The output file is written only after
//! the whole table has been rendered, so a failed run leaves nothing behind.

use crate::config::TagnetConfig;
use crate::constants::DEFAULT_OUTPUT;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tagnet_core::{aggregate, exporter, Corpus, ExportFormat, Namespaces, Relation};

/// Fully resolved export parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    pub json: PathBuf,
    pub format: ExportFormat,
    pub relation: Relation,
    pub output: PathBuf,
}

impl ExportArgs {
    /// Merge flags with config defaults: CLI flag > config file > built-in default.
    pub fn resolve(
        json: PathBuf,
        format: Option<&str>,
        relation: Option<&str>,
        output: Option<PathBuf>,
        config: &TagnetConfig,
    ) -> Result<Self> {
        let format: ExportFormat = match format {
            Some(f) => f.parse().map_err(|e: String| anyhow!(e))?,
            None => config.export_format().unwrap_or_default(),
        };
        let relation: Relation = match relation {
            Some(r) => r.parse().map_err(|e: String| anyhow!(e))?,
            None => config.relation().unwrap_or_default(),
        };
        let output = output
            .or_else(|| config.output_path().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            json,
            format,
            relation,
            output,
        })
    }
}

/// Run the export command
pub fn run(args: &ExportArgs, quiet: bool) -> Result<()> {
    exporter::ensure_supported(args.format)?;

    let corpus = Corpus::load(&args.json)?;
    tracing::info!("Loaded {} posts from {}", corpus.len(), args.json.display());

    let namespaces = Namespaces::index(&corpus);
    let table = aggregate::build(args.relation, &corpus, &namespaces)?;
    let content = table.render()?;

    write_output(&args.output, &content)?;

    if !quiet {
        println!(
            "{} Exported {} {} ({}) to {}",
            "SUCCESS:".green().bold(),
            table.len(),
            table.entity_name(),
            args.relation,
            args.output.display().to_string().cyan()
        );
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write to: {}", path.display()))
}
