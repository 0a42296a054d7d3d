//! Export command - write the class DAG in various formats

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::cli::output::format_number;
use crate::export::{write_csv, write_dot, write_json};
use crate::graph::build_class_dag;

#[derive(Parser, Debug)]
#[command(about = "Export the class DAG in various formats")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', default_value = "csv")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// CSV format (one row per class, successors embedded)
    Csv,
    /// DOT format (for graph visualization)
    Dot,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let dag = build_class_dag()?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => write_json(&dag, writer)?,
        ExportFormat::Csv => write_csv(&dag, writer)?,
        ExportFormat::Dot => write_dot(&dag, writer)?,
    }

    println!(
        "Exported {} classes and {} edges to {}",
        format_number(dag.node_count()),
        format_number(dag.edge_count()),
        args.output.display()
    );
    Ok(())
}
