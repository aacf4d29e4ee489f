//! Write the reference tables as JSON or CSV for the presentation layer.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use ignition_atlas::Catalog;
use ignition_atlas::config::{load_engines, merge_engines};
use ignition_atlas::export::{Table, json, tabular, writer_for_path};
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Export ignition atlas tables")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Table to export (e.g. engines, carrier-gases). JSON without a table writes every table.
    #[arg(long)]
    table: Option<Table>,

    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Extra engines (YAML list, TOML file, or directory of TOML files) appended to the engine table
    #[arg(long)]
    extra_engines: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Json,
    Csv,
}

enum Job {
    Bundle,
    Json(Table),
    Csv(Table),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let job = match (cli.format, cli.table) {
        (Format::Json, None) => Job::Bundle,
        (Format::Json, Some(table)) => Job::Json(table),
        (Format::Csv, Some(table)) => Job::Csv(table),
        (Format::Csv, None) => bail!("--format csv needs --table (one of: {})", table_names()),
    };

    let merged = match &cli.extra_engines {
        Some(path) => {
            let extra = load_engines(path)
                .with_context(|| format!("loading extra engines from {}", path.display()))?;
            info!("merging {} extra engines", extra.len());
            Some(merge_engines(ignition_atlas::catalog::engines(), extra)?)
        }
        None => None,
    };
    let catalog = match &merged {
        Some(engines) => Catalog::builtin().with_engines(engines),
        None => Catalog::builtin(),
    };

    let writer = writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    match job {
        Job::Bundle => json::write_bundle(writer, &catalog, chrono::Utc::now())?,
        Job::Json(table) => json::write_table(writer, &catalog, table)?,
        Job::Csv(table) => tabular::write_table(writer, &catalog, table)?,
    }

    if cli.output != PathBuf::from("-") {
        info!("wrote {}", cli.output.display());
    }
    Ok(())
}

fn table_names() -> String {
    Table::ALL
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}
