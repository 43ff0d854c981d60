use std::path::{Path, PathBuf};

use active_format_dialogue::{
    reimport_all, wrap_width_for_view, DialogueAsset, DialogueLineRef, ImportConfig,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(author, version, about = "Active Format dialogue importer")]
struct Cli {
    /// Import settings (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import one sheet, or every matching sheet under a directory.
    Import { path: PathBuf },
    /// List the line ids stored in an asset.
    Keys { asset: PathBuf },
    /// Print one line and its layout estimate.
    Show {
        asset: PathBuf,
        id: i32,
        #[arg(long)]
        wrap: Option<u32>,
        /// Derive the wrap width from an editor view width in pixels.
        #[arg(long, conflicts_with = "wrap")]
        view_width: Option<f32>,
    },
    /// Write a config file with default settings.
    InitConfig { path: PathBuf },
}

#[derive(Tabled)]
struct KeyRow {
    #[tabled(rename = "Line ID")]
    id: i32,
    #[tabled(rename = "Character")]
    character: String,
    #[tabled(rename = "Line")]
    line: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Import { path } => import(&path, &config),
        Command::Keys { asset } => list_keys(&asset),
        Command::Show {
            asset,
            id,
            wrap,
            view_width,
        } => {
            let wrap_width = wrap
                .or_else(|| view_width.map(wrap_width_for_view))
                .unwrap_or(config.wrap_width);
            show_line(&asset, id, wrap_width)
        }
        Command::InitConfig { path } => {
            ImportConfig::default()
                .save(&path)
                .with_context(|| format!("write {}", path.display()))?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ImportConfig> {
    match path {
        Some(path) => {
            ImportConfig::load(path).with_context(|| format!("load config {}", path.display()))
        }
        None => Ok(ImportConfig::default()),
    }
}

fn import(path: &Path, config: &ImportConfig) -> Result<()> {
    let sources = collect_sources(path)?;
    tracing::debug!(candidates = sources.len(), "collected files to check");
    let report = reimport_all(&sources, config);
    if report.is_empty() {
        anyhow::bail!(
            "no sheets matching '{}' under {}",
            config.source_suffix,
            path.display()
        );
    }

    let mut failures = 0usize;
    for entry in &report {
        match &entry.result {
            Ok(records) => println!(
                "{} -> {} ({records} lines)",
                entry.source.display(),
                entry.asset.display()
            ),
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", entry.source.display());
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} sheets failed to import", report.len());
    }
    Ok(())
}

fn collect_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("{} does not exist", path.display());
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut sources: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    sources.sort();
    Ok(sources)
}

fn list_keys(asset_path: &Path) -> Result<()> {
    let asset = DialogueAsset::load_json(asset_path)
        .with_context(|| format!("read {}", asset_path.display()))?;
    let rows: Vec<KeyRow> = asset
        .table
        .records()
        .iter()
        .map(|record| KeyRow {
            id: record.id,
            character: record.character.clone(),
            line: record.line.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    Ok(())
}

fn show_line(asset_path: &Path, id: i32, wrap_width: u32) -> Result<()> {
    let asset = DialogueAsset::load_json(asset_path)
        .with_context(|| format!("read {}", asset_path.display()))?;
    let line = DialogueLineRef::resolved(&asset.table, id, wrap_width);
    let Some(record) = line.resolved_record() else {
        anyhow::bail!("line {id} not found in {}", asset_path.display());
    };
    let output = serde_json::json!({
        "record": record,
        "wrap_width": wrap_width,
        "layout": line.layout(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
