//! `coverflowctl`: drive the cover flow engine from the command line.

mod replay;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use coverflow_config::{ConfigLoad, ConfigLoader, render_toml};
use coverflow_core::{
    CatalogError, CoreError, CoverFlowController, CoverFlowMessage,
    DatasetStatus, EngineConfig, FocusFrame, JsonFileCatalog, ScrubberFrame,
    load_catalog,
};
use coverflow_model::prelude::AlbumRecord;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "coverflowctl")]
#[command(about = "Inspect and replay cover flow selection state")]
struct Cli {
    /// Engine config file (TOML or JSON); overrides COVERFLOW_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON album catalog export
    #[arg(long, global = true, env = "COVERFLOW_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the focus and scrubber frames, optionally after a jump
    Inspect {
        /// Jump to this album index first (clamped into range)
        #[arg(long)]
        index: Option<usize>,
    },
    /// Replay a JSON gesture script and print one state line per step
    Replay {
        #[arg(long)]
        script: PathBuf,
    },
    /// Print the effective engine configuration as TOML
    Config,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    selected: Option<&'a AlbumRecord>,
    focus: FocusFrame,
    scrubber: ScrubberFrame,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries JSON; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // The loader logs source and warnings itself
    let ConfigLoad { config, .. } = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Config => {
            print!("{}", render_toml(&config)?);
            Ok(())
        }
        Command::Inspect { index } => {
            let mut controller =
                open_screen(config, require_catalog(&cli.catalog)?).await?;
            if let Some(index) = index {
                controller.update(CoverFlowMessage::JumpTo(index), Instant::now());
            }
            if let Some(album) = controller.selected_album() {
                info!(album = %album.display_label(), "selected album");
            }
            let report = InspectReport {
                selected: controller.selected_album(),
                focus: controller.focus_frame(),
                scrubber: controller.scrubber_frame(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Replay { script } => {
            let steps = replay::read_script(&script).await?;
            let mut controller =
                open_screen(config, require_catalog(&cli.catalog)?).await?;
            let reports =
                replay::run(&mut controller, &steps, Instant::now())?;
            for report in &reports {
                println!("{}", serde_json::to_string(report)?);
            }
            info!(steps = reports.len(), "replay finished");
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigLoad> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("failed to load configuration")
}

fn require_catalog(catalog: &Option<PathBuf>) -> anyhow::Result<&Path> {
    match catalog {
        Some(path) => Ok(path),
        None => {
            bail!("no catalog given; pass --catalog or set COVERFLOW_CATALOG")
        }
    }
}

async fn open_screen(
    config: EngineConfig,
    catalog: &Path,
) -> coverflow_core::Result<CoverFlowController> {
    let mut controller = CoverFlowController::new(config)?;
    let update = load_catalog(&JsonFileCatalog::new(catalog)).await;
    controller.update(CoverFlowMessage::DatasetReplaced(update), Instant::now());

    if let DatasetStatus::Unavailable(reason) = controller.dataset_status() {
        return Err(CoreError::Catalog(CatalogError::Unavailable(format!(
            "{}: {reason}",
            catalog.display()
        ))));
    }
    Ok(controller)
}
