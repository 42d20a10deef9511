mod app;
mod color;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app::ExplorerApp;
use clap::Parser;
use eframe::egui;
use top250_explorer::params::ExplorerParams;

/// Explore a dataset of top-rated movies: epics, filmographies, actor
/// rankings and the director/actor collaboration network.
#[derive(Parser, Debug)]
#[command(name = "top250-explorer", version, about)]
struct Cli {
    /// CSV or JSON file to open at start-up.
    file: Option<PathBuf>,

    /// Director shown in the marathon tab.
    #[arg(long)]
    director: Option<String>,

    /// JSON file with slider and layout settings; missing keys keep their defaults.
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,
}

fn read_params(path: &Path) -> Result<ExplorerParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let params: ExplorerParams = serde_json::from_str(&text).context("parsing parameters")?;
    Ok(params.clamped())
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = ExplorerApp::default();
    if let Some(path) = &cli.params {
        match read_params(path) {
            Ok(params) => {
                log::info!("Using parameters {params:?}");
                app.state.params = params;
            }
            Err(e) => log::error!("Ignoring parameter file: {e:#}"),
        }
    }
    if let Some(director) = cli.director {
        app.state.params.director = director;
    }
    if let Some(path) = &cli.file {
        app.state.open_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([640.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Top 250 Movies Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
