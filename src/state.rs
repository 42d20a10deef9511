use std::path::Path;

use anyhow::{Context, Result};
use top250_explorer::data::loader;
use top250_explorer::data::query::distinct_directors;
use top250_explorer::data::MovieTable;
use top250_explorer::graph::{build_graph_with, CollaborationGraph, LayoutParams};
use top250_explorer::params::ExplorerParams;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Preview,
    Patience,
    Marathon,
    ScreenTime,
    Workhorse,
    CashHorse,
    Network,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Preview,
        Tab::Patience,
        Tab::Marathon,
        Tab::ScreenTime,
        Tab::Workhorse,
        Tab::CashHorse,
        Tab::Network,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Preview => "Preview",
            Tab::Patience => "Patience",
            Tab::Marathon => "Director marathon",
            Tab::ScreenTime => "This is about me",
            Tab::Workhorse => "Workhorse",
            Tab::CashHorse => "Cash horse",
            Tab::Network => "WOW factor",
        }
    }
}

/// Outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until user loads a file).
    pub table: Option<MovieTable>,

    /// Name of the file the table came from.
    pub source_name: Option<String>,

    /// Slider and picker values.
    pub params: ExplorerParams,

    pub tab: Tab,

    /// Every director in the table, for the marathon picker.
    pub directors: Vec<String>,

    /// Collaboration graph for the current table and graph sliders (cached).
    pub graph: CollaborationGraph,

    /// Inputs the cached graph was built from.
    graph_inputs: Option<(usize, usize, LayoutParams)>,

    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            source_name: None,
            params: ExplorerParams::default(),
            tab: Tab::Preview,
            directors: Vec::new(),
            graph: CollaborationGraph::default(),
            graph_inputs: None,
            status: None,
        }
    }
}

impl AppState {
    /// Replace the current table wholesale and reset derived views.
    pub fn set_table(&mut self, table: MovieTable, source_name: String) {
        self.directors = distinct_directors(&table);
        self.status = Some(Status::Info(format!(
            "Loaded {} movies from {source_name}",
            table.len()
        )));
        self.table = Some(table);
        self.source_name = Some(source_name);
        self.graph_inputs = None;
        self.refresh_graph();
    }

    /// Load a file from disk, reporting failure in the status bar.
    pub fn open_path(&mut self, path: &Path) {
        let name = path.display().to_string();
        let result = loader::load_file(path).with_context(|| format!("loading {name}"));
        self.finish_load(name, result);
    }

    /// Load an in-memory upload, e.g. a file dropped onto the window.
    pub fn open_bytes(&mut self, name: &str, bytes: &[u8]) {
        let result = loader::load_bytes(name, bytes).with_context(|| format!("loading {name}"));
        self.finish_load(name.to_string(), result);
    }

    fn finish_load(&mut self, name: String, result: Result<MovieTable>) {
        match result {
            Ok(table) => {
                log::info!(
                    "Loaded {} movies with columns {:?}",
                    table.len(),
                    table.column_names
                );
                self.set_table(table, name);
            }
            Err(e) => {
                // The previous table, if any, stays in place.
                log::error!("Failed to load file: {e:#}");
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }

    /// Rebuild the collaboration graph if the table or a graph slider changed.
    pub fn refresh_graph(&mut self) {
        let inputs = (
            self.params.graph_directors,
            self.params.graph_actors,
            self.params.layout,
        );
        if self.graph_inputs == Some(inputs) {
            return;
        }
        self.graph = match &self.table {
            Some(table) => build_graph_with(table, inputs.0, inputs.1, &inputs.2),
            None => CollaborationGraph::default(),
        };
        self.graph_inputs = Some(inputs);
    }
}
