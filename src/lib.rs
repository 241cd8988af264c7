//! sheetlens: spreadsheet column analysis engine.
//!
//! The library is the engine: [`analysis::analyze`] takes a parsed
//! [`grid::Grid`] and returns an [`analysis::AnalysisReport`] with per-column
//! statistics, duplicate row indices, a quality summary and chart-ready
//! aggregates. The binary wraps it in a small HTTP service that accepts a
//! grid as JSON; file parsing and rendering stay with external
//! collaborators.

pub mod analysis;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod routes;

pub use analysis::{analyze, AnalysisReport, Analyzer, AnalyzerOptions};
pub use grid::{Cell, Grid};

/// Shared state of the HTTP service.
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self {
            config,
            analyzer: Analyzer::default(),
        }
    }
}
