//! Output formatting and persistence.
//!
//! - [`csv`] - built-in CSV document
//! - [`terminal`] - colored console preview
//! - [`style`] - presentation settings shared by all renderers
//! - [`persist`] - file naming and the save / fallback / inline chain

mod csv;
mod persist;
mod style;
mod terminal;

use crate::error::ReportError;
use crate::models::ReportModel;
use std::error::Error;

// Re-export public functions
pub use csv::{escape_csv_field, section_name, CsvRenderer};
pub use persist::{artifact_filename, persist, Artifact, PersistOutcome};
pub use style::{ReportStyle, Rgb};
pub use terminal::{format_field, print_preview, render_preview};

/// Turns a finished [`ReportModel`] into document bytes.
pub trait DocumentRenderer {
    fn file_extension(&self) -> &'static str;
    fn render(&self, model: &ReportModel, style: &ReportStyle) -> Result<Vec<u8>, Box<dyn Error>>;
}

/// Pick the renderer for `format`.
///
/// Only CSV is built in; spreadsheet output needs a writer library this build
/// does not carry, which is reported before any inventory is read.
pub fn renderer_for(format: &str) -> Result<Box<dyn DocumentRenderer>, ReportError> {
    match format.trim().to_lowercase().as_str() {
        "csv" => Ok(Box::new(CsvRenderer)),
        "xlsx" => Err(ReportError::MissingDependency(
            "xlsx writer is not available in this build, use format 'csv'".to_string(),
        )),
        other => Err(ReportError::MissingDependency(format!(
            "no renderer for format '{other}'"
        ))),
    }
}
