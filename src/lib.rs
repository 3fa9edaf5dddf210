// cargo watch -x 'fmt' -x 'run'

//! Site network documentation.
//!
//! Reads an inventory snapshot, compiles the prefixes, VLANs and IP
//! addresses of one site into a [`models::ReportModel`] and saves it as a
//! document.

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use config::ReportConfig;
use error::ReportError;
use inventory::{read_snapshot, InventoryQuery};
use output::{artifact_filename, persist, print_preview, renderer_for, Artifact, ReportStyle};
use processing::{BuildOptions, BuildOutcome, ReportBuilder};
use std::panic::{self, AssertUnwindSafe};

/// Generate the documentation for `config.site`, stamped with the current time.
///
/// Returns the human readable result message. An empty site is not an error:
/// the message starts with `ERROR:` and no document is written.
/// A panic anywhere in the run aborts it with [`ReportError::Unexpected`].
pub fn generate_site_documentation(config: &ReportConfig) -> Result<String, ReportError> {
    let now = Utc::now().with_timezone(&config.timezone);
    guarded(|| generate_at(config, &ReportStyle::default(), now))
}

fn guarded<F>(run: F) -> Result<String, ReportError>
where
    F: FnOnce() -> Result<String, ReportError>,
{
    panic::catch_unwind(AssertUnwindSafe(run)).unwrap_or_else(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "run aborted".to_string());
        log::error!("Run aborted: {detail}");
        Err(ReportError::Unexpected(detail))
    })
}

/// Same as [`generate_site_documentation`] with an explicit style and time.
pub fn generate_at(
    config: &ReportConfig,
    style: &ReportStyle,
    generated_at: DateTime<Tz>,
) -> Result<String, ReportError> {
    log::info!("#Start generate_site_documentation({})", config.site);

    // fail before touching the inventory when the output format is unavailable
    let renderer = renderer_for(&config.format)?;

    let inventory = read_snapshot(&config.snapshot_path).map_err(|e| {
        ReportError::Inventory(format!("{}: {e}", config.snapshot_path.display()))
    })?;
    let scope = inventory.activate(config.branch.as_deref())?;

    let site = scope
        .site(&config.site)
        .map_err(|e| ReportError::Inventory(e.to_string()))?
        .ok_or_else(|| ReportError::UnknownSite(config.site.clone()))?;

    let mut builder = ReportBuilder::new(&scope, BuildOptions::from(config), style, generated_at);
    let model = match builder.build(&site)? {
        BuildOutcome::Report(model) => model,
        BuildOutcome::NoData { site } => {
            return Ok(format!("ERROR: {}", ReportError::NoData(site)));
        }
    };
    if !model.faults.is_empty() {
        log::warn!("{} rows skipped while building the report", model.faults.len());
    }

    if config.preview {
        print_preview(&model, style);
    }

    let content = renderer
        .render(&model, style)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    let artifact = Artifact {
        filename: artifact_filename(&model.site_slug, &generated_at, renderer.file_extension()),
        content,
    };
    let outcome = persist(&artifact, &config.output_dir, &config.fallback_dir);
    let message = outcome.message();
    log::info!("#End generate_site_documentation: {}", artifact.filename);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_passes_results_through() {
        assert_eq!(guarded(|| Ok("done".to_string())).unwrap(), "done");
        assert!(matches!(
            guarded(|| Err(ReportError::UnknownSite("x".to_string()))),
            Err(ReportError::UnknownSite(_))
        ));
    }

    #[test]
    fn test_guarded_panic_is_unexpected() {
        let result = guarded(|| panic!("renderer blew up"));
        match result {
            Err(ReportError::Unexpected(detail)) => assert_eq!(detail, "renderer blew up"),
            other => panic!("expected Unexpected, got {other:?}"),
        }
        let result = guarded(|| panic!("{} rows", 3));
        match result {
            Err(e) => assert_eq!(e.to_string(), "Unexpected error: 3 rows"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
