//! Saving the rendered document.
//!
//! The primary output directory is tried first, then the fallback directory
//! (created on demand). When neither accepts the file the content is handed
//! back inline.

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A rendered document and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Where the artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved { path: PathBuf, size: usize },
    Fallback { path: PathBuf, size: usize },
    Inline { content: String },
}

impl PersistOutcome {
    pub fn message(&self) -> String {
        match self {
            PersistOutcome::Saved { path, size } => {
                format!("Report saved to {} ({} bytes)", path.display(), size)
            }
            PersistOutcome::Fallback { path, size } => {
                format!(
                    "Report saved to fallback location {} ({} bytes)",
                    path.display(),
                    size
                )
            }
            PersistOutcome::Inline { content } => {
                format!("Report could not be saved, content follows:\n{content}")
            }
        }
    }
}

fn slug_cleaner() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]+").expect("valid slug regex"))
}

/// `{slug}_network_documentation_{YYYYMMDD_HHMMSS}.{ext}`
///
/// The slug is lowercased and anything outside `[a-z0-9-]` collapses to `-`.
pub fn artifact_filename(slug: &str, generated: &DateTime<Tz>, extension: &str) -> String {
    let lowered = slug.to_lowercase();
    let cleaned = slug_cleaner().replace_all(&lowered, "-");
    let cleaned = cleaned.trim_matches('-');
    let cleaned = if cleaned.is_empty() { "site" } else { cleaned };
    format!(
        "{}_network_documentation_{}.{}",
        cleaned,
        generated.format("%Y%m%d_%H%M%S"),
        extension
    )
}

fn write_into(dir: &Path, artifact: &Artifact) -> io::Result<PathBuf> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        ));
    }
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.content)?;
    Ok(path)
}

/// Persist `artifact`, degrading from `output_dir` to `fallback_dir` to inline.
pub fn persist(artifact: &Artifact, output_dir: &Path, fallback_dir: &Path) -> PersistOutcome {
    match write_into(output_dir, artifact) {
        Ok(path) => {
            log::info!("Saved {}", path.display());
            return PersistOutcome::Saved {
                path,
                size: artifact.content.len(),
            };
        }
        Err(e) => log::warn!(
            "Could not save to output directory {}: {}",
            output_dir.display(),
            e
        ),
    }

    let fallback = fs::create_dir_all(fallback_dir).and_then(|_| write_into(fallback_dir, artifact));
    match fallback {
        Ok(path) => {
            log::info!("Saved {} (fallback)", path.display());
            PersistOutcome::Fallback {
                path,
                size: artifact.content.len(),
            }
        }
        Err(e) => {
            log::error!(
                "Could not save to fallback directory {}: {}",
                fallback_dir.display(),
                e
            );
            PersistOutcome::Inline {
                content: String::from_utf8_lossy(&artifact.content).into_owned(),
            }
        }
    }
}
