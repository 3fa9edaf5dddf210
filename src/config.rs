//! Run configuration and policy constants.
//!
//! Values come from the environment (a `.env` file is loaded by `main`).

use crate::error::ReportError;
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

/// Smallest IPv4 prefix length whose hosts are fully enumerated (/24 = 254 hosts).
pub const DEFAULT_ENUMERATE_MIN_LEN: u8 = 24;
/// Lowest accepted threshold; a /16 enumerates at most 65534 hosts.
pub const MIN_ENUMERATE_MIN_LEN: u8 = 16;
/// Tag slug marking the default gateway of a prefix.
pub const GATEWAY_TAG_SLUG: &str = "default-gateway";
pub const DEFAULT_SNAPSHOT: &str = "inventory_snapshot.json";
pub const DEFAULT_OUTPUT_DIR: &str = "job-output";
pub const DEFAULT_FALLBACK_DIR: &str = "media/script-outputs";
pub const DEFAULT_FORMAT: &str = "csv";

/// Options recognized by a documentation run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Slug of the site to document.
    pub site: String,
    /// Inventory export to read.
    pub snapshot_path: PathBuf,
    /// Alternate data context; all reads happen inside it when set.
    pub branch: Option<String>,
    pub include_empty_prefixes: bool,
    /// Only effective for prefixes within the enumeration policy.
    pub show_unused_ips: bool,
    pub enumerate_min_len: u8,
    /// Primary output channel for the artifact.
    pub output_dir: PathBuf,
    pub fallback_dir: PathBuf,
    pub format: String,
    pub timezone: Tz,
    /// Print a colored summary to stdout.
    pub preview: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            site: String::new(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT),
            branch: None,
            include_empty_prefixes: true,
            show_unused_ips: true,
            enumerate_min_len: DEFAULT_ENUMERATE_MIN_LEN,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fallback_dir: PathBuf::from(DEFAULT_FALLBACK_DIR),
            format: DEFAULT_FORMAT.to_string(),
            timezone: Tz::UTC,
            preview: false,
        }
    }
}

impl ReportConfig {
    /// Config for `site` with every other option at its default.
    pub fn for_site(site: &str) -> ReportConfig {
        ReportConfig {
            site: site.to_string(),
            ..Default::default()
        }
    }

    /// Read `NETDOC_*` variables, falling back to defaults.
    pub fn from_env() -> Result<ReportConfig, ReportError> {
        let mut config = ReportConfig::default();

        config.site = env::var("NETDOC_SITE")
            .map_err(|_| ReportError::Config("NETDOC_SITE is not set".to_string()))?;
        if let Ok(path) = env::var("NETDOC_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }
        config.branch = env::var("NETDOC_BRANCH").ok().filter(|b| !b.trim().is_empty());
        if let Ok(v) = env::var("NETDOC_INCLUDE_EMPTY_PREFIXES") {
            config.include_empty_prefixes = parse_bool("NETDOC_INCLUDE_EMPTY_PREFIXES", &v)?;
        }
        if let Ok(v) = env::var("NETDOC_SHOW_UNUSED_IPS") {
            config.show_unused_ips = parse_bool("NETDOC_SHOW_UNUSED_IPS", &v)?;
        }
        if let Ok(v) = env::var("NETDOC_ENUMERATE_MIN_LEN") {
            config.enumerate_min_len = v
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|len| (MIN_ENUMERATE_MIN_LEN..=32).contains(len))
                .ok_or_else(|| {
                    ReportError::Config(format!(
                        "NETDOC_ENUMERATE_MIN_LEN must be {MIN_ENUMERATE_MIN_LEN}-32, got '{v}'"
                    ))
                })?;
        }
        if let Ok(dir) = env::var("NETDOC_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("NETDOC_FALLBACK_DIR") {
            config.fallback_dir = PathBuf::from(dir);
        }
        if let Ok(format) = env::var("NETDOC_FORMAT") {
            config.format = format.trim().to_lowercase();
        }
        if let Ok(tz) = env::var("NETDOC_TIMEZONE") {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| ReportError::Config(format!("NETDOC_TIMEZONE: {e}")))?;
        }
        if let Ok(v) = env::var("NETDOC_PREVIEW") {
            config.preview = parse_bool("NETDOC_PREVIEW", &v)?;
        }

        log::debug!("Config: {config:?}");
        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ReportError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ReportError::Config(format!(
            "{name} expects a boolean, got '{other}'"
        ))),
    }
}
