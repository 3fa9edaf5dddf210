//! Logger setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use std::path::Path;

/// Console only logging to stderr at `level`.
pub fn console_config(level: LevelFilter) -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
}

/// Initialise from `path`, or log warnings to stderr when the file is unusable.
///
/// Returns why logging could not be set up at all.
pub fn init(path: &Path) -> Result<(), String> {
    if let Err(e) = log4rs::init_file(path, Default::default()) {
        let config = console_config(LevelFilter::Warn).map_err(|e| e.to_string())?;
        log4rs::init_config(config).map_err(|e| e.to_string())?;
        log::warn!("{}: {e}, logging warnings to stderr", path.display());
    }
    Ok(())
}
