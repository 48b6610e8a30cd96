//! log4rs setup.
//!
//! Logs go to stderr so that stdout carries only the reports.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Initialise logging from `config_file` if it exists, else log to stderr.
///
/// `verbose` selects the built-in configuration at debug level even when
/// `config_file` exists.
pub fn init(config_file: &Path, verbose: bool) -> Result<(), Box<dyn Error>> {
    if use_config_file(config_file, verbose) {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {}", config_file.display());
        return Ok(());
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(stderr_config(level)?)?;
    Ok(())
}

fn use_config_file(config_file: &Path, verbose: bool) -> bool {
    !verbose && config_file.exists()
}

/// Console-on-stderr configuration at the given level.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
