//! Utilities for the CLI.

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Sets up a file logger under `./logs`, rotated daily.
///
/// Warnings from the appender itself go to a separate `.err.log` file. The
/// returned guard must be held until the program exits so that buffered
/// records are flushed.
pub fn configure_logger(file_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let logs_dir = PathBuf::from(".")
        .canonicalize()
        .map_err(|e| e.to_string())?
        .join("logs");
    std::fs::create_dir_all(&logs_dir).map_err(|e| e.to_string())?;

    let log_path = logs_dir.join(format!("{file_name}.log"));
    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Debug)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
