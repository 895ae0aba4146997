//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and hands every line to a sink (the browser console in the app,
//! stderr or a test closure elsewhere).

mod buffer;
mod layer;

pub use buffer::{LogBuffer, LogLine};
pub use layer::{LineSink, RollingLayer};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the rolling layer as the global subscriber.
///
/// Returns the buffer so callers can read back recent lines.
pub fn init_logger(
    capacity: usize,
    max_level: LevelFilter,
    sink: Option<LineSink>,
) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(capacity);
    let layer = RollingLayer::new(buffer.clone(), sink);

    tracing_subscriber::registry()
        .with(max_level)
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_keeps_lines_for_readback() {
        let buffer = init_logger(2, LevelFilter::INFO, None).expect("first install");

        tracing::debug!("filtered out");
        tracing::warn!("[APP] configuration unavailable");
        tracing::info!("one");
        tracing::info!("two");

        let messages: Vec<String> = buffer.recent().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["one".to_string(), "two".to_string()]);

        let again = init_logger(DEFAULT_CAPACITY, LevelFilter::INFO, None);
        assert!(matches!(again, Err(LoggerError::AlreadyInitialized(_))));
    }
}
