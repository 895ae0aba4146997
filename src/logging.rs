//! Browser logging
//!
//! Routes `tracing` events through the rolling logger into the devtools console.

use std::sync::{Arc, OnceLock};

use rolling_logger::{LineSink, LogBuffer, LogLine, DEFAULT_CAPACITY};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use wasm_bindgen::JsValue;

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

fn console_sink() -> LineSink {
    Arc::new(|line: &LogLine| {
        let text = JsValue::from_str(&line.to_string());
        match line.level {
            Level::ERROR => web_sys::console::error_1(&text),
            Level::WARN => web_sys::console::warn_1(&text),
            _ => web_sys::console::log_1(&text),
        }
    })
}

pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    match rolling_logger::init_logger(DEFAULT_CAPACITY, max_level, Some(console_sink())) {
        Ok(buffer) => {
            let _ = BUFFER.set(buffer);
        }
        Err(e) => web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into()),
    }
}

/// Retained lines, oldest first; empty when the logger is not installed
pub fn recent() -> Vec<String> {
    BUFFER
        .get()
        .map(|buffer| buffer.recent().iter().map(LogLine::to_string).collect())
        .unwrap_or_default()
}
