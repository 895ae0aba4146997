//! Tracing layer feeding the buffer and the sink.

use std::fmt::{self, Write};
use std::sync::Arc;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::buffer::{LogBuffer, LogLine};

/// Receives every line as it is captured
pub type LineSink = Arc<dyn Fn(&LogLine) + Send + Sync>;

pub struct RollingLayer {
    buffer: LogBuffer,
    sink: Option<LineSink>,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer, sink: Option<LineSink>) -> Self {
        Self { buffer, sink }
    }
}

/// `message` first, other fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = LogLine {
            at: Local::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        };

        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.buffer.push(line);
    }
}
