//! Shared helpers for the e2e tests

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Console-relevant events from the glados crates, `log` records included
#[derive(Clone, Default)]
pub struct CapturedEvents {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedEvents {
    pub fn set_default(&self) -> DefaultGuard {
        // Infrastructure logs through `log`; route it into tracing
        let _ = tracing_log::LogTracer::init();
        tracing::subscriber::set_default(Registry::default().with(self.clone()))
    }

    /// Messages at INFO or above, in emission order
    pub fn console_lines(&self) -> Vec<(Level, String)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level <= Level::INFO)
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("glados") {
            return;
        }
        let mut message = MessageVisitor(String::new());
        event.record(&mut message);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), message.0));
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}
