//! In-memory recording of tracing events, for asserting on which steps actually ran.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl Recorded {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Shared handle onto the events recorded so far.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Recorded>>>);

impl EventLog {
    fn lock(&self) -> MutexGuard<'_, Vec<Recorded>> {
        // a panicking test may poison the lock; the data is still usable
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn count(&self, message: &str) -> usize {
        self.lock().iter().filter(|e| e.message == message).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear()
    }
}

struct Recorder(EventLog);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().push(Recorded {
            target: event.metadata().target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

/// Record every event on the current thread until the returned guard is dropped.
pub fn record() -> (EventLog, DefaultGuard) {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(Recorder(log.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}

#[test]
fn records_message_and_fields() {
    let (log, _guard) = record();
    tracing::debug!(index = 7u64, "hello");

    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "hello");
    assert_eq!(events[0].field("index"), Some("7"));
}

#[test]
fn nothing_recorded_after_guard_drops() {
    let (log, guard) = record();
    drop(guard);
    tracing::debug!("unseen");
    assert!(log.is_empty());
}
