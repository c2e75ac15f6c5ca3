//! Shared test helpers: a tracing layer that records which step each log
//! event was emitted from.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Something observed while a closure ran under [`capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    /// An `authenticate` span was created for the named process.
    Run(String),
    /// An `auth_step` span was created.
    Step(String),
    /// A log event, with the step span it was emitted in (if any).
    Message {
        step: Option<String>,
        message: String,
    },
}

impl Captured {
    pub fn step_name(&self) -> Option<&str> {
        match self {
            Captured::Step(name) => Some(name),
            Captured::Run(_) | Captured::Message { .. } => None,
        }
    }
}

/// Run `f` with a capturing subscriber installed for the current thread.
pub fn capture(f: impl FnOnce()) -> Vec<Captured> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        entries: entries.clone(),
    });

    tracing::subscriber::with_default(subscriber, f);

    let mut entries = entries.lock().unwrap();
    std::mem::take(&mut *entries)
}

/// Step names in the order their spans were opened.
pub fn steps(captured: &[Captured]) -> Vec<String> {
    captured
        .iter()
        .filter_map(Captured::step_name)
        .map(str::to_string)
        .collect()
}

/// Process names recorded on `authenticate` spans, one per run.
pub fn processes(captured: &[Captured]) -> Vec<String> {
    captured
        .iter()
        .filter_map(|entry| match entry {
            Captured::Run(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Messages emitted inside the span of `step`.
pub fn messages_in(captured: &[Captured], step: &str) -> Vec<String> {
    captured
        .iter()
        .filter_map(|entry| match entry {
            Captured::Message {
                step: Some(s),
                message,
            } if s == step => Some(message.clone()),
            _ => None,
        })
        .collect()
}

struct StepName(String);

struct CaptureLayer {
    entries: Arc<Mutex<Vec<Captured>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        match attrs.metadata().name() {
            "authenticate" => {
                let mut visitor = FieldVisitor::new("process");
                attrs.record(&mut visitor);
                if let Some(process) = visitor.value {
                    self.entries.lock().unwrap().push(Captured::Run(process));
                }
                return;
            }
            "auth_step" => {}
            _ => return,
        }

        let mut visitor = FieldVisitor::new("step");
        attrs.record(&mut visitor);

        let (Some(span), Some(step)) = (ctx.span(id), visitor.value) else {
            return;
        };
        span.extensions_mut().insert(StepName(step.clone()));
        self.entries.lock().unwrap().push(Captured::Step(step));
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::new("message");
        event.record(&mut visitor);
        let Some(message) = visitor.value else {
            return;
        };

        let step = ctx.event_scope(event).and_then(|scope| {
            scope
                .from_root()
                .find_map(|span| span.extensions().get::<StepName>().map(|n| n.0.clone()))
        });

        self.entries
            .lock()
            .unwrap()
            .push(Captured::Message { step, message });
    }
}

struct FieldVisitor {
    field: &'static str,
    value: Option<String>,
}

impl FieldVisitor {
    fn new(field: &'static str) -> Self {
        Self { field, value: None }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.field {
            self.value = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == self.field {
            self.value = Some(format!("{value:?}"));
        }
    }
}
