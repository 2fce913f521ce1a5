//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the logger's severity slots.
//!
//! [`SeverityLayer`] is a tracing-subscriber layer that turns every tracing
//! event into one line on the matching severity slot of a [`Logger`]. The
//! event's `message` field is rendered as `msg`, every other field follows as
//! ` key=value` in recording order, and the location comes from the event's
//! metadata rather than from the layer.
//!
//! | tracing level    | severity            |
//! |------------------|---------------------|
//! | `TRACE`, `DEBUG` | [`Severity::Debug`] |
//! | `INFO`           | [`Severity::Info`]  |
//! | `WARN`           | [`Severity::Warn`]  |
//! | `ERROR`          | [`Severity::Error`] |
//!
//! Events whose target belongs to this crate are skipped so the logger's own
//! reconfiguration events never loop back into it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::init_tracing;
//!
//! init_tracing();
//! tracing::warn!(peer = "10.0.0.1", "handshake slow");
//! // WARN  12:00:00 src/main.rs:4: msg=handshake slow peer=10.0.0.1
//! ```

use crate::calls::render_framed;
use crate::global::global;
use crate::levels::Severity;
use crate::logger::Logger;
use logging_sink::Callsite;
use std::borrow::Borrow;
use std::fmt::{self, Write as _};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that writes events through a [`Logger`].
///
/// `L` is anything that borrows a logger: `&'static Logger` for the global
/// one, `Arc<Logger>` for an owned instance.
pub struct SeverityLayer<L> {
    logger: L,
}

impl<L> SeverityLayer<L>
where
    L: Borrow<Logger>,
{
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a severity.
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }

    fn is_own_target(target: &str) -> bool {
        target == "logging" || target.starts_with("logging::")
    }
}

impl<L> fmt::Debug for SeverityLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityLayer").finish_non_exhaustive()
    }
}

impl<S, L> Layer<S> for SeverityLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Borrow<Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if Self::is_own_target(metadata.target()) {
            return;
        }

        let severity = Self::severity_for(metadata.level());
        let Some(emitter) = self.logger.borrow().emitter(severity) else {
            return;
        };
        if emitter.is_silent() {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let callsite = Callsite::new(
            metadata.file().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
        );
        let _ = emitter.write(callsite, &visitor.render());
    }
}

/// Collects an event's message and remaining fields as text.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl FieldVisitor {
    fn render(&self) -> String {
        let mut body = render_framed(self.message.as_deref(), &[], None);
        for (key, value) in &self.fields {
            let _ = write!(body, " {key}={value}");
        }
        body
    }

    fn record(&mut self, field: &tracing::field::Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name(), value));
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.record(field, value.to_owned());
    }

    fn record_error(
        &mut self,
        field: &tracing::field::Field,
        value: &(dyn std::error::Error + 'static),
    ) {
        self.record(field, value.to_string());
    }
}

/// Installs a [`SeverityLayer`] over the global logger as the default
/// subscriber.
///
/// Like any global subscriber installation this panics if another default
/// subscriber has already been set.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SeverityLayer::new(global()))
        .init();
}

/// Like [`init_tracing`], with an extra filter layer in front.
///
/// # Example
///
/// ```rust,ignore
/// use logging::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(SeverityLayer::new(global()))
        .init();
}
