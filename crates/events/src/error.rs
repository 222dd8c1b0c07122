//! Listener failure model.

use thiserror::Error;

/// A listener failed while an event was being dispatched.
///
/// This is the only failure the emitter knows about. It is caught at the
/// single invocation site, handed to the configured error handler (if any),
/// and never returned to the code that triggered the broadcast.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener returned an error.
    #[error("listener for `{event}` failed: {source}")]
    Failed {
        event: String,
        source: anyhow::Error,
    },

    /// The listener panicked.
    #[error("listener for `{event}` panicked: {message}")]
    Panicked { event: String, message: String },
}

impl ListenerError {
    /// Name of the event whose dispatch triggered the failure.
    pub fn event(&self) -> &str {
        match self {
            ListenerError::Failed { event, .. } | ListenerError::Panicked { event, .. } => event,
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, ListenerError::Panicked { .. })
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
