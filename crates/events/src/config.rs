//! Emitter configuration.

use std::rc::Rc;

use crate::error::ListenerError;

/// Callback receiving listener failures during dispatch.
pub type ErrorHandler = Rc<dyn Fn(&ListenerError)>;

/// Emitter configuration.
///
/// The only recognized option is `on_error`. Without it, listener failures are
/// discarded (traced at `debug`) and never reach the broadcaster.
#[derive(Clone, Default)]
pub struct EmitterConfig {
    /// Invoked synchronously, once per failing listener invocation.
    pub on_error: Option<ErrorHandler>,
}

impl EmitterConfig {
    pub fn with_on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ListenerError) + 'static,
    {
        self.on_error = Some(Rc::new(handler));
        self
    }

    pub fn without_on_error(mut self) -> Self {
        self.on_error = None;
        self
    }
}

impl core::fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
