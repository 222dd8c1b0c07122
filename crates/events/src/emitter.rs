//! Synchronous event emitter (mechanics only).
//!
//! An [`Emitter`] keeps, per [`Channel`], an ordered sequence of [`Listener`]s.
//! Broadcasting an event name invokes the listeners registered for that name,
//! in registration order, then the listeners registered on the wildcard
//! channel, in registration order. Every listener receives the payload and the
//! real event name.
//!
//! ## Fault isolation
//!
//! Each invocation is wrapped on its own. A listener that returns `Err` or
//! panics is reported to the configured error handler (see
//! [`EmitterConfig::on_error`]) and dispatch moves on to the next listener.
//! Nothing propagates out of [`Emitter::emit`].
//!
//! ## Reentrancy
//!
//! Listeners may call back into the emitter (`on`, `off`, `emit`) while a
//! dispatch is in flight. Each phase iterates over a snapshot of its sequence
//! taken before the first listener runs, and no internal borrow is held while
//! a listener runs. Listeners present at the start of a phase are attempted
//! exactly once; changes made during a phase apply to later dispatches.
//!
//! ## Threading
//!
//! The emitter is single-threaded (`!Send`, `!Sync`). A listener that never
//! returns blocks the broadcaster.
//!
//! ## Usage
//!
//! ```
//! use herald_events::{Emitter, Listener};
//!
//! let emitter: Emitter<u32> = Emitter::new();
//! let log = Listener::infallible(|payload: &u32, name: &str| println!("{name}: {payload}"));
//!
//! emitter.on(Some("x"), &log);
//! emitter.on(None, &log);
//! emitter.emit("x", &42);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use herald_core::{Channel, ChannelError, EventName};
use tracing::{debug, trace, warn};

use crate::config::{EmitterConfig, ErrorHandler};
use crate::error::ListenerError;
use crate::listener::Listener;

/// Synchronous, in-process event emitter.
///
/// - No IO / no async
/// - Exact-name listeners first, then wildcard listeners
/// - Per-listener fault isolation
pub struct Emitter<P> {
    listeners: RefCell<HashMap<Channel, Vec<Listener<P>>>>,
    on_error: Option<ErrorHandler>,
}

impl<P> Emitter<P> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            listeners: RefCell::new(HashMap::new()),
            on_error: config.on_error,
        }
    }

    /// Register `listener` for `event_name`, or for every event when `None`.
    pub fn listen(&self, event_name: Option<&str>, listener: &Listener<P>) {
        self.register(event_name, listener);
    }

    /// Remove the first registration of `listener` for `event_name`.
    pub fn unlisten(&self, event_name: Option<&str>, listener: &Listener<P>) {
        self.unregister(event_name, listener);
    }

    /// Same as [`Emitter::listen`].
    pub fn on(&self, event_name: Option<&str>, listener: &Listener<P>) {
        self.register(event_name, listener);
    }

    /// Same as [`Emitter::unlisten`].
    pub fn off(&self, event_name: Option<&str>, listener: &Listener<P>) {
        self.unregister(event_name, listener);
    }

    /// Deliver `payload` to the listeners of `event_name`, then to wildcard listeners.
    pub fn emit(&self, event_name: &str, payload: &P) {
        self.dispatch(event_name, payload);
    }

    /// Same as [`Emitter::emit`]; the name hosts use when firing their own events.
    pub fn broadcast(&self, event_name: &str, payload: &P) {
        self.dispatch(event_name, payload);
    }

    /// Number of registrations on a channel (duplicates counted).
    pub fn listener_count(&self, event_name: Option<&str>) -> usize {
        let Ok(channel) = Channel::from_option(event_name) else {
            return 0;
        };
        self.listeners
            .borrow()
            .get(&channel)
            .map_or(0, |sequence| sequence.len())
    }

    pub fn has_listeners(&self, event_name: Option<&str>) -> bool {
        self.listener_count(event_name) > 0
    }

    fn register(&self, event_name: Option<&str>, listener: &Listener<P>) {
        let Some(channel) = resolve(event_name, "register") else {
            return;
        };

        let mut table = self.listeners.borrow_mut();
        let sequence = table.entry(channel).or_default();
        sequence.push(listener.clone());
        trace!(channel = ?event_name, listeners = sequence.len(), "listener registered");
    }

    fn unregister(&self, event_name: Option<&str>, listener: &Listener<P>) {
        let Some(channel) = resolve(event_name, "unregister") else {
            return;
        };

        let mut table = self.listeners.borrow_mut();
        let Some(sequence) = table.get_mut(&channel) else {
            return;
        };

        // Only the first occurrence; later duplicates stay registered.
        if let Some(index) = sequence.iter().position(|l| l.same_as(listener)) {
            sequence.remove(index);
            trace!(channel = ?event_name, listeners = sequence.len(), "listener removed");
        }
    }

    fn dispatch(&self, event_name: &str, payload: &P) {
        let name = match EventName::new(event_name) {
            Ok(name) => name,
            Err(err) => {
                warn!(error = %err, "ignoring broadcast");
                return;
            }
        };

        self.fire(&Channel::Named(name), event_name, payload);
        self.fire(&Channel::All, event_name, payload);
    }

    fn fire(&self, channel: &Channel, event_name: &str, payload: &P) {
        // Snapshot so listeners can mutate the table while we iterate.
        let snapshot = match self.listeners.borrow().get(channel) {
            Some(sequence) if !sequence.is_empty() => sequence.clone(),
            _ => return,
        };

        trace!(event = event_name, %channel, listeners = snapshot.len(), "dispatching");

        for listener in &snapshot {
            if let Err(err) = listener.invoke(payload, event_name) {
                self.report(err);
            }
        }
    }

    fn report(&self, err: ListenerError) {
        match &self.on_error {
            Some(handler) => handler(&err),
            None => debug!(event = err.event(), error = %err, "listener failure discarded"),
        }
    }
}

fn resolve(event_name: Option<&str>, op: &'static str) -> Option<Channel> {
    match Channel::from_option(event_name) {
        Ok(channel) => Some(channel),
        Err(ChannelError::EmptyName) => {
            warn!(op, "ignoring empty event name");
            None
        }
    }
}

impl<P> Default for Emitter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> core::fmt::Debug for Emitter<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let table = self.listeners.borrow();
        let mut counts: Vec<(String, usize)> = table
            .iter()
            .map(|(channel, sequence)| (channel.to_string(), sequence.len()))
            .collect();
        counts.sort();

        f.debug_struct("Emitter")
            .field("listeners", &counts)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
