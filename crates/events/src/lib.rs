//! `herald-events` — synchronous, in-process event notification.
//!
//! Listeners register for an event name (or for every event), and a
//! broadcaster fires them without knowing who is listening. See [`Emitter`].

pub mod config;
pub mod emitter;
pub mod error;
pub mod listener;
pub mod source;

pub use config::{EmitterConfig, ErrorHandler};
pub use emitter::Emitter;
pub use error::ListenerError;
pub use herald_core::{Channel, ChannelError, EventName};
pub use listener::{Listener, ListenerFn};
pub use source::EventSource;
