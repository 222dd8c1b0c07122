//! Channel error model.

use thiserror::Error;

/// Result type used when constructing channel values.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Failure to build a [`Channel`](crate::Channel) or [`EventName`](crate::EventName).
///
/// The emitter treats these as no-ops rather than surfacing them to callers;
/// the type exists so hosts that validate names up front get a real error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The event name was empty.
    #[error("event name must not be empty")]
    EmptyName,
}
