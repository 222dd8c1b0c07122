//! `herald-core` — value types shared by the notification engine.
//!
//! This crate contains **pure** primitives (no dispatch, no logging).

pub mod channel;
pub mod error;

pub use channel::{Channel, EventName};
pub use error::{ChannelError, ChannelResult};
