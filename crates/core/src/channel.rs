//! Event names and the channels listeners subscribe to.

use core::str::FromStr;

use crate::error::{ChannelError, ChannelResult};

/// A validated, non-empty event name (e.g. `"order.created"`).
///
/// Names are compared by value. Any non-empty string is accepted, including
/// strings that look like wildcard markers: the wildcard is a separate
/// [`Channel`] variant, never a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(String);

impl EventName {
    pub fn new(name: impl Into<String>) -> ChannelResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChannelError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for EventName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EventName {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for EventName {
    type Error = ChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for EventName {
    type Error = ChannelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Key of a listener sequence.
///
/// `All` is the wildcard channel: its listeners receive every broadcast,
/// whatever the event name. Callers reach it through the `None` side of the
/// `Option<&str>` convention used by the emitter API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Named(EventName),
    All,
}

impl Channel {
    /// Map the external calling convention onto a channel.
    ///
    /// `None` selects the wildcard; `Some(name)` selects that event name.
    pub fn from_option(event_name: Option<&str>) -> ChannelResult<Self> {
        match event_name {
            None => Ok(Channel::All),
            Some(name) => EventName::new(name).map(Channel::Named),
        }
    }

    pub fn named(name: impl Into<String>) -> ChannelResult<Self> {
        EventName::new(name).map(Channel::Named)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Channel::All)
    }

    /// The event name, or `None` for the wildcard channel.
    pub fn event_name(&self) -> Option<&EventName> {
        match self {
            Channel::Named(name) => Some(name),
            Channel::All => None,
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::Named(name) => core::fmt::Display::fmt(name, f),
            Channel::All => f.write_str("*"),
        }
    }
}

impl From<EventName> for Channel {
    fn from(value: EventName) -> Self {
        Channel::Named(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn none_maps_to_wildcard() {
        assert_eq!(Channel::from_option(None).unwrap(), Channel::All);
        assert!(Channel::All.is_wildcard());
        assert_eq!(Channel::All.event_name(), None);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(EventName::new(""), Err(ChannelError::EmptyName));
        assert_eq!(Channel::from_option(Some("")), Err(ChannelError::EmptyName));
        assert!("".parse::<EventName>().is_err());
    }

    #[test]
    fn legacy_wildcard_literal_is_an_ordinary_name() {
        let channel = Channel::from_option(Some("_all_")).unwrap();
        assert!(!channel.is_wildcard());
        assert_ne!(channel, Channel::All);
        assert_eq!(channel.event_name().map(EventName::as_str), Some("_all_"));
    }

    #[test]
    fn display_renders_name_or_star() {
        assert_eq!(Channel::named("hello-world").unwrap().to_string(), "hello-world");
        assert_eq!(Channel::All.to_string(), "*");
    }

    proptest! {
        #[test]
        fn any_non_empty_string_is_a_named_channel(name in ".+") {
            let channel = Channel::from_option(Some(&name)).unwrap();
            prop_assert!(!channel.is_wildcard());
            prop_assert_eq!(channel.event_name().map(EventName::as_str), Some(name.as_str()));
        }
    }
}
