//! Topic grants and their capability sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The access a grant gives on its topic.
///
/// Modelled as two flags rather than a keyword string so that `read` +
/// `write` has exactly one spelling. The empty set is a valid value (it is
/// what `rm-topic` matches on when no flag is given) but it cannot be written
/// to an ACL file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Subscribe access.
    pub read: bool,
    /// Publish access.
    pub write: bool,
}

impl Capabilities {
    /// Neither read nor write.
    pub const NONE: Self = Self::new(false, false);
    /// `topic read ...`
    pub const READ: Self = Self::new(true, false);
    /// `topic write ...`
    pub const WRITE: Self = Self::new(false, true);
    /// `topic readwrite ...`
    pub const READ_WRITE: Self = Self::new(true, true);

    /// Creates a capability set from its two flags.
    pub const fn new(read: bool, write: bool) -> Self {
        Self { read, write }
    }

    /// Returns true if neither capability is set.
    pub const fn is_empty(&self) -> bool {
        !self.read && !self.write
    }

    /// The qualifier keyword used in a `topic` line, if the set has one.
    pub const fn qualifier(&self) -> Option<&'static str> {
        match (self.read, self.write) {
            (true, true) => Some("readwrite"),
            (true, false) => Some("read"),
            (false, true) => Some("write"),
            (false, false) => None,
        }
    }

    /// Parses a qualifier keyword, ignoring ASCII case as the broker does.
    pub fn from_qualifier(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("readwrite") {
            Some(Self::READ_WRITE)
        } else if keyword.eq_ignore_ascii_case("read") {
            Some(Self::READ)
        } else if keyword.eq_ignore_ascii_case("write") {
            Some(Self::WRITE)
        } else {
            None
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.qualifier().unwrap_or("none"))
    }
}

/// One `topic` line under a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    /// Access given on the topic.
    pub capabilities: Capabilities,
    /// Topic pattern, kept exactly as written (wildcards are not interpreted).
    pub topic: String,
}

impl Grant {
    /// Creates a grant.
    pub fn new(capabilities: Capabilities, topic: impl Into<String>) -> Self {
        Self {
            capabilities,
            topic: topic.into(),
        }
    }

    /// Returns true if this grant has exactly the given capabilities and topic.
    pub fn matches(&self, capabilities: Capabilities, topic: &str) -> bool {
        self.capabilities == capabilities && self.topic == topic
    }
}
