//! Core identifier types used across the Palaver client
//!
//! This module provides the fundamental identifier types that uniquely
//! identify entities within the chat data model. All identifiers wrap the
//! backend's opaque string ids; equality and hashing are byte-wise.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier from a backend id string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id! {
    /// User identifier
    ///
    /// Identifies a user account, including the viewer's own account.
    UserId
}

string_id! {
    /// Channel identifier
    ///
    /// Identifies any channel kind: saved notes, direct messages, groups,
    /// and server-bound text or voice channels.
    ChannelId
}

string_id! {
    /// Server identifier
    ServerId
}

string_id! {
    /// Message identifier
    MessageId
}

string_id! {
    /// Short invite code returned by invite creation
    InviteCode
}

/// Idempotency token for outgoing messages and channel creation.
///
/// The backend deduplicates by nonce, so a retry must reuse the nonce of the
/// original attempt while a fresh operation generates a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageNonce(pub String);

impl MessageNonce {
    /// Create a nonce from an existing token (e.g. a queued entry's key)
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }

    /// Generate a fresh client-side idempotency token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageNonce {
    fn from(nonce: String) -> Self {
        Self(nonce)
    }
}

impl From<&str> for MessageNonce {
    fn from(nonce: &str) -> Self {
        Self(nonce.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_raw() {
        assert_eq!(ChannelId::new("01ABC").to_string(), "01ABC");
        assert_eq!(UserId::from("u1").as_str(), "u1");
    }

    #[test]
    fn test_default_id_is_empty() {
        // Entity snapshots derive Default with id fields, so the ids must too.
        assert_eq!(UserId::default().as_str(), "");
        assert_eq!(ChannelId::default(), ChannelId::new(""));
    }

    #[test]
    fn test_generated_nonces_are_unique() {
        assert_ne!(MessageNonce::generate(), MessageNonce::generate());
    }

    #[test]
    fn test_id_roundtrip_serde() {
        let id = ServerId::new("srv");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"srv\"");
        let back: ServerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
