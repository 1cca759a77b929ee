//! # Palaver Client
//!
//! Capability traits over the backend chat SDK. The action layer never talks
//! to the SDK directly; it is handed these capabilities explicitly so the
//! resolver stays pure and everything is unit-testable without a live
//! session:
//!
//! - [`Directory`] — synchronous cache lookups by id
//! - [`PermissionOracle`] — permission bitmasks per entity, computed fresh
//!   at every menu resolution
//! - [`Backend`] — the asynchronous mutation surface
//! - [`Platform`] — local frontend effects (clipboard, URLs, navigation)
//! - [`EventSink`] — the internal UI event bus
//!
//! Networking, caching, and state synchronization all belong to the SDK
//! behind these seams.

/// Synchronous entity lookups from the SDK cache
pub mod directory;

/// Permission bitmask computation
pub mod oracle;

/// Asynchronous mutating calls against the backend
pub mod backend;

/// Frontend platform effects (clipboard, URL open, navigation)
pub mod platform;

/// Internal UI event bus vocabulary
pub mod events;

pub use backend::{Backend, CreateChannelRequest, CreatedChannelKind, SendMessageRequest};
pub use directory::Directory;
pub use events::{AppendKind, EventSink, UiEvent};
pub use oracle::PermissionOracle;
pub use platform::{message_link, OpenTarget, Platform, Route};

use palaver_core::ClientError;

/// Normalize a backend error to the string shown to the user.
///
/// Inline prompt banners and the shared error modal both display exactly
/// this string, so every user-visible failure goes through here.
#[must_use]
pub fn take_error(err: &ClientError) -> String {
    err.to_string()
}
