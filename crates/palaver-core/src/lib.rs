//! # Palaver Core
//!
//! Shared data model for the Palaver chat client: identifier newtypes,
//! permission bitmasks, entity view types mirrored from the backend SDK's
//! cache, the local outgoing-message queue, and the unified error type.
//!
//! This crate is pure data — no I/O, no async, no SDK coupling. Frontends
//! and the action layer build on these types; the backend SDK remains an
//! external collaborator reached through the traits in `palaver-client`.

/// Channel, server, user, and message identifiers
pub mod identifiers;

/// Permission and user-flag bitmasks
pub mod permissions;

/// Entity view types (channels, servers, users, members, messages)
pub mod entities;

/// Locally queued outgoing messages awaiting confirmed delivery
pub mod queue;

/// Unified error type for client operations
pub mod errors;

pub use entities::*;
pub use errors::{ClientError, Result};
pub use identifiers::*;
pub use permissions::{Permission, UserFlags, UserPermission};
pub use queue::{MessageQueue, QueueStatus, QueuedMessage, ReplyIntent};
