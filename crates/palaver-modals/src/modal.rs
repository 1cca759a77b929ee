//! Modal stack entries and the sink trait
//!
//! The host frontend owns the actual modal stack; the action layer only
//! pushes entries onto it through [`ModalSink`]. Forms that collect their
//! own input (block/unfriend confirmations, custom status, server identity)
//! are rendered by external components and appear here only as vocabulary.

use crate::prompt::PromptRequest;
use palaver_core::{Member, Server, User, UserId};
use serde::{Deserialize, Serialize};

/// Platform-level moderation action, operator tooling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModerationAction {
    /// Terminate the account
    Terminate,
    /// Add the account to the platform blacklist
    Blacklist,
    /// Remove the account from the platform blacklist
    Unblacklist,
}

/// An entry pushed onto the shared modal stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    /// Generic error dialog with a normalized description
    Error {
        /// Normalized error description
        error: String,
    },
    /// Full profile view of a user
    UserProfile {
        /// Target user
        user: UserId,
    },
    /// Block confirmation form
    BlockUser {
        /// User to block
        user: User,
    },
    /// Unfriend confirmation form
    UnfriendUser {
        /// Friend to remove
        user: User,
    },
    /// Custom status editor
    CustomStatus,
    /// Per-server nickname and avatar editor
    ServerIdentity {
        /// Viewer's membership record
        member: Member,
    },
    /// Platform moderation confirmation (operator tooling)
    PlatformModeration {
        /// Target user
        user: User,
        /// Requested action
        action: ModerationAction,
    },
    /// Category creation form
    CreateCategory {
        /// Target server
        server: Server,
    },
    /// One of the ten confirmation prompts
    Prompt(PromptRequest),
}

/// Receiver for modal stack pushes.
pub trait ModalSink: Send + Sync {
    /// Push a modal onto the host's modal stack
    fn push(&self, modal: Modal);
}
