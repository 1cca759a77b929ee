//! Permission and user-flag bitmasks
//!
//! Capabilities are granted as bits in integer masks computed by the backend
//! SDK. The resolver treats a missing grant as "omit the menu entry", never
//! as an error, so absent entities default to an empty mask.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Channel- and server-scoped permissions.
    ///
    /// A single bit space covers both scopes: channel masks carry the
    /// message-level bits, server masks carry the management and member
    /// moderation bits. Bit positions follow the backend's wire values.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permission: u64 {
        /// Create, edit, and delete channels
        const MANAGE_CHANNEL = 1 << 0;
        /// Edit server details and settings
        const MANAGE_SERVER = 1 << 1;
        /// Remove members from the server
        const KICK_MEMBERS = 1 << 6;
        /// Ban members from the server
        const BAN_MEMBERS = 1 << 7;
        /// Send messages in a channel
        const SEND_MESSAGE = 1 << 22;
        /// Delete or pin other users' messages
        const MANAGE_MESSAGES = 1 << 23;
        /// Create invites to a channel
        const INVITE_OTHERS = 1 << 31;
        /// Change own nickname on the server
        const CHANGE_NICKNAME = 1 << 34;
        /// Change own server avatar
        const CHANGE_AVATAR = 1 << 36;
    }
}

bitflags! {
    /// Permissions granted against another user, derived from the
    /// relationship between viewer and target.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UserPermission: u32 {
        /// Base access to the user's public data
        const ACCESS = 1 << 0;
        /// View the user's full profile
        const VIEW_PROFILE = 1 << 1;
        /// Open a DM and send messages
        const SEND_MESSAGE = 1 << 2;
        /// Invite the user to groups
        const INVITE = 1 << 3;
    }
}

bitflags! {
    /// Account restriction flags set by the platform.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UserFlags: u32 {
        /// Account suspended by moderators
        const SUSPENDED = 1 << 0;
        /// Account deleted by its owner
        const DELETED = 1 << 1;
        /// Account banned from the platform
        const BANNED = 1 << 2;
    }
}

impl UserFlags {
    /// Whether the account is restricted: deleted or banned accounts only
    /// ever get the block action offered against them.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.intersects(UserFlags::DELETED | UserFlags::BANNED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entity_defaults_to_empty_mask() {
        assert!(Permission::default().is_empty());
        assert!(UserPermission::default().is_empty());
    }

    #[test]
    fn test_channel_and_server_bits_disjoint() {
        let channel = Permission::SEND_MESSAGE | Permission::MANAGE_MESSAGES;
        let server = Permission::KICK_MEMBERS | Permission::BAN_MEMBERS;
        assert!((channel & server).is_empty());
    }

    #[test]
    fn test_restricted_flags() {
        assert!(!UserFlags::SUSPENDED.is_restricted());
        assert!(UserFlags::DELETED.is_restricted());
        assert!(UserFlags::BANNED.is_restricted());
        assert!((UserFlags::SUSPENDED | UserFlags::BANNED).is_restricted());
        assert!(!UserFlags::empty().is_restricted());
    }
}
