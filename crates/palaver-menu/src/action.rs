//! The closed catalog of menu actions
//!
//! Every selectable context-menu entry carries one of these variants. The
//! set is closed: adding a variant without a dispatcher arm fails to
//! compile, so the catalog and the dispatch table can never drift apart.
//!
//! Payload fields are never optional within a variant — if the data is
//! missing, the resolver must not offer the variant at all.

use palaver_core::{
    Attachment, Channel, ChannelId, Member, Message, MessageId, Presence, QueuedMessage, Server,
    ServerId, User, UserId,
};
use serde::{Deserialize, Serialize};

/// A tagged, payload-bearing description of one menu command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    // =========================================================================
    // Clipboard
    // =========================================================================
    /// Copy a raw entity id
    CopyId {
        /// The id under the cursor (server, channel, user, or message)
        id: String,
    },
    /// Copy a permalink to a message
    CopyMessageLink {
        /// Target message
        message: Message,
    },
    /// Copy the current document text selection
    CopySelection {
        /// Selected text
        text: String,
    },
    /// Copy a message's text content
    CopyText {
        /// Message content
        content: String,
    },

    // =========================================================================
    // Read state
    // =========================================================================
    /// Move a channel's read marker to its latest message
    MarkAsRead {
        /// Target channel
        channel: Channel,
    },
    /// Mark every channel of a server as read
    MarkServerAsRead {
        /// Target server
        server: Server,
    },
    /// Place the unread marker on a message
    MarkUnread {
        /// Message to mark unread from
        message: Message,
    },

    // =========================================================================
    // Outgoing queue
    // =========================================================================
    /// Re-send a failed queued message with its original nonce
    RetryMessage {
        /// Queued entry to retry
        message: QueuedMessage,
    },
    /// Discard a queued message without any network call
    CancelMessage {
        /// Queued entry to discard
        message: QueuedMessage,
    },

    // =========================================================================
    // Compose box
    // =========================================================================
    /// Insert a mention into the compose box
    Mention {
        /// User to mention
        user: UserId,
    },
    /// Add a message to the reply bar
    ReplyMessage {
        /// Message being replied to
        target: Message,
    },
    /// Quote message content into the compose box
    QuoteMessage {
        /// Content to quote
        content: String,
    },

    // =========================================================================
    // Messages
    // =========================================================================
    /// Switch a message into edit mode
    EditMessage {
        /// Message to edit
        id: MessageId,
    },
    /// Delete a message (confirmation prompt)
    DeleteMessage {
        /// Message to delete
        target: Message,
    },

    // =========================================================================
    // Attachments and links
    // =========================================================================
    /// Open an attachment in a new tab
    OpenFile {
        /// Target attachment
        attachment: Attachment,
    },
    /// Download an attachment
    SaveFile {
        /// Target attachment
        attachment: Attachment,
    },
    /// Copy a shareable link to an attachment
    CopyFileLink {
        /// Target attachment
        attachment: Attachment,
    },
    /// Open a hyperlink
    OpenLink {
        /// Target href
        link: String,
    },
    /// Copy a hyperlink
    CopyLink {
        /// Target href
        link: String,
    },

    // =========================================================================
    // Group management
    // =========================================================================
    /// Transfer group ownership
    MakeOwner {
        /// Group channel
        channel: Channel,
        /// New owner
        user: User,
    },
    /// Remove a member from a group
    RemoveMember {
        /// Group channel
        channel: Channel,
        /// Member to remove
        user: User,
    },

    // =========================================================================
    // Server moderation
    // =========================================================================
    /// Kick a server member (confirmation prompt)
    KickMember {
        /// Membership record of the target
        target: Member,
    },
    /// Ban a server member (confirmation prompt)
    BanMember {
        /// Membership record of the target
        target: Member,
    },

    // =========================================================================
    // Users and relationships
    // =========================================================================
    /// Open a user's profile
    ViewProfile {
        /// Target user
        user: User,
    },
    /// Open (or create) a DM with a user and navigate to it
    MessageUser {
        /// Target user
        user: User,
    },
    /// Block a user (confirmation form)
    BlockUser {
        /// Target user
        user: User,
    },
    /// Unblock a user
    UnblockUser {
        /// Target user
        user: User,
    },
    /// Terminate an account (operator tooling)
    TerminateUser {
        /// Target user
        user: User,
    },
    /// Blacklist an account (operator tooling)
    BlacklistUser {
        /// Target user
        user: User,
    },
    /// Remove an account from the blacklist (operator tooling)
    UnblacklistUser {
        /// Target user
        user: User,
    },
    /// Send or accept a friend request
    AddFriend {
        /// Target user
        user: User,
    },
    /// Remove a friend (confirmation form)
    RemoveFriend {
        /// Target user
        user: User,
    },
    /// Cancel or deny a pending friend request
    CancelFriend {
        /// Target user
        user: User,
    },

    // =========================================================================
    // Own status
    // =========================================================================
    /// Change the viewer's presence
    SetPresence {
        /// New presence
        presence: Presence,
    },
    /// Open the custom status editor
    SetStatus,
    /// Clear the viewer's custom status text
    ClearStatus,

    // =========================================================================
    // Channel and server lifecycle
    // =========================================================================
    /// Create a channel in a server (confirmation prompt)
    CreateChannel {
        /// Target server
        target: Server,
    },
    /// Create a category in a server (external form)
    CreateCategory {
        /// Target server
        target: Server,
    },
    /// Create an invite to a channel (prompt pre-generates the code)
    CreateInvite {
        /// Invite target channel
        target: Channel,
    },
    /// Leave a group channel (confirmation prompt)
    LeaveGroup {
        /// Group to leave
        target: Channel,
    },
    /// Delete a server channel (confirmation prompt)
    DeleteChannel {
        /// Channel to delete
        target: Channel,
    },
    /// Close a DM conversation (confirmation prompt)
    CloseDm {
        /// DM channel to close
        target: Channel,
    },
    /// Leave a server (confirmation prompt)
    LeaveServer {
        /// Server to leave
        target: Server,
    },
    /// Delete a server (confirmation prompt, owner only)
    DeleteServer {
        /// Server to delete
        target: Server,
    },
    /// Edit the viewer's per-server nickname and avatar (external form)
    EditIdentity {
        /// Viewer's membership record
        target: Member,
    },

    // =========================================================================
    // Navigation and submenus
    // =========================================================================
    /// Open the notification options submenu for a channel
    OpenChannelNotificationOptions {
        /// Target channel
        channel: Channel,
    },
    /// Open the notification options submenu for a server
    OpenServerNotificationOptions {
        /// Target server
        server: Server,
    },
    /// Navigate to application settings
    OpenSettings,
    /// Navigate to a group channel's settings
    OpenChannelSettings {
        /// Target channel
        id: ChannelId,
    },
    /// Navigate to a server's settings
    OpenServerSettings {
        /// Target server
        id: ServerId,
    },
    /// Navigate to a server channel's settings
    OpenServerChannelSettings {
        /// Parent server
        server: ServerId,
        /// Target channel
        id: ChannelId,
    },
}

impl Action {
    /// Stable snake_case tag, used as the default display-label key and in
    /// dispatch logging.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::CopyId { .. } => "copy_id",
            Self::CopyMessageLink { .. } => "copy_message_link",
            Self::CopySelection { .. } => "copy_selection",
            Self::CopyText { .. } => "copy_text",
            Self::MarkAsRead { .. } => "mark_as_read",
            Self::MarkServerAsRead { .. } => "mark_server_as_read",
            Self::MarkUnread { .. } => "mark_unread",
            Self::RetryMessage { .. } => "retry_message",
            Self::CancelMessage { .. } => "cancel_message",
            Self::Mention { .. } => "mention",
            Self::ReplyMessage { .. } => "reply_message",
            Self::QuoteMessage { .. } => "quote_message",
            Self::EditMessage { .. } => "edit_message",
            Self::DeleteMessage { .. } => "delete_message",
            Self::OpenFile { .. } => "open_file",
            Self::SaveFile { .. } => "save_file",
            Self::CopyFileLink { .. } => "copy_file_link",
            Self::OpenLink { .. } => "open_link",
            Self::CopyLink { .. } => "copy_link",
            Self::MakeOwner { .. } => "make_owner",
            Self::RemoveMember { .. } => "remove_member",
            Self::KickMember { .. } => "kick_member",
            Self::BanMember { .. } => "ban_member",
            Self::ViewProfile { .. } => "view_profile",
            Self::MessageUser { .. } => "message_user",
            Self::BlockUser { .. } => "block_user",
            Self::UnblockUser { .. } => "unblock_user",
            Self::TerminateUser { .. } => "term_user",
            Self::BlacklistUser { .. } => "blacklist_user",
            Self::UnblacklistUser { .. } => "unblacklist_user",
            Self::AddFriend { .. } => "add_friend",
            Self::RemoveFriend { .. } => "remove_friend",
            Self::CancelFriend { .. } => "cancel_friend",
            Self::SetPresence { .. } => "set_presence",
            Self::SetStatus => "set_status",
            Self::ClearStatus => "clear_status",
            Self::CreateChannel { .. } => "create_channel",
            Self::CreateCategory { .. } => "create_category",
            Self::CreateInvite { .. } => "create_invite",
            Self::LeaveGroup { .. } => "leave_group",
            Self::DeleteChannel { .. } => "delete_channel",
            Self::CloseDm { .. } => "close_dm",
            Self::LeaveServer { .. } => "leave_server",
            Self::DeleteServer { .. } => "delete_server",
            Self::EditIdentity { .. } => "edit_identity",
            Self::OpenChannelNotificationOptions { .. } => "open_channel_notification_options",
            Self::OpenServerNotificationOptions { .. } => "open_server_notification_options",
            Self::OpenSettings => "open_settings",
            Self::OpenChannelSettings { .. } => "open_channel_settings",
            Self::OpenServerSettings { .. } => "open_server_settings",
            Self::OpenServerChannelSettings { .. } => "open_server_channel_settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matches_serde_discriminant() {
        let action = Action::CopyId { id: "01ABC".into() };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], action.tag());

        let action = Action::SetPresence {
            presence: Presence::Busy,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "set_presence");
    }
}
