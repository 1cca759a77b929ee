//! # Entity View Types
//!
//! Snapshots of backend entities as the action layer sees them. These are
//! read from the SDK's cache at menu-resolution time and cloned into action
//! payloads; they are never written back directly — every mutation goes
//! through the backend traits in `palaver-client`.

use crate::identifiers::{ChannelId, MessageId, ServerId, UserId};
use crate::permissions::UserFlags;
use serde::{Deserialize, Serialize};

// ============================================================================
// Channels
// ============================================================================

/// Kind of channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChannelKind {
    /// Personal saved-notes channel
    SavedMessages,
    /// One-to-one direct message
    DirectMessage,
    /// Multi-user group outside any server
    Group,
    /// Server-bound text channel
    #[default]
    TextChannel,
    /// Server-bound voice channel
    VoiceChannel,
}

impl ChannelKind {
    /// Whether this kind lives inside a server
    #[must_use]
    pub fn is_server_channel(&self) -> bool {
        matches!(self, Self::TextChannel | Self::VoiceChannel)
    }
}

/// A channel snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier
    pub id: ChannelId,
    /// Channel kind
    pub kind: ChannelKind,
    /// Channel name (absent for DMs and saved notes)
    pub name: Option<String>,
    /// Parent server (server-bound kinds only)
    pub server: Option<ServerId>,
    /// Group owner (groups only)
    pub owner: Option<UserId>,
    /// Channel members (DMs and groups)
    #[serde(default)]
    pub recipients: Vec<UserId>,
    /// Most recent message, if the channel has any
    pub last_message_id: Option<MessageId>,
}

impl Channel {
    /// The other participant of a DM, from the viewer's perspective
    #[must_use]
    pub fn dm_recipient(&self, viewer: &UserId) -> Option<&UserId> {
        if self.kind != ChannelKind::DirectMessage {
            return None;
        }
        self.recipients.iter().find(|id| *id != viewer)
    }
}

// ============================================================================
// Servers and members
// ============================================================================

/// A server snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server identifier
    pub id: ServerId,
    /// Server name
    pub name: String,
    /// Owning user
    pub owner: UserId,
    /// Channel ids in display order
    #[serde(default)]
    pub channels: Vec<ChannelId>,
}

impl Server {
    /// First channel in display order, used as the default invite target
    #[must_use]
    pub fn first_channel(&self) -> Option<&ChannelId> {
        self.channels.first()
    }
}

/// A server membership record, keyed by server and user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Server the membership belongs to
    pub server: ServerId,
    /// Member's user id
    pub user: UserId,
    /// Server-specific nickname
    pub nickname: Option<String>,
}

// ============================================================================
// Users
// ============================================================================

/// Relationship between the viewer and another user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RelationshipStatus {
    /// The user is the viewer
    User,
    /// Mutual friends
    Friend,
    /// The user sent the viewer a friend request
    Incoming,
    /// The viewer sent the user a friend request
    Outgoing,
    /// The viewer has blocked the user
    Blocked,
    /// The user has blocked the viewer
    BlockedOther,
    /// No relationship
    #[default]
    None,
}

/// Presence shown to other users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// Actively connected
    Online,
    /// Connected but away
    Idle,
    /// Connected, notifications muted
    Focus,
    /// Do not disturb
    Busy,
    /// Appear offline
    Invisible,
}

impl Presence {
    /// All selectable presences in display order
    pub const ALL: [Presence; 5] = [
        Presence::Online,
        Presence::Idle,
        Presence::Focus,
        Presence::Busy,
        Presence::Invisible,
    ];

    /// Lowercase label key for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Focus => "focus",
            Self::Busy => "busy",
            Self::Invisible => "invisible",
        }
    }
}

/// A user snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Username
    pub username: String,
    /// Relationship with the viewer
    pub relationship: RelationshipStatus,
    /// Whether this is a bot account
    pub bot: bool,
    /// Platform restriction flags
    #[serde(default)]
    pub flags: UserFlags,
    /// Custom status text, if set
    pub status_text: Option<String>,
    /// Current presence, if known
    pub presence: Option<Presence>,
}

impl User {
    /// Whether the account carries a restriction flag (deleted or banned)
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.flags.is_restricted()
    }
}

// ============================================================================
// Messages and attachments
// ============================================================================

/// Media kind of an uploaded attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MediaKind {
    /// Image file
    Image,
    /// Video file
    Video,
    /// Anything else
    #[default]
    File,
}

/// An uploaded file attached to a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment identifier
    pub id: String,
    /// Original filename
    pub filename: String,
    /// Media kind derived from upload metadata
    pub metadata: MediaKind,
}

/// A delivered message snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier
    pub id: MessageId,
    /// Channel the message belongs to
    pub channel: ChannelId,
    /// Author's user id
    pub author: UserId,
    /// Text content (absent for system messages)
    pub content: Option<String>,
    /// Attached files
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Non-empty text content, if the message has any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

// ============================================================================
// Connection
// ============================================================================

/// Connection state of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConnectionState {
    /// Connected and synchronized
    Online,
    /// Attempting to (re)connect
    #[default]
    Connecting,
    /// No connection
    Offline,
}

impl ConnectionState {
    /// Whether presence changes and status edits are currently available
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_channel_kinds() {
        assert!(ChannelKind::TextChannel.is_server_channel());
        assert!(ChannelKind::VoiceChannel.is_server_channel());
        assert!(!ChannelKind::Group.is_server_channel());
        assert!(!ChannelKind::DirectMessage.is_server_channel());
        assert!(!ChannelKind::SavedMessages.is_server_channel());
    }

    #[test]
    fn test_dm_recipient_excludes_viewer() {
        let viewer = UserId::new("me");
        let other = UserId::new("them");
        let dm = Channel {
            id: ChannelId::new("dm"),
            kind: ChannelKind::DirectMessage,
            recipients: vec![viewer.clone(), other.clone()],
            ..Default::default()
        };
        assert_eq!(dm.dm_recipient(&viewer), Some(&other));

        let group = Channel {
            kind: ChannelKind::Group,
            recipients: vec![viewer.clone(), other],
            ..Default::default()
        };
        assert_eq!(group.dm_recipient(&viewer), None);
    }

    #[test]
    fn test_message_text_filters_empty_content() {
        let mut message = Message {
            content: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(message.text(), None);
        message.content = Some("hello".into());
        assert_eq!(message.text(), Some("hello"));
        message.content = None;
        assert_eq!(message.text(), None);
    }

    #[test]
    fn test_connection_gating() {
        assert!(ConnectionState::Online.is_online());
        assert!(!ConnectionState::Connecting.is_online());
        assert!(!ConnectionState::Offline.is_online());
    }
}
