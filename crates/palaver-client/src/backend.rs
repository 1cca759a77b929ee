//! Asynchronous mutating calls against the backend
//!
//! One method per remote effect the action layer can trigger. All methods
//! suspend at the network boundary and surface failures as [`ClientError`];
//! retry and timeout policy belong to the SDK implementation, not here.

use async_trait::async_trait;
use palaver_core::{
    Channel, ChannelId, InviteCode, Message, MessageId, MessageNonce, Presence, ReplyIntent,
    Result, ServerId, UserId,
};
use serde::{Deserialize, Serialize};

/// Channel kind selectable when creating a server channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CreatedChannelKind {
    /// Text channel
    #[default]
    Text,
    /// Voice channel
    Voice,
}

/// Payload for creating a server channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    /// Channel name
    pub name: String,
    /// Channel kind
    pub kind: CreatedChannelKind,
    /// Client-generated idempotency token
    pub nonce: MessageNonce,
}

/// Payload for sending (or re-sending) a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Idempotency token; a retry reuses the original queued nonce
    pub nonce: MessageNonce,
    /// Message content
    pub content: String,
    /// Reply references
    pub replies: Vec<ReplyIntent>,
}

/// The backend SDK's mutation surface.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Delete a channel. Against groups this leaves the group; against DMs
    /// it closes the conversation.
    async fn delete_channel(&self, channel: &ChannelId) -> Result<()>;

    /// Delete a server, or leave it when the viewer is not the owner
    async fn delete_server(&self, server: &ServerId) -> Result<()>;

    /// Delete a single message
    async fn delete_message(&self, channel: &ChannelId, message: &MessageId) -> Result<()>;

    /// Create an invite to a channel, returning its short code
    async fn create_invite(&self, channel: &ChannelId) -> Result<InviteCode>;

    /// Create a channel in a server, returning the created channel
    async fn create_channel(
        &self,
        server: &ServerId,
        request: CreateChannelRequest,
    ) -> Result<Channel>;

    /// Remove a member from a server
    async fn kick_member(&self, server: &ServerId, user: &UserId) -> Result<()>;

    /// Ban a member from a server, with an optional free-text reason
    async fn ban_member(
        &self,
        server: &ServerId,
        user: &UserId,
        reason: Option<String>,
    ) -> Result<()>;

    /// Transfer ownership of a group channel
    async fn set_channel_owner(&self, channel: &ChannelId, user: &UserId) -> Result<()>;

    /// Remove a member from a group channel
    async fn remove_group_member(&self, channel: &ChannelId, user: &UserId) -> Result<()>;

    /// Send a message, deduplicated by its idempotency nonce
    async fn send_message(
        &self,
        channel: &ChannelId,
        request: SendMessageRequest,
    ) -> Result<Message>;

    /// Open (or fetch) the DM channel with a user
    async fn open_dm(&self, user: &UserId) -> Result<Channel>;

    /// Send or accept a friend request
    async fn add_friend(&self, user: &UserId) -> Result<()>;

    /// Remove a friend, or cancel/deny a pending request
    async fn remove_friend(&self, user: &UserId) -> Result<()>;

    /// Unblock a previously blocked user
    async fn unblock_user(&self, user: &UserId) -> Result<()>;

    /// Update the viewer's presence
    async fn set_presence(&self, presence: Presence) -> Result<()>;

    /// Clear the viewer's custom status text
    async fn clear_status(&self) -> Result<()>;

    /// Move the read marker of a channel to `up_to`
    async fn acknowledge(&self, channel: &ChannelId, up_to: &MessageId) -> Result<()>;

    /// Mark every channel of a server as read
    async fn acknowledge_server(&self, server: &ServerId) -> Result<()>;
}
