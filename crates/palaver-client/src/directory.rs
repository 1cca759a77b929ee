//! Synchronous entity lookups from the SDK cache
//!
//! The resolver runs synchronously on every menu open, so all reads come
//! from the SDK's in-memory cache. A `None` here means the entity is absent
//! or stale; callers degrade by omitting the dependent menu entries.

use palaver_core::{
    Attachment, Channel, ChannelId, Member, Message, MessageId, Server, ServerId, User, UserId,
};

/// Read-only lookups against the backend SDK's entity cache.
pub trait Directory: Send + Sync {
    /// Look up a channel by id
    fn channel(&self, id: &ChannelId) -> Option<Channel>;

    /// Look up a server by id
    fn server(&self, id: &ServerId) -> Option<Server>;

    /// Look up a user by id
    fn user(&self, id: &UserId) -> Option<User>;

    /// Look up a membership record by its composite server+user key
    fn member(&self, server: &ServerId, user: &UserId) -> Option<Member>;

    /// Whether a channel id is present in the cache at all.
    ///
    /// Used to gate operator tooling on the existence of privileged
    /// moderation channels.
    fn has_channel(&self, id: &ChannelId) -> bool {
        self.channel(id).is_some()
    }

    /// The id of the message immediately before `message` in the loaded
    /// history of `channel`, if any.
    ///
    /// Marking a message unread places the read marker on its predecessor.
    fn message_before(&self, channel: &ChannelId, message: &MessageId) -> Option<MessageId>;

    /// Public URL for an uploaded attachment
    fn attachment_url(&self, attachment: &Attachment) -> String;
}
