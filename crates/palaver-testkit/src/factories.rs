//! Entity snapshot factories
//!
//! One-line constructors for the snapshots tests keep building. Factories
//! produce minimal valid entities; tests override the fields they care about
//! with struct update syntax.

use palaver_core::{
    Attachment, Channel, ChannelId, ChannelKind, MediaKind, Member, Message, MessageId,
    MessageNonce, QueueStatus, QueuedMessage, RelationshipStatus, Server, ServerId, User, UserId,
};

/// A user with no relationship to the viewer
#[must_use]
pub fn user(id: &str) -> User {
    User {
        id: UserId::new(id),
        username: id.to_string(),
        ..Default::default()
    }
}

/// A mutual friend of the viewer
#[must_use]
pub fn friend(id: &str) -> User {
    User {
        relationship: RelationshipStatus::Friend,
        ..user(id)
    }
}

/// A bot account with no relationship to the viewer
#[must_use]
pub fn bot(id: &str) -> User {
    User {
        bot: true,
        ..user(id)
    }
}

/// A channel of the given kind
#[must_use]
pub fn channel(id: &str, kind: ChannelKind) -> Channel {
    Channel {
        id: ChannelId::new(id),
        kind,
        name: (kind.is_server_channel() || kind == ChannelKind::Group).then(|| id.to_string()),
        ..Default::default()
    }
}

/// A server-bound text channel with its parent set
#[must_use]
pub fn server_channel(id: &str, server: &ServerId) -> Channel {
    Channel {
        server: Some(server.clone()),
        ..channel(id, ChannelKind::TextChannel)
    }
}

/// A group channel owned by `owner`
#[must_use]
pub fn group(id: &str, owner: &UserId) -> Channel {
    Channel {
        owner: Some(owner.clone()),
        recipients: vec![owner.clone()],
        ..channel(id, ChannelKind::Group)
    }
}

/// A DM between the viewer and `other`
#[must_use]
pub fn dm(id: &str, viewer: &UserId, other: &UserId) -> Channel {
    Channel {
        recipients: vec![viewer.clone(), other.clone()],
        ..channel(id, ChannelKind::DirectMessage)
    }
}

/// A server owned by `owner`
#[must_use]
pub fn server(id: &str, owner: &UserId) -> Server {
    Server {
        id: ServerId::new(id),
        name: id.to_string(),
        owner: owner.clone(),
        ..Default::default()
    }
}

/// A membership record for `user` in `server`
#[must_use]
pub fn member(server: &ServerId, user: &UserId) -> Member {
    Member {
        server: server.clone(),
        user: user.clone(),
        nickname: None,
    }
}

/// A text message from `author` in `channel`
#[must_use]
pub fn message(id: &str, channel: &ChannelId, author: &UserId) -> Message {
    Message {
        id: MessageId::new(id),
        channel: channel.clone(),
        author: author.clone(),
        content: Some(format!("message {id}")),
        ..Default::default()
    }
}

/// An attachment of the given media kind
#[must_use]
pub fn attachment(id: &str, kind: MediaKind) -> Attachment {
    Attachment {
        id: id.to_string(),
        filename: format!("{id}.bin"),
        metadata: kind,
    }
}

/// A failed queued message keyed by `nonce`
#[must_use]
pub fn failed_queued(nonce: &str, channel: &ChannelId) -> QueuedMessage {
    QueuedMessage {
        nonce: MessageNonce::new(nonce),
        channel: channel.clone(),
        content: format!("queued {nonce}"),
        replies: Vec::new(),
        status: QueueStatus::Failed {
            error: "Network error: connection reset".to_string(),
        },
    }
}
