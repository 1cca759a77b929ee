//! The per-invocation context-menu request
//!
//! Everything the UI knows about what the user right-clicked, collected
//! into one structure before resolution. All fields are independent and
//! optional; which combinations are meaningful is decided group by group
//! inside the resolver, never here.

use palaver_core::{Attachment, ChannelId, Message, QueuedMessage, ServerId, UserId};
use serde::{Deserialize, Serialize};

/// The set of entity references describing what the user right-clicked.
///
/// Field-combination preconditions, by resolver group:
///
/// - `server_list` short-circuits resolution entirely; no other field is
///   consulted when it is set.
/// - `channel` and `contextual_channel` may both be set; `channel` wins as
///   the permission target, `contextual_channel` additionally drives the
///   mention entry and group-owner moderation.
/// - `server` is authoritative over a server channel's parent when both are
///   present.
/// - `queued` suppresses every message-derived group; a queued message has
///   no finalized content or attachments.
/// - `selection` and `active_link` carry document state the resolver cannot
///   look up itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuRequest {
    /// Targeted user
    pub user: Option<UserId>,
    /// Explicitly targeted server
    pub server: Option<ServerId>,
    /// Server targeted from the server list sidebar
    pub server_list: Option<ServerId>,
    /// Targeted channel
    pub channel: Option<ChannelId>,
    /// Channel the menu was opened inside (may differ from the target)
    pub contextual_channel: Option<ChannelId>,
    /// Targeted delivered message
    pub message: Option<Message>,
    /// Targeted attachment, when right-clicked directly
    pub attachment: Option<Attachment>,
    /// Targeted queued (unsent) message
    pub queued: Option<QueuedMessage>,
    /// Whether the targeted entity carries an unread indicator
    #[serde(default)]
    pub unread: bool,
    /// Current document text selection, if any
    pub selection: Option<String>,
    /// Href of the focused hyperlink, if the cursor is on one
    pub active_link: Option<String>,
}

impl ContextMenuRequest {
    /// Whether any identifiable entity is referenced, which is what arms the
    /// identity footer group
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.server.is_some()
            || self.channel.is_some()
            || self.user.is_some()
            || self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_core::MessageId;

    #[test]
    fn test_identity_footer_trigger() {
        assert!(!ContextMenuRequest::default().has_identity());

        let request = ContextMenuRequest {
            user: Some(UserId::new("u1")),
            ..Default::default()
        };
        assert!(request.has_identity());

        let request = ContextMenuRequest {
            message: Some(Message {
                id: MessageId::new("m1"),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(request.has_identity());
    }
}
