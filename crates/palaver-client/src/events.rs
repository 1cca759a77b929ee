//! Internal UI event bus vocabulary
//!
//! Fire-and-forget signals from the action layer to other UI surfaces (the
//! compose box, the reply bar, the message renderer). Delivery is
//! synchronous and best-effort.

use palaver_core::{Channel, Message, MessageId, Server};
use serde::{Deserialize, Serialize};

/// How appended text should be treated by the compose box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppendKind {
    /// A `<@user>` mention
    Mention,
    /// Quoted message content
    Quote,
}

/// An internal UI event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Append text into the compose box
    ComposeAppend {
        /// Text to append
        text: String,
        /// Append semantics
        kind: AppendKind,
    },
    /// Add a message to the reply bar
    ReplyTo {
        /// Message being replied to
        message: Message,
    },
    /// Switch a rendered message into edit mode
    EditMessage {
        /// Message to edit
        id: MessageId,
    },
    /// Place the visual unread marker above a message
    SetUnreadMarker {
        /// Message the marker sits on
        id: MessageId,
    },
    /// Open the notification options submenu for a channel
    OpenChannelNotifications {
        /// Target channel
        channel: Channel,
    },
    /// Open the notification options submenu for a server
    OpenServerNotifications {
        /// Target server
        server: Server,
    },
}

/// Receiver for internal UI events.
pub trait EventSink: Send + Sync {
    /// Deliver an event to subscribed UI surfaces
    fn emit(&self, event: UiEvent);
}
