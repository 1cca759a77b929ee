//! Frontend platform effects
//!
//! Local-only side effects the host frontend performs on behalf of the
//! action layer: clipboard writes, opening URLs, and history navigation.
//! Failures here carry no user-meaningful signal and are not surfaced.

use palaver_core::{ChannelId, MessageId, ServerId};
use serde::{Deserialize, Serialize};

/// Where an opened URL should land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenTarget {
    /// Open in a new tab or window
    NewTab,
    /// Replace the current page (used for downloads)
    SameTab,
}

/// An in-app navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Application settings
    Settings,
    /// A channel outside any server
    Channel(ChannelId),
    /// A channel within a server
    ServerChannel {
        /// Parent server
        server: ServerId,
        /// Target channel
        channel: ChannelId,
    },
    /// Settings of a group channel
    ChannelSettings(ChannelId),
    /// Settings of a server
    ServerSettings(ServerId),
    /// Settings of a server-bound channel
    ServerChannelSettings {
        /// Parent server
        server: ServerId,
        /// Target channel
        channel: ChannelId,
    },
}

impl Route {
    /// Render the route as a history path
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Settings => "/settings".to_string(),
            Self::Channel(channel) => format!("/channel/{channel}"),
            Self::ServerChannel { server, channel } => {
                format!("/server/{server}/channel/{channel}")
            }
            Self::ChannelSettings(channel) => format!("/channel/{channel}/settings"),
            Self::ServerSettings(server) => format!("/server/{server}/settings"),
            Self::ServerChannelSettings { server, channel } => {
                format!("/server/{server}/channel/{channel}/settings")
            }
        }
    }
}

/// A permalink to a message, relative to the platform origin
#[must_use]
pub fn message_link(
    origin: &str,
    server: Option<&ServerId>,
    channel: &ChannelId,
    message: &MessageId,
) -> String {
    match server {
        Some(server) => format!("{origin}/server/{server}/channel/{channel}/{message}"),
        None => format!("{origin}/channel/{channel}/{message}"),
    }
}

/// Local platform effects performed by the host frontend.
pub trait Platform: Send + Sync {
    /// Write text to the system clipboard
    fn write_clipboard(&self, text: &str);

    /// Open an external URL
    fn open_url(&self, url: &str, target: OpenTarget);

    /// Push an in-app navigation entry
    fn navigate(&self, route: Route);

    /// Origin prefix used to build shareable links (no trailing slash)
    fn origin(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Settings.path(), "/settings");
        assert_eq!(Route::Channel(ChannelId::new("c1")).path(), "/channel/c1");
        assert_eq!(
            Route::ServerChannelSettings {
                server: ServerId::new("s1"),
                channel: ChannelId::new("c1"),
            }
            .path(),
            "/server/s1/channel/c1/settings"
        );
    }

    #[test]
    fn test_message_link_includes_server_segment() {
        let channel = ChannelId::new("c1");
        let message = MessageId::new("m1");
        assert_eq!(
            message_link("https://example.chat", None, &channel, &message),
            "https://example.chat/channel/c1/m1"
        );
        let server = ServerId::new("s1");
        assert_eq!(
            message_link("https://example.chat", Some(&server), &channel, &message),
            "https://example.chat/server/s1/channel/c1/m1"
        );
    }
}
