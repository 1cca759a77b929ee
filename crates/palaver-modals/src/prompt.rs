//! Confirmation prompt state machine
//!
//! One [`PromptModal`] instance drives one open confirmation dialog. The
//! lifecycle is: construct from a [`PromptRequest`], `mount` it (only the
//! invite prompt does work here), collect any local fields, then `confirm`
//! or `cancel`. Confirm performs exactly one awaited backend call; on
//! failure the prompt stays open with the normalized error retained inline
//! so the user can retry or cancel.

use palaver_client::{
    take_error, Backend, CreateChannelRequest, CreatedChannelKind, Directory, Platform, Route,
};
use palaver_core::{Channel, InviteCode, Message, MessageNonce, Server, UserId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A request for one of the ten confirmation prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptRequest {
    /// Leave a group channel
    LeaveGroup {
        /// Group to leave
        channel: Channel,
    },
    /// Close a direct message conversation
    CloseDm {
        /// DM channel to close
        channel: Channel,
    },
    /// Leave a server
    LeaveServer {
        /// Server to leave
        server: Server,
    },
    /// Delete a server (owner only)
    DeleteServer {
        /// Server to delete
        server: Server,
    },
    /// Delete a server channel
    DeleteChannel {
        /// Channel to delete
        channel: Channel,
    },
    /// Delete a single message
    DeleteMessage {
        /// Message to delete
        message: Message,
    },
    /// Create an invite to a channel
    CreateInvite {
        /// Invite target channel
        channel: Channel,
    },
    /// Kick a member from a server
    KickMember {
        /// Server to kick from
        server: Server,
        /// Member's user id
        user: UserId,
    },
    /// Ban a member from a server
    BanMember {
        /// Server to ban from
        server: Server,
        /// Member's user id
        user: UserId,
    },
    /// Create a channel in a server
    CreateChannel {
        /// Target server
        server: Server,
    },
}

impl PromptRequest {
    /// Stable tag for logging and display-label lookup
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LeaveGroup { .. } => "leave_group",
            Self::CloseDm { .. } => "close_dm",
            Self::LeaveServer { .. } => "leave_server",
            Self::DeleteServer { .. } => "delete_server",
            Self::DeleteChannel { .. } => "delete_channel",
            Self::DeleteMessage { .. } => "delete_message",
            Self::CreateInvite { .. } => "create_invite",
            Self::KickMember { .. } => "kick_member",
            Self::BanMember { .. } => "ban_member",
            Self::CreateChannel { .. } => "create_channel",
        }
    }

    /// Label key for the dialog's question line
    #[must_use]
    pub fn question_key(&self) -> &'static str {
        match self {
            Self::CloseDm { .. } => "confirm_close_dm",
            Self::DeleteServer { .. } | Self::DeleteChannel { .. } => "confirm_delete",
            Self::LeaveGroup { .. } | Self::LeaveServer { .. } => "confirm_leave",
            Self::DeleteMessage { .. } => "delete_message",
            Self::CreateInvite { .. } => "create_invite",
            Self::KickMember { .. } => "kick_member",
            Self::BanMember { .. } => "ban_member",
            Self::CreateChannel { .. } => "create_channel",
        }
    }

    /// Whether the confirm button is rendered in the destructive tone
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        !matches!(self, Self::CreateInvite { .. } | Self::CreateChannel { .. })
    }

    /// Display name substituted into the question line.
    ///
    /// Closing a DM names the other participant; everything else names its
    /// target entity. Missing lookups degrade to `None`.
    #[must_use]
    pub fn subject_name(&self, directory: &dyn Directory, viewer: &UserId) -> Option<String> {
        match self {
            Self::CloseDm { channel } => {
                let recipient = channel.dm_recipient(viewer)?;
                directory.user(recipient).map(|user| user.username)
            }
            Self::LeaveGroup { channel }
            | Self::DeleteChannel { channel }
            | Self::CreateInvite { channel } => channel.name.clone(),
            Self::LeaveServer { server }
            | Self::DeleteServer { server }
            | Self::CreateChannel { server } => Some(server.name.clone()),
            Self::KickMember { user, .. } | Self::BanMember { user, .. } => {
                directory.user(user).map(|user| user.username)
            }
            Self::DeleteMessage { .. } => None,
        }
    }
}

/// State machine for one open confirmation dialog.
///
/// `processing` is the reentrancy guard: while a backend call is in flight
/// the frontend must disable every action, and `confirm` refuses to start a
/// second call. Once the prompt is closed all further operations are no-ops,
/// so a completion landing after close cannot touch discarded UI state.
#[derive(Debug, Clone)]
pub struct PromptModal {
    request: PromptRequest,
    open: bool,
    processing: bool,
    error: Option<String>,
    invite_code: Option<InviteCode>,
    channel_name: String,
    channel_kind: CreatedChannelKind,
    ban_reason: String,
}

impl PromptModal {
    /// Create the prompt in its initial confirming state
    #[must_use]
    pub fn new(request: PromptRequest) -> Self {
        Self {
            request,
            open: true,
            processing: false,
            error: None,
            invite_code: None,
            channel_name: String::new(),
            channel_kind: CreatedChannelKind::Text,
            ban_reason: String::new(),
        }
    }

    /// The request this prompt was opened for
    #[must_use]
    pub fn request(&self) -> &PromptRequest {
        &self.request
    }

    /// Whether the dialog is still on screen
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a backend call is in flight
    #[must_use]
    pub fn processing(&self) -> bool {
        self.processing
    }

    /// Latest normalized error, shown in the inline banner
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pre-generated invite code (invite prompt only)
    #[must_use]
    pub fn invite_code(&self) -> Option<&InviteCode> {
        self.invite_code.as_ref()
    }

    /// Channel name field (create-channel prompt only)
    #[must_use]
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    /// Channel kind selection (create-channel prompt only)
    #[must_use]
    pub fn channel_kind(&self) -> CreatedChannelKind {
        self.channel_kind
    }

    /// Ban reason field (ban prompt only)
    #[must_use]
    pub fn ban_reason(&self) -> &str {
        &self.ban_reason
    }

    /// Update the channel name field
    pub fn set_channel_name(&mut self, name: impl Into<String>) {
        self.channel_name = name.into();
    }

    /// Update the channel kind selection
    pub fn set_channel_kind(&mut self, kind: CreatedChannelKind) {
        self.channel_kind = kind;
    }

    /// Update the ban reason field
    pub fn set_ban_reason(&mut self, reason: impl Into<String>) {
        self.ban_reason = reason.into();
    }

    /// Whether the confirm action is currently enabled.
    ///
    /// The create-channel prompt additionally requires a non-empty name; the
    /// kind selection always has a default.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        if !self.open || self.processing {
            return false;
        }
        match &self.request {
            PromptRequest::CreateChannel { .. } => !self.channel_name.trim().is_empty(),
            _ => true,
        }
    }

    /// Run mount-time work.
    ///
    /// Only the invite prompt does anything here: it begins processing
    /// immediately to pre-generate the invite code, then shows a copy-link
    /// action instead of a destructive confirm.
    pub async fn mount(&mut self, backend: &dyn Backend) {
        let PromptRequest::CreateInvite { channel } = &self.request else {
            return;
        };
        self.processing = true;
        match backend.create_invite(&channel.id).await {
            Ok(code) => self.invite_code = Some(code),
            Err(err) => {
                warn!(prompt = self.request.tag(), %err, "invite generation failed");
                self.error = Some(take_error(&err));
            }
        }
        self.processing = false;
    }

    /// Copy the shareable invite link (invite prompt only)
    pub fn copy_invite_link(&self, platform: &dyn Platform) {
        if let Some(code) = &self.invite_code {
            platform.write_clipboard(&format!("{}/invite/{code}", platform.origin()));
        }
    }

    /// Close the dialog without committing
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Perform the committing backend call for this prompt kind.
    ///
    /// On success the dialog closes (the create-channel prompt navigates to
    /// the new channel first). On failure `processing` returns to false, the
    /// normalized error is retained, and local fields keep their values so
    /// the user can retry.
    pub async fn confirm(&mut self, backend: &dyn Backend, platform: &dyn Platform) {
        if !self.can_confirm() {
            return;
        }
        self.processing = true;
        self.error = None;
        debug!(prompt = self.request.tag(), "prompt confirmed");

        let result = match &self.request {
            PromptRequest::LeaveGroup { channel }
            | PromptRequest::CloseDm { channel }
            | PromptRequest::DeleteChannel { channel } => {
                backend.delete_channel(&channel.id).await
            }
            PromptRequest::LeaveServer { server } | PromptRequest::DeleteServer { server } => {
                backend.delete_server(&server.id).await
            }
            PromptRequest::DeleteMessage { message } => {
                backend.delete_message(&message.channel, &message.id).await
            }
            // The invite prompt's confirm is its "Ok" button; the code was
            // generated on mount.
            PromptRequest::CreateInvite { .. } => Ok(()),
            PromptRequest::KickMember { server, user } => {
                backend.kick_member(&server.id, user).await
            }
            PromptRequest::BanMember { server, user } => {
                let reason = Some(self.ban_reason.clone()).filter(|r| !r.is_empty());
                backend.ban_member(&server.id, user, reason).await
            }
            PromptRequest::CreateChannel { server } => {
                let request = CreateChannelRequest {
                    name: self.channel_name.clone(),
                    kind: self.channel_kind,
                    nonce: MessageNonce::generate(),
                };
                match backend.create_channel(&server.id, request).await {
                    Ok(channel) => {
                        platform.navigate(Route::ServerChannel {
                            server: server.id.clone(),
                            channel: channel.id,
                        });
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
        };

        match result {
            Ok(()) => self.open = false,
            Err(err) => {
                warn!(prompt = self.request.tag(), %err, "prompt action failed");
                self.error = Some(take_error(&err));
                self.processing = false;
            }
        }
    }
}
