//! Side-effecting action dispatch
//!
//! Executes exactly one selected [`Action`]. The handler body is wrapped so
//! any backend rejection is caught at the outer boundary, normalized, and
//! pushed as a generic error modal; local-only effects (clipboard, URL
//! opens, event emission) carry no user-meaningful failure signal and are
//! fire-and-forget.
//!
//! Several actions do not perform their effect here at all. Destructive and
//! input-collecting flows push a request onto the shared modal stack and
//! defer to the prompt engine or to external forms.

use crate::action::Action;
use palaver_client::{
    take_error, AppendKind, Backend, Directory, EventSink, OpenTarget, Platform, Route,
    SendMessageRequest, UiEvent,
};
use palaver_core::{
    ChannelKind, ClientError, Member, MessageQueue, QueuedMessage, Result, Server, UserId,
};
use palaver_modals::{Modal, ModalSink, ModerationAction, PromptRequest};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes menu actions against the backend SDK and the host frontend.
pub struct Dispatcher {
    viewer: UserId,
    directory: Arc<dyn Directory>,
    backend: Arc<dyn Backend>,
    platform: Arc<dyn Platform>,
    events: Arc<dyn EventSink>,
    modals: Arc<dyn ModalSink>,
    queue: Arc<RwLock<MessageQueue>>,
}

impl Dispatcher {
    /// Wire a dispatcher to its seams
    pub fn new(
        viewer: UserId,
        directory: Arc<dyn Directory>,
        backend: Arc<dyn Backend>,
        platform: Arc<dyn Platform>,
        events: Arc<dyn EventSink>,
        modals: Arc<dyn ModalSink>,
        queue: Arc<RwLock<MessageQueue>>,
    ) -> Self {
        Self {
            viewer,
            directory,
            backend,
            platform,
            events,
            modals,
            queue,
        }
    }

    /// The outgoing message queue this dispatcher mutates
    #[must_use]
    pub fn queue(&self) -> &Arc<RwLock<MessageQueue>> {
        &self.queue
    }

    /// Execute one selected action.
    ///
    /// Any error escaping the handler is normalized and pushed as an error
    /// modal; the method itself never fails.
    pub async fn dispatch(&self, action: Action) {
        debug!(action = action.tag(), "dispatching menu action");
        if let Err(err) = self.execute(action).await {
            warn!(%err, "menu action failed");
            self.modals.push(Modal::Error {
                error: take_error(&err),
            });
        }
    }

    async fn execute(&self, action: Action) -> Result<()> {
        match action {
            // Clipboard.
            Action::CopyId { id } => self.platform.write_clipboard(&id),
            Action::CopySelection { text } => self.platform.write_clipboard(&text),
            Action::CopyText { content } => self.platform.write_clipboard(&content),
            Action::CopyLink { link } => self.platform.write_clipboard(&link),
            Action::CopyMessageLink { message } => {
                let server = self
                    .directory
                    .channel(&message.channel)
                    .and_then(|channel| channel.server);
                let link = palaver_client::message_link(
                    &self.platform.origin(),
                    server.as_ref(),
                    &message.channel,
                    &message.id,
                );
                self.platform.write_clipboard(&link);
            }

            // Read state.
            Action::MarkAsRead { channel } => {
                // Saved notes and voice channels have no read state.
                if matches!(
                    channel.kind,
                    ChannelKind::SavedMessages | ChannelKind::VoiceChannel
                ) {
                    return Ok(());
                }
                if let Some(last) = &channel.last_message_id {
                    self.backend.acknowledge(&channel.id, last).await?;
                }
            }
            Action::MarkServerAsRead { server } => {
                self.backend.acknowledge_server(&server.id).await?;
            }
            Action::MarkUnread { message } => {
                // The marker lands on the predecessor so the targeted message
                // itself reads as unread; the oldest loaded message falls
                // back to itself.
                let up_to = self
                    .directory
                    .message_before(&message.channel, &message.id)
                    .unwrap_or_else(|| message.id.clone());
                self.events.emit(UiEvent::SetUnreadMarker {
                    id: up_to.clone(),
                });
                self.backend.acknowledge(&message.channel, &up_to).await?;
            }

            // Outgoing queue.
            Action::RetryMessage { message } => self.retry_message(message).await,
            Action::CancelMessage { message } => {
                self.queue.write().remove(&message.nonce);
            }

            // Compose box.
            Action::Mention { user } => self.events.emit(UiEvent::ComposeAppend {
                text: format!("<@{user}>"),
                kind: AppendKind::Mention,
            }),
            Action::ReplyMessage { target } => {
                self.events.emit(UiEvent::ReplyTo { message: target });
            }
            Action::QuoteMessage { content } => self.events.emit(UiEvent::ComposeAppend {
                text: content,
                kind: AppendKind::Quote,
            }),

            // Messages.
            Action::EditMessage { id } => self.events.emit(UiEvent::EditMessage { id }),
            Action::DeleteMessage { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::DeleteMessage {
                        message: target,
                    }));
            }

            // Attachments and links.
            Action::OpenFile { attachment } => {
                let url = self.directory.attachment_url(&attachment);
                self.platform.open_url(&url, OpenTarget::NewTab);
            }
            Action::SaveFile { attachment } => {
                let url = self
                    .directory
                    .attachment_url(&attachment)
                    .replacen("/attachments/", "/attachments/download/", 1);
                self.platform.open_url(&url, OpenTarget::SameTab);
            }
            Action::CopyFileLink { attachment } => {
                let url = self.directory.attachment_url(&attachment);
                self.platform
                    .write_clipboard(&format!("{url}/{}", attachment.filename));
            }
            Action::OpenLink { link } => self.platform.open_url(&link, OpenTarget::NewTab),

            // Group management.
            Action::MakeOwner { channel, user } => {
                self.backend.set_channel_owner(&channel.id, &user.id).await?;
            }
            Action::RemoveMember { channel, user } => {
                self.backend
                    .remove_group_member(&channel.id, &user.id)
                    .await?;
            }

            // Server moderation, via confirmation prompts.
            Action::KickMember { target } => {
                let server = self.member_server(&target)?;
                self.modals.push(Modal::Prompt(PromptRequest::KickMember {
                    server,
                    user: target.user,
                }));
            }
            Action::BanMember { target } => {
                let server = self.member_server(&target)?;
                self.modals.push(Modal::Prompt(PromptRequest::BanMember {
                    server,
                    user: target.user,
                }));
            }

            // Users and relationships.
            Action::ViewProfile { user } => {
                self.modals.push(Modal::UserProfile { user: user.id });
            }
            Action::MessageUser { user } => {
                let channel = self.backend.open_dm(&user.id).await?;
                self.platform.navigate(Route::Channel(channel.id));
            }
            Action::BlockUser { user } => self.modals.push(Modal::BlockUser { user }),
            Action::UnblockUser { user } => self.backend.unblock_user(&user.id).await?,
            Action::TerminateUser { user } => self.modals.push(Modal::PlatformModeration {
                user,
                action: ModerationAction::Terminate,
            }),
            Action::BlacklistUser { user } => self.modals.push(Modal::PlatformModeration {
                user,
                action: ModerationAction::Blacklist,
            }),
            Action::UnblacklistUser { user } => self.modals.push(Modal::PlatformModeration {
                user,
                action: ModerationAction::Unblacklist,
            }),
            Action::AddFriend { user } => self.backend.add_friend(&user.id).await?,
            Action::RemoveFriend { user } => self.modals.push(Modal::UnfriendUser { user }),
            Action::CancelFriend { user } => self.backend.remove_friend(&user.id).await?,

            // Own status.
            Action::SetPresence { presence } => self.backend.set_presence(presence).await?,
            Action::SetStatus => self.modals.push(Modal::CustomStatus),
            Action::ClearStatus => self.backend.clear_status().await?,

            // Channel and server lifecycle, via prompts and external forms.
            Action::CreateChannel { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::CreateChannel { server: target }));
            }
            Action::CreateCategory { target } => {
                self.modals.push(Modal::CreateCategory { server: target });
            }
            Action::CreateInvite { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::CreateInvite { channel: target }));
            }
            Action::LeaveGroup { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::LeaveGroup { channel: target }));
            }
            Action::DeleteChannel { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::DeleteChannel { channel: target }));
            }
            Action::CloseDm { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::CloseDm { channel: target }));
            }
            Action::LeaveServer { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::LeaveServer { server: target }));
            }
            Action::DeleteServer { target } => {
                self.modals
                    .push(Modal::Prompt(PromptRequest::DeleteServer { server: target }));
            }
            Action::EditIdentity { target } => {
                self.modals.push(Modal::ServerIdentity { member: target });
            }

            // Navigation and submenus.
            Action::OpenChannelNotificationOptions { channel } => {
                self.events.emit(UiEvent::OpenChannelNotifications { channel });
            }
            Action::OpenServerNotificationOptions { server } => {
                self.events.emit(UiEvent::OpenServerNotifications { server });
            }
            Action::OpenSettings => self.platform.navigate(Route::Settings),
            Action::OpenChannelSettings { id } => {
                self.platform.navigate(Route::ChannelSettings(id));
            }
            Action::OpenServerSettings { id } => {
                self.platform.navigate(Route::ServerSettings(id));
            }
            Action::OpenServerChannelSettings { server, id } => {
                self.platform.navigate(Route::ServerChannelSettings {
                    server,
                    channel: id,
                });
            }
        }
        Ok(())
    }

    /// Re-send a failed queued message with its original idempotency nonce.
    ///
    /// A rejection here does not open an error modal; the failure is
    /// retained on the queue entry where the retry affordance lives.
    async fn retry_message(&self, message: QueuedMessage) {
        self.queue.write().start(&message.nonce);

        let request = SendMessageRequest {
            nonce: message.nonce.clone(),
            content: message.content.clone(),
            replies: message.replies.clone(),
        };
        match self.backend.send_message(&message.channel, request).await {
            Ok(_) => {
                self.queue.write().remove(&message.nonce);
            }
            Err(err) => {
                warn!(%err, "message retry failed");
                self.queue.write().fail(&message.nonce, take_error(&err));
            }
        }
    }

    fn member_server(&self, member: &Member) -> Result<Server> {
        self.directory
            .server(&member.server)
            .ok_or_else(|| ClientError::not_found(format!("server {}", member.server)))
    }

    /// The viewer identity this dispatcher was wired for
    #[must_use]
    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }
}
