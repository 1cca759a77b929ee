//! Dispatcher integration tests
//!
//! Each test wires a `Dispatcher` to a seeded `StubClient` plus recording
//! sinks, dispatches one action, and asserts on the recorded calls, events,
//! modals, and queue state.

use assert_matches::assert_matches;
use palaver_core::{
    ChannelKind, ClientError, MessageId, MessageNonce, MessageQueue, Presence, QueueStatus, UserId,
};
use palaver_client::{AppendKind, OpenTarget, Route, UiEvent};
use palaver_menu::{Action, Dispatcher};
use palaver_modals::{Modal, PromptRequest};
use palaver_testkit::{factories, RecordingEvents, RecordingModals, RecordingPlatform, StubCall, StubClient};
use parking_lot::RwLock;
use std::sync::Arc;

struct Fixture {
    client: Arc<StubClient>,
    platform: Arc<RecordingPlatform>,
    events: Arc<RecordingEvents>,
    modals: Arc<RecordingModals>,
    dispatcher: Dispatcher,
}

fn fixture(client: StubClient) -> Fixture {
    let client = Arc::new(client);
    let platform = Arc::new(RecordingPlatform::new());
    let events = Arc::new(RecordingEvents::new());
    let modals = Arc::new(RecordingModals::new());
    let dispatcher = Dispatcher::new(
        UserId::new("me"),
        client.clone(),
        client.clone(),
        platform.clone(),
        events.clone(),
        modals.clone(),
        Arc::new(RwLock::new(MessageQueue::new())),
    );
    Fixture {
        client,
        platform,
        events,
        modals,
        dispatcher,
    }
}

// ============================================================================
// Queue: retry and cancel
// ============================================================================

#[tokio::test]
async fn test_retry_resends_with_original_nonce() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let queued = factories::failed_queued("n1", &channel.id);
    let fx = fixture(StubClient::new().with_channel(channel.clone()));
    fx.dispatcher.queue().write().push(queued.clone());

    fx.dispatcher
        .dispatch(Action::RetryMessage { message: queued })
        .await;

    let calls = fx.client.calls();
    assert_matches!(
        &calls[0],
        StubCall::SendMessage(id, request)
            if *id == channel.id && request.nonce == MessageNonce::new("n1")
    );
    // Confirmed delivery removes the entry.
    assert!(fx.dispatcher.queue().read().is_empty());
    assert!(fx.modals.modals().is_empty());
}

#[tokio::test]
async fn test_retry_failure_marks_entry_failed_without_error_modal() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let queued = factories::failed_queued("n1", &channel.id);
    let fx = fixture(
        StubClient::new()
            .with_channel(channel.clone())
            .fail_next("send_message", ClientError::network("connection reset")),
    );
    fx.dispatcher.queue().write().push(queued.clone());

    fx.dispatcher
        .dispatch(Action::RetryMessage { message: queued })
        .await;

    let queue = fx.dispatcher.queue().read().clone();
    let entry = queue.get(&MessageNonce::new("n1")).unwrap();
    assert_eq!(
        entry.status,
        QueueStatus::Failed {
            error: "Network error: connection reset".to_string()
        }
    );
    // The failure lives on the queue entry, not in an error modal.
    assert!(fx.modals.modals().is_empty());
}

#[tokio::test]
async fn test_cancel_discards_without_network_call() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let queued = factories::failed_queued("n1", &channel.id);
    let fx = fixture(StubClient::new());
    fx.dispatcher.queue().write().push(queued.clone());

    fx.dispatcher
        .dispatch(Action::CancelMessage { message: queued })
        .await;

    assert!(fx.dispatcher.queue().read().is_empty());
    assert!(fx.client.calls().is_empty());
}

// ============================================================================
// Error boundary
// ============================================================================

#[tokio::test]
async fn test_backend_failure_pushes_error_modal() {
    let user = factories::user("u1");
    let fx = fixture(
        StubClient::new().fail_next("unblock_user", ClientError::permission_denied("blocked")),
    );

    fx.dispatcher.dispatch(Action::UnblockUser { user }).await;

    assert_eq!(
        fx.modals.modals(),
        [Modal::Error {
            error: "Missing permission: blocked".to_string()
        }]
    );
}

// ============================================================================
// Clipboard and platform effects
// ============================================================================

#[tokio::test]
async fn test_copy_message_link_includes_server_segment() {
    let server = factories::server("s1", &UserId::new("owner"));
    let channel = factories::server_channel("c1", &server.id);
    let message = factories::message("m1", &channel.id, &UserId::new("author"));
    let fx = fixture(StubClient::new().with_channel(channel));

    fx.dispatcher
        .dispatch(Action::CopyMessageLink { message })
        .await;

    assert_eq!(
        fx.platform.clipboard(),
        ["https://palaver.chat/server/s1/channel/c1/m1"]
    );
}

#[tokio::test]
async fn test_save_file_rewrites_to_download_url() {
    let attachment = factories::attachment("a1", palaver_core::MediaKind::File);
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::SaveFile {
            attachment: attachment.clone(),
        })
        .await;
    fx.dispatcher.dispatch(Action::OpenFile { attachment }).await;

    let opened = fx.platform.opened();
    assert_eq!(
        opened[0],
        (
            "https://cdn.palaver.chat/attachments/download/a1".to_string(),
            OpenTarget::SameTab
        )
    );
    assert_eq!(
        opened[1],
        (
            "https://cdn.palaver.chat/attachments/a1".to_string(),
            OpenTarget::NewTab
        )
    );
}

#[tokio::test]
async fn test_copy_file_link_appends_filename() {
    let attachment = factories::attachment("a1", palaver_core::MediaKind::Image);
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::CopyFileLink { attachment })
        .await;

    assert_eq!(
        fx.platform.clipboard(),
        ["https://cdn.palaver.chat/attachments/a1/a1.bin"]
    );
}

// ============================================================================
// Compose box and UI events
// ============================================================================

#[tokio::test]
async fn test_mention_appends_mention_syntax() {
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::Mention {
            user: UserId::new("u1"),
        })
        .await;

    assert_eq!(
        fx.events.events(),
        [UiEvent::ComposeAppend {
            text: "<@u1>".to_string(),
            kind: AppendKind::Mention,
        }]
    );
}

#[tokio::test]
async fn test_reply_quote_and_edit_emit_events() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let message = factories::message("m1", &channel.id, &UserId::new("me"));
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::ReplyMessage {
            target: message.clone(),
        })
        .await;
    fx.dispatcher
        .dispatch(Action::QuoteMessage {
            content: "quoted".to_string(),
        })
        .await;
    fx.dispatcher
        .dispatch(Action::EditMessage {
            id: message.id.clone(),
        })
        .await;

    assert_eq!(
        fx.events.events(),
        [
            UiEvent::ReplyTo { message },
            UiEvent::ComposeAppend {
                text: "quoted".to_string(),
                kind: AppendKind::Quote,
            },
            UiEvent::EditMessage {
                id: MessageId::new("m1")
            },
        ]
    );
}

// ============================================================================
// Read state
// ============================================================================

#[tokio::test]
async fn test_mark_unread_acks_predecessor() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let message = factories::message("m2", &channel.id, &UserId::new("author"));
    let fx = fixture(
        StubClient::new()
            .with_channel(channel.clone())
            .with_history(
                channel.id.clone(),
                vec![MessageId::new("m1"), MessageId::new("m2")],
            ),
    );

    fx.dispatcher.dispatch(Action::MarkUnread { message }).await;

    assert_eq!(
        fx.events.events(),
        [UiEvent::SetUnreadMarker {
            id: MessageId::new("m1")
        }]
    );
    assert_eq!(
        fx.client.calls(),
        [StubCall::Acknowledge(channel.id, MessageId::new("m1"))]
    );
}

#[tokio::test]
async fn test_mark_unread_oldest_message_falls_back_to_itself() {
    let channel = factories::channel("c1", ChannelKind::Group);
    let message = factories::message("m1", &channel.id, &UserId::new("author"));
    let fx = fixture(
        StubClient::new()
            .with_channel(channel.clone())
            .with_history(channel.id.clone(), vec![MessageId::new("m1")]),
    );

    fx.dispatcher.dispatch(Action::MarkUnread { message }).await;

    assert_eq!(
        fx.client.calls(),
        [StubCall::Acknowledge(channel.id, MessageId::new("m1"))]
    );
}

#[tokio::test]
async fn test_mark_as_read_acks_last_message() {
    let mut channel = factories::channel("c1", ChannelKind::Group);
    channel.last_message_id = Some(MessageId::new("m9"));
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::MarkAsRead {
            channel: channel.clone(),
        })
        .await;

    assert_eq!(
        fx.client.calls(),
        [StubCall::Acknowledge(channel.id, MessageId::new("m9"))]
    );
}

#[tokio::test]
async fn test_mark_as_read_skips_voice_and_saved() {
    let mut voice = factories::channel("v1", ChannelKind::VoiceChannel);
    voice.last_message_id = Some(MessageId::new("m1"));
    let fx = fixture(StubClient::new());

    fx.dispatcher.dispatch(Action::MarkAsRead { channel: voice }).await;
    fx.dispatcher
        .dispatch(Action::MarkAsRead {
            channel: factories::channel("notes", ChannelKind::SavedMessages),
        })
        .await;

    assert!(fx.client.calls().is_empty());
}

// ============================================================================
// Navigation and DMs
// ============================================================================

#[tokio::test]
async fn test_message_user_opens_dm_and_navigates() {
    let other = UserId::new("u1");
    let dm = factories::dm("dm1", &UserId::new("me"), &other);
    let fx = fixture(StubClient::new().with_channel(dm.clone()));

    fx.dispatcher
        .dispatch(Action::MessageUser {
            user: factories::friend("u1"),
        })
        .await;

    assert_eq!(fx.client.calls(), [StubCall::OpenDm(other)]);
    assert_eq!(fx.platform.routes(), [Route::Channel(dm.id)]);
}

#[tokio::test]
async fn test_settings_navigation() {
    let fx = fixture(StubClient::new());

    fx.dispatcher.dispatch(Action::OpenSettings).await;
    fx.dispatcher
        .dispatch(Action::OpenServerChannelSettings {
            server: palaver_core::ServerId::new("s1"),
            id: palaver_core::ChannelId::new("c1"),
        })
        .await;

    assert_eq!(
        fx.platform.routes(),
        [
            Route::Settings,
            Route::ServerChannelSettings {
                server: palaver_core::ServerId::new("s1"),
                channel: palaver_core::ChannelId::new("c1"),
            }
        ]
    );
}

// ============================================================================
// Modal delegation
// ============================================================================

#[tokio::test]
async fn test_destructive_actions_delegate_to_prompts() {
    let channel = factories::channel("g1", ChannelKind::Group);
    let message = factories::message("m1", &channel.id, &UserId::new("author"));
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::DeleteMessage {
            target: message.clone(),
        })
        .await;
    fx.dispatcher
        .dispatch(Action::LeaveGroup {
            target: channel.clone(),
        })
        .await;

    assert_eq!(
        fx.modals.modals(),
        [
            Modal::Prompt(PromptRequest::DeleteMessage { message }),
            Modal::Prompt(PromptRequest::LeaveGroup { channel }),
        ]
    );
    // Nothing touched the backend; the prompt engine owns the effect.
    assert!(fx.client.calls().is_empty());
}

#[tokio::test]
async fn test_kick_resolves_server_for_prompt() {
    let server = factories::server("s1", &UserId::new("owner"));
    let member = factories::member(&server.id, &UserId::new("u1"));
    let fx = fixture(StubClient::new().with_server(server.clone()));

    fx.dispatcher
        .dispatch(Action::KickMember { target: member })
        .await;

    assert_eq!(
        fx.modals.modals(),
        [Modal::Prompt(PromptRequest::KickMember {
            server,
            user: UserId::new("u1"),
        })]
    );
}

#[tokio::test]
async fn test_kick_with_stale_server_surfaces_error() {
    let member = factories::member(&palaver_core::ServerId::new("gone"), &UserId::new("u1"));
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::BanMember { target: member })
        .await;

    assert_matches!(&fx.modals.modals()[0], Modal::Error { error } if error.contains("gone"));
}

// ============================================================================
// Status
// ============================================================================

#[tokio::test]
async fn test_presence_and_status_actions() {
    let fx = fixture(StubClient::new());

    fx.dispatcher
        .dispatch(Action::SetPresence {
            presence: Presence::Busy,
        })
        .await;
    fx.dispatcher.dispatch(Action::ClearStatus).await;
    fx.dispatcher.dispatch(Action::SetStatus).await;

    assert_eq!(
        fx.client.calls(),
        [StubCall::SetPresence(Presence::Busy), StubCall::ClearStatus]
    );
    assert_eq!(fx.modals.modals(), [Modal::CustomStatus]);
}
