//! Pure action resolution
//!
//! Turns a [`ContextMenuRequest`] into the ordered, permission-gated list of
//! menu entries. Resolution is deterministic and side-effect-free; it reads
//! only through the [`Directory`] and [`PermissionOracle`] seams and is
//! re-run on every menu open, since permissions and relationships may have
//! changed since the last one.
//!
//! Each group below appends zero or more entries and may request a divider;
//! the builder's divider discipline keeps the output well-formed regardless
//! of which groups produce anything.

use crate::action::Action;
use crate::menu::{Decoration, MenuBuilder, MenuItem, ResolvedMenu};
use crate::request::ContextMenuRequest;
use palaver_client::{Directory, PermissionOracle};
use palaver_core::{
    Channel, ChannelId, ChannelKind, ConnectionState, MediaKind, Permission, Presence,
    RelationshipStatus, Server, User, UserId, UserPermission,
};
use serde::{Deserialize, Serialize};

/// Injected configuration for the operator moderation sub-group.
///
/// Moderation entries are operator tooling bolted onto the user group. They
/// appear only when the feature is enabled and the privileged moderation
/// channels actually exist in the viewer's channel list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Whether the moderation sub-group is enabled at all
    pub enabled: bool,
    /// Channel receiving termination reports
    pub report_channel: Option<ChannelId>,
    /// Channel tracking the platform blacklist
    pub blacklist_channel: Option<ChannelId>,
}

impl ModerationConfig {
    /// Configuration with the sub-group switched off
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Entities and permission masks derived from the raw request ids.
///
/// Missing lookups (deleted entity, stale id) degrade to `None` and an
/// empty mask; dependent groups are simply omitted.
struct Derived {
    channel: Option<Channel>,
    contextual_channel: Option<Channel>,
    server: Option<Server>,
    user: Option<User>,
    channel_perms: Permission,
    server_perms: Permission,
    user_perms: UserPermission,
}

impl Derived {
    fn from_request(
        request: &ContextMenuRequest,
        directory: &dyn Directory,
        oracle: &dyn PermissionOracle,
    ) -> Self {
        let channel = request
            .channel
            .as_ref()
            .and_then(|id| directory.channel(id));
        let contextual_channel = request
            .contextual_channel
            .as_ref()
            .and_then(|id| directory.channel(id));

        // The explicitly targeted channel wins as the permission target; the
        // contextual channel still drives its own groups. The unread and
        // footer channel entries follow only the explicit channel, never the
        // contextual fallback.
        let target_channel = channel.clone().or_else(|| contextual_channel.clone());

        let server_channel = target_channel
            .as_ref()
            .filter(|channel| channel.kind.is_server_channel());

        // An explicit server id is authoritative over the server channel's
        // parent when both are present.
        let server_id = request
            .server
            .clone()
            .or_else(|| server_channel.and_then(|channel| channel.server.clone()));
        let server = server_id.as_ref().and_then(|id| directory.server(id));

        let user = request.user.as_ref().and_then(|id| directory.user(id));

        let channel_perms = target_channel
            .as_ref()
            .map(|channel| oracle.channel_permissions(channel))
            .unwrap_or_default();
        let server_perms = server
            .as_ref()
            .map(|server| oracle.server_permissions(server))
            .unwrap_or_default();
        let user_perms = user
            .as_ref()
            .map(|user| oracle.user_permissions(user))
            .unwrap_or_default();

        Self {
            channel,
            contextual_channel,
            server,
            user,
            channel_perms,
            server_perms,
            user_perms,
        }
    }
}

/// Resolve the context menu for one request.
///
/// Groups are appended in a fixed priority order; see the module docs. The
/// output is stable: identical input under unchanged permissions yields an
/// identical ordered menu.
#[must_use]
pub fn resolve(
    request: &ContextMenuRequest,
    viewer: &UserId,
    directory: &dyn Directory,
    oracle: &dyn PermissionOracle,
    moderation: &ModerationConfig,
) -> ResolvedMenu {
    let mut builder = MenuBuilder::new();

    // The server-list sidebar gets a reduced menu and skips everything else.
    if let Some(server_id) = &request.server_list {
        if let Some(server) = directory.server(server_id) {
            server_list_group(&mut builder, &server, oracle);
        }
        return builder.finish();
    }

    selection_group(&mut builder, request);

    let derived = Derived::from_request(request, directory, oracle);

    unread_group(&mut builder, request, &derived);
    mention_group(&mut builder, viewer, &derived);
    user_group(&mut builder, viewer, &derived, directory, moderation);
    member_group(&mut builder, viewer, &derived, directory);

    if let Some(queued) = &request.queued {
        // Queued messages have no finalized content or attachments, so the
        // message-derived groups below do not apply.
        builder.action(Action::RetryMessage {
            message: queued.clone(),
        });
        builder.action(Action::CancelMessage {
            message: queued.clone(),
        });
    } else {
        message_group(&mut builder, request, viewer, &derived);
    }

    if let Some(attachment) = &request.attachment {
        builder.divider();
        attachment_triple(&mut builder, attachment);
    }

    footer_group(&mut builder, request, viewer, &derived, directory);

    builder.finish()
}

// ============================================================================
// Groups
// ============================================================================

fn server_list_group(builder: &mut MenuBuilder, server: &Server, oracle: &dyn PermissionOracle) {
    let perms = oracle.server_permissions(server);
    if perms.contains(Permission::MANAGE_CHANNEL) {
        builder.action(Action::CreateCategory {
            target: server.clone(),
        });
        builder.action(Action::CreateChannel {
            target: server.clone(),
        });
    }
    if perms.contains(Permission::MANAGE_SERVER) {
        builder.action(Action::OpenServerSettings {
            id: server.id.clone(),
        });
    }
}

fn selection_group(builder: &mut MenuBuilder, request: &ContextMenuRequest) {
    if let Some(text) = request.selection.as_ref().filter(|text| !text.is_empty()) {
        builder.push(
            MenuItem::new(Action::CopySelection { text: text.clone() })
                .with_decoration(Decoration::Shortcut("Ctrl+C")),
        );
        builder.divider();
    }
}

fn unread_group(builder: &mut MenuBuilder, request: &ContextMenuRequest, derived: &Derived) {
    if !request.unread {
        return;
    }
    if let Some(channel) = &derived.channel {
        builder.action(Action::MarkAsRead {
            channel: channel.clone(),
        });
    } else if let Some(server) = &derived.server {
        // Labeled identically to the channel variant.
        builder.push(
            MenuItem::new(Action::MarkServerAsRead {
                server: server.clone(),
            })
            .with_label("mark_as_read"),
        );
    }
}

fn mention_group(builder: &mut MenuBuilder, viewer: &UserId, derived: &Derived) {
    if derived.contextual_channel.is_none() {
        return;
    }
    if let Some(user) = derived.user.as_ref().filter(|user| user.id != *viewer) {
        builder.action(Action::Mention {
            user: user.id.clone(),
        });
        builder.divider();
    }
}

/// Actions derived from the viewer's relationship with the target.
///
/// Friend-request entries are suppressed against bot accounts; restricted
/// (deleted or banned) strangers only ever get the block entry.
fn relationship_actions(user: &User) -> Vec<Action> {
    let mut actions = Vec::new();
    let block = Action::BlockUser { user: user.clone() };
    match user.relationship {
        RelationshipStatus::User => {}
        RelationshipStatus::Friend => {
            if !user.bot {
                actions.push(Action::RemoveFriend { user: user.clone() });
            }
            actions.push(block);
        }
        RelationshipStatus::Incoming => {
            actions.push(Action::AddFriend { user: user.clone() });
            actions.push(Action::CancelFriend { user: user.clone() });
            actions.push(block);
        }
        RelationshipStatus::Outgoing => {
            if !user.bot {
                actions.push(Action::CancelFriend { user: user.clone() });
            }
            actions.push(block);
        }
        RelationshipStatus::Blocked => {
            actions.push(Action::UnblockUser { user: user.clone() });
        }
        RelationshipStatus::BlockedOther => {
            actions.push(block);
        }
        RelationshipStatus::None => {
            if user.is_restricted() {
                actions.push(block);
            } else {
                if !user.bot {
                    actions.push(Action::AddFriend { user: user.clone() });
                }
                actions.push(block);
            }
        }
    }
    actions
}

fn user_group(
    builder: &mut MenuBuilder,
    viewer: &UserId,
    derived: &Derived,
    directory: &dyn Directory,
    moderation: &ModerationConfig,
) {
    let Some(user) = &derived.user else {
        return;
    };

    if derived.user_perms.contains(UserPermission::VIEW_PROFILE) {
        builder.action(Action::ViewProfile { user: user.clone() });
    }

    if user.id != *viewer {
        if derived.user_perms.contains(UserPermission::SEND_MESSAGE) {
            builder.action(Action::MessageUser { user: user.clone() });
        } else {
            builder.push(
                MenuItem::new(Action::MessageUser { user: user.clone() })
                    .disabled()
                    .with_tooltip("Must be friends with this user to message them."),
            );
        }
    }

    for action in relationship_actions(user) {
        builder.action(action);
    }

    if moderation.enabled {
        moderation_subgroup(builder, user, directory, moderation);
    }
}

fn moderation_subgroup(
    builder: &mut MenuBuilder,
    user: &User,
    directory: &dyn Directory,
    moderation: &ModerationConfig,
) {
    let report_ready = moderation
        .report_channel
        .as_ref()
        .is_some_and(|id| directory.has_channel(id));
    let blacklist_ready = moderation
        .blacklist_channel
        .as_ref()
        .is_some_and(|id| directory.has_channel(id));

    if report_ready {
        builder.push(
            MenuItem::new(Action::TerminateUser { user: user.clone() })
                .with_label("Terminate")
                .danger(),
        );
    }
    if blacklist_ready {
        builder.push(
            MenuItem::new(Action::BlacklistUser { user: user.clone() })
                .with_label("Blacklist")
                .danger(),
        );
        builder.push(
            MenuItem::new(Action::UnblacklistUser { user: user.clone() })
                .with_label("Unblacklist")
                .danger(),
        );
    }
}

fn member_group(
    builder: &mut MenuBuilder,
    viewer: &UserId,
    derived: &Derived,
    directory: &dyn Directory,
) {
    // Group owner moderation.
    if let Some(channel) = derived
        .contextual_channel
        .as_ref()
        .filter(|channel| channel.kind == ChannelKind::Group)
    {
        if channel.owner.as_ref() == Some(viewer) {
            if let Some(user) = derived.user.as_ref().filter(|user| user.id != *viewer) {
                builder.push(
                    MenuItem::new(Action::MakeOwner {
                        channel: channel.clone(),
                        user: user.clone(),
                    })
                    .danger(),
                );
                builder.push(
                    MenuItem::new(Action::RemoveMember {
                        channel: channel.clone(),
                        user: user.clone(),
                    })
                    .danger(),
                );
            }
        }
    }

    // Server member moderation, gated on the combined channel and server
    // permission mask.
    let Some(server) = &derived.server else {
        return;
    };
    let Some(user) = derived
        .user
        .as_ref()
        .filter(|user| user.id != *viewer && user.id != server.owner)
    else {
        return;
    };
    let Some(member) = directory.member(&server.id, &user.id) else {
        return;
    };

    let combined = derived.channel_perms | derived.server_perms;
    if combined.contains(Permission::KICK_MEMBERS) {
        builder.push(
            MenuItem::new(Action::KickMember {
                target: member.clone(),
            })
            .danger(),
        );
    }
    if combined.contains(Permission::BAN_MEMBERS) {
        builder.push(MenuItem::new(Action::BanMember { target: member }).danger());
    }
}

fn message_group(
    builder: &mut MenuBuilder,
    request: &ContextMenuRequest,
    viewer: &UserId,
    derived: &Derived,
) {
    let Some(message) = &request.message else {
        return;
    };

    if derived.channel_perms.contains(Permission::SEND_MESSAGE) {
        builder.action(Action::ReplyMessage {
            target: message.clone(),
        });
    }
    builder.action(Action::MarkUnread {
        message: message.clone(),
    });

    if let Some(text) = message.text() {
        if derived.channel_perms.contains(Permission::SEND_MESSAGE) {
            builder.action(Action::QuoteMessage {
                content: text.to_string(),
            });
        }
        builder.action(Action::CopyText {
            content: text.to_string(),
        });
    }

    if message.author == *viewer {
        builder.action(Action::EditMessage {
            id: message.id.clone(),
        });
    }
    if message.author == *viewer || derived.channel_perms.contains(Permission::MANAGE_MESSAGES) {
        builder.push(
            MenuItem::new(Action::DeleteMessage {
                target: message.clone(),
            })
            .danger(),
        );
    }

    // Multi-attachment messages require targeting the attachment itself.
    if let [attachment] = message.attachments.as_slice() {
        builder.divider();
        attachment_triple(builder, attachment);
    }

    if let Some(link) = &request.active_link {
        builder.divider();
        builder.action(Action::OpenLink { link: link.clone() });
        builder.action(Action::CopyLink { link: link.clone() });
    }
}

fn attachment_triple(builder: &mut MenuBuilder, attachment: &palaver_core::Attachment) {
    let (open_label, save_label) = match attachment.metadata {
        MediaKind::Image => ("open_image", "save_image"),
        MediaKind::Video => ("open_video", "save_video"),
        MediaKind::File => ("open_file", "save_file"),
    };
    builder.push(
        MenuItem::new(Action::OpenFile {
            attachment: attachment.clone(),
        })
        .with_label(open_label),
    );
    builder.push(
        MenuItem::new(Action::SaveFile {
            attachment: attachment.clone(),
        })
        .with_label(save_label),
    );
    builder.action(Action::CopyFileLink {
        attachment: attachment.clone(),
    });
}

fn footer_group(
    builder: &mut MenuBuilder,
    request: &ContextMenuRequest,
    viewer: &UserId,
    derived: &Derived,
    directory: &dyn Directory,
) {
    if !request.has_identity() {
        return;
    }
    builder.divider();

    if let Some(channel) = &derived.channel {
        if channel.kind != ChannelKind::VoiceChannel {
            builder.push(
                MenuItem::new(Action::OpenChannelNotificationOptions {
                    channel: channel.clone(),
                })
                .with_label("notification_options")
                .with_decoration(Decoration::Chevron),
            );
        }
        channel_footer(builder, channel, derived);
    }

    if request.server.is_some() {
        if let Some(server) = &derived.server {
            server_footer(builder, server, viewer, derived, directory);
        }
    }

    if let Some(message) = &request.message {
        builder.action(Action::CopyMessageLink {
            message: message.clone(),
        });
    }

    copy_id_entry(builder, request);
}

fn channel_footer(builder: &mut MenuBuilder, channel: &Channel, derived: &Derived) {
    match channel.kind {
        ChannelKind::Group => {
            builder.push(
                MenuItem::new(Action::OpenChannelSettings {
                    id: channel.id.clone(),
                })
                .with_label("open_group_settings"),
            );
            builder.action(Action::LeaveGroup {
                target: channel.clone(),
            });
        }
        ChannelKind::DirectMessage => {
            builder.action(Action::CloseDm {
                target: channel.clone(),
            });
        }
        ChannelKind::TextChannel | ChannelKind::VoiceChannel => {
            if derived.channel_perms.contains(Permission::INVITE_OTHERS) {
                builder.action(Action::CreateInvite {
                    target: channel.clone(),
                });
            }
            if derived.server_perms.contains(Permission::MANAGE_SERVER) {
                if let Some(server) = &channel.server {
                    builder.push(
                        MenuItem::new(Action::OpenServerChannelSettings {
                            server: server.clone(),
                            id: channel.id.clone(),
                        })
                        .with_label("open_channel_settings"),
                    );
                }
            }
            if derived.channel_perms.contains(Permission::MANAGE_CHANNEL) {
                builder.push(
                    MenuItem::new(Action::DeleteChannel {
                        target: channel.clone(),
                    })
                    .danger(),
                );
            }
        }
        ChannelKind::SavedMessages => {}
    }
}

fn server_footer(
    builder: &mut MenuBuilder,
    server: &Server,
    viewer: &UserId,
    derived: &Derived,
    directory: &dyn Directory,
) {
    builder.push(
        MenuItem::new(Action::OpenServerNotificationOptions {
            server: server.clone(),
        })
        .with_label("notification_options")
        .with_decoration(Decoration::Chevron),
    );

    if let Some(channel) = server
        .first_channel()
        .and_then(|id| directory.channel(id))
    {
        builder.action(Action::CreateInvite { target: channel });
    }

    if derived
        .server_perms
        .intersects(Permission::CHANGE_NICKNAME | Permission::CHANGE_AVATAR)
    {
        if let Some(member) = directory.member(&server.id, viewer) {
            builder.action(Action::EditIdentity { target: member });
        }
    }

    if derived.server_perms.contains(Permission::MANAGE_SERVER) {
        builder.action(Action::OpenServerSettings {
            id: server.id.clone(),
        });
    }

    // Exactly one of delete or leave, by ownership.
    if server.owner == *viewer {
        builder.push(
            MenuItem::new(Action::DeleteServer {
                target: server.clone(),
            })
            .danger(),
        );
    } else {
        builder.push(
            MenuItem::new(Action::LeaveServer {
                target: server.clone(),
            })
            .danger(),
        );
    }
}

fn copy_id_entry(builder: &mut MenuBuilder, request: &ContextMenuRequest) {
    // The copied value prefers user over message while the label checks
    // message before user. Both precedences are load-bearing UI behavior.
    let id = request
        .server
        .as_ref()
        .map(|id| id.to_string())
        .or_else(|| request.channel.as_ref().map(|id| id.to_string()))
        .or_else(|| request.user.as_ref().map(|id| id.to_string()))
        .or_else(|| request.message.as_ref().map(|m| m.id.to_string()));
    let Some(id) = id else {
        return;
    };

    let label = if request.server.is_some() {
        "copy_sid"
    } else if request.channel.is_some() {
        "copy_cid"
    } else if request.message.is_some() {
        "copy_mid"
    } else {
        "copy_uid"
    };

    builder.push(MenuItem::new(Action::CopyId { id }).with_label(label));
}

// ============================================================================
// Status menu
// ============================================================================

/// Resolve the viewer's own status menu.
///
/// Presence entries and the custom-status entry stay visible while
/// disconnected but are disabled until the session is back online.
#[must_use]
pub fn resolve_status_menu(viewer: &User, connection: ConnectionState) -> ResolvedMenu {
    let mut builder = MenuBuilder::new();
    let offline = !connection.is_online();

    builder.action(Action::OpenSettings);
    builder.divider();

    for presence in Presence::ALL {
        let mut item = MenuItem::new(Action::SetPresence { presence }).with_label(presence.label());
        if offline {
            item = item.disabled();
        }
        builder.push(item);
    }
    builder.divider();

    let mut status = MenuItem::new(Action::SetStatus).with_label("custom_status");
    if offline {
        status = status.disabled();
    }
    builder.push(status);

    // The clear entry stays usable regardless of connection state.
    if viewer.status_text.is_some() {
        builder.action(Action::ClearStatus);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_table_bot_suppression() {
        let mut user = User {
            relationship: RelationshipStatus::Friend,
            ..Default::default()
        };
        let tags: Vec<_> = relationship_actions(&user)
            .iter()
            .map(Action::tag)
            .collect();
        assert_eq!(tags, ["remove_friend", "block_user"]);

        user.bot = true;
        let tags: Vec<_> = relationship_actions(&user)
            .iter()
            .map(Action::tag)
            .collect();
        assert_eq!(tags, ["block_user"]);
    }

    #[test]
    fn test_restricted_stranger_only_gets_block() {
        let user = User {
            relationship: RelationshipStatus::None,
            flags: palaver_core::UserFlags::BANNED,
            ..Default::default()
        };
        let tags: Vec<_> = relationship_actions(&user)
            .iter()
            .map(Action::tag)
            .collect();
        assert_eq!(tags, ["block_user"]);
    }

    #[test]
    fn test_self_gets_no_relationship_actions() {
        let user = User {
            relationship: RelationshipStatus::User,
            ..Default::default()
        };
        assert!(relationship_actions(&user).is_empty());
    }

    #[test]
    fn test_status_menu_disabled_while_offline() {
        let viewer = User {
            status_text: Some("afk".into()),
            ..Default::default()
        };
        let menu = resolve_status_menu(&viewer, ConnectionState::Offline);
        let disabled: Vec<_> = menu
            .items()
            .filter(|item| item.disabled)
            .map(|item| item.label)
            .collect();
        assert_eq!(
            disabled,
            ["online", "idle", "focus", "busy", "invisible", "custom_status"]
        );
        let clear = menu
            .items()
            .find(|item| item.label == "clear_status")
            .unwrap();
        assert!(!clear.disabled);

        let menu = resolve_status_menu(&viewer, ConnectionState::Online);
        assert!(menu.items().all(|item| !item.disabled));
    }

    #[test]
    fn test_status_menu_omits_clear_without_status_text() {
        let viewer = User::default();
        let menu = resolve_status_menu(&viewer, ConnectionState::Online);
        assert!(menu.items().all(|item| item.label != "clear_status"));
    }
}
