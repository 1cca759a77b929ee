//! In-memory stub backend with scripted failures
//!
//! [`StubClient`] implements all three SDK-facing traits at once so a test
//! wires a single `Arc<StubClient>` into every seam. Entities are seeded
//! through the consuming `with_*` builders; mutations are recorded as
//! [`StubCall`] values; failures are scripted per method name and consumed
//! by the first matching call.

use async_trait::async_trait;
use palaver_client::{
    Backend, CreateChannelRequest, CreatedChannelKind, Directory, PermissionOracle,
    SendMessageRequest,
};
use palaver_core::{
    Attachment, Channel, ChannelId, ChannelKind, ClientError, InviteCode, Member, Message,
    MessageId, Permission, Presence, Result, Server, ServerId, User, UserId, UserPermission,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// One recorded mutating call against the stub backend
#[derive(Debug, Clone, PartialEq)]
pub enum StubCall {
    /// `delete_channel`
    DeleteChannel(ChannelId),
    /// `delete_server`
    DeleteServer(ServerId),
    /// `delete_message`
    DeleteMessage(ChannelId, MessageId),
    /// `create_invite`
    CreateInvite(ChannelId),
    /// `create_channel`
    CreateChannel(ServerId, CreateChannelRequest),
    /// `kick_member`
    KickMember(ServerId, UserId),
    /// `ban_member`
    BanMember(ServerId, UserId, Option<String>),
    /// `set_channel_owner`
    SetChannelOwner(ChannelId, UserId),
    /// `remove_group_member`
    RemoveGroupMember(ChannelId, UserId),
    /// `send_message`
    SendMessage(ChannelId, SendMessageRequest),
    /// `open_dm`
    OpenDm(UserId),
    /// `add_friend`
    AddFriend(UserId),
    /// `remove_friend`
    RemoveFriend(UserId),
    /// `unblock_user`
    UnblockUser(UserId),
    /// `set_presence`
    SetPresence(Presence),
    /// `clear_status`
    ClearStatus,
    /// `acknowledge`
    Acknowledge(ChannelId, MessageId),
    /// `acknowledge_server`
    AcknowledgeServer(ServerId),
}

#[derive(Default)]
struct StubState {
    calls: Vec<StubCall>,
    failures: HashMap<&'static str, ClientError>,
}

/// In-memory [`Directory`] + [`PermissionOracle`] + [`Backend`].
#[derive(Default)]
pub struct StubClient {
    channels: HashMap<ChannelId, Channel>,
    servers: HashMap<ServerId, Server>,
    users: HashMap<UserId, User>,
    members: HashMap<(ServerId, UserId), Member>,
    history: HashMap<ChannelId, Vec<MessageId>>,
    channel_perms: HashMap<ChannelId, Permission>,
    server_perms: HashMap<ServerId, Permission>,
    user_perms: HashMap<UserId, UserPermission>,
    state: Mutex<StubState>,
}

impl StubClient {
    /// An empty stub: every lookup misses, every mask is empty, every
    /// mutation succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a channel
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.insert(channel.id.clone(), channel);
        self
    }

    /// Seed a server
    #[must_use]
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.insert(server.id.clone(), server);
        self
    }

    /// Seed a user
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }

    /// Seed a membership record
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members
            .insert((member.server.clone(), member.user.clone()), member);
        self
    }

    /// Seed a channel's loaded message history, oldest first
    #[must_use]
    pub fn with_history(mut self, channel: ChannelId, messages: Vec<MessageId>) -> Self {
        self.history.insert(channel, messages);
        self
    }

    /// Grant a channel-scoped permission mask
    #[must_use]
    pub fn with_channel_permissions(mut self, channel: &ChannelId, perms: Permission) -> Self {
        self.channel_perms.insert(channel.clone(), perms);
        self
    }

    /// Grant a server-scoped permission mask
    #[must_use]
    pub fn with_server_permissions(mut self, server: &ServerId, perms: Permission) -> Self {
        self.server_perms.insert(server.clone(), perms);
        self
    }

    /// Grant a relationship-scoped permission mask
    #[must_use]
    pub fn with_user_permissions(mut self, user: &UserId, perms: UserPermission) -> Self {
        self.user_perms.insert(user.clone(), perms);
        self
    }

    /// Script the next call to `method` to fail with `error`.
    ///
    /// Method names match the [`Backend`] trait (`"delete_channel"`,
    /// `"send_message"`, ...). The failure is consumed by the first call.
    #[must_use]
    pub fn fail_next(self, method: &'static str, error: ClientError) -> Self {
        self.state.lock().failures.insert(method, error);
        self
    }

    /// Every mutating call recorded so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<StubCall> {
        self.state.lock().calls.clone()
    }

    fn record(&self, call: StubCall, method: &'static str) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(call);
        match state.failures.remove(method) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Directory for StubClient {
    fn channel(&self, id: &ChannelId) -> Option<Channel> {
        self.channels.get(id).cloned()
    }

    fn server(&self, id: &ServerId) -> Option<Server> {
        self.servers.get(id).cloned()
    }

    fn user(&self, id: &UserId) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn member(&self, server: &ServerId, user: &UserId) -> Option<Member> {
        self.members.get(&(server.clone(), user.clone())).cloned()
    }

    fn message_before(&self, channel: &ChannelId, message: &MessageId) -> Option<MessageId> {
        let history = self.history.get(channel)?;
        let index = history.iter().position(|id| id == message)?;
        index.checked_sub(1).map(|i| history[i].clone())
    }

    fn attachment_url(&self, attachment: &Attachment) -> String {
        format!("https://cdn.palaver.chat/attachments/{}", attachment.id)
    }
}

impl PermissionOracle for StubClient {
    fn channel_permissions(&self, channel: &Channel) -> Permission {
        self.channel_perms
            .get(&channel.id)
            .copied()
            .unwrap_or_default()
    }

    fn server_permissions(&self, server: &Server) -> Permission {
        self.server_perms
            .get(&server.id)
            .copied()
            .unwrap_or_default()
    }

    fn user_permissions(&self, user: &User) -> UserPermission {
        self.user_perms.get(&user.id).copied().unwrap_or_default()
    }
}

#[async_trait]
impl Backend for StubClient {
    async fn delete_channel(&self, channel: &ChannelId) -> Result<()> {
        self.record(StubCall::DeleteChannel(channel.clone()), "delete_channel")
    }

    async fn delete_server(&self, server: &ServerId) -> Result<()> {
        self.record(StubCall::DeleteServer(server.clone()), "delete_server")
    }

    async fn delete_message(&self, channel: &ChannelId, message: &MessageId) -> Result<()> {
        self.record(
            StubCall::DeleteMessage(channel.clone(), message.clone()),
            "delete_message",
        )
    }

    async fn create_invite(&self, channel: &ChannelId) -> Result<InviteCode> {
        self.record(StubCall::CreateInvite(channel.clone()), "create_invite")?;
        Ok(InviteCode::new("stubinvite"))
    }

    async fn create_channel(
        &self,
        server: &ServerId,
        request: CreateChannelRequest,
    ) -> Result<Channel> {
        let name = request.name.clone();
        let kind = match request.kind {
            CreatedChannelKind::Text => ChannelKind::TextChannel,
            CreatedChannelKind::Voice => ChannelKind::VoiceChannel,
        };
        self.record(
            StubCall::CreateChannel(server.clone(), request),
            "create_channel",
        )?;
        Ok(Channel {
            id: ChannelId::new(format!("created-{name}")),
            kind,
            name: Some(name),
            server: Some(server.clone()),
            ..Default::default()
        })
    }

    async fn kick_member(&self, server: &ServerId, user: &UserId) -> Result<()> {
        self.record(
            StubCall::KickMember(server.clone(), user.clone()),
            "kick_member",
        )
    }

    async fn ban_member(
        &self,
        server: &ServerId,
        user: &UserId,
        reason: Option<String>,
    ) -> Result<()> {
        self.record(
            StubCall::BanMember(server.clone(), user.clone(), reason),
            "ban_member",
        )
    }

    async fn set_channel_owner(&self, channel: &ChannelId, user: &UserId) -> Result<()> {
        self.record(
            StubCall::SetChannelOwner(channel.clone(), user.clone()),
            "set_channel_owner",
        )
    }

    async fn remove_group_member(&self, channel: &ChannelId, user: &UserId) -> Result<()> {
        self.record(
            StubCall::RemoveGroupMember(channel.clone(), user.clone()),
            "remove_group_member",
        )
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        request: SendMessageRequest,
    ) -> Result<Message> {
        let nonce = request.nonce.clone();
        let content = request.content.clone();
        self.record(
            StubCall::SendMessage(channel.clone(), request),
            "send_message",
        )?;
        Ok(Message {
            id: MessageId::new(format!("sent-{nonce}")),
            channel: channel.clone(),
            content: Some(content),
            ..Default::default()
        })
    }

    async fn open_dm(&self, user: &UserId) -> Result<Channel> {
        self.record(StubCall::OpenDm(user.clone()), "open_dm")?;
        let existing = self.channels.values().find(|channel| {
            channel.kind == ChannelKind::DirectMessage && channel.recipients.contains(user)
        });
        Ok(existing.cloned().unwrap_or_else(|| Channel {
            id: ChannelId::new(format!("dm-{user}")),
            kind: ChannelKind::DirectMessage,
            recipients: vec![user.clone()],
            ..Default::default()
        }))
    }

    async fn add_friend(&self, user: &UserId) -> Result<()> {
        self.record(StubCall::AddFriend(user.clone()), "add_friend")
    }

    async fn remove_friend(&self, user: &UserId) -> Result<()> {
        self.record(StubCall::RemoveFriend(user.clone()), "remove_friend")
    }

    async fn unblock_user(&self, user: &UserId) -> Result<()> {
        self.record(StubCall::UnblockUser(user.clone()), "unblock_user")
    }

    async fn set_presence(&self, presence: Presence) -> Result<()> {
        self.record(StubCall::SetPresence(presence), "set_presence")
    }

    async fn clear_status(&self) -> Result<()> {
        self.record(StubCall::ClearStatus, "clear_status")
    }

    async fn acknowledge(&self, channel: &ChannelId, up_to: &MessageId) -> Result<()> {
        self.record(
            StubCall::Acknowledge(channel.clone(), up_to.clone()),
            "acknowledge",
        )
    }

    async fn acknowledge_server(&self, server: &ServerId) -> Result<()> {
        self.record(
            StubCall::AcknowledgeServer(server.clone()),
            "acknowledge_server",
        )
    }
}
