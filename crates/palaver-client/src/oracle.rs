//! Permission bitmask computation
//!
//! Permissions can change between menu opens (role edits, relationship
//! changes), so masks are computed fresh at every resolution and never
//! cached by the action layer.

use palaver_core::{Channel, Permission, Server, User, UserPermission};

/// Computes permission bitmasks for the current viewer against an entity.
pub trait PermissionOracle: Send + Sync {
    /// Channel-scoped permissions for the viewer in `channel`
    fn channel_permissions(&self, channel: &Channel) -> Permission;

    /// Server-scoped permissions for the viewer in `server`
    fn server_permissions(&self, server: &Server) -> Permission;

    /// Relationship-scoped permissions for the viewer against `user`
    fn user_permissions(&self, user: &User) -> UserPermission;
}
