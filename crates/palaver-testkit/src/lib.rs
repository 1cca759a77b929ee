//! # Palaver Testkit
//!
//! Test doubles for every seam the action layer touches, plus factories for
//! the entity snapshots tests keep constructing:
//!
//! - [`StubClient`] — an in-memory [`Directory`], [`PermissionOracle`], and
//!   [`Backend`] in one, with scripted failures and a recorded call log
//! - [`RecordingPlatform`], [`RecordingEvents`], [`RecordingModals`] — sinks
//!   that retain everything pushed at them for later assertion
//! - [`factories`] — one-line constructors for users, channels, servers,
//!   messages, and queued entries
//!
//! Everything here is synchronous in-memory state behind `parking_lot`
//! locks, so tests stay deterministic and need no live session.
//!
//! [`Directory`]: palaver_client::Directory
//! [`PermissionOracle`]: palaver_client::PermissionOracle
//! [`Backend`]: palaver_client::Backend

/// Entity snapshot factories
pub mod factories;

/// Recording sinks for platform effects, UI events, and modal pushes
pub mod recorders;

/// In-memory stub backend with scripted failures
pub mod stub;

pub use recorders::{RecordingEvents, RecordingModals, RecordingPlatform};
pub use stub::{StubCall, StubClient};
