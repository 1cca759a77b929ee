//! # Palaver Menu
//!
//! The context-menu action engine: given the entity references under the
//! user's right-click, compute the permission-gated, ordered, divider-grouped
//! list of available actions, then execute exactly one selected action
//! against the backend SDK.
//!
//! ## Flow
//!
//! ```text
//! UI event → ContextMenuRequest → resolve() → ResolvedMenu
//!                                      user selects one entry
//!                             Dispatcher::dispatch(action) → SDK / modal / event
//! ```
//!
//! Resolution is pure and re-run on every menu open (permissions and
//! relationships may have changed). Dispatch wraps every handler so any
//! backend failure surfaces as a pushed error modal.

/// The closed catalog of menu actions
pub mod action;

/// The per-invocation context-menu request
pub mod request;

/// Resolved menu structure and divider discipline
pub mod menu;

/// Pure action resolution
pub mod resolver;

/// Side-effecting action dispatch
pub mod dispatch;

pub use action::Action;
pub use dispatch::Dispatcher;
pub use menu::{Decoration, MenuBuilder, MenuEntry, MenuItem, ResolvedMenu, Tone};
pub use request::ContextMenuRequest;
pub use resolver::{resolve, resolve_status_menu, ModerationConfig};
