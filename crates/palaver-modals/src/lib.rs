//! # Palaver Modals
//!
//! The shared modal stack vocabulary and the confirmation-prompt engine.
//!
//! Context-menu actions that need confirmation (or a dedicated form) do not
//! perform their effect directly — they push a [`Modal`] onto the host's
//! modal stack. The ten destructive/creative confirmations are driven by
//! [`PromptModal`], a per-invocation state machine that performs exactly one
//! awaited backend call on confirm and retains its error inline on failure.

/// Modal stack entries and the sink trait
pub mod modal;

/// Confirmation prompt state machine
pub mod prompt;

pub use modal::{Modal, ModalSink, ModerationAction};
pub use prompt::{PromptModal, PromptRequest};
