//! Resolved menu structure and divider discipline
//!
//! A resolved menu is an immutable ordered list of entries. The builder
//! enforces the divider invariant at every group boundary: no leading
//! divider, no two adjacent dividers, no trailing divider.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Rendering tone of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tone {
    /// Normal entry
    #[default]
    Default,
    /// Destructive entry, rendered in the error color
    Danger,
}

/// Trailing decoration rendered after a menu item's label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decoration {
    /// Submenu chevron
    Chevron,
    /// Keyboard shortcut hint
    Shortcut(&'static str),
}

/// One selectable menu entry.
///
/// Serialize-only: labels and tooltips are `'static` keys, so a resolved
/// menu can be snapshotted but never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    /// Action dispatched when the entry is selected
    pub action: Action,
    /// Display-label key; defaults to the action's tag
    pub label: &'static str,
    /// Whether the entry is rendered but not selectable
    pub disabled: bool,
    /// Hover tooltip, shown mainly on disabled entries
    pub tooltip: Option<&'static str>,
    /// Trailing decoration
    pub decoration: Option<Decoration>,
    /// Rendering tone
    pub tone: Tone,
}

impl MenuItem {
    /// Create an enabled, default-toned entry labeled by the action's tag
    #[must_use]
    pub fn new(action: Action) -> Self {
        let label = action.tag();
        Self {
            action,
            label,
            disabled: false,
            tooltip: None,
            decoration: None,
            tone: Tone::Default,
        }
    }

    /// Override the display-label key
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Render in the destructive tone
    #[must_use]
    pub fn danger(mut self) -> Self {
        self.tone = Tone::Danger;
        self
    }

    /// Render disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attach a hover tooltip
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Attach a trailing decoration
    #[must_use]
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }
}

/// One slot of a resolved menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MenuEntry {
    /// A selectable item
    Item(MenuItem),
    /// A visual group separator
    Divider,
}

impl MenuEntry {
    /// Whether this entry is a divider
    #[must_use]
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }
}

/// The immutable output of one resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedMenu {
    entries: Vec<MenuEntry>,
}

impl ResolvedMenu {
    /// All entries in display order
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Just the selectable items, in display order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Divider => None,
        })
    }

    /// Whether the menu has no entries at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates entries group by group while upholding the divider invariant.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    entries: Vec<MenuEntry>,
}

impl MenuBuilder {
    /// Start an empty menu
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully configured item
    pub fn push(&mut self, item: MenuItem) {
        self.entries.push(MenuEntry::Item(item));
    }

    /// Append a plain item for an action, labeled by its tag
    pub fn action(&mut self, action: Action) {
        self.push(MenuItem::new(action));
    }

    /// Append a group separator.
    ///
    /// No-op when the menu is empty or the previous entry is already a
    /// divider, so callers may request one at every group boundary without
    /// tracking what earlier groups produced.
    pub fn divider(&mut self) {
        if matches!(self.entries.last(), None | Some(MenuEntry::Divider)) {
            return;
        }
        self.entries.push(MenuEntry::Divider);
    }

    /// Finish the menu, dropping any trailing divider
    #[must_use]
    pub fn finish(mut self) -> ResolvedMenu {
        if matches!(self.entries.last(), Some(MenuEntry::Divider)) {
            self.entries.pop();
        }
        ResolvedMenu {
            entries: self.entries,
        }
    }
}
