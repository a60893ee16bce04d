//! Modal dialogs and the background scroll lock

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalId {
    /// "Is this your property?" after a search
    Property,
    /// Leave-onboarding confirmation
    Leave,
}

pub const LEAVE_CONFIRM_TEXT: &str =
    "Are you sure you want to leave? Your progress will be saved as draft.";

/// Property returned by the search, shown in the property modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyMatch {
    pub name: String,
    pub location: String,
}

/// Open modals. Background scrolling is locked while any is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    open: BTreeSet<ModalId>,
}

impl ModalController {
    pub fn show(&mut self, id: ModalId) -> bool {
        let opened = self.open.insert(id);
        if opened {
            tracing::debug!(modal = ?id, "modal shown");
        }
        opened
    }

    pub fn hide(&mut self, id: ModalId) -> bool {
        let closed = self.open.remove(&id);
        if closed {
            tracing::debug!(modal = ?id, "modal hidden");
        }
        closed
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn scroll_locked(&self) -> bool {
        self.any_open()
    }

    pub fn open_modals(&self) -> Vec<ModalId> {
        self.open.iter().copied().collect()
    }
}
