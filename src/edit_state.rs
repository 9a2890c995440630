//! Inline description editing state for a single card.

/// Local, per-card edit mode
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { draft: String },
}

impl EditState {
    /// Enter editing with the draft seeded from the current description.
    /// Already editing keeps the existing draft.
    pub fn begin(self, current: &str) -> Self {
        match self {
            EditState::Idle => EditState::Editing { draft: current.to_string() },
            editing => editing,
        }
    }

    pub fn set_draft(&mut self, text: String) {
        if let EditState::Editing { draft } = self {
            *draft = text;
        }
    }

    /// Leave editing, yielding the draft to commit
    pub fn commit(self) -> (Self, Option<String>) {
        match self {
            EditState::Editing { draft } => (EditState::Idle, Some(draft)),
            EditState::Idle => (EditState::Idle, None),
        }
    }

    /// Leave editing, discarding the draft
    pub fn cancel(self) -> Self {
        EditState::Idle
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft } => Some(draft),
            EditState::Idle => None,
        }
    }
}
