//! Detail-modal state machine shared by the gallery pages.
//!
//! Exactly one record can be open at a time. Opening while another record is
//! shown always dismisses the current viewer first, so no per-record state
//! can leak between two records.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(i64),
}

impl ModalState {
    /// Opens the viewer on `id`. An already-open viewer is dismissed first;
    /// there is no direct `Open(a) -> Open(b)` transition.
    pub fn open(&mut self, id: i64) {
        self.dismiss();
        *self = ModalState::Open(id);
    }

    pub fn dismiss(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn selected(&self) -> Option<i64> {
        match self {
            ModalState::Open(id) => Some(*id),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected().is_some()
    }

    /// Auto-closes when the selected record is no longer in the visible
    /// collection (refetch, filter change); a stale viewer must never render.
    pub fn close_if_missing<F: Fn(i64) -> bool>(&mut self, present: F) {
        if let ModalState::Open(id) = self {
            if !present(*id) {
                *self = ModalState::Closed;
            }
        }
    }
}
