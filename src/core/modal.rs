//! Modal dialog state

/// Class toggled on a modal backdrop while it is shown
pub const ACTIVE_CLASS: &str = "active";

/// The two dialogs on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Confirmation shown after a successful submission
    Success,
    /// Promotional popup shown shortly after load
    Advertisement,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Success, ModalKind::Advertisement];

    /// Id of the modal backdrop element
    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::Success => "successModal",
            ModalKind::Advertisement => "adModal",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.element_id() == id)
    }

    /// Whether the page behind this modal stops scrolling while it is open
    pub fn locks_scroll(self) -> bool {
        matches!(self, ModalKind::Advertisement)
    }
}

/// Active flags for both modals.
///
/// The success modal also carries an open generation so an auto-close timer
/// armed by an earlier opening does not close a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalSet {
    success: bool,
    advertisement: bool,
    success_generation: u64,
}

impl ModalSet {
    pub fn is_active(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Success => self.success,
            ModalKind::Advertisement => self.advertisement,
        }
    }

    /// Mark a modal active. Returns the generation of this opening.
    pub fn open(&mut self, kind: ModalKind) -> u64 {
        match kind {
            ModalKind::Success => {
                self.success = true;
                self.success_generation += 1;
                self.success_generation
            }
            ModalKind::Advertisement => {
                self.advertisement = true;
                0
            }
        }
    }

    pub fn close(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Success => self.success = false,
            ModalKind::Advertisement => self.advertisement = false,
        }
    }

    /// Whether an auto-close armed at `generation` still applies
    pub fn is_current_success(&self, generation: u64) -> bool {
        self.success && self.success_generation == generation
    }
}
