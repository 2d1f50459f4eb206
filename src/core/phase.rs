/// Activation state of a mounted cursor.
///
/// `Inactive`: nothing rendered, no pointer listeners, no frame loop.
/// `Active`: listeners attached and the smoothing loop running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Inactive,
    Active,
}

/// What the owner has to do after a phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Acquire listeners, seed positions, start the loop.
    Activate,
    /// Release listeners, cancel the frame request, remove DOM nodes.
    Deactivate,
    Stay,
}

impl Phase {
    /// Next phase for a new value of the fine-pointer capability flag.
    pub fn on_capability(self, fine_pointer: bool) -> (Phase, Transition) {
        match (self, fine_pointer) {
            (Phase::Inactive, true) => (Phase::Active, Transition::Activate),
            (Phase::Active, false) => (Phase::Inactive, Transition::Deactivate),
            (phase, _) => (phase, Transition::Stay),
        }
    }

    /// Unmount always ends `Inactive`.
    pub fn on_unmount(self) -> (Phase, Transition) {
        match self {
            Phase::Active => (Phase::Inactive, Transition::Deactivate),
            Phase::Inactive => (Phase::Inactive, Transition::Stay),
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self == Phase::Active
    }
}
