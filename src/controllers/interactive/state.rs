/// Whether a frame is currently being produced. Only one render runs at a
/// time; requests that arrive meanwhile are dropped, not queued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Rendering,
}

/// How the explorer handled a request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interaction {
    Applied,
    /// Dropped because a render was in progress.
    Ignored,
}

impl Interaction {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
