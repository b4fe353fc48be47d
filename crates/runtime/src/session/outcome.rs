use sortquiz_core::UserAction;

/// Lifecycle of a [`GameSession`](super::GameSession).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Active,
    Complete,
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Trace position of the step the move satisfied.
    pub step_index: usize,
    /// Points awarded for this move (bonuses excluded).
    pub points: u32,
    pub score: u32,
    pub streak: u32,
    /// True when this move exhausted the trace.
    pub completed: bool,
}

/// What the player should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub step_index: usize,
    pub action: UserAction,
    pub description: String,
}
