//! Engine configuration.
//!
//! An [`EngineConfig`] is handed to a position (and to the orchestrator) at
//! construction time and never changes afterwards.

/// What `move_piece` does with a move that leaves the mover's own king attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfCheckPolicy {
    /// Apply the move anyway. Only the checkmate search simulates king safety.
    #[default]
    Permit,
    /// Refuse the move with `EngineError::SelfCheck`, leaving the position unchanged.
    Reject,
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Handling of moves into check
    pub self_check: SelfCheckPolicy,
    /// Evaluate checkmate candidates on the rayon thread pool
    pub parallel_search: bool,
    /// Maximum number of undo snapshots the orchestrator keeps; `None` keeps all
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            self_check: SelfCheckPolicy::Permit,
            parallel_search: false,
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Standard rules: moving into check is refused.
    pub fn strict() -> Self {
        Self {
            self_check: SelfCheckPolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_parallel_search(mut self, parallel: bool) -> Self {
        self.parallel_search = parallel;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
