use std::collections::VecDeque;

use log::debug;

use crate::error::{EngineError, EngineResult};

use super::Position;

/// Stack of full position snapshots for undo.
///
/// Snapshots are never modified after being pushed. With a limit set, the
/// oldest snapshot is dropped once the stack is full.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: VecDeque<Position>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Record a copy of `position`
    pub fn snapshot(&mut self, position: &Position) {
        self.push(position.clone());
    }

    /// Record an already-taken copy
    pub fn push(&mut self, snapshot: Position) {
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Restore the most recent snapshot into `position`
    pub fn undo(&mut self, position: &mut Position) -> EngineResult<()> {
        let snapshot = self.snapshots.pop_back().ok_or(EngineError::NothingToUndo)?;
        *position = snapshot;
        debug!("restored snapshot, {} left", self.snapshots.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
