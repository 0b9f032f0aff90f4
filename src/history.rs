use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Linear undo log of full-state snapshots, oldest first.
///
/// With a limit set, pushing past it discards the oldest snapshot, so undo
/// depth is capped at `limit`.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    limit: Option<NonZeroUsize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// An unbounded history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            limit: None,
        }
    }

    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, snapshot: T) {
        if let Some(limit) = self.limit {
            while self.entries.len() >= limit.get() {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(snapshot);
    }

    /// Removes the most recent snapshot; `None` means nothing to undo.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
}
