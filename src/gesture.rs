use std::collections::BTreeSet;

use log::trace;

use crate::selection::SelectionState;

/// What a finished gesture asks the selection to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Press and release on the same word with nothing else spanned.
    Toggle(usize),
    /// A drag: mark every spanned word selected.
    Select(BTreeSet<usize>),
}

#[derive(Debug, Clone, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        start: usize,
        span: BTreeSet<usize>,
    },
}

/// Turns press / enter / release into a single selection commit.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn start_index(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging { start, .. } => Some(*start),
            DragState::Idle => None,
        }
    }

    /// Indices spanned by the drag in progress; `None` while idle.
    pub fn span(&self) -> Option<&BTreeSet<usize>> {
        match &self.state {
            DragState::Dragging { span, .. } => Some(span),
            DragState::Idle => None,
        }
    }

    /// Begins a drag at `index`. Indices missing from `selection` are
    /// ignored. Pressing again mid-drag restarts from the new index.
    pub fn press(&mut self, selection: &SelectionState, index: usize) -> bool {
        if !selection.contains(index) {
            return false;
        }
        trace!("drag start at {index}");
        self.state = DragState::Dragging {
            start: index,
            span: BTreeSet::from([index]),
        };
        true
    }

    /// Recomputes the span for the pointer now over `index`. Returns
    /// whether the span changed.
    pub fn hover(&mut self, selection: &SelectionState, index: usize) -> bool {
        let DragState::Dragging { start, span } = &mut self.state else {
            return false;
        };
        let next = selection.indices_between(*start, index);
        if next == *span {
            return false;
        }
        trace!("drag span {start}..={index} covers {} words", next.len());
        *span = next;
        true
    }

    /// Ends the gesture and decides between a click and a range select.
    pub fn release(&mut self) -> Option<Commit> {
        let DragState::Dragging { start, span } = std::mem::take(&mut self.state) else {
            return None;
        };
        if span.is_empty() {
            return None;
        }
        if span.len() == 1 && span.contains(&start) {
            Some(Commit::Toggle(start))
        } else {
            Some(Commit::Select(span))
        }
    }

    /// Abandons any drag without committing. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            trace!("drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }
}
