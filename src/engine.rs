use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::config::EngineConfig;
use crate::draft::Draft;
use crate::error::Result;
use crate::gesture::{Commit, DragGesture};
use crate::history::History;
use crate::pointer::PointerEvent;
use crate::selection::{SelectionState, check_indices};
use crate::traits::Tokenizer;
use crate::types::{Command, Handoff, Token};

/// Word selection state for one editing session, with undo and drag input.
///
/// Every mutation records the prior state first, so `undo` restores the
/// selection exactly as it was before the most recent change.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    selection: SelectionState,
    history: History<SelectionState>,
    gesture: DragGesture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub token_count: usize,
    pub selected_count: usize,
    pub history_depth: usize,
    pub drag_start: Option<usize>,
    pub preview_len: usize,
}

#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    tokens: Vec<Token>,
}

impl EngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn text<T: Tokenizer>(mut self, tokenizer: &T, text: &str) -> Self {
        self.tokens = tokenizer.tokenize(text);
        self
    }

    pub fn build(self) -> Result<Engine> {
        self.config.validate()?;
        check_indices(&self.tokens)?;
        Ok(Engine {
            config: self.config,
            selection: SelectionState::new(self.tokens),
            history: History::with_limit(self.config.history_limit.and_then(NonZeroUsize::new)),
            gesture: DragGesture::new(),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            selection: SelectionState::default(),
            history: History::new(),
            gesture: DragGesture::new(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn with_tokens(tokens: Vec<Token>) -> Result<Self> {
        let mut engine = Self::new();
        engine.load_tokens(tokens)?;
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            token_count: self.selection.tokens().len(),
            selected_count: self.selection.selected_indices().len(),
            history_depth: self.history.len(),
            drag_start: self.gesture.start_index(),
            preview_len: self.gesture.span().map_or(0, BTreeSet::len),
        }
    }

    // Loading

    /// Replaces the session's tokens. Undo history and any drag are dropped.
    /// Word indices out of order are rejected and leave the session as it was.
    pub fn load_tokens(&mut self, tokens: Vec<Token>) -> Result<()> {
        check_indices(&tokens)?;
        debug!("loading {} tokens", tokens.len());
        self.selection = SelectionState::new(tokens);
        self.history.clear();
        self.gesture.cancel();
        Ok(())
    }

    pub fn load_text<T: Tokenizer>(&mut self, tokenizer: &T, text: &str) -> Result<()> {
        self.load_tokens(tokenizer.tokenize(text))
    }

    pub fn load_draft(&mut self, draft: Draft) -> Result<()> {
        self.load_tokens(draft.tokens)
    }

    pub fn to_draft(&self) -> Draft {
        Draft::new(self.selection.tokens().to_vec())
    }

    // Queries

    pub fn tokens(&self) -> &[Token] {
        self.selection.tokens()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// Committed selections in text order. A drag in progress is not included.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.selected_indices()
    }

    /// Whether there is anything to hand off to the next step.
    pub fn can_proceed(&self) -> bool {
        self.selection.tokens().iter().any(Token::is_selected)
    }

    pub fn handoff(&self) -> Handoff {
        Handoff {
            tokens: self.selection.tokens().to_vec(),
            selected: self.selected_indices(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Words spanned by the drag in progress, for highlighting.
    pub fn preview_indices(&self) -> Vec<usize> {
        self.gesture
            .span()
            .map(|span| span.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_previewed(&self, index: usize) -> bool {
        self.gesture.span().is_some_and(|span| span.contains(&index))
    }

    // Mutations

    fn record(&mut self) {
        self.history.push(self.selection.clone());
    }

    /// Flips one word. Unknown indices change nothing but still record an
    /// undo step. Returns the new flag when the word exists.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.record();
        let result = self.selection.toggle(index);
        debug!("toggle {index} -> {result:?}");
        result
    }

    /// Sets the listed words to `value`. An empty set is not recorded.
    pub fn set_selected<I>(&mut self, indices: I, value: bool) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        if indices.is_empty() {
            return 0;
        }
        self.record();
        let changed = self.selection.set_selected(&indices, value);
        debug!(
            "set {} indices to {value}, {changed} changed",
            indices.len()
        );
        changed
    }

    /// Selects every unselected word. Returns false, recording nothing, when
    /// all words are already selected.
    pub fn select_all(&mut self) -> bool {
        let pending = self.selection.unselected_indices();
        if pending.is_empty() {
            return false;
        }
        self.record();
        self.selection.set_selected(&pending, true);
        debug!("select all: {} words", pending.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Restores the state before the most recent mutation. Returns false
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.selection = previous;
                debug!("undo, {} steps left", self.history.len());
                true
            }
            None => false,
        }
    }

    // Pointer input

    pub fn handle_event(&mut self, event: PointerEvent) -> Vec<Command> {
        match event {
            PointerEvent::Down { index, buttons } => {
                if !buttons.drags() {
                    return vec![];
                }
                let Some(index) = index else {
                    return vec![];
                };
                if self.gesture.press(&self.selection, index) {
                    vec![Command::SetPreview(self.preview_indices())]
                } else {
                    vec![]
                }
            }
            PointerEvent::Enter { index, buttons } => {
                if !self.gesture.is_dragging() {
                    return vec![];
                }
                if !buttons.drags() {
                    // The release never arrived; same handling as focus loss.
                    trace!("enter without drag button");
                    return self.lost_release();
                }
                match index {
                    Some(index) if self.gesture.hover(&self.selection, index) => {
                        vec![Command::SetPreview(self.preview_indices())]
                    }
                    _ => vec![],
                }
            }
            PointerEvent::Up => {
                if !self.gesture.is_dragging() {
                    return vec![];
                }
                let mut cmds = vec![Command::ClearPreview];
                match self.gesture.release() {
                    Some(Commit::Toggle(index)) => {
                        if let Some(selected) = self.toggle(index) {
                            cmds.push(Command::Toggle { index, selected });
                        }
                    }
                    Some(Commit::Select(span)) => {
                        let indices: Vec<usize> = span.iter().copied().collect();
                        self.set_selected(span, true);
                        cmds.push(Command::Select(indices));
                    }
                    None => {}
                }
                cmds
            }
            PointerEvent::Cancel => self.lost_release(),
        }
    }

    fn lost_release(&mut self) -> Vec<Command> {
        if self.config.release_on_focus_loss && self.gesture.cancel() {
            vec![Command::ClearPreview]
        } else {
            vec![]
        }
    }
}
