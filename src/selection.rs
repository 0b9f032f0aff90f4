use std::collections::BTreeSet;
use std::sync::Arc;

use log::warn;

use crate::error::{Error, Result};
use crate::types::Token;

/// Checks that word indices are unique and strictly increase in text order.
///
/// Lookups in [`SelectionState`] stop scanning as soon as they pass the
/// requested index, so a sequence that fails this check must not be loaded.
pub fn check_indices(tokens: &[Token]) -> Result<()> {
    let mut previous: Option<usize> = None;
    for (position, index) in tokens
        .iter()
        .enumerate()
        .filter_map(|(pos, t)| t.index().map(|i| (pos, i)))
    {
        if let Some(previous) = previous
            && index <= previous
        {
            warn!("tokens rejected: index {index} at token {position} follows {previous}");
            return Err(Error::IndexOrder {
                position,
                index,
                previous,
            });
        }
        previous = Some(index);
    }
    Ok(())
}

/// The token sequence of one editing session and its selected flags.
///
/// Cloning is cheap: the sequence is shared until the next mutation, which
/// copies it first. A clone taken for undo therefore never observes later
/// changes to the live state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    tokens: Arc<Vec<Token>>,
}

impl SelectionState {
    /// Wraps `tokens` without checking them; see [`check_indices`].
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        Arc::try_unwrap(self.tokens).unwrap_or_else(|shared| (*shared).clone())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.position_of(index).is_some()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.position_of(index)
            .is_some_and(|pos| self.tokens[pos].is_selected())
    }

    // Word indices increase left to right, so the scan can stop early.
    fn position_of(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .position(|t| t.index().is_some_and(|i| i >= index))
            .filter(|&pos| self.tokens[pos].index() == Some(index))
    }

    /// Flips the word at `index`. Returns its new flag, or `None` when no
    /// word has that index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let pos = self.position_of(index)?;
        match &mut Arc::make_mut(&mut self.tokens)[pos] {
            Token::Word { selected, .. } => {
                *selected = !*selected;
                Some(*selected)
            }
            _ => None,
        }
    }

    /// Sets every listed word to `value`, leaving the rest untouched.
    /// Returns how many flags actually changed.
    pub fn set_selected(&mut self, indices: &BTreeSet<usize>, value: bool) -> usize {
        if indices.is_empty() {
            return 0;
        }
        let mut changed = 0;
        for token in Arc::make_mut(&mut self.tokens).iter_mut() {
            if let Token::Word {
                index, selected, ..
            } = token
                && indices.contains(&*index)
                && *selected != value
            {
                *selected = value;
                changed += 1;
            }
        }
        changed
    }

    /// Words not yet selected, in text order.
    pub fn unselected_indices(&self) -> BTreeSet<usize> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Word {
                    index,
                    selected: false,
                    ..
                } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Every selected index in text order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.is_selected())
            .filter_map(Token::index)
            .collect()
    }

    /// Existing word indices in the inclusive range between `a` and `b`,
    /// in either order.
    pub fn indices_between(&self, a: usize, b: usize) -> BTreeSet<usize> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.tokens
            .iter()
            .filter_map(Token::index)
            .skip_while(|&i| i < lo)
            .take_while(|&i| i <= hi)
            .collect()
    }
}

impl From<Vec<Token>> for SelectionState {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
