use serde::{Deserialize, Serialize};

/// One lexical unit of a practice text.
///
/// Only words can be selected. Every other kind is structural and carries
/// no index, so a selected comma or an indexed space cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// A selectable word.
    Word {
        text: String,
        /// Position among selectable tokens, assigned left to right.
        index: usize,
        selected: bool,
    },
    /// A run of punctuation or symbols.
    Punctuation { text: String },
    /// Spaces or tabs with no line break.
    Whitespace { text: String },
    /// Whitespace containing exactly one newline.
    LineBreak { text: String },
    /// Whitespace containing two or more newlines.
    ParagraphBreak { text: String },
}

impl Token {
    /// An unselected word.
    pub fn word(text: impl Into<String>, index: usize) -> Self {
        Token::Word {
            text: text.into(),
            index,
            selected: false,
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Token::Punctuation { text: text.into() }
    }

    pub fn whitespace(text: impl Into<String>) -> Self {
        Token::Whitespace { text: text.into() }
    }

    /// The literal text this token covers.
    pub fn text(&self) -> &str {
        match self {
            Token::Word { text, .. }
            | Token::Punctuation { text }
            | Token::Whitespace { text }
            | Token::LineBreak { text }
            | Token::ParagraphBreak { text } => text,
        }
    }

    /// Selection index, or `None` for tokens that cannot be selected.
    pub fn index(&self) -> Option<usize> {
        match self {
            Token::Word { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Token::Word { .. })
    }

    /// True for every token that is not an ordinary word.
    pub fn is_punctuation(&self) -> bool {
        !self.is_selectable()
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Token::Word { selected: true, .. })
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::LineBreak { .. })
    }

    pub fn is_paragraph_break(&self) -> bool {
        matches!(self, Token::ParagraphBreak { .. })
    }
}

/// Changes reported by the engine for the host to re-render.
///
/// The engine has already applied these to its own state; hosts use them
/// to update highlights without diffing the whole token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Highlight the indices spanned by the drag in progress.
    SetPreview(Vec<usize>),
    /// Drop the drag highlight.
    ClearPreview,
    /// A single word was toggled to `selected`.
    Toggle { index: usize, selected: bool },
    /// These words were marked selected by a range drag.
    Select(Vec<usize>),
}

/// What the authoring flow passes on when the user proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    pub tokens: Vec<Token>,
    /// Selected indices in text order.
    pub selected: Vec<usize>,
}

impl Handoff {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
