use crate::types::Token;

/// Turns raw text into a token sequence.
///
/// Implementations must number words 0, 1, 2, ... in left-to-right order and
/// leave every word unselected. The engine relies on that ordering for range
/// lookups and for returning selections in text order.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<Token>,
{
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self(text)
    }
}
