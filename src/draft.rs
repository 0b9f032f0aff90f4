use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::check_indices;
use crate::types::Token;

/// A saved token sequence, selections included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub tokens: Vec<Token>,
}

impl Draft {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parses and validates a saved draft.
    pub fn from_json(json: &str) -> Result<Self> {
        let draft: Self = serde_json::from_str(json)?;
        draft.validate()?;
        Ok(draft)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that word indices strictly increase in text order.
    pub fn validate(&self) -> Result<()> {
        check_indices(&self.tokens)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.is_selected())
            .filter_map(Token::index)
            .collect()
    }
}
