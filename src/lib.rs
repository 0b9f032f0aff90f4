pub mod config;
pub mod draft;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod history;
pub mod pointer;
pub mod selection;
pub mod tokenize;
pub mod traits;
pub mod types;

pub use crate::config::EngineConfig;
pub use crate::draft::Draft;
pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::{Error, Result};
pub use crate::gesture::{Commit, DragGesture};
pub use crate::history::History;
pub use crate::pointer::{Buttons, PointerEvent};
pub use crate::selection::SelectionState;
pub use crate::tokenize::WordTokenizer;
pub use crate::traits::Tokenizer;
pub use crate::types::{Command, Handoff, Token};
