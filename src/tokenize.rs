use unicode_segmentation::UnicodeSegmentation;

use crate::traits::Tokenizer;
use crate::types::Token;

/// Default tokenizer splitting on Unicode word boundaries.
///
/// Whitespace runs are merged and classified by how many newlines they
/// contain; adjacent punctuation segments are merged into one token.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Word,
    Space,
    Punct,
}

fn classify(segment: &str) -> Class {
    if segment.chars().any(char::is_alphanumeric) {
        Class::Word
    } else if segment.chars().all(char::is_whitespace) {
        Class::Space
    } else {
        Class::Punct
    }
}

fn space_token(text: &str) -> Token {
    let text = text.to_string();
    match text.matches('\n').count() {
        0 => Token::Whitespace { text },
        1 => Token::LineBreak { text },
        _ => Token::ParagraphBreak { text },
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut next_index = 0usize;
        // Byte range of the pending whitespace or punctuation run.
        let mut run: Option<(Class, usize, usize)> = None;

        let flush = |run: &mut Option<(Class, usize, usize)>, tokens: &mut Vec<Token>| {
            if let Some((class, start, end)) = run.take() {
                let slice = &text[start..end];
                tokens.push(match class {
                    Class::Space => space_token(slice),
                    _ => Token::punctuation(slice),
                });
            }
        };

        for (offset, segment) in text.split_word_bound_indices() {
            let end = offset + segment.len();
            match classify(segment) {
                Class::Word => {
                    flush(&mut run, &mut tokens);
                    tokens.push(Token::word(segment, next_index));
                    next_index += 1;
                }
                class => match run {
                    Some((current, start, _)) if current == class => {
                        run = Some((class, start, end));
                    }
                    _ => {
                        flush(&mut run, &mut tokens);
                        run = Some((class, offset, end));
                    }
                },
            }
        }
        flush(&mut run, &mut tokens);

        tokens
    }
}
