use word_select::{Buttons, Engine, PointerEvent, Token};

/// `The cat sat` with single spaces between words.
pub fn cat_sat() -> Vec<Token> {
    vec![
        Token::word("The", 0),
        Token::whitespace(" "),
        Token::word("cat", 1),
        Token::whitespace(" "),
        Token::word("sat", 2),
    ]
}

/// `n` words separated by spaces, with a comma after every third word.
pub fn words(n: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    for i in 0..n {
        if i > 0 {
            tokens.push(Token::whitespace(" "));
        }
        tokens.push(Token::word(format!("w{i}"), i));
        if i % 3 == 2 {
            tokens.push(Token::punctuation(","));
        }
    }
    tokens
}

pub fn down(index: usize) -> PointerEvent {
    PointerEvent::down(index)
}

pub fn enter(index: usize) -> PointerEvent {
    PointerEvent::enter(index)
}

pub fn enter_gap() -> PointerEvent {
    PointerEvent::Enter {
        index: None,
        buttons: Buttons::PRIMARY,
    }
}

pub fn up() -> PointerEvent {
    PointerEvent::Up
}

/// Press at `from`, pass over every index up to `to`, release.
pub fn drag(eng: &mut Engine, from: usize, to: usize) {
    eng.handle_event(down(from));
    if from <= to {
        for i in from + 1..=to {
            eng.handle_event(enter(i));
        }
    } else {
        for i in (to..from).rev() {
            eng.handle_event(enter(i));
        }
    }
    eng.handle_event(up());
}

pub fn click(eng: &mut Engine, index: usize) {
    eng.handle_event(down(index));
    eng.handle_event(up());
}
