use word_select::{Engine, Token};

mod support;
use support::fixtures::{cat_sat, words};

#[test]
fn toggle_flips_one_word() {
    let mut eng = Engine::with_tokens(cat_sat()).unwrap();

    assert_eq!(eng.toggle(1), Some(true));
    assert_eq!(eng.selected_indices(), vec![1]);
    assert!(eng.is_selected(1));

    assert_eq!(eng.toggle(1), Some(false));
    assert!(eng.selected_indices().is_empty());
}

#[test]
fn toggle_unknown_index_is_silent() {
    let mut eng = Engine::with_tokens(cat_sat()).unwrap();

    assert_eq!(eng.toggle(42), None);
    assert!(eng.selected_indices().is_empty());
    // Still recorded, like any other toggle.
    assert_eq!(eng.history_len(), 1);
}

#[test]
fn set_selected_leaves_others_alone() {
    let mut eng = Engine::with_tokens(words(6)).unwrap();
    eng.toggle(0);

    let changed = eng.set_selected([2, 3, 99], true);
    assert_eq!(changed, 2);
    assert_eq!(eng.selected_indices(), vec![0, 2, 3]);

    let changed = eng.set_selected([0, 3], false);
    assert_eq!(changed, 2);
    assert_eq!(eng.selected_indices(), vec![2]);
}

#[test]
fn set_selected_with_nothing_listed_records_nothing() {
    let mut eng = Engine::with_tokens(words(3)).unwrap();

    assert_eq!(eng.set_selected(Vec::new(), true), 0);
    assert!(!eng.can_undo());
}

#[test]
fn select_all_skips_punctuation() {
    let mut eng = Engine::with_tokens(words(4)).unwrap();
    eng.toggle(1);

    assert!(eng.select_all());
    assert_eq!(eng.selected_indices(), vec![0, 1, 2, 3]);
    assert!(
        eng.tokens()
            .iter()
            .filter(|t| t.is_punctuation())
            .all(|t| !t.is_selected())
    );
}

#[test]
fn select_all_when_everything_selected_is_noop() {
    let mut eng = Engine::with_tokens(cat_sat()).unwrap();
    assert!(eng.select_all());
    let depth = eng.history_len();

    assert!(!eng.select_all());
    assert_eq!(eng.history_len(), depth);
}

#[test]
fn select_all_on_empty_sequence_is_noop() {
    let mut eng = Engine::new();
    assert!(!eng.select_all());
    assert!(!eng.can_undo());
}

#[test]
fn selected_indices_follow_text_order() {
    let mut eng = Engine::with_tokens(words(5)).unwrap();
    eng.toggle(4);
    eng.toggle(0);
    eng.toggle(2);

    assert_eq!(eng.selected_indices(), vec![0, 2, 4]);
}

#[test]
fn handoff_carries_tokens_and_selection() {
    let mut eng = Engine::with_tokens(cat_sat()).unwrap();
    assert!(!eng.can_proceed());
    assert!(eng.handoff().is_empty());

    eng.toggle(2);
    assert!(eng.can_proceed());

    let handoff = eng.handoff();
    assert_eq!(handoff.selected, vec![2]);
    assert_eq!(handoff.tokens.len(), 5);
    assert!(matches!(
        &handoff.tokens[4],
        Token::Word { text, selected: true, .. } if text == "sat"
    ));
}

#[test]
fn stale_indices_after_reload_are_ignored() {
    let mut eng = Engine::with_tokens(words(10)).unwrap();
    eng.toggle(8);

    eng.load_tokens(cat_sat()).unwrap();
    assert_eq!(eng.toggle(8), None);
    assert_eq!(eng.set_selected([7, 9], true), 0);
    assert!(eng.selected_indices().is_empty());
}
