//! Typing-mode scenarios: literal insertion, the two-key escape chord, and
//! the modifier motions that work while typing.

mod common;

use common::{backspace, enter, esc, feed, feed_chars, setup};
use neme_events::KeyEvent;
use neme_interp::Mode;
use neme_view::{CaretStyle, TextView};
use pretty_assertions::assert_eq;

#[test]
fn typing_mode_inserts_literals() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "t");
    assert_eq!(ctl.mode(), Mode::Typing);
    assert_eq!(view.caret_style(), CaretStyle::Line);
    assert!(!view.read_only());
    feed_chars(&mut ctl, &mut view, "hello");
    assert_eq!(view.text(), "hello");
}

#[test]
fn escape_key_returns_to_movement() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "tabc");
    esc(&mut ctl, &mut view);
    assert_eq!(ctl.mode(), Mode::Movement);
    assert_eq!(view.caret_style(), CaretStyle::Block);
    assert!(view.read_only());
    assert_eq!(view.text(), "abc");
}

#[test]
fn escape_chord_removes_first_char_and_returns_to_movement() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "to");
    feed_chars(&mut ctl, &mut view, "kj");
    assert_eq!(view.text(), "o", "the optimistic k is deleted again");
    assert_eq!(ctl.mode(), Mode::Movement);
    assert!(!ctl.state().escape_first_pending);
}

#[test]
fn broken_chord_keeps_both_characters() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "tkx");
    assert_eq!(view.text(), "kx");
    assert_eq!(ctl.mode(), Mode::Typing);
    assert!(!ctl.state().escape_first_pending);
    // j no longer completes anything; it is a plain insert now.
    feed_chars(&mut ctl, &mut view, "j");
    assert_eq!(view.text(), "kxj");
    assert_eq!(ctl.mode(), Mode::Typing);
}

#[test]
fn repeated_first_chord_key_stays_armed() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "tkk");
    assert_eq!(view.text(), "kk");
    feed_chars(&mut ctl, &mut view, "j");
    assert_eq!(view.text(), "k", "the second k is consumed by the chord");
    assert_eq!(ctl.mode(), Mode::Movement);
}

#[test]
fn plain_j_in_typing_inserts() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "tjar");
    assert_eq!(view.text(), "jar");
}

#[test]
fn enter_and_backspace_forward_to_the_view() {
    let (mut ctl, mut view) = setup("");
    feed_chars(&mut ctl, &mut view, "tab");
    enter(&mut ctl, &mut view);
    feed_chars(&mut ctl, &mut view, "cd");
    assert_eq!(view.text(), "ab\ncd");
    backspace(&mut ctl, &mut view);
    assert_eq!(view.text(), "ab\nc");
}

#[test]
fn modifier_motions_move_without_inserting() {
    let (mut ctl, mut view) = setup("first\nsecond");
    feed_chars(&mut ctl, &mut view, "t");
    feed(&mut ctl, &mut view, KeyEvent::alt('l'));
    feed(&mut ctl, &mut view, KeyEvent::alt('l'));
    assert_eq!(view.cursor(), (0, 2));
    feed(&mut ctl, &mut view, KeyEvent::alt('j'));
    assert_eq!(view.cursor(), (1, 2));
    feed(&mut ctl, &mut view, KeyEvent::alt('k'));
    assert_eq!(view.cursor(), (0, 2));
    feed(&mut ctl, &mut view, KeyEvent::alt('h'));
    assert_eq!(view.cursor(), (0, 1));
    assert_eq!(view.text(), "first\nsecond", "no literal insertion happened");
}

#[test]
fn ctrl_paging_works_while_typing() {
    let text = (0..40).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let (mut ctl, mut view) = setup(&text);
    feed_chars(&mut ctl, &mut view, "t");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('j'));
    assert_eq!(view.cursor(), (20, 0));
    feed(&mut ctl, &mut view, KeyEvent::ctrl('k'));
    assert_eq!(view.cursor(), (0, 0));
    assert_eq!(ctl.mode(), Mode::Typing);
}

#[test]
fn reentering_typing_mode_is_a_no_op() {
    let (mut ctl, mut view) = setup("seed");
    feed_chars(&mut ctl, &mut view, "t");
    let before = view.undo_depth();
    // A second `t` is a literal now; mode side effects must not re-fire.
    feed_chars(&mut ctl, &mut view, "t");
    assert_eq!(ctl.mode(), Mode::Typing);
    assert_eq!(view.text(), "tseed");
    assert_eq!(view.undo_depth(), before + 1, "only the insertion itself");
}
