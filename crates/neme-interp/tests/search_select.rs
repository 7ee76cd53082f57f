//! Search, selection, yank/delete and paste scenarios driven through the
//! controller.

mod common;

use common::{feed, feed_chars, setup};
use neme_events::KeyEvent;
use neme_interp::{Mode, SelectionMode};
use neme_view::TextView;
use pretty_assertions::assert_eq;

#[test]
fn star_searches_word_under_cursor_forward() {
    let (mut ctl, mut view) = setup("alpha beta alpha\nalpha tail");
    feed_chars(&mut ctl, &mut view, "*");
    assert_eq!(view.cursor(), (0, 11));
    feed_chars(&mut ctl, &mut view, "n");
    assert_eq!(view.cursor(), (1, 0));
    feed_chars(&mut ctl, &mut view, "n");
    assert_eq!(view.cursor(), (0, 0), "repeat wraps around once");
    feed_chars(&mut ctl, &mut view, "N");
    assert_eq!(view.cursor(), (1, 0), "reverse repeat goes backward with wrap");
}

#[test]
fn hash_searches_backward() {
    let (mut ctl, mut view) = setup("mid x mid x mid");
    feed_chars(&mut ctl, &mut view, "$b");
    assert_eq!(view.cursor(), (0, 12));
    feed_chars(&mut ctl, &mut view, "#");
    assert_eq!(view.cursor(), (0, 6));
    feed_chars(&mut ctl, &mut view, "n");
    assert_eq!(view.cursor(), (0, 0), "n keeps the backward direction");
}

#[test]
fn star_on_whitespace_is_a_no_op() {
    let (mut ctl, mut view) = setup("one two");
    feed_chars(&mut ctl, &mut view, "3l");
    assert_eq!(view.cursor(), (0, 3));
    feed_chars(&mut ctl, &mut view, "*");
    assert_eq!(view.cursor(), (0, 3));
}

#[test]
fn find_char_and_repeats() {
    let (mut ctl, mut view) = setup("abcabc");
    feed_chars(&mut ctl, &mut view, "fc");
    assert_eq!(view.cursor(), (0, 2));
    assert_eq!(ctl.mode(), Mode::Movement);
    feed_chars(&mut ctl, &mut view, ";");
    assert_eq!(view.cursor(), (0, 5));
    feed_chars(&mut ctl, &mut view, ",");
    assert_eq!(view.cursor(), (0, 2), "comma repeats in the opposite direction");
}

#[test]
fn find_char_backward_direction_persists() {
    let (mut ctl, mut view) = setup("xaxaxa");
    feed_chars(&mut ctl, &mut view, "$Fa");
    assert_eq!(view.cursor(), (0, 3));
    feed_chars(&mut ctl, &mut view, ";");
    assert_eq!(view.cursor(), (0, 1));
}

#[test]
fn find_char_escape_aborts() {
    let (mut ctl, mut view) = setup("abc");
    feed_chars(&mut ctl, &mut view, "f");
    assert_eq!(ctl.mode(), Mode::FindChar);
    feed(&mut ctl, &mut view, KeyEvent::key(neme_events::KeyCode::Esc));
    assert_eq!(ctl.mode(), Mode::Movement);
    assert_eq!(view.cursor(), (0, 0));
}

#[test]
fn character_selection_yank_restores_caret_to_start() {
    let (mut ctl, mut view) = setup("abcdef");
    feed_chars(&mut ctl, &mut view, "ll");
    feed_chars(&mut ctl, &mut view, "v");
    assert_eq!(ctl.state().selection_mode, SelectionMode::Character);
    feed_chars(&mut ctl, &mut view, "ll");
    feed_chars(&mut ctl, &mut view, "y");
    assert_eq!(view.clipboard(), "cd");
    assert_eq!(ctl.state().selection_mode, SelectionMode::Disabled);
    assert_eq!(view.cursor(), (0, 2), "caret back at selection start");
    assert_eq!(view.text(), "abcdef");
}

#[test]
fn toggle_selection_off_without_copy() {
    let (mut ctl, mut view) = setup("abcdef");
    feed_chars(&mut ctl, &mut view, "vll");
    feed_chars(&mut ctl, &mut view, "v");
    assert_eq!(ctl.state().selection_mode, SelectionMode::Disabled);
    assert_eq!(view.cursor(), (0, 0));
    assert_eq!(view.clipboard(), "");
}

#[test]
fn line_selection_copies_whole_lines() {
    let (mut ctl, mut view) = setup("one\ntwo\nthree");
    feed_chars(&mut ctl, &mut view, "l");
    feed_chars(&mut ctl, &mut view, "V");
    assert_eq!(ctl.state().selection_mode, SelectionMode::Line);
    feed_chars(&mut ctl, &mut view, "j");
    feed_chars(&mut ctl, &mut view, "y");
    assert_eq!(view.clipboard(), "one\ntwo\n", "line mode has whole-line granularity");
    assert_eq!(view.cursor(), (0, 1));
}

#[test]
fn ctrl_v_switches_active_selection_to_rectangle() {
    let (mut ctl, mut view) = setup("abcd\nefgh\nijkl");
    feed_chars(&mut ctl, &mut view, "lv");
    feed_chars(&mut ctl, &mut view, "jl");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('v'));
    assert_eq!(ctl.state().selection_mode, SelectionMode::Rectangular);
    feed_chars(&mut ctl, &mut view, "y");
    assert_eq!(view.clipboard(), "b\nf", "column box, one segment per line");
}

#[test]
fn ctrl_v_without_selection_pastes() {
    let (mut ctl, mut view) = setup("seed");
    feed_chars(&mut ctl, &mut view, "vlly");
    assert_eq!(view.clipboard(), "se");
    feed_chars(&mut ctl, &mut view, "$");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('v'));
    assert_eq!(view.text(), "seesed", "pasted before the last character");
}

#[test]
fn yank_lines_with_prefix_and_paste_below() {
    let (mut ctl, mut view) = setup("one\ntwo\nthree");
    feed_chars(&mut ctl, &mut view, "2y");
    assert_eq!(view.clipboard(), "one\ntwo\n");
    assert_eq!(view.cursor(), (0, 0));
    feed_chars(&mut ctl, &mut view, "P");
    assert_eq!(view.text(), "one\none\ntwo\n\ntwo\nthree");
}

#[test]
fn bare_y_is_reserved_and_does_nothing() {
    let (mut ctl, mut view) = setup("one\ntwo");
    feed_chars(&mut ctl, &mut view, "y");
    assert_eq!(view.clipboard(), "");
    assert_eq!(view.text(), "one\ntwo");
}

#[test]
fn capital_y_yanks_current_line_without_prefix() {
    let (mut ctl, mut view) = setup("one\ntwo");
    feed_chars(&mut ctl, &mut view, "jY");
    assert_eq!(view.clipboard(), "two");
    assert_eq!(view.cursor(), (1, 0));
}

#[test]
fn ctrl_c_yanks_full_line_from_start() {
    let (mut ctl, mut view) = setup("payload line\nrest");
    feed_chars(&mut ctl, &mut view, "4l");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('c'));
    assert_eq!(view.clipboard(), "payload line");
    assert_eq!(view.cursor(), (0, 4), "caret restored after the yank");
}

#[test]
fn ctrl_c_with_selection_copies_it() {
    let (mut ctl, mut view) = setup("abcdef");
    feed_chars(&mut ctl, &mut view, "vll");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('c'));
    assert_eq!(view.clipboard(), "ab");
    assert_eq!(ctl.state().selection_mode, SelectionMode::Disabled);
}

#[test]
fn delete_lines_requires_prefix() {
    let (mut ctl, mut view) = setup("a\nb\nc");
    feed_chars(&mut ctl, &mut view, "d");
    assert_eq!(view.text(), "a\nb\nc", "bare d is reserved");
    feed_chars(&mut ctl, &mut view, "2d");
    assert_eq!(view.text(), "c");
    assert!(view.read_only());
}

#[test]
fn delete_to_end_of_line() {
    let (mut ctl, mut view) = setup("hello world\nnext");
    feed_chars(&mut ctl, &mut view, "5l");
    feed_chars(&mut ctl, &mut view, "D");
    assert_eq!(view.text(), "hello\nnext");
    assert_eq!(view.clipboard(), " world");
}

#[test]
fn change_variants_enter_typing() {
    let (mut ctl, mut view) = setup("hello world\nnext");
    feed_chars(&mut ctl, &mut view, "5lC");
    assert_eq!(view.text(), "hello\nnext");
    assert_eq!(ctl.mode(), Mode::Typing);
    assert!(!view.read_only(), "typing after C must be possible");
    feed_chars(&mut ctl, &mut view, "!");
    assert_eq!(view.text(), "hello!\nnext");
}

#[test]
fn change_lines_with_prefix() {
    let (mut ctl, mut view) = setup("a\nb\nc");
    feed_chars(&mut ctl, &mut view, "1c");
    assert_eq!(view.text(), "b\nc");
    assert_eq!(ctl.mode(), Mode::Typing);
}

#[test]
fn paste_with_count_repeats() {
    let (mut ctl, mut view) = setup("xy");
    feed_chars(&mut ctl, &mut view, "vly");
    assert_eq!(view.clipboard(), "x");
    feed_chars(&mut ctl, &mut view, "2p");
    assert_eq!(view.text(), "xxxy");
}

#[test]
fn paste_on_new_line_below() {
    let (mut ctl, mut view) = setup("one\ntwo");
    feed_chars(&mut ctl, &mut view, "vlly");
    assert_eq!(view.clipboard(), "on");
    feed_chars(&mut ctl, &mut view, "P");
    assert_eq!(view.text(), "one\non\ntwo");
    assert_eq!(view.cursor(), (1, 2));
}
