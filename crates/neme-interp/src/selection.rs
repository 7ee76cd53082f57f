//! Selection mode tracking and the select-then-act compound operations.
//!
//! The interpreter owns which selection mode is active and mirrors it into
//! the view's native shape. Yank and delete variants are all expressed as
//! "select, cut/copy, restore": after a yank the caret always returns to its
//! pre-operation offset; after a delete the cut itself places the caret
//! meaningfully, so nothing is restored.

use neme_view::{Direction, TextView};
use tracing::debug;

use crate::state::{InterpreterState, SelectionMode};

/// Toggle: an active selection of any mode is disabled; otherwise the
/// requested mode activates.
pub fn toggle_selection<V: TextView + ?Sized>(
    state: &mut InterpreterState,
    view: &mut V,
    mode: SelectionMode,
) {
    if state.selection_mode != SelectionMode::Disabled {
        disable_selection(state, view);
    } else {
        change_selection_mode(state, view, mode);
    }
}

/// Drop any active selection and park the caret at its start offset.
pub fn disable_selection<V: TextView + ?Sized>(state: &mut InterpreterState, view: &mut V) {
    let start = view.selection_start();
    view.clear_selections();
    view.goto_pos(start);
    state.selection_mode = SelectionMode::Disabled;
    debug!(target: "interp.select", "selection_disabled");
}

/// Switch the active selection mode, keeping the current selection anchored.
pub fn change_selection_mode<V: TextView + ?Sized>(
    state: &mut InterpreterState,
    view: &mut V,
    mode: SelectionMode,
) {
    state.selection_mode = mode;
    if let Some(shape) = mode.shape() {
        view.set_selection_shape(shape);
    }
    debug!(target: "interp.select", ?mode, "selection_mode");
}

/// Stream-select `count` whole lines from the caret line in `direction`.
pub fn select_lines<V: TextView + ?Sized>(view: &mut V, count: usize, direction: Direction) {
    let (line, _) = view.cursor();
    let last = view.line_count().saturating_sub(1);
    if direction == Direction::Below {
        let target = line + count;
        if target > last {
            view.set_selection(line, 0, last, view.line_length(last));
        } else {
            view.set_selection(line, 0, target, 0);
        }
    } else {
        view.set_selection(line, 0, line.saturating_sub(count), 0);
    }
}

/// Stream-select from the caret to the end of the caret line.
pub fn select_to_eol<V: TextView + ?Sized>(view: &mut V) {
    let (line, index) = view.cursor();
    let end = view.line_text(line).map_or(0, |t| t.chars().count());
    view.set_selection(line, index, line, end);
}

pub fn delete_lines<V: TextView + ?Sized>(view: &mut V, count: usize, direction: Direction) {
    select_lines(view, count, direction);
    view.cut();
}

pub fn delete_to_eol<V: TextView + ?Sized>(view: &mut V) {
    select_to_eol(view);
    view.cut();
}

pub fn yank_lines<V: TextView + ?Sized>(view: &mut V, count: usize, direction: Direction) {
    let pos = view.current_pos();
    select_lines(view, count, direction);
    view.copy();
    view.clear_selections();
    view.goto_pos(pos);
}

/// Yank to end of line, optionally from the line start (the whole-line copy
/// chord uses that form).
pub fn yank_to_eol<V: TextView + ?Sized>(view: &mut V, from_line_start: bool) {
    let pos = view.current_pos();
    if from_line_start {
        view.home();
    }
    select_to_eol(view);
    view.copy();
    view.clear_selections();
    view.goto_pos(pos);
}
