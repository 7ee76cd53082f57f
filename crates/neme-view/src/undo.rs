//! Snapshot-based undo with group bracketing.
//!
//! Each mutation outside a group captures a pre-edit snapshot; inside a group
//! only the first mutation does, so everything bracketed by
//! `begin_group`/`end_group` collapses into a single undoable step. Snapshots
//! are whole-buffer clones: the reference backend favors obviousness over
//! memory, and the bounded stack keeps the worst case tame.

use tracing::trace;

/// Maximum number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 200;

#[derive(Clone)]
struct Snapshot {
    lines: Vec<String>,
    line: usize,
    index: usize,
}

#[derive(Default)]
pub struct UndoEngine {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    group_depth: u32,
    group_captured: bool,
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn group_depth(&self) -> u32 {
        self.group_depth
    }

    pub fn begin_group(&mut self) {
        self.group_depth += 1;
        trace!(target: "view.undo", depth = self.group_depth, "begin_group");
    }

    pub fn end_group(&mut self) {
        debug_assert!(self.group_depth > 0, "unbalanced undo group");
        self.group_depth = self.group_depth.saturating_sub(1);
        if self.group_depth == 0 {
            self.group_captured = false;
        }
        trace!(target: "view.undo", depth = self.group_depth, "end_group");
    }

    /// Record the pre-edit state. Call immediately before every buffer
    /// mutation; grouping dedupe happens here.
    pub fn note_mutation(&mut self, lines: &[String], line: usize, index: usize) {
        if self.group_depth > 0 && self.group_captured {
            return;
        }
        self.undo_stack.push(Snapshot {
            lines: lines.to_vec(),
            line,
            index,
        });
        if self.undo_stack.len() > UNDO_HISTORY_MAX {
            let _ = self.undo_stack.remove(0);
            trace!(target: "view.undo", "undo_stack_trimmed");
        }
        self.redo_stack.clear();
        self.group_captured = self.group_depth > 0;
        trace!(
            target: "view.undo",
            undo_depth = self.undo_stack.len(),
            grouped = self.group_captured,
            "push_snapshot"
        );
    }

    pub fn undo(&mut self, lines: &mut Vec<String>, line: &mut usize, index: &mut usize) -> bool {
        let Some(last) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(Snapshot {
            lines: lines.clone(),
            line: *line,
            index: *index,
        });
        *lines = last.lines;
        *line = last.line;
        *index = last.index;
        trace!(
            target: "view.undo",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo_pop"
        );
        true
    }

    pub fn redo(&mut self, lines: &mut Vec<String>, line: &mut usize, index: &mut usize) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(Snapshot {
            lines: lines.clone(),
            line: *line,
            index: *index,
        });
        *lines = next.lines;
        *line = next.line;
        *index = next.index;
        trace!(
            target: "view.undo",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo_pop"
        );
        true
    }
}
