//! In-memory reference implementation of the [`TextView`] contract.
//!
//! Backed by a plain line store; favors obviousness over throughput so the
//! interpreter crates can be exercised headless. Lines are kept without their
//! terminators; absolute offsets count one character per terminator, and the
//! buffer always contains at least one (possibly empty) line, so a text that
//! ends in a newline has a trailing empty line, the same line accounting a
//! real editing widget reports.

use tracing::{debug, trace};

use crate::undo::UndoEngine;
use crate::{CaretStyle, SearchFlags, SelectionShape, TextView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Punct,
    Blank,
}

pub struct MemoryView {
    lines: Vec<String>,
    line: usize,
    index: usize,
    clipboard: String,
    read_only: bool,
    caret: CaretStyle,
    sel_anchor: Option<usize>,
    shape: SelectionShape,
    /// While true (native selection shape active), caret motion extends the
    /// selection instead of collapsing it.
    native_extend: bool,
    undo: UndoEngine,
    page_lines: usize,
    indent_width: usize,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::from_str("")
    }
}

impl MemoryView {
    pub fn from_str(text: &str) -> Self {
        let lines = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            line: 0,
            index: 0,
            clipboard: String::new(),
            read_only: false,
            caret: CaretStyle::Line,
            sel_anchor: None,
            shape: SelectionShape::Stream,
            native_extend: false,
            undo: UndoEngine::new(),
            page_lines: 20,
            indent_width: 4,
        }
    }

    /// Full buffer text with `\n` terminators.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// Lines the caret jumps per page motion (the headless stand-in for
    /// visible height).
    pub fn set_page_lines(&mut self, lines: usize) {
        self.page_lines = lines.max(1);
    }

    pub fn set_indent_width(&mut self, width: usize) {
        self.indent_width = width.max(1);
    }

    pub fn selection_shape(&self) -> SelectionShape {
        self.shape
    }

    pub fn selected_text(&self) -> String {
        let segs = self.selection_segments();
        let parts: Vec<String> = segs
            .iter()
            .map(|&(a, b)| self.text_range(a, b))
            .collect();
        if self.shape == SelectionShape::Rectangle {
            parts.join("\n")
        } else {
            parts.concat()
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }

    pub fn undo_group_depth(&self) -> u32 {
        self.undo.group_depth()
    }

    // --- geometry helpers -------------------------------------------------------------------

    fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    fn line_chars(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    fn clamp_pos(&self, line: usize, index: usize) -> (usize, usize) {
        let line = line.min(self.last_line());
        (line, index.min(self.line_chars(line)))
    }

    fn abs_of(&self, line: usize, index: usize) -> usize {
        let (line, index) = self.clamp_pos(line, index);
        let mut pos = 0;
        for l in 0..line {
            pos += self.line_chars(l) + 1;
        }
        pos + index
    }

    fn pos_of(&self, pos: usize) -> (usize, usize) {
        let mut remaining = pos;
        for (i, l) in self.lines.iter().enumerate() {
            let len = l.chars().count();
            if remaining <= len {
                return (i, remaining);
            }
            remaining -= len + 1;
        }
        (self.last_line(), self.line_chars(self.last_line()))
    }

    fn byte_at(s: &str, char_idx: usize) -> usize {
        s.char_indices().nth(char_idx).map_or(s.len(), |(b, _)| b)
    }

    fn text_range(&self, start: usize, end: usize) -> String {
        self.text()
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn class_at(&self, pos: usize) -> Option<CharClass> {
        self.char_at(pos).map(|c| {
            if c.is_whitespace() {
                CharClass::Blank
            } else if self.is_word_char(c) {
                CharClass::Word
            } else {
                CharClass::Punct
            }
        })
    }

    // --- caret helpers ----------------------------------------------------------------------

    /// Caret placement for motions: collapses the selection unless a native
    /// shape is extending it.
    fn place(&mut self, line: usize, index: usize) {
        let (line, index) = self.clamp_pos(line, index);
        self.line = line;
        self.index = index;
        if !self.native_extend {
            self.sel_anchor = None;
        }
    }

    fn place_abs(&mut self, pos: usize) {
        let (line, index) = self.pos_of(pos.min(self.text_len()));
        self.place(line, index);
    }

    // --- mutation helpers -------------------------------------------------------------------

    fn can_edit(&self) -> bool {
        if self.read_only {
            trace!(target: "view.edit", "edit_ignored_read_only");
            return false;
        }
        true
    }

    fn snapshot(&mut self) {
        self.undo.note_mutation(&self.lines, self.line, self.index);
    }

    /// Splice `text` in at an absolute position; returns the inserted
    /// character count. Caret adjustment is the caller's business.
    fn insert_abs(&mut self, pos: usize, text: &str) -> usize {
        let (line, index) = self.pos_of(pos);
        let b = Self::byte_at(&self.lines[line], index);
        let head = self.lines[line][..b].to_string();
        let tail = self.lines[line][b..].to_string();
        let mut parts: Vec<&str> = text.split('\n').collect();
        if parts.len() == 1 {
            self.lines[line] = format!("{head}{text}{tail}");
        } else {
            let last_part = parts.pop().expect("split yields at least one part");
            let first_part = parts.remove(0);
            self.lines[line] = format!("{head}{first_part}");
            let mut inserted: Vec<String> = parts.iter().map(|s| s.to_string()).collect();
            inserted.push(format!("{last_part}{tail}"));
            self.lines.splice(line + 1..line + 1, inserted);
        }
        text.chars().count()
    }

    /// Remove `[start, end)` (absolute); returns the removed text.
    fn remove_abs(&mut self, start: usize, end: usize) -> String {
        if start >= end {
            return String::new();
        }
        let (sl, si) = self.pos_of(start);
        let (el, ei) = self.pos_of(end);
        if sl == el {
            let bs = Self::byte_at(&self.lines[sl], si);
            let be = Self::byte_at(&self.lines[sl], ei);
            let removed = self.lines[sl][bs..be].to_string();
            self.lines[sl].replace_range(bs..be, "");
            removed
        } else {
            let bs = Self::byte_at(&self.lines[sl], si);
            let be = Self::byte_at(&self.lines[el], ei);
            let mut removed = self.lines[sl][bs..].to_string();
            for l in sl + 1..el {
                removed.push('\n');
                removed.push_str(&self.lines[l]);
            }
            removed.push('\n');
            removed.push_str(&self.lines[el][..be]);
            let tail = self.lines[el][be..].to_string();
            self.lines[sl].truncate(bs);
            let joined = format!("{}{}", self.lines[sl], tail);
            self.lines[sl] = joined;
            self.lines.drain(sl + 1..=el);
            removed
        }
    }

    fn delete_segments(&mut self, segments: &[(usize, usize)]) {
        for &(a, b) in segments.iter().rev() {
            self.remove_abs(a, b);
        }
        if let Some(&(first, _)) = segments.first() {
            let (line, index) = self.pos_of(first.min(self.text_len()));
            self.line = line;
            self.index = index;
        }
        self.sel_anchor = None;
    }

    /// Selected absolute ranges, ascending, honoring the active shape. Line
    /// shape covers whole lines including terminators; rectangle shape yields
    /// one (possibly empty) segment per spanned line.
    fn selection_segments(&self) -> Vec<(usize, usize)> {
        let Some(anchor) = self.sel_anchor else {
            return Vec::new();
        };
        let caret = self.current_pos();
        let (lo, hi) = (anchor.min(caret), anchor.max(caret));
        match self.shape {
            SelectionShape::Stream => {
                if lo == hi {
                    Vec::new()
                } else {
                    vec![(lo, hi)]
                }
            }
            SelectionShape::Lines => {
                let (sl, _) = self.pos_of(lo);
                let (el, _) = self.pos_of(hi);
                let start = self.abs_of(sl, 0);
                let end = if el + 1 < self.lines.len() {
                    self.abs_of(el + 1, 0)
                } else {
                    self.text_len()
                };
                vec![(start, end)]
            }
            SelectionShape::Rectangle => {
                let (sl, sc) = self.pos_of(lo);
                let (el, ec) = self.pos_of(hi);
                let (clo, chi) = (sc.min(ec), sc.max(ec));
                (sl..=el)
                    .map(|l| {
                        let len = self.line_chars(l);
                        (self.abs_of(l, clo.min(len)), self.abs_of(l, chi.min(len)))
                    })
                    .collect()
            }
        }
    }
}

impl TextView for MemoryView {
    fn cursor(&self) -> (usize, usize) {
        (self.line, self.index)
    }

    fn set_cursor(&mut self, line: usize, index: usize) {
        self.place(line, index);
    }

    fn current_pos(&self) -> usize {
        self.abs_of(self.line, self.index)
    }

    fn goto_pos(&mut self, pos: usize) {
        self.place_abs(pos);
    }

    fn goto_line(&mut self, line: usize) {
        self.place(line, 0);
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.lines.get(line).cloned()
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.lines.len() {
            return 0;
        }
        let eol = usize::from(line + 1 < self.lines.len());
        self.line_chars(line) + eol
    }

    fn text_len(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len() - 1
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        let mut remaining = pos;
        for (i, l) in self.lines.iter().enumerate() {
            let len = l.chars().count();
            if remaining < len {
                return l.chars().nth(remaining);
            }
            if remaining == len {
                return (i + 1 < self.lines.len()).then_some('\n');
            }
            remaining -= len + 1;
        }
        None
    }

    fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    fn char_left(&mut self) {
        let pos = self.current_pos();
        if pos > 0 {
            self.place_abs(pos - 1);
        }
    }

    fn char_right(&mut self) {
        self.place_abs(self.current_pos() + 1);
    }

    fn line_up(&mut self) {
        if self.line > 0 {
            self.place(self.line - 1, self.index);
        }
    }

    fn line_down(&mut self) {
        if self.line + 1 < self.lines.len() {
            self.place(self.line + 1, self.index);
        }
    }

    fn page_up(&mut self) {
        self.place(self.line.saturating_sub(self.page_lines), self.index);
    }

    fn page_down(&mut self) {
        self.place(self.line + self.page_lines, self.index);
    }

    fn home(&mut self) {
        self.place(self.line, 0);
    }

    fn vc_home(&mut self) {
        let target = self.lines[self.line]
            .chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or_else(|| self.line_chars(self.line));
        self.place(self.line, target);
    }

    fn line_end(&mut self) {
        self.place(self.line, self.line_chars(self.line));
    }

    fn word_right(&mut self) {
        let mut p = self.current_pos();
        let n = self.text_len();
        if let Some(c) = self.class_at(p)
            && c != CharClass::Blank
        {
            while p < n && self.class_at(p) == Some(c) {
                p += 1;
            }
        }
        while p < n && self.class_at(p) == Some(CharClass::Blank) {
            p += 1;
        }
        self.place_abs(p);
    }

    fn word_left(&mut self) {
        let mut p = self.current_pos();
        while p > 0 && self.class_at(p - 1) == Some(CharClass::Blank) {
            p -= 1;
        }
        if p > 0
            && let Some(c) = self.class_at(p - 1)
        {
            while p > 0 && self.class_at(p - 1) == Some(c) {
                p -= 1;
            }
        }
        self.place_abs(p);
    }

    fn word_right_end(&mut self) {
        let mut p = self.current_pos();
        let n = self.text_len();
        while p < n && self.class_at(p) == Some(CharClass::Blank) {
            p += 1;
        }
        if p < n
            && let Some(c) = self.class_at(p)
        {
            while p < n && self.class_at(p) == Some(c) {
                p += 1;
            }
        }
        self.place_abs(p);
    }

    fn word_left_end(&mut self) {
        let mut p = self.current_pos();
        if p > 0
            && let Some(c) = self.class_at(p - 1)
            && c != CharClass::Blank
        {
            while p > 0 && self.class_at(p - 1) == Some(c) {
                p -= 1;
            }
        }
        while p > 0 && self.class_at(p - 1) == Some(CharClass::Blank) {
            p -= 1;
        }
        self.place_abs(p);
    }

    fn insert_at(&mut self, text: &str, line: usize, index: usize) {
        if !self.can_edit() || text.is_empty() {
            return;
        }
        let pos = self.abs_of(line, index);
        let caret_abs = self.current_pos();
        self.snapshot();
        let n = self.insert_abs(pos, text);
        if caret_abs > pos {
            let (l, i) = self.pos_of(caret_abs + n);
            self.line = l;
            self.index = i;
        }
        if let Some(a) = self.sel_anchor
            && a > pos
        {
            self.sel_anchor = Some(a + n);
        }
    }

    fn type_text(&mut self, text: &str) {
        if !self.can_edit() || text.is_empty() {
            return;
        }
        self.snapshot();
        let segments = self.selection_segments();
        if !segments.is_empty() {
            self.delete_segments(&segments);
        }
        let pos = self.current_pos();
        let n = self.insert_abs(pos, text);
        let (l, i) = self.pos_of(pos + n);
        self.line = l;
        self.index = i;
        self.sel_anchor = None;
    }

    fn delete_back(&mut self) {
        if !self.can_edit() {
            return;
        }
        let segments = self.selection_segments();
        if !segments.is_empty() {
            self.snapshot();
            self.delete_segments(&segments);
            return;
        }
        let pos = self.current_pos();
        if pos == 0 {
            return;
        }
        self.snapshot();
        self.remove_abs(pos - 1, pos);
        let (l, i) = self.pos_of(pos - 1);
        self.line = l;
        self.index = i;
    }

    fn delete_selection(&mut self) {
        if !self.can_edit() {
            return;
        }
        let segments = self.selection_segments();
        if segments.iter().all(|&(a, b)| a == b) {
            return;
        }
        self.snapshot();
        self.delete_segments(&segments);
    }

    fn delete_line(&mut self) {
        if !self.can_edit() {
            return;
        }
        self.snapshot();
        if self.lines.len() == 1 {
            self.lines[0].clear();
            self.index = 0;
        } else {
            self.lines.remove(self.line);
            if self.line >= self.lines.len() {
                self.line = self.lines.len() - 1;
            }
            self.index = self.index.min(self.line_chars(self.line));
        }
        self.sel_anchor = None;
    }

    fn cut(&mut self) {
        if !self.can_edit() {
            return;
        }
        let segments = self.selection_segments();
        if segments.iter().all(|&(a, b)| a == b) {
            return;
        }
        self.clipboard = self.selected_text();
        self.snapshot();
        self.delete_segments(&segments);
        debug!(target: "view.edit", len = self.clipboard.len(), "cut");
    }

    fn copy(&mut self) {
        let segments = self.selection_segments();
        if segments.iter().all(|&(a, b)| a == b) {
            return;
        }
        self.clipboard = self.selected_text();
        debug!(target: "view.edit", len = self.clipboard.len(), "copy");
    }

    fn paste(&mut self) {
        if !self.can_edit() || self.clipboard.is_empty() {
            return;
        }
        self.snapshot();
        let segments = self.selection_segments();
        if !segments.is_empty() {
            self.delete_segments(&segments);
        }
        let pos = self.current_pos();
        let text = self.clipboard.clone();
        let n = self.insert_abs(pos, &text);
        let (l, i) = self.pos_of(pos + n);
        self.line = l;
        self.index = i;
        self.sel_anchor = None;
    }

    fn indent(&mut self, line: usize) {
        if line >= self.lines.len() {
            return;
        }
        let pad = " ".repeat(self.indent_width);
        self.insert_at(&pad, line, 0);
    }

    fn unindent(&mut self, line: usize) {
        if !self.can_edit() || line >= self.lines.len() {
            return;
        }
        let n = if self.lines[line].starts_with('\t') {
            1
        } else {
            self.lines[line]
                .chars()
                .take(self.indent_width)
                .take_while(|c| *c == ' ')
                .count()
        };
        if n == 0 {
            return;
        }
        let caret_abs = self.current_pos();
        self.snapshot();
        let start = self.abs_of(line, 0);
        self.remove_abs(start, start + n);
        if caret_abs >= start + n {
            let (l, i) = self.pos_of(caret_abs - n);
            self.line = l;
            self.index = i;
        } else if caret_abs > start {
            let (l, i) = self.pos_of(start);
            self.line = l;
            self.index = i;
        }
    }

    fn undo(&mut self) {
        if !self.can_edit() {
            return;
        }
        if self.undo.undo(&mut self.lines, &mut self.line, &mut self.index) {
            self.sel_anchor = None;
        }
    }

    fn redo(&mut self) {
        if !self.can_edit() {
            return;
        }
        if self.undo.redo(&mut self.lines, &mut self.line, &mut self.index) {
            self.sel_anchor = None;
        }
    }

    fn read_only(&self) -> bool {
        self.read_only
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn begin_undo_action(&mut self) {
        self.undo.begin_group();
    }

    fn end_undo_action(&mut self) {
        self.undo.end_group();
    }

    fn set_selection(&mut self, line1: usize, index1: usize, line2: usize, index2: usize) {
        self.shape = SelectionShape::Stream;
        self.native_extend = false;
        self.sel_anchor = Some(self.abs_of(line1, index1));
        let (line, index) = self.clamp_pos(line2, index2);
        self.line = line;
        self.index = index;
    }

    fn selection_start(&self) -> usize {
        match self.sel_anchor {
            Some(a) => a.min(self.current_pos()),
            None => self.current_pos(),
        }
    }

    fn has_selection(&self) -> bool {
        self.sel_anchor.is_some_and(|a| a != self.current_pos())
    }

    fn clear_selections(&mut self) {
        self.sel_anchor = None;
        self.native_extend = false;
        self.shape = SelectionShape::Stream;
    }

    fn set_selection_shape(&mut self, shape: SelectionShape) {
        self.shape = shape;
        if self.sel_anchor.is_none() {
            self.sel_anchor = Some(self.current_pos());
        }
        self.native_extend = true;
        debug!(target: "view.select", ?shape, "selection_shape");
    }

    fn search_range(
        &self,
        needle: &str,
        start: usize,
        end: usize,
        flags: SearchFlags,
    ) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let hay: Vec<char> = self.text().chars().collect();
        let pat: Vec<char> = needle.chars().collect();
        let n = hay.len();
        let (lo, hi, backward) = if start <= end {
            (start.min(n), end.min(n), false)
        } else {
            (end.min(n), start.min(n), true)
        };
        if pat.len() > hi - lo {
            return None;
        }
        let case = flags.contains(SearchFlags::MATCH_CASE);
        let whole = flags.contains(SearchFlags::WHOLE_WORD);
        let ch_eq = |a: char, b: char| {
            if case {
                a == b
            } else {
                a.to_lowercase().eq(b.to_lowercase())
            }
        };
        let hit = |i: usize| {
            let matched = (0..pat.len()).all(|k| ch_eq(hay[i + k], pat[k]));
            if !matched {
                return false;
            }
            if whole {
                if i > 0 && self.is_word_char(hay[i - 1]) {
                    return false;
                }
                let after = i + pat.len();
                if after < n && self.is_word_char(hay[after]) {
                    return false;
                }
            }
            true
        };
        let last_start = hi - pat.len();
        if backward {
            (lo..=last_start).rev().find(|&i| hit(i))
        } else {
            (lo..=last_start).find(|&i| hit(i))
        }
    }

    fn set_caret_style(&mut self, style: CaretStyle) {
        self.caret = style;
    }

    fn caret_style(&self) -> CaretStyle {
        self.caret
    }
}
