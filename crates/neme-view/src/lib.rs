//! The text-view capability contract the interpreter programs against.
//!
//! The interpreter never owns a buffer: it drives a [`TextView`] (caret,
//! mutation, selection and ranged search primitives) and leaves rendering,
//! persistence and widget concerns to the embedding. [`MemoryView`] is the
//! in-memory reference implementation used by the test suites and by any
//! embedding that wants a headless buffer.
//!
//! Offsets are absolute character offsets; a line terminator counts as one
//! character. Cursor positions are `(line, index)` pairs with `index` a
//! character column that may equal the line length (caret after the last
//! character).

pub mod memory;
pub mod undo;

pub use memory::MemoryView;
pub use undo::{UNDO_HISTORY_MAX, UndoEngine};

/// Scan/search direction. `Left`/`Right` are within-line or character-wise,
/// `Above`/`Below` are buffer-wise (search, line operations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Above,
    Below,
}

impl Direction {
    /// The logical opposite, on both axes.
    pub fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

/// Caret rendering hint mirrored by the embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretStyle {
    Block,
    Line,
}

/// Native selection behavior of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionShape {
    Stream,
    Lines,
    Rectangle,
}

bitflags::bitflags! {
    /// Flags honored by [`TextView::search_range`]. Without `MATCH_CASE` the
    /// search is case-insensitive.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SearchFlags: u8 {
        const WHOLE_WORD = 0b0000_0001;
        const MATCH_CASE = 0b0000_0010;
    }
}

/// Editing primitives exposed by the visible buffer.
///
/// Mutating calls are no-ops while the view is read-only, mirroring the way a
/// real widget swallows edits in that state. "Not found" style results are
/// `Option`s, never errors.
pub trait TextView {
    // --- caret & geometry -----------------------------------------------------------------

    /// Caret as a `(line, index)` pair.
    fn cursor(&self) -> (usize, usize);
    /// Place the caret, collapsing any selection unless a native selection
    /// shape is active (in which case the selection extends from its anchor).
    fn set_cursor(&mut self, line: usize, index: usize);
    /// Caret as an absolute character offset.
    fn current_pos(&self) -> usize;
    fn goto_pos(&mut self, pos: usize);
    /// Caret to the start of `line`, clamped to the last line.
    fn goto_line(&mut self, line: usize);
    fn line_count(&self) -> usize;
    /// Line content excluding the terminator. `None` past the last line.
    fn line_text(&self, line: usize) -> Option<String>;
    /// Character length of a line including its terminator (the last line has
    /// none).
    fn line_length(&self, line: usize) -> usize;
    fn text_len(&self) -> usize;
    /// Character at an absolute offset; `None` past the end of the buffer.
    fn char_at(&self, pos: usize) -> Option<char>;
    /// The view's word-character classification, used for word motions and
    /// whole-word search.
    fn is_word_char(&self, ch: char) -> bool;

    // --- primitive caret motion -----------------------------------------------------------

    fn char_left(&mut self);
    fn char_right(&mut self);
    fn line_up(&mut self);
    fn line_down(&mut self);
    fn page_up(&mut self);
    fn page_down(&mut self);
    /// Caret to column 0.
    fn home(&mut self);
    /// Caret to the first non-blank character of the line (line end when the
    /// line is all blanks).
    fn vc_home(&mut self);
    /// Caret after the last character of the line.
    fn line_end(&mut self);
    fn word_left(&mut self);
    fn word_right(&mut self);
    /// Caret after the last character of the current or next word.
    fn word_right_end(&mut self);
    /// Caret after the last character of the previous word.
    fn word_left_end(&mut self);

    // --- mutation ---------------------------------------------------------------------------

    /// Insert at an arbitrary position. The caret moves only when it sits
    /// strictly after the insertion point.
    fn insert_at(&mut self, text: &str, line: usize, index: usize);
    /// Default key handling: replace the selection (if any) with `text` and
    /// leave the caret after it.
    fn type_text(&mut self, text: &str);
    /// Delete the selection, or the character before the caret.
    fn delete_back(&mut self);
    /// Delete the selection without touching the clipboard.
    fn delete_selection(&mut self);
    /// Delete the caret line including its terminator.
    fn delete_line(&mut self);
    /// Move the selection to the clipboard and delete it; caret lands at the
    /// selection start.
    fn cut(&mut self);
    /// Copy the selection to the clipboard; the selection stays.
    fn copy(&mut self);
    /// Replace the selection (if any) with the clipboard; caret after the
    /// inserted text.
    fn paste(&mut self);
    fn indent(&mut self, line: usize);
    fn unindent(&mut self, line: usize);
    fn undo(&mut self);
    fn redo(&mut self);
    fn read_only(&self) -> bool;
    fn set_read_only(&mut self, read_only: bool);
    /// Open an undo group; edits until the matching [`end_undo_action`] form
    /// one undoable step. Groups nest; only balanced bracketing is legal.
    ///
    /// [`end_undo_action`]: TextView::end_undo_action
    fn begin_undo_action(&mut self);
    fn end_undo_action(&mut self);

    // --- selection --------------------------------------------------------------------------

    /// Explicit stream selection from `(line1, index1)` to `(line2, index2)`;
    /// the caret ends at the second point.
    fn set_selection(&mut self, line1: usize, index1: usize, line2: usize, index2: usize);
    /// Absolute offset of the selection start (caret position when there is
    /// no selection).
    fn selection_start(&self) -> usize;
    fn has_selection(&self) -> bool;
    fn clear_selections(&mut self);
    /// Activate a native selection shape anchored at the caret; subsequent
    /// caret motion extends the selection.
    fn set_selection_shape(&mut self, shape: SelectionShape);

    // --- search -----------------------------------------------------------------------------

    /// Search `needle` within `[start, end)`. When `start > end` the range is
    /// `[end, start)` searched backward (the match closest to `start` wins).
    /// Returns the match start offset, or `None` for an empty needle or no
    /// match fully inside the range.
    fn search_range(&self, needle: &str, start: usize, end: usize, flags: SearchFlags)
    -> Option<usize>;

    // --- presentation -----------------------------------------------------------------------

    fn set_caret_style(&mut self, style: CaretStyle);
    fn caret_style(&self) -> CaretStyle;
}
