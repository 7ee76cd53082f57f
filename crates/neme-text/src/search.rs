//! Buffer search with wrap-once semantics.
//!
//! Every search runs in two phases: the requested range, then exactly once
//! over the complementary range. A second miss leaves the caret untouched, so
//! a vanished target can never loop the search. Backward ranges are expressed
//! the way the view contract expects, start greater than end.

use neme_view::{Direction, SearchFlags, TextView};
use tracing::debug;

use crate::scan::word_under_cursor;

/// The remembered search: needle plus flags. The direction of the last
/// search is interpreter state, not part of this record, because repeats can
/// reverse it per keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSearch {
    pub text: String,
    pub flags: SearchFlags,
}

/// Ranged search through the view. Empty needles never match.
pub fn find_text<V: TextView + ?Sized>(
    view: &V,
    text: &str,
    start: usize,
    end: usize,
    flags: SearchFlags,
) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    view.search_range(text, start, end, flags)
}

/// Whole-word search for the word under the caret; moves the caret to the
/// hit. Returns the captured search (for the interpreter to remember) whenever
/// a word was under the caret, hit or miss.
pub fn find_word_under_cursor<V: TextView + ?Sized>(
    view: &mut V,
    direction: Direction,
) -> Option<LastSearch> {
    let word = word_under_cursor(view)?;
    let flags = SearchFlags::WHOLE_WORD;
    let len = view.text_len();
    let (start, end, wrap_start, wrap_end) = if direction == Direction::Below {
        (word.end, len, 0, word.start)
    } else {
        (word.start, 0, len, word.end)
    };
    let hit = find_text(view, &word.text, start, end, flags)
        .or_else(|| find_text(view, &word.text, wrap_start, wrap_end, flags));
    if let Some(pos) = hit {
        view.goto_pos(pos);
    }
    debug!(target: "text.search", word = %word.text, hit = hit.is_some(), "find_word_under_cursor");
    Some(LastSearch {
        text: word.text,
        flags,
    })
}

/// Re-run the remembered search from one past (or before) the caret, with the
/// same single-wraparound policy. Returns the hit offset, if any.
pub fn repeat_last_search<V: TextView + ?Sized>(
    view: &mut V,
    last: &LastSearch,
    direction: Direction,
) -> Option<usize> {
    let pos = view.current_pos();
    let len = view.text_len();
    let (start, end, wrap_start, wrap_end) = if direction == Direction::Below {
        (pos + 1, len, 0, pos + 1)
    } else {
        (pos.saturating_sub(1), 0, len, pos.saturating_sub(1))
    };
    let hit = find_text(view, &last.text, start, end, last.flags)
        .or_else(|| find_text(view, &last.text, wrap_start, wrap_end, last.flags));
    if let Some(p) = hit {
        view.goto_pos(p);
    }
    debug!(target: "text.search", needle = %last.text, hit = ?hit, "repeat_last_search");
    hit
}
