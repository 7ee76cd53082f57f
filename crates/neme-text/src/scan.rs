//! WORD boundary scanning.
//!
//! Small-word motions ride on the view's own word primitives; the
//! whitespace-delimited WORD motions are computed here by stepping one
//! character at a time over `char_at`. Whitespace is exactly space, tab, CR
//! and LF. A scan that runs off the buffer start yields `None`; a forward
//! scan that meets the end sentinel after seeing whitespace lands on it (the
//! caret may legitimately rest at the very end of the buffer).

use neme_view::{Direction, TextView};

/// The scan whitespace set. Deliberately narrower than
/// `char::is_whitespace`: WORD boundaries are blanks and line breaks only.
pub(crate) const fn is_scan_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Inclusive character span of a word plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Offset of the next WORD start (`Right`) or the previous WORD end
/// (anything else), scanning from the caret. The first non-whitespace
/// character encountered after whitespace wins.
pub fn next_big_word<V: TextView + ?Sized>(view: &V, direction: Direction) -> Option<usize> {
    let forward = direction == Direction::Right;
    let mut pos = view.current_pos();
    let mut found_whitespace = false;
    if forward {
        loop {
            let ch = view.char_at(pos);
            let ws = ch.is_some_and(is_scan_whitespace);
            if found_whitespace && !ws {
                return Some(pos);
            }
            ch?;
            if !found_whitespace {
                found_whitespace = ws;
            }
            pos += 1;
        }
    } else {
        while pos != 0 {
            let ch = view.char_at(pos);
            let ws = ch.is_some_and(is_scan_whitespace);
            if found_whitespace && !ws && ch.is_some() {
                return Some(pos);
            }
            if !found_whitespace {
                found_whitespace = ws;
            }
            pos -= 1;
        }
        None
    }
}

/// Start offset of the word (or WORD, with `big`) under the caret: scans
/// backward and stops one past the first boundary character, or at 0. The
/// boundary set is whitespace, widened for small words by the view's
/// non-word characters.
pub fn word_start<V: TextView + ?Sized>(view: &V, big: bool) -> usize {
    let mut pos = view.current_pos();
    loop {
        if pos == 0 {
            return 0;
        }
        let ch = view.char_at(pos).unwrap_or('\0');
        if is_scan_whitespace(ch) || (!big && !view.is_word_char(ch)) {
            return pos + 1;
        }
        pos -= 1;
    }
}

/// End offset (inclusive) of the word under the caret: the symmetric forward
/// scan, stopping one short of the first boundary character, or at the buffer
/// end.
pub fn word_end<V: TextView + ?Sized>(view: &V, big: bool) -> usize {
    let mut pos = view.current_pos();
    let last = view.text_len();
    loop {
        if pos >= last {
            return last;
        }
        let ch = view.char_at(pos).unwrap_or('\0');
        if is_scan_whitespace(ch) || (!big && !view.is_word_char(ch)) {
            return pos.saturating_sub(1);
        }
        pos += 1;
    }
}

/// The word under the caret as an inclusive span, using the view's word
/// classification. `None` when the caret sits on whitespace, a non-word
/// character, or the buffer end.
pub fn word_under_cursor<V: TextView + ?Sized>(view: &V) -> Option<WordSpan> {
    let pos = view.current_pos();
    let ch = view.char_at(pos)?;
    if is_scan_whitespace(ch) || !view.is_word_char(ch) {
        return None;
    }
    let start = word_start(view, false);
    let mut end = word_end(view, false);
    let last = view.text_len();
    if end == last {
        end = last - 1;
    }
    let text: String = (start..=end).filter_map(|p| view.char_at(p)).collect();
    Some(WordSpan { start, end, text })
}

/// Caret to the next (`Right`) or previous occurrence of `ch` within the
/// caret line, excluding the caret column itself. No match leaves the caret
/// alone.
pub fn jump_to_char_in_line<V: TextView + ?Sized>(view: &mut V, ch: char, direction: Direction) {
    let (line, index) = view.cursor();
    let Some(text) = view.line_text(line) else {
        return;
    };
    let chars: Vec<char> = text.chars().collect();
    let hit = if direction == Direction::Right {
        chars
            .iter()
            .skip(index + 1)
            .position(|&c| c == ch)
            .map(|off| index + 1 + off)
    } else if index == 0 {
        None
    } else {
        let stop = (index - 1).min(chars.len());
        chars[..stop].iter().rposition(|&c| c == ch)
    };
    if let Some(col) = hit {
        view.set_cursor(line, col);
    }
}
