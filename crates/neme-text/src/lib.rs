//! Text-level engines: word/WORD boundary scanning and buffer search.
//!
//! Everything here is expressed against the `neme_view::TextView` capability
//! surface (absolute character offsets, per-line text, the view's word
//! classifier) and never mutates the buffer; search helpers move the caret on
//! a hit, nothing more.

pub mod scan;
pub mod search;

pub use scan::{WordSpan, jump_to_char_in_line, next_big_word, word_end, word_start, word_under_cursor};
pub use search::{LastSearch, find_text, find_word_under_cursor, repeat_last_search};
