//! Modal command interpreter.
//!
//! Turns a stream of decoded key events into cursor and buffer operations
//! against a `neme_view::TextView`, governed by the active editing mode and
//! an optional numeric repeat prefix. The interpreter owns all cross-cutting
//! editing state (mode, prefix, pending char-find, last search, selection
//! mode, escape-chord flag) in one [`InterpreterState`]; the view never
//! observes or mutates it.
//!
//! One key event is processed fully before the next is accepted; there is no
//! concurrency in this model, and the scoped read-write/undo brackets in
//! [`scope`] are synchronous guards, not locks.

pub mod config;
pub mod controller;
pub mod keymap;
pub mod movement;
pub mod prefix;
pub mod scope;
pub mod selection;
pub mod state;

pub use config::Options;
pub use controller::{KeyDisposition, ModeController, forward_key};
pub use prefix::{DigitPush, NumericPrefix};
pub use scope::{ReadWrite, ReadWriteUndo, UndoGroup};
pub use state::{InterpreterState, Mode, SelectionMode};
