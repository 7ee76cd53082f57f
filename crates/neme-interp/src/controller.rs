//! The top-level mode state machine.
//!
//! One `handle_key` call fully processes one decoded key event: dispatch to
//! the active mode's handler, zero or more primitive operations against the
//! view, at most one mode change, then the prefix and escape-chord
//! bookkeeping. The caller learns whether the key should additionally fall
//! through to the view's default handling (literal insertion in Typing
//! mode).

use neme_events::{KeyCode, KeyEvent, KeyModifiers};
use neme_text::scan;
use neme_view::{CaretStyle, TextView};
use tracing::{debug, trace};

use crate::config::Options;
use crate::keymap::{self, ESCAPE_FIRST, ESCAPE_SECOND};
use crate::movement;
use crate::prefix::DigitPush;
use crate::scope::ReadWriteUndo;
use crate::state::{InterpreterState, Mode};

/// What the embedding should do with the key after the interpreter saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Fully handled; drop it.
    Consumed,
    /// Hand it to the view's default handling (see [`forward_key`]).
    Forward,
}

pub struct ModeController {
    pub(crate) state: InterpreterState,
    pub(crate) opts: Options,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(opts: Options) -> Self {
        Self {
            state: InterpreterState::new(),
            opts,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Read access for embedders (status bars and the like).
    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Apply the current mode's view side effects unconditionally. Call once
    /// when binding a freshly created view.
    pub fn sync_view<V: TextView>(&self, view: &mut V) {
        apply_mode_effects(view, self.state.mode);
    }

    /// Process one key event. Exactly one event is in flight at a time; the
    /// prefix survives only digit-extending events, and the escape-chord
    /// flag survives only its own first key.
    pub fn handle_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) -> KeyDisposition {
        trace!(target: "interp.dispatch", mode = ?self.state.mode, key = %key, "key_event");
        let mut forward = false;
        let mut clear_prefix = true;
        match self.state.mode {
            Mode::Typing => forward = self.typing_key(view, key),
            Mode::Movement => clear_prefix = self.movement_key(view, key),
            Mode::Command => self.command_key(view, key),
            Mode::ReplaceChar => self.replace_key(view, key),
            Mode::FindChar => self.find_char_key(view, key),
        }
        if self.state.escape_first_pending && key.text() != Some(ESCAPE_FIRST) {
            self.state.escape_first_pending = false;
        }
        if clear_prefix {
            self.state.prefix.clear();
        }
        if forward {
            KeyDisposition::Forward
        } else {
            KeyDisposition::Consumed
        }
    }

    /// Mode transition with its view side effects. Re-entering the current
    /// mode is a no-op and must not re-fire them.
    pub(crate) fn set_mode<V: TextView>(&mut self, view: &mut V, new_mode: Mode) {
        if new_mode == self.state.mode {
            return;
        }
        apply_mode_effects(view, new_mode);
        debug!(target: "interp.mode", from = ?self.state.mode, to = ?new_mode, "mode_change");
        self.state.mode = new_mode;
    }

    fn movement_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) -> bool {
        if key.chord_mods().is_empty()
            && let Some(digit @ '0'..='9') = key.text()
        {
            match self.state.prefix.push(digit) {
                DigitPush::Extended => return false,
                DigitPush::LeadingZero => {
                    view.home();
                    return true;
                }
            }
        }
        if let Some(cmd) = keymap::movement_command(key) {
            movement::apply(self, view, cmd);
        } else {
            trace!(target: "interp.dispatch", key = %key, "movement_key_ignored");
        }
        true
    }

    fn typing_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) -> bool {
        let mods = key.chord_mods();
        if mods.is_empty() {
            if key.code == KeyCode::Esc {
                self.set_mode(view, Mode::Movement);
                return false;
            }
            return match key.text() {
                Some(ESCAPE_FIRST) => {
                    // Typed optimistically; deleted again if the chord
                    // completes on the next key.
                    self.state.escape_first_pending = true;
                    true
                }
                Some(ESCAPE_SECOND) => {
                    if self.state.escape_first_pending {
                        view.delete_back();
                        self.set_mode(view, Mode::Movement);
                        self.state.escape_first_pending = false;
                        false
                    } else {
                        true
                    }
                }
                _ => true,
            };
        }
        if mods == KeyModifiers::CTRL {
            match key.code {
                KeyCode::Char('k') => view.page_up(),
                KeyCode::Char('j') => view.page_down(),
                _ => {}
            }
            return false;
        }
        if mods == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('k') => view.line_up(),
                KeyCode::Char('j') => view.line_down(),
                KeyCode::Char('h') => view.char_left(),
                KeyCode::Char('l') => view.char_right(),
                _ => return true,
            }
            return false;
        }
        true
    }

    fn command_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_mode(view, Mode::Movement),
            KeyCode::Enter => {
                self.execute_command(view);
                self.set_mode(view, Mode::Movement);
            }
            _ => {}
        }
    }

    fn replace_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) {
        if key.code == KeyCode::Esc {
            self.set_mode(view, Mode::Movement);
            return;
        }
        let Some(ch) = key.text() else {
            return;
        };
        let repeat = self.state.replace_repeat.max(1);
        {
            let mut g = ReadWriteUndo::new(view);
            for _ in 0..repeat {
                let (line, index) = g.cursor();
                g.set_selection(line, index, line, index + 1);
                g.delete_selection();
                g.insert_at(&ch.to_string(), line, index);
                if repeat > 1 {
                    g.set_cursor(line, index + 1);
                }
            }
        }
        self.state.replace_repeat = 1;
        self.set_mode(view, Mode::Movement);
    }

    fn find_char_key<V: TextView>(&mut self, view: &mut V, key: &KeyEvent) {
        if key.code == KeyCode::Esc {
            self.set_mode(view, Mode::Movement);
            return;
        }
        let Some(ch) = key.text() else {
            return;
        };
        self.state.find_char = Some(ch);
        scan::jump_to_char_in_line(view, ch, self.state.find_direction);
        self.set_mode(view, Mode::Movement);
    }

    /// Command-line execution is a collaborator this core only transitions
    /// around; nothing to run yet.
    fn execute_command<V: TextView>(&mut self, _view: &mut V) {
        debug!(target: "interp.command", "command_line_stub");
    }
}

fn apply_mode_effects<V: TextView>(view: &mut V, mode: Mode) {
    match mode {
        Mode::Typing => {
            view.set_caret_style(CaretStyle::Line);
            view.set_read_only(false);
        }
        Mode::Movement => {
            view.set_caret_style(CaretStyle::Block);
            view.set_read_only(true);
        }
        Mode::Command => view.set_read_only(true),
        Mode::ReplaceChar => {
            view.set_caret_style(CaretStyle::Line);
            view.set_read_only(true);
        }
        Mode::FindChar => view.set_read_only(true),
    }
}

/// The view's default handling for keys the interpreter forwards: literal
/// insertion plus the editing keys a bare widget honors.
pub fn forward_key<V: TextView>(view: &mut V, key: &KeyEvent) {
    match key.code {
        KeyCode::Enter => view.type_text("\n"),
        KeyCode::Tab => view.type_text("\t"),
        KeyCode::Backspace => view.delete_back(),
        KeyCode::Char(c) => {
            if key.text().is_some() {
                view.type_text(&c.to_string());
            }
        }
        _ => {}
    }
}
