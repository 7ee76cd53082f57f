#![allow(dead_code)] // Shared across the integration test binaries; each uses a subset.

use neme_events::{KeyCode, KeyEvent};
use neme_interp::{KeyDisposition, ModeController, Options, forward_key};
use neme_view::MemoryView;

/// One-time tracing init so failing scenarios can be rerun with
/// `RUST_LOG=trace` for the full dispatch trail.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Controller plus a configured headless view, Movement mode installed.
pub fn setup(text: &str) -> (ModeController, MemoryView) {
    init_tracing();
    let opts = Options::default();
    let mut view = MemoryView::from_str(text);
    view.set_page_lines(opts.page_lines);
    view.set_indent_width(opts.indent_width);
    let ctl = ModeController::with_options(opts);
    ctl.sync_view(&mut view);
    (ctl, view)
}

/// Drive one key through the interpreter, honoring the forward disposition
/// the way an embedding widget would.
pub fn feed(ctl: &mut ModeController, view: &mut MemoryView, key: KeyEvent) {
    if ctl.handle_key(view, &key) == KeyDisposition::Forward {
        forward_key(view, &key);
    }
}

pub fn feed_chars(ctl: &mut ModeController, view: &mut MemoryView, keys: &str) {
    for c in keys.chars() {
        feed(ctl, view, KeyEvent::char(c));
    }
}

pub fn esc(ctl: &mut ModeController, view: &mut MemoryView) {
    feed(ctl, view, KeyEvent::key(KeyCode::Esc));
}

pub fn enter(ctl: &mut ModeController, view: &mut MemoryView) {
    feed(ctl, view, KeyEvent::key(KeyCode::Enter));
}

pub fn backspace(ctl: &mut ModeController, view: &mut MemoryView) {
    feed(ctl, view, KeyEvent::key(KeyCode::Backspace));
}
