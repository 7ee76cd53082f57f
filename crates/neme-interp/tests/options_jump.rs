//! Options parsed from TOML flow through to the jump and page motions.

mod common;

use anyhow::Result;
use common::{enter, feed, setup};
use neme_events::KeyEvent;
use neme_interp::{ModeController, Options};
use neme_view::{MemoryView, TextView};
use pretty_assertions::assert_eq;

#[test]
fn custom_jump_multiplier_drives_return_jumps() -> Result<()> {
    let opts = Options::from_toml("jump_lines = 2\npage_lines = 5\n")?;
    let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut view = MemoryView::from_str(&text);
    view.set_page_lines(opts.page_lines);
    let mut ctl = ModeController::with_options(opts);
    ctl.sync_view(&mut view);

    enter(&mut ctl, &mut view);
    assert_eq!(view.cursor(), (2, 0), "Return jumps jump_lines lines");
    feed(&mut ctl, &mut view, KeyEvent::ctrl('j'));
    assert_eq!(view.cursor(), (7, 0), "page motion uses the configured height");
    Ok(())
}

#[test]
fn defaults_apply_when_unconfigured() {
    let (ctl, _view) = setup("");
    assert_eq!(ctl.options().jump_lines, 5);
}
