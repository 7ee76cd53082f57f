//! Scoped undo grouping and read-write brackets.
//!
//! Compound edits run inside one of three guards. Each guard wraps the view,
//! derefs to it, and performs its exit action in `Drop`, so the bracket
//! closes on every path: early return, `?`, or unwinding. An unbalanced
//! undo group is therefore unrepresentable from safe callers.
//!
//! Exit order for the combined guard matches entry order reversed: the undo
//! action ends first, then the view returns to read-only.

use std::ops::{Deref, DerefMut};

use neme_view::TextView;

/// Brackets a sequence of edits into a single undoable step.
pub struct UndoGroup<'a, V: TextView + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: TextView + ?Sized> UndoGroup<'a, V> {
    pub fn new(view: &'a mut V) -> Self {
        view.begin_undo_action();
        Self { view }
    }
}

impl<V: TextView + ?Sized> Drop for UndoGroup<'_, V> {
    fn drop(&mut self) {
        self.view.end_undo_action();
    }
}

impl<V: TextView + ?Sized> Deref for UndoGroup<'_, V> {
    type Target = V;
    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: TextView + ?Sized> DerefMut for UndoGroup<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

/// Makes the view writable for the duration of the scope; read-only is
/// restored on exit. Used for undo/redo themselves and for edits that should
/// remain individually undoable.
pub struct ReadWrite<'a, V: TextView + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: TextView + ?Sized> ReadWrite<'a, V> {
    pub fn new(view: &'a mut V) -> Self {
        view.set_read_only(false);
        Self { view }
    }
}

impl<V: TextView + ?Sized> Drop for ReadWrite<'_, V> {
    fn drop(&mut self) {
        self.view.set_read_only(true);
    }
}

impl<V: TextView + ?Sized> Deref for ReadWrite<'_, V> {
    type Target = V;
    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: TextView + ?Sized> DerefMut for ReadWrite<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

/// [`UndoGroup`] and [`ReadWrite`] combined: one undoable step performed on a
/// temporarily writable view.
pub struct ReadWriteUndo<'a, V: TextView + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: TextView + ?Sized> ReadWriteUndo<'a, V> {
    pub fn new(view: &'a mut V) -> Self {
        view.begin_undo_action();
        view.set_read_only(false);
        Self { view }
    }
}

impl<V: TextView + ?Sized> Drop for ReadWriteUndo<'_, V> {
    fn drop(&mut self) {
        self.view.end_undo_action();
        self.view.set_read_only(true);
    }
}

impl<V: TextView + ?Sized> Deref for ReadWriteUndo<'_, V> {
    type Target = V;
    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: TextView + ?Sized> DerefMut for ReadWriteUndo<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}
