//! Debounced persistence of stylesheet edits.
//!
//! [`EditPersister`] owns the store handle, the single debounce
//! deadline slot, and the undo flag. The host arms a real timer for
//! the delay returned by [`EditPersister::note_edit`] and calls
//! [`EditPersister::save_if_due`] when it fires; each new edit
//! cancels-and-rearms, so a burst of edits collapses into one save
//! once the burst settles.
//!
//! Saves are guarded on the surface being visible: an invisible
//! surface at save time means the user has likely navigated away
//! mid-edit, so instead of persisting a possibly truncated value the
//! persister asks the host to offer an undo control.

use crate::error::StyleError;
use crate::store::StyleStore;
use tracing::debug;

/// Quiet period after the last edit before a save fires.
pub const SAVE_DEBOUNCE_MS: u64 = 500;

/// Rendered extents of the editable surface at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceExtent {
    pub width: i32,
    pub height: i32,
}

impl SurfaceExtent {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A surface with no rendered extent at all counts as invisible.
    pub fn is_visible(&self) -> bool {
        self.width + self.height > 0
    }
}

/// Observable persister state, one machine per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistState {
    Idle,
    PendingSave,
    AwaitingUndo,
}

/// What a timer fire resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Stale or early wakeup; nothing happened.
    NotDue,
    /// The visible text was written to the store.
    Saved,
    /// Surface invisible, write skipped. `offer_undo` is true only the
    /// first time since the last save or undo, so the host creates at
    /// most one control per invisibility event.
    SkippedHidden { offer_undo: bool },
}

pub struct EditPersister<S> {
    store: S,
    deadline: Option<u64>,
    undo_offered: bool,
}

impl<S: StyleStore> EditPersister<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            deadline: None,
            undo_offered: false,
        }
    }

    pub fn state(&self) -> PersistState {
        if self.deadline.is_some() {
            PersistState::PendingSave
        } else if self.undo_offered {
            PersistState::AwaitingUndo
        } else {
            PersistState::Idle
        }
    }

    /// Record an edit: cancel any pending save and arm a fresh one.
    /// Returns the delay the host should schedule a wakeup for.
    pub fn note_edit(&mut self, now_ms: u64) -> u64 {
        self.deadline = Some(now_ms + SAVE_DEBOUNCE_MS);
        SAVE_DEBOUNCE_MS
    }

    /// Milliseconds until the armed save is due, if one is armed.
    /// Lets the host re-arm after a wakeup that fired early.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|d| d.saturating_sub(now_ms))
    }

    /// Called by the host when its timer fires, with the surface's
    /// current text and rendered extent.
    pub fn save_if_due(
        &mut self,
        now_ms: u64,
        text: &str,
        extent: SurfaceExtent,
    ) -> Result<SaveOutcome, StyleError> {
        let Some(deadline) = self.deadline else {
            return Ok(SaveOutcome::NotDue);
        };
        if now_ms < deadline {
            return Ok(SaveOutcome::NotDue);
        }
        self.deadline = None;

        if extent.is_visible() {
            self.store.set(text)?;
            self.undo_offered = false;
            debug!(len = text.len(), "styles saved");
            Ok(SaveOutcome::Saved)
        } else {
            let offer_undo = !self.undo_offered;
            self.undo_offered = true;
            debug!("surface hidden at save time, write skipped");
            Ok(SaveOutcome::SkippedHidden { offer_undo })
        }
    }

    /// Discard what was typed while invisible: return the stored value
    /// for the host to copy back into the surface. Not a write; the
    /// stored value is left exactly as it was.
    pub fn undo(&mut self) -> Result<Option<String>, StyleError> {
        self.deadline = None;
        self.undo_offered = false;
        self.store.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
