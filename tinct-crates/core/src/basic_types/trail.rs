use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::tinct_assert_simple;

/// A position on a [`Trail`]; undoing to it restores everything recorded afterwards.
pub(crate) type Checkpoint = usize;

/// An append-only log of changes which can be undone in reverse chronological order.
///
/// A checkpoint is simply the length of the trail; [`Trail::undo_to`] hands back every entry
/// recorded after the checkpoint, newest first, so that the owner can revert them.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    trail: Vec<T>,
}

// We explicitly implement the Default and not as a macro, because we want to avoid imposing Default
// on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn record(&mut self, entry: T) {
        self.trail.push(entry)
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        self.trail.len()
    }

    /// Removes all entries recorded after `checkpoint` and returns them, newest first.
    pub(crate) fn undo_to(&mut self, checkpoint: Checkpoint) -> Rev<Drain<'_, T>> {
        tinct_assert_simple!(
            checkpoint <= self.trail.len(),
            "Cannot undo to checkpoint {checkpoint}, the trail only has {} entries",
            self.trail.len()
        );

        self.trail.drain(checkpoint..).rev()
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
