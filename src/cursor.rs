//! Bounded cursor over a trip's daily logs.

use tracing::debug;

use crate::error::{Result, ViewError};

/// Selected position in a list of `len` daily logs.
///
/// Moves clamp at both ends and never wrap. With no logs the cursor is
/// disabled: it has no index and moves do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLogCursor {
    index: usize,
    len: usize,
}

impl DailyLogCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts over at the first day of a new trip result.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
        debug!(index = self.index, len = self.len, "daily log cursor moved back");
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
        debug!(index = self.index, len = self.len, "daily log cursor moved forward");
    }

    /// Jumps to `index`.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(ViewError::CursorOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn has_previous(&self) -> bool {
        self.len > 0 && self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }
}
