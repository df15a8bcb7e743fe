#![forbid(unsafe_code)]

//! Diff computation between buffers.
//!
//! `BufferDiff` computes the set of changed cells between two buffers using
//! a row-major scan, then coalesces adjacent changes into [`ChangeRun`]s so
//! the presenter can emit one cursor move per run.
//!
//! This is what lets a mid-sort redraw touch only the bars that moved: the
//! header and every unchanged bar produce no output at all.

use smallvec::SmallVec;

use crate::buffer::Buffer;

/// A contiguous run of changed cells on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    /// Row index.
    pub y: u16,
    /// Start column (inclusive).
    pub x0: u16,
    /// End column (inclusive).
    pub x1: u16,
}

impl ChangeRun {
    /// Create a new change run.
    #[inline]
    pub const fn new(y: u16, x0: u16, x1: u16) -> Self {
        debug_assert!(x0 <= x1);
        Self { y, x0, x1 }
    }

    /// Number of cells in this run.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Check if this run is empty (should never happen in practice).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0
    }
}

/// The diff between two buffers: changed (x, y) positions.
#[derive(Debug, Clone, Default)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the diff between two buffers of equal dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the buffers have different dimensions; the runtime always
    /// recreates both buffers together on resize.
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        assert_eq!(old.width(), new.width(), "diff requires equal widths");
        assert_eq!(old.height(), new.height(), "diff requires equal heights");

        let mut changes = Vec::new();
        for y in 0..new.height() {
            for x in 0..new.width() {
                if old.get_unchecked(x, y) != new.get_unchecked(x, y) {
                    changes.push((x, y));
                }
            }
        }
        Self { changes }
    }

    /// A diff marking every cell changed (full repaint).
    pub fn full(buffer: &Buffer) -> Self {
        let mut changes = Vec::with_capacity(buffer.len());
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                changes.push((x, y));
            }
        }
        Self { changes }
    }

    /// Number of changed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if nothing changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Coalesce changes into per-row runs of adjacent cells.
    ///
    /// Changes are produced in row-major order by `compute`, so a single
    /// forward pass suffices.
    pub fn runs(&self) -> SmallVec<[ChangeRun; 16]> {
        let mut runs: SmallVec<[ChangeRun; 16]> = SmallVec::new();
        for &(x, y) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.y == y && run.x1 + 1 == x => run.x1 = x,
                _ => runs.push(ChangeRun::new(y, x, x)),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use proptest::prelude::*;

    #[test]
    fn identical_buffers_produce_empty_diff() {
        let a = Buffer::new(10, 4);
        let b = Buffer::new(10, 4);
        let diff = BufferDiff::compute(&a, &b);
        assert!(diff.is_empty());
        assert!(diff.runs().is_empty());
    }

    #[test]
    fn adjacent_changes_coalesce_into_one_run() {
        let old = Buffer::new(10, 4);
        let mut new = Buffer::new(10, 4);
        new.set(3, 1, Cell::from_char('a'));
        new.set(4, 1, Cell::from_char('b'));
        new.set(5, 1, Cell::from_char('c'));

        let diff = BufferDiff::compute(&old, &new);
        assert_eq!(diff.len(), 3);
        let runs = diff.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], ChangeRun::new(1, 3, 5));
        assert_eq!(runs[0].len(), 3);
    }

    #[test]
    fn changes_on_separate_rows_are_separate_runs() {
        let old = Buffer::new(10, 4);
        let mut new = Buffer::new(10, 4);
        new.set(0, 0, Cell::from_char('a'));
        new.set(0, 2, Cell::from_char('b'));

        let runs = BufferDiff::compute(&old, &new).runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].y, 0);
        assert_eq!(runs[1].y, 2);
    }

    #[test]
    fn full_diff_covers_every_cell() {
        let buf = Buffer::new(6, 3);
        let diff = BufferDiff::full(&buf);
        assert_eq!(diff.len(), 18);
        let runs = diff.runs();
        assert_eq!(runs.len(), 3);
        assert!(runs.iter().all(|r| r.len() == 6));
    }

    proptest! {
        // Run coalescing never loses or invents cells.
        #[test]
        fn runs_preserve_change_count(points in proptest::collection::btree_set((0u16..20, 0u16..10), 0..60)) {
            let old = Buffer::new(20, 10);
            let mut new = Buffer::new(20, 10);
            for &(x, y) in &points {
                new.set(x, y, Cell::from_char('#'));
            }
            let diff = BufferDiff::compute(&old, &new);
            let total: usize = diff.runs().iter().map(|r| r.len() as usize).sum();
            prop_assert_eq!(total, points.len());
        }
    }
}
