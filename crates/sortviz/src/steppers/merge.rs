#![forbid(unsafe_code)]

//! Merge sort, one placement per step.
//!
//! The top-down recursion is flattened at construction into a post-order
//! schedule of `(low, mid, high)` ranges (pure index arithmetic, no array
//! access). Each scheduled merge then runs incrementally: entering a range
//! snapshots its two halves into side buffers, every step places exactly
//! one element back into the array, and a final cleanup signal reports the
//! whole merged range once it is complete. The cleanup signal mutates
//! nothing; it exists so the driver can repaint the region in its settled
//! colors, and its touched indices are absolute array positions.

use super::{Mark, SortOrder, StepOutcome, Stepper, Touched};

/// An in-flight merge of `values[low..=high]`.
#[derive(Debug)]
struct ActiveMerge {
    low: usize,
    mid: usize,
    high: usize,
    left: Vec<u32>,
    right: Vec<u32>,
    /// Cursor into `left`.
    i: usize,
    /// Cursor into `right`.
    j: usize,
    /// Next placement position in the array.
    k: usize,
}

impl ActiveMerge {
    fn start(values: &[u32], low: usize, mid: usize, high: usize) -> Self {
        Self {
            low,
            mid,
            high,
            left: values[low..=mid].to_vec(),
            right: values[mid + 1..=high].to_vec(),
            i: 0,
            j: 0,
            k: low,
        }
    }

    fn is_placed(&self) -> bool {
        self.i == self.left.len() && self.j == self.right.len()
    }

    /// Place one element, returning the index written.
    fn place_one(&mut self, values: &mut [u32], order: SortOrder) -> usize {
        let take_left = match (self.i < self.left.len(), self.j < self.right.len()) {
            (true, true) => !order.out_of_order(self.left[self.i], self.right[self.j]),
            (true, false) => true,
            (false, true) => false,
            (false, false) => unreachable!("place_one called on a completed merge"),
        };
        values[self.k] = if take_left {
            let v = self.left[self.i];
            self.i += 1;
            v
        } else {
            let v = self.right[self.j];
            self.j += 1;
            v
        };
        let placed = self.k;
        self.k += 1;
        placed
    }

    /// Highlight for the cleanup signal: the merged halves in their
    /// absolute positions.
    fn cleanup_touched(&self) -> Touched {
        let mut marks = Vec::with_capacity(self.high - self.low + 1);
        for idx in self.low..=self.mid {
            marks.push((idx, Mark::Primary));
        }
        for idx in self.mid + 1..=self.high {
            marks.push((idx, Mark::Secondary));
        }
        Touched { marks }
    }
}

/// Suspended merge sort.
#[derive(Debug)]
pub struct MergeStepper {
    order: SortOrder,
    /// Post-order merge ranges, from the innermost pairs outward.
    schedule: Vec<(usize, usize, usize)>,
    /// Next schedule entry to start.
    next: usize,
    active: Option<ActiveMerge>,
}

impl MergeStepper {
    pub fn new(len: usize, order: SortOrder) -> Self {
        let mut schedule = Vec::new();
        if len > 1 {
            push_merges(&mut schedule, 0, len - 1);
        }
        Self {
            order,
            schedule,
            next: 0,
            active: None,
        }
    }
}

/// Append the merge ranges for `low..=high` in post-order (children before
/// their parent), matching the order a recursive merge sort performs them.
fn push_merges(schedule: &mut Vec<(usize, usize, usize)>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    push_merges(schedule, low, mid);
    push_merges(schedule, mid + 1, high);
    schedule.push((low, mid, high));
}

impl Stepper for MergeStepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.active.is_none() {
            let Some(&(low, mid, high)) = self.schedule.get(self.next) else {
                return StepOutcome::Done;
            };
            self.next += 1;
            self.active = Some(ActiveMerge::start(values, low, mid, high));
        }
        let Some(merge) = self.active.as_mut() else {
            return StepOutcome::Done;
        };
        if merge.is_placed() {
            // Region fully merged: emit the cleanup signal and retire it.
            let touched = merge.cleanup_touched();
            self.active = None;
            return StepOutcome::Stepped(touched);
        }

        let placed = merge.place_one(values, self.order);
        StepOutcome::Stepped(Touched::single(placed))
    }
}
