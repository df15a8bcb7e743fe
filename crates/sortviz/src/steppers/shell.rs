#![forbid(unsafe_code)]

//! Shell sort, one shifted element per step.
//!
//! Gap-sequence insertion sort with the gap halving each pass until it
//! reaches zero. Like the plain insertion stepper, each shift is a
//! gap-distance swap so intermediate states stay permutations.

use super::{SortOrder, StepOutcome, Stepper, Touched};

/// Suspended shell sort: current `gap`, outer position `i`, and the riding
/// position `j` of the value being inserted within its gap chain.
#[derive(Debug)]
pub struct ShellStepper {
    order: SortOrder,
    gap: usize,
    i: usize,
    j: usize,
}

impl ShellStepper {
    pub fn new(len: usize, order: SortOrder) -> Self {
        let gap = len / 2;
        Self {
            order,
            gap,
            i: gap,
            j: gap,
        }
    }
}

impl Stepper for ShellStepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        let n = values.len();
        while self.gap > 0 {
            while self.i < n {
                if self.j >= self.gap
                    && self
                        .order
                        .out_of_order(values[self.j - self.gap], values[self.j])
                {
                    values.swap(self.j - self.gap, self.j);
                    self.j -= self.gap;
                    return StepOutcome::Stepped(Touched::pair(self.j, self.j + self.gap));
                }
                self.i += 1;
                self.j = self.i;
            }
            self.gap /= 2;
            self.i = self.gap;
            self.j = self.gap;
        }
        StepOutcome::Done
    }
}
