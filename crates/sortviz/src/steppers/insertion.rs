#![forbid(unsafe_code)]

//! Insertion sort, one shift per step.
//!
//! The classic inner-loop shift is realized as an adjacent swap: the value
//! being inserted rides left one position per step, so every intermediate
//! state is a permutation of the input.

use super::{SortOrder, StepOutcome, Stepper, Touched};

/// Suspended insertion sort: `i` is the outer position being inserted,
/// `j` is where its value currently sits.
#[derive(Debug)]
pub struct InsertionStepper {
    order: SortOrder,
    i: usize,
    j: usize,
}

impl InsertionStepper {
    pub fn new(order: SortOrder) -> Self {
        Self { order, i: 1, j: 1 }
    }
}

impl Stepper for InsertionStepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        let n = values.len();
        while self.i < n {
            if self.j > 0 && self.order.out_of_order(values[self.j - 1], values[self.j]) {
                values.swap(self.j - 1, self.j);
                self.j -= 1;
                return StepOutcome::Stepped(Touched::pair(self.j, self.j + 1));
            }
            self.i += 1;
            self.j = self.i;
        }
        StepOutcome::Done
    }
}
