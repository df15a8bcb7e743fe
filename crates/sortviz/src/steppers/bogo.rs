#![forbid(unsafe_code)]

//! Bogo sort, one whole-array shuffle per step.
//!
//! Checks sortedness first, then reshuffles uniformly at random until the
//! array happens to be ordered. Expected runtime is unbounded and becomes
//! impractical beyond small sizes; that is the joke, and reset is the
//! escape hatch.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{SortOrder, StepOutcome, Stepper, Touched};

/// Suspended bogo sort. Holds its own seeded RNG so runs are reproducible
/// under a fixed seed.
#[derive(Debug)]
pub struct BogoStepper {
    order: SortOrder,
    rng: StdRng,
}

impl BogoStepper {
    pub fn new(order: SortOrder, seed: u64) -> Self {
        Self {
            order,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Stepper for BogoStepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.order.is_sorted(values) {
            return StepOutcome::Done;
        }
        values.shuffle(&mut self.rng);
        // A shuffle touches everything, which is the same as highlighting
        // nothing in particular.
        StepOutcome::Stepped(Touched::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steppers::testutil::{assert_permutation, drive};

    #[test]
    fn sorted_input_emits_zero_shuffles() {
        let mut values = vec![1, 2, 3, 4];
        let mut stepper = BogoStepper::new(SortOrder::Ascending, 7);
        assert!(drive(&mut stepper, &mut values).is_empty());
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn terminates_on_small_input_with_fixed_seed() {
        // Size 3 has six permutations; with a fixed seed the shuffle walk
        // reaches the sorted one well inside the drive bound.
        let input = vec![3, 1, 2];
        let mut values = input.clone();
        let mut stepper = BogoStepper::new(SortOrder::Ascending, 0xB060);
        let log = drive(&mut stepper, &mut values);
        assert_eq!(values, vec![1, 2, 3]);
        assert!(!log.is_empty());
        assert!(log.iter().all(|t| t.marks.is_empty()));
        assert_permutation(&values, &input);
    }

    #[test]
    fn descending_termination() {
        let mut values = vec![1, 3, 2];
        let mut stepper = BogoStepper::new(SortOrder::Descending, 42);
        drive(&mut stepper, &mut values);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let run = |seed: u64| {
            let mut values = vec![2, 3, 1];
            let mut stepper = BogoStepper::new(SortOrder::Ascending, seed);
            let steps = drive(&mut stepper, &mut values).len();
            (values, steps)
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn every_intermediate_state_is_a_permutation() {
        let input = vec![4, 2, 3, 1];
        let mut values = input.clone();
        let mut stepper = BogoStepper::new(SortOrder::Ascending, 99);
        for _ in 0..200 {
            match stepper.step(&mut values) {
                StepOutcome::Stepped(_) => assert_permutation(&values, &input),
                StepOutcome::Done => break,
            }
        }
    }
}
