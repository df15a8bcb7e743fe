#![forbid(unsafe_code)]

//! Bubble sort, one swap per step.
//!
//! Classic adjacent-pair passes; pairs already in order advance the scan
//! silently, so a clean pass emits no steps at all.

use super::{SortOrder, StepOutcome, Stepper, Touched};

/// Suspended bubble sort: `pass` counts completed passes, `j` is the scan
/// position within the current pass.
#[derive(Debug)]
pub struct BubbleStepper {
    order: SortOrder,
    pass: usize,
    j: usize,
}

impl BubbleStepper {
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            pass: 0,
            j: 0,
        }
    }
}

impl Stepper for BubbleStepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        let n = values.len();
        if n < 2 {
            return StepOutcome::Done;
        }
        while self.pass < n - 1 {
            while self.j < n - 1 - self.pass {
                let j = self.j;
                self.j += 1;
                if self.order.out_of_order(values[j], values[j + 1]) {
                    values.swap(j, j + 1);
                    return StepOutcome::Stepped(Touched::pair(j, j + 1));
                }
            }
            self.pass += 1;
            self.j = 0;
        }
        StepOutcome::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steppers::testutil::drive;

    #[test]
    fn worked_example_from_three_one_two() {
        // [3,1,2] ascending: swap (0,1) then (1,2), yielding [1,2,3].
        let mut values = vec![3, 1, 2];
        let mut stepper = BubbleStepper::new(SortOrder::Ascending);

        let log = drive(&mut stepper, &mut values);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(log, vec![Touched::pair(0, 1), Touched::pair(1, 2)]);
    }

    #[test]
    fn sorted_input_emits_zero_swaps() {
        let mut values = vec![1, 2, 3, 4, 5];
        let mut stepper = BubbleStepper::new(SortOrder::Ascending);
        assert!(drive(&mut stepper, &mut values).is_empty());
    }

    #[test]
    fn descending_sorted_input_emits_zero_swaps() {
        let mut values = vec![5, 4, 3, 2, 1];
        let mut stepper = BubbleStepper::new(SortOrder::Descending);
        assert!(drive(&mut stepper, &mut values).is_empty());
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn descending_sorts_reversed() {
        let mut values = vec![1, 2, 3];
        let mut stepper = BubbleStepper::new(SortOrder::Descending);
        let log = drive(&mut stepper, &mut values);
        assert_eq!(values, vec![3, 2, 1]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn each_step_is_exactly_one_swap() {
        let input = vec![5, 1, 4, 2, 3];
        let mut values = input.clone();
        let mut stepper = BubbleStepper::new(SortOrder::Ascending);

        let mut before = values.clone();
        while let StepOutcome::Stepped(touched) = stepper.step(&mut values) {
            // The reported pair is adjacent and is the only change.
            let &[(a, _), (b, _)] = touched.marks.as_slice() else {
                panic!("bubble reports exactly two marks");
            };
            assert_eq!(b, a + 1);
            before.swap(a, b);
            assert_eq!(before, values);
        }
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
