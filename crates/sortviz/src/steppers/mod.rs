#![forbid(unsafe_code)]

//! Suspendable sorting processes.
//!
//! Each algorithm is an explicit-state object implementing [`Stepper`]:
//! calling [`Stepper::step`] performs **exactly one observable mutation**
//! (a swap, a placement, or a whole shuffle) and reports the indices it
//! touched, or signals exhaustion with [`StepOutcome::Done`]. Non-mutating
//! work (scanning for the next violation, searching for a minimum) happens
//! silently inside a single call, so the driver can redraw after every
//! state change without ever skipping or batching one.
//!
//! A stepper is not restartable: once it returns `Done` it keeps returning
//! `Done`. Empty and single-element arrays complete with zero steps.

mod bogo;
mod bubble;
mod insertion;
mod merge;
mod selection;
mod shell;

pub use bogo::BogoStepper;
pub use bubble::BubbleStepper;
pub use insertion::InsertionStepper;
pub use merge::MergeStepper;
pub use selection::SelectionStepper;
pub use shell::ShellStepper;

/// Direction the array should end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Human-readable label for the header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Whether `front` placed before `back` violates this order.
    #[inline]
    pub const fn out_of_order(self, front: u32, back: u32) -> bool {
        match self {
            Self::Ascending => front > back,
            Self::Descending => front < back,
        }
    }

    /// Whether `candidate` belongs earlier in the result than `incumbent`
    /// (strict; equal values never prefer).
    #[inline]
    pub const fn prefers(self, candidate: u32, incumbent: u32) -> bool {
        match self {
            Self::Ascending => candidate < incumbent,
            Self::Descending => candidate > incumbent,
        }
    }

    /// Check whether `values` is fully ordered per this order.
    pub fn is_sorted(self, values: &[u32]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}

/// Role of a touched index, used only for highlight coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The index the step settled a value into.
    Primary,
    /// The index displaced or merged alongside it.
    Secondary,
}

/// The indices a step touched, reported to the driver for one frame of
/// highlighting. Never consulted for correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Touched {
    /// `(index, role)` pairs; order is irrelevant.
    pub marks: Vec<(usize, Mark)>,
}

impl Touched {
    /// No highlight (bogo's whole-array shuffle).
    pub fn none() -> Self {
        Self::default()
    }

    /// The common two-index case.
    pub fn pair(primary: usize, secondary: usize) -> Self {
        Self {
            marks: vec![(primary, Mark::Primary), (secondary, Mark::Secondary)],
        }
    }

    /// A single settled index.
    pub fn single(primary: usize) -> Self {
        Self {
            marks: vec![(primary, Mark::Primary)],
        }
    }
}

/// Result of resuming a stepper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// One observable mutation happened; the array is in a valid
    /// intermediate state and may be rendered.
    Stepped(Touched),
    /// The algorithm is finished; the array is in its target order.
    Done,
}

/// A suspendable sorting process.
///
/// The driver owns the array and lends it mutably for exactly one step at a
/// time; the stepper holds only its own cursor state between calls.
pub trait Stepper {
    /// Advance by one observable mutation.
    fn step(&mut self, values: &mut [u32]) -> StepOutcome;
}

/// The six selectable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Insertion,
    #[default]
    Bubble,
    Selection,
    Shell,
    Merge,
    Bogo,
}

impl Algorithm {
    /// All algorithms in keybinding order (`1`..`6`).
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Bogo,
    ];

    /// Display name for the header.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "Insertion Sort",
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Shell => "Shell Sort",
            Self::Merge => "Merge Sort",
            Self::Bogo => "Bogo Sort",
        }
    }

    /// Map a digit key to an algorithm.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Insertion),
            '2' => Some(Self::Bubble),
            '3' => Some(Self::Selection),
            '4' => Some(Self::Shell),
            '5' => Some(Self::Merge),
            '6' => Some(Self::Bogo),
            _ => None,
        }
    }

    /// Instantiate the suspendable process for an array of length `len`.
    ///
    /// `seed` feeds the randomized variant only; the deterministic
    /// algorithms ignore it.
    pub fn stepper(self, len: usize, order: SortOrder, seed: u64) -> Box<dyn Stepper> {
        match self {
            Self::Insertion => Box::new(InsertionStepper::new(order)),
            Self::Bubble => Box::new(BubbleStepper::new(order)),
            Self::Selection => Box::new(SelectionStepper::new(order)),
            Self::Shell => Box::new(ShellStepper::new(len, order)),
            Self::Merge => Box::new(MergeStepper::new(len, order)),
            Self::Bogo => Box::new(BogoStepper::new(order, seed)),
        }
    }
}
