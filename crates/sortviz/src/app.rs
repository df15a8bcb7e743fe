#![forbid(unsafe_code)]

//! Application model: the Idle/Running driver state machine.
//!
//! [`AppModel`] owns the array, the selected algorithm and order, and the
//! suspended stepper while a sort is running. One frame tick resumes the
//! stepper for exactly one step; input commands are gated on the run state
//! (order/algorithm/start only while idle, reset/quit always).

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use sortviz_core::event::{Event, KeyCode, KeyEvent, Modifiers};
use sortviz_core::geometry::Rect;
use sortviz_render::frame::Frame;
use sortviz_runtime::{Cmd, Model};

use crate::array::{BarLayout, SortArray};
use crate::cli::Opts;
use crate::steppers::{Algorithm, Mark, SortOrder, StepOutcome, Stepper, Touched};
use crate::theme::layout::SIDE_PAD;
use crate::view;

/// Messages routed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A key press (releases and repeats are filtered at mapping time).
    Key(KeyEvent),
    /// The terminal changed size.
    Resized { width: u16, height: u16 },
    /// One frame elapsed.
    Tick,
    /// An event the animator ignores.
    Ignored,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.is_press() => Msg::Key(key),
            Event::Key(_) => Msg::Ignored,
            Event::Resize { width, height } => Msg::Resized { width, height },
            Event::Tick => Msg::Tick,
        }
    }
}

/// Per-frame highlight set: index to display role, supplied by the active
/// stepper and replaced wholesale on every step.
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    marks: HashMap<usize, Mark>,
}

impl Highlights {
    /// Replace the set with a step's touched indices.
    pub fn replace(&mut self, touched: Touched) {
        self.marks.clear();
        self.marks.extend(touched.marks);
    }

    /// Discard all highlights.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Look up the mark for a bar index.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.marks.get(&index).copied()
    }

    /// Check if no highlights are active.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// The animator's state.
pub struct AppModel {
    array: SortArray,
    layout: BarLayout,
    order: SortOrder,
    algorithm: Algorithm,
    /// The suspended sorting process, present only while Running.
    active: Option<Box<dyn Stepper>>,
    highlights: Highlights,
    rng: StdRng,
    /// Current terminal area.
    area: Rect,
    /// Requested bar count; `None` fits the chart width.
    requested_bars: Option<usize>,
}

impl AppModel {
    /// Build the model from parsed options. The array is generated on the
    /// first resize message, which the runtime delivers before the first
    /// frame.
    pub fn new(opts: &Opts) -> Self {
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let array = SortArray::from_values(Vec::new());
        let layout = BarLayout::compute(&array, Rect::default());
        Self {
            array,
            layout,
            order: SortOrder::Ascending,
            algorithm: Algorithm::default(),
            active: None,
            highlights: Highlights::default(),
            rng,
            area: Rect::default(),
            requested_bars: opts.bars,
        }
    }

    /// Whether a sort is currently running.
    #[inline]
    pub fn is_sorting(&self) -> bool {
        self.active.is_some()
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Bar count for the current area: the request, clamped to one column
    /// per bar; auto mode fills the chart width.
    fn bar_count(&self) -> usize {
        let chart_w = usize::from(self.area.width.saturating_sub(SIDE_PAD * 2));
        let n = self.requested_bars.unwrap_or(chart_w);
        n.min(chart_w)
    }

    /// Discard any running sort and regenerate the array.
    fn reset(&mut self) {
        self.active = None;
        self.highlights.clear();
        self.array = SortArray::generate(self.bar_count(), &mut self.rng);
        self.layout = BarLayout::compute(&self.array, self.area);
        debug!(bars = self.array.len(), "array regenerated");
    }

    /// Start the selected algorithm (Idle only; a no-op while Running).
    fn start(&mut self) {
        if self.active.is_some() {
            return;
        }
        let seed = self.rng.next_u64();
        self.active = Some(self.algorithm.stepper(self.array.len(), self.order, seed));
        info!(
            algorithm = self.algorithm.name(),
            order = self.order.label(),
            bars = self.array.len(),
            "sort started"
        );
    }

    /// Resume the active stepper for exactly one step.
    fn advance(&mut self) {
        let Some(stepper) = self.active.as_mut() else {
            return;
        };
        match stepper.step(self.array.values_mut()) {
            StepOutcome::Stepped(touched) => self.highlights.replace(touched),
            StepOutcome::Done => {
                self.active = None;
                self.highlights.clear();
                info!(algorithm = self.algorithm.name(), "sort finished");
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        // Quit works in any state.
        if key.is_char('q')
            || key.code == KeyCode::Escape
            || (key.is_char('c') && key.modifiers.contains(Modifiers::CTRL))
        {
            return Cmd::quit();
        }

        match key.code {
            // Reset works in any state.
            KeyCode::Char('r') => self.reset(),
            // Everything below is gated on Idle.
            KeyCode::Char(' ') if !self.is_sorting() => self.start(),
            KeyCode::Char('a') if !self.is_sorting() => self.order = SortOrder::Ascending,
            KeyCode::Char('d') if !self.is_sorting() => self.order = SortOrder::Descending,
            KeyCode::Char(digit @ '1'..='6') if !self.is_sorting() => {
                if let Some(algorithm) = Algorithm::from_digit(digit) {
                    self.algorithm = algorithm;
                }
            }
            _ => {}
        }
        Cmd::none()
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::from_size(width, height);
        if area == self.area {
            return;
        }
        let first_size = self.area.is_empty();
        self.area = area;
        if first_size || (!self.is_sorting() && self.array.len() != self.bar_count()) {
            // First sighting of the surface, or an idle array that no
            // longer fits: regenerate.
            self.reset();
        } else {
            self.layout = BarLayout::compute(&self.array, self.area);
        }
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Tick => {
                self.advance();
                Cmd::none()
            }
            Msg::Key(key) => self.handle_key(key),
            Msg::Resized { width, height } => {
                self.handle_resize(width, height);
                Cmd::none()
            }
            Msg::Ignored => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        view::render(self, frame);
    }
}
