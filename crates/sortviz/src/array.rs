#![forbid(unsafe_code)]

//! The working array and its derived render parameters.
//!
//! [`SortArray`] owns the sequence being sorted. [`BarLayout`] holds the
//! values derived from the array bounds and the terminal area (bar width,
//! origin offset, value span); it is recomputed exactly when the array is
//! replaced or the surface changes size, never during a sort.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use sortviz_core::geometry::Rect;

use crate::theme::layout::{SIDE_PAD, TOP_PAD};

/// The sequence of values being sorted.
///
/// The default generator produces the unique values `1..=n` in shuffled
/// order, so bar heights are distinct and the tallest bar always spans the
/// full chart height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArray {
    values: Vec<u32>,
}

impl SortArray {
    /// Generate a shuffled array of the unique values `1..=n`.
    pub fn generate(n: usize, rng: &mut StdRng) -> Self {
        let mut values: Vec<u32> = (1..=n as u32).collect();
        values.shuffle(rng);
        Self { values }
    }

    /// Wrap an explicit sequence (tests, fixed demos).
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for the degenerate empty array.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the values.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Mutable view of the values, handed to the active stepper only.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    /// Smallest value (0 for an empty array).
    pub fn min(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// Largest value (0 for an empty array).
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Render parameters derived from array bounds and the terminal area.
///
/// Consumers treat this as read-only per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// The chart region bars are drawn into.
    pub chart: Rect,
    /// Width of each bar in columns.
    pub bar_width: u16,
    /// Left edge of the first bar (chart is centered horizontally).
    pub start_x: u16,
    /// Smallest array value at derivation time.
    pub min_value: u32,
    /// `max - min + 1`: the value range bars are scaled against.
    pub value_span: u32,
}

impl BarLayout {
    /// Derive the layout for `array` rendered into `area`.
    ///
    /// Degenerate surfaces (too small for the header plus one bar row)
    /// yield an empty chart; the view draws nothing in that case.
    pub fn compute(array: &SortArray, area: Rect) -> Self {
        let chart_w = area.width.saturating_sub(SIDE_PAD * 2);
        let chart_h = area.height.saturating_sub(TOP_PAD);
        let chart = Rect::new(area.x + SIDE_PAD, area.y + TOP_PAD, chart_w, chart_h);

        let n = array.len() as u16;
        if n == 0 || chart.is_empty() {
            return Self {
                chart,
                bar_width: 1,
                start_x: chart.x,
                min_value: array.min(),
                value_span: 1,
            };
        }

        let bar_width = (chart_w / n).max(1);
        let used = bar_width.saturating_mul(n).min(chart_w);
        let start_x = chart.x + (chart_w - used) / 2;
        let min_value = array.min();
        let value_span = array.max().saturating_sub(min_value) + 1;

        Self {
            chart,
            bar_width,
            start_x,
            min_value,
            value_span,
        }
    }

    /// Bar height for `value`, in eighth-rows of the chart height.
    ///
    /// The fractional resolution matches the eighth-block glyphs the view
    /// draws with.
    pub fn bar_eighths(&self, value: u32) -> u32 {
        let offset = value.saturating_sub(self.min_value) + 1;
        let total = u64::from(self.chart.height) * 8;
        ((u64::from(offset) * total) / u64::from(self.value_span)) as u32
    }
}
