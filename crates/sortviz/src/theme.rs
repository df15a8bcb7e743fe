#![forbid(unsafe_code)]

//! Color palette and layout constants.
//!
//! Everything presentation-tunable lives here as named constants so the
//! view code reads as structure, not numbers.

use sortviz_render::cell::PackedRgba;

/// Header colors.
pub mod header {
    use super::PackedRgba;

    /// Title line (algorithm name and order).
    pub const TITLE: PackedRgba = PackedRgba::rgb(96, 220, 130);
    /// Control legend lines.
    pub const LEGEND: PackedRgba = PackedRgba::rgb(150, 150, 150);
}

/// Bar colors.
pub mod bar {
    use super::PackedRgba;

    /// Base shades cycled across un-highlighted bars.
    pub const GRADIENT: [PackedRgba; 3] = [
        PackedRgba::rgb(128, 128, 128),
        PackedRgba::rgb(160, 160, 160),
        PackedRgba::rgb(192, 192, 192),
    ];

    /// The index an algorithm just settled.
    pub const PRIMARY: PackedRgba = PackedRgba::rgb(96, 220, 130);
    /// The index displaced by the last step.
    pub const SECONDARY: PackedRgba = PackedRgba::rgb(235, 96, 96);
}

/// Layout paddings, in cells.
pub mod layout {
    /// Rows reserved above the chart for the header.
    pub const TOP_PAD: u16 = 4;
    /// Columns of padding on each side of the chart.
    pub const SIDE_PAD: u16 = 2;
}
