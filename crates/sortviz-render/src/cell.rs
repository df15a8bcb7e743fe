#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The `Cell` is the fundamental unit of the terminal grid: one character
//! plus foreground/background colors and style flags. Bar glyphs and ASCII
//! header text never need multi-codepoint clusters, so content is a plain
//! `char` (an empty cell renders as a space).

use bitflags::bitflags;

/// Packed RGBA color: `0xRRGGBBAA`.
///
/// Alpha is binary in practice: 0 means "terminal default", anything else
/// is emitted as a true-color SGR sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (terminal default).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether this color defers to the terminal default.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

impl core::fmt::Debug for PackedRgba {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PackedRgba(#{:02x}{:02x}{:02x}/{:02x})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

bitflags! {
    /// Style attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// A single terminal cell.
///
/// # Default
///
/// The default cell is empty (renders as a space) with transparent
/// foreground/background and no style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character content. `None` means empty (space on output).
    pub ch: Option<char>,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// An empty default cell.
    pub const EMPTY: Self = Self {
        ch: None,
        fg: PackedRgba::TRANSPARENT,
        bg: PackedRgba::TRANSPARENT,
        attrs: StyleFlags::empty(),
    };

    /// Create a cell from a character with default styling.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch: Some(ch),
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    /// Builder: set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set the style flags.
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Check if this cell is empty (no character content).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ch.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
