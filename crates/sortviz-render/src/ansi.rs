#![forbid(unsafe_code)]

//! Raw ANSI escape emission.
//!
//! Small write helpers for the handful of sequences the presenter needs.
//! All cursor positions are 0-indexed at this API; the wire format is
//! 1-indexed.

use std::io::{self, Write};

use crate::cell::{PackedRgba, StyleFlags};

/// Reset all SGR attributes (`CSI 0 m`).
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Write SGR for a true-color foreground.
pub fn sgr_fg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Write SGR for a true-color background.
pub fn sgr_bg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset the foreground to the terminal default (`CSI 39 m`).
pub fn sgr_fg_default<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[39m")
}

/// Reset the background to the terminal default (`CSI 49 m`).
pub fn sgr_bg_default<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[49m")
}

/// Write SGR for a [`PackedRgba`] foreground, honoring transparency.
pub fn sgr_fg_packed<W: Write>(w: &mut W, color: PackedRgba) -> io::Result<()> {
    if color.is_transparent() {
        return sgr_fg_default(w);
    }
    sgr_fg_rgb(w, color.r(), color.g(), color.b())
}

/// Write SGR for a [`PackedRgba`] background, honoring transparency.
pub fn sgr_bg_packed<W: Write>(w: &mut W, color: PackedRgba) -> io::Result<()> {
    if color.is_transparent() {
        return sgr_bg_default(w);
    }
    sgr_bg_rgb(w, color.r(), color.g(), color.b())
}

/// Write SGR enable sequences for each set style flag.
pub fn sgr_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    if flags.contains(StyleFlags::BOLD) {
        w.write_all(b"\x1b[1m")?;
    }
    if flags.contains(StyleFlags::DIM) {
        w.write_all(b"\x1b[2m")?;
    }
    if flags.contains(StyleFlags::ITALIC) {
        w.write_all(b"\x1b[3m")?;
    }
    if flags.contains(StyleFlags::UNDERLINE) {
        w.write_all(b"\x1b[4m")?;
    }
    if flags.contains(StyleFlags::REVERSE) {
        w.write_all(b"\x1b[7m")?;
    }
    Ok(())
}

/// Cursor position (`CSI row;col H`), 0-indexed arguments.
pub fn cup<W: Write>(w: &mut W, row: u16, col: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row as u32 + 1, col as u32 + 1)
}

/// Erase the entire screen (`CSI 2 J`).
pub fn erase_all<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Begin synchronized output (`CSI ? 2026 h`).
///
/// Terminals without DEC 2026 support ignore the sequence.
pub fn sync_begin<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End synchronized output (`CSI ? 2026 l`).
pub fn sync_end<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}
