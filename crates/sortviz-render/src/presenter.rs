#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! The Presenter transforms buffer diffs into minimal terminal output by
//! tracking the current terminal state and only emitting sequences when
//! changes are needed.
//!
//! # Design
//!
//! - **State tracking**: track current style and cursor to avoid redundant
//!   output
//! - **Run grouping**: use [`ChangeRun`]s to minimize cursor positioning
//! - **Single write**: buffer all output and flush once per frame
//! - **Synchronized output**: bracket each frame in DEC 2026 to prevent
//!   flicker on supporting terminals

use std::io::{self, BufWriter, Write};

use crate::ansi;
use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::diff::{BufferDiff, ChangeRun};

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Cached style state for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// State-tracked ANSI presenter.
pub struct Presenter<W: Write> {
    /// Buffered writer for efficient output.
    writer: BufWriter<W>,
    /// Current style state (None = unknown/reset).
    current_style: Option<CellStyle>,
    /// Current cursor position (None = unknown).
    cursor: Option<(u16, u16)>,
    /// Emit DEC 2026 synchronized-output brackets around each frame.
    sync_output: bool,
}

impl<W: Write> Presenter<W> {
    /// Create a new presenter over the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor: None,
            sync_output: true,
        }
    }

    /// Disable synchronized-output bracketing (used by capture tests).
    #[must_use]
    pub fn without_sync(mut self) -> Self {
        self.sync_output = false;
        self
    }

    /// Forget tracked terminal state.
    ///
    /// Called after anything else wrote to the terminal (e.g. a full-screen
    /// erase on resize) so the next frame re-emits from scratch.
    pub fn invalidate(&mut self) {
        self.current_style = None;
        self.cursor = None;
    }

    /// Erase the whole screen and invalidate tracked state.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        ansi::sgr_reset(&mut self.writer)?;
        ansi::erase_all(&mut self.writer)?;
        self.invalidate();
        self.writer.flush()
    }

    /// Present a frame using the given buffer and diff.
    ///
    /// 1. Begins synchronized output
    /// 2. Emits changed cells, run by run
    /// 3. Resets style (clean state for whatever writes next)
    /// 4. Ends synchronized output and flushes
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        if diff.is_empty() {
            return Ok(());
        }

        if self.sync_output {
            ansi::sync_begin(&mut self.writer)?;
        }

        for run in diff.runs() {
            self.emit_run(buffer, run)?;
        }

        ansi::sgr_reset(&mut self.writer)?;
        self.current_style = None;

        if self.sync_output {
            ansi::sync_end(&mut self.writer)?;
        }

        tracing::trace!(changes = diff.len(), "frame presented");
        self.writer.flush()
    }

    /// Emit one run: a single cursor move, then the cells left to right.
    fn emit_run(&mut self, buffer: &Buffer, run: ChangeRun) -> io::Result<()> {
        self.move_cursor_to(run.x0, run.y)?;
        for x in run.x0..=run.x1 {
            let cell = buffer.get_unchecked(x, run.y);
            self.emit_cell(cell)?;
        }
        Ok(())
    }

    /// Emit a single cell: style delta, then content.
    fn emit_cell(&mut self, cell: &Cell) -> io::Result<()> {
        self.emit_style_changes(cell)?;

        let ch = cell.ch.unwrap_or(' ');
        let mut buf = [0u8; 4];
        self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;

        // Character output advances the cursor one column.
        if let Some((x, y)) = self.cursor {
            self.cursor = Some((x + 1, y));
        }
        Ok(())
    }

    /// Emit style changes if the cell style differs from current.
    ///
    /// Reset-then-apply: simpler and more robust than incremental updates,
    /// and cheap because consecutive bar cells share a style.
    fn emit_style_changes(&mut self, cell: &Cell) -> io::Result<()> {
        let new_style = CellStyle::from_cell(cell);
        if self.current_style == Some(new_style) {
            return Ok(());
        }

        ansi::sgr_reset(&mut self.writer)?;
        if !new_style.fg.is_transparent() {
            ansi::sgr_fg_packed(&mut self.writer, new_style.fg)?;
        }
        if !new_style.bg.is_transparent() {
            ansi::sgr_bg_packed(&mut self.writer, new_style.bg)?;
        }
        if !new_style.attrs.is_empty() {
            ansi::sgr_flags(&mut self.writer, new_style.attrs)?;
        }

        self.current_style = Some(new_style);
        Ok(())
    }

    /// Move cursor to the specified position, skipping no-op moves.
    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        ansi::cup(&mut self.writer, y, x)?;
        self.cursor = Some((x, y));
        Ok(())
    }
}
