use serde::{Deserialize, Serialize};

/// A 24-bit RGB color, used both for resolved palette entries and direct
/// "true color" SGR sequences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Construct from component values, clamping each to `0..=255`.
    ///
    /// The inputs are `i32` so callers can pass unclamped SGR parameters
    /// directly (`CSI 38;2;r;g;b m` parameters are not range-checked by
    /// the parser).
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }
}

/// A single grid cell: one codepoint plus the style it is painted with.
///
/// Cells are value-typed and copy-on-write: every mutation produces a new
/// `Cell`, there is no in-place aliasing between cells in different rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl Cell {
    /// The blank cell: a space with no colors or attributes set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ch == ' ' && self.fg.is_none() && self.bg.is_none() && !self.bold && !self.italic && !self.underline
    }

    /// Clone `self` as a style template, overwriting only `ch`.
    ///
    /// This is how `current_style` (a full `Cell` whose `ch` is irrelevant)
    /// is turned into the cell actually written to the buffer on `Print`.
    pub fn with_char(&self, ch: char) -> Self {
        Cell { ch, ..*self }
    }

    /// Reset to an unstyled cell, keeping no attribute (used by SGR 0).
    pub fn reset_style(&mut self) {
        *self = Cell::empty();
    }
}
