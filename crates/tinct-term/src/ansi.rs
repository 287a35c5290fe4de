// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write SGR sequences to any `impl fmt::Write`. No
// state, and no decisions about nesting; the `Style` painter owns those.
// This module just knows the byte-level encoding of every code we emit.
//
// Every "on" sequence has a matching "off" constant. The painter relies on
// the off sequences being exact strings so it can find them inside already
// styled text.

use std::fmt::{self, Write};

use crate::attr::Attr;
use crate::color::CellColor;

/// Reset all SGR attributes to terminal defaults (SGR 0).
pub const RESET: &str = "\x1b[0m";

/// Restore the default foreground color (SGR 39).
pub const FG_OFF: &str = "\x1b[39m";

/// Restore the default background color (SGR 49).
pub const BG_OFF: &str = "\x1b[49m";

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// Uses compact SGR codes for standard colors (30-37, 90-97), the 256-color
/// extended format for palette indices 16-255, and 24-bit `TrueColor` for RGB.
pub fn fg(w: &mut impl Write, color: CellColor) -> fmt::Result {
    match color {
        CellColor::Default => w.write_str(FG_OFF),
        CellColor::Ansi256(idx) => {
            if idx < 8 {
                write!(w, "\x1b[{}m", 30 + u16::from(idx))
            } else if idx < 16 {
                write!(w, "\x1b[{}m", 82 + u16::from(idx))
            } else {
                write!(w, "\x1b[38;5;{idx}m")
            }
        }
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Set the background color.
///
/// Same encoding strategy as [`fg`] but with BG-specific SGR codes
/// (40–47, 100–107, 48;5;N, 48;2;R;G;B).
pub fn bg(w: &mut impl Write, color: CellColor) -> fmt::Result {
    match color {
        CellColor::Default => w.write_str(BG_OFF),
        CellColor::Ansi256(idx) => {
            if idx < 8 {
                write!(w, "\x1b[{}m", 40 + u16::from(idx))
            } else if idx < 16 {
                write!(w, "\x1b[{}m", 92 + u16::from(idx))
            } else {
                write!(w, "\x1b[48;5;{idx}m")
            }
        }
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit the "on" sequence for a single attribute.
///
/// Does nothing for an empty or combined flag set; callers emit one
/// attribute per layer.
pub fn attr_on(w: &mut impl Write, attr: Attr) -> fmt::Result {
    match attr.sgr_on() {
        Some(code) => write!(w, "\x1b[{code}m"),
        None => Ok(()),
    }
}

/// Emit the "off" sequence for a single attribute.
pub fn attr_off(w: &mut impl Write, attr: Attr) -> fmt::Result {
    match attr.sgr_off() {
        Some(code) => write!(w, "\x1b[{code}m"),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
