// SPDX-License-Identifier: MIT
//
// Style painter. Wraps strings in SGR sequences.
//
// A `Style` is an ordered stack of layers, each one an (open, close) pair of
// escape sequences. Painting a string emits every open code, the text, then
// every close code in reverse. Two details make nested styling work the way
// terminal users expect:
//
//   1. Inner close codes are followed by the outer layer's open code again.
//      `red("a" + blue("b") + "c")` keeps "c" red even though blue's close
//      sequence (SGR 39) resets the foreground to default.
//
//   2. Line breaks are wrapped: every `\n` is preceded by the full close
//      sequence and followed by the full open sequence, so each line of a
//      multi-line span carries its own styling. Background colors then stop
//      at the end of the line instead of bleeding into the next prompt.
//
// These are the same rules chalk applies, which is what highlighting themes
// ported from the web are tuned against.

use std::borrow::Cow;

use crate::ansi;
use crate::attr::Attr;
use crate::color::CellColor;

// ─── Layer ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct Layer {
    open: String,
    close: String,
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// A composable terminal style.
///
/// Built with chained calls; layers apply in the order they were added:
///
/// ```
/// use tinct_term::{CellColor, Style};
///
/// let comment = Style::new().hex("#d75fff").bg_ansi256(234).italic();
/// let painted = comment.paint("// hi");
/// assert!(painted.starts_with("\x1b[38;2;215;95;255m"));
/// assert!(painted.ends_with("\x1b[23m\x1b[49m\x1b[39m"));
///
/// assert_eq!(Style::new().fg(CellColor::RED).paint(""), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    layers: Vec<Layer>,
}

impl Style {
    /// A style with no layers. Painting with it returns the text unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// The full SGR reset, wrapped around the text on both sides.
    #[must_use]
    pub fn reset() -> Self {
        Self::new().layer(ansi::RESET.to_owned(), ansi::RESET.to_owned())
    }

    fn layer(mut self, open: String, close: String) -> Self {
        self.layers.push(Layer { open, close });
        self
    }

    // ── Colors ───────────────────────────────────────────────────────────

    /// Add a foreground color layer.
    #[must_use]
    pub fn fg(self, color: CellColor) -> Self {
        let mut open = String::new();
        // Writing into a String cannot fail.
        let _ = ansi::fg(&mut open, color);
        self.layer(open, ansi::FG_OFF.to_owned())
    }

    /// Add a background color layer.
    #[must_use]
    pub fn bg(self, color: CellColor) -> Self {
        let mut open = String::new();
        let _ = ansi::bg(&mut open, color);
        self.layer(open, ansi::BG_OFF.to_owned())
    }

    /// Foreground from a hex string. Invalid hex leaves the style unchanged.
    #[must_use]
    pub fn hex(self, hex: &str) -> Self {
        match CellColor::hex(hex) {
            Some(color) => self.fg(color),
            None => self,
        }
    }

    /// Background from a hex string. Invalid hex leaves the style unchanged.
    #[must_use]
    pub fn bg_hex(self, hex: &str) -> Self {
        match CellColor::hex(hex) {
            Some(color) => self.bg(color),
            None => self,
        }
    }

    /// Foreground from the xterm 256-color palette.
    #[must_use]
    pub fn ansi256(self, idx: u8) -> Self {
        self.fg(CellColor::Ansi256(idx))
    }

    /// Background from the xterm 256-color palette.
    #[must_use]
    pub fn bg_ansi256(self, idx: u8) -> Self {
        self.bg(CellColor::Ansi256(idx))
    }

    // ── Attributes ───────────────────────────────────────────────────────

    /// Add one layer per attribute flag in `attr`.
    #[must_use]
    pub fn attr(self, attr: Attr) -> Self {
        attr.iter().fold(self, |style, flag| {
            let mut open = String::new();
            let mut close = String::new();
            let _ = ansi::attr_on(&mut open, flag);
            let _ = ansi::attr_off(&mut close, flag);
            style.layer(open, close)
        })
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.attr(Attr::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.attr(Attr::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.attr(Attr::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.attr(Attr::UNDERLINE)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        self.attr(Attr::INVERSE)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.attr(Attr::STRIKETHROUGH)
    }

    /// Whether painting with this style is the identity.
    #[inline]
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.layers.is_empty()
    }

    // ── Painting ─────────────────────────────────────────────────────────

    /// Wrap `text` in this style's escape sequences.
    ///
    /// Empty text stays empty, so zero-width tokens never emit stray codes.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if self.layers.is_empty() || text.is_empty() {
            return text.to_owned();
        }

        let mut body = Cow::Borrowed(text);
        if text.contains('\x1b') {
            // Innermost layer first, so each close is re-opened by its own layer.
            for layer in self.layers.iter().rev() {
                if body.contains(layer.close.as_str()) {
                    let reopened = format!("{}{}", layer.close, layer.open);
                    body = Cow::Owned(body.replace(layer.close.as_str(), &reopened));
                }
            }
        }

        let open_all: String = self.layers.iter().map(|l| l.open.as_str()).collect();
        let close_all: String = self.layers.iter().rev().map(|l| l.close.as_str()).collect();

        if body.contains('\n') {
            body = Cow::Owned(encase_line_breaks(&body, &close_all, &open_all));
        }

        let mut out = String::with_capacity(open_all.len() + body.len() + close_all.len());
        out.push_str(&open_all);
        out.push_str(&body);
        out.push_str(&close_all);
        out
    }
}

/// Surround every line break with `close` before and `open` after.
///
/// `\r\n` pairs stay together.
fn encase_line_breaks(text: &str, close: &str, open: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut pieces = text.split('\n').peekable();
    while let Some(piece) = pieces.next() {
        if pieces.peek().is_none() {
            out.push_str(piece);
            break;
        }
        let (line, newline) = piece
            .strip_suffix('\r')
            .map_or((piece, "\n"), |line| (line, "\r\n"));
        out.push_str(line);
        out.push_str(close);
        out.push_str(newline);
        out.push_str(open);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
