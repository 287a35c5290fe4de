// SPDX-License-Identifier: MIT
//
// tinct-term — terminal styling primitives for tinct.
//
// Everything the highlighter needs to know about the terminal lives here:
// SGR escape encoding for colors and attributes, a chalk-style `Style`
// painter that wraps strings in escape sequences (and survives nesting),
// visual-width measurement that treats escape sequences as zero-width, and
// a terminal column query for sizing code blocks.
//
// The theme engine never depends on the contents of this crate directly.
// It only sees `Style` after conversion into an opaque `StyleFn`.

pub mod ansi;
pub mod attr;
pub mod color;
pub mod style;
pub mod terminal;
pub mod width;

pub use attr::Attr;
pub use color::CellColor;
pub use style::Style;
pub use width::{strip_ansi, visual_width};
