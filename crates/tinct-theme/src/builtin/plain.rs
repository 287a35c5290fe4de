//! No styling: only the block reset applies.
//!
//! Padding and line numbers still work when requested.

use crate::theme::Theme;

pub(super) const fn theme() -> Theme {
    Theme::new()
}
