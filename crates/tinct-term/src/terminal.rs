// SPDX-License-Identifier: MIT
//
// Terminal queries: how wide is the screen we're printing to?
//
// Safety: the size query uses `unsafe` for ioctl (TIOCGWINSZ). It is the
// standard POSIX interface for terminal dimensions; there is no safe
// alternative in std. The unsafe block is minimal.
#![allow(unsafe_code)]
//
// When stdout is not a terminal (pipes, CI), the `COLUMNS` environment
// variable is consulted before giving up.

use std::env;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Width of the output terminal in columns.
///
/// Tries the terminal itself, then `$COLUMNS`. `None` when neither is
/// available.
#[must_use]
pub fn columns() -> Option<usize> {
    get_size()
        .map(|size| usize::from(size.cols))
        .or_else(|| parse_columns(env::var("COLUMNS").ok().as_deref()))
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok().filter(|&cols: &usize| cols > 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_columns_values() {
        assert_eq!(parse_columns(Some("120")), Some(120));
        assert_eq!(parse_columns(Some(" 80\n")), Some(80));
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("wide")), None);
        assert_eq!(parse_columns(None), None);
    }

    #[test]
    fn columns_is_positive_when_known() {
        if let Some(cols) = columns() {
            assert!(cols > 0);
        }
    }
}
