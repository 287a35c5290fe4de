// SPDX-License-Identifier: MIT
//
// Visual width of styled strings.
//
// Code blocks are padded to a common column width, which means measuring
// lines that already contain SGR sequences. Escape sequences occupy zero
// columns; everything else is measured with `unicode-width`, so CJK and
// emoji count as two columns.
//
// Recognized sequences:
//
//   CSI  ESC [ <params> <final byte 0x40..=0x7E>
//   OSC  ESC ] ... terminated by BEL or ESC \
//   ESC followed by any other single character

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove terminal escape sequences from `s`.
///
/// Borrows when there is nothing to strip.
#[must_use]
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ESC {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // Parameters and intermediates, up to the final byte.
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == BEL {
                        break;
                    }
                    if c == ESC && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    Cow::Owned(out)
}

/// Number of terminal columns `s` occupies once printed.
#[must_use]
pub fn visual_width(s: &str) -> usize {
    strip_ansi(s).width()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellColor, Style};

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed("hello")));
        assert_eq!(visual_width("hello"), 5);
    }

    #[test]
    fn sgr_is_zero_width() {
        let styled = Style::new().fg(CellColor::Rgb(1, 2, 3)).bold().paint("abc");
        assert_eq!(strip_ansi(&styled), "abc");
        assert_eq!(visual_width(&styled), 3);
    }

    #[test]
    fn osc_sequences_are_stripped() {
        let link = "\x1b]8;;https://example.com\x1b\\site\x1b]8;;\x07";
        assert_eq!(strip_ansi(link), "site");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(visual_width("日本"), 4);
        assert_eq!(visual_width("\x1b[1m日\x1b[22m"), 2);
    }

    #[test]
    fn empty_string() {
        assert_eq!(visual_width(""), 0);
        assert_eq!(visual_width("\x1b[0m\x1b[0m"), 0);
    }

    #[test]
    fn truncated_escape_does_not_panic() {
        assert_eq!(strip_ansi("ab\x1b["), "ab");
        assert_eq!(strip_ansi("ab\x1b"), "ab");
    }
}
