//! Block layout: padding, line-number gutter, and the whole-block style.
//!
//! Every line is padded out to a common width so a background colour on the
//! `_` rule paints a clean rectangle. The width is the longest line that
//! still fits the terminal; longer lines overflow rather than raising the
//! width of every other line, and are never truncated.

use tinct_term::{terminal, visual_width};
use tinct_theme::{CompiledTheme, BLOCK_TAG, LINE_NUMBER_TAG};

/// Width assumed when the terminal cannot be measured.
pub const FALLBACK_WIDTH: usize = 80;

/// Layout knobs for [`format_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockOptions {
    /// Floor for the block's column width.
    pub min_width: usize,
    /// Ceiling for the block's column width. `None` means the terminal
    /// width, or [`FALLBACK_WIDTH`] when that is unknown.
    pub max_width: Option<usize>,
    /// Spaces on each side of every line.
    pub padding: usize,
    /// Prefix each line with its 1-based number.
    pub line_numbers: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            min_width: 0,
            max_width: None,
            padding: 1,
            line_numbers: false,
        }
    }
}

impl BlockOptions {
    fn resolved_max_width(&self) -> usize {
        self.max_width
            .or_else(terminal::columns)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

/// Lay out already-highlighted `code` as a padded block and apply the `_`
/// style to the result.
///
/// One trailing `\n` is stripped first, so code with or without a final
/// newline lays out the same. The output always ends with exactly one `\n`
/// inside the block style.
#[must_use]
pub fn format_block(code: &str, theme: &CompiledTheme, options: &BlockOptions) -> String {
    let BlockOptions {
        min_width,
        padding,
        line_numbers,
        ..
    } = *options;
    let max_width = options.resolved_max_width();

    let code = code.strip_suffix('\n').unwrap_or(code);
    let lines: Vec<&str> = code.split('\n').collect();
    let widths: Vec<usize> = lines.iter().map(|line| visual_width(line)).collect();

    let digits = if line_numbers { digit_count(lines.len()) } else { 0 };
    let reserved = digits + 2 * padding;
    let target = widths
        .iter()
        .copied()
        .filter(|&width| width + reserved < max_width)
        .fold(min_width, usize::max);

    let no_stack: &[&str] = &[];
    let mut out = String::with_capacity(code.len() + lines.len() * (reserved + 1));
    for (i, (line, width)) in lines.iter().zip(&widths).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_spaces(&mut out, padding);
        if line_numbers {
            let gutter = format!("{:>digits$} ", i + 1);
            out.push_str(&theme.apply(&gutter, LINE_NUMBER_TAG, no_stack));
        }
        out.push_str(line);
        push_spaces(&mut out, (target + padding).saturating_sub(*width));
    }
    out.push('\n');

    theme.apply(&out, BLOCK_TAG, no_stack)
}

/// Decimal digits needed to print `n`.
const fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinct_term::Style;
    use tinct_theme::{compile_theme, StyleFn, Theme};

    /// A theme whose block style is the identity, so output is plain text.
    fn bare() -> CompiledTheme {
        compile_theme(&Theme::new().with(BLOCK_TAG, StyleFn::identity()))
    }

    fn opts(max_width: usize) -> BlockOptions {
        BlockOptions {
            max_width: Some(max_width),
            ..BlockOptions::default()
        }
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(12), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn pads_to_longest_line() {
        let out = format_block("ab\nabcd\n", &bare(), &opts(80));
        assert_eq!(out, " ab   \n abcd \n");
    }

    #[test]
    fn trailing_newline_is_optional() {
        let theme = bare();
        assert_eq!(
            format_block("x\ny", &theme, &opts(80)),
            format_block("x\ny\n", &theme, &opts(80))
        );
    }

    #[test]
    fn only_one_trailing_newline_is_stripped() {
        let out = format_block("x\n\n", &bare(), &opts(80));
        assert_eq!(out, " x \n   \n");
    }

    #[test]
    fn min_width_is_a_floor() {
        let options = BlockOptions {
            min_width: 5,
            ..opts(80)
        };
        assert_eq!(format_block("ab", &bare(), &options), " ab    \n");
    }

    #[test]
    fn zero_padding() {
        let options = BlockOptions {
            padding: 0,
            ..opts(80)
        };
        assert_eq!(format_block("a\nbcd", &bare(), &options), "a  \nbcd\n");
    }

    #[test]
    fn overlong_lines_do_not_widen_the_block() {
        // 10 + 2 padding is not under 12, so the long line is ignored for
        // the width and left untruncated.
        let out = format_block("abc\n0123456789", &bare(), &opts(12));
        assert_eq!(out, " abc \n 0123456789\n");
    }

    #[test]
    fn twelve_lines_get_two_digit_gutters() {
        let code = vec!["x"; 12].join("\n");
        let options = BlockOptions {
            line_numbers: true,
            ..opts(80)
        };
        let out = format_block(&code, &bare(), &options);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[2], "  3 x ");
        assert_eq!(lines[11], " 12 x ");
    }

    #[test]
    fn gutter_uses_line_number_style() {
        let theme = Theme::new()
            .with(BLOCK_TAG, StyleFn::identity())
            .with(LINE_NUMBER_TAG, StyleFn::new(|s| format!("[{s}]")));
        let options = BlockOptions {
            line_numbers: true,
            ..opts(80)
        };
        let out = format_block("a\nb", &compile_theme(&theme), &options);
        assert_eq!(out, " [1 ]a \n [2 ]b \n");
    }

    #[test]
    fn styled_text_measures_by_visible_width() {
        let red = Style::new().fg(tinct_term::CellColor::RED).paint("ab");
        let code = format!("{red}\nabcd");
        let out = format_block(&code, &bare(), &opts(80));
        assert_eq!(out, format!(" {red}   \n abcd \n"));
    }

    #[test]
    fn block_style_wraps_everything() {
        let theme = Theme::new().with(BLOCK_TAG, StyleFn::new(|s| format!("<{s}>")));
        let out = format_block("a", &compile_theme(&theme), &opts(80));
        assert_eq!(out, "< a \n>");
    }

    #[test]
    fn empty_code_is_one_blank_line() {
        assert_eq!(format_block("", &bare(), &opts(80)), "  \n");
    }
}
