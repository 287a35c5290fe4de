//! Inspired by the vim Moria color scheme
//! <https://github.com/vim-scripts/moria>.
//!
//! Vim and tree-sitter label program tokens differently, so this is a
//! loose port rather than a faithful one.

use tinct_term::Style;

use crate::theme::Theme;

fn normal() -> Style {
    Style::new().ansi256(252).bg_ansi256(234)
}

fn literal() -> Style {
    Style::new().ansi256(113).bg_ansi256(234)
}

pub(super) fn theme() -> Theme {
    Theme::new()
        .with("_", normal())
        .with("lineNumber", Style::new().hex("#8fa5d1"))
        .with(
            "punctuation, punctuation.bracket, punctuation.delimiter",
            Style::new().hex("#93CDFF"),
        )
        .with("prolog, doctype, cdata", Style::new().dim().bold())
        .with("interpolation rest", normal())
        .with(
            "entity, url, symbol, boolean, number, regex, string, attr-name, \
             template-string, string.special, constant.builtin, escape, attribute",
            literal(),
        )
        .with("template-string interpolation, string embedded", normal())
        .with(
            "template-string interpolation-punctuation, embedded punctuation.special",
            Style::new().hex("#d7af87"),
        )
        .with(
            "builtin, variable.builtin, function.builtin, type.builtin",
            Style::new().hex("#F67C4F"),
        )
        .with(
            "comment, comment.documentation",
            Style::new().hex("#d75fff").bg_ansi256(234).italic(),
        )
        .with("keyword, string-property", Style::new().hex("#79c0ff"))
}
