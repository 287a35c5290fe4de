//! Port of the xonokai theme
//! <https://github.com/PrismJS/prism-themes/blob/fe8d8fd7b80fb7d6bc0ed1a7b53009e5632701d7/themes/prism-xonokai.css>.

use tinct_term::Style;

use crate::theme::Theme;

pub(super) fn theme() -> Theme {
    Theme::new()
        .with("_", Style::new().hex("#76d9e6").bg_hex("#2a2a2a"))
        .with("namespace, lineNumber", Style::new().dim())
        .with(
            "comment, prolog, doctype, cdata, comment.documentation",
            Style::new().hex("#6f705e"),
        )
        .with("operator, boolean, number, constant.builtin", Style::new().hex("#a77afe"))
        .with(
            "attr-name, string, entity, url, language-css string, style string, \
             tag attr-value, string.special, attribute string",
            Style::new().hex("#e6d06c"),
        )
        .with(
            "selector, inserted, tag attr-name, attribute",
            Style::new().hex("#a6e22d"),
        )
        .with(
            "atrule, attr-value, keyword, important, deleted, tag",
            Style::new().hex("#ef3b7d"),
        )
        .with(
            "regex, statement, style, script, script keyword",
            Style::new().hex("#76d9e6"),
        )
        .with("placeholder, variable.builtin", Style::new().hex("#fff"))
        .with("important, statement, bold", Style::new().bold())
        .with(
            "punctuation, punctuation.bracket, punctuation.delimiter",
            Style::new().hex("#bebec5"),
        )
        .with("italic", Style::new().italic())
}
