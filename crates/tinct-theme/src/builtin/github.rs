//! Port of the GHColors theme
//! <https://github.com/PrismJS/prism-themes/blob/057c2a4430d78268528e65ba92860703c9cb56d8/themes/prism-ghcolors.css>.

use tinct_term::Style;

use crate::theme::Theme;

pub(super) fn theme() -> Theme {
    Theme::new()
        .with("_", Style::new().hex("#393A34").bg_hex("#fff"))
        .with("lineNumber", Style::new().dim())
        .with(
            "comment, prolog, doctype, cdata, comment.documentation",
            Style::new().hex("#999988").italic(),
        )
        .with("namespace", Style::new().dim())
        .with("string, attr-value, string.special", Style::new().hex("#e3116c"))
        .with(
            "punctuation, operator, punctuation.bracket, punctuation.delimiter",
            Style::new().hex("#393A34"),
        )
        .with(
            "entity, url, symbol, number, boolean, variable.builtin, constant, property, \
             regex, inserted, constant.builtin, escape",
            Style::new().hex("#36acaa"),
        )
        .with(
            "atrule, keyword, attr-name, attribute, language-autohotkey selector",
            Style::new().hex("#00a4db"),
        )
        .with(
            "function,deleted,function.method,function.macro,language-autohotkey tag",
            Style::new().hex("#9a050f"),
        )
        .with(
            "tag, selector,language-autohotkey keyword",
            Style::new().hex("#00009f"),
        )
        .with("important, function, bold", Style::new().bold())
        .with("italic", Style::new().italic())
}
