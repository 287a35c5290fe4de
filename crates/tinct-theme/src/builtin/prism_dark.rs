//! Port of the `prism-dark` theme
//! <https://github.com/PrismJS/prism/blob/867804573562ef0ac5acf470420b97e43488ccde/themes/prism-dark.css>.
//!
//! A few colors are nudged for readability; some terminals render
//! low-contrast pairs badly.

use tinct_term::{CellColor, Style};

use crate::theme::Theme;

pub(super) fn theme() -> Theme {
    Theme::new()
        .with("_", Style::new().fg(CellColor::WHITE).bg_hex("#231E19"))
        .with("lineNumber", Style::new().dim())
        .with(
            "comment, prolog, doctype, cdata, comment.documentation",
            Style::new().hex("#997F66"),
        )
        .with(
            "punctuation, namespace, punctuation.bracket, punctuation.delimiter",
            Style::new().dim(),
        )
        .with(
            "property,tag,boolean,number,constant,symbol,constant.builtin",
            Style::new().hex("#9E93D1"),
        )
        .with(
            "selector,attr-name,string,char,builtin,inserted,attribute,type.builtin",
            Style::new().hex("#BCE051"),
        )
        .with(
            "operator,entity,url,language-css string,style string,variable.builtin,escape",
            Style::new().hex("#F4B73D"),
        )
        .with("atrule,attr-value,keyword", Style::new().hex("#D1939E"))
        .with("regex,important,string.special", Style::new().hex("#e90"))
        .with("important,bold", Style::new().bold())
        .with("italic", Style::new().italic())
        .with("deleted", Style::new().fg(CellColor::RED))
}
