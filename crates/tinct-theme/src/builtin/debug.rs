//! Shows which token names are in use.
//!
//! Every tag the bundled grammars emit (plus the nested chains they produce)
//! wraps its text in `<selector>…</selector>`, so the output spells out the
//! token tree. The trailing `a`–`h` entries repeat selectors on purpose:
//! they merge into multi-function rules and keep that path exercised.

use crate::theme::{StyleFn, Theme};

const TAGS: &str = "
attribute
attribute string
comment
comment.documentation
constant
constant.builtin
constructor
embedded
embedded punctuation.special
embedded variable
escape
function
function.builtin
function.macro
function.method
keyword
label
module
number
operator
property
punctuation.bracket
punctuation.delimiter
punctuation.special
string
string embedded
string escape
string.special
string.special.key
tag
tag.builtin
type
type.builtin
variable
variable.builtin
variable.member
variable.parameter
";

fn marker(name: &str) -> StyleFn {
    let name = name.to_owned();
    StyleFn::new(move |s| format!("<{name}>{s}</{name}>"))
}

pub(super) fn theme() -> Theme {
    let mut theme: Theme = TAGS
        .trim()
        .lines()
        .map(|name| (name, marker(name)))
        .collect();

    theme.set("a c d e f, f", vec![StyleFn::identity()]);
    theme.set("a b c d e, a c d e f, f", vec![StyleFn::identity()]);
    theme.set("a b c d e, a c d e f, f, g", vec![StyleFn::identity()]);
    theme.set("a b c d e, a c d e f, f, g, h", StyleFn::identity());
    theme
}
