//! Token tree → styled string.

use tinct_theme::CompiledTheme;

use crate::token::Token;

/// Render a token tree with `theme`, starting from an empty ancestor stack.
#[must_use]
pub fn render(token: &Token<'_>, theme: &CompiledTheme) -> String {
    let mut stack = Vec::new();
    let mut out = String::new();
    render_into(token, theme, &mut stack, &mut out);
    out
}

/// Append the rendering of `token` to `out`. `stack` holds the kinds of the
/// enclosing nodes, outermost first, and is restored before returning.
fn render_into<'t>(
    token: &'t Token<'_>,
    theme: &CompiledTheme,
    stack: &mut Vec<&'t str>,
    out: &mut String,
) {
    match token {
        Token::Text(text) => out.push_str(text),
        Token::Stream(children) => {
            for child in children {
                render_into(child, theme, stack, out);
            }
        }
        Token::Node(node) => {
            stack.push(&node.kind);
            let mut inner = String::new();
            render_into(&node.content, theme, stack, &mut inner);
            stack.pop();
            // The node's own kind is the lookup target, not an ancestor.
            out.push_str(&theme.apply(&inner, &node.kind, stack.as_slice()));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
