//! The token tree handed from a tokenizer to the renderer.
//!
//! Leaves borrow their text from the source; nodes own their tag. The
//! renderer only ever reads a tree.

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// Unstyled source text.
    Text(&'src str),
    /// A tagged span whose content may nest further tokens.
    Node(Node<'src>),
    /// A sequence of sibling tokens.
    Stream(Vec<Token<'src>>),
}

/// A tagged span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    /// Token category, e.g. `keyword` or `punctuation.bracket`.
    pub kind: String,
    pub content: Box<Token<'src>>,
}

impl<'src> Token<'src> {
    /// A tagged node wrapping `content`.
    pub fn node(kind: impl Into<String>, content: Token<'src>) -> Self {
        Self::Node(Node {
            kind: kind.into(),
            content: Box::new(content),
        })
    }

    /// Collapse a list of siblings: one child stands alone, otherwise a
    /// stream.
    #[must_use]
    pub fn from_children(mut children: Vec<Self>) -> Self {
        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        Self::Stream(children)
    }

    /// Concatenated source text of every leaf, without styling.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Node(node) => node.content.collect_text(out),
            Self::Stream(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_child_is_not_wrapped() {
        assert_eq!(Token::from_children(vec![Token::Text("x")]), Token::Text("x"));
    }

    #[test]
    fn several_children_form_a_stream() {
        let token = Token::from_children(vec![Token::Text("a"), Token::Text("b")]);
        assert!(matches!(token, Token::Stream(ref c) if c.len() == 2));
        assert_eq!(Token::from_children(Vec::new()), Token::Stream(Vec::new()));
    }

    #[test]
    fn text_flattens_the_tree() {
        let tree = Token::Stream(vec![
            Token::node("keyword", Token::Text("let")),
            Token::Text(" x = "),
            Token::node(
                "string",
                Token::Stream(vec![
                    Token::Text("\"a"),
                    Token::node("escape", Token::Text("\\n")),
                    Token::Text("\""),
                ]),
            ),
        ]);
        assert_eq!(tree.text(), "let x = \"a\\n\"");
    }
}
