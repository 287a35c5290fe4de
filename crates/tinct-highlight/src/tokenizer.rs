//! Tokenization via tree-sitter.
//!
//! The renderer consumes a [`Token`] tree and nothing else; the
//! [`Tokenizer`] trait is the seam. [`TreeSitterTokenizer`] fills it with
//! bundled tree-sitter grammars and their highlight queries.
//!
//! # From captures to a token tree
//!
//! 1. Parse the source and run the grammar's highlight query over the whole
//!    tree. Every capture is a byte span with a name (`keyword`,
//!    `punctuation.bracket`, …).
//! 2. Sort spans by start ascending, then end descending, so an enclosing
//!    span precedes the spans inside it. When several patterns capture the
//!    same range, the one listed last in the query wins: queries list the
//!    general pattern (`(identifier) @variable`) first and refine it below.
//! 3. Walk the sorted spans, nesting each inside the innermost open span
//!    that contains it. Spans that straddle a boundary are dropped. Gaps
//!    become plain text leaves.
//!
//! A `string` with an `escape` inside therefore becomes a `string` node
//! containing an `escape` node, and a theme can target `string escape`.

use std::sync::OnceLock;

use streaming_iterator::StreamingIterator;
use tracing::{debug, trace};
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

use crate::token::Token;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures inside a tokenizer.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("no grammar registered for language `{0}`")]
    UnknownLanguage(String),

    #[error("incompatible {language} grammar")]
    Grammar {
        language: &'static str,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("invalid {language} highlight query")]
    Query {
        language: &'static str,
        #[source]
        source: tree_sitter::QueryError,
    },

    #[error("tree-sitter did not produce a syntax tree")]
    Parse,
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Turns source text into a token tree.
pub trait Tokenizer {
    /// Tokenize `code` as `language`.
    ///
    /// # Errors
    ///
    /// Implementations decide what counts as an unknown language or a
    /// failed parse; callers propagate the error unchanged.
    fn tokenize<'src>(&self, code: &'src str, language: &str) -> Result<Token<'src>, TokenizeError>;
}

// ---------------------------------------------------------------------------
// Grammar registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GrammarKind {
    Tsx,
    TypeScript,
    JavaScript,
    Html,
    Rust,
    Python,
}

impl GrammarKind {
    const ALL: [Self; 6] = [
        Self::Tsx,
        Self::TypeScript,
        Self::JavaScript,
        Self::Html,
        Self::Rust,
        Self::Python,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "tsx" => Self::Tsx,
            "typescript" | "ts" => Self::TypeScript,
            "javascript" | "js" | "jsx" => Self::JavaScript,
            "html" => Self::Html,
            "rust" | "rs" => Self::Rust,
            "python" | "py" => Self::Python,
            _ => return None,
        })
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Rust => "rust",
            Self::Python => "python",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    fn language(self) -> Language {
        match self {
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Html => tree_sitter_html::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Highlight query source. TypeScript builds on the JavaScript query,
    /// and the JSX flavours add the JSX patterns.
    fn query_source(self) -> String {
        match self {
            Self::Tsx => [
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::JSX_HIGHLIGHT_QUERY,
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
            ]
            .join("\n"),
            Self::TypeScript => [
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
            ]
            .join("\n"),
            Self::JavaScript => [
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::JSX_HIGHLIGHT_QUERY,
            ]
            .join("\n"),
            Self::Html => tree_sitter_html::HIGHLIGHTS_QUERY.to_owned(),
            Self::Rust => tree_sitter_rust::HIGHLIGHTS_QUERY.to_owned(),
            Self::Python => tree_sitter_python::HIGHLIGHTS_QUERY.to_owned(),
        }
    }

    fn load(self) -> Result<Grammar, TokenizeError> {
        let language = self.language();
        let query = Query::new(&language, &self.query_source()).map_err(|source| {
            TokenizeError::Query {
                language: self.name(),
                source,
            }
        })?;
        debug!(
            language = self.name(),
            captures = query.capture_names().len(),
            "loaded grammar"
        );
        Ok(Grammar { language, query })
    }
}

/// A grammar with its compiled highlight query.
struct Grammar {
    language: Language,
    query: Query,
}

/// Language names accepted by [`TreeSitterTokenizer`], canonical form.
#[must_use]
pub fn supported_languages() -> Vec<&'static str> {
    GrammarKind::ALL.iter().map(|kind| kind.name()).collect()
}

// ---------------------------------------------------------------------------
// TreeSitterTokenizer
// ---------------------------------------------------------------------------

/// Tokenizer backed by the bundled tree-sitter grammars.
///
/// Grammars and their queries are compiled on first use and kept for the
/// tokenizer's lifetime. A fresh `Parser` is created per call, which keeps
/// the tokenizer `Sync`.
#[derive(Default)]
pub struct TreeSitterTokenizer {
    grammars: [OnceLock<Grammar>; GrammarKind::ALL.len()],
}

impl TreeSitterTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn grammar(&self, kind: GrammarKind) -> Result<&Grammar, TokenizeError> {
        let cell = &self.grammars[kind.index()];
        if let Some(grammar) = cell.get() {
            return Ok(grammar);
        }
        let loaded = kind.load()?;
        Ok(cell.get_or_init(|| loaded))
    }

    fn parse(grammar: &Grammar, kind: GrammarKind, code: &str) -> Result<Tree, TokenizeError> {
        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language)
            .map_err(|source| TokenizeError::Grammar {
                language: kind.name(),
                source,
            })?;
        parser.parse(code, None).ok_or(TokenizeError::Parse)
    }
}

impl Tokenizer for TreeSitterTokenizer {
    fn tokenize<'src>(&self, code: &'src str, language: &str) -> Result<Token<'src>, TokenizeError> {
        let kind = GrammarKind::from_name(language)
            .ok_or_else(|| TokenizeError::UnknownLanguage(language.to_owned()))?;
        let grammar = self.grammar(kind)?;
        let tree = Self::parse(grammar, kind, code)?;

        let spans = collect_spans(&grammar.query, &tree, code);
        trace!(language = kind.name(), spans = spans.len(), "tokenized");

        let mut next = 0;
        let children = nest(code, &spans, &mut next, 0, code.len());
        Ok(Token::from_children(children))
    }
}

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span<'q> {
    start: usize,
    end: usize,
    pattern: usize,
    name: &'q str,
}

/// Every non-empty capture, sorted for nesting with duplicate ranges removed.
fn collect_spans<'q>(query: &'q Query, tree: &Tree, code: &str) -> Vec<Span<'q>> {
    let names = query.capture_names();
    let mut cursor = QueryCursor::new();
    let mut spans = Vec::new();

    let mut captures = cursor.captures(query, tree.root_node(), code.as_bytes());
    while let Some((m, capture_index)) = captures.next() {
        let Some(capture) = m.captures.get(*capture_index) else {
            continue;
        };
        let Some(&name) = names.get(capture.index as usize) else {
            continue;
        };
        let (start, end) = (capture.node.start_byte(), capture.node.end_byte());
        if start < end && end <= code.len() {
            spans.push(Span {
                start,
                end,
                pattern: m.pattern_index,
                name,
            });
        }
    }

    order_spans(spans)
}

/// Sort spans so each enclosing span precedes its contents, and keep one
/// span per range: the one from the latest query pattern.
fn order_spans(mut spans: Vec<Span<'_>>) -> Vec<Span<'_>> {
    spans.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(b.pattern.cmp(&a.pattern))
    });
    spans.dedup_by(|later, first| later.start == first.start && later.end == first.end);
    spans
}

/// Build the children of the byte range `start..end`, consuming spans from
/// `*next` onwards.
fn nest<'src>(
    code: &'src str,
    spans: &[Span<'_>],
    next: &mut usize,
    start: usize,
    end: usize,
) -> Vec<Token<'src>> {
    let mut children = Vec::new();
    let mut cursor = start;

    while let Some(span) = spans.get(*next) {
        if span.start >= end {
            break;
        }
        *next += 1;
        if span.start < cursor || span.end > end {
            // Straddles a sibling or the parent boundary.
            continue;
        }
        if span.start > cursor {
            children.push(Token::Text(slice(code, cursor, span.start)));
        }
        let inner = nest(code, spans, next, span.start, span.end);
        children.push(Token::node(span.name, Token::from_children(inner)));
        cursor = span.end;
    }

    if cursor < end {
        children.push(Token::Text(slice(code, cursor, end)));
    }
    children
}

fn slice(code: &str, start: usize, end: usize) -> &str {
    code.get(start..end).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
