//! # tinct-highlight — source code in, styled terminal block out
//!
//! The pipeline for one call:
//!
//! ```text
//! code ──tokenizer──▶ Token tree ──render──▶ styled text ──format_block──▶ block
//!                                    ▲                          ▲
//!                         CompiledTheme (cached per theme) ─────┘
//! ```
//!
//! - **[`tokenizer`]** — `Tokenizer` trait and the tree-sitter backed default
//! - **[`token`]** — the token tree handed from tokenizer to renderer
//! - **[`render`]** — walks the tree, styling each node with its ancestors in view
//! - **[`block`]** — padding, line numbers, and the whole-block style
//! - **[`language`]** — file extension → language name
//! - **[`highlight`](mod@highlight)** — `Options`, `Highlighter`, and the
//!   `highlight` / `highlight_file` / `highlight_file_sync` entry points
//!
//! ```no_run
//! use tinct_highlight::{highlight, Options};
//!
//! let out = highlight("const x = 1", &Options::default().theme("github"))?;
//! print!("{out}");
//! # Ok::<(), tinct_highlight::Error>(())
//! ```

pub mod block;
pub mod error;
pub mod highlight;
pub mod language;
pub mod render;
pub mod token;
pub mod tokenizer;

pub use block::{format_block, BlockOptions};
pub use error::{Error, Result};
pub use highlight::{
    highlight, highlight_file, highlight_file_sync, Highlighter, Options, ThemeChoice,
    DEFAULT_LANGUAGE,
};
pub use language::detect_language;
pub use render::render;
pub use token::{Node, Token};
pub use tokenizer::{supported_languages, TokenizeError, Tokenizer, TreeSitterTokenizer};

/// The registry of built-in themes.
pub mod themes {
    use std::sync::Arc;

    use tinct_theme::Theme;

    pub use tinct_theme::builtin::DEFAULT_THEME as DEFAULT;

    /// A built-in theme by name (`prismDark` is accepted for `prism-dark`).
    #[must_use]
    pub fn get(name: &str) -> Option<Arc<Theme>> {
        tinct_theme::builtin::builtin_theme(name)
    }

    /// Names of every built-in theme.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        tinct_theme::builtin::builtin_names()
    }
}
