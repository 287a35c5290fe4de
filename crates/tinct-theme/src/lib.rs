//! # tinct-theme — cascading theme engine
//!
//! Turns a [`Theme`] (CSS-like selectors mapped to styling functions) into a
//! [`CompiledTheme`] that answers one question fast: *given a token's tag and
//! the tags of everything enclosing it, what does the token look like?*
//!
//! # Architecture
//!
//! ```text
//! Theme  { "keyword": S1, "class-name keyword, tag keyword": S2, ... }
//!     │
//!     ▼
//! selector.rs: "a b, c"  →  [["a", "b"], ["c"]]
//!     │
//!     ▼
//! compile.rs:  tag → [(ancestor chain, styles), ...]   (+ `_` fallback)
//!     │
//!     ▼
//! resolve.rs:  filter by subsequence match, stable-sort by chain length,
//!              apply most-specific innermost
//! ```
//!
//! [`ThemeCache`] memoizes compilation per theme *identity* (the `Arc`), and
//! [`builtin`] holds the named themes.
//!
//! # Selector semantics
//!
//! A selector is a comma-separated list of groups. Each group is a
//! whitespace-separated chain `ancestor… target`. A rule applies to a token
//! whose tag equals the target when every ancestor appears, in order, among
//! the token's enclosing tags. Longer chains win. It is not a CSS engine:
//! no classes, attributes, pseudo-classes, or child combinators.
//!
//! The tag `_` styles the whole block, and `lineNumber` styles the gutter.

pub mod builtin;
pub mod cache;
pub mod compile;
pub mod resolve;
pub mod selector;
pub mod theme;

pub use cache::ThemeCache;
pub use compile::{compile_theme, CompiledRule, CompiledTheme};
pub use resolve::apply_styles;
pub use selector::parse_selector;
pub use theme::{StyleFn, Styles, Theme};

/// Reserved tag for the style of the whole rendered block.
pub const BLOCK_TAG: &str = "_";

/// Reserved tag for the line-number gutter.
pub const LINE_NUMBER_TAG: &str = "lineNumber";
