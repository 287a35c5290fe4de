//! Public entry points: source text or a file in, styled block out.
//!
//! A [`Highlighter`] pairs a tokenizer with a [`ThemeCache`]. The free
//! functions share one process-wide highlighter, so its cache lives as long
//! as the process and each theme is compiled once. Build a `Highlighter`
//! directly for an isolated cache or a different tokenizer.

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use tinct_theme::builtin::{builtin_theme, DEFAULT_THEME};
use tinct_theme::{Theme, ThemeCache};
use tracing::debug;

use crate::block::{format_block, BlockOptions};
use crate::error::{Error, Result};
use crate::language::detect_language;
use crate::render::render;
use crate::tokenizer::{Tokenizer, TreeSitterTokenizer};

/// Language used when none is given and there is no file name to go by.
pub const DEFAULT_LANGUAGE: &str = "tsx";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Which theme to render with.
#[derive(Debug, Clone)]
pub enum ThemeChoice {
    /// A built-in theme, looked up by name when highlighting.
    Named(String),
    /// A caller-supplied theme. Compiled once per `Arc` allocation.
    Custom(Arc<Theme>),
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self::Named(DEFAULT_THEME.to_owned())
    }
}

impl ThemeChoice {
    /// The theme this choice refers to.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTheme`] when a name is not a built-in theme.
    pub fn resolve(&self) -> Result<Arc<Theme>> {
        match self {
            Self::Named(name) => {
                builtin_theme(name).ok_or_else(|| Error::InvalidTheme(name.clone()))
            }
            Self::Custom(theme) => Ok(Arc::clone(theme)),
        }
    }
}

impl From<&str> for ThemeChoice {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for ThemeChoice {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Arc<Theme>> for ThemeChoice {
    fn from(theme: Arc<Theme>) -> Self {
        Self::Custom(theme)
    }
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        Self::Custom(Arc::new(theme))
    }
}

/// Options for the highlighting entry points.
#[derive(Debug, Clone)]
pub struct Options {
    /// Grammar to tokenize with. Defaults to [`DEFAULT_LANGUAGE`], or for the
    /// file entry points to the language implied by the file extension.
    pub language: Option<String>,
    pub theme: ThemeChoice,
    pub min_width: usize,
    /// Defaults to the terminal width, or 80 columns.
    pub max_width: Option<usize>,
    pub padding: usize,
    pub line_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        let block = BlockOptions::default();
        Self {
            language: None,
            theme: ThemeChoice::default(),
            min_width: block.min_width,
            max_width: block.max_width,
            padding: block.padding,
            line_numbers: block.line_numbers,
        }
    }
}

impl Options {
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<ThemeChoice>) -> Self {
        self.theme = theme.into();
        self
    }

    const fn block(&self) -> BlockOptions {
        BlockOptions {
            min_width: self.min_width,
            max_width: self.max_width,
            padding: self.padding,
            line_numbers: self.line_numbers,
        }
    }

    /// The explicit language, or the one implied by `path`.
    fn language_for(&self, path: &Path) -> Result<Cow<'_, str>> {
        match &self.language {
            Some(language) => Ok(Cow::Borrowed(language)),
            None => detect_language(path).map(Cow::Owned),
        }
    }
}

// ---------------------------------------------------------------------------
// Highlighter
// ---------------------------------------------------------------------------

/// A tokenizer plus the compiled-theme cache it renders with.
pub struct Highlighter<T = TreeSitterTokenizer> {
    tokenizer: T,
    cache: ThemeCache,
}

static GLOBAL: LazyLock<Highlighter> = LazyLock::new(Highlighter::new);

impl Highlighter {
    /// A highlighter with the bundled tree-sitter grammars and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tokenizer(TreeSitterTokenizer::new())
    }

    /// The process-wide highlighter behind the free functions.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> Highlighter<T> {
    #[must_use]
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            cache: ThemeCache::new(),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &ThemeCache {
        &self.cache
    }

    /// Highlight `code` and lay it out as a block.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTheme`] for an unknown theme name, checked before any
    /// tokenizing. Tokenizer failures come back as [`Error::Tokenize`].
    pub fn highlight(&self, code: &str, options: &Options) -> Result<String> {
        let language = options.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
        self.run(code, language, options)
    }

    /// Read `path` and highlight its contents.
    ///
    /// # Errors
    ///
    /// As [`Highlighter::highlight`], plus [`Error::LanguageDetection`] when
    /// no language is given and the extension is missing (reported before
    /// the file is opened) and [`Error::Io`] when the read fails.
    pub fn highlight_file_sync(&self, path: impl AsRef<Path>, options: &Options) -> Result<String> {
        let path = path.as_ref();
        let language = options.language_for(path)?;
        let code = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&code, &language, options)
    }

    /// Async form of [`Highlighter::highlight_file_sync`]. Only the read is
    /// asynchronous; highlighting runs inline once the contents arrive.
    ///
    /// # Errors
    ///
    /// As [`Highlighter::highlight_file_sync`].
    pub async fn highlight_file(&self, path: impl AsRef<Path>, options: &Options) -> Result<String> {
        let path = path.as_ref();
        let language = options.language_for(path)?;
        let code = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.run(&code, &language, options)
    }

    fn run(&self, code: &str, language: &str, options: &Options) -> Result<String> {
        let theme = options.theme.resolve()?;
        let compiled = self.cache.get(&theme);
        debug!(language, bytes = code.len(), "highlighting");

        let tokens = self.tokenizer.tokenize(code, language)?;
        let styled = render(&tokens, &compiled);
        Ok(format_block(&styled, &compiled, &options.block()))
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Highlight `code` with the process-wide [`Highlighter`].
///
/// # Errors
///
/// See [`Highlighter::highlight`].
pub fn highlight(code: &str, options: &Options) -> Result<String> {
    Highlighter::global().highlight(code, options)
}

/// Read and highlight a file with the process-wide [`Highlighter`].
///
/// # Errors
///
/// See [`Highlighter::highlight_file_sync`].
pub fn highlight_file_sync(path: impl AsRef<Path>, options: &Options) -> Result<String> {
    Highlighter::global().highlight_file_sync(path, options)
}

/// Async form of [`highlight_file_sync`].
///
/// # Errors
///
/// See [`Highlighter::highlight_file`].
pub async fn highlight_file(path: impl AsRef<Path>, options: &Options) -> Result<String> {
    Highlighter::global().highlight_file(path, options).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
