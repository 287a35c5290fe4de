//! Theme values: selectors mapped to styling functions.
//!
//! A [`StyleFn`] is the only thing the engine knows about styling: an opaque
//! `&str -> String` transform. Terminal [`Style`]s convert into one, but so
//! can any closure, which is how the `debug` theme wraps tokens in
//! `<tag>…</tag>` markers.

use std::fmt;
use std::sync::Arc;

use tinct_term::Style;

// ---------------------------------------------------------------------------
// StyleFn
// ---------------------------------------------------------------------------

/// A single text transform, usually wrapping the text in escape sequences.
///
/// Cheap to clone. Application order matters when several are composed.
#[derive(Clone)]
pub struct StyleFn(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl StyleFn {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A transform that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|text| text.to_owned())
    }

    /// The full SGR reset, used as the block fallback.
    #[must_use]
    pub fn reset() -> Self {
        Style::reset().into()
    }

    /// Apply the transform.
    #[inline]
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        (self.0)(text)
    }
}

impl fmt::Debug for StyleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleFn({:p})", Arc::as_ptr(&self.0))
    }
}

impl From<Style> for StyleFn {
    fn from(style: Style) -> Self {
        Self::new(move |text| style.paint(text))
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// One style function or an ordered list of them.
#[derive(Debug, Clone)]
pub enum Styles {
    One(StyleFn),
    Many(Vec<StyleFn>),
}

impl Styles {
    /// Normalize to a list, wrapping a lone function in a singleton.
    #[must_use]
    pub fn to_vec(&self) -> Vec<StyleFn> {
        match self {
            Self::One(f) => vec![f.clone()],
            Self::Many(fs) => fs.clone(),
        }
    }
}

impl From<StyleFn> for Styles {
    fn from(f: StyleFn) -> Self {
        Self::One(f)
    }
}

impl From<Style> for Styles {
    fn from(style: Style) -> Self {
        Self::One(style.into())
    }
}

impl From<Vec<StyleFn>> for Styles {
    fn from(fs: Vec<StyleFn>) -> Self {
        Self::Many(fs)
    }
}

impl From<Vec<Style>> for Styles {
    fn from(styles: Vec<Style>) -> Self {
        Self::Many(styles.into_iter().map(StyleFn::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// An ordered mapping from selector strings to [`Styles`].
///
/// Order is significant: among rules of equal specificity, later entries
/// apply closer to the text. Setting an existing selector replaces its value
/// but keeps its position.
///
/// ```
/// use tinct_term::{CellColor, Style};
/// use tinct_theme::Theme;
///
/// let theme = Theme::new()
///     .with("_", Style::new().bg(CellColor::BLACK))
///     .with("keyword, builtin", Style::new().bold())
///     .with("class-name keyword", Style::new().fg(CellColor::RED));
/// assert_eq!(theme.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    entries: Vec<(String, Styles)>,
}

impl Theme {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, selector: impl Into<String>, styles: impl Into<Styles>) -> Self {
        self.set(selector, styles);
        self
    }

    /// Insert or replace the styles for `selector`.
    pub fn set(&mut self, selector: impl Into<String>, styles: impl Into<Styles>) {
        let selector = selector.into();
        let styles = styles.into();
        match self.entries.iter_mut().find(|(s, _)| *s == selector) {
            Some((_, existing)) => *existing = styles,
            None => self.entries.push((selector, styles)),
        }
    }

    /// Styles registered for an exact selector string.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&Styles> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, styles)| styles)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Styles)> {
        self.entries.iter().map(|(s, styles)| (s.as_str(), styles))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a theme from any key-value source, in its enumeration order.
///
/// This is how unordered maps become themes: whatever order the map yields
/// is the order the theme keeps.
impl<S: Into<String>, T: Into<Styles>> FromIterator<(S, T)> for Theme {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut theme = Self::new();
        for (selector, styles) in iter {
            theme.set(selector, styles);
        }
        theme
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_term::CellColor;

    fn tagger(name: &'static str) -> StyleFn {
        StyleFn::new(move |s| format!("<{name}>{s}</{name}>"))
    }

    #[test]
    fn style_fn_applies_closure() {
        assert_eq!(tagger("b").apply("x"), "<b>x</b>");
        assert_eq!(StyleFn::identity().apply("x"), "x");
    }

    #[test]
    fn style_fn_from_style_paints() {
        let f = StyleFn::from(Style::new().bold());
        assert_eq!(f.apply("x"), "\x1b[1mx\x1b[22m");
    }

    #[test]
    fn reset_style_fn() {
        assert_eq!(StyleFn::reset().apply("x"), "\x1b[0mx\x1b[0m");
    }

    #[test]
    fn styles_normalize_to_vec() {
        assert_eq!(Styles::from(tagger("a")).to_vec().len(), 1);
        let many = Styles::from(vec![tagger("a"), tagger("b")]);
        let fs = many.to_vec();
        assert_eq!(fs.len(), 2);
        assert_eq!(fs[1].apply("x"), "<b>x</b>");
    }

    #[test]
    fn set_replaces_in_place() {
        let mut theme = Theme::new()
            .with("a", tagger("first"))
            .with("b", tagger("b"));
        theme.set("a", tagger("second"));

        let selectors: Vec<_> = theme.entries().map(|(s, _)| s).collect();
        assert_eq!(selectors, ["a", "b"]);
        let styles = theme.get("a").unwrap().to_vec();
        assert_eq!(styles[0].apply("x"), "<second>x</second>");
    }

    #[test]
    fn from_iter_keeps_enumeration_order() {
        let theme: Theme = [
            ("z", Style::new().bold()),
            ("a", Style::new().fg(CellColor::RED)),
        ]
        .into_iter()
        .collect();
        let selectors: Vec<_> = theme.entries().map(|(s, _)| s).collect();
        assert_eq!(selectors, ["z", "a"]);
    }

    #[test]
    fn empty_theme() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert!(theme.get("_").is_none());
    }
}
