//! Style resolution: the cascade.
//!
//! For a token with tag `t` enclosed by `stack` (outermost first):
//!
//! 1. Take the compiled rule for `t`. No rule means no styling.
//! 2. Keep the entries whose ancestor chain is an ordered, not necessarily
//!    contiguous, subsequence of `stack`. An empty chain always matches.
//! 3. Stable-sort by chain length, shortest first. Equal lengths keep
//!    compile order.
//! 4. Concatenate the style lists: lowest priority first.
//! 5. Apply that list back to front. The most specific function wraps the
//!    raw text; the least specific ends up outermost.
//!
//! Step 5 is a contract, not an implementation detail: an outer wrap can
//! still reset colors, so the order is observable in the output.

use crate::compile::{CompiledRule, CompiledTheme};
use crate::theme::StyleFn;

/// Whether `chain` appears in `stack` as an ordered subsequence.
#[must_use]
pub fn chain_matches<S: AsRef<str>>(chain: &[String], stack: &[S]) -> bool {
    let mut remaining = stack.iter();
    chain
        .iter()
        .all(|tag| remaining.any(|actual| actual.as_ref() == tag))
}

/// Matching style functions for `stack`, lowest priority first.
fn matching_styles<'r, S: AsRef<str>>(rule: &'r CompiledRule, stack: &[S]) -> Vec<&'r StyleFn> {
    let mut matched: Vec<_> = rule
        .entries()
        .iter()
        .filter(|(chain, _)| chain_matches(chain, stack))
        .collect();
    // `sort_by_key` is stable, which is what keeps ties in compile order.
    matched.sort_by_key(|(chain, _)| chain.len());
    matched.into_iter().flat_map(|(_, styles)| styles).collect()
}

impl CompiledTheme {
    /// Style `text` as a token tagged `tag` inside `stack`.
    ///
    /// Unknown tags pass through unchanged.
    #[must_use]
    pub fn apply<S: AsRef<str>>(&self, text: &str, tag: &str, stack: &[S]) -> String {
        let Some(rule) = self.rule(tag) else {
            return text.to_owned();
        };
        matching_styles(rule, stack)
            .into_iter()
            .rev()
            .fold(text.to_owned(), |acc, style| style.apply(&acc))
    }
}

/// Free-function form of [`CompiledTheme::apply`].
#[must_use]
pub fn apply_styles<S: AsRef<str>>(
    text: &str,
    tag: &str,
    stack: &[S],
    theme: &CompiledTheme,
) -> String {
    theme.apply(text, tag, stack)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_theme;
    use crate::theme::Theme;
    use pretty_assertions::assert_eq;

    const NO_STACK: &[&str] = &[];

    fn tagger(name: &'static str) -> StyleFn {
        StyleFn::new(move |s| format!("<{name}>{s}</{name}>"))
    }

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|&t| t.to_owned()).collect()
    }

    #[test]
    fn empty_chain_always_matches() {
        assert!(chain_matches(&[], NO_STACK));
        assert!(chain_matches(&[], &["a", "b"]));
    }

    #[test]
    fn subsequence_matching() {
        let chain = owned(&["x", "z"]);
        assert!(chain_matches(&chain, &["x", "y", "z"]));
        assert!(chain_matches(&chain, &["x", "z"]));
        assert!(chain_matches(&chain, &["w", "x", "y", "z", "q"]));
        assert!(!chain_matches(&chain, &["z", "x"]));
        assert!(!chain_matches(&chain, &["x", "y"]));
        assert!(!chain_matches(&chain, NO_STACK));
    }

    #[test]
    fn full_selector_path_respects_order() {
        // `x z` on the path x > y > z: the `z` node sits under [x, y].
        let compiled = compile_theme(&Theme::new().with("x z", tagger("xz")));
        assert_eq!(compiled.apply("t", "z", &["x", "y"]), "<xz>t</xz>");

        // On x > z > y, `z` (under [x]) is styled and `y` (under [x, z]) is not.
        assert_eq!(compiled.apply("t", "z", &["x"]), "<xz>t</xz>");
        assert_eq!(compiled.apply("t", "y", &["x", "z"]), "t");

        // With the order broken, `z` under [y] alone gets nothing.
        assert_eq!(compiled.apply("t", "z", &["y"]), "t");
    }

    #[test]
    fn repeated_tags_need_repeated_ancestors() {
        let chain = owned(&["tag", "tag"]);
        assert!(chain_matches(&chain, &["tag", "attr", "tag"]));
        assert!(!chain_matches(&chain, &["tag", "attr"]));
    }

    #[test]
    fn unknown_tag_passes_through() {
        let compiled = compile_theme(&Theme::new().with("keyword", tagger("k")));
        assert_eq!(compiled.apply("hello", "nonexistentTag", NO_STACK), "hello");
        assert_eq!(apply_styles("hello", "nonexistentTag", NO_STACK, &compiled), "hello");
    }

    #[test]
    fn unmatched_chain_leaves_text_unstyled() {
        let compiled = compile_theme(&Theme::new().with("tag keyword", tagger("k")));
        assert_eq!(compiled.apply("if", "keyword", &["string"]), "if");
    }

    #[test]
    fn more_specific_rule_is_innermost() {
        let theme = Theme::new()
            .with("a", tagger("s1"))
            .with("b a", tagger("s2"));
        let compiled = compile_theme(&theme);

        assert_eq!(compiled.apply("x", "a", &["b"]), "<s1><s2>x</s2></s1>");
        assert_eq!(compiled.apply("x", "a", NO_STACK), "<s1>x</s1>");
    }

    #[test]
    fn specificity_beats_registration_order() {
        // The longer chain is registered first but still applies innermost.
        let theme = Theme::new()
            .with("b a", tagger("specific"))
            .with("a", tagger("general"));
        let compiled = compile_theme(&theme);
        assert_eq!(
            compiled.apply("x", "a", &["b"]),
            "<general><specific>x</specific></general>"
        );
    }

    #[test]
    fn equal_specificity_keeps_registration_order() {
        let theme = Theme::new()
            .with("b a", tagger("first"))
            .with("c a", tagger("second"));
        let compiled = compile_theme(&theme);
        // Later registration is higher priority, so it wraps the text first.
        assert_eq!(
            compiled.apply("x", "a", &["b", "c"]),
            "<first><second>x</second></first>"
        );
    }

    #[test]
    fn multi_function_lists_apply_first_outermost() {
        let theme = Theme::new().with("a", vec![tagger("1"), tagger("2")]);
        let compiled = compile_theme(&theme);
        assert_eq!(compiled.apply("x", "a", NO_STACK), "<1><2>x</2></1>");
    }

    #[test]
    fn merged_duplicate_chains_compose_in_order() {
        let theme = Theme::new()
            .with("f", tagger("one"))
            .with("g, f", tagger("two"));
        let compiled = compile_theme(&theme);
        assert_eq!(compiled.apply("x", "f", NO_STACK), "<one><two>x</two></one>");
        assert_eq!(compiled.apply("x", "g", NO_STACK), "<two>x</two>");
    }

    #[test]
    fn block_fallback_resets() {
        let compiled = compile_theme(&Theme::new());
        assert_eq!(compiled.apply("code\n", crate::BLOCK_TAG, NO_STACK), "\x1b[0mcode\x1b[0m\n\x1b[0m\x1b[0m");
    }
}
