//! Theme compilation.
//!
//! Selectors are indexed by their *target* tag, so a lookup at render time
//! touches only the rules that could possibly apply. Each target keeps an
//! ordered list of `(ancestor chain, styles)` pairs. Two selectors that name
//! the same chain for the same target merge into one entry, styles
//! concatenated in registration order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::selector::parse_selector;
use crate::theme::{StyleFn, Theme};
use crate::BLOCK_TAG;

// ---------------------------------------------------------------------------
// CompiledRule
// ---------------------------------------------------------------------------

/// Every rule for one target tag, in compile order.
#[derive(Debug, Clone, Default)]
pub struct CompiledRule {
    entries: Vec<(Vec<String>, Vec<StyleFn>)>,
}

impl CompiledRule {
    /// `(ancestor chain, styles)` pairs in compile order.
    #[must_use]
    pub fn entries(&self) -> &[(Vec<String>, Vec<StyleFn>)] {
        &self.entries
    }

    /// Append `styles` to the entry for `chain`, creating it if needed.
    fn merge(&mut self, chain: Vec<String>, styles: Vec<StyleFn>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == chain) {
            Some((_, existing)) => existing.extend(styles),
            None => self.entries.push((chain, styles)),
        }
    }
}

// ---------------------------------------------------------------------------
// CompiledTheme
// ---------------------------------------------------------------------------

/// A theme indexed for fast lookup: target tag → [`CompiledRule`].
///
/// Always contains a rule for the block tag `_`.
#[derive(Debug, Clone, Default)]
pub struct CompiledTheme {
    rules: BTreeMap<String, CompiledRule>,
}

impl CompiledTheme {
    /// The rule for `tag`, if any selector targets it.
    #[must_use]
    pub fn rule(&self, tag: &str) -> Option<&CompiledRule> {
        self.rules.get(tag)
    }

    /// Target tags with at least one rule.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of distinct target tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compile `theme` into its lookup form.
///
/// Pure: the same entries in the same order always produce the same
/// structure. If no selector targets `_`, a reset rule is added for it.
#[must_use]
pub fn compile_theme(theme: &Theme) -> CompiledTheme {
    let mut rules: BTreeMap<String, CompiledRule> = BTreeMap::new();

    for (selector, styles) in theme.entries() {
        let styles = styles.to_vec();
        for mut chain in parse_selector(selector) {
            // `x y z` targets `z` with ancestors `[x, y]`.
            let Some(target) = chain.pop() else {
                continue;
            };
            rules
                .entry(target)
                .or_default()
                .merge(chain, styles.clone());
        }
    }

    rules.entry(BLOCK_TAG.to_owned()).or_insert_with(|| CompiledRule {
        entries: vec![(Vec::new(), vec![StyleFn::reset()])],
    });

    debug!(
        selectors = theme.len(),
        tags = rules.len(),
        "compiled theme"
    );

    CompiledTheme { rules }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
