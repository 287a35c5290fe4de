//! Named preset themes, ready to use.
//!
//! Each preset is built once per process and handed out as a shared
//! `Arc<Theme>`, so every lookup of the same name returns the same
//! allocation and hits the same [`ThemeCache`](crate::ThemeCache) entry.

mod debug;
mod github;
mod moria;
mod plain;
mod prism_dark;
mod xonokai;

use std::sync::{Arc, LazyLock};

use crate::theme::Theme;

/// Theme used when none is requested.
pub const DEFAULT_THEME: &str = "moria";

/// Every preset, by name. The single source for both lookup and listing.
const BUILTINS: [(&str, fn() -> Theme); 6] = [
    ("moria", moria::theme),
    ("github", github::theme),
    ("xonokai", xonokai::theme),
    ("prism-dark", prism_dark::theme),
    ("debug", debug::theme),
    ("plain", plain::theme),
];

const NAMES: [&str; BUILTINS.len()] = {
    let mut names = [""; BUILTINS.len()];
    let mut i = 0;
    while i < BUILTINS.len() {
        names[i] = BUILTINS[i].0;
        i += 1;
    }
    names
};

static REGISTRY: LazyLock<Vec<(&'static str, Arc<Theme>)>> = LazyLock::new(|| {
    BUILTINS
        .iter()
        .map(|&(name, build)| (name, Arc::new(build())))
        .collect()
});

/// Look up a builtin theme by name.
///
/// `prismDark` is accepted as an alias of `prism-dark`. Returns `None` if
/// the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Arc<Theme>> {
    let name = match name {
        "prismDark" => "prism-dark",
        other => other,
    };
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, theme)| Arc::clone(theme))
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &NAMES
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_theme;
    use crate::BLOCK_TAG;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "Builtin '{name}' missing");
        }
    }

    #[test]
    fn names_follow_registry_order() {
        let registered: Vec<&str> = REGISTRY.iter().map(|(name, _)| *name).collect();
        assert_eq!(registered, builtin_names());
        assert_eq!(builtin_names()[0], DEFAULT_THEME);
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent").is_none());
        assert!(builtin_theme("").is_none());
    }

    #[test]
    fn default_is_registered() {
        assert!(builtin_names().contains(&DEFAULT_THEME));
    }

    #[test]
    fn lookups_share_one_allocation() {
        let a = builtin_theme("moria").unwrap();
        let b = builtin_theme("moria").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn prism_dark_alias() {
        let a = builtin_theme("prismDark").unwrap();
        let b = builtin_theme("prism-dark").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn plain_only_has_the_fallback() {
        let compiled = compile_theme(&builtin_theme("plain").unwrap());
        assert_eq!(compiled.tags().collect::<Vec<_>>(), [BLOCK_TAG]);
    }

    #[test]
    fn colored_themes_define_block_and_gutter() {
        for name in ["moria", "github", "xonokai", "prism-dark"] {
            let theme = builtin_theme(name).unwrap();
            assert!(theme.get("_").is_some(), "{name} has no block style");
            let compiled = compile_theme(&theme);
            assert!(compiled.rule("lineNumber").is_some(), "{name} has no gutter style");
        }
    }

    #[test]
    fn debug_marks_nested_tokens() {
        let compiled = compile_theme(&builtin_theme("debug").unwrap());
        assert_eq!(
            compiled.apply("\\n", "escape", &["string"]),
            "<escape><string escape>\\n</string escape></escape>"
        );
    }

    #[test]
    fn debug_merges_duplicate_selectors() {
        let compiled = compile_theme(&builtin_theme("debug").unwrap());
        let rule = compiled.rule("f").unwrap();
        // `f` alone is listed by four entries, all with an empty chain.
        let bare = rule
            .entries()
            .iter()
            .find(|(chain, _)| chain.is_empty())
            .unwrap();
        assert_eq!(bare.1.len(), 4);
        assert_eq!(compiled.apply("x", "f", &[] as &[&str]), "x");
    }
}
