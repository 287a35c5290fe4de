//! Compiled-theme cache keyed by theme identity.
//!
//! Compilation is a pure function of a theme's contents, but hashing a
//! theme by value would mean hashing closures. Instead the cache keys on the
//! `Arc<Theme>` allocation: the same `Arc` (or a clone of it) hits, while a
//! structurally identical but separately allocated theme is compiled and
//! cached on its own.
//!
//! Each entry holds a `Weak` back to its theme. When a theme is dropped and
//! its address is later reused by a different theme, the dead `Weak` exposes
//! the stale entry and it is replaced rather than served.
//!
//! Live entries are never evicted. Every miss prunes the entries whose theme
//! has been dropped, so the cache stays bounded by the number of live themes
//! plus whatever died since the last miss. The lock is held across
//! compilation, so each distinct live theme is compiled at most once even
//! under concurrent use.
//! The process-wide instance is owned by the default highlighter; tests build
//! their own with [`ThemeCache::new`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::trace;

use crate::compile::{compile_theme, CompiledTheme};
use crate::theme::Theme;

struct CacheEntry {
    theme: Weak<Theme>,
    compiled: Arc<CompiledTheme>,
}

/// Memoizes [`compile_theme`] per theme allocation.
#[derive(Default)]
pub struct ThemeCache {
    entries: Mutex<HashMap<usize, CacheEntry>>,
}

impl ThemeCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled form of `theme`, compiling it on first use.
    pub fn get(&self, theme: &Arc<Theme>) -> Arc<CompiledTheme> {
        let key = Arc::as_ptr(theme).addr();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = entries.get(&key) {
            if entry
                .theme
                .upgrade()
                .is_some_and(|cached| Arc::ptr_eq(&cached, theme))
            {
                trace!(key, "theme cache hit");
                return Arc::clone(&entry.compiled);
            }
        }

        let before = entries.len();
        entries.retain(|_, entry| entry.theme.strong_count() > 0);
        trace!(key, pruned = before - entries.len(), "theme cache miss");
        let compiled = Arc::new(compile_theme(theme));
        entries.insert(
            key,
            CacheEntry {
                theme: Arc::downgrade(theme),
                compiled: Arc::clone(&compiled),
            },
        );
        compiled
    }

    /// Number of cached entries. Entries for dropped themes linger until the
    /// next miss prunes them.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleFn;

    fn sample() -> Theme {
        Theme::new().with("keyword", StyleFn::new(|s| format!("[{s}]")))
    }

    #[test]
    fn same_arc_hits() {
        let cache = ThemeCache::new();
        let theme = Arc::new(sample());

        let first = cache.get(&theme);
        let second = cache.get(&Arc::clone(&theme));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn equal_content_distinct_arcs_compile_separately() {
        let cache = ThemeCache::new();
        let a = Arc::new(sample());
        let b = Arc::new(sample());

        let ca = cache.get(&a);
        let cb = cache.get(&b);
        assert!(!Arc::ptr_eq(&ca, &cb));
        assert_eq!(cache.len(), 2);
        assert_eq!(ca.apply("if", "keyword", &[] as &[&str]), cb.apply("if", "keyword", &[] as &[&str]));
    }

    #[test]
    fn dropped_theme_entry_is_not_served() {
        let cache = ThemeCache::new();
        let first = Arc::new(sample());
        let compiled = cache.get(&first);
        let key = Arc::as_ptr(&first).addr();
        drop(first);

        // Whatever lands at the old address must not reuse the old result.
        let second = Arc::new(Theme::new());
        let recompiled = cache.get(&second);
        if Arc::as_ptr(&second).addr() == key {
            assert!(!Arc::ptr_eq(&compiled, &recompiled));
        }
        assert!(recompiled.rule("keyword").is_none());
    }

    #[test]
    fn dropped_themes_are_pruned() {
        let cache = ThemeCache::new();
        let keep = Arc::new(sample());
        cache.get(&keep);
        for _ in 0..50 {
            let transient = Arc::new(sample());
            cache.get(&transient);
        }
        // Each miss prunes the previous transient entry.
        assert!(cache.len() <= 2, "cache grew to {}", cache.len());

        let last = Arc::new(Theme::new());
        cache.get(&last);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn fresh_caches_are_independent() {
        let theme = Arc::new(sample());
        let a = ThemeCache::new();
        let b = ThemeCache::new();
        assert!(!Arc::ptr_eq(&a.get(&theme), &b.get(&theme)));
        assert!(ThemeCache::new().is_empty());
    }
}
