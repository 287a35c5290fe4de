//! Language detection from file names.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Language identifier for `path`, derived from its extension.
///
/// The common JavaScript and TypeScript module extensions fold into their
/// family name and `.htm` becomes `html`. Any other extension is returned
/// as-is (without the dot) and left for the tokenizer to accept or reject.
///
/// # Errors
///
/// [`Error::LanguageDetection`] when the file name has no extension or ends
/// in a bare dot.
pub fn detect_language(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| Error::LanguageDetection {
            path: path.to_path_buf(),
        })?;

    let language = match ext.as_ref() {
        "ts" | "mts" | "cts" => "typescript".to_owned(),
        "js" | "cjs" | "mjs" => "javascript".to_owned(),
        "htm" => "html".to_owned(),
        other => other.to_owned(),
    };
    debug!(path = %path.display(), language = %language, "detected language");
    Ok(language)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
