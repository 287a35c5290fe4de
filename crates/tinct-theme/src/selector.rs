//! Selector parsing.
//!
//! `"tag attr-value punctuation, comment"` becomes
//! `[["tag", "attr-value", "punctuation"], ["comment"]]`: one chain per
//! comma-separated group, outermost ancestor first, target tag last. There is
//! no escaping or quoting.

/// Parse a selector string into ancestor chains.
///
/// An empty (or all-whitespace) group yields a chain holding a single empty
/// tag, which never matches a real token.
#[must_use]
pub fn parse_selector(selector: &str) -> Vec<Vec<String>> {
    selector
        .split(',')
        .map(str::trim)
        .map(|group| {
            if group.is_empty() {
                vec![String::new()]
            } else {
                group.split_whitespace().map(str::to_owned).collect()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tag() {
        assert_eq!(parse_selector("keyword"), [["keyword"]]);
    }

    #[test]
    fn groups_are_trimmed() {
        assert_eq!(
            parse_selector("comment, prolog ,doctype"),
            [["comment"], ["prolog"], ["doctype"]]
        );
    }

    #[test]
    fn chains_split_on_whitespace_runs() {
        assert_eq!(
            parse_selector("tag   attr-value\tpunctuation"),
            [["tag", "attr-value", "punctuation"]]
        );
    }

    #[test]
    fn mixed_groups() {
        let parsed = parse_selector("language-css string,style string, url");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], ["language-css", "string"]);
        assert_eq!(parsed[1], ["style", "string"]);
        assert_eq!(parsed[2], ["url"]);
    }

    #[test]
    fn empty_input_is_one_empty_tag() {
        assert_eq!(parse_selector(""), [[""]]);
        assert_eq!(parse_selector("  "), [[""]]);
    }

    #[test]
    fn dotted_names_are_plain_tags() {
        assert_eq!(
            parse_selector("string string.escape"),
            [["string", "string.escape"]]
        );
    }
}
