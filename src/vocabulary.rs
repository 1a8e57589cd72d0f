// ── Keyword & literal vocabulary ──────────────────────────────────────────────
//
// The word sets the highlighter classifies against.  A `Vocabulary` is passed
// into `Highlighter::new`; nothing here is global.  The default set is the
// Java-flavoured list used for interview solutions.  No I/O; pure Rust.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ── Vocabulary ────────────────────────────────────────────────────────────────

/// Keyword and literal word sets.
///
/// Missing fields in a settings file fall back to the default lists, so a
/// config may override only `keywords` and keep the stock literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub keywords: BTreeSet<String>,
    pub literals: BTreeSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary word lists.
    ///
    /// Entries that are not made purely of word characters are kept but can
    /// never match, since matches are whole words.
    pub fn new<K, L>(keywords: K, literals: L) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_literal(&self, word: &str) -> bool {
        self.literals.contains(word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS.split_whitespace(),
            DEFAULT_LITERALS.split_whitespace(),
        )
    }
}

// ── Default tables ────────────────────────────────────────────────────────────

static DEFAULT_KEYWORDS: &str = "public private class return new if else for while int void \
boolean String Map HashMap List ArrayList Set HashSet Stack Queue PriorityQueue Integer \
Character Arrays Math Collections double long TreeNode ListNode";

static DEFAULT_LITERALS: &str = "true false null";

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords_cover_the_stock_list() {
        let v = Vocabulary::default();
        assert_eq!(v.keywords.len(), 31);
        for word in ["public", "return", "int", "HashMap", "PriorityQueue", "ListNode"] {
            assert!(v.is_keyword(word), "{word} should be a keyword");
        }
    }

    #[test]
    fn default_literals() {
        let v = Vocabulary::default();
        assert!(v.is_literal("true"));
        assert!(v.is_literal("false"));
        assert!(v.is_literal("null"));
        assert_eq!(v.literals.len(), 3);
    }

    // Lookups are exact: no case folding, no prefixes.
    #[test]
    fn lookups_are_case_sensitive_and_exact() {
        let v = Vocabulary::default();
        assert!(!v.is_keyword("Return"));
        assert!(!v.is_keyword("interval"));
        assert!(!v.is_literal("True"));
    }

    #[test]
    fn literals_are_not_keywords() {
        let v = Vocabulary::default();
        assert!(!v.is_keyword("null"));
        assert!(!v.is_literal("int"));
    }

    #[test]
    fn custom_vocabulary() {
        let v = Vocabulary::new(["fn", "let"], ["None"]);
        assert!(v.is_keyword("fn"));
        assert!(!v.is_keyword("int"));
        assert!(v.is_literal("None"));
        assert!(!v.is_literal("null"));
    }

    #[test]
    fn partial_json_falls_back_to_default_literals() {
        let v: Vocabulary = serde_json::from_str(r#"{"keywords":["def"]}"#).expect("deserialize");
        assert!(v.is_keyword("def"));
        assert!(!v.is_keyword("int"));
        assert!(v.is_literal("null"));
    }

    #[test]
    fn empty_json_object_is_the_default() {
        let v: Vocabulary = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(v, Vocabulary::default());
    }
}
