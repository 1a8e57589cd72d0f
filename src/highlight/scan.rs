// ── Head scanner ──────────────────────────────────────────────────────────────
//
// Tokenizes the part of a line before its comment marker.  The head pattern is
// an ordered list of rules tried at each scan position; the leftmost match
// wins, and at a single position the earlier rule wins.
//
// Word characters are ASCII letters, digits and `_`.  Every rule that can
// start a match starts on an ASCII byte, so all slicing below lands on char
// boundaries even when the line holds multi-byte text.

use super::{Category, Token};
use crate::vocabulary::Vocabulary;

// ── Rules ─────────────────────────────────────────────────────────────────────

/// One alternative of the head pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Whole word found in the vocabulary's keyword set.
    Keyword,
    /// Whole word found in the vocabulary's literal set.
    Literal,
    /// Whole word made only of decimal digits.
    Number,
    /// `"` up to the next `"` on the segment.  No escapes.
    Str,
}

/// Priority order.  Do not reorder: `Keyword` must shadow `Literal` when a
/// vocabulary lists a word in both sets.
pub(crate) const RULES: [Rule; 4] = [Rule::Keyword, Rule::Literal, Rule::Number, Rule::Str];

impl Rule {
    pub(crate) fn category(self) -> Category {
        match self {
            Rule::Keyword => Category::Keyword,
            Rule::Literal => Category::Literal,
            Rule::Number => Category::Number,
            Rule::Str => Category::String,
        }
    }

    /// End offset (exclusive) of a match starting at `pos`, if this rule
    /// matches there.
    pub(crate) fn match_at(self, seg: &str, pos: usize, vocab: &Vocabulary) -> Option<usize> {
        let bytes = seg.as_bytes();
        match self {
            Rule::Keyword | Rule::Literal | Rule::Number => {
                if !is_word_start(bytes, pos) {
                    return None;
                }
                let end = word_end(bytes, pos);
                let word = &seg[pos..end];
                let hit = match self {
                    Rule::Keyword => vocab.is_keyword(word),
                    Rule::Literal => vocab.is_literal(word),
                    _ => word.bytes().all(|b| b.is_ascii_digit()),
                };
                hit.then_some(end)
            }
            Rule::Str => closing_quote(bytes, pos).map(|close| close + 1),
        }
    }
}

// ── Byte classes ──────────────────────────────────────────────────────────────

pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `pos` holds a word byte and is preceded by a non-word byte or the start.
fn is_word_start(bytes: &[u8], pos: usize) -> bool {
    pos < bytes.len() && is_word_byte(bytes[pos]) && (pos == 0 || !is_word_byte(bytes[pos - 1]))
}

/// End of the word run that contains `pos`.
fn word_end(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// Index of the quote closing the string that opens at `pos`, or `None`
/// when `pos` is not a `"` or the string is unterminated.
pub(crate) fn closing_quote(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b'"') {
        return None;
    }
    bytes[pos + 1..]
        .iter()
        .position(|&b| b == b'"')
        .map(|off| pos + 1 + off)
}

// ── Scanner ───────────────────────────────────────────────────────────────────

/// First rule (in priority order) that matches at `pos`.
fn first_match(seg: &str, pos: usize, vocab: &Vocabulary) -> Option<(Category, usize)> {
    RULES
        .iter()
        .find_map(|rule| rule.match_at(seg, pos, vocab).map(|end| (rule.category(), end)))
}

/// Append the tokens of `seg` to `out`.  Gaps between matches become `Plain`
/// tokens; an empty `seg` appends nothing.
pub(crate) fn scan_head<'a>(seg: &'a str, vocab: &Vocabulary, out: &mut Vec<Token<'a>>) {
    let bytes = seg.as_bytes();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match first_match(seg, pos, vocab) {
            Some((category, end)) => {
                if plain_start < pos {
                    out.push(Token::new(&seg[plain_start..pos], Category::Plain));
                }
                out.push(Token::new(&seg[pos..end], category));
                pos = end;
                plain_start = end;
            }
            // No rule can start inside a word run, so skip it whole.
            None if is_word_byte(bytes[pos]) => pos = word_end(bytes, pos),
            None => pos += 1,
        }
    }

    if plain_start < bytes.len() {
        out.push(Token::new(&seg[plain_start..], Category::Plain));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(seg: &str) -> Vec<(Category, &str)> {
        let vocab = Vocabulary::default();
        let mut out = Vec::new();
        scan_head(seg, &vocab, &mut out);
        out.into_iter().map(|t| (t.category, t.text)).collect()
    }

    // ── Rule::match_at ────────────────────────────────────────────────────────

    #[test]
    fn keyword_rule_needs_whole_word() {
        let v = Vocabulary::default();
        assert_eq!(Rule::Keyword.match_at("int x", 0, &v), Some(3));
        assert_eq!(Rule::Keyword.match_at("interval", 0, &v), None);
        assert_eq!(Rule::Keyword.match_at("print", 2, &v), None);
    }

    #[test]
    fn number_rule_rejects_mixed_words() {
        let v = Vocabulary::default();
        assert_eq!(Rule::Number.match_at("42;", 0, &v), Some(2));
        assert_eq!(Rule::Number.match_at("42px", 0, &v), None);
        assert_eq!(Rule::Number.match_at("x1", 1, &v), None);
    }

    #[test]
    fn string_rule_needs_closing_quote() {
        let v = Vocabulary::default();
        assert_eq!(Rule::Str.match_at(r#""ab" c"#, 0, &v), Some(4));
        assert_eq!(Rule::Str.match_at(r#""ab"#, 0, &v), None);
        assert_eq!(Rule::Str.match_at("ab", 0, &v), None);
    }

    #[test]
    fn keyword_shadows_literal_in_the_same_word() {
        let v = Vocabulary::new(["null"], ["null"]);
        let mut out = Vec::new();
        scan_head("null", &v, &mut out);
        assert_eq!(out, vec![Token::new("null", Category::Keyword)]);
    }

    // ── scan_head ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_segment_yields_nothing() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn plain_only_segment_is_one_token() {
        assert_eq!(scan("foo(bar);"), vec![(Category::Plain, "foo(bar);")]);
    }

    #[test]
    fn decimal_point_splits_numbers() {
        assert_eq!(
            scan("1.5"),
            vec![
                (Category::Number, "1"),
                (Category::Plain, "."),
                (Category::Number, "5"),
            ]
        );
    }

    #[test]
    fn keyword_inside_string_stays_string() {
        assert_eq!(scan(r#""return""#), vec![(Category::String, r#""return""#)]);
    }

    // An unterminated quote is plain; later words are still classified.
    #[test]
    fn unterminated_quote_does_not_swallow_line() {
        assert_eq!(
            scan(r#"x = "abc int"#),
            vec![(Category::Plain, r#"x = "abc "#), (Category::Keyword, "int")]
        );
    }

    #[test]
    fn adjacent_string_after_word() {
        assert_eq!(
            scan(r#"f"s"1"#),
            vec![
                (Category::Plain, "f"),
                (Category::String, r#""s""#),
                (Category::Number, "1"),
            ]
        );
    }

    // Non-ASCII letters are not word characters, so they act as boundaries.
    #[test]
    fn non_ascii_letters_are_boundaries() {
        assert_eq!(
            scan("éint"),
            vec![(Category::Plain, "é"), (Category::Keyword, "int")]
        );
    }

    #[test]
    fn underscore_joins_words() {
        assert_eq!(scan("int_max 1_0"), vec![(Category::Plain, "int_max 1_0")]);
    }
}
