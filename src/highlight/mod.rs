// ── Lexical highlighter ───────────────────────────────────────────────────────
//
// Turns a block of source text into rendered lines of tagged tokens.  Each line
// is classified on its own: first the `//` comment split, then the head is
// handed to `scan::scan_head`.  No state survives between lines or calls, and
// every input string produces output; there is no error path.
//
// Tokens borrow from the input, so a `Highlighted` cannot outlive the text it
// was built from.

mod scan;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::vocabulary::Vocabulary;

/// Single-line comment marker.
const COMMENT_MARKER: &str = "//";

// ── Category ──────────────────────────────────────────────────────────────────

/// Classification tag applied to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plain,
    Keyword,
    Literal,
    Number,
    String,
    Comment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Plain,
        Category::Keyword,
        Category::Literal,
        Category::Number,
        Category::String,
        Category::Comment,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Plain => "plain",
            Category::Keyword => "keyword",
            Category::Literal => "literal",
            Category::Number => "number",
            Category::String => "string",
            Category::Comment => "comment",
        }
    }

    /// Stable CSS class used by the HTML renderer.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Plain => "tok-plain",
            Category::Keyword => "tok-keyword",
            Category::Literal => "tok-literal",
            Category::Number => "tok-number",
            Category::String => "tok-string",
            Category::Comment => "tok-comment",
        }
    }
}

// ── Token / RenderedLine / Highlighted ────────────────────────────────────────

/// A classified substring of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, category: Category) -> Self {
        Self { text, category }
    }
}

/// The tokens of one source line, in order.
///
/// Invariant: the token texts concatenate to the original line exactly.  A
/// rendered line always holds at least one token; an empty line holds one
/// empty `Plain` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedLine<'a> {
    pub tokens: Vec<Token<'a>>,
}

impl RenderedLine<'_> {
    /// The line's text, rebuilt from its tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text).collect()
    }
}

/// Output of one highlight call: one rendered line per input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlighted<'a> {
    pub lines: Vec<RenderedLine<'a>>,
}

impl Highlighted<'_> {
    /// Rejoin all lines with `\n`, reproducing the input exactly.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for tok in &line.tokens {
                out.push_str(tok.text);
            }
        }
        out
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// ── Comment mode ──────────────────────────────────────────────────────────────

/// How the `//` marker is located on a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// The first `//` anywhere on the line starts the comment, even inside a
    /// string literal.  `"http://x"` is split at the `//`.
    #[default]
    FirstMarker,
    /// `//` inside a closed double-quoted string is skipped.
    OutsideStrings,
}

impl CommentMode {
    /// Byte offset of the comment marker in `line`, if any.
    fn find_marker(self, line: &str) -> Option<usize> {
        match self {
            CommentMode::FirstMarker => line.find(COMMENT_MARKER),
            CommentMode::OutsideStrings => {
                let bytes = line.as_bytes();
                let mut pos = 0;
                while pos < bytes.len() {
                    if bytes[pos..].starts_with(COMMENT_MARKER.as_bytes()) {
                        return Some(pos);
                    }
                    pos = match scan::closing_quote(bytes, pos) {
                        Some(close) => close + 1,
                        None => pos + 1,
                    };
                }
                None
            }
        }
    }
}

// ── Highlighter ───────────────────────────────────────────────────────────────

/// Immutable highlighter configuration.  Cheap to share across threads; every
/// call allocates only its own output.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    vocabulary: Vocabulary,
    comment_mode: CommentMode,
}

impl Highlighter {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            comment_mode: CommentMode::default(),
        }
    }

    pub fn with_comment_mode(mut self, comment_mode: CommentMode) -> Self {
        self.comment_mode = comment_mode;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn comment_mode(&self) -> CommentMode {
        self.comment_mode
    }

    /// Highlight a whole block.  `N` lines in (split on `\n`) give `N`
    /// rendered lines out; the empty string is one empty line.
    pub fn highlight<'a>(&self, text: &'a str) -> Highlighted<'a> {
        let lines: Vec<_> = text.split('\n').map(|l| self.highlight_line(l)).collect();
        trace!(lines = lines.len(), bytes = text.len(), "highlighted block");
        Highlighted { lines }
    }

    /// Highlight a single line.  `line` should not contain `\n`; a trailing
    /// `\r` is kept as ordinary text.
    pub fn highlight_line<'a>(&self, line: &'a str) -> RenderedLine<'a> {
        let mut tokens = Vec::new();
        let (head, comment) = match self.comment_mode.find_marker(line) {
            Some(at) => (&line[..at], Some(&line[at..])),
            None => (line, None),
        };

        scan::scan_head(head, &self.vocabulary, &mut tokens);
        if let Some(comment) = comment {
            tokens.push(Token::new(comment, Category::Comment));
        }
        if tokens.is_empty() {
            tokens.push(Token::new(line, Category::Plain));
        }
        RenderedLine { tokens }
    }
}

/// Highlight `text` with the default vocabulary and comment mode.
pub fn highlight(text: &str) -> Highlighted<'_> {
    Highlighter::default().highlight(text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
