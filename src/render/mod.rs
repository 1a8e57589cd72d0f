// ── View-layer renderers ──────────────────────────────────────────────────────
//
// Turn a `Highlighted` block into something a person can look at.  Renderers
// only add decoration (styles, gutter, header); token text is emitted as-is,
// apart from HTML escaping.

pub mod ansi;
pub mod html;

use serde::Serialize;
use tracing::debug;

use crate::{error::Result, highlight::Highlighted};

// ── Options ───────────────────────────────────────────────────────────────────

/// Output flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// 24-bit colour escapes for a terminal.
    #[default]
    Ansi,
    /// `<pre><code>` fragment with one `<span>` per classified token.
    Html,
    /// Token stream as JSON.
    Json,
    /// The raw text, unstyled (what a copy button would copy).
    Plain,
}

/// Decoration shared by all renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Display label, usually a file name.  Shown as a header line.
    pub label: Option<String>,
    /// Prefix every line with its 1-based number.
    pub line_numbers: bool,
    /// Use the dark palette.
    pub dark: bool,
}

/// Width of the line-number gutter: digits in the largest line number.
pub(crate) fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len()
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonBlock<'b, 'a> {
    label: Option<&'b str>,
    lines: &'b Highlighted<'a>,
}

fn render_json(block: &Highlighted<'_>, options: &RenderOptions) -> Result<String> {
    let doc = JsonBlock {
        label: options.label.as_deref(),
        lines: block,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render `block` in the requested format.
pub fn render(
    block: &Highlighted<'_>,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    let out = match format {
        OutputFormat::Ansi => ansi::render(block, options),
        OutputFormat::Html => html::render(block, options),
        OutputFormat::Json => render_json(block, options)?,
        OutputFormat::Plain => block.reconstruct(),
    };
    debug!(?format, lines = block.line_count(), bytes = out.len(), "rendered block");
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    #[test]
    fn gutter_width_counts_digits() {
        assert_eq!(gutter_width(0), 1);
        assert_eq!(gutter_width(9), 1);
        assert_eq!(gutter_width(10), 2);
        assert_eq!(gutter_width(120), 3);
    }

    #[test]
    fn plain_output_is_the_input() {
        let src = "int a = 1; // one\n\"s\"\n";
        let out = render(&highlight(src), OutputFormat::Plain, &RenderOptions::default())
            .expect("render");
        assert_eq!(out, src);
    }

    #[test]
    fn json_output_shape() {
        let opts = RenderOptions {
            label: Some("Main.java".to_owned()),
            ..RenderOptions::default()
        };
        let out = render(&highlight("return 1;"), OutputFormat::Json, &opts).expect("render");
        let v: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(v["label"], "Main.java");
        let line = &v["lines"][0];
        assert_eq!(line[0]["text"], "return");
        assert_eq!(line[0]["category"], "keyword");
        assert_eq!(line[2]["text"], "1");
        assert_eq!(line[2]["category"], "number");
        assert_eq!(line[3]["category"], "plain");
    }

    #[test]
    fn json_label_is_null_when_absent() {
        let out = render(&highlight(""), OutputFormat::Json, &RenderOptions::default())
            .expect("render");
        let v: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert!(v["label"].is_null());
        assert_eq!(v["lines"][0][0]["text"], "");
    }
}
