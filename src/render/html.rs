// ── HTML renderer ─────────────────────────────────────────────────────────────
//
// Emits a self-contained fragment: optional header with the label, optional
// line-number gutter, and a `<pre><code>` body.  Classified tokens get a
// `tok-*` class; plain text is written bare.  `stylesheet` produces the CSS
// for those classes from a palette.

use std::fmt::Write as _;

use super::{gutter_width, RenderOptions};
use crate::{
    highlight::{Category, Highlighted},
    theme::{self, hex},
};

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(block: &Highlighted<'_>, options: &RenderOptions) -> String {
    let variant = if options.dark { "dark" } else { "light" };
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"hilite hilite-{variant}\">");

    if let Some(label) = &options.label {
        let _ = writeln!(out, "<div class=\"hilite-header\">{}</div>", escape(label));
    }

    out.push_str("<div class=\"hilite-body\">");
    if options.line_numbers {
        let width = gutter_width(block.line_count());
        out.push_str("<div class=\"hilite-gutter\">");
        for n in 1..=block.line_count() {
            let _ = write!(out, "<div>{n:>width$}</div>");
        }
        out.push_str("</div>");
    }

    out.push_str("<pre><code>");
    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for tok in &line.tokens {
            match tok.category {
                Category::Plain => out.push_str(&escape(tok.text)),
                cat => {
                    let _ = write!(
                        out,
                        "<span class=\"{}\">{}</span>",
                        cat.css_class(),
                        escape(tok.text)
                    );
                }
            }
        }
    }
    out.push_str("</code></pre></div>\n</div>\n");
    out
}

/// CSS rules for the `hilite-*` containers and `tok-*` classes.
pub fn stylesheet(dark: bool) -> String {
    let p = theme::palette(dark);
    let variant = if dark { "dark" } else { "light" };
    let mut css = String::new();
    let _ = writeln!(
        css,
        ".hilite-{variant} {{ background: {}; color: {}; font-family: monospace; }}",
        hex(p.background),
        hex(p.plain.fg)
    );
    let _ = writeln!(
        css,
        ".hilite-{variant} .hilite-header {{ color: {}; }}",
        hex(p.header_fg)
    );
    let _ = writeln!(
        css,
        ".hilite-{variant} .hilite-gutter {{ color: {}; background: {}; text-align: right; user-select: none; }}",
        hex(p.gutter_fg),
        hex(p.gutter_bg)
    );
    for cat in Category::ALL {
        let style = p.style(cat);
        let mut rule = format!("color: {};", hex(style.fg));
        if style.bold {
            rule.push_str(" font-weight: 500;");
        }
        if style.italic {
            rule.push_str(" font-style: italic;");
        }
        let _ = writeln!(css, ".hilite-{variant} .{} {{ {rule} }}", cat.css_class());
    }
    css
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b && "c">"#), "a&lt;b &amp;&amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn spans_for_classified_tokens_only() {
        let out = render(&highlight("if (a < 1)"), &RenderOptions::default());
        assert!(out.contains(
            "<pre><code><span class=\"tok-keyword\">if</span> (a &lt; <span class=\"tok-number\">1</span>)</code></pre>"
        ));
        assert!(!out.contains("tok-plain"));
    }

    #[test]
    fn strings_are_escaped_inside_spans() {
        let out = render(&highlight(r#"return "<b>";"#), &RenderOptions::default());
        assert!(out.contains("<span class=\"tok-string\">&quot;&lt;b&gt;&quot;</span>"));
    }

    #[test]
    fn header_and_gutter() {
        let opts = RenderOptions {
            label: Some("A<B>.java".to_owned()),
            line_numbers: true,
            dark: true,
        };
        let out = render(&highlight("a\nb"), &opts);
        assert!(out.starts_with("<div class=\"hilite hilite-dark\">"));
        assert!(out.contains("<div class=\"hilite-header\">A&lt;B&gt;.java</div>"));
        assert!(out.contains("<div class=\"hilite-gutter\"><div>1</div><div>2</div></div>"));
        assert!(out.contains("<code>a\nb</code>"));
    }

    #[test]
    fn stylesheet_covers_every_category() {
        let css = stylesheet(false);
        for cat in Category::ALL {
            assert!(css.contains(cat.css_class()), "missing {}", cat.css_class());
        }
        assert!(css.contains(".hilite-light .tok-keyword { color: #9333ea; font-weight: 500; }"));
        assert!(css.contains("font-style: italic;"));
    }
}
