// ── Terminal renderer ─────────────────────────────────────────────────────────
//
// 24-bit SGR escapes.  Every non-empty token is wrapped in its style and a
// reset, so cutting the output at any line boundary never leaks colour.

use std::fmt::Write as _;

use super::{gutter_width, RenderOptions};
use crate::{
    highlight::Highlighted,
    theme::{self, Style},
};

const RESET: &str = "\x1b[0m";

/// SGR sequence selecting `style`.
fn sgr(style: Style) -> String {
    let (r, g, b) = style.rgb();
    let mut seq = String::from("\x1b[");
    if style.bold {
        seq.push_str("1;");
    }
    if style.italic {
        seq.push_str("3;");
    }
    let _ = write!(seq, "38;2;{r};{g};{b}m");
    seq
}

fn fg(color: u32) -> String {
    let (r, g, b) = theme::split(color);
    format!("\x1b[38;2;{r};{g};{b}m")
}

pub fn render(block: &Highlighted<'_>, options: &RenderOptions) -> String {
    let palette = theme::palette(options.dark);
    let width = gutter_width(block.line_count());
    let mut out = String::new();

    if let Some(label) = &options.label {
        let _ = writeln!(out, "{}{label}{RESET}", fg(palette.header_fg));
    }

    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if options.line_numbers {
            let _ = write!(out, "{}{:>width$}{RESET} ", fg(palette.gutter_fg), i + 1);
        }
        for tok in line.tokens.iter().filter(|t| !t.text.is_empty()) {
            out.push_str(&sgr(palette.style(tok.category)));
            out.push_str(tok.text);
            out.push_str(RESET);
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
