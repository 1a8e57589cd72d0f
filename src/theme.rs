// ── Dual light/dark colour theme ───────────────────────────────────────────────
//
// Maps every token category to a fixed style.  `palette(false)` is the light
// theme used on the problem pages (white card, purple keywords, orange
// literals and numbers, green strings, italic slate comments); `palette(true)`
// is a VS Code Dark+-inspired variant.
//
// Colour conventions:
//   • All palette entries are in 0xRRGGBB form.
//   • Renderers unpack them with `Style::rgb` / `hex`.

use crate::highlight::Category;

// ── Colour macro ──────────────────────────────────────────────────────────────

/// Pack three channel bytes into 0xRRGGBB.
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        (($r as u32) << 16) | (($g as u32) << 8) | ($b as u32)
    };
}

// ── Style ─────────────────────────────────────────────────────────────────────

/// Visual style of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground colour, 0xRRGGBB.
    pub fg: u32,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    const fn plain(fg: u32) -> Self {
        Self {
            fg,
            bold: false,
            italic: false,
        }
    }

    /// Split the foreground into `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        split(self.fg)
    }
}

/// Split 0xRRGGBB into `(r, g, b)`.
pub fn split(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// `#rrggbb` for CSS.
pub fn hex(color: u32) -> String {
    format!("#{:06x}", color & 0x00FF_FFFF)
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub struct Palette {
    pub background: u32,
    pub gutter_fg: u32,
    pub gutter_bg: u32,
    pub header_fg: u32,
    pub plain: Style,
    pub keyword: Style,
    pub literal: Style,
    pub number: Style,
    pub string: Style,
    pub comment: Style,
}

impl Palette {
    pub fn style(&self, category: Category) -> Style {
        match category {
            Category::Plain => self.plain,
            Category::Keyword => self.keyword,
            Category::Literal => self.literal,
            Category::Number => self.number,
            Category::String => self.string,
            Category::Comment => self.comment,
        }
    }
}

/// Light palette: slate text on white.
pub const LIGHT: Palette = Palette {
    background: rgb!(0xFF, 0xFF, 0xFF),
    gutter_fg: rgb!(0x64, 0x74, 0x8B),
    gutter_bg: rgb!(0xF8, 0xFA, 0xFC),
    header_fg: rgb!(0x94, 0xA3, 0xB8),
    plain: Style::plain(rgb!(0x1E, 0x29, 0x3B)),
    keyword: Style {
        fg: rgb!(0x93, 0x33, 0xEA),
        bold: true,
        italic: false,
    },
    literal: Style::plain(rgb!(0xEA, 0x58, 0x0C)),
    number: Style::plain(rgb!(0xEA, 0x58, 0x0C)),
    string: Style::plain(rgb!(0x16, 0xA3, 0x4A)),
    comment: Style {
        fg: rgb!(0x64, 0x74, 0x8B),
        bold: false,
        italic: true,
    },
};

/// VS Code Dark+-inspired dark palette.
pub const DARK: Palette = Palette {
    background: rgb!(0x1E, 0x1E, 0x1E),
    gutter_fg: rgb!(0x85, 0x85, 0x85),
    gutter_bg: rgb!(0x25, 0x25, 0x26),
    header_fg: rgb!(0x9C, 0xDC, 0xFE),
    plain: Style::plain(rgb!(0xD4, 0xD4, 0xD4)),
    keyword: Style {
        fg: rgb!(0x56, 0x9C, 0xD6),
        bold: true,
        italic: false,
    },
    literal: Style::plain(rgb!(0x56, 0x9C, 0xD6)),
    number: Style::plain(rgb!(0xB5, 0xCE, 0xA8)),
    string: Style::plain(rgb!(0xCE, 0x91, 0x78)),
    comment: Style {
        fg: rgb!(0x6A, 0x99, 0x55),
        bold: false,
        italic: true,
    },
};

// ── Public entry point ────────────────────────────────────────────────────────

/// The dark palette when `dark` is `true`, else the light one.
pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_macro_packs_channels() {
        assert_eq!(rgb!(0x12, 0x34, 0x56), 0x12_3456);
    }

    #[test]
    fn split_and_hex() {
        assert_eq!(split(0x9333EA), (0x93, 0x33, 0xEA));
        assert_eq!(hex(0x9333EA), "#9333ea");
        assert_eq!(hex(0x000001), "#000001");
    }

    #[test]
    fn light_keyword_is_purple_and_bold() {
        let s = palette(false).style(Category::Keyword);
        assert_eq!(s.rgb(), (0x93, 0x33, 0xEA));
        assert!(s.bold);
    }

    #[test]
    fn comments_are_italic_in_both_themes() {
        for dark in [false, true] {
            assert!(palette(dark).style(Category::Comment).italic);
        }
    }

    // Every styled category must stand out from plain text.
    #[test]
    fn classified_categories_differ_from_plain() {
        for dark in [false, true] {
            let p = palette(dark);
            for cat in Category::ALL {
                if cat != Category::Plain {
                    assert_ne!(p.style(cat), p.plain, "{cat:?} looks plain (dark={dark})");
                }
            }
        }
    }

    #[test]
    fn literal_and_number_share_a_colour_in_light_theme() {
        assert_eq!(LIGHT.literal, LIGHT.number);
    }
}
