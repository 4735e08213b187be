//! Metrics for the standard Helvetica faces.
//!
//! Reports use the non-embedded base-14 Helvetica family, so text is measured
//! with the published AFM advance widths rather than by shaping a font file.

/// The three faces a report draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Oblique];

    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Oblique => "Helvetica-Oblique",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            // Oblique shares the upright advance widths.
            FontFace::Regular | FontFace::Oblique => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of `ch` in thousandths of the font size.
    pub fn char_width(self, ch: char) -> u16 {
        let code = ch as u32;
        if (32..=126).contains(&code) {
            self.widths()[(code - 32) as usize]
        } else {
            FALLBACK_WIDTH
        }
    }

    /// Width of `text` at `size` points.
    pub fn measure(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

const FALLBACK_WIDTH: u16 = 556;

// Codes 32 through 126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_advance_widths() {
        assert_eq!(FontFace::Regular.char_width(' '), 278);
        assert_eq!(FontFace::Regular.char_width('W'), 944);
        assert_eq!(FontFace::Regular.char_width('i'), 222);
        assert_eq!(FontFace::Bold.char_width('i'), 278);
        assert_eq!(FontFace::Bold.char_width('m'), 889);
        assert_eq!(FontFace::Regular.char_width('~'), 584);
    }

    #[test]
    fn bold_is_never_narrower() {
        for code in 32u8..=126 {
            let ch = code as char;
            assert!(
                FontFace::Bold.char_width(ch) + 60 >= FontFace::Regular.char_width(ch),
                "unexpected width for {:?}",
                ch
            );
        }
    }

    #[test]
    fn measure_scales_with_size() {
        let w10 = FontFace::Regular.measure("Cash Flow", 10.0);
        let w20 = FontFace::Regular.measure("Cash Flow", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 0.001);
        assert_eq!(FontFace::Regular.measure("", 12.0), 0.0);
    }
}
