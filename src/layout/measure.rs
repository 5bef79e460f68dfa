use crate::units::Px;

/// Something that knows how wide a run of text is at a given font size.
///
/// This is the only capability fitting and wrapping need, so they can be
/// driven by a real [`Font`](crate::Font), by [`BlockFace`], or by anything
/// else that can answer the question.
pub trait TextMeasurer {
    /// The advance width of `text` laid out on a single line
    fn width(&self, text: &str, font_size: Px) -> Px;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn width(&self, text: &str, font_size: Px) -> Px {
        (**self).width(text, font_size)
    }
}

/// A coverage bitmap for a single glyph, positioned relative to the pen on
/// the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    /// Offset from the pen position to the left edge of the bitmap
    pub left: i32,
    /// Distance from the baseline up to the top row of the bitmap
    pub top: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, one byte per pixel (0 = empty, 255 = solid)
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// A glyph with nothing to draw, e.g. a space
    pub fn empty() -> GlyphBitmap {
        GlyphBitmap {
            left: 0,
            top: 0,
            width: 0,
            height: 0,
            coverage: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A face that can both measure and draw text. Sizes passed to
/// [`Typeface::rasterize`] are in device pixels.
pub trait Typeface: TextMeasurer {
    /// Distance from the baseline to the top of the tallest glyphs
    fn ascent(&self, size: Px) -> Px;

    /// Horizontal advance of a single character
    fn advance(&self, ch: char, size: Px) -> Px;

    /// Produce the coverage bitmap for `ch` at `size`
    fn rasterize(&self, ch: char, size: Px) -> GlyphBitmap;
}

/// A dependency-free face that treats every character as a box 0.6em wide.
///
/// Visible characters are drawn as solid blocks from the baseline up to the
/// cap height, which is plenty for previews, tests, and machines with no
/// fonts installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockFace;

impl BlockFace {
    const ADVANCE_EM: f32 = 0.6;
    const ASCENT_EM: f32 = 0.8;
    const CAP_EM: f32 = 0.7;
}

impl TextMeasurer for BlockFace {
    fn width(&self, text: &str, font_size: Px) -> Px {
        font_size * (Self::ADVANCE_EM * text.chars().count() as f32)
    }
}

impl Typeface for BlockFace {
    fn ascent(&self, size: Px) -> Px {
        size * Self::ASCENT_EM
    }

    fn advance(&self, _ch: char, size: Px) -> Px {
        size * Self::ADVANCE_EM
    }

    fn rasterize(&self, ch: char, size: Px) -> GlyphBitmap {
        if ch.is_whitespace() {
            return GlyphBitmap::empty();
        }

        // leave a sliver of side bearing either side so words stay legible
        let advance = (size * Self::ADVANCE_EM).0;
        let bearing = (advance * 0.1).round() as i32;
        let width = (advance - 2.0 * bearing as f32).round().max(1.0) as usize;
        let height = (size * Self::CAP_EM).0.round().max(1.0) as usize;

        GlyphBitmap {
            left: bearing,
            top: height as i32,
            width,
            height,
            coverage: vec![255; width * height],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Px, b: f32) -> bool {
        (a.0 - b).abs() < 1e-3
    }

    #[test]
    fn block_face_width_scales_with_chars_and_size() {
        assert_eq!(BlockFace.width("", Px(50.0)), Px(0.0));
        assert!(close(BlockFace.width("abcde", Px(10.0)), 30.0));
        assert!(close(BlockFace.width("héllo", Px(10.0)), 30.0));
    }

    #[test]
    fn block_face_skips_whitespace() {
        assert!(BlockFace.rasterize(' ', Px(40.0)).is_empty());

        let glyph = BlockFace.rasterize('x', Px(40.0));
        assert!(!glyph.is_empty());
        assert_eq!(glyph.coverage.len(), glyph.width * glyph.height);
        assert!(glyph.left as f32 + glyph.width as f32 <= BlockFace.advance('x', Px(40.0)).0);
    }

    #[test]
    fn measurer_through_reference() {
        fn measure<M: TextMeasurer>(m: M) -> Px {
            m.width("ab", Px(10.0))
        }
        assert!(close(measure(&BlockFace), 12.0));
    }
}
