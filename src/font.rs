use crate::layout::{GlyphBitmap, TextMeasurer, Typeface};
use crate::{BratError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed TTF or OTF font.
///
/// Metrics and advances come straight from the font tables; glyph coverage is
/// produced by [fontdue] from the same bytes, so what is measured is what is
/// drawn.
pub struct Font {
    pub face: OwnedFace,
    raster: fontdue::Font,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, BratError> {
        let raster = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
            .map_err(BratError::Raster)?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Read and load a font file from disk
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, BratError> {
        let bytes = std::fs::read(path.as_ref())?;
        Font::load(bytes)
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> Px {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// The glyph used for `ch`, falling back to the replacement character and
    /// then to `?` for characters the font does not cover
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }
}

impl TextMeasurer for Font {
    fn width(&self, text: &str, font_size: Px) -> Px {
        text.chars().map(|ch| self.advance(ch, font_size)).sum()
    }
}

impl Typeface for Font {
    fn ascent(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    fn advance(&self, ch: char, size: Px) -> Px {
        let advance = self
            .glyph_id(ch)
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(gid))
            .unwrap_or_default();
        self.scaling(size) * advance as f32
    }

    fn rasterize(&self, ch: char, size: Px) -> GlyphBitmap {
        let Some(gid) = self.glyph_id(ch) else {
            return GlyphBitmap::empty();
        };

        let (metrics, coverage) = self.raster.rasterize_indexed(gid.0, size.0);
        // fontdue measures ymin from the baseline to the bottom row
        GlyphBitmap {
            left: metrics.xmin,
            top: metrics.ymin + metrics.height as i32,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}
