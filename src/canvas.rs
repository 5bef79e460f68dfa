use crate::colour::Colour;
use crate::layout::{GlyphBitmap, Typeface};
use crate::units::Px;
use crate::Result;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

/// An offscreen RGBA bitmap that text is drawn onto before export.
///
/// Drawing happens in logical pixels; the backing image is `scale` times
/// larger in each direction, the same way a 2x canvas context works.
pub struct ExportCanvas {
    image: RgbaImage,
    scale: f32,
    width: Px,
    height: Px,
}

impl ExportCanvas {
    pub fn new(width: Px, height: Px, scale: f32) -> ExportCanvas {
        let image = RgbaImage::new(width.to_device(scale), height.to_device(scale));
        ExportCanvas {
            image,
            scale,
            width,
            height,
        }
    }

    /// Logical width
    pub fn width(&self) -> Px {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> Px {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The backing bitmap, in device pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Paint every pixel with `colour`
    pub fn fill(&mut self, colour: Colour) {
        let pixel = colour.to_rgba();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Draw a single line of text with its baseline starting at `(x, baseline)`.
    /// Returns the logical x coordinate the pen ended up at.
    pub fn draw_text<F: Typeface + ?Sized>(
        &mut self,
        face: &F,
        text: &str,
        (x, baseline): (Px, Px),
        font_size: Px,
        colour: Colour,
    ) -> Px {
        let device_size = font_size * self.scale;
        let mut pen_x = x.0 * self.scale;
        let baseline_y = baseline.0 * self.scale;
        let rgba = colour.to_rgba();

        for ch in text.chars() {
            let glyph = face.rasterize(ch, device_size);
            if !glyph.is_empty() {
                self.blend_glyph(&glyph, pen_x.round() as i32, baseline_y.round() as i32, rgba);
            }
            pen_x += face.advance(ch, device_size).0;
        }

        Px(pen_x / self.scale)
    }

    fn blend_glyph(&mut self, glyph: &GlyphBitmap, pen_x: i32, baseline_y: i32, colour: Rgba<u8>) {
        let (width, height) = (self.image.width() as i32, self.image.height() as i32);
        let left = pen_x + glyph.left;
        let top = baseline_y - glyph.top;

        for (i, &alpha) in glyph.coverage.iter().enumerate() {
            if alpha == 0 {
                continue;
            }
            let px = left + (i % glyph.width) as i32;
            let py = top + (i / glyph.width) as i32;
            // anything off the canvas is clipped
            if px < 0 || py < 0 || px >= width || py >= height {
                continue;
            }
            let dst = self.image.get_pixel_mut(px as u32, py as u32);
            *dst = blend(*dst, colour, alpha);
        }
    }

    /// Soften everything on the canvas with a gaussian blur of `radius`
    /// logical pixels
    pub fn blur(&mut self, radius: Px) {
        let sigma = radius.0 * self.scale;
        if sigma <= 0.0 {
            return;
        }
        self.image = image::imageops::blur(&self.image, sigma);
    }

    /// Encode the bitmap as a PNG file
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut png: Vec<u8> = Vec::new();
        PngEncoder::new(&mut png).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ColorType::Rgba8,
        )?;
        Ok(png)
    }
}

/// Source-over blend of an opaque colour at `coverage` onto `dst`
fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let a = coverage as u32;
    let mix = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Rgba([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        dst[3].max(coverage),
    ])
}
