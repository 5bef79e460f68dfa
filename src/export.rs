use crate::canvas::ExportCanvas;
use crate::colour::{colours, Colour};
use crate::layout::{fit_font_size, normalize_text, wrap_lines, LineSet, TextMeasurer, Typeface};
use crate::rect::Rect;
use crate::style::{CanvasShape, ExportAlign, Style, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
use crate::units::Px;
use crate::{BratError, Result};
use log::{debug, info};

/// Everything the export needs to know about the widget at the moment the
/// user asks for an image
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest<'a> {
    /// Raw input, normalized before use
    pub text: &'a str,
    /// The size the preview is currently showing. When absent the text is
    /// fitted again from scratch.
    pub font_size: Option<Px>,
    pub preview_width: Px,
    pub colour: Colour,
}

/// Where every line goes on the export canvas, in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    pub canvas_width: Px,
    pub canvas_height: Px,
    pub font_size: Px,
    pub line_height: Px,
    /// The region lines are wrapped, centred and justified within
    pub text_box: Rect,
    pub lines: LineSet,
    /// Baseline of the first line; each following line sits `line_height` lower
    pub first_baseline: Px,
}

impl ExportLayout {
    /// Work out the canvas geometry for `request`. Fails with
    /// [BratError::EmptyText] when there is nothing to draw.
    pub fn compute<M: TextMeasurer + ?Sized>(
        request: &ExportRequest<'_>,
        style: &Style,
        measurer: &M,
    ) -> Result<ExportLayout> {
        let text = normalize_text(request.text);
        if text.is_empty() {
            return Err(BratError::EmptyText);
        }

        let container_width = style.container_width(request.preview_width);
        let font_size = request.font_size.unwrap_or_else(|| {
            fit_font_size(measurer, &text, container_width, style.fit_ratio).font_size
        });

        let canvas_width = request.preview_width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        // lines fill the canvas between the paddings, whatever the preview was
        let wrap_width = style.container_width(canvas_width);
        let lines = wrap_lines(measurer, &text, font_size, wrap_width);

        let line_height = style.line_height(font_size);
        let block_height = line_height * lines.len() as f32;

        let (canvas_height, first_baseline) = match style.shape {
            CanvasShape::Flow => {
                let height = (block_height + style.padding.vertical()).max(MIN_CANVAS_SIZE);
                (height, style.padding.top + font_size)
            }
            CanvasShape::Square => {
                let top = (canvas_width - block_height) / 2.0;
                (canvas_width, top + font_size)
            }
        };

        let text_box = style.padding.content_box(canvas_width, canvas_height);

        Ok(ExportLayout {
            canvas_width,
            canvas_height,
            font_size,
            line_height,
            text_box,
            lines,
            first_baseline,
        })
    }

    /// The baseline of line `index`
    pub fn baseline(&self, index: usize) -> Px {
        self.first_baseline + self.line_height * index as f32
    }
}

/// A finished PNG, ready to be offered for download
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub file_name: String,
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
    pub png: Vec<u8>,
}

/// Draw the laid out lines onto a fresh canvas: white background, every line
/// in `colour`, then the blur.
pub fn render_canvas<F: Typeface + ?Sized>(
    layout: &ExportLayout,
    style: &Style,
    face: &F,
    colour: Colour,
) -> ExportCanvas {
    let mut canvas = ExportCanvas::new(layout.canvas_width, layout.canvas_height, style.scale);
    canvas.fill(colours::WHITE);

    let last = layout.lines.len().saturating_sub(1);
    for (index, line) in layout.lines.iter().enumerate() {
        let baseline = layout.baseline(index);
        let text_box = &layout.text_box;

        match style.export_align {
            ExportAlign::Left => {
                canvas.draw_text(face, line, (text_box.x1, baseline), layout.font_size, colour);
            }
            ExportAlign::Center => {
                let width = face.width(line, layout.font_size);
                let x = text_box.center_x() - width / 2.0;
                canvas.draw_text(face, line, (x, baseline), layout.font_size, colour);
            }
            ExportAlign::Justify => {
                let words: Vec<&str> = line.split(' ').collect();
                // the last line and lone words are set ragged
                if index == last || words.len() < 2 {
                    canvas.draw_text(face, line, (text_box.x1, baseline), layout.font_size, colour);
                    continue;
                }

                let widths: Vec<Px> = words
                    .iter()
                    .map(|word| face.width(word, layout.font_size))
                    .collect();
                let words_width: Px = widths.iter().copied().sum();
                let gap = (text_box.width() - words_width) / (words.len() - 1) as f32;

                let mut x = text_box.x1;
                for (word, width) in words.iter().zip(widths) {
                    canvas.draw_text(face, word, (x, baseline), layout.font_size, colour);
                    x += width + gap;
                }
            }
        }
    }

    canvas.blur(Px(style.blur));
    canvas
}

/// Lay out, draw, and encode `request` as a PNG
pub fn export_png<F: Typeface + ?Sized>(
    request: &ExportRequest<'_>,
    style: &Style,
    face: &F,
) -> Result<Export> {
    let layout = ExportLayout::compute(request, style, face)?;
    debug!(
        "export layout: {}x{} canvas, {} lines at {}",
        layout.canvas_width,
        layout.canvas_height,
        layout.lines.len(),
        layout.font_size
    );

    let canvas = render_canvas(&layout, style, face, request.colour);
    let png = canvas.encode_png()?;
    let (width, height) = canvas.image().dimensions();
    info!("exported {} ({width}x{height}, {} bytes)", style.file_name, png.len());

    Ok(Export {
        file_name: style.file_name.clone(),
        width,
        height,
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BlockFace;
    use crate::Variant;

    fn request(text: &str) -> ExportRequest<'_> {
        ExportRequest {
            text,
            font_size: None,
            preview_width: Px(440.0),
            colour: colours::BLACK,
        }
    }

    #[test]
    fn empty_text_is_refused() {
        for text in ["", "  \n "] {
            let err = export_png(&request(text), &Style::default(), &BlockFace).unwrap_err();
            assert!(matches!(err, BratError::EmptyText));
            assert_eq!(err.to_string(), "Please enter some text first");
        }
    }

    #[test]
    fn flow_canvas_grows_with_lines() {
        let style = Variant::Classic.style();
        let short = ExportLayout::compute(&request("hi"), &style, &BlockFace).unwrap();
        assert_eq!(short.canvas_width, Px(440.0));
        assert_eq!(short.canvas_height, Px(300.0));
        assert_eq!(short.first_baseline, Px(20.0) + short.font_size);

        let long_text = lipsum::lipsum(150);
        let long = ExportLayout::compute(&request(&long_text), &style, &BlockFace).unwrap();
        assert_eq!(long.font_size, Px(24.0));
        let expected = long.line_height * long.lines.len() as f32 + Px(40.0);
        assert!(long.canvas_height > Px(300.0));
        assert!((long.canvas_height.0 - expected.0).abs() < 0.01);
    }

    #[test]
    fn canvas_width_is_clamped() {
        let style = Variant::Classic.style();
        let mut narrow = request("hello there");
        narrow.preview_width = Px(200.0);
        let mut wide = request("hello there");
        wide.preview_width = Px(1200.0);

        let narrow = ExportLayout::compute(&narrow, &style, &BlockFace).unwrap();
        let wide = ExportLayout::compute(&wide, &style, &BlockFace).unwrap();
        assert_eq!(narrow.canvas_width, Px(300.0));
        assert_eq!(wide.canvas_width, Px(600.0));
        // the text box is the canvas minus its padding, whatever the preview
        assert_eq!(narrow.text_box.width(), Px(260.0));
        assert_eq!(wide.text_box.width(), Px(560.0));
        assert_eq!(narrow.text_box.x2, Px(280.0));
    }

    /// Left-most and right-most columns holding any dark ink, in device pixels
    fn ink_columns(canvas: &ExportCanvas) -> (u32, u32) {
        let image = canvas.image();
        let columns: Vec<u32> = (0..image.width())
            .filter(|&x| (0..image.height()).any(|y| image.get_pixel(x, y)[0] < 128))
            .collect();
        (columns[0], columns[columns.len() - 1])
    }

    #[test]
    fn centred_text_sits_in_the_middle_of_a_narrow_preview_canvas() {
        let style = Style {
            blur: 0.0,
            ..Variant::Centered.style()
        };
        let mut req = request("hi");
        req.preview_width = Px(200.0);
        req.font_size = Some(Px(40.0));
        let layout = ExportLayout::compute(&req, &style, &BlockFace).unwrap();
        assert_eq!(layout.canvas_width, Px(300.0));

        let canvas = render_canvas(&layout, &style, &BlockFace, colours::BLACK);
        let (left, right) = ink_columns(&canvas);
        let ink_mid = (left + right + 1) as f32 / 2.0 / canvas.scale();
        assert!((ink_mid - 150.0).abs() <= 1.0, "ink centred on {ink_mid}");
    }

    #[test]
    fn justified_lines_reach_the_padding_of_a_narrow_preview_canvas() {
        let style = Style {
            blur: 0.0,
            ..Variant::Justified.style()
        };
        let mut req = request("aa bb cc dd ee ff gg hh ii jj kk ll mm nn oo pp qq");
        req.preview_width = Px(200.0);
        req.font_size = Some(Px(24.0));
        let layout = ExportLayout::compute(&req, &style, &BlockFace).unwrap();
        assert!(layout.lines.len() > 2);

        let canvas = render_canvas(&layout, &style, &BlockFace, colours::BLACK);
        let scale = canvas.scale();
        let baseline = (layout.baseline(0).0 * scale) as u32 - 2;
        // 280 is the canvas width less the right padding
        let right = (280.0 * scale) as u32 - 6;
        assert_eq!(canvas.image().get_pixel(right, baseline)[0], 0);
    }

    #[test]
    fn square_canvas_centres_the_block() {
        let style = Variant::Centered.style();
        let layout = ExportLayout::compute(&request("one two three"), &style, &BlockFace).unwrap();
        assert_eq!(layout.canvas_width, layout.canvas_height);

        let block = layout.line_height * layout.lines.len() as f32;
        let top = layout.first_baseline - layout.font_size;
        let bottom = layout.canvas_height - (top + block);
        assert!((top.0 - bottom.0).abs() < 0.01);
    }

    #[test]
    fn keeps_the_preview_font_size() {
        let mut req = request("keep me");
        req.font_size = Some(Px(30.0));
        let layout = ExportLayout::compute(&req, &Style::default(), &BlockFace).unwrap();
        assert_eq!(layout.font_size, Px(30.0));
    }

    #[test]
    fn exports_a_png_at_double_scale() {
        let export = export_png(&request("Hello world"), &Style::default(), &BlockFace).unwrap();
        assert_eq!(export.file_name, "brat-text.png");
        assert_eq!((export.width, export.height), (880, 600));

        let decoded = image::load_from_memory(&export.png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (880, 600));
    }

    #[test]
    fn justified_lines_span_the_text_box() {
        let style = Variant::Justified.style();
        let text = "aa bb cc dd ee ff gg hh ii jj kk ll mm nn oo pp qq";
        let mut req = request(text);
        req.font_size = Some(Px(40.0));
        let layout = ExportLayout::compute(&req, &style, &BlockFace).unwrap();
        assert!(layout.lines.len() > 2);

        let canvas = render_canvas(&layout, &Style { blur: 0.0, ..style }, &BlockFace, colours::BLACK);
        let image = canvas.image();
        let scale = canvas.scale();

        // the first line should reach (almost) the right edge of the text box
        let baseline = (layout.baseline(0).0 * scale) as u32 - 2;
        let right = (layout.text_box.x2.0 * scale) as u32 - 6;
        let left_of_box = (layout.text_box.x1.0 * scale) as u32 - 2;
        assert_eq!(image.get_pixel(right, baseline)[0], 0);
        assert_eq!(image.get_pixel(left_of_box, baseline)[0], 255);
    }

    #[test]
    fn justify_leaves_single_words_alone() {
        let style = Style {
            blur: 0.0,
            ..Variant::Justified.style()
        };
        let text = "incomprehensibilities everywhere";
        let mut req = request(text);
        req.font_size = Some(Px(40.0));
        let layout = ExportLayout::compute(&req, &style, &BlockFace).unwrap();
        assert_eq!(layout.lines.lines(), ["incomprehensibilities", "everywhere"]);

        // must not blow up on a one word line
        let canvas = render_canvas(&layout, &style, &BlockFace, colours::RED);
        let export_pixels = canvas
            .image()
            .pixels()
            .filter(|p| p.0 == [255, 0, 0, 255])
            .count();
        assert!(export_pixels > 0);
    }

    #[test]
    fn red_swatch_gives_red_text_on_white() {
        let mut req = request("Hello world");
        req.colour = Colour::from_hex("#FF0000").unwrap();
        let layout = ExportLayout::compute(&req, &Style::default(), &BlockFace).unwrap();
        let canvas = render_canvas(&layout, &Style::default(), &BlockFace, req.colour);

        let mut reddish = 0;
        for pixel in canvas.image().pixels() {
            let [r, g, b, _] = pixel.0;
            // blurring only ever mixes red with white
            assert!(r >= 250 && g == b, "unexpected pixel {pixel:?}");
            if g < 128 {
                reddish += 1;
            }
        }
        assert!(reddish > 0);
        let corner = canvas.image().get_pixel(0, 0).0;
        assert!(corner[..3].iter().all(|&c| c >= 250), "{corner:?}");
    }
}
