use crate::layout::Margins;
use crate::units::Px;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The file name exports are offered under
pub const DEFAULT_FILE_NAME: &str = "brat-text.png";

/// Export canvases are never narrower than this
pub const MIN_CANVAS_SIZE: Px = Px(300.0);
/// Export canvases are never wider than this
pub const MAX_CANVAS_SIZE: Px = Px(600.0);

/// How lines are aligned inside the preview box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewAlign {
    #[default]
    Left,
    Center,
}

/// How lines are placed horizontally on the export canvas
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAlign {
    #[default]
    Left,
    Center,
    /// Stretch the gaps between words so every line but the last spans the
    /// full wrap width
    Justify,
}

/// The geometry of the export canvas
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasShape {
    /// Width follows the preview, height grows with the number of lines and
    /// text starts at the top margin
    #[default]
    Flow,
    /// A square canvas with the block of lines centred vertically
    Square,
}

/// The three flavours of the widget, each a preset [Style]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fits against the full container width, left aligned, flowing canvas
    #[default]
    Classic,
    /// Fits against 80% of the container, centred, square canvas
    Centered,
    /// Fits against 80% of the container, justified export, square canvas
    Justified,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Centered, Variant::Justified];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Centered => "centered",
            Variant::Justified => "justified",
        }
    }

    /// The style this variant renders with
    pub fn style(&self) -> Style {
        let base = Style::default();
        match self {
            Variant::Classic => base,
            Variant::Centered => Style {
                fit_ratio: 0.8,
                preview_align: PreviewAlign::Center,
                export_align: ExportAlign::Center,
                shape: CanvasShape::Square,
                ..base
            },
            Variant::Justified => Style {
                fit_ratio: 0.8,
                preview_align: PreviewAlign::Left,
                export_align: ExportAlign::Justify,
                shape: CanvasShape::Square,
                ..base
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown variant `{s}`, expected classic, centered or justified"))
    }
}

/// Every knob that differs between the variants, plus the fixed export
/// parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Text must measure below `container width * fit_ratio` to be set at a size
    pub fit_ratio: f32,
    pub preview_align: PreviewAlign,
    pub export_align: ExportAlign,
    pub shape: CanvasShape,
    /// Padding between the edge of the preview (and canvas) and the text
    pub padding: Margins,
    /// Line height as a multiple of the font size
    pub line_spacing: f32,
    /// Device pixels per logical pixel on the export canvas
    pub scale: f32,
    /// Gaussian blur radius applied to the text, in logical pixels
    pub blur: f32,
    pub file_name: String,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fit_ratio: 1.0,
            preview_align: PreviewAlign::Left,
            export_align: ExportAlign::Left,
            shape: CanvasShape::Flow,
            padding: Margins::all(Px(20.0)),
            line_spacing: 1.2,
            scale: 2.0,
            blur: 1.2,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Style {
    /// The width text is fitted and wrapped against inside a preview box of
    /// the given width
    pub fn container_width(&self, preview_width: Px) -> Px {
        (preview_width - self.padding.horizontal()).max(Px::ZERO)
    }

    pub fn line_height(&self, font_size: Px) -> Px {
        font_size * self.line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse_by_name() {
        assert_eq!("classic".parse::<Variant>().unwrap(), Variant::Classic);
        assert_eq!(" Justified".parse::<Variant>().unwrap(), Variant::Justified);
        assert!("wobbly".parse::<Variant>().is_err());
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn presets_differ_where_expected() {
        let classic = Variant::Classic.style();
        let centered = Variant::Centered.style();
        let justified = Variant::Justified.style();

        assert_eq!(classic.fit_ratio, 1.0);
        assert_eq!(classic.shape, CanvasShape::Flow);
        assert_eq!(centered.preview_align, PreviewAlign::Center);
        assert_eq!(centered.shape, CanvasShape::Square);
        assert_eq!(justified.export_align, ExportAlign::Justify);
        assert_eq!(justified.fit_ratio, 0.8);

        for style in [classic, centered, justified] {
            assert_eq!(style.file_name, "brat-text.png");
            assert_eq!(style.scale, 2.0);
        }
    }

    #[test]
    fn container_width_takes_off_padding() {
        let style = Style::default();
        assert_eq!(style.container_width(Px(440.0)), Px(400.0));
        assert_eq!(style.container_width(Px(10.0)), Px::ZERO);
    }
}
