use crate::layout::{fit_font_size, normalize_text, wrap_lines, FitResult, LineSet, TextMeasurer};
use crate::style::{PreviewAlign, Style};
use crate::units::Px;
use log::debug;

/// Shown in the preview box while there is no text
pub const PLACEHOLDER: &str = "Your text will appear here";

/// What the preview box currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Nothing has been typed (or only whitespace)
    Placeholder,
    /// The fitted text, one entry per line
    Text {
        fit: FitResult,
        align: PreviewAlign,
        lines: LineSet,
    },
}

impl Preview {
    /// Fit and wrap `raw` input for a preview box `preview_width` wide
    pub fn render<M: TextMeasurer + ?Sized>(
        raw: &str,
        preview_width: Px,
        style: &Style,
        measurer: &M,
    ) -> Preview {
        let text = normalize_text(raw);
        if text.is_empty() {
            return Preview::Placeholder;
        }

        let container_width = style.container_width(preview_width);
        let fit = fit_font_size(measurer, &text, container_width, style.fit_ratio);
        let lines = wrap_lines(measurer, &text, fit.font_size, container_width);
        debug!(
            "preview: {} lines at {} in {}",
            lines.len(),
            fit.font_size,
            container_width
        );

        Preview::Text {
            fit,
            align: style.preview_align,
            lines,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder)
    }

    /// The font size the text is shown at, if there is any text
    pub fn font_size(&self) -> Option<Px> {
        match self {
            Preview::Placeholder => None,
            Preview::Text { fit, .. } => Some(fit.font_size),
        }
    }

    /// The wrapped lines, empty for the placeholder
    pub fn lines(&self) -> &[String] {
        match self {
            Preview::Placeholder => &[],
            Preview::Text { lines, .. } => lines.lines(),
        }
    }

    /// Markup for the preview box contents: one `<div>` per line in a
    /// wrapper carrying the font size and alignment, or the placeholder
    pub fn to_html(&self) -> String {
        let (fit, align, lines) = match self {
            Preview::Placeholder => {
                return format!(r#"<div class="placeholder">{PLACEHOLDER}</div>"#);
            }
            Preview::Text { fit, align, lines } => (fit, align, lines),
        };

        let align = match align {
            PreviewAlign::Left => "left",
            PreviewAlign::Center => "center",
        };

        let mut html = format!(
            r#"<div class="text-output" style="font-size: {}px; text-align: {align}">"#,
            fit.font_size.0
        );
        for line in lines {
            html.push_str(&format!("<div>{}</div>", escape_html(line)));
        }
        html.push_str("</div>");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
