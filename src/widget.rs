use crate::colour::Colour;
use crate::export::{export_png, Export, ExportRequest};
use crate::layout::{TextMeasurer, Typeface};
use crate::preview::Preview;
use crate::style::Style;
use crate::units::Px;
use crate::{BratError, Result};
use log::{debug, warn};

/// A preview box this wide is assumed until told otherwise
pub const DEFAULT_PREVIEW_WIDTH: Px = Px(440.0);

/// Everything the widget knows between user actions. Each command takes the
/// current state and hands back the next one; nothing is shared or global.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// The raw input, exactly as typed
    pub text: String,
    /// The selected swatch
    pub colour: Colour,
    /// Width of the preview box the text is fitted into
    pub preview_width: Px,
    pub preview: Preview,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState::new(DEFAULT_PREVIEW_WIDTH)
    }
}

/// Something the user did
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TextChanged(String),
    ColourSelected(Colour),
    /// The preview box changed size
    Resized(Px),
    Export,
}

/// What the outside world should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Redraw the preview box
    Preview,
    /// Offer the image for download
    Download(Export),
    /// Show a blocking message to the user
    Alert(String),
}

impl RenderState {
    /// An empty widget showing the placeholder
    pub fn new(preview_width: Px) -> RenderState {
        RenderState {
            text: String::new(),
            colour: Colour::default(),
            preview_width,
            preview: Preview::Placeholder,
        }
    }

    /// New input: fit, wrap, and re-render the preview
    pub fn on_text_changed<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        style: &Style,
        measurer: &M,
    ) -> RenderState {
        let preview = Preview::render(text, self.preview_width, style, measurer);
        RenderState {
            text: text.to_string(),
            preview,
            ..self.clone()
        }
    }

    /// The preview box was resized; the text has to be fitted again
    pub fn on_resized<M: TextMeasurer + ?Sized>(
        &self,
        preview_width: Px,
        style: &Style,
        measurer: &M,
    ) -> RenderState {
        let preview = Preview::render(&self.text, preview_width, style, measurer);
        RenderState {
            preview_width,
            preview,
            ..self.clone()
        }
    }

    /// A swatch was picked. Layout doesn't depend on colour so the preview
    /// stays as it is.
    pub fn on_colour_selected(&self, colour: Colour) -> RenderState {
        RenderState {
            colour,
            ..self.clone()
        }
    }

    /// Render the current text to a PNG at the size the preview shows
    pub fn on_export<F: Typeface + ?Sized>(&self, style: &Style, face: &F) -> Result<Export> {
        let request = ExportRequest {
            text: &self.text,
            font_size: self.preview.font_size(),
            preview_width: self.preview_width,
            colour: self.colour,
        };
        export_png(&request, style, face)
    }

    /// Apply `command`, returning the next state and what should happen as a
    /// result. Only real failures (e.g. PNG encoding) come back as errors;
    /// exporting nothing is reported to the user as an [Effect::Alert].
    pub fn dispatch<F: Typeface + ?Sized>(
        self,
        command: Command,
        style: &Style,
        face: &F,
    ) -> Result<(RenderState, Effect)> {
        debug!("dispatching {command:?}");
        match command {
            Command::TextChanged(text) => {
                Ok((self.on_text_changed(&text, style, face), Effect::Preview))
            }
            Command::ColourSelected(colour) => {
                Ok((self.on_colour_selected(colour), Effect::Preview))
            }
            Command::Resized(width) => Ok((self.on_resized(width, style, face), Effect::Preview)),
            Command::Export => match self.on_export(style, face) {
                Ok(export) => Ok((self, Effect::Download(export))),
                Err(err @ BratError::EmptyText) => {
                    warn!("export refused: {err}");
                    Ok((self, Effect::Alert(err.to_string())))
                }
                Err(err) => Err(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::layout::BlockFace;
    use crate::Variant;

    #[test]
    fn starts_with_placeholder() {
        let state = RenderState::default();
        assert!(state.preview.is_placeholder());
        assert_eq!(state.colour, colours::BLACK);
        assert_eq!(state.preview_width, Px(440.0));
    }

    #[test]
    fn commands_do_not_touch_the_previous_state() {
        let style = Style::default();
        let before = RenderState::default();
        let after = before.on_text_changed("hello", &style, &BlockFace);
        assert!(before.preview.is_placeholder());
        assert_eq!(after.text, "hello");
        assert_eq!(after.preview.lines(), ["hello"]);

        let red = after.on_colour_selected(colours::RED);
        assert_eq!(red.colour, colours::RED);
        assert_eq!(red.preview, after.preview);
        assert_eq!(after.colour, colours::BLACK);
    }

    #[test]
    fn resizing_refits() {
        let style = Style::default();
        let wide = RenderState::new(Px(1000.0)).on_text_changed("abcdefghij", &style, &BlockFace);
        let narrow = wide.on_resized(Px(240.0), &style, &BlockFace);
        assert!(narrow.preview.font_size() < wide.preview.font_size());
        assert_eq!(narrow.text, wide.text);
    }

    #[test]
    fn exporting_nothing_alerts() {
        let style = Style::default();
        let state = RenderState::default()
            .on_text_changed("   ", &style, &BlockFace);
        let (state, effect) = state.dispatch(Command::Export, &style, &BlockFace).unwrap();
        assert_eq!(effect, Effect::Alert("Please enter some text first".into()));
        assert!(state.preview.is_placeholder());
    }

    #[test]
    fn full_session() {
        let style = Variant::Justified.style();
        let state = RenderState::default();
        let (state, effect) = state
            .dispatch(Command::TextChanged("brat summer forever".into()), &style, &BlockFace)
            .unwrap();
        assert_eq!(effect, Effect::Preview);
        let (state, _) = state
            .dispatch(Command::ColourSelected(colours::BRAT), &style, &BlockFace)
            .unwrap();
        let (_, effect) = state.dispatch(Command::Export, &style, &BlockFace).unwrap();

        let Effect::Download(export) = effect else {
            panic!("expected a download, got {effect:?}");
        };
        assert_eq!(export.file_name, "brat-text.png");
        // square canvas at 2x
        assert_eq!(export.width, export.height);
        assert_eq!(export.width, 880);
    }
}
