//! File based configuration.
//!
//! Every field is optional in the file; anything left out falls back to the
//! defaults of the chosen [`Variant`]. A typical file looks like:
//!
//! ```toml
//! variant = "justified"
//! preview_width = 520
//! colour = "#8ACE00"
//! font = "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf"
//!
//! [export]
//! blur = 1.5
//! ```

use crate::colour::Colour;
use crate::style::{Style, Variant};
use crate::units::Px;
use crate::widget::DEFAULT_PREVIEW_WIDTH;
use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root of the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    /// Width of the preview box text is fitted into
    pub preview_width: Px,
    /// Swatch used for the text
    pub colour: Colour,
    /// TTF/OTF file to render with; the built-in block face is used if unset
    pub font: Option<PathBuf>,
    /// Where exports are written; the current directory if unset
    pub output_dir: Option<PathBuf>,
    pub export: ExportConfig,
}

/// Overrides for the export parameters of the chosen variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub scale: Option<f32>,
    pub blur: Option<f32>,
    pub file_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::default(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
            colour: Colour::default(),
            font: None,
            output_dir: None,
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML source
    pub fn from_toml(source: &str) -> Result<Config> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Config::from_toml(&source)
    }

    /// The variant's style with any export overrides applied
    pub fn style(&self) -> Style {
        let mut style = self.variant.style();
        if let Some(scale) = self.export.scale {
            style.scale = scale;
        }
        if let Some(blur) = self.export.blur {
            style.blur = blur;
        }
        if let Some(file_name) = &self.export.file_name {
            style.file_name = file_name.clone();
        }
        style
    }

    /// Full path an export should be written to
    pub fn output_path(&self, style: &Style) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&style.file_name),
            None => PathBuf::from(&style.file_name),
        }
    }
}
