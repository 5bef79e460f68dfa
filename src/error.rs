use thiserror::Error;

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, BratError>;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum BratError {
    /// Export was requested while the input was empty or only whitespace.
    /// The message is what the user is shown.
    #[error("Please enter some text first")]
    EmptyText,

    /// A colour string could not be parsed as `#RRGGBB` or `#RGB`
    #[error("invalid colour `{0}`, expected #RRGGBB")]
    InvalidColour(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// [fontdue] could not prepare the font for rasterization
    #[error("font rasterizer failed: {0}")]
    Raster(&'static str),

    #[error(transparent)]
    /// [image] failed to encode the bitmap
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// The configuration file is not valid TOML for [`Config`](crate::Config)
    Config(#[from] toml::de::Error),
}
