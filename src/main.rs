use anyhow::{Context, Result};
use brat_text::layout::{BlockFace, Typeface};
use brat_text::{Colour, Command, Config, Effect, Font, Preview, Px, RenderState, Variant};
use clap::Parser;
use log::{info, warn};
use std::io::Read;
use std::path::PathBuf;

/// Fit text into a box and export it as a PNG
#[derive(Parser, Debug)]
#[command(name = "brat-text", version, about)]
struct Cli {
    /// The text to render; read from stdin when omitted
    text: Option<String>,

    /// TTF or OTF font to render with
    #[arg(long)]
    font: Option<PathBuf>,

    /// Text colour as #RRGGBB
    #[arg(long, alias = "color")]
    colour: Option<Colour>,

    /// Which flavour of layout to use
    #[arg(long)]
    variant: Option<Variant>,

    /// Width of the preview box in pixels
    #[arg(long)]
    width: Option<f32>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the fitted preview instead of exporting
    #[arg(long)]
    preview: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(font) = cli.font {
        config.font = Some(font);
    }
    if let Some(colour) = cli.colour {
        config.colour = colour;
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(width) = cli.width {
        config.preview_width = Px(width);
    }

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read text from stdin")?;
            text
        }
    };

    let font = match &config.font {
        Some(path) => {
            let font = Font::load_from_disk(path)
                .with_context(|| format!("failed to load font {}", path.display()))?;
            info!(
                "using font {}",
                font.name().unwrap_or_else(|| path.display().to_string())
            );
            Some(font)
        }
        None => {
            warn!("no font given, falling back to the built-in block face");
            None
        }
    };
    let face: &dyn Typeface = match &font {
        Some(font) => font,
        None => &BlockFace,
    };

    let style = config.style();
    info!("rendering with the {} variant", config.variant);

    let state = RenderState::new(config.preview_width).on_colour_selected(config.colour);
    let (state, _) = state.dispatch(Command::TextChanged(text), &style, face)?;

    if cli.preview {
        print_preview(&state.preview);
        return Ok(());
    }

    let (_, effect) = state.dispatch(Command::Export, &style, face)?;
    match effect {
        Effect::Download(export) => {
            let path = cli.output.unwrap_or_else(|| config.output_path(&style));
            std::fs::write(&path, &export.png)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                "wrote {} ({}x{})",
                path.display(),
                export.width,
                export.height
            );
        }
        Effect::Alert(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        Effect::Preview => {}
    }

    Ok(())
}

fn print_preview(preview: &Preview) {
    match preview.font_size() {
        Some(size) => {
            println!("font size: {size}");
            for line in preview.lines() {
                println!("{line}");
            }
        }
        None => println!("{}", brat_text::PLACEHOLDER),
    }
}
