//! Command-line front end for the marquee banner engine.

use std::fmt::{self, Display};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use marquee::service::{DEFAULT_FONT, DEFAULT_WIDTH, RenderParams, Service};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let service = Service::builtin();

    if cli.list_fonts {
        let list = service.fonts();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            for font in &list.fonts {
                println!("{font}");
            }
        }
        return Ok(());
    }

    let response = if cli.random {
        service.random()?
    } else {
        let Some(text) = cli.text else {
            bail!("provide TEXT to render, or use --list-fonts or --random");
        };
        let params = RenderParams {
            text,
            font: cli.font,
            width: cli.width,
            justify: cli.justify.to_string(),
        };
        service.generate(&params)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.ascii_art);
    }
    Ok(())
}

#[derive(Parser)]
#[command(about = "Render text as an ASCII-art banner")]
struct Cli {
    /// Text to render; line breaks in the input start new banner lines
    text: Option<String>,
    /// Font name, see --list-fonts
    #[arg(short = 'f', long, default_value = DEFAULT_FONT)]
    font: String,
    /// Output width the art is justified within
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    width: i64,
    /// Line justification
    #[arg(short = 'j', long, default_value_t)]
    justify: Justify,
    /// List the bundled fonts and exit
    #[arg(long, conflicts_with_all = ["text", "random"])]
    list_fonts: bool,
    /// Render a random sample phrase in a random font
    #[arg(long, conflicts_with = "text")]
    random: bool,
    /// Print the full response as JSON instead of bare art
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum, Default)]
#[value(rename_all = "kebab-case")]
enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

impl Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}
