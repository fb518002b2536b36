//! Command-line interface implementation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::color::parse_color;
use crate::palette::Palette;
use crate::palettes::{get_builtin, list_builtins};
use crate::render::render_flag;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// flagpress - Lay out pride flag stripe palettes and render previews
#[derive(Parser)]
#[command(name = "flagpress")]
#[command(about = "flagpress - Lay out pride flag stripe palettes and render previews")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in flag palettes
    List,

    /// Show the stripes of a palette
    Show {
        /// Built-in flag name (see `list`)
        #[arg(required_unless_present = "palette_file", conflicts_with = "palette_file")]
        flag: Option<String>,

        /// Load the palette from a JSON file instead of the built-ins
        #[arg(long)]
        palette_file: Option<PathBuf>,
    },

    /// Render a palette to a PNG preview
    Preview {
        /// Built-in flag name (see `list`)
        #[arg(required_unless_present = "palette_file", conflicts_with = "palette_file")]
        flag: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value = "900", value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,

        /// Load the palette from a JSON file instead of the built-ins
        #[arg(long)]
        palette_file: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => run_list(),
        Commands::Show { flag, palette_file } => {
            run_show(flag.as_deref(), palette_file.as_deref())
        }
        Commands::Preview { flag, output, width, height, palette_file } => {
            run_preview(flag.as_deref(), &output, width, height, palette_file.as_deref())
        }
    }
}

fn load_palette(
    flag: Option<&str>,
    palette_file: Option<&std::path::Path>,
) -> Result<Palette, ExitCode> {
    if let Some(path) = palette_file {
        return Palette::from_file(path).map_err(|e| {
            eprintln!("Error: '{}': {}", path.display(), e);
            ExitCode::from(EXIT_INVALID_ARGS)
        });
    }
    // clap guarantees a flag name when no palette file was given
    let name = flag.unwrap_or_default();
    get_builtin(name).ok_or_else(|| {
        eprintln!("Error: No built-in flag named '{}' (try `flagpress list`)", name);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

fn run_list() -> ExitCode {
    for name in list_builtins() {
        // Every listed name resolves; the count is part of the listing
        let stripes = get_builtin(name).map_or(0, |p| p.stripe_count());
        println!("{:<14} {} stripes", name, stripes);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn run_show(flag: Option<&str>, palette_file: Option<&std::path::Path>) -> ExitCode {
    let palette = match load_palette(flag, palette_file) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let use_color = atty::is(atty::Stream::Stdout);
    println!("{} ({} stripes)", palette.title, palette.stripe_count());
    for stripe in palette.retained() {
        match parse_color(&stripe.color) {
            Ok(value) => {
                let [r, g, b] = value.to_rgb8();
                if use_color {
                    println!(
                        "  \x1b[48;2;{};{};{}m    \x1b[0m {:<22} #{:02X}{:02X}{:02X}",
                        r, g, b, stripe.name, r, g, b
                    );
                } else {
                    println!("  {:<22} #{:02X}{:02X}{:02X}", stripe.name, r, g, b);
                }
            }
            Err(e) => {
                eprintln!("Error: stripe '{}': {}", stripe.name, e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn run_preview(
    flag: Option<&str>,
    output: &std::path::Path,
    width: u32,
    height: u32,
    palette_file: Option<&std::path::Path>,
) -> ExitCode {
    let palette = match load_palette(flag, palette_file) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let image = match render_flag(&palette, width, height) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = image.save(output) {
        eprintln!("Error: Failed to save '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
