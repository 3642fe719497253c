use clap::{Parser, Subcommand, ValueEnum};
use qrgrid::{ECLevel, Encoder, MaskPattern, render};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "qrgrid CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write a PNG image
    Encode {
        /// Text payload to encode
        text: String,
        /// Output image path
        #[arg(long, default_value = "qr.png")]
        out: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Quiet border width in modules
        #[arg(long, default_value_t = 4)]
        margin: u32,
        /// Error correction level
        #[arg(long, value_enum, default_value = "m")]
        ec: LevelArg,
    },
    /// Encode text and print it as block art
    Print {
        /// Text payload to encode
        text: String,
        /// Error correction level
        #[arg(long, value_enum, default_value = "m")]
        ec: LevelArg,
        /// Mask pattern index (0-7)
        #[arg(long, default_value_t = 0)]
        mask: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    L,
    M,
    Q,
    H,
}

impl From<LevelArg> for ECLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::L => ECLevel::L,
            LevelArg::M => ECLevel::M,
            LevelArg::Q => ECLevel::Q,
            LevelArg::H => ECLevel::H,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            out,
            scale,
            margin,
            ec,
        } => {
            let symbol = match Encoder::new().with_level(ec.into()).encode_text(&text) {
                Ok(symbol) => symbol,
                Err(err) => {
                    eprintln!("encode failed: {}", err);
                    return ExitCode::FAILURE;
                }
            };
            let image = render::to_image_with_margin(&symbol, scale, margin);
            if let Err(err) = image.save(&out) {
                eprintln!("failed to write {}: {}", out.display(), err);
                return ExitCode::FAILURE;
            }
            println!(
                "wrote {} (version {}, {}x{} modules)",
                out.display(),
                symbol.version.number(),
                symbol.size(),
                symbol.size()
            );
        }
        Command::Print { text, ec, mask } => {
            let Some(mask) = MaskPattern::from_index(mask) else {
                eprintln!("mask index must be 0-7");
                return ExitCode::FAILURE;
            };
            let encoder = Encoder::new().with_level(ec.into()).with_mask(mask);
            match encoder.encode_text(&text) {
                Ok(symbol) => print!("{}", render::to_ascii(&symbol)),
                Err(err) => {
                    eprintln!("encode failed: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
