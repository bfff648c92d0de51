use clap::{ArgGroup, Parser};
use regex::Regex;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "png_to_svg",
    about = "Wrap PNG images in SVG documents with a custom display size",
    long_about = "Embeds PNG files as base64 data URIs inside an SVG <image> element.\nThe raster is left untouched; only the SVG viewport is sized.\n\nExamples:\n  png_to_svg image.png --size 128x128\n  png_to_svg image.png -s 256x256 -o out.svg\n  png_to_svg --batch ./images/ --size 64x64\n  png_to_svg -b ./src/ -o ./svg/ -s 512x512",
    arg_required_else_help = true
)]
#[command(group(ArgGroup::new("target").required(true).args(["input", "batch"])))]
pub struct Cli {
    /// Input PNG file
    pub input: Option<String>,
    /// Directory of PNG files for batch conversion
    #[arg(short, long, value_name = "DIR")]
    pub batch: Option<String>,
    /// Output file (single mode) or output directory (batch mode)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
    /// Output size as WIDTHxHEIGHT
    #[arg(short, long, default_value = "128x128", value_name = "WIDTHxHEIGHT")]
    pub size: String,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

/// Requested SVG display size in pixels. Both sides are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a run converts: one file, or every PNG directly inside a directory.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Single {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    Batch {
        dir: PathBuf,
        output_dir: Option<PathBuf>,
    },
}

/// Parses a `WIDTHxHEIGHT` string (the separator is case-insensitive).
pub fn parse_size(size: &str) -> io::Result<Size> {
    let lowered = size.to_lowercase();
    if !lowered.contains('x') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "size format must be WIDTHxHEIGHT (e.g. 128x128)",
        ));
    }

    let pattern = Regex::new(r"^\s*(\d+)\s*x\s*(\d+)\s*$")
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let captures = pattern.captures(&lowered).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid size '{}': expected two integers separated by 'x'", size),
        )
    })?;

    let parse_side = |side: &str| -> io::Result<u32> {
        side.parse::<u32>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid size '{}': {}", size, e),
            )
        })
    };
    let width = parse_side(&captures[1])?;
    let height = parse_side(&captures[2])?;

    if width == 0 || height == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid size '{}': dimensions must be positive", size),
        ));
    }
    Ok(Size { width, height })
}

pub fn has_png_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".png")
}

pub fn validate_batch_dir(dir: &str) -> io::Result<&Path> {
    let path = Path::new(dir);
    if !path.is_dir() {
        log::error!("batch path is not a directory: {}", dir);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a valid directory", dir),
        ));
    }
    Ok(path)
}

pub fn validate_input_file(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.is_file() {
        log::error!("input file missing: {}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist or is not a file", input),
        ));
    }
    if !has_png_extension(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "the input file must have a .png extension",
        ));
    }
    Ok(path)
}
