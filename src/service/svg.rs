use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use base64::{engine::general_purpose, write::EncoderWriter};
use log::{info, warn};
use crate::config::config::Size;
use crate::models::conversion::ConversionRequest;
use crate::models::svg::SvgGenerateOutput;
use crate::service::file::read_file_content;
use crate::service::traits::i_service::SvgServiceTrait;
use crate::utils::png::read_png_dimensions;
use crate::utils::utils::format_file_size;

const SVG_TEMPLATE: &str = include_str!("../../assets/template/svg_template.svg");

/// Payloads above this size still convert but many viewers struggle with them.
const MAX_BASE64_SIZE: usize = 1_000_000;

/// SVG service, wraps PNG files in SVG documents
pub struct SvgService;

impl SvgService {
    pub fn new() -> Self {
        SvgService
    }
}

impl Default for SvgService {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgServiceTrait for SvgService {
    fn generate_svg(&self, request: &ConversionRequest) -> io::Result<SvgGenerateOutput> {
        let input_path = request.input_path.as_path();

        let (data, file_size) = read_file_content(input_path)?;
        info!("Read {} ({})", input_path.display(), format_file_size(file_size));
        let png_base64 = encode_to_base64(&data, input_path)?;

        let (original_width, original_height) = read_png_dimensions(&data)?;

        let svg_content = generate_svg_content(&png_base64, request.size);

        let output_path = match &request.output_path {
            Some(path) => path.clone(),
            None => default_output_path(input_path, request.size),
        };
        write_svg_file(&svg_content, &output_path)?;
        info!(
            "Wrote SVG {} ({} bytes)",
            output_path.display(),
            svg_content.len()
        );

        Ok(SvgGenerateOutput {
            svg_file_path: output_path,
            original_width,
            original_height,
            svg_size: svg_content.len(),
        })
    }
}

/// Fills the SVG template with the requested size and the base64 PNG payload
pub fn generate_svg_content(png_base64: &str, size: Size) -> String {
    SVG_TEMPLATE
        .replace("{{WIDTH}}", &size.width.to_string())
        .replace("{{HEIGHT}}", &size.height.to_string())
        .replace("{{PNG_BASE64}}", png_base64)
}

/// `dir/photo.png` becomes `dir/photo_{W}x{H}.svg`
pub fn default_output_path(input_path: &Path, size: Size) -> PathBuf {
    let mut path: OsString = input_path.with_extension("").into_os_string();
    path.push(format!("_{}.svg", size));
    PathBuf::from(path)
}

/// Output path for a batch member written into `output_dir`
pub fn batch_output_path(output_dir: &Path, input_path: &Path, size: Size) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    output_dir.join(format!("{}_{}.svg", stem, size))
}

/// Standard alphabet, no line wrapping
pub fn encode_to_base64(data: &[u8], file_path: &Path) -> io::Result<String> {
    let mut base64_buffer = Vec::new();
    {
        let mut encoder = EncoderWriter::new(&mut base64_buffer, &general_purpose::STANDARD);
        encoder.write_all(data)?;
        encoder.finish()?;
    }
    let png_base64 = String::from_utf8(base64_buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!("Base64 payload for {}: {} bytes", file_path.display(), png_base64.len());
    if png_base64.len() > MAX_BASE64_SIZE {
        warn!(
            "Base64 payload is large: {} bytes exceeds the suggested {} bytes: {}",
            png_base64.len(), MAX_BASE64_SIZE, file_path.display()
        );
    }
    Ok(png_base64)
}

/// Writes UTF-8 text, replacing whatever is already at `output_path`
pub fn write_svg_file(svg_content: &str, output_path: &Path) -> io::Result<()> {
    let file = fs::File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(svg_content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
