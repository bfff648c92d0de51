use std::path::PathBuf;

#[derive(Debug)]
pub struct SvgGenerateOutput {
    pub svg_file_path: PathBuf,
    pub original_width: u32,
    pub original_height: u32,
    pub svg_size: usize,
}
