use std::io;
use crate::models::conversion::ConversionRequest;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::svg::SvgGenerateOutput;

// File service interface, finds the PNG files a batch will convert
pub trait FileServiceTrait: Send + Sync {
    /// Lists the PNG files directly inside a directory
    /// # Arguments
    /// - input: the directory to scan
    /// # Returns
    /// - the matching files in file-name order, or an IO error if the directory cannot be read
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput>;
}

// SVG service interface, wraps one PNG in an SVG document
pub trait SvgServiceTrait: Send + Sync {
    /// Converts one PNG file into an SVG file
    /// # Arguments
    /// - request: input path, optional output path and requested size
    /// # Returns
    /// - where the SVG was written plus the PNG's original dimensions, or the IO error that stopped it
    fn generate_svg(&self, request: &ConversionRequest) -> io::Result<SvgGenerateOutput>;
}
