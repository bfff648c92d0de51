use std::path::PathBuf;
use crate::config::config::Size;

/// One file's worth of work, built fresh per conversion and consumed by it.
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub size: Size,
}

#[derive(Clone, Debug)]
pub struct BatchInput {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub size: Size,
    pub no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOutput {
    pub processed_files: usize,
    pub successful_files: usize,
}

impl ConversionOutput {
    pub fn is_complete_success(&self) -> bool {
        self.successful_files == self.processed_files
    }
}
