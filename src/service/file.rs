use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use walkdir::WalkDir;
use crate::config::config::has_png_extension;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;

/// File service, lists the PNG files of a batch directory
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput> {
        let files = collect_png_files(&input.input_dir)?;
        debug!("Found {} PNG files in {}", files.len(), input.input_dir.display());
        Ok(FileCollectOutput { files })
    }
}

pub fn read_file_content(file_path: &Path) -> io::Result<(Vec<u8>, usize)> {
    let mut file = File::open(file_path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let file_size = buffer.len();
    Ok((buffer, file_size))
}

/// Immediate children of `dir` that are files named `*.png` (any case).
/// The listing is taken once and sorted by file name.
pub fn collect_png_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            e.into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message))
        })?;
        let path = entry.path();
        if !has_png_extension(Path::new(entry.file_name())) {
            continue;
        }
        if !path.is_file() {
            warn!("Skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}
