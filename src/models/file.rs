use std::path::PathBuf;

#[derive(Clone)]
pub struct FileCollectInput {
    pub input_dir: PathBuf,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
}
