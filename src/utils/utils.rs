use std::io;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(())
}

/// Batch progress bar. Status lines go through [`ProgressManager::println`]
/// so they don't tear the bar.
pub struct ProgressManager {
    pb: ProgressBar,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            match ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}") {
                Ok(style) => pb.set_style(style.progress_chars("##-")),
                Err(e) => log::warn!("Invalid progress bar template, using default: {}", e),
            }
            pb
        };
        ProgressManager { pb }
    }

    pub fn start_file(&self, index: usize, total: usize, name: &str) {
        self.pb.set_message(format!("Converting {}/{}: {}", index + 1, total, name));
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    pub fn println(&self, line: &str) {
        self.pb.suspend(|| println!("{}", line));
    }

    pub fn finish(&self, successful: usize, total: usize) {
        self.pb.finish_with_message(format!("Done: {}/{} converted", successful, total));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
