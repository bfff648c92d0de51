use crate::models::conversion::{BatchInput, ConversionOutput, ConversionRequest};
use std::io;

// Facade interface, coordinates single-file and batch conversion
pub trait ConversionFacadeTrait: Send + Sync {
    /// Converts one file. Failures are reported to the user and never propagate.
    /// # Returns
    /// - true when the SVG was written
    fn convert_single(&self, request: &ConversionRequest) -> bool;

    /// Converts every PNG directly inside a directory, continuing past failures
    /// # Returns
    /// - the processed and successful counts, or an IO error if the directories could not be prepared or listed
    fn convert_batch(&self, input: BatchInput) -> io::Result<ConversionOutput>;
}
