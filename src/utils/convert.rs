use std::io;
use crate::config::config::Target;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, ConversionOutput, ConversionRequest};

// Runs a validated configuration through the conversion facade
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let facade = ConversionFacade::default();
        match config.target {
            Target::Single { input, output } => {
                let request = ConversionRequest {
                    input_path: input,
                    output_path: output,
                    size: config.size,
                };
                let converted = facade.convert_single(&request);
                Ok(ConversionOutput {
                    processed_files: 1,
                    successful_files: usize::from(converted),
                })
            }
            Target::Batch { dir, output_dir } => facade.convert_batch(BatchInput {
                input_dir: dir,
                output_dir,
                size: config.size,
                no_progress: config.no_progress,
            }),
        }
    }
}
