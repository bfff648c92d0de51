use std::fs;
use std::io;
use log::{error, info, warn};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, ConversionOutput, ConversionRequest};
use crate::models::file::FileCollectInput;
use crate::service::file::FileService;
use crate::service::svg::{batch_output_path, SvgService};
use crate::service::traits::i_service::{FileServiceTrait, SvgServiceTrait};
use crate::utils::utils::create_progress_bar;

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    svg_service: Box<dyn SvgServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        svg_service: Box<dyn SvgServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            svg_service,
        }
    }

    /// Runs one conversion and renders its outcome as user-facing lines.
    fn convert_and_report(&self, request: &ConversionRequest, emit: &dyn Fn(&str)) -> bool {
        let input_path = request.input_path.display();
        match self.svg_service.generate_svg(request) {
            Ok(output) => {
                emit(&format!(
                    "✓ Converted: {} → {}",
                    input_path,
                    output.svg_file_path.display()
                ));
                emit(&format!(
                    "  Original dimensions: {}x{} → SVG: {} pixels",
                    output.original_width, output.original_height, request.size
                ));
                true
            }
            Err(e) => {
                error!("Failed to convert {}: {}", input_path, e);
                emit(&format!("✗ Error processing {}: {}", input_path, e));
                false
            }
        }
    }
}

impl Default for ConversionFacade {
    fn default() -> Self {
        ConversionFacade::new(Box::new(FileService::new()), Box::new(SvgService::new()))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn convert_single(&self, request: &ConversionRequest) -> bool {
        info!(
            "Converting {} at {}",
            request.input_path.display(),
            request.size
        );
        self.convert_and_report(request, &|line: &str| println!("{}", line))
    }

    fn convert_batch(&self, input: BatchInput) -> io::Result<ConversionOutput> {
        if let Some(output_dir) = &input.output_dir {
            if !output_dir.exists() {
                fs::create_dir_all(output_dir)?;
                info!("Created output directory {}", output_dir.display());
            }
        }

        let files = self
            .file_service
            .collect_files(FileCollectInput {
                input_dir: input.input_dir.clone(),
            })?
            .files;
        let total_files = files.len();

        if total_files == 0 {
            warn!("No PNG files in {}", input.input_dir.display());
            println!("No PNG files found in {}", input.input_dir.display());
            return Ok(ConversionOutput {
                processed_files: 0,
                successful_files: 0,
            });
        }

        println!("Processing {} PNG files...", total_files);
        let pm = create_progress_bar(total_files as u64, input.no_progress);
        let mut successful_files = 0;

        for (index, file_path) in files.iter().enumerate() {
            pm.start_file(index, total_files, &file_path.display().to_string());
            let request = ConversionRequest {
                input_path: file_path.clone(),
                output_path: input
                    .output_dir
                    .as_deref()
                    .map(|dir| batch_output_path(dir, file_path, input.size)),
                size: input.size,
            };
            if self.convert_and_report(&request, &|line: &str| pm.println(line)) {
                successful_files += 1;
            }
            pm.advance();
        }

        pm.finish(successful_files, total_files);
        println!(
            "\n✓ Successfully processed: {}/{} files",
            successful_files, total_files
        );
        info!(
            "Batch finished for {}: {}/{} converted",
            input.input_dir.display(),
            successful_files,
            total_files
        );

        Ok(ConversionOutput {
            processed_files: total_files,
            successful_files,
        })
    }
}
