use std::process::ExitCode;

use png_to_svg::action::cli::process_cli_mode;

fn main() -> ExitCode {
    match process_cli_mode() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("Run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
