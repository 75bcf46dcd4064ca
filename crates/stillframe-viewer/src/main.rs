//! Stillframe: show one image in a window until the user closes it.

use std::process::ExitCode;

use stillframe_engine::logging::{LoggingConfig, init_logging};
use stillframe_engine::options::ViewerOptions;
use stillframe_engine::window::{ASSET_PATH, run_viewer};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let options = ViewerOptions::parse(std::env::args().skip(1));
    log::info!(
        "stillframe {}x{} @ {} fps, asset {ASSET_PATH}",
        options.width,
        options.height,
        options.fps
    );

    match run_viewer(options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
