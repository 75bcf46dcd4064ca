use std::path::Path;

use crate::asset;
use crate::device::{Gpu, GpuInit};
use crate::error::StartupError;
use crate::frameloop::{self, LoopStats};
use crate::options::ViewerOptions;
use crate::render::{ImageRenderer, RenderCtx};
use crate::timing::SystemClock;

use super::pump::EventPump;
use super::surface::ImageSurface;

/// The image asset, looked up relative to the working directory.
pub const ASSET_PATH: &str = "hello.bmp";

const WINDOW_TITLE: &str = "stillframe";

/// Opens the window, loads the image, and runs the frame loop until the
/// window is closed.
///
/// Every fallible step happens here, before the loop starts; each maps to
/// one [`StartupError`] category. Resources acquired before a failure are
/// released by drop on the way out.
pub fn run_viewer(options: ViewerOptions) -> Result<LoopStats, StartupError> {
    let mut pump = EventPump::new(WINDOW_TITLE, options.width, options.height)
        .map_err(StartupError::Initialization)?;
    let window = pump.window().map_err(StartupError::Initialization)?;

    let image = asset::load_bitmap(Path::new(ASSET_PATH)).map_err(StartupError::AssetLoad)?;

    let gpu = pollster::block_on(Gpu::new(window.clone(), GpuInit::default()))
        .map_err(StartupError::RenderTarget)?;

    let renderer = {
        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
        ImageRenderer::new(&ctx, image).map_err(StartupError::RenderTarget)?
    };

    let mut sink = ImageSurface::new(gpu, renderer, window);
    let clock = SystemClock::new();

    log::info!("entering frame loop at {} fps target", options.fps);
    let stats = frameloop::run(options.fps, &mut pump, &mut sink, &clock);
    log::info!("frame loop stopped after {} frames", stats.frames);

    Ok(stats)
}
