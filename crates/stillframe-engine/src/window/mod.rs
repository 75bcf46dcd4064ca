//! Platform window runtime.
//!
//! Bridges the generic frame loop onto winit + wgpu: [`EventPump`] feeds
//! the loop translated platform events, [`ImageSurface`] renders into the
//! window surface, and [`run_viewer`] sequences startup, the loop, and
//! teardown.

mod pump;
mod surface;
mod viewer;

pub use pump::EventPump;
pub use surface::ImageSurface;
pub use viewer::{ASSET_PATH, run_viewer};
