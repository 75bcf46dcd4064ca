//! GPU device + surface management.
//!
//! Creates the wgpu instance/adapter/device/queue, configures the surface
//! (swapchain) for the viewer window, and hands out per-frame encoders.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
