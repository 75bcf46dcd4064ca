//! GPU rendering subsystem.
//!
//! One renderer lives here: the fullscreen image blit. It owns its GPU
//! resources (pipeline, texture, sampler, quad buffers) and records draw
//! commands into a [`RenderTarget`] provided by the caller.

mod ctx;
mod image_blit;

pub use ctx::{RenderCtx, RenderTarget};
pub use image_blit::ImageRenderer;
