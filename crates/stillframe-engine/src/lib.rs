//! Stillframe engine crate.
//!
//! This crate owns the platform + GPU pieces behind the viewer binary: the
//! fixed-framerate frame loop, the winit event pump, the wgpu surface, and
//! the fullscreen image blit.

pub mod asset;
pub mod device;
pub mod error;
pub mod frameloop;
pub mod options;
pub mod render;
pub mod timing;
pub mod window;

pub mod logging;
