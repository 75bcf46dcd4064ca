use std::sync::Arc;

use winit::window::Window;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::frameloop::FrameSink;
use crate::render::{ImageRenderer, RenderTarget};

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// wgpu-backed [`FrameSink`]: one window surface, one image.
///
/// `clear` acquires the frame, `draw` records the blit, `present` submits.
/// Transient surface errors (lost/outdated swapchain, e.g. after a window
/// resize) reconfigure to the window's current size and skip the affected
/// frame; the loop itself never observes a failure.
pub struct ImageSurface {
    gpu: Gpu,
    renderer: ImageRenderer,
    window: Arc<Window>,
    frame: Option<GpuFrame>,
}

impl ImageSurface {
    pub fn new(gpu: Gpu, renderer: ImageRenderer, window: Arc<Window>) -> Self {
        Self {
            gpu,
            renderer,
            window,
            frame: None,
        }
    }
}

impl FrameSink for ImageSurface {
    fn clear(&mut self) {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => {
                        // Pick up the window's real size in case the error
                        // came from a resize.
                        self.gpu.resize(self.window.inner_size());
                        log::debug!("surface reconfigured, skipping frame");
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::debug!("transient surface error, skipping frame");
                    }
                    SurfaceErrorAction::Fatal => {
                        log::error!("fatal surface error; frames will no longer present");
                    }
                }
                self.frame = None;
                return;
            }
        };

        // Clear pass — dropped before the encoder is reused by draw().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stillframe clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.frame = Some(frame);
    }

    fn draw(&mut self) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        self.renderer.draw(&mut target);
    }

    fn present(&mut self) {
        let Some(frame) = self.frame.take() else {
            return;
        };
        self.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
