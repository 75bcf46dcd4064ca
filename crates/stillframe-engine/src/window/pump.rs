use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::frameloop::{EventSource, LoopEvent};

/// Owns the winit event loop and drives it in pump mode.
///
/// winit 0.30 delivers events through an `ApplicationHandler`; the inner
/// [`WindowHost`] buffers them so the frame loop can drain a plain batch
/// once per iteration, the way a classic poll loop expects.
pub struct EventPump {
    event_loop: EventLoop<()>,
    host: WindowHost,
}

impl EventPump {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit event loop")?;
        Ok(Self {
            event_loop,
            host: WindowHost::new(title, PhysicalSize::new(width, height)),
        })
    }

    /// Pumps the event loop until the window exists and returns it.
    ///
    /// Window creation happens inside the handler's `resumed` callback,
    /// which fires on the first pump on desktop platforms. A bounded retry
    /// guards against a platform that never delivers it.
    pub fn window(&mut self) -> Result<Arc<Window>> {
        for _ in 0..100 {
            self.event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.host);

            if let Some(err) = self.host.create_error.take() {
                return Err(err);
            }
            if let Some(window) = &self.host.window {
                return Ok(window.clone());
            }

            std::thread::sleep(Duration::from_millis(10));
        }

        anyhow::bail!("event loop never delivered the resumed event")
    }
}

impl EventSource for EventPump {
    fn drain(&mut self) -> Vec<LoopEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);

        if let PumpStatus::Exit(code) = status {
            // The platform tore the loop down underneath us (macOS Cmd-Q
            // and similar paths). Treat it as a termination request.
            log::debug!("event loop exited with code {code}");
            self.host.pending.push(LoopEvent::Quit);
        }

        std::mem::take(&mut self.host.pending)
    }
}

/// `ApplicationHandler` that owns the single viewer window and translates
/// winit events into [`LoopEvent`]s.
struct WindowHost {
    title: String,
    size: PhysicalSize<u32>,
    window: Option<Arc<Window>>,
    create_error: Option<anyhow::Error>,
    pending: Vec<LoopEvent>,
}

impl WindowHost {
    fn new(title: &str, size: PhysicalSize<u32>) -> Self {
        Self {
            title: title.to_string(),
            size,
            window: None,
            create_error: None,
            pending: Vec::new(),
        }
    }
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size);

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(err) => {
                self.create_error =
                    Some(anyhow::Error::new(err).context("failed to create window"));
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let translated = match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => LoopEvent::Quit,
            _ => LoopEvent::Other,
        };
        self.pending.push(translated);
    }
}
