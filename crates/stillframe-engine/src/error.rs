//! Startup error taxonomy.
//!
//! Everything that can fail does so before the frame loop starts; once the
//! loop is running, the remaining collaborators (event pump, clock, draw
//! and present calls) are treated as infallible. Each variant carries the
//! underlying `anyhow` chain for context.

use std::fmt;

/// A fatal error during viewer startup.
#[derive(Debug)]
pub enum StartupError {
    /// The event loop or window could not be created.
    Initialization(anyhow::Error),
    /// The image asset is missing or undecodable.
    AssetLoad(anyhow::Error),
    /// The surface, adapter, device, or render pipeline could not be
    /// created (e.g. no usable GPU).
    RenderTarget(anyhow::Error),
}

impl StartupError {
    /// The wrapped cause chain.
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            Self::Initialization(e) | Self::AssetLoad(e) | Self::RenderTarget(e) => e,
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(e) => write!(f, "window system initialization failed: {e:#}"),
            Self::AssetLoad(e) => write!(f, "image asset could not be loaded: {e:#}"),
            Self::RenderTarget(e) => write!(f, "render target creation failed: {e:#}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_cause() {
        let err = StartupError::AssetLoad(anyhow::anyhow!("no such file"));
        let text = err.to_string();
        assert!(text.contains("image asset"));
        assert!(text.contains("no such file"));
    }
}
