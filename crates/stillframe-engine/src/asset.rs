//! Image asset loading.
//!
//! Decoding is delegated to the `image` crate; the viewer only needs the
//! pixels in a shape the GPU upload path accepts.

use std::path::Path;

use anyhow::{Context, Result};

/// Loads a bitmap from disk and converts it to tightly packed RGBA8.
///
/// The conversion guarantees 4 bytes per pixel regardless of the source
/// format, which is what the texture upload assumes.
pub fn load_bitmap(path: &Path) -> Result<image::RgbaImage> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to load image asset {}", path.display()))?;

    let rgba = decoded.to_rgba8();
    anyhow::ensure!(
        rgba.width() > 0 && rgba.height() > 0,
        "image asset {} has zero size",
        path.display()
    );

    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );

    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_bitmap(Path::new("definitely-not-here.bmp")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely-not-here.bmp"));
    }

    #[test]
    fn decodes_an_in_tree_png() {
        // Smallest valid 1x1 PNG, written to a temp file so `image::open`
        // exercises the real extension-based decoder path.
        const PNG_1X1: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0xF8, 0xCF, 0xC0, 0xF0, 0x1F, 0x00, 0x05, 0x00, 0x01, 0xFF, 0x89, 0x99,
            0x3D, 0x1D, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];

        let dir = std::env::temp_dir();
        let path = dir.join("stillframe-asset-test.png");
        std::fs::write(&path, PNG_1X1).unwrap();

        let rgba = load_bitmap(&path).unwrap();
        assert_eq!((rgba.width(), rgba.height()), (1, 1));

        let _ = std::fs::remove_file(&path);
    }
}
