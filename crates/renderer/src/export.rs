use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};

/// Writes `image` as PNG, creating missing parent directories.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write frame to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "frame written");
    Ok(())
}
