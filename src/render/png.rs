//! PNG output for canvases.

use std::path::Path;

use crate::error::{BrandError, Result};

use super::canvas::Canvas;

/// Write a canvas to an RGB PNG file.
///
/// The parent directory must already exist; callers that guarantee it
/// (the cover generator) create it themselves.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas.to_image().save(path).map_err(|e| BrandError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
