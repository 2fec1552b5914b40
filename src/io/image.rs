//! PNG encoding and file export

use crate::io::error::{GeneratorError, Result};
use crate::scene::Canvas;
use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::path::Path;

/// Encode a composited canvas as an in-memory PNG byte buffer
///
/// # Errors
///
/// Returns [`GeneratorError::ImageEncode`] if the PNG encoder fails.
pub fn encode_canvas_as_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let resolution = canvas.resolution() as u32;
    let mut img = ImageBuffer::new(resolution, resolution);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let rgb = canvas.pixel(y as usize, x as usize);
        *pixel = Rgb(rgb);
    }

    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|source| GeneratorError::ImageEncode { source })?;
    Ok(cursor.into_inner())
}

/// Write PNG bytes to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns [`GeneratorError::FileSystem`] if directory creation or the file
/// write fails.
pub fn save_png_bytes(bytes: &[u8], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    std::fs::write(output_path, bytes).map_err(|source| GeneratorError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write image",
        source,
    })
}
