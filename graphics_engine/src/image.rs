use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{ErrorCode, Result};
use crate::gl_wrappers;

const BYTES_PER_PIXEL: usize = 4;

pub const DEFAULT_SCREENSHOT_FILE_NAME: &str = "screenshot.png";

pub fn default_screenshot_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_SCREENSHOT_FILE_NAME)
}

/// Reverses the row order of a tightly packed pixel buffer.
pub fn flip_rows(pixels: &[u8], row_length_in_bytes: usize) -> Vec<u8> {
    if row_length_in_bytes == 0 {
        return Vec::new();
    }

    pixels
        .chunks_exact(row_length_in_bytes)
        .rev()
        .flatten()
        .copied()
        .collect()
}

/// Writes RGBA8 pixels stored bottom row first (GL order) into a png file.
pub fn save_png_rgba(
    path: &Path,
    width: u32,
    height: u32,
    bottom_up_pixels: &[u8],
) -> Result<()> {
    let row_length_in_bytes = (width as usize).checked_mul(BYTES_PER_PIXEL);
    let expected_length = row_length_in_bytes.and_then(|row| row.checked_mul(height as usize));

    let row_length_in_bytes = match (row_length_in_bytes, expected_length) {
        (Some(row_length_in_bytes), Some(expected_length))
            if expected_length == bottom_up_pixels.len() =>
        {
            row_length_in_bytes
        }
        _ => {
            log::error!(
                "pixel buffer does not match the image dimensions, width = {width}, height = {height}, length = {}",
                bottom_up_pixels.len()
            );
            return Err(ErrorCode::ImageWritePng);
        }
    };

    let top_down_pixels = flip_rows(bottom_up_pixels, row_length_in_bytes);
    let image =
        RgbaImage::from_raw(width, height, top_down_pixels).ok_or(ErrorCode::ImageWritePng)?;

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| {
            log::error!("could not write png, path = {}, msg = {e}", path.display());
            ErrorCode::ImageWritePng
        })
}

/// Captures the current viewport of the current rendering context into a png
/// file at `dest`, or at [`default_screenshot_path`] when `dest` is `None`.
///
/// Returns the path the screenshot was written to.
pub fn capture_screenshot(dest: Option<&Path>) -> Result<PathBuf> {
    let dest = dest
        .map(Path::to_path_buf)
        .unwrap_or_else(default_screenshot_path);

    let [x, y, width, height] = gl_wrappers::get_viewport()?;

    gl_wrappers::pixel_store_pack_alignment(1)?;
    let pixels = gl_wrappers::read_pixels(x, y, width, height)?;

    save_png_rgba(&dest, width as u32, height as u32, &pixels)?;

    log::info!(
        "screenshot captured, path = {}, width = {width}, height = {height}",
        dest.display()
    );

    Ok(dest)
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        log::error!("could not read image, path = {}, msg = {e}", path.display());
        ErrorCode::ImageLoad
    })?;

    let image = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| {
            log::error!("could not guess image format, path = {}, msg = {e}", path.display());
            ErrorCode::ImageLoad
        })?
        .decode()
        .map_err(|e| {
            log::error!("could not decode image, path = {}, msg = {e}", path.display());
            ErrorCode::ImageLoad
        })?;

    Ok(image.to_rgba8())
}

/// Determines whether two image files hold the same pixels.
///
/// Both files are decoded to RGBA8, so two files that encode the same pixels
/// differently (compression level, chunk layout) are still identical.
pub fn are_identical(png0: &Path, png1: &Path) -> Result<bool> {
    let image0 = load_rgba(png0)?;
    let image1 = load_rgba(png1)?;

    Ok(image0.dimensions() == image1.dimensions() && image0.as_raw() == image1.as_raw())
}
