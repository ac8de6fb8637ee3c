//! I/O helpers for raw frames, 8-bit planes and JSON.
//!
//! - `load_frame_u16`: read a PNG (8- or 16-bit) into an owned 16-bit plane,
//!   optionally shifting 16-bit samples down to the sensor's 10-bit range.
//! - `save_plane_u8`: write an 8-bit plane to a grayscale PNG.
//! - `save_rgb`: write a composed debug image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Plane;
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as a 16-bit single-channel frame.
///
/// `right_shift` is applied to every sample; use `6` for PNGs that store
/// 10-bit sensor data left-aligned in 16 bits, `0` for data stored as-is.
pub fn load_frame_u16(path: &Path, right_shift: u32) -> Result<Plane<u16>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = img.into_raw();
    if right_shift > 0 {
        for v in &mut data {
            *v >>= right_shift.min(15);
        }
    }
    Plane::from_vec(width, height, data).map_err(|e| e.to_string())
}

/// Save an 8-bit plane to a grayscale PNG.
pub fn save_plane_u8(plane: &Plane<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(plane.w as u32, plane.h as u32, plane.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGB image (typically the composed debug view) to a PNG.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
