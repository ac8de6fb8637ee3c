//! JSON configuration of the `glint_demo` tool.
//!
//! ```json
//! {
//!   "inputs": { "frames": ["data/eye_0001.png"], "right_shift": 6 },
//!   "tracker": { "params": { "intensity": { "floor": 220.0 } } },
//!   "output": { "dir": "out/", "debug_images": true, "eye_images": true }
//! }
//! ```
//!
//! Every tracker field is optional and falls back to the reference defaults.
//! The frame size in `tracker` is replaced by the size of the first input.
use crate::tracker::TrackerConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct GlintDemoConfig {
    pub inputs: InputConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// 8- or 16-bit grayscale PNG frames, processed in order.
    pub frames: Vec<PathBuf>,
    /// Right shift applied to every sample after loading; `6` turns
    /// left-aligned 10-bit data in 16-bit PNGs into the 0–1023 range.
    #[serde(default)]
    pub right_shift: u32,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Write the composed debug PNG per frame.
    #[serde(default = "default_true")]
    pub debug_images: bool,
    /// Write the inpainted eye crops per frame.
    #[serde(default)]
    pub eye_images: bool,
}

fn default_true() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<GlintDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
