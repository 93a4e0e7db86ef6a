use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    CONFIG_FILE_NAME, DEFAULT_MAP_SIZE, DEFAULT_REFERENCE_DIM, OUTPUT_DIR_NAME, PAN_DAMPENING,
    SCROLL_DOWN_FACTOR, SCROLL_UP_FACTOR,
};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SynCordsConfig {
    /// Drop recorded points when a new image is loaded.
    #[serde(default)]
    pub clear_points_on_load: bool,
    /// Where coordinate files go. `None` = `cords/` next to the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub fixed_scale: FixedScaleConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl SynCordsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Settings file next to the executable, or defaults when there is none.
    pub fn load_beside_executable() -> Result<Self> {
        let path = executable_dir()?.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Output directory, falling back to `exe_dir/cords`.
    pub fn resolve_output_dir(&self, exe_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => exe_dir.join(dir),
            None => exe_dir.join(OUTPUT_DIR_NAME),
        }
    }
}

/// Directory holding the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Scale used for bitmaps that carry no georeferencing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedScaleConfig {
    /// World units spanned by the reference dimension.
    pub map_size: f64,
    /// Pixel span of the reference asset.
    pub reference_dim: f64,
    /// Negate world y (bottom-up world axis).
    pub flip_y: bool,
}

impl FixedScaleConfig {
    pub fn scale(&self) -> f64 {
        self.map_size / self.reference_dim
    }
}

impl Default for FixedScaleConfig {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            reference_dim: DEFAULT_REFERENCE_DIM,
            flip_y: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub scroll_up_factor: f64,
    pub scroll_down_factor: f64,
    pub pan_dampening: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scroll_up_factor: SCROLL_UP_FACTOR,
            scroll_down_factor: SCROLL_DOWN_FACTOR,
            pan_dampening: PAN_DAMPENING,
        }
    }
}
