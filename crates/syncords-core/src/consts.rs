/// Extent scale applied for a positive scroll step (widens the view).
pub const SCROLL_UP_FACTOR: f64 = 1.2;

/// Extent scale applied for a negative scroll step (narrows the view).
pub const SCROLL_DOWN_FACTOR: f64 = 0.8;

/// Fraction of the cursor movement applied to the view while panning.
pub const PAN_DAMPENING: f64 = 0.5;

/// Default world span covered by a fixed-scale map image.
pub const DEFAULT_MAP_SIZE: f64 = 8000.0;

/// Pixel span of the reference map asset the fixed scale is calibrated on.
pub const DEFAULT_REFERENCE_DIM: f64 = 1493.0;

/// Directory (relative to the executable) that receives coordinate files.
pub const OUTPUT_DIR_NAME: &str = "cords";

/// Prefix of every coordinate file name.
pub const OUTPUT_FILE_PREFIX: &str = "cords_";

/// Sortable, second-precision local timestamp embedded in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Name of the optional settings file looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "syncords.toml";

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// File extensions routed to the GeoTIFF reader.
pub const TIFF_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// File extensions routed to the bitmap reader with a fixed-scale transform.
pub const BITMAP_EXTENSIONS: &[&str] = &["webp", "png", "jpg", "jpeg", "bmp"];
