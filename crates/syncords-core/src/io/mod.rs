pub mod bitmap;
pub mod cords_writer;
pub mod geotiff;
pub mod raster_io;

pub use raster_io::{load_raster, LoadedImage, RasterKind};
