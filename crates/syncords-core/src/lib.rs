pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod points;
pub mod raster;
pub mod session;
pub mod transform;
pub mod viewport;
