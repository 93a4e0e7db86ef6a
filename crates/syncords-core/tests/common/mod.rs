#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

use syncords_core::io::{LoadedImage, RasterKind};
use syncords_core::raster::Raster;
use syncords_core::transform::{AffineTransform, GeoTransform};

/// Georeferencing tags to embed in a synthetic GeoTIFF.
pub enum GeoTags<'a> {
    None,
    Tiepoint { scale: &'a [f64], tiepoint: &'a [f64] },
    Matrix(&'a [f64]),
}

/// Write an 8-bit grayscale TIFF with optional GeoTIFF tags.
pub fn write_gray8_tiff(path: &Path, width: u32, height: u32, data: &[u8], tags: GeoTags) {
    let file = File::create(path).expect("create tiff");
    let mut encoder = TiffEncoder::new(file).expect("tiff encoder");
    let mut image = encoder
        .new_image::<colortype::Gray8>(width, height)
        .expect("new image");
    match tags {
        GeoTags::None => {}
        GeoTags::Tiepoint { scale, tiepoint } => {
            image
                .encoder()
                .write_tag(Tag::ModelPixelScaleTag, scale)
                .expect("write pixel scale");
            image
                .encoder()
                .write_tag(Tag::ModelTiepointTag, tiepoint)
                .expect("write tiepoint");
        }
        GeoTags::Matrix(m) => {
            image
                .encoder()
                .write_tag(Tag::ModelTransformationTag, m)
                .expect("write transformation");
        }
    }
    image.write_data(data).expect("write tiff data");
}

/// Write a 32-bit float grayscale TIFF without georeferencing.
pub fn write_f32_tiff(path: &Path, width: u32, height: u32, data: &[f32]) {
    let file = File::create(path).expect("create tiff");
    let mut encoder = TiffEncoder::new(file).expect("tiff encoder");
    encoder
        .write_image::<colortype::Gray32Float>(width, height, data)
        .expect("write f32 tiff");
}

/// Write an 8-bit RGB TIFF without georeferencing.
pub fn write_rgb8_tiff(path: &Path, width: u32, height: u32, data: &[u8]) {
    let file = File::create(path).expect("create tiff");
    let mut encoder = TiffEncoder::new(file).expect("tiff encoder");
    encoder
        .write_image::<colortype::RGB8>(width, height, data)
        .expect("write rgb tiff");
}

/// Write a grayscale PNG.
pub fn write_gray_png(path: &Path, width: u32, height: u32, data: Vec<u8>) {
    let img = image::GrayImage::from_raw(width, height, data).expect("buffer matches size");
    img.save(path).expect("save png");
}

/// An in-memory image of zeros with an explicit transform.
pub fn synthetic_image(width: usize, height: usize, transform: GeoTransform) -> LoadedImage {
    LoadedImage {
        path: PathBuf::from(format!("synthetic_{width}x{height}.tif")),
        kind: RasterKind::GeoTiff,
        raster: Raster::new(Array2::<f32>::zeros((height, width))),
        transform,
    }
}

/// 100x100 raster with the identity affine transform.
pub fn identity_image() -> LoadedImage {
    synthetic_image(100, 100, GeoTransform::Affine(AffineTransform::identity()))
}
