use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use ndarray::Array2;
use num_traits::AsPrimitive;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::{debug, warn};

use crate::error::{Result, SynCordsError};
use crate::raster::Raster;
use crate::transform::AffineTransform;

/// Read the first band of a TIFF along with its GeoTIFF affine transform.
///
/// Missing or malformed georeferencing is not an error: the transform comes
/// back as `None` and the caller decides on a fallback.
pub fn read_geotiff(path: &Path) -> Result<(Raster, Option<AffineTransform>)> {
    let reader = BufReader::new(File::open(path)?);
    let mut decoder = Decoder::new(reader)?;
    let (w, h) = decoder.dimensions()?;
    let (w, h) = (w as usize, h as usize);
    if w == 0 || h == 0 {
        return Err(SynCordsError::InvalidDimensions { width: w, height: h });
    }

    let transform = read_affine(&mut decoder);
    let data = match decoder.read_image()? {
        DecodingResult::U8(buf) => first_band(&buf, w, h)?,
        DecodingResult::U16(buf) => first_band(&buf, w, h)?,
        DecodingResult::U32(buf) => first_band(&buf, w, h)?,
        DecodingResult::U64(buf) => first_band(&buf, w, h)?,
        DecodingResult::I8(buf) => first_band(&buf, w, h)?,
        DecodingResult::I16(buf) => first_band(&buf, w, h)?,
        DecodingResult::I32(buf) => first_band(&buf, w, h)?,
        DecodingResult::I64(buf) => first_band(&buf, w, h)?,
        DecodingResult::F32(buf) => first_band(&buf, w, h)?,
        DecodingResult::F64(buf) => first_band(&buf, w, h)?,
    };

    Ok((Raster::new(data), transform))
}

/// Prefer `ModelTransformation`, then `ModelTiepoint` + `ModelPixelScale`.
fn read_affine<R: Read + Seek>(decoder: &mut Decoder<R>) -> Option<AffineTransform> {
    if let Some(m) = read_f64_tag(decoder, Tag::ModelTransformationTag) {
        match AffineTransform::from_model_transformation(&m) {
            Some(t) => return Some(t),
            None => warn!(len = m.len(), "ModelTransformation tag too short, ignoring"),
        }
    }

    let scale = read_f64_tag(decoder, Tag::ModelPixelScaleTag);
    let tiepoint = read_f64_tag(decoder, Tag::ModelTiepointTag);
    match (scale, tiepoint) {
        (Some(scale), Some(tiepoint)) => {
            let t = AffineTransform::from_tiepoint(&scale, &tiepoint);
            if t.is_none() {
                warn!("Malformed ModelPixelScale/ModelTiepoint tags, ignoring");
            }
            t
        }
        _ => None,
    }
}

fn read_f64_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<Vec<f64>> {
    match decoder.find_tag(tag) {
        Ok(Some(value)) => match value.into_f64_vec() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(?tag, error = %e, "Unreadable GeoTIFF tag");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            debug!(?tag, error = %e, "GeoTIFF tag lookup failed");
            None
        }
    }
}

/// Pick sample 0 of each pixel from an interleaved buffer.
fn first_band<T: AsPrimitive<f32>>(buf: &[T], w: usize, h: usize) -> Result<Array2<f32>> {
    let n = w * h;
    if buf.len() < n || buf.len() % n != 0 {
        return Err(SynCordsError::UnsupportedRaster(format!(
            "{} samples do not fit a {w}x{h} image",
            buf.len()
        )));
    }
    let spp = buf.len() / n;
    Ok(Array2::from_shape_fn((h, w), |(row, col)| {
        buf[(row * w + col) * spp].as_()
    }))
}
