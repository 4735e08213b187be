use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::ImageFormat;
use lopdf::{Stream, dictionary};
use std::io::Write;

/// Decodes a PNG and wraps its RGB samples in an image XObject stream.
/// Alpha is dropped; charts are drawn on an opaque background.
pub(crate) fn png_xobject(key: &str, png: &[u8]) -> Result<Stream, RenderError> {
    let rgb = image::load_from_memory_with_format(png, ImageFormat::Png)
        .map_err(|e| RenderError::Image(key.to_string(), e.to_string()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    let samples = deflate(rgb.as_raw())?;
    log::debug!(
        "Embedding image '{}' ({}x{}, {} bytes compressed)",
        key,
        width,
        height,
        samples.len()
    );

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };
    Ok(Stream::new(dict, samples))
}

pub(crate) fn deflate(bytes: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}
