use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Stream, dictionary};
use std::io::Write;
use vitae_types::RasterImage;

/// Compresses `data` for a `/FlateDecode` stream.
pub(crate) fn flate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Encodes a raster as an RGB image XObject.
pub(crate) fn image_xobject(image: &RasterImage, compress: bool) -> Result<Stream, RenderError> {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => image.width_px() as i64,
        "Height" => image.height_px() as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };
    let data = if compress {
        dict.set("Filter", "FlateDecode");
        flate(image.pixels())?
    } else {
        image.pixels().to_vec()
    };
    Ok(Stream::new(dict, data))
}
