// crates/infra/src/decoder.rs
use std::io;
use std::path::Path;

use count_vlines_ports::decoder::{DecodedImageDto, ImageDecoder};
use count_vlines_shared_kernel::{InfrastructureError, Result, VlinesError};
use image::ImageError;

/// Decoder adapter backed by the `image` crate's format auto-detection.
///
/// Any alpha channel is discarded during the RGB8 conversion; nothing is
/// composited against a background. The file handle lives inside
/// `image::open` and is closed before this returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageDecoder;

impl ImageDecoder for FileImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImageDto> {
        let dynamic = image::open(path).map_err(|err| map_image_error(path, err))?;
        let rgb = dynamic.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(DecodedImageDto {
            width: width as usize,
            height: height as usize,
            pixels: rgb.into_raw(),
        })
    }
}

/// Translate `image` failures into the driver-facing error taxonomy.
fn map_image_error(path: &Path, err: ImageError) -> VlinesError {
    let path = path.to_path_buf();
    let mapped = match err {
        ImageError::IoError(io_err) => match io_err.kind() {
            io::ErrorKind::NotFound => InfrastructureError::ImageNotFound { path },
            io::ErrorKind::PermissionDenied => InfrastructureError::ImageAccessDenied { path },
            _ => InfrastructureError::ImageRead { path, source: io_err },
        },
        ImageError::Decoding(_) | ImageError::Unsupported(_) => {
            InfrastructureError::ImageUnsupported { path, details: err.to_string() }
        }
        other => InfrastructureError::ImageRead { path, source: io::Error::other(other) },
    };
    mapped.into()
}
