// crates/ports/src/decoder.rs
use std::path::Path;

use count_vlines_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing a decoded image produced by an input port.
///
/// `pixels` is row-major RGB8, three bytes per pixel, so its length is
/// `width * height * 3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedImageDto {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Port for decoding an image file into pixels.
///
/// Implementations own file access entirely; the file handle must be
/// released by the time `decode` returns.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<DecodedImageDto>;
}
