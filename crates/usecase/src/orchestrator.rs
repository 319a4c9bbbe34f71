// crates/usecase/src/orchestrator.rs
use std::path::Path;

use count_vlines_domain::{RgbGrid, count_vertical_lines};
use count_vlines_ports::decoder::{DecodedImageDto, ImageDecoder};
use count_vlines_shared_kernel::{ErrorContext, LineCount, Result};

pub struct CountImageLines<'a> {
    decoder: &'a dyn ImageDecoder,
}

impl<'a> CountImageLines<'a> {
    pub fn new(decoder: &'a dyn ImageDecoder) -> Self {
        Self { decoder }
    }

    /// Decode the image at `path` and count its vertical lines.
    ///
    /// Decoding happens up front; the counting pass runs against the
    /// in-memory grid only.
    pub fn run(&self, path: &Path) -> Result<LineCount> {
        let decoded = self.decoder.decode(path)?;
        let grid = dto_to_grid(decoded)
            .with_context(|| format!("decoder returned an inconsistent frame for '{}'", path.display()))?;
        Ok(count_vertical_lines(&grid))
    }
}

fn dto_to_grid(dto: DecodedImageDto) -> Result<RgbGrid> {
    Ok(RgbGrid::from_raw(dto.width, dto.height, dto.pixels)?)
}
