// src/app.rs
use std::path::Path;

use count_vlines_infra::FileImageDecoder;
use count_vlines_shared_kernel::{LineCount, Result, path::logical_absolute};
use count_vlines_usecase::CountImageLines;

/// Wire the real decoder into the use case and run it for one image.
pub fn run(path: &Path) -> Result<LineCount> {
    let path = logical_absolute(path);
    let decoder = FileImageDecoder;
    let usecase = CountImageLines::new(&decoder);
    usecase.run(&path)
}
