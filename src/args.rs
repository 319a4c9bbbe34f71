// src/args.rs
use std::path::PathBuf;

use clap::Parser;

pub const USAGE_HINT: &str = "Usage: count_vlines <ABSOLUTE_PATH_TO_IMAGE>";

#[derive(Parser, Debug)]
#[command(name = "count_vlines", version, about = "Counts the distinct vertical black lines in a raster image")]
pub struct Args {
    /// Absolute path to the image file
    pub path: PathBuf,
}
