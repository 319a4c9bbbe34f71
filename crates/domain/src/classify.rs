// crates/domain/src/classify.rs
use crate::grid::Rgb;

/// Pixels with an unweighted channel mean below this are black.
///
/// The cutoff is deliberately coarse: lossy codecs drift true black toward
/// dark gray, and those pixels must still classify as black.
pub const BLACK_MEAN_CUTOFF: u16 = 128;

/// Classify a pixel as black via its unweighted channel mean.
///
/// The mean uses truncating integer division; 128 itself is non-black.
#[inline]
#[must_use]
pub fn is_black(px: Rgb) -> bool {
    let sum = u16::from(px.r) + u16::from(px.g) + u16::from(px.b);
    sum / 3 < BLACK_MEAN_CUTOFF
}
