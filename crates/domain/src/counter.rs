// crates/domain/src/counter.rs
use count_vlines_shared_kernel::LineCount;

use crate::grid::PixelGrid;
use crate::probe::column_has_black;

/// Count maximal runs of black columns in a single left-to-right pass.
///
/// The counter is edge-triggered: it increments only on a light-to-black
/// transition, so a stroke several columns wide still counts once. Empty
/// images (zero width or height) count zero.
#[must_use]
pub fn count_vertical_lines<G: PixelGrid>(grid: &G) -> LineCount {
    let mut lines = 0usize;
    let mut in_line = false;

    for x in 0..grid.width() {
        if column_has_black(grid, x) {
            if !in_line {
                lines += 1;
                in_line = true;
            }
        } else {
            in_line = false;
        }
    }

    LineCount::new(lines)
}
