// crates/domain/src/probe.rs
use crate::classify::is_black;
use crate::grid::PixelGrid;

/// Whether column `x` contains at least one black pixel.
///
/// Tiered probing: the midpoint and quartile rows are inspected first, so a
/// continuous vertical stroke resolves in O(1). Columns that miss all three
/// probes get an exhaustive scan, so the answer is exact for sparse and
/// dashed strokes too. The boolean result does not depend on probe order.
///
/// Panics if `x >= grid.width()`.
pub fn column_has_black<G: PixelGrid>(grid: &G, x: usize) -> bool {
    let height = grid.height();
    if height == 0 {
        return false;
    }

    // For height < 4 the probe rows may coincide; duplicates are harmless.
    let mid = height / 2;
    let q1 = height / 4;
    let q3 = height * 3 / 4;

    if is_black(grid.pixel(x, mid)) {
        return true;
    }
    if is_black(grid.pixel(x, q1)) {
        return true;
    }
    if is_black(grid.pixel(x, q3)) {
        return true;
    }

    (0..height)
        .filter(|&y| y != mid && y != q1 && y != q3)
        .any(|y| is_black(grid.pixel(x, y)))
}
