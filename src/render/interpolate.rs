use crate::game::Cell;

/// A body segment position in fractional grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPos {
    pub col: f64,
    pub row: f64,
}

/// Interpolate each segment between its previous-tick and current-tick
/// cells by `alpha`, paired by index. A segment with no previous
/// counterpart (the extra segment on a grow tick) is treated as already
/// arrived at its current cell. Presentation only; never feeds back into
/// simulation state.
pub fn interpolate(previous: &[Cell], current: &[Cell], alpha: f64) -> Vec<SegmentPos> {
    current
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let prev = previous.get(i).copied().unwrap_or(*cell);
            SegmentPos {
                col: f64::from(prev.col) + f64::from(cell.col - prev.col) * alpha,
                row: f64::from(prev.row) + f64::from(cell.row - prev.row) * alpha,
            }
        })
        .collect()
}
