//! Visible slice of a list for a bounded viewport.

use std::ops::Range;

/// Range of indices to draw for a list of `total` items with `selected`
/// highlighted and room for `capacity` rows.
///
/// The window is centred on the selection where possible and always contains
/// it. A zero capacity shows everything.
pub fn window_range(total: usize, selected: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || total <= capacity {
        return 0..total;
    }
    let selected = selected.min(total - 1);
    let start = selected
        .saturating_sub(capacity / 2)
        .min(total - capacity);
    start..start + capacity
}
