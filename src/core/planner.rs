//! Copy planning: how many duplicates of the item list the strip needs.

/// Never lay out fewer copies than this.  With three copies, one copy can
/// scroll fully out of view on one side while the next is already in place
/// on the other.
pub const MIN_COPIES: usize = 3;

/// Derived layout for the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Width of one un-duplicated copy of the item list.  Also the modulus
    /// for the scroll offset.
    pub single_copy_width: f64,
    /// Number of contiguous copies to lay out (always `>= MIN_COPIES`).
    pub copy_count: usize,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            single_copy_width: 0.0,
            copy_count: MIN_COPIES,
        }
    }
}

impl LayoutState {
    pub fn plan(container_width: f64, single_copy_width: f64) -> Self {
        Self {
            single_copy_width: single_copy_width.max(0.0),
            copy_count: copy_count(container_width, single_copy_width),
        }
    }
}

/// `max(3, ceil(container / single) + 2)`.
///
/// Degenerate inputs (zero, negative, or non-finite widths) fall back to
/// [`MIN_COPIES`] rather than dividing by zero.
pub fn copy_count(container_width: f64, single_copy_width: f64) -> usize {
    if !(single_copy_width > 0.0) || !single_copy_width.is_finite() {
        return MIN_COPIES;
    }
    let container = if container_width.is_finite() {
        container_width.max(0.0)
    } else {
        0.0
    };
    // The float-to-int cast saturates for huge ratios.
    let needed = ((container / single_copy_width).ceil() as usize).saturating_add(2);
    needed.max(MIN_COPIES)
}
