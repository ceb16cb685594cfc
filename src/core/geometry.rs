//! Geometry probing: the "measure" capability the loop depends on.
//!
//! The loop never reads the rendering surface directly.  Hosts implement
//! [`Measure`]; tests hand in fixed numbers.

use super::item::Item;

/// Reports the current extents the strip lives in.
pub trait Measure {
    /// Width of the visible viewport the strip scrolls through.
    fn container_width(&self) -> f64;

    /// Rendered width of exactly one un-duplicated copy of `items`.
    fn content_width(&self, items: &[Item], gap: f64) -> f64;
}

/// Width of one copy when every item takes its label width plus `gap`.
pub fn cell_content_width(items: &[Item], gap: f64) -> f64 {
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    items.iter().map(|i| i.width() as f64 + gap).sum()
}

/// A single measurement emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub container_width: f64,
    pub single_copy_width: f64,
}

/// Takes measurements and filters out the ones the planner cannot use.
#[derive(Debug, Default)]
pub struct GeometryProbe;

impl GeometryProbe {
    /// Measure and emit, or return `None` when the single-copy width is not
    /// positive (nothing rendered yet, or no items).
    ///
    /// The single-copy width is rounded up to a whole unit so the modulus
    /// never cuts into the last item.
    pub fn probe<M: Measure + ?Sized>(
        &self,
        measure: &M,
        items: &[Item],
        gap: f64,
    ) -> Option<Geometry> {
        let width = measure.content_width(items, gap);
        if !(width > 0.0) || !width.is_finite() {
            tracing::trace!(width, "geometry probe skipped: no content width");
            return None;
        }
        let container = measure.container_width();
        let geometry = Geometry {
            container_width: if container.is_finite() { container.max(0.0) } else { 0.0 },
            single_copy_width: width.ceil(),
        };
        Some(geometry)
    }
}
