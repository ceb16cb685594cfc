//! Pointer-driven parallax.
//!
//! A [`PointerBus`] publishes the pointer's offset from the viewport centre;
//! each [`ParallaxLayer`] subscribes with its own speed factors and reads
//! the latest value when it is drawn.  Separate buses never share state, so
//! two landing screens (or two tests) cannot see each other's pointer.

use tokio::sync::watch;

/// Pointer position relative to the viewport centre, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

/// Publisher side of the pointer channel.
#[derive(Debug)]
pub struct PointerBus {
    tx: watch::Sender<PointerOffset>,
}

impl Default for PointerBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerBus {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PointerOffset::default());
        Self { tx }
    }

    /// Publish a pointer position at `(x, y)` inside a `width × height`
    /// viewport.
    pub fn publish(&self, x: f64, y: f64, width: f64, height: f64) {
        let offset = PointerOffset {
            dx: x - width / 2.0,
            dy: y - height / 2.0,
        };
        self.tx.send_replace(offset);
    }

    #[cfg(test)]
    pub(crate) fn latest(&self) -> PointerOffset {
        *self.tx.borrow()
    }

    /// Register a layer that shifts by `(-dx * speed_x, dy * speed_y)`.
    pub fn subscribe(&self, speed_x: f64, speed_y: f64) -> ParallaxLayer {
        ParallaxLayer {
            rx: self.tx.subscribe(),
            speed_x,
            speed_y,
        }
    }
}

/// Subscriber side: one decorative layer.
#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    rx: watch::Receiver<PointerOffset>,
    speed_x: f64,
    speed_y: f64,
}

impl ParallaxLayer {
    /// Current shift in whole cells `(x, y)`.
    pub fn shift(&self) -> (i16, i16) {
        let p = *self.rx.borrow();
        let x = (-p.dx * self.speed_x).round();
        let y = (p.dy * self.speed_y).round();
        (clamp_cell(x), clamp_cell(y))
    }
}

fn clamp_cell(v: f64) -> i16 {
    if v.is_finite() {
        v.clamp(i16::MIN as f64, i16::MAX as f64) as i16
    } else {
        0
    }
}
