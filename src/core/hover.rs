//! Pause-on-hover gate.

/// Tracks whether the pointer is over the strip and whether that should
/// pause motion.
#[derive(Debug, Clone, Default)]
pub struct HoverGate {
    pause_on_hover: bool,
    hovered: bool,
}

impl HoverGate {
    pub fn new(pause_on_hover: bool) -> Self {
        Self {
            pause_on_hover,
            hovered: false,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Hover is still tracked while pausing is disabled (the host may use
    /// it for a cosmetic highlight); it just never pauses.
    pub fn set_pause_on_hover(&mut self, enabled: bool) {
        self.pause_on_hover = enabled;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pause intent fed into the motion target.
    pub fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_toggle_pause() {
        let mut g = HoverGate::new(true);
        assert!(!g.is_paused());
        g.pointer_enter();
        assert!(g.is_paused());
        g.pointer_leave();
        assert!(!g.is_paused());
    }

    #[test]
    fn disabled_gate_never_pauses() {
        let mut g = HoverGate::new(false);
        g.pointer_enter();
        assert!(g.is_hovered());
        assert!(!g.is_paused());
    }

    #[test]
    fn enabling_mid_hover_pauses_immediately() {
        let mut g = HoverGate::new(false);
        g.pointer_enter();
        g.set_pause_on_hover(true);
        assert!(g.is_paused());
    }
}
