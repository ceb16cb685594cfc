//! Terminal implementation of the loop's host contract.
//!
//! The main loop ticks at a fixed rate; each tick delivers the one pending
//! frame (if any) with a monotonic timestamp.  Resize listeners are tracked
//! so the handler only re-measures while somebody is registered.

use std::time::Instant;

use crate::core::geometry::{cell_content_width, Measure};
use crate::core::item::Item;
use crate::core::logo_loop::{FrameHost, FrameToken, ListenerId};

#[derive(Debug)]
pub struct TerminalHost {
    next_id: u64,
    pending: Option<FrameToken>,
    listeners: Vec<ListenerId>,
    epoch: Instant,
}

impl TerminalHost {
    pub fn new(epoch: Instant) -> Self {
        Self {
            next_id: 0,
            pending: None,
            listeners: Vec::new(),
            epoch,
        }
    }

    /// Take the frame that should run on this tick.
    pub fn take_due_frame(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_resize_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Seconds since the host was created.
    pub fn timestamp(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.epoch).as_secs_f64()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.next_id
    }
}

impl FrameHost for TerminalHost {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id());
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }
}

/// Measurement of the strip box in terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct CellMeasure {
    /// Inner width of the strip box.
    pub container_width: u16,
}

impl Measure for CellMeasure {
    fn container_width(&self) -> f64 {
        f64::from(self.container_width)
    }

    fn content_width(&self, items: &[Item], gap: f64) -> f64 {
        cell_content_width(items, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn only_latest_frame_is_due() {
        let mut host = TerminalHost::new(Instant::now());
        let a = host.request_frame();
        let b = host.request_frame();
        assert_ne!(a, b);
        assert_eq!(host.take_due_frame(), Some(b));
        assert_eq!(host.take_due_frame(), None);
    }

    #[test]
    fn cancel_ignores_unknown_tokens() {
        let mut host = TerminalHost::new(Instant::now());
        let a = host.request_frame();
        host.cancel_frame(FrameToken(999));
        assert!(host.has_pending_frame());
        host.cancel_frame(a);
        assert!(!host.has_pending_frame());
    }

    #[test]
    fn listeners_register_and_unregister() {
        let mut host = TerminalHost::new(Instant::now());
        let id = host.add_resize_listener();
        assert!(host.has_resize_listeners());
        host.remove_resize_listener(id);
        host.remove_resize_listener(id);
        assert!(!host.has_resize_listeners());
    }

    #[test]
    fn timestamps_are_monotonic_from_epoch() {
        let epoch = Instant::now();
        let host = TerminalHost::new(epoch);
        assert_eq!(host.timestamp(epoch), 0.0);
        let later = epoch + Duration::from_millis(1500);
        assert!((host.timestamp(later) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn cell_measure_reports_label_widths() {
        let m = CellMeasure { container_width: 40 };
        let items = [Item::new("React"), Item::new("Next.js")];
        assert_eq!(m.container_width(), 40.0);
        assert_eq!(m.content_width(&items, 3.0), 18.0);
    }
}
