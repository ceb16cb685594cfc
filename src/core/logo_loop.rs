//! The logo loop component: geometry, copy planning, motion, and hover
//! wired together against a host that schedules frames and resize events.
//!
//! The host contract is small ([`FrameHost`]): it hands out
//! frame tokens and resize-listener ids, and later delivers
//! [`LogoLoop::on_frame`] / [`LogoLoop::on_resize`] calls on the same thread.
//! At most one frame is outstanding at a time; a token that is not the
//! pending one is stale and ignored.

use super::geometry::{Geometry, GeometryProbe, Measure};
use super::hover::HoverGate;
use super::item::{Item, LoopConfig};
use super::motion::MotionController;
use super::planner::LayoutState;

// ───────────────────────────────────────── host contract ─────

/// Handle for one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Handle for one registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Scheduling surface the loop runs against.
pub trait FrameHost {
    /// Schedule one frame callback.
    fn request_frame(&mut self) -> FrameToken;
    /// Cancel a scheduled callback.  Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
    fn add_resize_listener(&mut self) -> ListenerId;
    /// Unknown ids are ignored.
    fn remove_resize_listener(&mut self, id: ListenerId);
}

impl<H: FrameHost + ?Sized> FrameHost for &mut H {
    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token)
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        (**self).add_resize_listener()
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        (**self).remove_resize_listener(id)
    }
}

// ───────────────────────────────────────── strip model ───────

/// One item as laid out on screen for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSegment {
    /// Which duplicate this segment belongs to (0 = the first copy).
    pub copy: usize,
    /// Index into the item sequence.
    pub item: usize,
    /// Left edge relative to the container, after translation.
    pub x: f64,
    pub width: f64,
}

impl StripSegment {
    /// Duplicates exist for presentation only and are hidden from
    /// assistive output.
    pub fn is_presentation_only(&self) -> bool {
        self.copy > 0
    }

    /// First terminal column the segment is drawn at.
    pub fn column(&self) -> f64 {
        self.x.floor()
    }

    /// Whether column `x` falls on the drawn segment.
    pub fn contains(&self, x: f64) -> bool {
        let col = self.column();
        x >= col && x < col + self.width
    }
}

// ───────────────────────────────────────── component ─────────

/// A horizontally looping strip of items.
#[derive(Debug)]
pub struct LogoLoop {
    items: Vec<Item>,
    config: LoopConfig,
    probe: GeometryProbe,
    layout: LayoutState,
    motion: MotionController,
    hover: HoverGate,
    pending_frame: Option<FrameToken>,
    resize_listener: Option<ListenerId>,
}

impl LogoLoop {
    pub fn new(items: Vec<Item>, config: LoopConfig) -> Self {
        let hover = HoverGate::new(config.pause_on_hover);
        Self {
            items,
            config,
            probe: GeometryProbe::default(),
            layout: LayoutState::default(),
            motion: MotionController::default(),
            hover,
            pending_frame: None,
            resize_listener: None,
        }
    }

    // ── accessors ───────────────────────────────────────────────

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn offset(&self) -> f64 {
        self.motion.offset()
    }

    pub fn velocity(&self) -> f64 {
        self.motion.velocity()
    }

    /// Horizontal translation to apply to the strip (content moves left by
    /// the offset).
    pub fn translation(&self) -> f64 {
        -self.motion.offset()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn is_paused(&self) -> bool {
        self.hover.is_paused()
    }

    pub fn is_mounted(&self) -> bool {
        self.resize_listener.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    /// Items exposed to assistive output: the first copy only.
    pub fn accessible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    // ── lifecycle ───────────────────────────────────────────────

    /// Register the resize listener, take the first measurement, and
    /// schedule the first frame.  Calling it again while mounted is a no-op.
    pub fn mount<H, M>(&mut self, host: &mut H, measure: &M)
    where
        H: FrameHost + ?Sized,
        M: Measure + ?Sized,
    {
        if self.resize_listener.is_none() {
            self.resize_listener = Some(host.add_resize_listener());
        }
        self.remeasure(measure);
        if self.pending_frame.is_none() {
            self.pending_frame = Some(host.request_frame());
        }
        tracing::debug!(
            items = self.items.len(),
            copies = self.layout.copy_count,
            width = self.layout.single_copy_width,
            "logo loop mounted"
        );
    }

    /// Cancel the pending frame, drop the resize listener, and forget the
    /// frame clock.  Safe to call any number of times, mounted or not.
    pub fn teardown<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.pending_frame.take() {
            host.cancel_frame(token);
        }
        if let Some(id) = self.resize_listener.take() {
            host.remove_resize_listener(id);
            tracing::debug!("logo loop torn down");
        }
        self.motion.reset_clock();
    }

    /// Frame callback.  Returns `true` when the offset was integrated.
    ///
    /// Stale tokens (cancelled, superseded, or delivered after teardown)
    /// are ignored.  Without usable geometry the motion state is left alone
    /// but a frame stays scheduled so the loop resumes once geometry lands.
    pub fn on_frame<H: FrameHost + ?Sized>(
        &mut self,
        host: &mut H,
        token: FrameToken,
        timestamp: f64,
    ) -> bool {
        if self.pending_frame != Some(token) {
            tracing::trace!(?token, "stale frame ignored");
            return false;
        }
        self.pending_frame = None;

        let width = self.layout.single_copy_width;
        let ran = if width > 0.0 {
            let target = if self.hover.is_paused() {
                0.0
            } else {
                self.config.cruise_velocity()
            };
            self.motion.advance(timestamp, target, width);
            true
        } else {
            self.motion.reset_clock();
            false
        };

        self.pending_frame = Some(host.request_frame());
        ran
    }

    /// Resize callback.  Returns the accepted geometry, if any.
    ///
    /// A new single-copy width does not rescale the offset; the next frame
    /// simply wraps against the new modulus.
    pub fn on_resize<M: Measure + ?Sized>(&mut self, measure: &M) -> Option<Geometry> {
        self.remeasure(measure)
    }

    /// Replace the item sequence and re-measure.
    pub fn set_items<M: Measure + ?Sized>(&mut self, items: Vec<Item>, measure: &M) {
        self.items = items;
        self.remeasure(measure);
    }

    /// Swap the configuration.  Offset and velocity carry over, so the
    /// strip eases toward the new target instead of jumping; only the frame
    /// clock and the layout are rebuilt.
    pub fn reconfigure<M: Measure + ?Sized>(&mut self, config: LoopConfig, measure: &M) {
        tracing::debug!(
            speed = config.speed,
            direction = config.direction.label(),
            pause_on_hover = config.pause_on_hover,
            "logo loop reconfigured"
        );
        self.hover.set_pause_on_hover(config.pause_on_hover);
        self.config = config;
        self.motion.reset_clock();
        self.remeasure(measure);
    }

    pub fn pointer_enter(&mut self) {
        self.hover.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.hover.pointer_leave();
    }

    fn remeasure<M: Measure + ?Sized>(&mut self, measure: &M) -> Option<Geometry> {
        let geometry = self
            .probe
            .probe(measure, &self.items, self.config.item_gap)?;
        let next = LayoutState::plan(geometry.container_width, geometry.single_copy_width);
        if next != self.layout {
            tracing::debug!(
                container = geometry.container_width,
                width = next.single_copy_width,
                copies = next.copy_count,
                "strip layout changed"
            );
        }
        self.layout = next;
        Some(geometry)
    }

    // ── strip ───────────────────────────────────────────────────

    /// Segments overlapping `[0, container_width)` after translation, in
    /// left-to-right order.
    pub fn visible_segments(&self, container_width: f64) -> Vec<StripSegment> {
        let stride = self.layout.single_copy_width;
        if !(stride > 0.0) || self.items.is_empty() {
            return Vec::new();
        }
        let gap = self.config.item_gap.max(0.0);
        let shift = self.translation();

        let mut out = Vec::new();
        for copy in 0..self.layout.copy_count {
            let mut x = copy as f64 * stride + shift;
            if x >= container_width {
                break;
            }
            for (item, entry) in self.items.iter().enumerate() {
                let width = entry.width() as f64;
                let col = x.floor();
                if col + width > 0.0 && col < container_width {
                    out.push(StripSegment { copy, item, x, width });
                }
                x += width + gap;
            }
        }
        out
    }

    /// The segment under container-relative column `x`, if any.
    pub fn hit_test(&self, x: f64, container_width: f64) -> Option<StripSegment> {
        self.visible_segments(container_width)
            .into_iter()
            .find(|s| s.contains(x))
    }

    #[cfg(test)]
    pub(crate) fn set_motion(&mut self, motion: MotionController) {
        self.motion = motion;
    }
}

// ───────────────────────────────────────── RAII mount ────────

/// A mounted loop together with the host it runs on.  Dropping it tears the
/// loop down, so the pending frame and resize listener are released on
/// every exit path.
pub struct MountedLoop<H: FrameHost> {
    logo: LogoLoop,
    host: H,
}

impl<H: FrameHost> MountedLoop<H> {
    pub fn mount<M: Measure + ?Sized>(mut logo: LogoLoop, mut host: H, measure: &M) -> Self {
        logo.mount(&mut host, measure);
        Self { logo, host }
    }

    pub fn logo(&self) -> &LogoLoop {
        &self.logo
    }

    pub fn logo_mut(&mut self) -> &mut LogoLoop {
        &mut self.logo
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn on_frame(&mut self, token: FrameToken, timestamp: f64) -> bool {
        self.logo.on_frame(&mut self.host, token, timestamp)
    }
}

impl<H: FrameHost> Drop for MountedLoop<H> {
    fn drop(&mut self) {
        self.logo.teardown(&mut self.host);
    }
}
