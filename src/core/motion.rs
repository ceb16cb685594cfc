//! Frame-rate independent scroll integration with exponential velocity easing.
//!
//! Each frame the velocity closes a fraction `1 - exp(-dt / τ)` of its gap
//! to the target, then the offset advances by `velocity * dt` and wraps into
//! `[0, width)`.  Pausing only changes the target, so the strip glides to a
//! stop instead of freezing.

/// Easing time constant in seconds.
pub const EASING_TAU: f64 = 0.25;

/// Fraction of the velocity gap closed over `dt` seconds.
pub fn easing_factor(dt: f64) -> f64 {
    1.0 - (-dt / EASING_TAU).exp()
}

/// Wrap `offset` into `[0, width)` with a true modulo, so negative offsets
/// from reverse scrolling land on the right side of the range.
///
/// Returns `0.0` when `width` is not positive or `offset` is not finite.
pub fn wrap(offset: f64, width: f64) -> f64 {
    if !(width > 0.0) || !width.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    let r = ((offset % width) + width) % width;
    // `x % w` can round up to `w` for tiny negative `x`.
    if r >= width {
        0.0
    } else {
        r
    }
}

/// Scroll position and velocity of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Always in `[0, width)` after a step.
    pub offset: f64,
    pub velocity: f64,
}

impl MotionState {
    /// Advance by `dt` seconds toward `target` velocity, wrapping against
    /// `width`.  Non-positive or non-finite `dt` leaves the state unchanged.
    pub fn step(&mut self, dt: f64, target: f64, width: f64) {
        if !(width > 0.0) || !width.is_finite() {
            return;
        }
        if !(dt > 0.0) || !dt.is_finite() || !target.is_finite() {
            return;
        }
        self.velocity += (target - self.velocity) * easing_factor(dt);
        self.offset = wrap(self.offset + self.velocity * dt, width);
    }
}

/// Owns the motion state and the clock used to derive `dt` between frames.
#[derive(Debug, Default)]
pub struct MotionController {
    state: MotionState,
    /// Timestamp (seconds) of the previous frame.  `None` until the first
    /// frame after mount, teardown, or a geometry wait.
    last_timestamp: Option<f64>,
}

impl MotionController {
    #[cfg(test)]
    pub(crate) fn state(&self) -> MotionState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    #[cfg(test)]
    pub(crate) fn has_clock(&self) -> bool {
        self.last_timestamp.is_some()
    }

    /// Run one frame at `timestamp` seconds.  The first frame only starts
    /// the clock (`dt = 0`); timestamps that go backwards count as `dt = 0`.
    pub fn advance(&mut self, timestamp: f64, target: f64, width: f64) -> f64 {
        if !timestamp.is_finite() {
            return self.state.offset;
        }
        let last = self.last_timestamp.replace(timestamp).unwrap_or(timestamp);
        let dt = (timestamp - last).max(0.0);
        self.state.step(dt, target, width);
        self.state.offset
    }

    /// Forget the previous frame timestamp so the next frame starts with
    /// `dt = 0` instead of a stale gap.
    pub fn reset_clock(&mut self) {
        self.last_timestamp = None;
    }

    #[cfg(test)]
    pub(crate) fn with_state(state: MotionState) -> Self {
        Self {
            state,
            last_timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Distance on a circle of circumference `w`, so 0 and w-ε compare close.
    fn circular_distance(a: f64, b: f64, w: f64) -> f64 {
        let d = (a - b).abs() % w;
        d.min(w - d)
    }

    #[test]
    fn single_long_frame_scenario() {
        let mut m = MotionState::default();
        m.step(2.5, 120.0, 300.0);
        assert!(m.offset >= 0.0 && m.offset < 300.0);
        assert!(m.velocity > 0.0 && m.velocity < 120.0);
        let expected_v = 120.0 * (1.0 - (-10.0f64).exp());
        assert!((m.velocity - expected_v).abs() < 1e-9);
        assert!((m.offset - expected_v * 2.5).abs() < 1e-9);
    }

    #[test]
    fn wrap_handles_negative_and_boundary() {
        assert_eq!(wrap(-10.0, 300.0), 290.0);
        assert_eq!(wrap(300.0, 300.0), 0.0);
        assert_eq!(wrap(610.0, 300.0), 10.0);
        assert_eq!(wrap(-1e-18, 300.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(f64::NAN, 300.0), 0.0);
    }

    #[test]
    fn zero_or_negative_dt_is_a_noop() {
        let mut m = MotionState { offset: 12.0, velocity: 40.0 };
        m.step(0.0, 120.0, 300.0);
        m.step(-1.0, 120.0, 300.0);
        m.step(f64::NAN, 120.0, 300.0);
        assert_eq!(m, MotionState { offset: 12.0, velocity: 40.0 });
    }

    #[test]
    fn zero_width_never_mutates() {
        let mut m = MotionState::default();
        m.step(1.0, 120.0, 0.0);
        assert_eq!(m, MotionState::default());
    }

    #[test]
    fn first_frame_only_starts_the_clock() {
        let mut c = MotionController::default();
        assert_eq!(c.advance(1000.0, 120.0, 300.0), 0.0);
        assert_eq!(c.velocity(), 0.0);
        assert!(c.has_clock());
        c.advance(1000.5, 120.0, 300.0);
        assert!(c.velocity() > 0.0);
    }

    #[test]
    fn backwards_timestamp_counts_as_zero_dt() {
        let mut c = MotionController::default();
        c.advance(10.0, 120.0, 300.0);
        c.advance(10.1, 120.0, 300.0);
        let before = c.state();
        c.advance(9.0, 120.0, 300.0);
        assert_eq!(c.state(), before);
        // The clock follows the new timestamp; a later frame uses 9.0 as base.
        c.advance(9.1, 120.0, 300.0);
        assert!(c.offset() != before.offset);
    }

    #[test]
    fn reset_clock_prevents_stale_gap() {
        let mut c = MotionController::default();
        c.advance(1.0, 120.0, 300.0);
        c.advance(1.1, 120.0, 300.0);
        let before = c.state();
        c.reset_clock();
        c.advance(500.0, 120.0, 300.0);
        assert_eq!(c.state(), before);
    }

    #[test]
    fn pause_decays_without_overshoot() {
        let mut m = MotionState { offset: 0.0, velocity: 120.0 };
        let mut prev = m.velocity;
        for _ in 0..600 {
            m.step(1.0 / 60.0, 0.0, 300.0);
            assert!(m.velocity >= 0.0);
            assert!(m.velocity < prev);
            prev = m.velocity;
        }
        assert!(m.velocity < 1e-10);
    }

    #[test]
    fn reverse_pause_decays_from_below() {
        let mut m = MotionState { offset: 150.0, velocity: -120.0 };
        let mut prev = m.velocity.abs();
        for _ in 0..120 {
            m.step(1.0 / 30.0, 0.0, 300.0);
            assert!(m.velocity <= 0.0);
            assert!(m.velocity.abs() < prev);
            prev = m.velocity.abs();
        }
    }

    proptest! {
        #[test]
        fn offset_stays_in_range(
            steps in proptest::collection::vec((0.0f64..2.0, -500.0f64..500.0), 1..200),
            width in 1.0f64..1000.0,
        ) {
            let mut m = MotionState::default();
            for (dt, target) in steps {
                m.step(dt, target, width);
                prop_assert!(m.offset >= 0.0);
                prop_assert!(m.offset < width);
            }
        }

        #[test]
        fn velocity_is_timestep_invariant(
            dt in 0.001f64..0.2,
            v0 in -300.0f64..300.0,
            target in -300.0f64..300.0,
        ) {
            let mut fine = MotionState { offset: 0.0, velocity: v0 };
            for _ in 0..10 {
                fine.step(dt, target, 1.0e9);
            }
            let mut coarse = MotionState { offset: 0.0, velocity: v0 };
            coarse.step(dt * 10.0, target, 1.0e9);
            prop_assert!((fine.velocity - coarse.velocity).abs() < 1e-9);
        }

        #[test]
        fn cruising_is_timestep_invariant(
            dt in 0.001f64..0.2,
            speed in -300.0f64..300.0,
            width in 10.0f64..1000.0,
        ) {
            let mut fine = MotionState { offset: 0.0, velocity: speed };
            for _ in 0..10 {
                fine.step(dt, speed, width);
            }
            let mut coarse = MotionState { offset: 0.0, velocity: speed };
            coarse.step(dt * 10.0, speed, width);
            prop_assert!((fine.velocity - coarse.velocity).abs() < 1e-9);
            prop_assert!(circular_distance(fine.offset, coarse.offset, width) < 1e-6);
        }
    }
}
