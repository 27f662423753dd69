//! Time-based fill animation for one ring.
//!
//! The engine owns no clock. Callers pass `now` as a [`Duration`] since any fixed epoch
//! (page load, frame counter, test start) and read back the dash offset to draw.

use std::time::Duration;

use serde::Serialize;

use super::color::ColorTiers;
use super::geometry::{RingConfig, RingGeometry, compute_geometry};

/// Delay between mount (or re-trigger) and the start of the fill, so the empty ring is
/// committed to screen first.
pub const START_DELAY: Duration = Duration::from_millis(50);

/// Length of the fill transition.
pub const FILL_DURATION: Duration = Duration::from_millis(1200);

/// CSS-style cubic Bézier easing with fixed endpoints (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// `cubic-bezier(0.65, 0, 0.35, 1)`
pub const EASE_IN_OUT: CubicBezier = CubicBezier { x1: 0.65, y1: 0.0, x2: 0.35, y2: 1.0 };

impl CubicBezier {
    /// Eased progress for linear progress `t` in [0, 1].
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 { return 0.0 }
        if t >= 1.0 { return 1.0 }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Invert x(s) = t: Newton steps first, bisection if the slope flattens out.
    fn solve_x(&self, t: f64) -> f64 {
        let mut s = t;
        for _ in 0..8 {
            let err = bezier(s, self.x1, self.x2) - t;
            if err.abs() < 1e-7 { return s }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 { break }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..64 {
            let x = bezier(s, self.x1, self.x2);
            if (x - t).abs() < 1e-7 { break }
            if x < t { lo = s } else { hi = s }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// SVG `keySplines` form.
    pub fn key_spline(&self) -> String {
        format!("{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// What a presentation layer with its own timing primitive needs: where to start, where
/// to end, and whether to transition at all.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillTransition {
    pub from: f64,
    pub to: f64,
    /// `false` means draw `to` immediately.
    pub animate: bool,
    #[serde(serialize_with = "serialize_millis")]
    pub delay: Duration,
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub easing: CubicBezier,
}

fn serialize_millis<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_millis() as u64)
}

impl FillTransition {
    /// Offset at `elapsed` time after the transition was scheduled.
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        if !self.animate { return self.to }
        let Some(running) = elapsed.checked_sub(self.delay) else { return self.from };
        if running >= self.duration { return self.to }
        let t = running.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.ease(t)
    }
}

impl RingGeometry {
    /// Transition from an empty ring to this ring's fill, or a snap when `animate` is false.
    pub fn fill_transition(&self, animate: bool) -> FillTransition {
        FillTransition {
            from: if animate { self.empty_offset() } else { self.dash_offset },
            to: self.dash_offset,
            animate,
            delay: START_DELAY,
            duration: FILL_DURATION,
            easing: EASE_IN_OUT,
        }
    }
}

/// Snapshot of one ring's animation state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartState {
    pub target_percentage: f64,
    pub current_dash_offset: f64,
    pub radius: f64,
    pub circumference: f64,
    pub reference_mark_percentage: Option<f64>,
}

/// The deferred start. Owned by exactly one [`RingAnimation`]; dropping it is canceling it.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingStart {
    fires_at: Duration,
    from: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Not mounted yet, or torn down.
    Detached,
    Scheduled(PendingStart),
    Running { started_at: Duration, from: f64 },
    Settled,
}

/// Fill animation for one ring instance.
///
/// Changing the input or tearing the ring down cancels any start that has not fired yet,
/// so a stale start can never move the ring toward an old target.
#[derive(Clone, Debug)]
pub struct RingAnimation {
    geometry: RingGeometry,
    reference_mark_percentage: Option<f64>,
    animate: bool,
    delay: Duration,
    duration: Duration,
    easing: CubicBezier,
    phase: Phase,
    offset: f64,
}

impl RingAnimation {
    pub fn new(config: &RingConfig, tiers: &ColorTiers, animate: bool) -> Self {
        let geometry = compute_geometry(config, tiers);
        let offset = geometry.empty_offset();
        Self {
            geometry,
            reference_mark_percentage: config.reference_mark_percentage,
            animate,
            delay: START_DELAY,
            duration: FILL_DURATION,
            easing: EASE_IN_OUT,
            phase: Phase::Detached,
            offset,
        }
    }

    /// Override the default delay and duration.
    pub fn with_timing(mut self, delay: Duration, duration: Duration) -> Self {
        self.delay = delay;
        self.duration = duration;
        self
    }

    pub fn geometry(&self) -> &RingGeometry { &self.geometry }

    /// First render: start empty and schedule the fill.
    pub fn mount(&mut self, now: Duration) {
        self.restart(now);
    }

    /// Explicit re-trigger (e.g. a sidebar opened): empty the ring and fill it again.
    pub fn retrigger(&mut self, now: Duration) {
        self.restart(now);
    }

    /// New input. Any pending start is dropped; the ring moves from wherever it is now
    /// to the new target after the usual delay.
    pub fn set_target(&mut self, config: &RingConfig, tiers: &ColorTiers, now: Duration) {
        let current = self.offset_at(now);
        self.geometry = compute_geometry(config, tiers);
        self.reference_mark_percentage = config.reference_mark_percentage;
        match self.phase {
            Phase::Detached => self.offset = self.geometry.empty_offset(),
            _ if !self.animate => self.settle(),
            _ => {
                self.offset = current;
                self.phase = Phase::Scheduled(PendingStart { fires_at: now + self.delay, from: current });
            }
        }
    }

    /// Owner is going away: cancel whatever is pending.
    pub fn teardown(&mut self) {
        self.phase = Phase::Detached;
    }

    /// Time at which the pending start fires, if one is scheduled.
    pub fn pending_start(&self) -> Option<Duration> {
        match self.phase {
            Phase::Scheduled(pending) => Some(pending.fires_at),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool { self.phase == Phase::Settled }

    /// Advance to `now` and return the dash offset to draw.
    pub fn offset_at(&mut self, now: Duration) -> f64 {
        if let Phase::Scheduled(pending) = self.phase {
            if now >= pending.fires_at {
                self.phase = Phase::Running { started_at: pending.fires_at, from: pending.from };
            }
        }

        if let Phase::Running { started_at, from } = self.phase {
            let elapsed = now.saturating_sub(started_at);
            if elapsed >= self.duration {
                self.settle();
            } else {
                let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                self.offset = from + (self.geometry.dash_offset - from) * self.easing.ease(t);
            }
        }
        self.offset
    }

    /// Current state without advancing time.
    pub fn state(&self) -> ChartState {
        ChartState {
            target_percentage: self.geometry.percentage,
            current_dash_offset: self.offset,
            radius: self.geometry.radius,
            circumference: self.geometry.circumference,
            reference_mark_percentage: self.reference_mark_percentage,
        }
    }

    fn restart(&mut self, now: Duration) {
        if !self.animate {
            self.settle();
            return;
        }
        let empty = self.geometry.empty_offset();
        self.offset = empty;
        self.phase = Phase::Scheduled(PendingStart { fires_at: now + self.delay, from: empty });
    }

    fn settle(&mut self) {
        self.offset = self.geometry.dash_offset;
        self.phase = Phase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn ring(percentage: f64, animate: bool) -> RingAnimation {
        RingAnimation::new(&RingConfig::new(180.0, 20.0, percentage), &ColorTiers::default(), animate)
    }

    #[test]
    fn easing_endpoints_and_symmetry() {
        assert_eq!(EASE_IN_OUT.ease(0.0), 0.0);
        assert_eq!(EASE_IN_OUT.ease(1.0), 1.0);
        assert!((EASE_IN_OUT.ease(0.5) - 0.5).abs() < 1e-6);
        let a = EASE_IN_OUT.ease(0.2);
        let b = EASE_IN_OUT.ease(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!(a < 0.2, "slow start");
    }

    #[test]
    fn easing_is_monotone() {
        let mut last = 0.0;
        for i in 1..=100 {
            let y = EASE_IN_OUT.ease(i as f64 / 100.0);
            assert!(y >= last - 1e-9);
            last = y;
        }
    }

    #[test]
    fn mount_starts_empty_then_fills() {
        let mut anim = ring(50.0, true);
        let c = anim.geometry().circumference;
        anim.mount(ms(0));
        assert_eq!(anim.pending_start(), Some(ms(50)));
        assert_eq!(anim.offset_at(ms(0)), c);
        assert_eq!(anim.offset_at(ms(49)), c);

        let mid = anim.offset_at(ms(50 + 600));
        assert!((mid - c * 0.75).abs() < EPS);

        let end = anim.offset_at(ms(50 + 1200));
        assert!((end - c / 2.0).abs() < EPS);
        assert!(anim.is_settled());
        assert_eq!(anim.pending_start(), None);
    }

    #[test]
    fn offsets_move_monotonically_toward_target() {
        let mut anim = ring(80.0, true);
        anim.mount(ms(0));
        let mut last = anim.offset_at(ms(0));
        for t in (0..=1400).step_by(25) {
            let now = anim.offset_at(ms(t));
            assert!(now <= last + EPS);
            last = now;
        }
        assert!((last - anim.geometry().dash_offset).abs() < EPS);
    }

    #[test]
    fn no_animation_snaps() {
        let mut anim = ring(30.0, false);
        anim.mount(ms(0));
        assert!(anim.is_settled());
        assert_eq!(anim.pending_start(), None);
        assert_eq!(anim.offset_at(ms(0)), anim.geometry().dash_offset);
    }

    #[test]
    fn teardown_cancels_pending_start() {
        let mut anim = ring(90.0, true);
        let c = anim.geometry().circumference;
        anim.mount(ms(0));
        anim.teardown();
        assert_eq!(anim.pending_start(), None);
        assert_eq!(anim.offset_at(ms(5000)), c);
    }

    #[test]
    fn input_change_cancels_stale_start() {
        let tiers = ColorTiers::default();
        let mut anim = ring(90.0, true);
        anim.mount(ms(0));
        anim.set_target(&RingConfig::new(180.0, 20.0, 10.0), &tiers, ms(30));

        // The first start at 50ms no longer exists.
        assert_eq!(anim.pending_start(), Some(ms(80)));
        let c = anim.geometry().circumference;
        assert_eq!(anim.offset_at(ms(60)), c);

        let end = anim.offset_at(ms(80 + 1200));
        assert!((end - c * 0.9).abs() < EPS);
        assert_eq!(anim.state().target_percentage, 10.0);
    }

    #[test]
    fn input_change_mid_flight_continues_from_current() {
        let tiers = ColorTiers::default();
        let mut anim = ring(100.0, true);
        anim.mount(ms(0));
        let midway = anim.offset_at(ms(650));
        anim.set_target(&RingConfig::new(180.0, 20.0, 0.0), &tiers, ms(650));
        assert_eq!(anim.offset_at(ms(660)), midway);
        let end = anim.offset_at(ms(700 + 1200));
        assert!((end - anim.geometry().circumference).abs() < EPS);
    }

    #[test]
    fn retrigger_empties_the_ring() {
        let mut anim = ring(60.0, true);
        anim.mount(ms(0));
        anim.offset_at(ms(2000));
        assert!(anim.is_settled());
        anim.retrigger(ms(2000));
        assert_eq!(anim.offset_at(ms(2010)), anim.geometry().circumference);
        assert_eq!(anim.pending_start(), Some(ms(2050)));
    }

    #[test]
    fn transition_plan() {
        let anim = ring(25.0, true);
        let plan = anim.geometry().fill_transition(true);
        assert_eq!(plan.from, anim.geometry().circumference);
        assert_eq!(plan.to, anim.geometry().dash_offset);
        assert_eq!(plan.offset_at(ms(10)), plan.from);
        assert!((plan.offset_at(ms(2000)) - plan.to).abs() < EPS);

        let snap = anim.geometry().fill_transition(false);
        assert_eq!(snap.from, snap.to);
        assert_eq!(snap.offset_at(Duration::ZERO), snap.to);
    }

    #[test]
    fn zero_duration_transition_jumps_to_target() {
        let anim = ring(40.0, true);
        let plan = FillTransition { duration: Duration::ZERO, ..anim.geometry().fill_transition(true) };
        assert_eq!(plan.offset_at(ms(10)), plan.from);
        assert_eq!(plan.offset_at(ms(50)), plan.to);
        assert_eq!(plan.offset_at(ms(51)), plan.to);
    }

    #[test]
    fn state_snapshot() {
        let config = RingConfig::new(180.0, 20.0, 42.0).with_reference_mark(30.0);
        let anim = RingAnimation::new(&config, &ColorTiers::default(), true);
        let state = anim.state();
        assert_eq!(state.target_percentage, 42.0);
        assert_eq!(state.radius, 80.0);
        assert_eq!(state.current_dash_offset, state.circumference);
        assert_eq!(state.reference_mark_percentage, Some(30.0));
    }
}
