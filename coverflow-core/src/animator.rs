//! Simple time-based tween animator for settling toward a target position

use std::time::{Duration, Instant};

use crate::config::EasingKind;

#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingKind,
}

impl SettleAnimator {
    pub fn start(
        current: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: EasingKind,
    ) -> Self {
        Self {
            active: true,
            start: current,
            target,
            started_at: now,
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the destination without restarting the clock.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Position at `now` without advancing state.
    pub fn sample(&self, now: Instant) -> f32 {
        if !self.active {
            return self.target;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.target;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        self.start + (self.target - self.start) * te
    }

    /// Returns Some(next_position) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let position = self.sample(now);
        if now.saturating_duration_since(self.started_at) >= self.duration {
            self.active = false;
        }
        Some(position)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_reaches_target_then_stops() {
        let t0 = Instant::now();
        let mut anim = SettleAnimator::start(
            10.0,
            0.0,
            t0,
            Duration::from_millis(100),
            EasingKind::Linear,
        );
        let mid = anim.tick(t0 + Duration::from_millis(50)).expect("active");
        assert!((mid - 5.0).abs() < 1e-4);
        assert_eq!(anim.tick(t0 + Duration::from_millis(100)), Some(0.0));
        assert!(!anim.is_active());
        assert_eq!(anim.tick(t0 + Duration::from_millis(150)), None);
    }

    #[test]
    fn retarget_keeps_clock() {
        let t0 = Instant::now();
        let mut anim = SettleAnimator::start(
            0.0,
            10.0,
            t0,
            Duration::from_millis(100),
            EasingKind::Linear,
        );
        anim.retarget(20.0);
        let mid = anim.sample(t0 + Duration::from_millis(50));
        assert!((mid - 10.0).abs() < 1e-4);
    }

    #[test]
    fn cancelled_animator_reports_target() {
        let t0 = Instant::now();
        let mut anim = SettleAnimator::start(
            4.0,
            12.0,
            t0,
            Duration::from_millis(100),
            EasingKind::EaseOut,
        );
        anim.cancel();
        assert_eq!(anim.tick(t0), None);
        assert_eq!(anim.sample(t0), 12.0);
    }
}
