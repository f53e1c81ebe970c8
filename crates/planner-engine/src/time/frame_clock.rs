use std::time::Instant;

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,

    /// Seconds since the clock started. Animated materials key off this.
    pub elapsed: f32,
}

/// Produces one [`FrameTime`] per presented frame.
///
/// `dt` is the full wall-clock gap, so held motion after a stall covers the
/// whole stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn dt_covers_a_long_stall() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_secs(3);
        let ft = clock.tick_at(later);
        assert!((ft.dt - 3.0).abs() < 1e-4);
        assert!((ft.elapsed - 3.0).abs() < 1e-4);
    }

    #[test]
    fn dt_is_measured_from_previous_tick() {
        let mut clock = FrameClock::new();
        let base = clock.start;
        clock.tick_at(base + Duration::from_millis(500));
        let ft = clock.tick_at(base + Duration::from_millis(750));
        assert!((ft.dt - 0.25).abs() < 1e-4);
        assert!((ft.elapsed - 0.75).abs() < 1e-4);
    }

    #[test]
    fn clock_going_backwards_gives_zero_dt() {
        let mut clock = FrameClock::new();
        let base = clock.start;
        clock.tick_at(base + Duration::from_secs(1));
        let ft = clock.tick_at(base);
        assert_eq!(ft.dt, 0.0);
    }
}
