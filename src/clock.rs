use std::time::{Duration, Instant};

/// Time between animation ticks (~60 Hz)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
/// Radians the outer orbit advances per tick
pub const FAST_STEP: f64 = 0.0006;
/// Radians the inner orbit advances per tick
pub const SLOW_STEP: f64 = 0.001;

/// Two phase angles that only ever grow
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    pub fast: f64,
    pub slow: f64,
    pub ticks: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.fast += FAST_STEP;
        self.slow += SLOW_STEP;
        self.ticks += 1;
    }
}

/// A cancellable fixed-delay schedule.
///
/// After each tick the next one is due one interval later, so a slow frame
/// delays the animation instead of triggering a burst of catch-up ticks.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            next: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.interval);
            log::debug!("ticker started");
        }
    }

    pub fn stop(&mut self) {
        if self.next.take().is_some() {
            log::debug!("ticker stopped");
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// How long the host may block waiting for input before the next tick is
    /// due. `None` while stopped.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    /// Returns true and schedules the following tick if one is due.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_accumulate_linearly() {
        let mut clock = AnimationClock::new();
        for _ in 0..10_000 {
            clock.tick();
        }
        assert_eq!(clock.ticks, 10_000);
        assert!((clock.fast - 10_000.0 * FAST_STEP).abs() < 1e-9);
        assert!((clock.slow - 10_000.0 * SLOW_STEP).abs() < 1e-9);
    }

    #[test]
    fn angles_are_not_wrapped() {
        use std::f64::consts::TAU;

        let fast = TAU - FAST_STEP / 2.0;
        let slow = TAU - SLOW_STEP / 2.0;
        let mut clock = AnimationClock {
            fast,
            slow,
            ticks: 0,
        };
        clock.tick();
        assert!(clock.fast > TAU);
        assert!(clock.slow > TAU);
        assert_eq!(clock.fast, fast + FAST_STEP);
        assert_eq!(clock.slow, slow + SLOW_STEP);
    }

    #[test]
    fn ticker_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(TICK_INTERVAL);
        assert!(!ticker.fire(t0 + Duration::from_secs(1)));

        ticker.start(t0);
        assert!(!ticker.fire(t0));
        assert_eq!(ticker.timeout(t0), Some(TICK_INTERVAL));

        let t1 = t0 + TICK_INTERVAL;
        assert!(ticker.fire(t1));
        assert!(!ticker.fire(t1));
        assert!(ticker.fire(t1 + TICK_INTERVAL));
    }

    #[test]
    fn stopped_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(TICK_INTERVAL);
        ticker.start(t0);
        ticker.stop();
        assert!(!ticker.is_running());
        assert_eq!(ticker.timeout(t0), None);
        assert!(!ticker.fire(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn restarting_a_running_ticker_keeps_its_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(TICK_INTERVAL);
        ticker.start(t0);
        ticker.start(t0 + Duration::from_millis(10));
        assert!(ticker.fire(t0 + TICK_INTERVAL));
    }
}
