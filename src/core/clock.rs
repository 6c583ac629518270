//! Fuente de tiempo inyectable para el avance automático.
//!
//! `FakeClock` permite a las pruebas avanzar el tiempo sin esperas reales.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Milisegundos transcurridos desde un origen fijo del reloj.
    fn now_millis(&self) -> u64;

    fn now(&self) -> Duration {
        Duration::from_millis(self.now_millis())
    }
}

/// Reloj monótono real
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Reloj controlable; los clones comparten el mismo contador.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.advance_ms(duration.as_millis() as u64);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    pub fn system() -> Self {
        Self::System(SystemClock::new())
    }

    pub fn fake(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Fake(c) => c.now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_clock_advances_and_sets() {
        let clock = FakeClock::new(1000);
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now_millis(), 1500);
        clock.advance_ms(250);
        assert_eq!(clock.now(), Duration::from_millis(1750));
        clock.set(10);
        assert_eq!(clock.now_millis(), 10);
    }

    #[test]
    fn fake_clock_clones_share_time() {
        let clock = FakeClock::default();
        let handle = ClockHandle::fake(clock.clone());
        clock.advance_ms(42);
        assert_eq!(handle.now_millis(), 42);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
    }
}
