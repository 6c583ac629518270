//! Temporizador repetitivo cancelable para el avance automático.
//!
//! No hay hilos ni callbacks: el dueño consulta [`AutoAdvance::due_firings`]
//! con la hora actual y aplica los disparos vencidos. Cada arranque emite un
//! [`TimerToken`] nuevo; un disparo encolado con un token viejo se descarta.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct Running {
    token: TimerToken,
    interval_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Default)]
pub struct AutoAdvance {
    generation: u64,
    running: Option<Running>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranca (o reemplaza) el temporizador. `interval` debe ser > 0.
    pub fn start(&mut self, now_ms: u64, interval: Duration) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        let interval_ms = (interval.as_millis() as u64).max(1);
        self.running = Some(Running {
            token,
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
        });
        token
    }

    pub fn stop(&mut self) {
        self.running = None;
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.running.map(|r| Duration::from_millis(r.interval_ms))
    }

    /// `true` si el token pertenece al temporizador activo.
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.running.is_some_and(|r| r.token == token)
    }

    /// Número de disparos vencidos hasta `now_ms`; reprograma el siguiente.
    pub fn due_firings(&mut self, now_ms: u64) -> u64 {
        let Some(running) = self.running.as_mut() else {
            return 0;
        };
        if now_ms < running.next_due_ms {
            return 0;
        }
        let fired = (now_ms - running.next_due_ms) / running.interval_ms + 1;
        running.next_due_ms += fired * running.interval_ms;
        fired
    }

    /// Reprograma el siguiente disparo un intervalo completo después de `now_ms`.
    pub fn reschedule(&mut self, now_ms: u64) {
        if let Some(running) = self.running.as_mut() {
            running.next_due_ms = now_ms.saturating_add(running.interval_ms);
        }
    }

    pub fn time_until_next(&self, now_ms: u64) -> Option<Duration> {
        self.running
            .map(|r| Duration::from_millis(r.next_due_ms.saturating_sub(now_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_before_interval() {
        let mut timer = AutoAdvance::new();
        timer.start(0, Duration::from_millis(1000));
        assert_eq!(timer.due_firings(999), 0);
        assert_eq!(timer.due_firings(1000), 1);
        assert_eq!(timer.due_firings(1500), 0);
        assert_eq!(timer.due_firings(2000), 1);
    }

    #[test]
    fn catches_up_on_missed_firings() {
        let mut timer = AutoAdvance::new();
        timer.start(100, Duration::from_millis(100));
        assert_eq!(timer.due_firings(450), 3);
        assert_eq!(timer.time_until_next(450), Some(Duration::from_millis(50)));
    }

    #[test]
    fn stop_is_idempotent_and_silences_firings() {
        let mut timer = AutoAdvance::new();
        timer.stop();
        timer.start(0, Duration::from_millis(10));
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.due_firings(10_000), 0);
        assert_eq!(timer.time_until_next(0), None);
    }

    #[test]
    fn restart_invalidates_previous_token() {
        let mut timer = AutoAdvance::new();
        let first = timer.start(0, Duration::from_millis(10));
        let second = timer.start(0, Duration::from_millis(20));
        assert_ne!(first, second);
        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
        assert_eq!(timer.interval(), Some(Duration::from_millis(20)));
        timer.stop();
        assert!(!timer.accepts(second));
    }

    #[test]
    fn reschedule_pushes_deadline() {
        let mut timer = AutoAdvance::new();
        timer.start(0, Duration::from_millis(100));
        timer.reschedule(90);
        assert_eq!(timer.due_firings(100), 0);
        assert_eq!(timer.due_firings(190), 1);
    }
}
