use crate::session::Ticket;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
struct ArmedAdvance {
    ticket: Ticket,
    due: Instant,
}

/// Temporizador único de avance automático. Armarlo reemplaza al anterior.
#[derive(Debug, Default)]
pub struct AdvanceTimer {
    armed: Option<ArmedAdvance>,
}

impl AdvanceTimer {
    pub fn arm(&mut self, ticket: Ticket, delay: Duration, now: Instant) {
        self.armed = Some(ArmedAdvance {
            ticket,
            due: now + delay,
        });
    }

    pub fn cancel(&mut self, ticket: Ticket) {
        if self.armed.is_some_and(|a| a.ticket == ticket) {
            self.armed = None;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Devuelve el ticket si ha vencido; dispara una sola vez.
    pub fn fire(&mut self, now: Instant) -> Option<Ticket> {
        match self.armed {
            Some(a) if now >= a.due => {
                self.armed = None;
                Some(a.ticket)
            }
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed.map(|a| a.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn fires_once_when_due() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::default();
        timer.arm(Ticket::raw(1), DELAY, start);

        assert_eq!(timer.fire(start + Duration::from_millis(1499)), None);
        assert_eq!(timer.remaining(start), Some(DELAY));
        assert_eq!(timer.fire(start + DELAY), Some(Ticket::raw(1)));
        assert!(!timer.is_armed());
        assert_eq!(timer.fire(start + DELAY * 2), None);
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn rearming_replaces_previous_advance() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::default();
        timer.arm(Ticket::raw(1), DELAY, start);
        timer.arm(Ticket::raw(2), DELAY, start + Duration::from_millis(500));

        assert_eq!(timer.fire(start + DELAY), None);
        assert_eq!(timer.fire(start + DELAY * 2), Some(Ticket::raw(2)));
    }

    #[test]
    fn cancel_only_matches_armed_ticket() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::default();
        timer.arm(Ticket::raw(2), DELAY, start);

        timer.cancel(Ticket::raw(1));
        assert!(timer.is_armed());
        timer.cancel(Ticket::raw(2));
        assert!(!timer.is_armed());
        assert_eq!(timer.fire(start + DELAY), None);
    }
}
