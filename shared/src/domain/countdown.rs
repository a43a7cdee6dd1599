//! Whole-second countdown driven by an external one-second tick.

/// What happens to the owning dialog when the count reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Close the dialog as if dismissed
    AutoClose,
    /// Stop counting and leave the dialog open
    HoldOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Still counting; seconds remaining
    Tick(u32),
    Expired(ExpiryPolicy),
    /// Ticks after expiry or while stopped are ignored
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    running: bool,
    policy: ExpiryPolicy,
}

impl Countdown {
    pub fn new(duration_secs: u32, policy: ExpiryPolicy) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
            policy,
        }
    }

    /// (Re)start from the full duration
    pub fn start(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.running = self.duration_secs > 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> CountdownEvent {
        if !self.running {
            return CountdownEvent::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            CountdownEvent::Expired(self.policy)
        } else {
            CountdownEvent::Tick(self.remaining_secs)
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_once_per_tick() {
        let mut countdown = Countdown::new(5, ExpiryPolicy::AutoClose);
        countdown.start();
        assert_eq!(countdown.remaining_secs(), 5);

        let events: Vec<CountdownEvent> = (0..5).map(|_| countdown.tick()).collect();
        assert_eq!(
            events,
            vec![
                CountdownEvent::Tick(4),
                CountdownEvent::Tick(3),
                CountdownEvent::Tick(2),
                CountdownEvent::Tick(1),
                CountdownEvent::Expired(ExpiryPolicy::AutoClose),
            ]
        );
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), CountdownEvent::Idle);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn test_hold_open_policy_is_reported() {
        let mut countdown = Countdown::new(1, ExpiryPolicy::HoldOpen);
        countdown.start();
        assert_eq!(countdown.tick(), CountdownEvent::Expired(ExpiryPolicy::HoldOpen));
    }

    #[test]
    fn test_not_started_or_stopped_is_idle() {
        let mut countdown = Countdown::new(3, ExpiryPolicy::AutoClose);
        assert_eq!(countdown.tick(), CountdownEvent::Idle);

        countdown.start();
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.tick(), CountdownEvent::Idle);
        assert_eq!(countdown.remaining_secs(), 2);
    }

    #[test]
    fn test_restart_resets_remaining() {
        let mut countdown = Countdown::new(3, ExpiryPolicy::AutoClose);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.start();
        assert_eq!(countdown.remaining_secs(), 3);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_zero_duration_never_runs() {
        let mut countdown = Countdown::new(0, ExpiryPolicy::AutoClose);
        countdown.start();
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), CountdownEvent::Idle);
    }
}
