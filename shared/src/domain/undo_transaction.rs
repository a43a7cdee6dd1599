//! Time-limited offer to reverse a just-completed transfer.

use crate::domain::countdown::{Countdown, CountdownEvent, ExpiryPolicy};
use crate::SafePayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEvent {
    Counting(u32),
    /// Offer expired; the transaction was kept
    AutoClosed,
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UndoTransactionFlow {
    transaction_id: Option<String>,
    countdown: Countdown,
}

impl UndoTransactionFlow {
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            transaction_id: None,
            countdown: Countdown::new(countdown_secs, ExpiryPolicy::AutoClose),
        }
    }

    pub fn from_config(config: &SafePayConfig) -> Self {
        Self::new(config.undo_countdown_secs)
    }

    pub fn open(&mut self, transaction_id: &str) {
        self.transaction_id = Some(transaction_id.to_string());
        self.countdown.start();
    }

    pub fn is_open(&self) -> bool {
        self.transaction_id.is_some()
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn tick(&mut self) -> UndoEvent {
        if !self.is_open() {
            return UndoEvent::Idle;
        }
        match self.countdown.tick() {
            CountdownEvent::Tick(remaining) => UndoEvent::Counting(remaining),
            CountdownEvent::Expired(_) => {
                self.close();
                UndoEvent::AutoClosed
            }
            CountdownEvent::Idle => UndoEvent::Idle,
        }
    }

    /// "Keep Transaction": close with no state change
    pub fn keep(&mut self) {
        self.close();
    }

    /// "Undo Now": returns the id of the transaction to reverse
    pub fn undo_now(&mut self) -> Option<String> {
        let id = self.transaction_id.clone();
        self.close();
        id
    }

    fn close(&mut self) {
        self.transaction_id = None;
        self.countdown.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_closes_after_five_seconds() {
        let mut flow = UndoTransactionFlow::from_config(&SafePayConfig::default());
        flow.open("1");
        assert_eq!(flow.remaining_secs(), 5);

        let events: Vec<UndoEvent> = (0..5).map(|_| flow.tick()).collect();
        assert_eq!(
            events,
            vec![
                UndoEvent::Counting(4),
                UndoEvent::Counting(3),
                UndoEvent::Counting(2),
                UndoEvent::Counting(1),
                UndoEvent::AutoClosed,
            ]
        );
        assert!(!flow.is_open());
        // nothing left to undo once the offer lapsed
        assert_eq!(flow.undo_now(), None);
    }

    #[test]
    fn test_keep_closes_without_undo() {
        let mut flow = UndoTransactionFlow::new(5);
        flow.open("3");
        flow.keep();
        assert!(!flow.is_open());
        assert_eq!(flow.tick(), UndoEvent::Idle);
    }

    #[test]
    fn test_undo_now_returns_id() {
        let mut flow = UndoTransactionFlow::new(5);
        flow.open("1");
        flow.tick();
        assert_eq!(flow.transaction_id(), Some("1"));
        assert_eq!(flow.undo_now(), Some("1".to_string()));
        assert!(!flow.is_open());
    }
}
