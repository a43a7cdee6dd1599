//! In-memory transaction list behind the review view.
//!
//! The list is seeded with fixed sample rows and only ever changes in two
//! ways: an undo marks a row `failed`, and the recent-flag timer clears
//! every "recent" badge.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::domain::localization::Localizer;
use crate::domain::models::transaction::{
    PaymentMethod, Transaction, TransactionDirection, TransactionQuery, TransactionStatus, TransactionSummary,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("transaction {0} not found")]
    NotFound(String),
    #[error("transaction {0} cannot be undone")]
    NotUndoable(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// The seven sample rows the review view starts with
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            row("1", TransactionDirection::Sent, "75000", "Unknown Account", (2024, 1, 15), (14, 30), TransactionStatus::Completed, PaymentMethod::Upi)
                .fraudulent()
                .recent()
                .with_note("Large transfer"),
            row("2", TransactionDirection::Received, "2500", "John Doe", (2024, 1, 15), (12, 15), TransactionStatus::Completed, PaymentMethod::Upi),
            row("3", TransactionDirection::Sent, "1200", "Sarah Wilson", (2024, 1, 14), (18, 45), TransactionStatus::Completed, PaymentMethod::BankTransfer),
            row("4", TransactionDirection::Sent, "5000", "Mike Johnson", (2024, 1, 14), (16, 20), TransactionStatus::Completed, PaymentMethod::Upi),
            row("5", TransactionDirection::Received, "3200", "Emma Davis", (2024, 1, 13), (10, 30), TransactionStatus::Completed, PaymentMethod::BankTransfer),
            row("6", TransactionDirection::Sent, "800", "Local Store", (2024, 1, 13), (9, 15), TransactionStatus::Failed, PaymentMethod::Upi),
            row("7", TransactionDirection::Sent, "60000", "Suspicious Account", (2024, 1, 12), (22, 45), TransactionStatus::Completed, PaymentMethod::BankTransfer)
                .fraudulent(),
        ])
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Rows matching both the search term and the category, in list order
    pub fn filtered(&self, query: &TransactionQuery) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.matches_search(&query.search) && query.filter.accepts(tx))
            .collect()
    }

    /// Totals over the full list. Only completed rows count toward the sums;
    /// every flagged row counts toward the fraud tally.
    pub fn summary(&self) -> TransactionSummary {
        self.transactions
            .iter()
            .fold(TransactionSummary::default(), |mut summary, tx| {
                if tx.status == TransactionStatus::Completed {
                    match tx.direction {
                        TransactionDirection::Sent => summary.total_sent += tx.amount_value(),
                        TransactionDirection::Received => summary.total_received += tx.amount_value(),
                    }
                }
                if tx.is_fraudulent {
                    summary.fraud_count += 1;
                }
                summary
            })
    }

    /// Reverse a recent outgoing payment by marking it failed
    pub fn undo(&mut self, id: &str) -> Result<&Transaction, LedgerError> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        if !tx.is_undoable() {
            return Err(LedgerError::NotUndoable(id.to_string()));
        }
        tx.status = TransactionStatus::Failed;
        log::info!("Reversed transaction {} to {}", tx.id, tx.counterparty);
        Ok(tx)
    }

    /// Drop every "recent" badge; returns how many were cleared
    pub fn clear_recent_flags(&mut self) -> usize {
        let mut cleared = 0;
        for tx in self.transactions.iter_mut().filter(|tx| tx.is_recent) {
            tx.is_recent = false;
            cleared += 1;
        }
        cleared
    }

    /// Sentence for the per-row "read aloud" action
    pub fn read_aloud_text(tx: &Transaction, localizer: &Localizer) -> String {
        let key = match tx.direction {
            TransactionDirection::Sent => "review.readAloudSent",
            TransactionDirection::Received => "review.readAloudReceived",
        };
        let date = tx.date.format("%Y-%m-%d").to_string();
        let status = localizer.t(tx.status.label_key());
        localizer.t_with(
            key,
            &[
                ("amount", tx.amount.as_str()),
                ("name", tx.counterparty.as_str()),
                ("date", date.as_str()),
                ("status", status.as_str()),
            ],
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    id: &str,
    direction: TransactionDirection,
    amount: &str,
    counterparty: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    status: TransactionStatus,
    method: PaymentMethod,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        direction,
        amount: amount.to_string(),
        counterparty: counterparty.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        status,
        is_fraudulent: false,
        is_recent: false,
        note: None,
        method,
    }
}

trait SampleRow {
    fn fraudulent(self) -> Self;
    fn recent(self) -> Self;
    fn with_note(self, note: &str) -> Self;
}

impl SampleRow for Transaction {
    fn fraudulent(mut self) -> Self {
        self.is_fraudulent = true;
        self
    }

    fn recent(mut self) -> Self {
        self.is_recent = true;
        self
    }

    fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::TransactionFilter;
    use crate::Language;

    fn query(search: &str, filter: TransactionFilter) -> TransactionQuery {
        TransactionQuery {
            search: search.to_string(),
            filter,
        }
    }

    fn ids(rows: Vec<&Transaction>) -> Vec<&str> {
        rows.into_iter().map(|tx| tx.id.as_str()).collect()
    }

    #[test]
    fn test_sample_summary() {
        let ledger = TransactionLedger::with_sample_data();
        let summary = ledger.summary();
        // 75000 + 1200 + 5000 + 60000; the failed 800 is excluded
        assert_eq!(summary.total_sent, 141_200.0);
        assert_eq!(summary.total_received, 5_700.0);
        assert_eq!(summary.fraud_count, 2);
    }

    #[test]
    fn test_filter_by_category() {
        let ledger = TransactionLedger::with_sample_data();
        assert_eq!(ledger.filtered(&TransactionQuery::default()).len(), 7);
        assert_eq!(ids(ledger.filtered(&query("", TransactionFilter::Received))), vec!["2", "5"]);
        assert_eq!(ids(ledger.filtered(&query("", TransactionFilter::Fraudulent))), vec!["1", "7"]);
        assert_eq!(ledger.filtered(&query("", TransactionFilter::Sent)).len(), 5);
    }

    #[test]
    fn test_search_intersects_with_category() {
        let ledger = TransactionLedger::with_sample_data();
        assert_eq!(ids(ledger.filtered(&query("ACCOUNT", TransactionFilter::All))), vec!["1", "7"]);
        assert_eq!(ids(ledger.filtered(&query("john", TransactionFilter::All))), vec!["2", "4"]);
        assert_eq!(ids(ledger.filtered(&query("john", TransactionFilter::Sent))), vec!["4"]);
        assert!(ledger.filtered(&query("nobody", TransactionFilter::All)).is_empty());
    }

    #[test]
    fn test_filtering_does_not_change_summary() {
        let ledger = TransactionLedger::with_sample_data();
        let before = ledger.summary();
        let _ = ledger.filtered(&query("emma", TransactionFilter::Received));
        assert_eq!(ledger.summary(), before);
    }

    #[test]
    fn test_undo_marks_failed_and_updates_totals() {
        let mut ledger = TransactionLedger::with_sample_data();
        let tx = ledger.undo("1").unwrap();
        assert_eq!(tx.status, TransactionStatus::Failed);
        assert_eq!(ledger.summary().total_sent, 66_200.0);
        assert_eq!(ledger.undo("1"), Err(LedgerError::NotUndoable("1".to_string())));
    }

    #[test]
    fn test_undo_rejects_ineligible_rows() {
        let mut ledger = TransactionLedger::with_sample_data();
        // not recent
        assert_eq!(ledger.undo("3"), Err(LedgerError::NotUndoable("3".to_string())));
        assert_eq!(ledger.undo("99"), Err(LedgerError::NotFound("99".to_string())));
        assert_eq!(ledger.get("3").map(|tx| tx.status), Some(TransactionStatus::Completed));
    }

    #[test]
    fn test_clear_recent_flags() {
        let mut ledger = TransactionLedger::with_sample_data();
        assert_eq!(ledger.clear_recent_flags(), 1);
        assert!(ledger.all().iter().all(|tx| !tx.is_recent));
        assert_eq!(ledger.clear_recent_flags(), 0);
        assert!(ledger.undo("1").is_err());
    }

    #[test]
    fn test_read_aloud_text() {
        let ledger = TransactionLedger::with_sample_data();
        let english = Localizer::new(Language::English);

        let sent = ledger.get("6").unwrap();
        assert_eq!(
            TransactionLedger::read_aloud_text(sent, &english),
            "You sent 800 rupees to Local Store on 2024-01-13. Status: failed."
        );

        let received = ledger.get("2").unwrap();
        assert_eq!(
            TransactionLedger::read_aloud_text(received, &english),
            "You received 2500 rupees from John Doe on 2024-01-15. Status: completed."
        );

        let tamil = TransactionLedger::read_aloud_text(received, &Localizer::new(Language::Tamil));
        assert!(tamil.contains("John Doe"));
        assert!(tamil.contains("2500"));
    }
}
