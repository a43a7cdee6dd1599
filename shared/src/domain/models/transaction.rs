use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    Sent,
    Received,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "review.status.completed",
            TransactionStatus::Pending => "review.status.pending",
            TransactionStatus::Failed => "review.status.failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Card")]
    Card,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Card => "Card",
        }
    }
}

/// A row of the review list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub direction: TransactionDirection,
    /// Non-negative numeric string, e.g. "2500"
    pub amount: String,
    /// Recipient for sent rows, sender for received rows
    pub counterparty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: TransactionStatus,
    pub is_fraudulent: bool,
    pub is_recent: bool,
    pub note: Option<String>,
    pub method: PaymentMethod,
}

impl Transaction {
    /// Numeric amount; malformed strings count as zero in tallies
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn is_sent(&self) -> bool {
        self.direction == TransactionDirection::Sent
    }

    /// Only a fresh, completed outgoing payment can be reversed
    pub fn is_undoable(&self) -> bool {
        self.is_recent && self.is_sent() && self.status == TransactionStatus::Completed
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.counterparty.to_lowercase().contains(&term)
    }
}

/// Category selector of the review list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Sent,
    Received,
    Fraudulent,
}

impl TransactionFilter {
    pub const ALL: [TransactionFilter; 4] = [
        TransactionFilter::All,
        TransactionFilter::Sent,
        TransactionFilter::Received,
        TransactionFilter::Fraudulent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionFilter::All => "all",
            TransactionFilter::Sent => "sent",
            TransactionFilter::Received => "received",
            TransactionFilter::Fraudulent => "fraudulent",
        }
    }

    pub fn from_value(value: &str) -> TransactionFilter {
        TransactionFilter::ALL
            .iter()
            .copied()
            .find(|filter| filter.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TransactionFilter::All => "review.filter.all",
            TransactionFilter::Sent => "review.filter.sent",
            TransactionFilter::Received => "review.filter.received",
            TransactionFilter::Fraudulent => "review.filter.fraudulent",
        }
    }

    pub fn accepts(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Sent => transaction.direction == TransactionDirection::Sent,
            TransactionFilter::Received => transaction.direction == TransactionDirection::Received,
            TransactionFilter::Fraudulent => transaction.is_fraudulent,
        }
    }
}

/// Search box plus category selector
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionQuery {
    pub search: String,
    pub filter: TransactionFilter,
}

/// Tallies shown above the list, always computed over the full list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_sent: f64,
    pub total_received: f64,
    pub fraud_count: usize,
}
