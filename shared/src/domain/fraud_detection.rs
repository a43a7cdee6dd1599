//! Static fraud heuristics for pending transfers.

use std::collections::HashSet;

use super::models::transfer::{FraudAlertType, TransferForm, TransferMethod};

/// Classifies a validated transfer; `None` means no alert
pub trait FraudClassifier {
    fn classify(&self, form: &TransferForm) -> Option<FraudAlertType>;
}

/// Threshold plus blocklist.
///
/// A flagged recipient wins over a large amount: a blocklisted address is
/// reported whatever the amount.
#[derive(Debug, Clone)]
pub struct StaticFraudClassifier {
    large_amount_threshold: f64,
    blocked_upi_ids: HashSet<String>,
    blocked_accounts: HashSet<String>,
    /// Substring that marks a UPI handle as suspicious
    suspicious_upi_marker: String,
}

impl StaticFraudClassifier {
    pub fn new(large_amount_threshold: f64) -> Self {
        Self {
            large_amount_threshold,
            blocked_upi_ids: ["scammer@paytm", "lottery.winner@ybl", "refund.desk@okicici"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            blocked_accounts: ["9999888877776666", "1111222233334444", "000011112222"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            suspicious_upi_marker: "fraud".to_string(),
        }
    }

    pub fn with_blocklist(
        mut self,
        upi_ids: impl IntoIterator<Item = String>,
        accounts: impl IntoIterator<Item = String>,
    ) -> Self {
        self.blocked_upi_ids.extend(upi_ids.into_iter().map(|id| id.to_lowercase()));
        self.blocked_accounts.extend(accounts);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.large_amount_threshold
    }

    fn is_flagged(&self, form: &TransferForm) -> bool {
        match form.method {
            TransferMethod::Upi => {
                let upi_id = form.upi_id.trim().to_lowercase();
                self.blocked_upi_ids.contains(&upi_id) || upi_id.contains(&self.suspicious_upi_marker)
            }
            TransferMethod::Account => self.blocked_accounts.contains(form.account_number.trim()),
        }
    }
}

impl Default for StaticFraudClassifier {
    fn default() -> Self {
        Self::new(50_000.0)
    }
}

impl FraudClassifier for StaticFraudClassifier {
    fn classify(&self, form: &TransferForm) -> Option<FraudAlertType> {
        if self.is_flagged(form) {
            log::warn!("Transfer to flagged recipient {}", form.recipient_address());
            return Some(FraudAlertType::FlaggedRecipient);
        }

        match form.parsed_amount() {
            Some(amount) if amount > self.large_amount_threshold => {
                log::info!("Large transfer of {} exceeds {}", amount, self.large_amount_threshold);
                Some(FraudAlertType::LargeAmount)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upi_form(upi_id: &str, amount: &str) -> TransferForm {
        TransferForm {
            recipient_name: "Test User".to_string(),
            method: TransferMethod::Upi,
            upi_id: upi_id.to_string(),
            amount: amount.to_string(),
            ..TransferForm::default()
        }
    }

    fn account_form(account: &str, amount: &str) -> TransferForm {
        TransferForm {
            recipient_name: "Test User".to_string(),
            method: TransferMethod::Account,
            account_number: account.to_string(),
            ifsc_code: "SBIN0001234".to_string(),
            amount: amount.to_string(),
            ..TransferForm::default()
        }
    }

    #[test]
    fn test_large_amount() {
        let classifier = StaticFraudClassifier::default();
        assert_eq!(
            classifier.classify(&upi_form("test@upi", "60000")),
            Some(FraudAlertType::LargeAmount)
        );
        assert_eq!(
            classifier.classify(&upi_form("test@upi", "50000.01")),
            Some(FraudAlertType::LargeAmount)
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let classifier = StaticFraudClassifier::default();
        assert_eq!(classifier.classify(&upi_form("test@upi", "50000")), None);
        assert_eq!(classifier.classify(&upi_form("test@upi", "1")), None);
    }

    #[test]
    fn test_blocklisted_recipient_regardless_of_amount() {
        let classifier = StaticFraudClassifier::default();
        for amount in ["1", "50000", "75000", "1000000"] {
            assert_eq!(
                classifier.classify(&upi_form("scammer@paytm", amount)),
                Some(FraudAlertType::FlaggedRecipient)
            );
            assert_eq!(
                classifier.classify(&account_form("9999888877776666", amount)),
                Some(FraudAlertType::FlaggedRecipient)
            );
        }
    }

    #[test]
    fn test_suspicious_marker_and_case() {
        let classifier = StaticFraudClassifier::default();
        assert_eq!(
            classifier.classify(&upi_form("quick.fraud@upi", "100")),
            Some(FraudAlertType::FlaggedRecipient)
        );
        assert_eq!(
            classifier.classify(&upi_form("Scammer@Paytm", "100")),
            Some(FraudAlertType::FlaggedRecipient)
        );
    }

    #[test]
    fn test_only_active_method_is_checked() {
        let classifier = StaticFraudClassifier::default();
        let mut form = upi_form("friend@upi", "100");
        form.account_number = "9999888877776666".to_string();
        assert_eq!(classifier.classify(&form), None);
    }

    #[test]
    fn test_custom_blocklist() {
        let classifier = StaticFraudClassifier::new(10_000.0)
            .with_blocklist(vec!["Mule@UPI".to_string()], vec!["123456789".to_string()]);
        assert_eq!(classifier.threshold(), 10_000.0);
        assert_eq!(
            classifier.classify(&upi_form("mule@upi", "10")),
            Some(FraudAlertType::FlaggedRecipient)
        );
        assert_eq!(
            classifier.classify(&account_form("123456789", "10")),
            Some(FraudAlertType::FlaggedRecipient)
        );
        assert_eq!(
            classifier.classify(&upi_form("ok@upi", "10001")),
            Some(FraudAlertType::LargeAmount)
        );
    }
}
