//! Mock bank verification.
//!
//! The directory is a fixed table keyed by IFSC code. A lookup succeeds only
//! when the IFSC is known and the entered account number equals the one on
//! file; anything else is a failure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::bank_account::BankAccount;

/// Why a verification did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationFailure {
    UnknownIfsc,
    AccountMismatch,
}

impl VerificationFailure {
    /// Both failures show the same message so the lookup table is not probed
    pub fn message_key(&self) -> &'static str {
        "connectBank.verificationFailed"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    Verified(BankAccount),
    Failed(VerificationFailure),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified(_))
    }

    pub fn account(&self) -> Option<&BankAccount> {
        match self {
            VerificationOutcome::Verified(account) => Some(account),
            VerificationOutcome::Failed(_) => None,
        }
    }
}

/// Anything that can confirm an (IFSC, account number) pair
pub trait VerificationProvider {
    fn verify(&self, ifsc_code: &str, account_number: &str) -> VerificationOutcome;
}

/// Hard-coded demo directory
#[derive(Debug, Clone)]
pub struct MockBankDirectory {
    accounts: HashMap<String, BankAccount>,
}

impl MockBankDirectory {
    pub fn new() -> Self {
        let entries = [
            (
                "SBIN0001234",
                BankAccount {
                    bank_name: "State Bank of India".to_string(),
                    branch_name: "Main Branch, Mumbai".to_string(),
                    account_holder_name: "John Doe".to_string(),
                    account_number: "1234567890123456".to_string(),
                    account_type: "Savings Account".to_string(),
                    balance: "₹1,25,000".to_string(),
                },
            ),
            (
                "HDFC0000123",
                BankAccount {
                    bank_name: "HDFC Bank".to_string(),
                    branch_name: "Bandra West, Mumbai".to_string(),
                    account_holder_name: "Jane Smith".to_string(),
                    account_number: "9876543210987654".to_string(),
                    account_type: "Current Account".to_string(),
                    balance: "₹2,50,000".to_string(),
                },
            ),
            (
                "ICIC0001234",
                BankAccount {
                    bank_name: "ICICI Bank".to_string(),
                    branch_name: "Andheri East, Mumbai".to_string(),
                    account_holder_name: "Mike Johnson".to_string(),
                    account_number: "5555666677778888".to_string(),
                    account_type: "Savings Account".to_string(),
                    balance: "₹75,000".to_string(),
                },
            ),
        ];

        Self::with_accounts(
            entries
                .into_iter()
                .map(|(ifsc, account)| (ifsc.to_string(), account)),
        )
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = (String, BankAccount)>) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }

    /// IFSC codes offered as hints on the details step
    pub fn demo_ifsc_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for MockBankDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationProvider for MockBankDirectory {
    fn verify(&self, ifsc_code: &str, account_number: &str) -> VerificationOutcome {
        match self.accounts.get(ifsc_code) {
            None => {
                log::info!("Bank verification failed: unknown IFSC {}", ifsc_code);
                VerificationOutcome::Failed(VerificationFailure::UnknownIfsc)
            }
            Some(account) if account.account_number != account_number => {
                log::info!("Bank verification failed: account number mismatch for {}", ifsc_code);
                VerificationOutcome::Failed(VerificationFailure::AccountMismatch)
            }
            Some(account) => {
                log::info!("Bank verification succeeded for {}", ifsc_code);
                VerificationOutcome::Verified(account.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_known_pair() {
        let directory = MockBankDirectory::new();
        let outcome = directory.verify("SBIN0001234", "1234567890123456");

        let account = outcome.account().expect("should verify");
        assert_eq!(account.bank_name, "State Bank of India");
        assert_eq!(account.balance, "₹1,25,000");
        assert_eq!(account.account_holder_name, "John Doe");
    }

    #[test]
    fn test_verify_every_seeded_account() {
        let directory = MockBankDirectory::new();
        for (ifsc, number) in [
            ("SBIN0001234", "1234567890123456"),
            ("HDFC0000123", "9876543210987654"),
            ("ICIC0001234", "5555666677778888"),
        ] {
            assert!(directory.verify(ifsc, number).is_verified(), "{} should verify", ifsc);
        }
    }

    #[test]
    fn test_unknown_ifsc_never_verifies() {
        let directory = MockBankDirectory::new();
        for ifsc in ["", "SBIN0009999", "sbin0001234", "AXIS0000001", "HDFC0000124"] {
            assert_eq!(
                directory.verify(ifsc, "1234567890123456"),
                VerificationOutcome::Failed(VerificationFailure::UnknownIfsc),
                "{} must not verify",
                ifsc
            );
        }
    }

    #[test]
    fn test_account_mismatch() {
        let directory = MockBankDirectory::new();
        let outcome = directory.verify("HDFC0000123", "1234567890123456");
        assert_eq!(outcome, VerificationOutcome::Failed(VerificationFailure::AccountMismatch));
        assert!(outcome.account().is_none());
    }

    #[test]
    fn test_demo_codes_are_sorted() {
        let directory = MockBankDirectory::new();
        assert_eq!(
            directory.demo_ifsc_codes(),
            vec!["HDFC0000123", "ICIC0001234", "SBIN0001234"]
        );
    }
}
