use serde::{Deserialize, Serialize};

/// A bank account profile as returned by the verification lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    pub branch_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub account_type: String,
    /// Pre-formatted balance, e.g. "₹1,25,000"
    pub balance: String,
}

/// Input collected by the first step of the connect-bank wizard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BankLinkForm {
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub confirm_account_number: String,
    pub ifsc_code: String,
}

impl BankLinkForm {
    /// True when every required field has content.
    ///
    /// The confirmation field is checked separately so the user gets the
    /// "do not match" message instead of a generic one.
    pub fn has_required_fields(&self) -> bool {
        [
            &self.bank_name,
            &self.account_holder_name,
            &self.account_number,
            &self.ifsc_code,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    pub fn account_numbers_match(&self) -> bool {
        self.account_number == self.confirm_account_number
    }

    /// Account number reduced to its last four digits, e.g. "****3456"
    pub fn masked_account_number(&self) -> String {
        let digits: Vec<char> = self.account_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }
}
