use serde::{Deserialize, Serialize};

/// How the recipient of a transfer is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransferMethod {
    #[default]
    Upi,
    Account,
}

impl TransferMethod {
    /// Value used by the method `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMethod::Upi => "upi",
            TransferMethod::Account => "account",
        }
    }

    pub fn from_value(value: &str) -> Option<TransferMethod> {
        match value {
            "upi" => Some(TransferMethod::Upi),
            "account" => Some(TransferMethod::Account),
            _ => None,
        }
    }
}

/// Editable text fields of the send-money form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferField {
    RecipientName,
    UpiId,
    AccountNumber,
    IfscCode,
    Amount,
    Note,
}

/// Send-money form state; cleared after a confirmed transfer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransferForm {
    pub recipient_name: String,
    pub method: TransferMethod,
    pub upi_id: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub amount: String,
    pub note: String,
}

impl TransferForm {
    pub fn set(&mut self, field: TransferField, value: &str) {
        match field {
            TransferField::RecipientName => self.recipient_name = value.to_string(),
            TransferField::UpiId => self.upi_id = value.trim().to_string(),
            TransferField::AccountNumber => self.account_number = value.trim().to_string(),
            TransferField::IfscCode => self.ifsc_code = value.trim().to_uppercase(),
            TransferField::Amount => self.amount = value.trim().to_string(),
            TransferField::Note => self.note = value.to_string(),
        }
    }

    pub fn get(&self, field: TransferField) -> &str {
        match field {
            TransferField::RecipientName => &self.recipient_name,
            TransferField::UpiId => &self.upi_id,
            TransferField::AccountNumber => &self.account_number,
            TransferField::IfscCode => &self.ifsc_code,
            TransferField::Amount => &self.amount,
            TransferField::Note => &self.note,
        }
    }

    /// Parsed amount, or None when the input is not a finite number
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    /// The addressing field that matters for the selected method
    pub fn recipient_address(&self) -> &str {
        match self.method {
            TransferMethod::Upi => &self.upi_id,
            TransferMethod::Account => &self.account_number,
        }
    }
}

/// Derived classification of a pending transfer; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudAlertType {
    #[serde(rename = "large-amount")]
    LargeAmount,
    #[serde(rename = "flagged-recipient")]
    FlaggedRecipient,
}

impl FraudAlertType {
    pub fn title_key(&self) -> &'static str {
        match self {
            FraudAlertType::LargeAmount => "fraud.largeAmountTitle",
            FraudAlertType::FlaggedRecipient => "fraud.flaggedRecipientTitle",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            FraudAlertType::LargeAmount => "fraud.largeAmount",
            FraudAlertType::FlaggedRecipient => "fraud.flaggedRecipient",
        }
    }

    /// CSS modifier for the alert banner
    pub fn css_class(&self) -> &'static str {
        match self {
            FraudAlertType::LargeAmount => "fraud-alert warning",
            FraudAlertType::FlaggedRecipient => "fraud-alert danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_normalizes_ifsc_and_amount() {
        let mut form = TransferForm::default();
        form.set(TransferField::IfscCode, " hdfc0000123 ");
        form.set(TransferField::Amount, " 2500 ");
        assert_eq!(form.ifsc_code, "HDFC0000123");
        assert_eq!(form.amount, "2500");
        assert_eq!(form.get(TransferField::Amount), "2500");
    }

    #[test]
    fn test_parsed_amount() {
        let mut form = TransferForm::default();
        assert_eq!(form.parsed_amount(), None);

        form.amount = "1500.50".to_string();
        assert_eq!(form.parsed_amount(), Some(1500.5));

        form.amount = "abc".to_string();
        assert_eq!(form.parsed_amount(), None);

        form.amount = "inf".to_string();
        assert_eq!(form.parsed_amount(), None);
    }

    #[test]
    fn test_recipient_address_follows_method() {
        let mut form = TransferForm {
            upi_id: "asha@okaxis".to_string(),
            account_number: "123456789".to_string(),
            ..TransferForm::default()
        };
        assert_eq!(form.recipient_address(), "asha@okaxis");
        form.method = TransferMethod::Account;
        assert_eq!(form.recipient_address(), "123456789");
    }

    #[test]
    fn test_fraud_alert_serializes_with_kebab_names() {
        let json = serde_json::to_string(&FraudAlertType::LargeAmount).unwrap();
        assert_eq!(json, "\"large-amount\"");
    }
}
