//! Send-money form handling.
//!
//! The UI only renders; validation, the fraud gate and the reset after a
//! confirmed transfer all live here. A submit either fails validation, gets
//! held by a fraud alert, or hands over to the voice confirmation modal.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::fraud_detection::FraudClassifier;
use super::models::transfer::{FraudAlertType, TransferField, TransferForm, TransferMethod};

static UPI_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+$").expect("UPI id pattern is valid"));
static ACCOUNT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,18}$").expect("account number pattern is valid"));
static IFSC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern is valid"));

/// First validation failure of the form, in field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferValidationError {
    #[error("Recipient name is required")]
    MissingRecipientName,
    #[error("Enter an amount greater than zero")]
    InvalidAmount,
    #[error("Enter a valid UPI ID like name@bank")]
    InvalidUpiId,
    #[error("Account number must be 9 to 18 digits")]
    InvalidAccountNumber,
    #[error("Enter a valid IFSC code like SBIN0001234")]
    InvalidIfscCode,
}

impl TransferValidationError {
    pub fn message_key(&self) -> &'static str {
        match self {
            TransferValidationError::MissingRecipientName => "errors.recipientName",
            TransferValidationError::InvalidAmount => "errors.amount",
            TransferValidationError::InvalidUpiId => "errors.upiId",
            TransferValidationError::InvalidAccountNumber => "errors.accountNumber",
            TransferValidationError::InvalidIfscCode => "errors.ifscCode",
        }
    }
}

/// Result of pressing the send button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(TransferValidationError),
    /// Held until the user acknowledges the alert or edits the form
    Blocked(FraudAlertType),
    /// Open the voice confirmation modal
    AwaitingConfirmation,
}

/// What was sent, for the success message
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub recipient_name: String,
    pub amount: String,
    pub method: TransferMethod,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendMoneyFlow {
    form: TransferForm,
    fraud_alert: Option<FraudAlertType>,
    acknowledged_alert: Option<FraudAlertType>,
    awaiting_confirmation: bool,
}

pub fn validate_transfer(form: &TransferForm) -> Result<(), TransferValidationError> {
    if form.recipient_name.trim().is_empty() {
        return Err(TransferValidationError::MissingRecipientName);
    }
    match form.parsed_amount() {
        Some(amount) if amount > 0.0 => {}
        _ => return Err(TransferValidationError::InvalidAmount),
    }
    match form.method {
        TransferMethod::Upi => {
            if !UPI_ID_PATTERN.is_match(&form.upi_id) {
                return Err(TransferValidationError::InvalidUpiId);
            }
        }
        TransferMethod::Account => {
            if !ACCOUNT_NUMBER_PATTERN.is_match(&form.account_number) {
                return Err(TransferValidationError::InvalidAccountNumber);
            }
            if !IFSC_PATTERN.is_match(&form.ifsc_code) {
                return Err(TransferValidationError::InvalidIfscCode);
            }
        }
    }
    Ok(())
}

impl SendMoneyFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &TransferForm {
        &self.form
    }

    pub fn fraud_alert(&self) -> Option<FraudAlertType> {
        self.fraud_alert
    }

    pub fn is_alert_acknowledged(&self) -> bool {
        self.fraud_alert.is_some() && self.fraud_alert == self.acknowledged_alert
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation
    }

    /// Any edit clears a pending alert and its acknowledgement
    pub fn update(&mut self, field: TransferField, value: &str) {
        self.form.set(field, value);
        self.clear_alert();
    }

    pub fn set_method(&mut self, method: TransferMethod) {
        self.form.method = method;
        self.clear_alert();
    }

    fn clear_alert(&mut self) {
        self.fraud_alert = None;
        self.acknowledged_alert = None;
    }

    /// Validate, run the fraud gate and, if both pass, wait for confirmation
    pub fn submit(&mut self, classifier: &dyn FraudClassifier) -> SubmitOutcome {
        if let Err(error) = validate_transfer(&self.form) {
            return SubmitOutcome::Invalid(error);
        }

        match classifier.classify(&self.form) {
            Some(alert) if self.acknowledged_alert != Some(alert) => {
                self.fraud_alert = Some(alert);
                self.acknowledged_alert = None;
                SubmitOutcome::Blocked(alert)
            }
            _ => {
                self.awaiting_confirmation = true;
                SubmitOutcome::AwaitingConfirmation
            }
        }
    }

    /// User chose to proceed despite the current alert
    pub fn acknowledge_alert(&mut self) {
        self.acknowledged_alert = self.fraud_alert;
    }

    /// Confirmation modal closed without confirming
    pub fn cancel_confirmation(&mut self) {
        self.awaiting_confirmation = false;
    }

    /// Confirmation given: produce the receipt and reset the form.
    ///
    /// Returns `None` when no confirmation was pending.
    pub fn complete(&mut self) -> Option<TransferReceipt> {
        if !self.awaiting_confirmation {
            return None;
        }
        let form = std::mem::take(&mut self.form);
        *self = Self::default();
        log::info!("Transfer of {} to {} confirmed", form.amount, form.recipient_name);
        Some(TransferReceipt {
            recipient_name: form.recipient_name,
            amount: form.amount,
            method: form.method,
        })
    }
}
