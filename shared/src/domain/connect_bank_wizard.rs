//! Connect-bank wizard.
//!
//! Three steps, strictly linear:
//!
//! ```text
//! Details --(valid form, delay, lookup)--> Verification --(verified)--> Connected
//!    ^                                         |
//!    +------------------- Previous ------------+
//! ```
//!
//! The verification delay is owned by the UI; this type only records that a
//! lookup is in flight so the Next control can be disabled meanwhile.

use thiserror::Error;

use super::bank_verification::{VerificationOutcome, VerificationProvider};
use super::models::bank_account::BankLinkForm;

/// Banks offered in the picker
pub const SUPPORTED_BANKS: [&str; 8] = [
    "State Bank of India",
    "HDFC Bank",
    "ICICI Bank",
    "Axis Bank",
    "Punjab National Bank",
    "Bank of Baroda",
    "Canara Bank",
    "Union Bank of India",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Details,
    Verification,
    Connected,
}

impl WizardStep {
    /// 1-based position for the step indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Verification => 2,
            WizardStep::Connected => 3,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::Details => "connectBank.steps.details",
            WizardStep::Verification => "connectBank.steps.verification",
            WizardStep::Connected => "connectBank.steps.security",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            WizardStep::Details => "connectBank.steps.detailsDescription",
            WizardStep::Verification => "connectBank.steps.verificationDescription",
            WizardStep::Connected => "connectBank.steps.securityDescription",
        }
    }

    pub const ALL: [WizardStep; 3] = [WizardStep::Details, WizardStep::Verification, WizardStep::Connected];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankField {
    BankName,
    AccountHolderName,
    AccountNumber,
    ConfirmAccountNumber,
    IfscCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankLinkError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Account numbers do not match")]
    AccountNumberMismatch,
    #[error("A verification is already in progress")]
    VerificationInProgress,
    #[error("Bank details can only be submitted from the details step")]
    NotOnDetailsStep,
}

impl BankLinkError {
    pub fn message_key(&self) -> &'static str {
        match self {
            BankLinkError::MissingFields => "connectBank.errors.missingFields",
            BankLinkError::AccountNumberMismatch => "connectBank.errors.accountMismatch",
            BankLinkError::VerificationInProgress => "connectBank.errors.inProgress",
            BankLinkError::NotOnDetailsStep => "connectBank.errors.wrongStep",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectBankWizard {
    step: WizardStep,
    form: BankLinkForm,
    verifying: bool,
    outcome: Option<VerificationOutcome>,
}

impl Default for ConnectBankWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectBankWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Details,
            form: BankLinkForm::default(),
            verifying: false,
            outcome: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BankLinkForm {
        &self.form
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn outcome(&self) -> Option<&VerificationOutcome> {
        self.outcome.as_ref()
    }

    pub fn update(&mut self, field: BankField, value: &str) {
        match field {
            BankField::BankName => self.form.bank_name = value.to_string(),
            BankField::AccountHolderName => self.form.account_holder_name = value.to_string(),
            BankField::AccountNumber => self.form.account_number = value.trim().to_string(),
            BankField::ConfirmAccountNumber => self.form.confirm_account_number = value.trim().to_string(),
            BankField::IfscCode => self.form.ifsc_code = value.trim().to_uppercase(),
        }
    }

    /// Validate the details step and mark a lookup as in flight.
    ///
    /// The caller waits out the synthetic delay and then calls
    /// [`ConnectBankWizard::finish_verification`].
    pub fn begin_verification(&mut self) -> Result<(), BankLinkError> {
        if self.step != WizardStep::Details {
            return Err(BankLinkError::NotOnDetailsStep);
        }
        if self.verifying {
            return Err(BankLinkError::VerificationInProgress);
        }
        if !self.form.has_required_fields() {
            return Err(BankLinkError::MissingFields);
        }
        if !self.form.account_numbers_match() {
            return Err(BankLinkError::AccountNumberMismatch);
        }

        self.verifying = true;
        self.outcome = None;
        Ok(())
    }

    /// Run the lookup and move to the verification step with its result
    pub fn finish_verification(&mut self, provider: &dyn VerificationProvider) -> &VerificationOutcome {
        let outcome = provider.verify(&self.form.ifsc_code, &self.form.account_number);
        self.verifying = false;
        self.step = WizardStep::Verification;
        self.outcome.insert(outcome)
    }

    /// Whether the primary button is enabled
    pub fn can_advance(&self) -> bool {
        if self.verifying {
            return false;
        }
        match self.step {
            WizardStep::Details => true,
            WizardStep::Verification => self.outcome.as_ref().is_some_and(VerificationOutcome::is_verified),
            WizardStep::Connected => true,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step != WizardStep::Details && !self.verifying
    }

    /// Move from a successful verification to the connected step.
    ///
    /// Returns false and stays put when the gate is closed.
    pub fn next_step(&mut self) -> bool {
        if self.step == WizardStep::Verification && self.can_advance() {
            self.step = WizardStep::Connected;
            return true;
        }
        false
    }

    pub fn previous_step(&mut self) {
        if !self.can_go_back() {
            return;
        }
        self.step = match self.step {
            WizardStep::Details | WizardStep::Verification => {
                self.outcome = None;
                WizardStep::Details
            }
            WizardStep::Connected => WizardStep::Verification,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
