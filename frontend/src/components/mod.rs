pub mod footer;
pub mod fraud_alert;
pub mod navbar;
pub mod undo_transaction_modal;
pub mod voice_confirmation_modal;
