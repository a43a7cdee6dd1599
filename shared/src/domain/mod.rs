//! # Domain Module
//!
//! Contains the view-model logic behind every SafePay screen.
//!
//! Each flow is a small state machine that the UI drives with user events and
//! timer ticks. Nothing here touches the DOM, the network or browser storage
//! directly; those are reached through the collaborator traits
//! ([`bank_verification::VerificationProvider`], [`fraud_detection::FraudClassifier`],
//! [`speech::SpeechSynthesizer`], [`presentation::KeyValueStore`]).
//!
//! ## Module Organization
//!
//! - **models**: Bank accounts, transfer forms and transactions
//! - **bank_verification**: Mock IFSC lookup used by the connect-bank wizard
//! - **connect_bank_wizard**: Details → verification → connected flow
//! - **fraud_detection**: Threshold and blocklist heuristics
//! - **money_transfer**: Send-money form validation and submission gate
//! - **countdown**: One-second countdown shared by both modals
//! - **voice_confirmation**: Spoken confirmation overlay and playback tracking
//! - **undo_transaction**: Time-limited reversal overlay
//! - **transaction_review**: In-memory ledger, filtering and tallies
//! - **localization**: Dotted-key string tables with placeholder substitution
//! - **presentation**: Elder mode and language settings, persisted preference
//! - **speech**: Text-to-speech collaborator and playback tickets
//! - **formatting**: Rupee amounts in Indian digit grouping

pub mod bank_verification;
pub mod connect_bank_wizard;
pub mod countdown;
pub mod formatting;
pub mod fraud_detection;
pub mod localization;
pub mod models;
pub mod money_transfer;
pub mod presentation;
pub mod speech;
pub mod transaction_review;
pub mod undo_transaction;
pub mod voice_confirmation;
