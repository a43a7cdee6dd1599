pub mod use_presentation;
pub mod use_speech;
pub mod use_ticker;
pub mod use_view_model;
