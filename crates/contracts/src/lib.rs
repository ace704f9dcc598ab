//! Shared DTOs between the popup and the prediction service

pub mod domain;
