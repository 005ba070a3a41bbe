//! Shared errors and configuration for the exchange calculator.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error taxonomy with HTTP status mapping
//! - Layered configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, CommissionConfig, RateProviderKind, RatesConfig, ServerConfig};
pub use error::AppError;
