//! Core exchange logic for the calculator.
//!
//! This crate contains pure computation with ZERO web or network dependencies.
//! Currencies, rate snapshots, commission tiers and both calculation modes
//! live here.
//!
//! # Modules
//!
//! - `exchange` - Currencies and the per-request rate snapshot
//! - `calculator` - Doverka and broker calculations behind one engine

pub mod calculator;
pub mod exchange;
