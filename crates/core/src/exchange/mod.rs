//! Currencies and exchange rate snapshots.

pub mod currency;
pub mod snapshot;

pub use currency::Currency;
pub use snapshot::RateSnapshot;
