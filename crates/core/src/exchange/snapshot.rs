//! Point-in-time exchange rates used for a single calculation.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};

/// USDT/THB served when the upstream provider is unavailable.
const FALLBACK_USDT_THB: Decimal = dec!(31.16);

/// RUB/USDT served when the upstream provider is unavailable.
const FALLBACK_RUB_USDT: Decimal = dec!(84.2271);

/// Timestamp layout on the wire: ISO-8601 with microseconds, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Rates fetched for one request.
///
/// Immutable once built; never cached between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSnapshot {
    /// THB per 1 USDT.
    #[serde(with = "rust_decimal::serde::float")]
    pub usdt_thb: Decimal,
    /// RUB per 1 USDT.
    #[serde(with = "rust_decimal::serde::float")]
    pub rub_usdt: Decimal,
    /// Local time the rates were obtained.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl RateSnapshot {
    /// Creates a snapshot with an explicit timestamp.
    #[must_use]
    pub const fn new(usdt_thb: Decimal, rub_usdt: Decimal, timestamp: NaiveDateTime) -> Self {
        Self {
            usdt_thb,
            rub_usdt,
            timestamp,
        }
    }

    /// Creates a snapshot stamped with the current local time.
    #[must_use]
    pub fn now(usdt_thb: Decimal, rub_usdt: Decimal) -> Self {
        Self::new(usdt_thb, rub_usdt, Local::now().naive_local())
    }

    /// The documented fallback rates, stamped now.
    #[must_use]
    pub fn fallback() -> Self {
        Self::now(FALLBACK_USDT_THB, FALLBACK_RUB_USDT)
    }
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
