//! Property-based tests for the calculators.
//!
//! - Broker `amount` and `target` directions invert each other
//! - Doverka output never exceeds the commission-free conversion

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::broker::BrokerCalculator;
use super::commission::Commission;
use super::doverka::DoverkaCalculator;
use super::types::CommissionLevel;

/// Strategy to generate positive amounts with 2 decimals (1.00 to 1,000,000.00).
fn fiat_amount() -> impl Strategy<Value = Decimal> {
    (100i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate USDT amounts with 4 decimals (1.0000 to 100,000.0000).
fn usdt_amount() -> impl Strategy<Value = Decimal> {
    (10_000i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// THB per USDT between 20.0000 and 50.0000.
fn usdt_thb() -> impl Strategy<Value = Decimal> {
    (200_000i64..500_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// RUB per USDT between 50.0000 and 150.0000.
fn rub_usdt() -> impl Strategy<Value = Decimal> {
    (500_000i64..1_500_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Spread between 0.0% and 10.0%.
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|v| Decimal::new(v, 1))
}

fn broker(usdt_thb: Decimal, rub_usdt: Decimal, percent: Decimal) -> BrokerCalculator {
    BrokerCalculator::new(
        usdt_thb,
        rub_usdt,
        CommissionLevel::Medium,
        Commission::from_percent(percent).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// THB target → RUB needed → THB received lands within a cent.
    #[test]
    fn prop_rub_to_thb_target_then_amount(
        thb in fiat_amount(),
        rate in usdt_thb(),
        rub_rate in rub_usdt(),
        pct in percent(),
    ) {
        let calc = broker(rate, rub_rate, pct);
        let rub = calc.rub_to_thb_target(thb).unwrap().from_amount;
        let back = calc.rub_to_thb_amount(rub).unwrap().to_amount;
        prop_assert!((back - thb).abs() <= dec!(0.01), "{} -> {} -> {}", thb, rub, back);
    }

    /// RUB given → THB received → RUB needed for it lands within rounding.
    #[test]
    fn prop_rub_to_thb_amount_then_target(
        rub in fiat_amount(),
        rate in usdt_thb(),
        rub_rate in rub_usdt(),
        pct in percent(),
    ) {
        let calc = broker(rate, rub_rate, pct);
        let thb = calc.rub_to_thb_amount(rub).unwrap().to_amount;
        let back = calc.rub_to_thb_target(thb).unwrap().from_amount;
        // half a satang is worth at most 150 / (20 * 0.9) / 200 RUB
        prop_assert!((back - rub).abs() <= dec!(0.05), "{} -> {} -> {}", rub, thb, back);
    }

    /// THB target → USDT needed → THB received lands within a cent.
    #[test]
    fn prop_usdt_to_thb_round_trip(
        thb in fiat_amount(),
        rate in usdt_thb(),
        pct in percent(),
    ) {
        let calc = broker(rate, dec!(90), pct);
        let usdt = calc.usdt_to_thb_target(thb).unwrap().from_amount;
        let back = calc.usdt_to_thb_amount(usdt).unwrap().to_amount;
        prop_assert!((back - thb).abs() <= dec!(0.01), "{} -> {} -> {}", thb, usdt, back);
    }

    /// USDT target → THB needed → USDT received lands within a hundredth of a cent.
    #[test]
    fn prop_thb_to_usdt_round_trip(
        usdt in usdt_amount(),
        rate in usdt_thb(),
        pct in percent(),
    ) {
        let calc = broker(rate, dec!(90), pct);
        let thb = calc.thb_to_usdt_target(usdt).unwrap().from_amount;
        let back = calc.thb_to_usdt_amount(thb).unwrap().to_amount;
        prop_assert!((back - usdt).abs() <= dec!(0.0005), "{} -> {} -> {}", usdt, thb, back);
    }

    /// Unrounded legs invert exactly up to decimal precision.
    #[test]
    fn prop_broker_legs_are_exact_inverses(
        thb in fiat_amount(),
        rate in usdt_thb(),
        pct in percent(),
    ) {
        let commission = Commission::from_percent(pct).unwrap();
        let sell = commission.sell_rate(rate).unwrap();
        let usdt = thb / sell;
        prop_assert!((usdt * sell - thb).abs() < dec!(0.000000001));
    }

    /// Commission never pays the customer: the broker never beats the market.
    #[test]
    fn prop_broker_commission_is_non_negative(
        amount in fiat_amount(),
        rate in usdt_thb(),
        rub_rate in rub_usdt(),
        pct in percent(),
    ) {
        let calc = broker(rate, rub_rate, pct);
        for result in [
            calc.rub_to_thb_amount(amount).unwrap(),
            calc.thb_to_usdt_amount(amount).unwrap(),
            calc.usdt_to_thb_target(amount).unwrap(),
        ] {
            prop_assert!(result.commission.amount >= Decimal::ZERO);
        }
    }

    /// Doverka never returns more than the commission-free cross conversion.
    #[test]
    fn prop_doverka_bounded_by_cross_rate(
        rub in fiat_amount(),
        rate in usdt_thb(),
        rub_rate in rub_usdt(),
        pct in percent(),
    ) {
        let calc = DoverkaCalculator::new(rate, rub_rate, Commission::from_percent(pct).unwrap());
        let free = DoverkaCalculator::new(rate, rub_rate, Commission::from_percent(Decimal::ZERO).unwrap());
        let charged = calc.rub_to_thb(rub).unwrap().to_amount;
        let uncharged = free.rub_to_thb(rub).unwrap().to_amount;
        prop_assert!(charged <= uncharged);
    }
}
