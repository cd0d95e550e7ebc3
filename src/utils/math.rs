//! Decimal math and base-unit conversions

use alloy::primitives::U256;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

pub fn pow10(n: i32) -> Decimal {
    match n {
        0 => dec!(1),
        6 => dec!(1_000_000),
        18 => dec!(1_000_000_000_000_000_000),
        _ => {
            let mut result = dec!(1);
            if n > 0 {
                for _ in 0..n {
                    result *= dec!(10);
                }
            } else {
                for _ in 0..(-n) {
                    result /= dec!(10);
                }
            }
            result
        }
    }
}

/// Raw chain integer to Decimal. None when the value exceeds Decimal range.
pub fn u256_to_decimal(value: U256) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}

/// Base units to whole units: `value / 10^decimals`.
pub fn scale_down(value: U256, decimals: u8) -> Option<Decimal> {
    Some(u256_to_decimal(value)? / pow10(decimals as i32))
}

/// Whole units to base units, truncating sub-unit dust.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Option<U256> {
    let scaled = (amount * pow10(decimals as i32)).trunc();
    if scaled.is_sign_negative() {
        return None;
    }
    scaled.to_u128().map(U256::from)
}

/// Wei to whole native units.
pub fn wei_to_native(wei: u128) -> Decimal {
    Decimal::from_u128(wei).unwrap_or(Decimal::MAX) / pow10(18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow10_fast_paths_match_loop() {
        assert_eq!(pow10(6), dec!(1_000_000));
        assert_eq!(pow10(3), dec!(1_000));
        assert_eq!(pow10(-2), dec!(0.01));
    }

    #[test]
    fn scale_down_usdc_output() {
        let raw = U256::from(3_000_000_000u64); // 3000 USDC at 6 decimals
        assert_eq!(scale_down(raw, 6), Some(dec!(3000)));
    }

    #[test]
    fn scale_down_rejects_oversized_values() {
        assert_eq!(scale_down(U256::MAX, 18), None);
    }

    #[test]
    fn base_units_round_trip() {
        let amount = dec!(1.5);
        let raw = to_base_units(amount, 18).unwrap();
        assert_eq!(raw, U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(scale_down(raw, 18), Some(amount));
    }

    #[test]
    fn base_units_reject_negative() {
        assert_eq!(to_base_units(dec!(-1), 18), None);
    }

    #[test]
    fn wei_conversion() {
        assert_eq!(wei_to_native(1_000_000_000_000_000_000), dec!(1));
        assert_eq!(wei_to_native(20_000_000_000), dec!(0.00000002));
    }
}
