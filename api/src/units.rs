//! Fixed-point conversions for on-chain integer amounts.

use alloy::primitives::U256;
use bigdecimal::{BigDecimal, ToPrimitive};
use num_bigint::{BigInt, Sign};

/// Decimal places of Aave's ray unit.
pub const RAY_DECIMALS: u8 = 27;

/// `value * 10^-decimals` as an exact decimal.
pub fn to_decimal(value: U256, decimals: u8) -> BigDecimal {
    let int_val = BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>());
    BigDecimal::new(int_val, decimals as i64)
}

/// Shifts the decimal point of `value` left by `decimals` places.
///
/// Trailing fractional zeros are trimmed but at least one fractional digit
/// is kept: `1500000` with 6 decimals is `"1.5"`, `1000000` is `"1.0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let amount = to_decimal(value, decimals).normalized().to_plain_string();

    if amount.contains('.') {
        amount
    } else {
        format!("{}.0", amount)
    }
}

/// Converts a ray-denominated rate into a plain fraction (`0.05` is 5%).
pub fn ray_to_f64(value: U256) -> f64 {
    to_decimal(value, RAY_DECIMALS)
        .normalized()
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> U256 {
        s.parse().unwrap()
    }

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_units(u("1500000"), 6), "1.5");
        assert_eq!(format_units(u("1000000"), 6), "1.0");
        assert_eq!(format_units(u("5"), 6), "0.000005");
        assert_eq!(format_units(u("123456789"), 6), "123.456789");
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
    }

    #[test]
    fn zero_decimals_keeps_integer() {
        assert_eq!(format_units(u("42"), 0), "42.0");
    }

    #[test]
    fn keeps_full_precision_for_wide_balances() {
        // 123456789.123456789123456789 tokens with 18 decimals
        assert_eq!(
            format_units(u("123456789123456789123456789"), 18),
            "123456789.123456789123456789"
        );
        assert_eq!(
            format_units(U256::MAX, 18),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn round_numbers_keep_one_fractional_digit() {
        assert_eq!(format_units(u("100000000"), 6), "100.0");
        assert_eq!(format_units(u("1000000000000000000000"), 18), "1000.0");
    }

    #[test]
    fn converts_ray_rates() {
        // 5% in ray
        let rate = u("50000000000000000000000000");
        assert!((ray_to_f64(rate) - 0.05).abs() < 1e-15);
        assert_eq!(ray_to_f64(U256::ZERO), 0.0);
    }
}
