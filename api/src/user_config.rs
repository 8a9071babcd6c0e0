//! Decoding of the Aave user configuration bitmap.
//!
//! The pool packs two flags per reserve into one `uint256`: bit `2i` marks
//! reserve `i` as used for collateral and bit `2i + 1` marks it as borrowed.

use alloy::primitives::U256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveFlags {
    pub is_collateral: bool,
    pub is_borrowed: bool,
}

impl ReserveFlags {
    /// A reserve with neither flag set needs no further reads.
    pub fn is_active(&self) -> bool {
        self.is_collateral || self.is_borrowed
    }
}

/// Expands `bitmap` into one entry per reserve, indexed like the reserve list.
pub fn decode_user_configuration(bitmap: U256, reserve_count: usize) -> Vec<ReserveFlags> {
    (0..reserve_count)
        .map(|i| ReserveFlags {
            is_collateral: bit(bitmap, i * 2),
            is_borrowed: bit(bitmap, i * 2 + 1),
        })
        .collect()
}

fn bit(bitmap: U256, index: usize) -> bool {
    index < U256::BITS && bitmap.bit(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bitmap_has_no_active_reserves() {
        let flags = decode_user_configuration(U256::ZERO, 4);
        assert_eq!(flags.len(), 4);
        assert!(flags.iter().all(|f| !f.is_active()));
    }

    #[test]
    fn decodes_collateral_and_borrow_pairs() {
        // reserve 0 borrowed, reserve 1 collateral
        let flags = decode_user_configuration(U256::from(0b0110u64), 2);

        assert_eq!(
            flags,
            vec![
                ReserveFlags {
                    is_collateral: false,
                    is_borrowed: true
                },
                ReserveFlags {
                    is_collateral: true,
                    is_borrowed: false
                },
            ]
        );
    }

    #[test]
    fn ignores_bits_past_reserve_count() {
        let flags = decode_user_configuration(U256::from(0b1111_0000u64), 2);
        assert!(flags.iter().all(|f| !f.is_active()));
    }

    #[test]
    fn reads_the_highest_reserve_slot() {
        let bitmap = U256::from(1u64) << 255;
        let flags = decode_user_configuration(bitmap, 128);

        assert_eq!(flags.len(), 128);
        assert!(flags[127].is_borrowed);
        assert!(!flags[127].is_collateral);
        assert!(flags[..127].iter().all(|f| !f.is_active()));
    }

    #[test]
    fn reserves_beyond_bitmap_width_read_as_inactive() {
        let flags = decode_user_configuration(U256::MAX, 130);

        assert!(flags[127].is_active());
        assert!(!flags[128].is_active());
        assert!(!flags[129].is_active());
    }
}
