use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Platform share of the vault balance on either settlement path: 10%
/// On completion the doctor receives the remainder, on cancellation the
/// patient does
pub const PLATFORM_FEE_NUMERATOR: u64 = 10;
pub const PLATFORM_FEE_DENOMINATOR: u64 = 100;

/// Splits a vault balance into `(majority_share, platform_share)`
///
/// The platform share is floored first, and the majority party receives
/// whatever is left, so the two shares always sum exactly to the balance
/// and any rounding remainder goes to the majority party
pub fn split_balance(balance: u64) -> Result<(u64, u64)> {
    let platform_share = (balance as u128)
        .checked_mul(PLATFORM_FEE_NUMERATOR as u128)
        .ok_or(EscrowError::ArithmeticOverflow)?
        .checked_div(PLATFORM_FEE_DENOMINATOR as u128)
        .ok_or(EscrowError::ArithmeticOverflow)? as u64;

    let majority_share = balance
        .checked_sub(platform_share)
        .ok_or(EscrowError::ArithmeticOverflow)?;

    Ok((majority_share, platform_share))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_balance() {
        for balance in [0u64, 1, 9, 10, 11, 99, 100, 101, 1_000_000, u64::MAX] {
            let (majority, platform) = split_balance(balance).unwrap();
            assert_eq!(majority + platform, balance);
        }
    }

    #[test]
    fn reference_ratio() {
        let (doctor, platform) = split_balance(1_000_000).unwrap();
        assert_eq!(doctor, 900_000);
        assert_eq!(platform, 100_000);
    }

    #[test]
    fn remainder_goes_to_majority_party() {
        // 10% of 105 floors to 10; the half-unit stays with the majority
        let (majority, platform) = split_balance(105).unwrap();
        assert_eq!(platform, 10);
        assert_eq!(majority, 95);
    }

    #[test]
    fn dust_balances_pay_no_fee() {
        let (majority, platform) = split_balance(9).unwrap();
        assert_eq!(platform, 0);
        assert_eq!(majority, 9);
    }
}
