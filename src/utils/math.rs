//! Basis-point fixed-point helpers.
//!
//! All scores in the engine are unsigned integers scaled to two implied
//! decimal digits over [0, 10000] (0.00%..100.00%). Combination always uses
//! truncating integer division, so results are reproducible bit-for-bit
//! across hosts.

/// Full scale of the basis-point range: 10000 == 100.00%.
pub const BPS_SCALE: u64 = 10_000;

/// A value is a valid score iff it lies inside the basis-point range.
pub fn is_valid_score(value: u64) -> bool {
    value <= BPS_SCALE
}

/// One weighted term of a composite: `floor(score * weight / 100)`.
///
/// Each term truncates independently, so a sum of terms can sit up to
/// (number of terms - 1) units below the exact weighted average. Callers
/// rely on that exact truncation behavior; do not round.
pub fn weighted_term(score: u64, weight: u64) -> u64 {
    score * weight / 100
}

/// Volume-to-TVL ratio in basis points: `floor(daily_volume * 10000 / tvl)`.
///
/// A zero TVL yields the full-scale ratio rather than an error; the
/// liquidity table treats a maximal ratio as the safest case.
pub fn volume_to_tvl_ratio(daily_volume: u64, tvl: u64) -> u64 {
    if tvl == 0 {
        return BPS_SCALE;
    }
    let ratio = (daily_volume as u128 * BPS_SCALE as u128) / tvl as u128;
    ratio.min(u64::MAX as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_validity_bounds() {
        assert!(is_valid_score(0));
        assert!(is_valid_score(10_000));
        assert!(!is_valid_score(10_001));
    }

    #[test]
    fn test_weighted_term_truncates() {
        // 9999 * 25 / 100 = 2499.75 -> 2499
        assert_eq!(weighted_term(9_999, 25), 2_499);
        assert_eq!(weighted_term(10_000, 25), 2_500);
        assert_eq!(weighted_term(0, 30), 0);
    }

    #[test]
    fn test_volume_to_tvl_ratio() {
        // 500 volume against 1000 TVL = 50.00%
        assert_eq!(volume_to_tvl_ratio(500, 1_000), 5_000);
        // ratio can exceed full scale when volume > TVL
        assert_eq!(volume_to_tvl_ratio(2_000, 1_000), 20_000);
        // zero TVL maps to the full-scale ratio, not an error
        assert_eq!(volume_to_tvl_ratio(123, 0), BPS_SCALE);
    }

    #[test]
    fn test_volume_to_tvl_ratio_no_overflow() {
        let ratio = volume_to_tvl_ratio(u64::MAX, 1);
        assert!(ratio >= BPS_SCALE);
    }
}
