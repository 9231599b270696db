// Pure risk scoring engine
//
// Composite scoring, tier classification, and a standalone liquidity-risk
// estimator. Everything here is pure integer arithmetic over the basis-point
// scale; callers validate inputs before scoring.

use crate::models::{ComponentScores, RiskLevel};
use crate::utils::math::{volume_to_tvl_ratio, weighted_term, BPS_SCALE};

// Component weights, integer percentages summing to exactly 100.
pub const LIQUIDITY_WEIGHT: u64 = 25;
pub const VOLATILITY_WEIGHT: u64 = 30;
pub const CONCENTRATION_WEIGHT: u64 = 20;
pub const HISTORICAL_WEIGHT: u64 = 25;

// Tier thresholds; equality rounds up into the tier.
pub const MEDIUM_RISK_THRESHOLD: u64 = 3_000;
pub const HIGH_RISK_THRESHOLD: u64 = 6_000;
pub const CRITICAL_RISK_THRESHOLD: u64 = 8_500;

pub struct RiskCalculator;

impl RiskCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Weighted composite of the four component scores.
    ///
    /// Each term truncates independently (`floor(score * weight / 100)`),
    /// so the composite can sit up to 3 units below the exact weighted
    /// average. That truncation is part of the observable contract and must
    /// not be "fixed" by rounding the sum.
    pub fn composite_score(&self, scores: &ComponentScores) -> u64 {
        weighted_term(scores.liquidity, LIQUIDITY_WEIGHT)
            + weighted_term(scores.volatility, VOLATILITY_WEIGHT)
            + weighted_term(scores.concentration, CONCENTRATION_WEIGHT)
            + weighted_term(scores.historical, HISTORICAL_WEIGHT)
    }

    /// Map a composite score onto the discrete tier table.
    pub fn classify(&self, score: u64) -> RiskLevel {
        if score < MEDIUM_RISK_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskLevel::Medium
        } else if score < CRITICAL_RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Liquidity risk from the volume-to-TVL ratio: a vault that turns over
    /// a large share of its TVL daily is easy to exit (low risk), a stagnant
    /// one is not. Zero TVL maps to the maximal ratio and lands in the
    /// lowest-risk bucket.
    ///
    /// Standalone estimator: no state-mutating operation invokes it, and
    /// wiring it into the update or prediction paths would change observable
    /// scoring results.
    pub fn liquidity_risk_estimate(&self, tvl: u64, daily_volume: u64) -> u64 {
        let ratio = volume_to_tvl_ratio(daily_volume, tvl);
        if ratio > 5_000 {
            2_000
        } else if ratio > 2_000 {
            5_000
        } else {
            8_000
        }
    }
}

impl Default for RiskCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        assert_eq!(
            LIQUIDITY_WEIGHT + VOLATILITY_WEIGHT + CONCENTRATION_WEIGHT + HISTORICAL_WEIGHT,
            100
        );
    }

    #[test]
    fn test_composite_at_full_scale_is_exact() {
        let calculator = RiskCalculator::new();
        let scores = ComponentScores::uniform(BPS_SCALE);
        // no truncation at the maximum since the weights sum to 100
        assert_eq!(calculator.composite_score(&scores), BPS_SCALE);
    }

    #[test]
    fn test_composite_known_vector() {
        let calculator = RiskCalculator::new();
        let scores = ComponentScores::uniform(8_000);
        // 2000 + 2400 + 1600 + 2000
        assert_eq!(calculator.composite_score(&scores), 8_000);
    }

    #[test]
    fn test_composite_per_term_truncation() {
        let calculator = RiskCalculator::new();
        // each term is floor(1 * w / 100) = 0, so the composite collapses
        // to 0 even though the exact weighted average is 1
        let scores = ComponentScores::uniform(1);
        assert_eq!(calculator.composite_score(&scores), 0);
    }

    #[test]
    fn test_classify_boundaries() {
        let calculator = RiskCalculator::new();
        assert_eq!(calculator.classify(0), RiskLevel::Low);
        assert_eq!(calculator.classify(2_999), RiskLevel::Low);
        assert_eq!(calculator.classify(3_000), RiskLevel::Medium);
        assert_eq!(calculator.classify(5_999), RiskLevel::Medium);
        assert_eq!(calculator.classify(6_000), RiskLevel::High);
        assert_eq!(calculator.classify(8_499), RiskLevel::High);
        assert_eq!(calculator.classify(8_500), RiskLevel::Critical);
        assert_eq!(calculator.classify(10_000), RiskLevel::Critical);
    }

    #[test]
    fn test_liquidity_risk_buckets() {
        let calculator = RiskCalculator::new();
        // ratio 60% -> deep liquidity, low risk
        assert_eq!(calculator.liquidity_risk_estimate(1_000, 600), 2_000);
        // ratio 50% sits in the moderate bucket (boundary is exclusive)
        assert_eq!(calculator.liquidity_risk_estimate(1_000, 500), 5_000);
        // ratio 20% and below -> stagnant, high risk
        assert_eq!(calculator.liquidity_risk_estimate(1_000, 200), 8_000);
        assert_eq!(calculator.liquidity_risk_estimate(1_000, 0), 8_000);
    }

    #[test]
    fn test_liquidity_risk_zero_tvl_is_safest() {
        let calculator = RiskCalculator::new();
        assert_eq!(calculator.liquidity_risk_estimate(0, 0), 2_000);
    }
}
