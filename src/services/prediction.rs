// Forward-looking risk forecasting
//
// Combines a vault's current composite score, its operational metrics, and
// caller-supplied projected signals into a forecast over a fixed horizon.
// Pure integer arithmetic with floor division throughout; the evaluation
// order of the adjustment terms is part of the observable contract.

use tracing::debug;

use crate::models::{MarketOutlook, Recommendation, RiskForecast, Vault, VaultMetrics};
use crate::services::risk_calculator::{
    RiskCalculator, CRITICAL_RISK_THRESHOLD, HIGH_RISK_THRESHOLD,
};
use crate::utils::math::BPS_SCALE;

/// Periods the forecast looks ahead.
pub const FORECAST_HORIZON_PERIODS: u64 = 30;

/// Basis points added per recorded incident.
const INCIDENT_PENALTY_BPS: u64 = 100;

/// Flat penalty once the largest position exceeds 30% of the vault.
const CONCENTRATION_AMPLIFIER_BPS: u64 = 500;
const CONCENTRATION_TRIGGER_BPS: u64 = 3_000;

pub struct PredictionEngine {
    calculator: RiskCalculator,
}

impl PredictionEngine {
    pub fn new() -> Self {
        Self {
            calculator: RiskCalculator::new(),
        }
    }

    /// Forecast a vault's composite score over the next
    /// [`FORECAST_HORIZON_PERIODS`] periods. Read-only; inputs are
    /// pre-validated by the registry.
    pub fn forecast(
        &self,
        vault: &Vault,
        metrics: &VaultMetrics,
        outlook: &MarketOutlook,
    ) -> RiskForecast {
        let current = vault.overall_risk_score;

        // Outflows amplify risk twice as strongly (/5) as inflows dampen
        // it (/10).
        let tvl_impact = if outlook.projected_tvl_change > 0 {
            outlook.projected_tvl_change as u64 / 10
        } else {
            outlook.projected_tvl_change.unsigned_abs() / 5
        };

        // Only rising projected volatility adds risk; a falling projection
        // earns no discount.
        let volatility_impact = if outlook.projected_volatility_change > 0 {
            outlook.projected_volatility_change as u64 / 3
        } else {
            0
        };

        let sentiment_adjustment = (BPS_SCALE - outlook.market_sentiment) / 20;
        // Protocol health weighs more heavily than sentiment (/15 vs /20).
        let health_factor = (BPS_SCALE - outlook.protocol_health) / 15;

        // Metrics are unbounded host-written inputs; saturate instead of
        // overflowing. The final full-scale clamp makes saturation
        // indistinguishable for every in-range result.
        let incident_penalty = metrics.total_incidents.saturating_mul(INCIDENT_PENALTY_BPS);
        let concentration_amplifier = if metrics.largest_position_pct > CONCENTRATION_TRIGGER_BPS {
            CONCENTRATION_AMPLIFIER_BPS
        } else {
            0
        };

        let adjusted = current
            .saturating_add(volatility_impact)
            .saturating_add(sentiment_adjustment)
            .saturating_add(health_factor)
            .saturating_add(incident_penalty)
            .saturating_add(concentration_amplifier);
        let settled = adjusted.saturating_sub(tvl_impact);
        let predicted = settled.min(BPS_SCALE);

        let predicted_risk_level = self.calculator.classify(predicted);
        // Improvements report zero change, not a negative delta.
        let risk_change = predicted.saturating_sub(current);
        let recommendation = Self::recommendation_for(predicted);

        debug!(
            vault_id = vault.vault_id,
            current,
            predicted,
            risk_change,
            "Computed risk forecast"
        );

        RiskForecast {
            current_risk_score: current,
            predicted_risk_score: predicted,
            predicted_risk_level,
            risk_change,
            recommendation,
        }
    }

    fn recommendation_for(predicted: u64) -> Recommendation {
        if predicted >= CRITICAL_RISK_THRESHOLD {
            Recommendation::ReduceExposure
        } else if predicted >= HIGH_RISK_THRESHOLD {
            Recommendation::MonitorClosely
        } else {
            Recommendation::ContinueNormal
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new()
    }
}
