use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RiskLevel;

/// Projected and external signals supplied by the caller of a prediction.
/// TVL and volatility changes are signed deltas; sentiment and health are
/// basis-point scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOutlook {
    pub projected_tvl_change: i64,
    pub projected_volatility_change: i64,
    pub market_sentiment: u64,
    pub protocol_health: u64,
}

/// Action suggested alongside a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "urgent: reduce exposure")]
    ReduceExposure,
    #[serde(rename = "warning: monitor closely")]
    MonitorClosely,
    #[serde(rename = "safe: continue normal operations")]
    ContinueNormal,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::ReduceExposure => "urgent: reduce exposure",
            Recommendation::MonitorClosely => "warning: monitor closely",
            Recommendation::ContinueNormal => "safe: continue normal operations",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived, non-persisted projection of a vault's future composite score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskForecast {
    pub current_risk_score: u64,
    pub predicted_risk_score: u64,
    pub predicted_risk_level: RiskLevel,
    /// Projected deterioration only: improvements report zero, never a
    /// negative delta.
    pub risk_change: u64,
    pub recommendation: Recommendation,
}
