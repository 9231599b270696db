use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk tier derived from the overall score. Boundaries are
/// half-open on the low side: exact equality to a threshold lands in the
/// higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{}", label)
    }
}

/// The four assessor-submitted component scores, each in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub liquidity: u64,
    pub volatility: u64,
    pub concentration: u64,
    pub historical: u64,
}

impl ComponentScores {
    pub fn new(liquidity: u64, volatility: u64, concentration: u64, historical: u64) -> Self {
        Self {
            liquidity,
            volatility,
            concentration,
            historical,
        }
    }

    /// Uniform scores, used for the registration preset.
    pub fn uniform(score: u64) -> Self {
        Self::new(score, score, score, score)
    }

    pub fn values(&self) -> [u64; 4] {
        [
            self.liquidity,
            self.volatility,
            self.concentration,
            self.historical,
        ]
    }
}

/// A tracked vault position subject to risk assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    pub vault_id: u64,
    /// Identity of the registrant; immutable after creation.
    pub owner: String,
    pub total_value_locked: u64,
    pub scores: ComponentScores,
    /// Weighted combination of the component scores; never set independently.
    pub overall_risk_score: u64,
    pub risk_level: RiskLevel,
    /// Ledger height of the most recent score update (creation height at
    /// registration).
    pub last_updated: u64,
    pub is_active: bool,
}

/// Operational metrics paired 1:1 with a vault. Written by external
/// collaborators (data ingestion), read by the prediction engine. All fields
/// start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMetrics {
    pub vault_id: u64,
    pub daily_volume: u64,
    pub unique_depositors: u64,
    /// Share of the vault held by its largest position, in basis points.
    pub largest_position_pct: u64,
    pub drawdown_30d: u64,
    pub sharpe_ratio: u64,
    pub total_incidents: u64,
}

impl VaultMetrics {
    pub fn new(vault_id: u64) -> Self {
        Self {
            vault_id,
            ..Default::default()
        }
    }
}
