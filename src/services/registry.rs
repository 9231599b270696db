// Vault registry operations
//
// Validates, authorizes, and applies each operation as a single atomic unit
// against the store: every precondition is checked before the first write,
// so a failed operation leaves no partial state behind. The embedding host
// serializes operations (one at a time against the store); `&mut self` on
// the mutating operations encodes that exclusivity in the type system.

use tracing::{info, warn};

use crate::config::RegistrySettings;
use crate::error::RegistryError;
use crate::models::{
    Assessor, ComponentScores, MarketOutlook, RiskForecast, RiskLevel, Vault, VaultMetrics,
};
use crate::services::prediction::PredictionEngine;
use crate::services::risk_calculator::{RiskCalculator, HIGH_RISK_THRESHOLD};
use crate::store::VaultStore;
use crate::utils::math::is_valid_score;

/// Component scores and composite a vault starts with.
pub const INITIAL_SCORE_BPS: u64 = 5_000;

pub struct VaultRegistry {
    store: VaultStore,
    settings: RegistrySettings,
    calculator: RiskCalculator,
    predictor: PredictionEngine,
}

impl VaultRegistry {
    pub fn new(settings: RegistrySettings) -> Self {
        let store = VaultStore::new(settings.initial_protocol_risk_bps);
        Self {
            store,
            settings,
            calculator: RiskCalculator::new(),
            predictor: PredictionEngine::new(),
        }
    }

    /// Rebuild a registry around a store snapshot restored by the host.
    pub fn with_store(settings: RegistrySettings, store: VaultStore) -> Self {
        Self {
            store,
            settings,
            calculator: RiskCalculator::new(),
            predictor: PredictionEngine::new(),
        }
    }

    /// Register a new vault for `caller` and return its id.
    ///
    /// The vault starts at the medium preset (all components and the
    /// composite at 5000) with a paired all-zero metrics record.
    pub fn register_vault(
        &mut self,
        caller: &str,
        total_value_locked: u64,
        height: u64,
    ) -> Result<u64, RegistryError> {
        if total_value_locked == 0 {
            return Err(RegistryError::InvalidParameters {
                message: "total_value_locked must be greater than zero".to_string(),
            });
        }

        let vault_id = self.store.next_vault_id();
        let scores = ComponentScores::uniform(INITIAL_SCORE_BPS);
        let vault = Vault {
            vault_id,
            owner: caller.to_string(),
            total_value_locked,
            scores,
            overall_risk_score: INITIAL_SCORE_BPS,
            risk_level: RiskLevel::Medium,
            last_updated: height,
            is_active: true,
        };
        self.store.insert_vault(vault)?;

        info!(
            vault_id,
            owner = %caller,
            total_value_locked,
            "Registered vault"
        );
        Ok(vault_id)
    }

    /// Grant `target` assessor rights. Operator only.
    ///
    /// The write replaces the whole assessor record, so re-authorizing a
    /// known identity resets its assessment counter.
    pub fn authorize_assessor(&mut self, caller: &str, target: &str) -> Result<(), RegistryError> {
        if caller != self.settings.operator {
            warn!(caller = %caller, "Rejected authorization attempt by non-operator");
            return Err(RegistryError::OwnerOnly);
        }

        self.store.put_assessor(target, Assessor::authorized());
        info!(assessor = %target, "Authorized assessor");
        Ok(())
    }

    /// Apply a fresh set of component scores to a vault and return the new
    /// composite.
    ///
    /// Precondition order is fixed: vault existence, assessor record,
    /// authorization flag, score validity. The first violation wins and
    /// nothing is written.
    pub fn update_scores(
        &mut self,
        caller: &str,
        vault_id: u64,
        scores: ComponentScores,
        height: u64,
    ) -> Result<u64, RegistryError> {
        if self.store.vault(vault_id).is_none() {
            return Err(RegistryError::VaultNotFound { vault_id });
        }
        match self.store.assessor(caller) {
            Some(assessor) if assessor.authorized => {}
            _ => {
                warn!(caller = %caller, vault_id, "Rejected score update by unauthorized caller");
                return Err(RegistryError::Unauthorized {
                    caller: caller.to_string(),
                });
            }
        }
        for value in scores.values() {
            if !is_valid_score(value) {
                return Err(RegistryError::InvalidScore { value });
            }
        }

        let overall = self.calculator.composite_score(&scores);
        let risk_level = self.calculator.classify(overall);

        // All validations passed; the writes below commit together.
        let vault = self
            .store
            .vault_mut(vault_id)
            .ok_or(RegistryError::VaultNotFound { vault_id })?;
        vault.scores = scores;
        vault.overall_risk_score = overall;
        vault.risk_level = risk_level;
        vault.last_updated = height;

        if let Some(assessor) = self.store.assessor_mut(caller) {
            assessor.assessments_count += 1;
        }
        self.store.record_assessment();

        info!(
            vault_id,
            assessor = %caller,
            overall_risk_score = overall,
            risk_level = %risk_level,
            "Updated vault scores"
        );
        Ok(overall)
    }

    /// Forecast a vault's risk from projected signals. Read-only.
    pub fn predict(
        &self,
        vault_id: u64,
        outlook: &MarketOutlook,
    ) -> Result<RiskForecast, RegistryError> {
        let vault = self
            .store
            .vault(vault_id)
            .filter(|vault| vault.is_active)
            .ok_or(RegistryError::VaultNotFound { vault_id })?;
        for value in [outlook.market_sentiment, outlook.protocol_health] {
            if !is_valid_score(value) {
                return Err(RegistryError::InvalidParameters {
                    message: format!("sentiment/health score {} out of range", value),
                });
            }
        }

        let metrics = self
            .store
            .metrics(vault_id)
            .ok_or(RegistryError::VaultNotFound { vault_id })?;
        Ok(self.predictor.forecast(vault, metrics, outlook))
    }

    pub fn get_vault(&self, vault_id: u64) -> Result<&Vault, RegistryError> {
        self.store
            .vault(vault_id)
            .ok_or(RegistryError::VaultNotFound { vault_id })
    }

    pub fn get_metrics(&self, vault_id: u64) -> Result<&VaultMetrics, RegistryError> {
        self.store
            .metrics(vault_id)
            .ok_or(RegistryError::VaultNotFound { vault_id })
    }

    pub fn is_high_risk(&self, vault_id: u64) -> Result<bool, RegistryError> {
        let vault = self.get_vault(vault_id)?;
        Ok(vault.overall_risk_score >= HIGH_RISK_THRESHOLD)
    }

    pub fn get_protocol_risk(&self) -> u64 {
        self.store.protocol_risk_score()
    }

    pub fn operator(&self) -> &str {
        &self.settings.operator
    }

    /// Read-only view of the underlying store, e.g. for host snapshots.
    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    /// Mutable store access for external collaborators (metrics ingestion,
    /// snapshot restore). Core operations never bypass their own validation
    /// through this seam.
    pub fn store_mut(&mut self) -> &mut VaultStore {
        &mut self.store
    }
}
