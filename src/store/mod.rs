// In-memory vault registry state
//
// Three keyed collections (Vault by id, VaultMetrics by id, Assessor by
// identity) plus three scalars. The embedding host owns persistence; the
// whole store derives serde so a snapshot can be serialized in whatever
// format the host chooses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RegistryError;
use crate::models::{Assessor, Vault, VaultMetrics};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultStore {
    vaults: HashMap<u64, Vault>,
    metrics: HashMap<u64, VaultMetrics>,
    assessors: HashMap<String, Assessor>,
    /// Last-assigned vault id; ids are dense and start at 1.
    vault_counter: u64,
    /// Successful score updates across all vaults and assessors.
    total_vaults_assessed: u64,
    /// Static protocol-wide score; no core operation writes it.
    protocol_risk_score: u64,
}

impl VaultStore {
    pub fn new(initial_protocol_risk_score: u64) -> Self {
        Self {
            vaults: HashMap::new(),
            metrics: HashMap::new(),
            assessors: HashMap::new(),
            vault_counter: 0,
            total_vaults_assessed: 0,
            protocol_risk_score: initial_protocol_risk_score,
        }
    }

    pub fn vault(&self, vault_id: u64) -> Option<&Vault> {
        self.vaults.get(&vault_id)
    }

    pub fn vault_mut(&mut self, vault_id: u64) -> Option<&mut Vault> {
        self.vaults.get_mut(&vault_id)
    }

    pub fn metrics(&self, vault_id: u64) -> Option<&VaultMetrics> {
        self.metrics.get(&vault_id)
    }

    /// Mutable metrics access for external collaborators (data ingestion).
    /// Core operations never write metrics after creation.
    pub fn metrics_mut(&mut self, vault_id: u64) -> Option<&mut VaultMetrics> {
        self.metrics.get_mut(&vault_id)
    }

    pub fn assessor(&self, identity: &str) -> Option<&Assessor> {
        self.assessors.get(identity)
    }

    pub fn assessor_mut(&mut self, identity: &str) -> Option<&mut Assessor> {
        self.assessors.get_mut(identity)
    }

    /// Whole-record overwrite; an existing record for the identity is
    /// replaced, counter included.
    pub fn put_assessor(&mut self, identity: &str, assessor: Assessor) {
        self.assessors.insert(identity.to_string(), assessor);
    }

    /// Allocate the next sequential vault id without committing it. The id
    /// becomes permanent only once `insert_vault` succeeds.
    pub fn next_vault_id(&self) -> u64 {
        self.vault_counter + 1
    }

    /// Insert a vault with its paired zeroed metrics record and advance the
    /// counter. The collision check is an invariant assertion; it cannot
    /// fire under correct sequential allocation.
    pub fn insert_vault(&mut self, vault: Vault) -> Result<(), RegistryError> {
        let vault_id = vault.vault_id;
        if self.vaults.contains_key(&vault_id) {
            return Err(RegistryError::VaultExists { vault_id });
        }
        self.vaults.insert(vault_id, vault);
        self.metrics.insert(vault_id, VaultMetrics::new(vault_id));
        self.vault_counter = vault_id;
        Ok(())
    }

    pub fn record_assessment(&mut self) {
        self.total_vaults_assessed += 1;
    }

    pub fn vault_counter(&self) -> u64 {
        self.vault_counter
    }

    pub fn total_vaults_assessed(&self) -> u64 {
        self.total_vaults_assessed
    }

    pub fn protocol_risk_score(&self) -> u64 {
        self.protocol_risk_score
    }
}
