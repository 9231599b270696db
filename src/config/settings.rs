use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Identity of the registry operator; the only caller allowed to
    /// authorize assessors.
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Protocol-wide risk score the store starts with. Static in this
    /// design; an aggregation rule would be a future collaborator.
    #[serde(default = "default_protocol_risk_bps")]
    pub initial_protocol_risk_bps: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_operator() -> String {
    "0x0000000000000000000000000000000000000001".to_string()
}

fn default_protocol_risk_bps() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            registry: RegistrySettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        RegistrySettings {
            operator: default_operator(),
            initial_protocol_risk_bps: default_protocol_risk_bps(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from the environment, e.g.
    /// `VAULT_RISK_REGISTRY__OPERATOR=0xabc...`. Unset values fall back to
    /// the defaults above.
    pub fn new() -> Result<Self, RegistryError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("VAULT_RISK").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
