//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Runway calculation configuration.
    #[serde(default)]
    pub runway: RunwayConfig,
    /// Governance configuration.
    #[serde(default)]
    pub governance: GovernanceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            runway: RunwayConfig::default(),
            governance: GovernanceConfig::default(),
        }
    }
}

/// Ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Maximum tolerated difference between debit and credit totals.
    /// Exact balance is required by default.
    #[serde(default = "default_balance_epsilon")]
    pub balance_epsilon: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            balance_epsilon: default_balance_epsilon(),
        }
    }
}

fn default_balance_epsilon() -> Decimal {
    Decimal::ZERO
}

/// Runway calculation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RunwayConfig {
    /// Daily expense estimate used when the caller does not supply one.
    #[serde(default = "default_daily_expense_estimate")]
    pub daily_expense_estimate: Decimal,
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            daily_expense_estimate: default_daily_expense_estimate(),
        }
    }
}

fn default_daily_expense_estimate() -> Decimal {
    Decimal::from(200)
}

/// Governance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceConfig {
    /// Affirmative votes required for a veto proposal when unspecified.
    #[serde(default = "default_veto_votes_required")]
    pub veto_votes_required: u32,
    /// Whether veto proposals require founder approval by default.
    #[serde(default = "default_founder_approval_required")]
    pub founder_approval_required: bool,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            veto_votes_required: default_veto_votes_required(),
            founder_approval_required: default_founder_approval_required(),
        }
    }
}

fn default_veto_votes_required() -> u32 {
    3
}

fn default_founder_approval_required() -> bool {
    true
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HEARTH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
