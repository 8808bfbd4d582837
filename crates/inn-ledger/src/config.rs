use inn_types::Tier;
use serde::{Deserialize, Serialize};

use crate::billing::DEFAULT_TAX_RATE;
use crate::error::LedgerError;

/// Per-day rate of each tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub non_ac: f64,
    pub ac: f64,
    pub premium: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            non_ac: 2500.0,
            ac: 2000.0,
            premium: 3000.0,
        }
    }
}

impl Tariff {
    pub fn rate(&self, tier: Tier) -> f64 {
        match tier {
            Tier::NonAc => self.non_ac,
            Tier::Ac => self.ac,
            Tier::Premium => self.premium,
        }
    }
}

/// Configuration for a ledger instance.
///
/// Room ranges are fixed by [`Tier`]; only prices are configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub tariff: Tariff,
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            tariff: Tariff::default(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl LedgerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, LedgerError> {
        let config: Self =
            toml::from_str(source).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite prices and tax rates.
    pub fn validate(&self) -> Result<(), LedgerError> {
        for tier in Tier::ALL {
            let rate = self.tariff.rate(tier);
            if !rate.is_finite() || rate < 0.0 {
                return Err(LedgerError::Config(format!("{tier} rate must be >= 0, got {rate}")));
            }
        }
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(LedgerError::Config(format!(
                "tax_rate must be >= 0, got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }
}
