use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `RESTO__` and optional TOML config files.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub loyalty: LoyaltyConfig,
    #[serde(default)]
    pub promotions: PromotionsConfig,
}

// ─── Loyalty Config ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyConfig {
    #[serde(default = "default_loyalty_enabled")]
    pub enabled: bool,
    /// Base points earned per currency unit spent, before the tier
    /// multiplier is applied.
    #[serde(default = "default_points_rate")]
    pub points_rate: f64,
}

fn default_loyalty_enabled() -> bool {
    true
}
fn default_points_rate() -> f64 {
    0.1
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            enabled: default_loyalty_enabled(),
            points_rate: default_points_rate(),
        }
    }
}

// ─── Promotions Config ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PromotionsConfig {
    #[serde(default = "default_promotions_enabled")]
    pub enabled: bool,
}

fn default_promotions_enabled() -> bool {
    true
}

impl Default for PromotionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_promotions_enabled(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loyalty: LoyaltyConfig::default(),
            promotions: PromotionsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and optional config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("RESTO")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
