use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

static CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::from_env);

/// Engine defaults, overridable through the environment. Distinct from
/// `model::Settings`, which is organization data supplied per call.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub default_per_page: u32,
    pub default_chart_days: u32,
    pub default_chart_months: u32,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            default_per_page: env::var("DEFAULT_PER_PAGE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            default_chart_days: env::var("CHART_WINDOW_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            default_chart_months: env::var("CHART_WINDOW_MONTHS")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .unwrap_or(6),
        }
    }

    pub fn global() -> &'static EngineConfig {
        &CONFIG
    }
}
