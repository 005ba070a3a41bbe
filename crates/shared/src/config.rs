//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream rate provider configuration.
    #[serde(default)]
    pub rates: RatesConfig,
    /// Commission tiers and broker defaults.
    #[serde(default)]
    pub commission: CommissionConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Verbose logging.
    #[serde(default)]
    pub debug: bool,
    /// Directory holding the calculator UI.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Which upstream supplies live rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateProviderKind {
    /// Binance spot ticker API.
    #[default]
    Binance,
    /// Constant rates from configuration.
    Fixed,
}

/// Upstream rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Provider selection.
    #[serde(default)]
    pub provider: RateProviderKind,
    /// Base URL of the ticker API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Ticker symbol quoting THB per USDT.
    #[serde(default = "default_usdt_thb_symbol")]
    pub usdt_thb_symbol: String,
    /// Ticker symbol quoting RUB per USDT.
    #[serde(default = "default_rub_usdt_symbol")]
    pub rub_usdt_symbol: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// USDT/THB served by the fixed provider.
    #[serde(default = "default_fixed_usdt_thb")]
    pub fixed_usdt_thb: Decimal,
    /// RUB/USDT served by the fixed provider.
    #[serde(default = "default_fixed_rub_usdt")]
    pub fixed_rub_usdt: Decimal,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider: RateProviderKind::default(),
            base_url: default_base_url(),
            usdt_thb_symbol: default_usdt_thb_symbol(),
            rub_usdt_symbol: default_rub_usdt_symbol(),
            timeout_secs: default_timeout_secs(),
            fixed_usdt_thb: default_fixed_usdt_thb(),
            fixed_rub_usdt: default_fixed_rub_usdt(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.binance.com".to_string()
}

fn default_usdt_thb_symbol() -> String {
    "USDTTHB".to_string()
}

fn default_rub_usdt_symbol() -> String {
    "USDTRUB".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_fixed_usdt_thb() -> Decimal {
    Decimal::new(3116, 2) // 31.16
}

fn default_fixed_rub_usdt() -> Decimal {
    Decimal::new(842_271, 4) // 84.2271
}

/// Commission configuration, all values in percent.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// Fee deducted in doverka mode.
    #[serde(default = "default_doverka_percent")]
    pub doverka_percent: Decimal,
    /// Broker spread for the `high` tier.
    #[serde(default = "default_high_percent")]
    pub high_percent: Decimal,
    /// Broker spread for the `medium` tier.
    #[serde(default = "default_medium_percent")]
    pub medium_percent: Decimal,
    /// Broker spread for the `low` tier.
    #[serde(default = "default_low_percent")]
    pub low_percent: Decimal,
    /// RUB/USDT used when a broker request omits `custom_rub_usdt`.
    #[serde(default = "default_rub_usdt")]
    pub default_rub_usdt: Decimal,
    /// Tier used when a broker request omits `commission_level`.
    #[serde(default = "default_level")]
    pub default_level: String,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            doverka_percent: default_doverka_percent(),
            high_percent: default_high_percent(),
            medium_percent: default_medium_percent(),
            low_percent: default_low_percent(),
            default_rub_usdt: default_rub_usdt(),
            default_level: default_level(),
        }
    }
}

fn default_doverka_percent() -> Decimal {
    Decimal::new(25, 1)
}

fn default_high_percent() -> Decimal {
    Decimal::new(3, 0)
}

fn default_medium_percent() -> Decimal {
    Decimal::new(2, 0)
}

fn default_low_percent() -> Decimal {
    Decimal::new(1, 0)
}

fn default_rub_usdt() -> Decimal {
    Decimal::new(809, 1) // 80.9
}

fn default_level() -> String {
    "medium".to_string()
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// `PORT` and `FLASK_ENV=development` are honored on top of the
    /// `EXCALC__SECTION__KEY` variables so existing deployments keep working.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let port = std::env::var("PORT").ok();
        let debug = std::env::var("FLASK_ENV")
            .ok()
            .map(|env| env == "development");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("EXCALC").separator("__"))
            .set_override_option("server.port", port)?
            .set_override_option("server.debug", debug)?
            .build()?;

        config.try_deserialize()
    }
}
