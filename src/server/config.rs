//! Environment-based application configuration.
//!
//! The configuration is read once at startup and shared immutably through `AppState`.
//! Secrets have no fallback values: a missing merchant key or mail password stops the
//! process instead of silently running against someone else's account.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_PAYU_BASE_URL: &str = "https://secure.payu.in";
const DEFAULT_PAYU_VERIFY_URL: &str = "https://info.payu.in/merchant/postservice.php?form=2";
const DEFAULT_PAYU_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 30 * 60;
const DEFAULT_STALE_AFTER_SECS: u64 = 60 * 60;

/// Payment gateway credentials and endpoints.
#[derive(Debug, Clone)]
pub struct PayuConfig {
    pub merchant_key: String,
    pub merchant_salt: String,
    /// Base of the hosted payment page; the checkout form posts to `<base>/_payment`.
    pub base_url: String,
    /// Server-to-server `verify_payment` endpoint.
    pub verify_url: String,
    /// Upper bound on a single verification round-trip.
    pub timeout: Duration,
}

/// Outbound mail relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Full From header, e.g. `Retreat <admin@example.com>`.
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,

    pub payu: PayuConfig,
    pub smtp: SmtpConfig,

    /// Front-end origin the payer is redirected to after reconciliation.
    pub frontend_base_url: String,
    /// Public origin of this service, used to build gateway callback URLs.
    pub admin_base_url: String,

    pub booking_sweep_interval: Duration,
    pub booking_stale_after: Duration,
}

impl Config {
    /// Builds the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, or `None` when unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        Ok(Self {
            database_url: env.required("DATABASE_URL")?,
            server_addr: env.parsed("SERVER_ADDR", DEFAULT_SERVER_ADDR.parse().ok())?,
            payu: PayuConfig {
                merchant_key: env.required("PAYU_MERCHANT_KEY")?,
                merchant_salt: env.required("PAYU_MERCHANT_SALT")?,
                base_url: env.url("PAYU_BASE_URL", Some(DEFAULT_PAYU_BASE_URL))?,
                verify_url: env.url("PAYU_VERIFY_URL", Some(DEFAULT_PAYU_VERIFY_URL))?,
                timeout: env.seconds("PAYU_TIMEOUT_SECS", DEFAULT_PAYU_TIMEOUT_SECS)?,
            },
            smtp: SmtpConfig {
                host: env.required("SMTP_HOST")?,
                port: env.parsed("SMTP_PORT", Some(DEFAULT_SMTP_PORT))?,
                username: env.required("SMTP_USERNAME")?,
                password: env.required("SMTP_PASSWORD")?,
                from: env.required("EMAIL_FROM")?,
            },
            frontend_base_url: env.url("FRONTEND_BASE_URL", None)?,
            admin_base_url: env.url("ADMIN_BASE_URL", None)?,
            booking_sweep_interval: env
                .seconds("BOOKING_SWEEP_INTERVAL_SECS", DEFAULT_SWEEP_INTERVAL_SECS)?,
            booking_stale_after: env
                .seconds("BOOKING_STALE_AFTER_SECS", DEFAULT_STALE_AFTER_SECS)?,
        })
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parsed<T>(&self, name: &str, default: Option<T>) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
            None => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
        }
    }

    /// Reads a strictly positive number of seconds.
    fn seconds(&self, name: &str, default: u64) -> Result<Duration, ConfigError> {
        let secs: u64 = self.parsed(name, Some(default))?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(Duration::from_secs(secs))
    }

    /// Reads an absolute http(s) URL and strips any trailing slash.
    fn url(&self, name: &str, default: Option<&str>) -> Result<String, ConfigError> {
        let raw = match self.get(name) {
            Some(raw) => raw,
            None => default
                .map(str::to_string)
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?,
        };

        let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(raw.trim().trim_end_matches('/').to_string())
    }
}
