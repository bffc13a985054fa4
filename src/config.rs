//! Process configuration
//!
//! All settings come from environment variables and are read exactly once at
//! startup. A missing required variable is fatal. Values may be supplied
//! through a `.env` file, which the binary loads before calling
//! [`Config::from_env`].

use std::time::Duration;

use thiserror::Error;

/// Default GoCardless Bank Account Data endpoint
pub const DEFAULT_BANK_BASE_URL: &str = "https://bankaccountdata.gocardless.com";

/// Default trailing window for booked transactions
pub const DEFAULT_TRANSACTION_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Default settlement currency
pub const DEFAULT_SETTLEMENT_CURRENCY: &str = "EUR";

/// Default notification subject prefix
pub const DEFAULT_SUBJECT_PREFIX: &str = "Pretix Bank Automation";

/// Environment variable names
pub mod keys {
    /// Static bearer token for the bank data API
    pub const NORDIGEN_API_KEY: &str = "NORDIGEN_API_KEY";
    /// Client id for the token exchange
    pub const NORDIGEN_SECRET_ID: &str = "NORDIGEN_SECRET_ID";
    /// Client secret for the token exchange
    pub const NORDIGEN_SECRET_KEY: &str = "NORDIGEN_SECRET_KEY";
    /// Account whose transactions are polled
    pub const NORDIGEN_ACCOUNT_ID: &str = "NORDIGEN_ACCOUNT_ID";
    /// Bank data API base URL
    pub const NORDIGEN_BASE_URL: &str = "NORDIGEN_BASE_URL";
    /// pretix API token
    pub const PRETIX_API_KEY: &str = "PRETIX_API_KEY";
    /// pretix event slug
    pub const PRETIX_EVENT_SLUG: &str = "PRETIX_EVENT_SLUG";
    /// pretix organizer slug
    pub const PRETIX_ORGANIZER_SLUG: &str = "PRETIX_ORGANIZER_SLUG";
    /// pretix host or base URL
    pub const PRETIX_BASE_URL: &str = "PRETIX_BASE_URL";
    /// SMTP relay host
    pub const SMTP_SERVER: &str = "SMTP_SERVER";
    /// SMTP relay port
    pub const SMTP_PORT: &str = "SMTP_PORT";
    /// SMTP user name
    pub const SMTP_USER: &str = "SMTP_USER";
    /// SMTP password
    pub const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
    /// Sender address
    pub const SENDER_MAIL: &str = "SENDER_MAIL";
    /// Comma-separated recipient addresses
    pub const RECIPIENT_MAIL: &str = "RECIPIENT_MAIL";
    /// Pause between runs
    pub const RUN_INTERVAL: &str = "RUN_INTERVAL";
    /// Trailing window for booked transactions
    pub const TRANSACTION_WINDOW: &str = "TRANSACTION_WINDOW";
    /// Currency orders are settled in
    pub const SETTLEMENT_CURRENCY: &str = "SETTLEMENT_CURRENCY";
    /// Per-request timeout for remote calls
    pub const HTTP_TIMEOUT: &str = "HTTP_TIMEOUT";
    /// Notification subject prefix
    pub const MAIL_SUBJECT: &str = "MAIL_SUBJECT";
}

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable is unset or empty
    #[error("environment variable {0} not set")]
    Missing(&'static str),

    /// Duration value could not be parsed
    #[error("invalid duration in {key}: {value:?} ({reason})")]
    InvalidDuration {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },

    /// Any other malformed value
    #[error("invalid value in {key}: {value:?} ({reason})")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// What is wrong with it
        reason: String,
    },
}

/// A string that is never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped value
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// How to authenticate against the bank data API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAuth {
    /// Pre-issued bearer token
    Token(Secret),
    /// Client credentials exchanged for an access token on every fetch
    Credentials {
        /// Client id
        secret_id: String,
        /// Client secret
        secret_key: Secret,
    },
}

/// Bank data provider settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    /// Authentication method
    pub auth: BankAuth,
    /// Account to poll
    pub account_id: String,
    /// API base URL
    pub base_url: String,
}

/// Ticketing system settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketingConfig {
    /// API token
    pub api_key: Secret,
    /// Event slug; also the reference prefix
    pub event_slug: String,
    /// Organizer slug
    pub organizer_slug: String,
    /// Host or base URL; `https://` is assumed when no scheme is given
    pub base_url: String,
}

/// Mail relay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Relay host
    pub server: String,
    /// Relay port
    pub port: u16,
    /// Login user
    pub username: String,
    /// Login password
    pub password: Secret,
    /// Sender address
    pub sender: String,
    /// Recipient addresses
    pub recipients: Vec<String>,
    /// Subject prefix
    pub subject_prefix: String,
}

/// Immutable process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bank data provider
    pub bank: BankConfig,
    /// Ticketing system
    pub ticketing: TicketingConfig,
    /// Mail relay
    pub mail: MailConfig,
    /// Pause between runs
    pub run_interval: Duration,
    /// Trailing window for booked transactions
    pub transaction_window: Duration,
    /// Currency orders are settled in
    pub settlement_currency: String,
    /// Per-request timeout; `None` waits indefinitely
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    ///
    /// Values are trimmed; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let auth = match env.optional(keys::NORDIGEN_API_KEY) {
            Some(token) => BankAuth::Token(Secret::new(token)),
            None => BankAuth::Credentials {
                secret_id: env.required(keys::NORDIGEN_SECRET_ID)?,
                secret_key: Secret::new(env.required(keys::NORDIGEN_SECRET_KEY)?),
            },
        };

        let bank = BankConfig {
            auth,
            account_id: env.required(keys::NORDIGEN_ACCOUNT_ID)?,
            base_url: env
                .optional(keys::NORDIGEN_BASE_URL)
                .unwrap_or_else(|| DEFAULT_BANK_BASE_URL.to_string()),
        };

        let ticketing = TicketingConfig {
            api_key: Secret::new(env.required(keys::PRETIX_API_KEY)?),
            event_slug: env.required(keys::PRETIX_EVENT_SLUG)?,
            organizer_slug: env.required(keys::PRETIX_ORGANIZER_SLUG)?,
            base_url: env.required(keys::PRETIX_BASE_URL)?,
        };

        let port_raw = env.required(keys::SMTP_PORT)?;
        let port = port_raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
            key: keys::SMTP_PORT,
            value: port_raw.clone(),
            reason: e.to_string(),
        })?;

        let recipients_raw = env.required(keys::RECIPIENT_MAIL)?;
        let recipients = split_recipients(&recipients_raw);
        if recipients.is_empty() {
            return Err(ConfigError::Invalid {
                key: keys::RECIPIENT_MAIL,
                value: recipients_raw,
                reason: "no recipient address".to_string(),
            });
        }

        let mail = MailConfig {
            server: env.required(keys::SMTP_SERVER)?,
            port,
            username: env.required(keys::SMTP_USER)?,
            password: Secret::new(env.required(keys::SMTP_PASSWORD)?),
            sender: env.required(keys::SENDER_MAIL)?,
            recipients,
            subject_prefix: env
                .optional(keys::MAIL_SUBJECT)
                .unwrap_or_else(|| DEFAULT_SUBJECT_PREFIX.to_string()),
        };

        let run_interval = parse_duration(keys::RUN_INTERVAL, &env.required(keys::RUN_INTERVAL)?)?;
        let transaction_window = env
            .optional(keys::TRANSACTION_WINDOW)
            .map(|v| parse_duration(keys::TRANSACTION_WINDOW, &v))
            .transpose()?
            .unwrap_or(DEFAULT_TRANSACTION_WINDOW);
        let http_timeout = env
            .optional(keys::HTTP_TIMEOUT)
            .map(|v| parse_duration(keys::HTTP_TIMEOUT, &v))
            .transpose()?;

        let settlement_currency = env
            .optional(keys::SETTLEMENT_CURRENCY)
            .map_or_else(|| DEFAULT_SETTLEMENT_CURRENCY.to_string(), |c| c.to_uppercase());

        Ok(Self {
            bank,
            ticketing,
            mail,
            run_interval,
            transaction_window,
            settlement_currency,
            http_timeout,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &'static str) -> Option<String> {
        (self.lookup)(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }
}

/// Parse a duration such as `24h`, `90m` or `1h 30m`
pub fn parse_duration(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let duration = humantime::parse_duration(value).map_err(|e| ConfigError::InvalidDuration {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if duration.is_zero() {
        return Err(ConfigError::InvalidDuration {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(duration)
}

fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|r| !r.is_empty()).map(ToString::to_string).collect()
}
