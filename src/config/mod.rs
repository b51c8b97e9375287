//! Site configuration for Folio.
//!
//! Configuration lives in `config.toml` inside the data directory:
//!
//! ```toml
//! admin-email = "me@example.com"
//! base-url = "https://example.com"
//! sendmail-program = "/usr/sbin/sendmail"
//! ```
//!
//! Three keys drive the notifier: the admin address notifications go to,
//! the site base URL used for the deep link in the HTML body, and the
//! sendmail-compatible program the transport pipes to.
//!
//! ## Precedence
//!
//! Environment > config file > built-in defaults:
//! - `FOLIO_ADMIN_EMAIL` > `admin-email` > `webmaster@localhost`
//! - `FOLIO_BASE_URL` > `base-url` > `http://localhost:8000`
//! - `FOLIO_SENDMAIL` > `sendmail-program` > `/usr/sbin/sendmail`

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Fallback recipient when no admin address is configured.
pub const DEFAULT_ADMIN_EMAIL: &str = "webmaster@localhost";

/// Fallback site base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fallback sendmail program path.
pub const DEFAULT_SENDMAIL: &str = "/usr/sbin/sendmail";

/// User-editable settings stored in config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Recipient for contact notifications
    pub admin_email: Option<String>,

    /// Public base URL of the site, without a trailing path
    pub base_url: Option<String>,

    /// Sendmail-compatible program used for delivery
    pub sendmail_program: Option<String>,
}

impl SiteConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the config file from the data directory.
    ///
    /// A missing file is not an error; it reads as an empty config.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(&path)?;
        let config: SiteConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Validate the config values.
    ///
    /// Returns an error message if any value is invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref email) = self.admin_email {
            if !email.contains('@') || !email.contains('.') {
                return Err(format!("admin-email does not look like an address: {}", email));
            }
        }
        if let Some(ref url) = self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("base-url must be an http(s) URL: {}", url));
            }
        }
        Ok(())
    }
}

/// Fully resolved configuration with every value filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Recipient for contact notifications
    pub admin_email: String,

    /// Public base URL of the site
    pub base_url: String,

    /// Sendmail-compatible program used for delivery
    pub sendmail_program: String,
}

/// Resolve the effective configuration for a data directory.
pub fn resolve(data_dir: &Path) -> Result<ResolvedConfig> {
    let file = SiteConfig::load(data_dir)?;
    file.validate().map_err(Error::InvalidInput)?;
    Ok(resolve_with(file, |key| env::var(key).ok()))
}

/// Resolve with an explicit environment lookup (testable precedence).
fn resolve_with(file: SiteConfig, env_var: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    ResolvedConfig {
        admin_email: env_var("FOLIO_ADMIN_EMAIL")
            .or(file.admin_email)
            .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
        base_url: env_var("FOLIO_BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        sendmail_program: env_var("FOLIO_SENDMAIL")
            .or(file.sendmail_program)
            .unwrap_or_else(|| DEFAULT_SENDMAIL.to_string()),
    }
}
