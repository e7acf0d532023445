use std::{env, fmt};
use thiserror::Error;

pub const SMTP_USERNAME_VAR: &str = "UPTIMECHECK_SMTP_USERNAME";
pub const SMTP_PASSWORD_VAR: &str = "UPTIMECHECK_SMTP_PASSWORD";
pub const SMTP_HOST_VAR: &str = "UPTIMECHECK_SMTP_HOST";
pub const SMTP_PORT_VAR: &str = "UPTIMECHECK_SMTP_PORT";

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Error, Debug, PartialEq)]
pub enum EnvError {
    #[error("Please specify the environment variable {0}")]
    MissingVariable(&'static str),
    #[error("Invalid SMTP port: {0}")]
    InvalidPort(String),
}

pub struct Config {
    pub smtp: SmtpConfig,
}

impl Config {
    /// Reads the runtime configuration from the environment.
    pub fn from_env() -> Result<Self, EnvError> {
        let username = required_var(SMTP_USERNAME_VAR)?;
        let password = required_var(SMTP_PASSWORD_VAR)?;
        let host = env::var(SMTP_HOST_VAR)
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let port = match env::var(SMTP_PORT_VAR) {
            Ok(p) if !p.trim().is_empty() => p
                .trim()
                .parse()
                .map_err(|_| EnvError::InvalidPort(p.clone()))?,
            _ => DEFAULT_SMTP_PORT,
        };

        Ok(Config {
            smtp: SmtpConfig {
                username,
                password,
                host,
                port,
            },
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").field("smtp", &self.smtp).finish()
    }
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

// The password never ends up in the logs.
impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn required_var(name: &'static str) -> Result<String, EnvError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(EnvError::MissingVariable(name))
}
