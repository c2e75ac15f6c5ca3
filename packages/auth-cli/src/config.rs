use anyhow::{bail, Context, Result};
use auth_flow::AuthMethod;
use dotenvy::dotenv;
use std::env;

const DEFAULT_METHODS: &str = "pin,touch-id,face-id";

/// Upper bound on attempts per method; every attempt is kept for the report
pub const MAX_REPEAT: u32 = 10_000;

/// Demo configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub methods: Vec<AuthMethod>,
    pub repeat: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let methods = lookup("AUTH_METHODS").unwrap_or_else(|| DEFAULT_METHODS.to_string());
        let methods = AuthMethod::parse_list(&methods).context("AUTH_METHODS is invalid")?;

        let repeat = parse_repeat(
            &lookup("AUTH_REPEAT").unwrap_or_else(|| "1".to_string()),
        )
        .context("AUTH_REPEAT must be a positive number")?;

        Ok(Self { methods, repeat })
    }
}

/// Parse a repeat count in `1..=MAX_REPEAT`
pub fn parse_repeat(value: &str) -> Result<u32> {
    let repeat: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("not a number: {value:?}"))?;

    if repeat == 0 {
        bail!("repeat count must be at least 1");
    }
    if repeat > MAX_REPEAT {
        bail!("repeat count must be at most {MAX_REPEAT}, got {repeat}");
    }

    Ok(repeat)
}
