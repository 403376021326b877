//! Engine runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! the engine, rather than read from the environment during request
//! handling, which behaves inconsistently in multi-threaded runtimes and
//! test harnesses.

use crate::{EngineError, EngineResult};

/// Environment variable that overrides the displayed currency code.
pub const CURRENCY_ENV_VAR: &str = "CLINIC_CURRENCY";

/// Currency code used when the environment does not provide one.
pub const DEFAULT_CURRENCY_CODE: &str = "KES";

const MAX_CURRENCY_CODE_LEN: usize = 8;

/// Engine configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    currency_code: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with the given currency code.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if the code is empty, longer
    /// than eight characters, or not ASCII alphabetic.
    pub fn new(currency_code: impl Into<String>) -> EngineResult<Self> {
        let currency_code = currency_code.into();
        validate_currency_code(&currency_code)?;
        Ok(Self { currency_code })
    }

    /// Resolve configuration from the process environment, falling back
    /// to [`DEFAULT_CURRENCY_CODE`] when `CLINIC_CURRENCY` is unset or
    /// blank.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if a set `CLINIC_CURRENCY`
    /// value fails validation.
    pub fn from_env() -> EngineResult<Self> {
        currency_code_from_env_value(std::env::var(CURRENCY_ENV_VAR).ok()).map(|currency_code| {
            Self { currency_code }
        })
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

/// Parse the currency code from an optional environment value.
///
/// `None` or empty/whitespace values fall back to the default; anything
/// else must pass validation.
pub fn currency_code_from_env_value(value: Option<String>) -> EngineResult<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(code) => {
            validate_currency_code(&code)?;
            Ok(code)
        }
        None => Ok(DEFAULT_CURRENCY_CODE.to_string()),
    }
}

fn validate_currency_code(code: &str) -> EngineResult<()> {
    if code.trim().is_empty() {
        return Err(EngineError::InvalidConfig(
            "currency code cannot be empty".into(),
        ));
    }

    if code.len() > MAX_CURRENCY_CODE_LEN {
        return Err(EngineError::InvalidConfig(format!(
            "currency code exceeds maximum length of {} characters",
            MAX_CURRENCY_CODE_LEN
        )));
    }

    if !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::InvalidConfig(
            "currency code must contain only ASCII letters".into(),
        ));
    }

    Ok(())
}
