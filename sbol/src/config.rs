//! Identifier configuration.
//!
//! Every identifier computation takes an explicit [`Config`]. The process-wide
//! default returned by [`current`] and changed by [`set_homespace`] /
//! [`set_option`] is only a convenience for callers that do not want to thread
//! a configuration through their code.

use std::sync::{OnceLock, PoisonError, RwLock};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Homespace used when none is configured.
pub const DEFAULT_HOMESPACE: &str = "http://examples.org";

/// Option name enabling compliant URIs (`homespace/displayId/version`).
pub const SBOL_COMPLIANT_URIS: &str = "sbol_compliant_uris";

/// Option name embedding the entity class in generated top-level URIs.
pub const SBOL_TYPED_URIS: &str = "sbol_typed_uris";

/// Settings consulted by the identifier resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URI under which new identities are minted. Stored without a
    /// trailing `/`.
    pub homespace: String,
    /// Derive `displayId`, `persistentIdentity` and `version` into the identity.
    #[serde(rename = "sbol_compliant_uris")]
    pub compliant_uris: bool,
    /// Insert the class name (e.g. `ComponentDefinition`) after the homespace.
    #[serde(rename = "sbol_typed_uris")]
    pub typed_uris: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homespace: DEFAULT_HOMESPACE.to_string(),
            compliant_uris: true,
            typed_uris: true,
        }
    }
}

impl Config {
    /// Creates a configuration with the given homespace and default options.
    #[must_use]
    pub fn new(homespace: &str) -> Self {
        Self::default().with_homespace(homespace)
    }

    /// Returns a copy with the homespace replaced.
    #[must_use]
    pub fn with_homespace(mut self, homespace: &str) -> Self {
        self.homespace = normalize_homespace(homespace);
        self
    }

    /// Returns a copy with compliant URIs switched on or off.
    #[must_use]
    pub fn compliant(mut self, on: bool) -> Self {
        self.compliant_uris = on;
        self
    }

    /// Returns a copy with typed URIs switched on or off.
    #[must_use]
    pub fn typed(mut self, on: bool) -> Self {
        self.typed_uris = on;
        self
    }

    /// Sets a named boolean option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown option name.
    pub fn set_option(&mut self, name: &str, value: bool) -> Result<()> {
        match name {
            SBOL_COMPLIANT_URIS => self.compliant_uris = value,
            SBOL_TYPED_URIS => self.typed_uris = value,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown configuration option {other}"
                )))
            }
        }
        Ok(())
    }

    /// Reads a named boolean option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown option name.
    pub fn get_option(&self, name: &str) -> Result<bool> {
        match name {
            SBOL_COMPLIANT_URIS => Ok(self.compliant_uris),
            SBOL_TYPED_URIS => Ok(self.typed_uris),
            other => Err(Error::InvalidArgument(format!(
                "unknown configuration option {other}"
            ))),
        }
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// ```
    /// let config = sbol::Config::from_toml(
    ///     "homespace = \"http://sbols.org/CRISPR_Example/\"\nsbol_typed_uris = false",
    /// )
    /// .unwrap();
    /// assert_eq!(config.homespace, "http://sbols.org/CRISPR_Example");
    /// assert!(config.compliant_uris);
    /// assert!(!config.typed_uris);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the text is not valid TOML for
    /// this structure.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        let homespace = config.homespace.clone();
        Ok(config.with_homespace(&homespace))
    }
}

fn normalize_homespace(homespace: &str) -> String {
    homespace.trim_end_matches('/').to_string()
}

fn global() -> &'static RwLock<Config> {
    static GLOBAL: OnceLock<RwLock<Config>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(Config::default()))
}

/// Returns a snapshot of the process-wide default configuration.
#[must_use]
pub fn current() -> Config {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide default configuration.
pub fn replace(config: Config) {
    *global().write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Sets the homespace of the process-wide default configuration.
pub fn set_homespace(homespace: &str) {
    let mut guard = global().write().unwrap_or_else(PoisonError::into_inner);
    guard.homespace = normalize_homespace(homespace);
}

/// Returns the homespace of the process-wide default configuration.
#[must_use]
pub fn homespace() -> String {
    current().homespace
}

/// Sets a named option on the process-wide default configuration.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an unknown option name.
pub fn set_option(name: &str, value: bool) -> Result<()> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_option(name, value)
}

/// Reads a named option from the process-wide default configuration.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an unknown option name.
pub fn get_option(name: &str) -> Result<bool> {
    current().get_option(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serial_test::serial;

    #[test]
    fn defaults_are_compliant_and_typed() {
        let config = Config::default();
        assert_eq!(config.homespace, DEFAULT_HOMESPACE);
        assert!(config.compliant_uris);
        assert!(config.typed_uris);
    }

    #[test]
    fn homespace_trailing_slash_is_dropped() {
        let config = Config::new("http://sbols.org/CRISPR_Example/");
        assert_eq!(config.homespace, "http://sbols.org/CRISPR_Example");
    }

    #[test]
    fn named_options_round_trip() {
        let mut config = Config::default();
        config.set_option(SBOL_TYPED_URIS, false).unwrap();
        assert!(!config.get_option(SBOL_TYPED_URIS).unwrap());
        let err = config.set_option("sbol_unknown", true).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn bad_toml_is_rejected() {
        let err = Config::from_toml("homespace = ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    #[serial]
    fn global_wrappers_update_the_default() {
        let saved = current();
        set_homespace("http://sbols.org/CRISPR_Example/");
        set_option(SBOL_COMPLIANT_URIS, false).unwrap();
        assert_eq!(homespace(), "http://sbols.org/CRISPR_Example");
        assert!(!get_option(SBOL_COMPLIANT_URIS).unwrap());
        replace(saved.clone());
        assert_eq!(current(), saved);
    }
}
