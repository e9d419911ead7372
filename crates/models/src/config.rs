//! Resolver configuration

use crate::error::Result;
use crate::version::FhirVersion;

/// Configuration loaded from environment variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Release used when a caller does not name one
    pub default_version: FhirVersion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_version: FhirVersion::R4,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset variables keep their default.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(version) = lookup("FHIR_VERSION").filter(|v| !v.trim().is_empty()) {
            config.default_version = version.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FhirError;

    #[test]
    fn defaults_to_r4() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config.default_version, FhirVersion::R4);

        let config = Config::from_vars(|_| Some("  ".into())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_fhir_version() {
        let config =
            Config::from_vars(|key| (key == "FHIR_VERSION").then(|| "5.0.0".to_string())).unwrap();
        assert_eq!(config.default_version, FhirVersion::R5);
    }

    #[test]
    fn rejects_unsupported_versions() {
        let err = Config::from_vars(|_| Some("R6".into())).unwrap_err();
        assert!(matches!(err, FhirError::InvalidVersion(ref v) if v == "R6"));
    }
}
