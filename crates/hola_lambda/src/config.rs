//! Cold-start configuration read from the process environment.
//!
//! The handler itself takes no configuration; only log output is tunable.
//! Verbosity follows `RUST_LOG` and is handled by [`crate::telemetry`].

pub const LOG_FORMAT_ENV: &str = "HOLA_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parses a raw environment value. Missing or blank values select the default.
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };

        match raw.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unsupported {LOG_FORMAT_ENV} '{raw}' (expected text or json)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaConfig {
    pub log_format: LogFormat,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let log_format = LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref())?;
        Ok(Self { log_format })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: BTreeMap<String, String> = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| env.get(key).cloned()
    }

    #[test]
    fn defaults_to_text_when_unset() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).expect("config should load");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        assert_eq!(LogFormat::parse(Some("   ")), Ok(LogFormat::Text));
    }

    #[test]
    fn accepts_json_case_insensitively() {
        let config = LambdaConfig::from_lookup(lookup_from(&[("HOLA_LOG_FORMAT", " JSON ")]))
            .expect("config should load");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let error = LambdaConfig::from_lookup(lookup_from(&[("HOLA_LOG_FORMAT", "yaml")]))
            .expect_err("unknown format should fail");

        assert!(error.contains("Unsupported HOLA_LOG_FORMAT 'yaml'"));
    }
}
