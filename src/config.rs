use std::env;

use anyhow::Result;

use crate::output::OutputFormat;

/// CLI defaults loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags always win over these values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default output format (DOCTERM_FORMAT: "table" or "json")
    pub format: OutputFormat,
    /// Drop English stop words unless told otherwise (DOCTERM_STOP_WORDS)
    pub stop_words: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set-but-invalid ones are errors
    /// so a typo doesn't silently change the output.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env vars in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("DOCTERM_FORMAT") {
            Some(raw) => OutputFormat::from_name(&raw).ok_or_else(|| {
                anyhow::anyhow!("DOCTERM_FORMAT must be \"table\" or \"json\", got {raw:?}")
            })?,
            None => OutputFormat::default(),
        };

        let stop_words = match lookup("DOCTERM_STOP_WORDS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                anyhow::anyhow!("DOCTERM_STOP_WORDS must be a boolean (1/0, true/false), got {raw:?}")
            })?,
            None => false,
        };

        Ok(Self { format, stop_words })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DOCTERM_FORMAT", "JSON"),
            ("DOCTERM_STOP_WORDS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.stop_words);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("DOCTERM_FORMAT", "csv")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DOCTERM_STOP_WORDS", "maybe")])).is_err());
    }
}
