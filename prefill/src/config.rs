//! Prefill configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_MAX_COUNT: u64 = 15;
const DEFAULT_RECORD_COUNT: u64 = 5;
const DEFAULT_API_URL: &str = "https://loripsum.net/api";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

fn default_lexicon_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("lexicon.json")
}

/// Configuration values controlling prefill runs.
///
/// Environment variables carry string values; numeric settings such as
/// `PREFILL_MAX_COUNT=7` are coerced to integers during loading.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PREFILL")]
pub struct PrefillSettings {
    /// Soft ceiling on existing records per content type.
    pub max_count: Option<u64>,
    /// Records to request per content type when the caller gives no count.
    pub count: Option<u64>,
    /// Remote placeholder-content endpoint.
    pub api_url: Option<String>,
    /// Request timeout for the remote generator, in seconds.
    pub timeout_seconds: Option<u64>,
    /// Optional lexicon path override for the local demo generator.
    pub lexicon_path: Option<PathBuf>,
}

impl PrefillSettings {
    /// Returns the configured ceiling, falling back to the default.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.max_count.unwrap_or(DEFAULT_MAX_COUNT)
    }

    /// Returns the configured per-type count, falling back to the default.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(DEFAULT_RECORD_COUNT)
    }

    /// Returns the configured endpoint, falling back to the default.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Returns the remote generator timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Returns the configured lexicon path, falling back to the bundled one.
    #[must_use]
    pub fn lexicon_path(&self) -> PathBuf {
        self.lexicon_path.clone().unwrap_or_else(default_lexicon_path)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for prefill configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> PrefillSettings {
        PrefillSettings::load_from_iter([OsString::from("prefill")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PREFILL_MAX_COUNT", None::<String>),
            ("PREFILL_COUNT", None::<String>),
            ("PREFILL_API_URL", None::<String>),
            ("PREFILL_TIMEOUT_SECONDS", None::<String>),
            ("PREFILL_LEXICON_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.max_count(), DEFAULT_MAX_COUNT);
        assert_eq!(settings.count(), DEFAULT_RECORD_COUNT);
        assert_eq!(settings.api_url(), DEFAULT_API_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(settings.lexicon_path(), default_lexicon_path());
    }

    #[rstest]
    fn environment_overrides_coerce_numeric_strings() {
        let _guard = lock_env([
            ("PREFILL_MAX_COUNT", Some("7".to_owned())),
            ("PREFILL_COUNT", Some("2".to_owned())),
            ("PREFILL_API_URL", Some("http://localhost:9999".to_owned())),
            ("PREFILL_TIMEOUT_SECONDS", Some("3".to_owned())),
            ("PREFILL_LEXICON_PATH", Some("/tmp/lexicon.json".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.max_count(), 7);
        assert_eq!(settings.count(), 2);
        assert_eq!(settings.api_url(), "http://localhost:9999");
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.lexicon_path(), PathBuf::from("/tmp/lexicon.json"));
    }
}
