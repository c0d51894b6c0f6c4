//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across screens.
pub struct OfficeConfig {
    /// Base URL of the back-office REST API.
    pub api_base_url: String,
    /// Rows per page on list screens.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl OfficeConfig {
    /// Loads configuration from an optional file, layered under
    /// `TMS_`-prefixed environment variables.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("TMS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_per_page_defaults_when_absent() {
        let cfg: OfficeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example.com"}"#).unwrap();
        assert_eq!(cfg.items_per_page, DEFAULT_ITEMS_PER_PAGE);

        let cfg: OfficeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example.com","items_per_page":25}"#)
                .unwrap();
        assert_eq!(cfg.items_per_page, 25);
    }

    #[test]
    fn missing_api_base_url_is_an_error() {
        let result = serde_json::from_str::<OfficeConfig>(r#"{"items_per_page":25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn environment_layers_over_the_file_and_defaults_fill_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("office.yaml");
        std::fs::write(
            &path,
            "api_base_url: https://file.example.com\nitems_per_page: 25\n",
        )
        .unwrap();

        // Env mutation is process-global; this is the only test touching
        // TMS_ variables.
        unsafe { std::env::set_var("TMS_API_BASE_URL", "https://env.example.com") };
        let layered = OfficeConfig::load(path.to_str().unwrap()).unwrap();
        let env_only =
            OfficeConfig::load(dir.path().join("absent.yaml").to_str().unwrap()).unwrap();
        unsafe { std::env::remove_var("TMS_API_BASE_URL") };

        // The environment wins over the file; untouched keys come through.
        assert_eq!(layered.api_base_url, "https://env.example.com");
        assert_eq!(layered.items_per_page, 25);

        // A missing file is not an error; env plus defaults carry it.
        assert_eq!(env_only.api_base_url, "https://env.example.com");
        assert_eq!(env_only.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }
}
