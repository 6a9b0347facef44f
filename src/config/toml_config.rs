use crate::core::Testimonial;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub menu: MenuConfig,
    pub theme: ThemeConfig,
    pub carousel: CarouselConfig,
    pub reservation: ReservationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Restaurant".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub data_path: String,
    /// Tab order; derived from the data when absent.
    pub categories: Option<Vec<String>>,
    /// Filter chips; derived from the data when absent.
    pub filters: Option<Vec<String>>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            data_path: "menu_data.json".to_string(),
            categories: None,
            filters: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub state_dir: String,
    pub system_prefers_dark: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            state_dir: ".restaurant-site".to_string(),
            system_prefers_dark: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_seconds: u64,
    pub testimonials: Vec<Testimonial>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_seconds: 5,
            testimonials: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
    pub simulate_delay_ms: u64,
    pub button_label: String,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 10,
            simulate_delay_ms: 1500,
            button_label: crate::core::reservation::DEFAULT_IDLE_LABEL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        if self.carousel.testimonials.is_empty() {
            Testimonial::defaults()
        } else {
            self.carousel.testimonials.clone()
        }
    }

    pub fn autoplay_period(&self) -> Duration {
        Duration::from_secs(self.carousel.autoplay_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.reservation.timeout_seconds)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.reservation.simulate_delay_ms)
    }

    /// Configured endpoint, `None` while unset or still the template placeholder.
    pub fn reservation_endpoint(&self) -> Option<&str> {
        self.reservation
            .endpoint
            .as_deref()
            .filter(|url| !crate::core::reservation::is_unconfigured(Some(url)))
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_path("menu.data_path", &self.menu.data_path)?;
        validation::validate_path("theme.state_dir", &self.theme.state_dir)?;

        if let Some(categories) = &self.menu.categories {
            if categories.is_empty() {
                return Err(SiteError::MissingConfigError {
                    field: "menu.categories".to_string(),
                });
            }
            validation::validate_unique("menu.categories", categories)?;
        }
        if let Some(filters) = &self.menu.filters {
            validation::validate_unique("menu.filters", filters)?;
        }

        validation::validate_positive_number(
            "carousel.autoplay_seconds",
            self.carousel.autoplay_seconds,
            1,
        )?;
        validation::validate_range(
            "reservation.timeout_seconds",
            self.reservation.timeout_seconds,
            1,
            300,
        )?;
        validation::validate_non_empty_string(
            "reservation.button_label",
            &self.reservation.button_label,
        )?;

        if let Some(url) = self.reservation_endpoint() {
            validation::validate_url("reservation.endpoint", url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.menu.data_path, "menu_data.json");
        assert_eq!(config.autoplay_period(), Duration::from_secs(5));
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
        assert_eq!(config.testimonials().len(), 3);
        assert!(config.reservation_endpoint().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
name = "Spice Route"

[menu]
data_path = "data/menu.json"
categories = ["starters", "mains", "desserts"]
filters = ["vegan", "spicy"]

[theme]
state_dir = "/tmp/site-state"
system_prefers_dark = true

[carousel]
autoplay_seconds = 8

[[carousel.testimonials]]
text = "Lovely."
author = "A. Guest"

[reservation]
endpoint = "https://script.example.com/exec"
timeout_seconds = 5
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.name, "Spice Route");
        assert_eq!(config.menu.categories.as_ref().unwrap().len(), 3);
        assert!(config.theme.system_prefers_dark);
        assert_eq!(config.testimonials().len(), 1);
        assert_eq!(
            config.reservation_endpoint(),
            Some("https://script.example.com/exec")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SITE_TEST_RESERVATION_URL", "https://test.example.com/exec");

        let toml_content = r#"
[reservation]
endpoint = "${SITE_TEST_RESERVATION_URL}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.reservation.endpoint.as_deref(),
            Some("https://test.example.com/exec")
        );

        std::env::remove_var("SITE_TEST_RESERVATION_URL");
    }

    #[test]
    fn test_placeholder_endpoint_means_simulation() {
        let config = SiteConfig::from_toml_str(
            r#"
[reservation]
endpoint = "REPLACE_WITH_YOUR_GOOGLE_SCRIPT_URL"
"#,
        )
        .unwrap();
        assert!(config.reservation_endpoint().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let bad_url = SiteConfig::from_toml_str(
            r#"
[reservation]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let zero_autoplay = SiteConfig::from_toml_str(
            r#"
[carousel]
autoplay_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_autoplay.validate().is_err());

        let duplicate_tabs = SiteConfig::from_toml_str(
            r#"
[menu]
categories = ["mains", "mains"]
"#,
        )
        .unwrap();
        assert!(duplicate_tabs.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        assert!(matches!(
            SiteConfig::from_toml_str("[menu\ndata_path ="),
            Err(SiteError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nname = \"File Bistro\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "File Bistro");
    }
}
