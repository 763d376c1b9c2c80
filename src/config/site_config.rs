use crate::core::catalog::{self, Catalog, DEFAULT_GUIDE_ID};
use crate::core::rate_limiter::DEFAULT_COOLDOWN_MS;
use crate::domain::model::{CompanyInfo, GuideEntry, LevelEntry, TourEntry};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Site-level settings: company details, the tour/level/guide tables and the
/// WhatsApp link behaviour. Every section is optional in the file and falls
/// back to the built-in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "catalog::builtin_company")]
    pub company: CompanyInfo,
    #[serde(default = "catalog::builtin_tours")]
    pub tours: BTreeMap<String, TourEntry>,
    #[serde(default = "catalog::builtin_levels")]
    pub levels: BTreeMap<String, LevelEntry>,
    #[serde(default = "catalog::builtin_guides")]
    pub guides: BTreeMap<String, GuideEntry>,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    #[serde(default = "default_guide_id")]
    pub default_guide: String,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

fn default_guide_id() -> String {
    DEFAULT_GUIDE_ID.to_string()
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            default_guide: default_guide_id(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: catalog::builtin_company(),
            tours: catalog::builtin_tours(),
            levels: catalog::builtin_levels(),
            guides: catalog::builtin_guides(),
            whatsapp: WhatsAppConfig::default(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GUIDE_PHONE})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ContactError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.whatsapp.cooldown_ms)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(
            self.company.clone(),
            self.tours.clone(),
            self.levels.clone(),
            self.guides.clone(),
            &self.whatsapp.default_guide,
        )
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("company.name", &self.company.name)?;
        validation::validate_non_empty_string("company.website", &self.company.website)?;
        validation::validate_phone_digits("company.main_phone", &self.company.main_phone)?;

        if !self.guides.contains_key(&self.whatsapp.default_guide) {
            return Err(ContactError::InvalidConfigValueError {
                field: "whatsapp.default_guide".to_string(),
                value: self.whatsapp.default_guide.clone(),
                reason: "No guide is configured under this id".to_string(),
            });
        }

        for (id, guide) in &self.guides {
            validation::validate_non_empty_string(&format!("guides.{}.name", id), &guide.name)?;
            validation::validate_phone_digits(&format!("guides.{}.phone", id), &guide.phone)?;
        }

        for (id, tour) in &self.tours {
            validation::validate_non_empty_string(&format!("tours.{}.name", id), &tour.name)?;
            if !self.guides.contains_key(id) {
                tracing::warn!(
                    "Tour '{}' has no dedicated guide, inquiries go to '{}'",
                    id,
                    self.whatsapp.default_guide
                );
            }
        }

        validation::validate_range("whatsapp.cooldown_ms", self.whatsapp.cooldown_ms, 1, 60_000)?;

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
