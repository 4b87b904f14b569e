use crate::config::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MutualError, Result};
use crate::utils::validation::{validate_api_settings, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("mutual-follows/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub per_page: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: None,
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MutualError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MutualError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_API_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MutualError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn per_page(&self) -> u32 {
        self.api.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.api.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_api_settings(self)
    }
}
