pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "mutual-follows")]
#[command(about = "Find mutual followers and following across GitHub users")]
pub struct CliConfig {
    /// Usernames, comma-separated (e.g. `alice,bob`)
    #[arg(value_name = "USERNAMES")]
    pub usernames: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// API base URL (default: https://api.github.com)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Page size requested from the API (1-100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Raw username field, as typed (trimming happens in the resolver).
    pub fn username_input(&self) -> String {
        self.usernames.join(",")
    }

    /// 載入配置檔 (若有)，再套用命令列覆蓋設定
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(base) = &self.api_base {
            settings.api.base_url = base.clone();
        }
        if let Some(per_page) = self.per_page {
            settings.api.per_page = Some(per_page);
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.api.timeout_seconds = Some(timeout);
        }
        if let Some(agent) = &self.user_agent {
            settings.api.user_agent = Some(agent.clone());
        }
        if let Some(format) = self.format {
            settings.output = Some(toml_config::OutputConfig {
                format: Some(format),
            });
        }

        Ok(settings)
    }
}
