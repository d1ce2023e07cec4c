use super::consts::{self, format};
use crate::error::{CommitlogError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// commitlog.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Report generated after a commit
    #[serde(default)]
    pub log: TemplateConfig,
    /// Commit comment generation
    #[serde(default)]
    pub comment: TemplateConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Inline template text; wins over `template_file`
    #[serde(default)]
    pub template: Option<String>,
    /// Relative paths resolve against the config file's directory
    #[serde(default)]
    pub template_file: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            template: None,
            template_file: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl TemplateConfig {
    /// Template text, falling back to `default` when none is configured
    pub fn resolve(&self, base_dir: &Path, default: &str) -> Result<String> {
        if let Some(template) = &self.template {
            return Ok(template.clone());
        }
        match &self.template_file {
            Some(file) => {
                let path = base_dir.join(file);
                std::fs::read_to_string(&path).map_err(|e| {
                    CommitlogError::TemplateFileNotFound {
                        path,
                        reason: e.to_string(),
                    }
                })
            }
            None => Ok(default.to_string()),
        }
    }
}

/// strftime patterns for `$TIME$`, `$DATE$` and `$DATE_TIME$`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_date_time")]
    pub date_time: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            time: default_time(),
            date: default_date(),
            date_time: default_date_time(),
        }
    }
}

fn default_time() -> String {
    format::TIME.to_string()
}

fn default_date() -> String {
    format::DATE.to_string()
}

fn default_date_time() -> String {
    format::DATE_TIME.to_string()
}

impl FormatConfig {
    /// Reject patterns chrono cannot format
    pub fn validate(&self) -> Result<()> {
        for (field, pattern) in [
            ("format.time", &self.time),
            ("format.date", &self.date),
            ("format.date_time", &self.date_time),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(CommitlogError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: format!("invalid strftime pattern '{}'", pattern),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Keep records whose revision did not change
    #[serde(default)]
    pub keep_unchanged: bool,
}

impl Config {
    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| CommitlogError::ConfigInvalid(e.to_string()))?;
        config.format.validate()?;
        Ok(config)
    }

    /// Load commitlog.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CommitlogError::ConfigParseError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Write commitlog.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CommitlogError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(CommitlogError::IoError)?;

        Ok(())
    }

    pub fn log_template(&self, base_dir: &Path) -> Result<String> {
        self.log
            .resolve(base_dir, consts::DEFAULT_COMMIT_LOG_TEMPLATE)
    }

    pub fn comment_template(&self, base_dir: &Path) -> Result<String> {
        self.comment
            .resolve(base_dir, consts::DEFAULT_COMMENT_TEMPLATE)
    }
}
