//! Global context for CLI commands

use anyhow::{Result, anyhow};
use commitlog_core::config::{Config, TemplateConfig, consts::CONFIG_FILE_NAME};
use std::env;
use std::path::{Path, PathBuf};

/// Loaded configuration and where relative paths in it resolve from
pub struct Context {
    pub config: Config,
    /// Directory of the config file, or the working directory without one
    pub base_dir: PathBuf,
    pub verbose: bool,
}

impl Context {
    /// Load the configuration
    ///
    /// `config_path` comes from `--config` or `COMMITLOG_CONFIG`. Without it,
    /// `./commitlog.toml` is used when present, else built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;

        let config_path = config_path.or_else(|| {
            let local = current_dir.join(CONFIG_FILE_NAME);
            local.is_file().then_some(local)
        });

        let (config, base_dir) = match config_path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                let config = Config::from_file(&path)
                    .map_err(|e| anyhow!("Failed to load {}: {}", path.display(), e))?;
                let base_dir = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| current_dir.clone());
                (config, base_dir)
            }
            None => {
                tracing::debug!("No config file, using defaults");
                (Config::default(), current_dir)
            }
        };

        Ok(Self {
            config,
            base_dir,
            verbose,
        })
    }

    fn template_config(&self, comment: bool) -> &TemplateConfig {
        if comment {
            &self.config.comment
        } else {
            &self.config.log
        }
    }

    /// Whether the selected report is switched on in the config
    pub fn enabled(&self, comment: bool) -> bool {
        self.template_config(comment).enabled
    }

    /// Template text: an explicit file, else the configured template
    ///
    /// # Errors
    ///
    /// Returns an error if a template file cannot be read
    pub fn template_text(&self, file: Option<&Path>, comment: bool) -> Result<String> {
        if let Some(file) = file {
            return std::fs::read_to_string(file)
                .map_err(|e| anyhow!("Failed to read template {}: {}", file.display(), e));
        }

        let text = if comment {
            self.config.comment_template(&self.base_dir)?
        } else {
            self.config.log_template(&self.base_dir)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitlog_core::config::consts::{DEFAULT_COMMENT_TEMPLATE, DEFAULT_COMMIT_LOG_TEMPLATE};
    use commitlog_testkit::{temp_dir_in_workspace, write_config, write_template};

    #[test]
    fn test_explicit_config_sets_base_dir() {
        let temp = temp_dir_in_workspace();
        write_template(temp.path(), "log.txt", "$ROOT_COUNT$");
        let path = write_config(temp.path(), "[log]\ntemplate_file = \"log.txt\"\n");

        let ctx = Context::new(Some(path), false).unwrap();
        assert_eq!(ctx.base_dir, temp.path());
        assert_eq!(ctx.template_text(None, false).unwrap(), "$ROOT_COUNT$");
        assert_eq!(
            ctx.template_text(None, true).unwrap(),
            DEFAULT_COMMENT_TEMPLATE
        );
    }

    #[test]
    fn test_explicit_template_file_wins() {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "mine.txt", "$DATE$");
        let path = write_config(temp.path(), "[log]\ntemplate = \"ignored\"\n");

        let ctx = Context::new(Some(path), false).unwrap();
        assert_eq!(ctx.template_text(Some(&template), false).unwrap(), "$DATE$");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp = temp_dir_in_workspace();
        let result = Context::new(Some(temp.path().join("nope.toml")), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_disabled_report() {
        let temp = temp_dir_in_workspace();
        let path = write_config(temp.path(), "[comment]\nenabled = false\n");

        let ctx = Context::new(Some(path), false).unwrap();
        assert!(ctx.enabled(false));
        assert!(!ctx.enabled(true));
        assert_eq!(
            ctx.template_text(None, false).unwrap(),
            DEFAULT_COMMIT_LOG_TEMPLATE
        );
    }
}
