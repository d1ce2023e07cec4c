//! commitlog.toml configuration

pub mod consts;
mod model;

pub use model::{Config, FormatConfig, ReportConfig, TemplateConfig};
