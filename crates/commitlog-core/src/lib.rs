// Core modules
pub mod change;
pub mod config;
pub mod error;
pub mod report;
pub mod sample;
pub mod template;

// Re-export commonly used types
pub use change::{ChangeIndex, ChangeKind, ChangeRecord, FileId, RootSelector};
pub use error::{CommitlogError, Result};
pub use report::CommitLog;
pub use template::{build_report, parse, Template, TemplateError, TemplateNode};
