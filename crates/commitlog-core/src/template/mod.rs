//! Template module - commit log template language
//!
//! Templates turn a [`ChangeIndex`](crate::change::ChangeIndex) into a
//! commit log or commit comment.
//!
//! ## Syntax
//!
//! - Value placeholders: `$FILE_NAME$`, `$ROOT_COUNT$`, ...
//! - Block placeholders open and close repeating sections:
//!   `[ROOT_ENTRY] ... [/ROOT_ENTRY]`
//! - Escape sequences: `\$`, `\[`, `\]`, `\\`
//!
//! ## Sections
//!
//! ```text
//! [ROOTS_SECTION]                 once, only if any root has changes
//!   [ROOT_ENTRY]                  per root
//!     [MODIFIED_FILES] ...        per change kind with files
//!       [FILE_ENTRY]              per file
//! ```
//!
//! File-type sections (`[MODIFIED_FILES]`, `[ADDED_FILES]`,
//! `[DELETED_FILES]`, `[ALL_FILES]`) may also appear at the top level,
//! where they cover files across all roots. A file-type section that uses
//! file values such as `$FILE_NAME$` without a `[FILE_ENTRY]` repeats per
//! file itself.
//!
//! Structural mistakes (bad escapes, unclosed delimiters) fail parsing.
//! Unknown or misplaced placeholders are rendered as inline diagnostics
//! instead, so a partly broken template still produces output.

pub mod engine;
pub mod error;

pub use engine::{build_report, parse, ReportContext, Template, TemplateEngine, TemplateNode};
pub use error::TemplateError;
