//! Tests for template engine
//!
//! Organized into focused submodules: tokenization, structuring and
//! rendering against a change index.

use super::*;

// Test helper functions
mod helpers;




mod render_sections;
