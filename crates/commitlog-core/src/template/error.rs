//! Template error types

use std::fmt;

/// Which kind of placeholder a syntax error was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `$NAME$`
    Value,
    /// `[NAME]`
    Block,
}

impl PlaceholderKind {
    fn label(self) -> &'static str {
        match self {
            PlaceholderKind::Value => "Value",
            PlaceholderKind::Block => "Block",
        }
    }

    fn delimiters(self) -> (char, char) {
        match self {
            PlaceholderKind::Value => ('$', '$'),
            PlaceholderKind::Block => ('[', ']'),
        }
    }
}

/// Structural errors raised while tokenizing template text
///
/// Every variant carries the character offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `\` followed by something other than `$`, `[`, `]` or `\`
    InvalidEscape {
        /// The character that followed the backslash
        found: char,
        /// Offset of that character
        location: usize,
    },

    /// `\` as the last character of the template
    TrailingEscape {
        /// Offset of the backslash
        location: usize,
    },

    /// Opening delimiter with no closing delimiter before end of input
    UnclosedPlaceholder {
        kind: PlaceholderKind,
        /// Offset of the opening delimiter
        location: usize,
    },

    /// Linefeed between a placeholder's delimiters
    LinefeedInPlaceholder {
        kind: PlaceholderKind,
        /// Offset of the linefeed
        location: usize,
    },

    /// A delimiter that may not appear inside this kind of placeholder
    /// (`[` inside `$...$`, `$` or `[` inside `[...]`)
    IllegalCharacter {
        kind: PlaceholderKind,
        found: char,
        location: usize,
    },

    /// `]` outside an open block placeholder
    UnescapedClose {
        /// Offset of the `]`
        location: usize,
    },
}

impl TemplateError {
    /// Character offset of the offending token
    pub fn location(&self) -> usize {
        match self {
            TemplateError::InvalidEscape { location, .. }
            | TemplateError::TrailingEscape { location }
            | TemplateError::UnclosedPlaceholder { location, .. }
            | TemplateError::LinefeedInPlaceholder { location, .. }
            | TemplateError::IllegalCharacter { location, .. }
            | TemplateError::UnescapedClose { location } => *location,
        }
    }

    /// Human readable description, without the location prefix
    pub fn message(&self) -> String {
        match self {
            TemplateError::InvalidEscape { .. } => {
                "'\\' may only precede '$', '[', ']' or '\\'".to_string()
            }
            TemplateError::TrailingEscape { .. } => {
                "'\\' must be followed by '$', '[', ']' or '\\'".to_string()
            }
            TemplateError::UnclosedPlaceholder { kind, .. } => {
                let (open, close) = kind.delimiters();
                format!("Opening {} detected with no closing {}", open, close)
            }
            TemplateError::LinefeedInPlaceholder { kind, .. } => {
                format!("{} Placeholders may not contain linefeeds", kind.label())
            }
            TemplateError::IllegalCharacter { kind, found, .. } => {
                format!("{} placeholders may not contain '{}'", kind.label(), found)
            }
            TemplateError::UnescapedClose { .. } => {
                "Template may not contain unescaped ']' - use '\\]' instead".to_string()
            }
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Illegal text template - error at index {} : {}",
            self.location(),
            self.message()
        )
    }
}

impl std::error::Error for TemplateError {}
