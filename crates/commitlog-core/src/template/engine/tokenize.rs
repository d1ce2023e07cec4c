//! Tokenization for the commit log template language
//!
//! Turns template text into a flat stream of [`TemplateNode`]s in a single
//! forward-only pass. Four characters are special:
//!
//! - `$` delimits a value placeholder (`$FILE_NAME$`)
//! - `[` and `]` delimit a block placeholder (`[FILE_ENTRY]`)
//! - `\` escapes the next special character
//!
//! Adjacent literal text (including escaped characters) is coalesced into a
//! single text node.

use crate::template::error::{PlaceholderKind, TemplateError};

/// Node classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text, escapes already resolved
    Text,
    /// `$NAME$`
    ValuePlaceholder,
    /// `[NAME]`
    BlockPlaceholder,
}

/// A single parsed piece of template text
///
/// For [`NodeKind::Text`] the text is the literal output; for the placeholder
/// kinds it is the placeholder name without delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    kind: NodeKind,
    text: String,
    location: usize,
}

impl TemplateNode {
    pub fn new(kind: NodeKind, text: impl Into<String>, location: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset in the source template
    pub fn location(&self) -> usize {
        self.location
    }
}

/// Tokenization state machine
///
/// ```text
/// Text ──$──> Value ──$──> [yield ValuePlaceholder] → Text
///   │
///   └───[──> Block ──]──> [yield BlockPlaceholder] → Text
///
/// `\` in any state consumes the next character as a literal.
/// `]` in Text, `[` in Value, `$`/`[` in Block and a linefeed in a
/// placeholder are syntax errors.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Accumulating literal text
    Text,

    /// Inside `$...$`
    Value {
        /// Offset of the opening `$`
        start: usize,
    },

    /// Inside `[...]`
    Block {
        /// Offset of the opening `[`
        start: usize,
    },
}

/// Iterator over the nodes of a template
///
/// Yields `Err` at most once; the stream is finished after an error.
pub(crate) struct TokenStream<'a> {
    chars: std::str::Chars<'a>,
    /// Character offset of the next unread character
    pos: usize,
    state: ScanState,
    /// Pending text or placeholder name
    buf: String,
    /// Offset of the first character in `buf` (text only)
    buf_start: usize,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pos: 0,
            state: ScanState::Text,
            buf: String::new(),
            buf_start: 0,
            finished: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// Read one character, returning it with its offset
    #[inline]
    fn advance(&mut self) -> Option<(usize, char)> {
        let c = self.chars.next()?;
        let at = self.pos;
        self.pos += 1;
        #[cfg(test)]
        test_counter::inc();
        Some((at, c))
    }

    /// Resolve the character following a `\` found at `at`
    fn read_escape(&mut self, at: usize) -> Result<char, TemplateError> {
        match self.advance() {
            Some((_, c)) if matches!(c, '$' | '[' | ']' | '\\') => Ok(c),
            Some((location, found)) => Err(TemplateError::InvalidEscape { found, location }),
            None => Err(TemplateError::TrailingEscape { location: at }),
        }
    }

    fn push_text(&mut self, c: char, at: usize) {
        if self.buf.is_empty() {
            self.buf_start = at;
        }
        self.buf.push(c);
    }

    fn take_text(&mut self) -> Option<TemplateNode> {
        if self.buf.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.buf);
        Some(TemplateNode::new(NodeKind::Text, text, self.buf_start))
    }

    /// Process one character in Text state
    fn scan_text(&mut self, c: char, at: usize) -> Result<Option<TemplateNode>, TemplateError> {
        match c {
            '\\' => {
                let escaped = self.read_escape(at)?;
                self.push_text(escaped, at);
                Ok(None)
            }
            '$' => {
                let node = self.take_text();
                self.state = ScanState::Value { start: at };
                Ok(node)
            }
            '[' => {
                let node = self.take_text();
                self.state = ScanState::Block { start: at };
                Ok(node)
            }
            ']' => Err(TemplateError::UnescapedClose { location: at }),
            _ => {
                self.push_text(c, at);
                Ok(None)
            }
        }
    }

    /// Process one character inside a placeholder opened at `start`
    fn scan_placeholder(
        &mut self,
        kind: PlaceholderKind,
        start: usize,
        c: char,
        at: usize,
    ) -> Result<Option<TemplateNode>, TemplateError> {
        match (kind, c) {
            (_, '\\') => {
                let escaped = self.read_escape(at)?;
                self.buf.push(escaped);
                Ok(None)
            }
            (_, '\n') => Err(TemplateError::LinefeedInPlaceholder { kind, location: at }),
            (PlaceholderKind::Value, '$') | (PlaceholderKind::Block, ']') => {
                self.state = ScanState::Text;
                let name = std::mem::take(&mut self.buf);
                if name.is_empty() {
                    return Ok(None);
                }
                let node_kind = match kind {
                    PlaceholderKind::Value => NodeKind::ValuePlaceholder,
                    PlaceholderKind::Block => NodeKind::BlockPlaceholder,
                };
                Ok(Some(TemplateNode::new(node_kind, name, start)))
            }
            (PlaceholderKind::Value, ']') => Err(TemplateError::UnescapedClose { location: at }),
            (PlaceholderKind::Value, '[') | (PlaceholderKind::Block, '$' | '[') => {
                Err(TemplateError::IllegalCharacter {
                    kind,
                    found: c,
                    location: at,
                })
            }
            _ => {
                self.buf.push(c);
                Ok(None)
            }
        }
    }

    /// Flush pending text or report the placeholder left open at end of input
    fn finish(&mut self) -> Option<Result<TemplateNode, TemplateError>> {
        self.finished = true;
        match self.state {
            ScanState::Text => self.take_text().map(Ok),
            ScanState::Value { start } => Some(Err(TemplateError::UnclosedPlaceholder {
                kind: PlaceholderKind::Value,
                location: start,
            })),
            ScanState::Block { start } => Some(Err(TemplateError::UnclosedPlaceholder {
                kind: PlaceholderKind::Block,
                location: start,
            })),
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<TemplateNode, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some((at, c)) = self.advance() else {
                return self.finish();
            };

            let step = match self.state {
                ScanState::Text => self.scan_text(c, at),
                ScanState::Value { start } => {
                    self.scan_placeholder(PlaceholderKind::Value, start, c, at)
                }
                ScanState::Block { start } => {
                    self.scan_placeholder(PlaceholderKind::Block, start, c, at)
                }
            };

            match step {
                Ok(Some(node)) => return Some(Ok(node)),
                Ok(None) => continue,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
