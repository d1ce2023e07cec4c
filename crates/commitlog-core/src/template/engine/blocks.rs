//! Section structuring: pairs block openers with their closers
//!
//! The flat node stream is folded into a tree of [`Item`]s. Each
//! [`Section`] records how many nodes it spans (opener and closer included)
//! so rendering can report consumed nodes without rescanning.
//!
//! A section whose closer never arrives becomes an inline diagnostic and
//! its contents move up into the enclosing section.

use super::names::{
    illegal_block, illegal_section, unclosed_section, FileSelection, FILE_ENTRY, ROOTS_SECTION,
    ROOT_ENTRY,
};
#[cfg(test)]
use super::tokenize::test_counter;
use super::tokenize::{NodeKind, TemplateNode};

/// Repeating section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `[ROOTS_SECTION]...[/ROOTS_SECTION]`
    Roots,
    /// `[ROOT_ENTRY]...[/ROOT_ENTRY]`
    RootEntry,
    /// `[MODIFIED_FILES]`, `[ADDED_FILES]`, `[DELETED_FILES]` or `[ALL_FILES]`
    Files(FileSelection),
    /// `[FILE_ENTRY]...[/FILE_ENTRY]`
    FileEntry,
}

impl SectionKind {
    pub fn opener(self) -> &'static str {
        match self {
            SectionKind::Roots => ROOTS_SECTION,
            SectionKind::RootEntry => ROOT_ENTRY,
            SectionKind::Files(selection) => selection.opener(),
            SectionKind::FileEntry => FILE_ENTRY,
        }
    }

    pub fn closer(self) -> String {
        format!("/{}", self.opener())
    }

    fn is_closed_by(self, name: &str) -> bool {
        name.strip_prefix('/') == Some(self.opener())
    }
}

/// A structured template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Literal text
    Text(String),
    /// `$NAME$`, resolved at render time
    Value { name: String, location: usize },
    /// Misplaced or unclosed block placeholder, rendered verbatim
    Invalid(String),
    Section(Section),
}

impl Item {
    /// Number of template nodes this item stands for
    pub fn span(&self) -> usize {
        match self {
            Item::Section(section) => section.span,
            _ => 1,
        }
    }
}

/// A matched opener/closer pair and everything between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: Vec<Item>,
    /// Offset of the opening block placeholder
    pub location: usize,
    /// Nodes consumed, opener and closer included
    pub span: usize,
}

/// Where the scan currently is, deciding which blocks may open or close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Top,
    In(SectionKind),
}

impl Scope {
    fn closer(self) -> Option<String> {
        match self {
            Scope::Top => None,
            Scope::In(kind) => Some(kind.closer()),
        }
    }

    /// Section a block placeholder opens in this scope, if any
    fn opens(self, name: &str) -> Option<SectionKind> {
        match self {
            Scope::Top | Scope::In(SectionKind::RootEntry) => {
                if self == Scope::Top && name == ROOTS_SECTION {
                    return Some(SectionKind::Roots);
                }
                FileSelection::from_opener(name).map(SectionKind::Files)
            }
            Scope::In(SectionKind::Roots) => (name == ROOT_ENTRY).then_some(SectionKind::RootEntry),
            Scope::In(SectionKind::Files(_)) => {
                (name == FILE_ENTRY).then_some(SectionKind::FileEntry)
            }
            Scope::In(SectionKind::FileEntry) => None,
        }
    }

    fn misplaced(self, name: &str) -> String {
        match self.closer() {
            Some(closer) => illegal_section(name, &closer),
            None => illegal_block(name),
        }
    }
}

/// A section whose closer has not been seen yet
struct OpenSection {
    kind: SectionKind,
    /// Node index of the opener
    start: usize,
    location: usize,
    items: Vec<Item>,
}

/// Single pass over the node stream with a stack of open sections
///
/// Sections nest at most four deep, so looking through the stack for an
/// enclosing closer is constant work per node.
struct SectionBuilder {
    top: Vec<Item>,
    open: Vec<OpenSection>,
}

impl SectionBuilder {
    fn new() -> Self {
        Self {
            top: Vec::new(),
            open: Vec::new(),
        }
    }

    fn scope(&self) -> Scope {
        self.open
            .last()
            .map_or(Scope::Top, |section| Scope::In(section.kind))
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        match self.open.last_mut() {
            Some(section) => &mut section.items,
            None => &mut self.top,
        }
    }

    fn push(&mut self, index: usize, node: &TemplateNode) {
        #[cfg(test)]
        test_counter::inc();

        let item = match node.kind() {
            NodeKind::Text => Item::Text(node.text().to_string()),
            NodeKind::ValuePlaceholder => Item::Value {
                name: node.text().to_string(),
                location: node.location(),
            },
            NodeKind::BlockPlaceholder => {
                let name = node.text();
                // The innermost closer wins; an outer one leaves inner sections unclosed
                if let Some(depth) = self
                    .open
                    .iter()
                    .rposition(|section| section.kind.is_closed_by(name))
                {
                    while self.open.len() > depth + 1 {
                        self.abandon();
                    }
                    self.close(index);
                    return;
                }

                let scope = self.scope();
                match scope.opens(name) {
                    Some(kind) => {
                        self.open.push(OpenSection {
                            kind,
                            start: index,
                            location: node.location(),
                            items: Vec::new(),
                        });
                        return;
                    }
                    None => Item::Invalid(scope.misplaced(name)),
                }
            }
        };
        self.items_mut().push(item);
    }

    /// Pop the innermost section, closed by the node at `index`
    fn close(&mut self, index: usize) {
        if let Some(open) = self.open.pop() {
            let section = Section {
                kind: open.kind,
                body: open.items,
                location: open.location,
                span: index + 1 - open.start,
            };
            self.items_mut().push(Item::Section(section));
        }
    }

    /// Pop the innermost section as unclosed, lifting its items into the parent
    fn abandon(&mut self) {
        let Some(open) = self.open.pop() else {
            return;
        };
        let name = open.kind.opener();
        tracing::debug!(
            "Section [{}] at {} is never closed",
            name,
            open.location
        );

        let scope = self.scope();
        let dest = self.items_mut();
        dest.push(Item::Invalid(unclosed_section(name)));
        for item in open.items {
            lift(item, scope, dest);
        }
    }

    fn finish(mut self) -> Vec<Item> {
        while !self.open.is_empty() {
            self.abandon();
        }
        self.top
    }
}

/// Move an item into `scope`; sections `scope` cannot open are flattened
/// into diagnostics for their opener and closer around their body
fn lift(item: Item, scope: Scope, dest: &mut Vec<Item>) {
    #[cfg(test)]
    test_counter::inc();

    match item {
        Item::Section(section) if scope.opens(section.kind.opener()) != Some(section.kind) => {
            dest.push(Item::Invalid(scope.misplaced(section.kind.opener())));
            for inner in section.body {
                lift(inner, scope, dest);
            }
            dest.push(Item::Invalid(scope.misplaced(&section.kind.closer())));
        }
        item => dest.push(item),
    }
}

/// Fold a flat node stream into top-level items
pub(crate) fn build_items(nodes: &[TemplateNode]) -> Vec<Item> {
    let mut builder = SectionBuilder::new();
    for (index, node) in nodes.iter().enumerate() {
        builder.push(index, node);
    }
    builder.finish()
}
