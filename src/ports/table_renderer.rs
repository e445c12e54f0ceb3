//! Table renderer port.
//!
//! Admin listings are produced as plain rows of cells; how they are turned
//! into markup belongs to the hosting application.

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCell {
    Text(String),
    /// Text that links somewhere, with an optional note shown below it.
    Link {
        text: String,
        href: String,
        note: Option<String>,
    },
    /// Emphasised marker text such as "Current revision".
    Emphasis(String),
    /// A list of operation links.
    Operations(Vec<OperationLink>),
}

impl TableCell {
    pub fn text(value: impl Into<String>) -> Self {
        TableCell::Text(value.into())
    }
}

/// A named operation on a row, e.g. revert or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLink {
    pub title: String,
    pub href: String,
}

/// A table row, optionally carrying CSS-like classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub classes: Vec<String>,
}

/// Renders a table of rows under the given headers.
pub trait TableRenderer: Send + Sync {
    fn render_table(&self, headers: &[String], rows: &[TableRow]) -> String;
}
