//! Plain text table renderer
//!
//! Renders admin tables as aligned text, for CLIs, logs and tests.

use crate::ports::{TableCell, TableRenderer, TableRow};

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextTableRenderer;

impl PlainTextTableRenderer {
    pub fn new() -> Self {
        Self
    }

    fn cell_text(cell: &TableCell) -> String {
        match cell {
            TableCell::Text(text) => text.clone(),
            TableCell::Link { text, href, note } => match note {
                Some(note) => format!("{} <{}> ({})", text, href, note),
                None => format!("{} <{}>", text, href),
            },
            TableCell::Emphasis(text) => format!("*{}*", text),
            TableCell::Operations(links) => links
                .iter()
                .map(|l| format!("[{}]", l.title))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl TableRenderer for PlainTextTableRenderer {
    fn render_table(&self, headers: &[String], rows: &[TableRow]) -> String {
        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.cells.iter().map(Self::cell_text).collect())
            .collect();

        let columns = body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for line in std::iter::once(headers.to_vec()).chain(body.iter().cloned()) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| -> String {
            let padded: Vec<String> = (0..columns)
                .map(|i| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = widths[i])
                })
                .collect();
            padded.join(COLUMN_GAP).trim_end().to_string()
        };

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(format_line(headers));
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP),
        );
        out.extend(body.iter().map(|cells| format_line(cells)));

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::OperationLink;

    fn headers() -> Vec<String> {
        vec!["Revision".to_string(), "Operations".to_string()]
    }

    #[test]
    fn renders_headers_and_separator() {
        let out = PlainTextTableRenderer::new().render_table(&headers(), &[]);
        assert_eq!(out, "Revision  Operations\n--------  ----------");
    }

    #[test]
    fn aligns_columns() {
        let rows = vec![
            TableRow {
                cells: vec![
                    TableCell::text("18.10.2026 - 14:05 by admin"),
                    TableCell::Emphasis("Current revision".into()),
                ],
                classes: vec!["revision-current".into()],
            },
            TableRow {
                cells: vec![
                    TableCell::text("17.10.2026 - 09:00 by admin"),
                    TableCell::Operations(vec![
                        OperationLink {
                            title: "Revert".into(),
                            href: "/r".into(),
                        },
                        OperationLink {
                            title: "Delete".into(),
                            href: "/d".into(),
                        },
                    ]),
                ],
                classes: vec![],
            },
        ];

        let out = PlainTextTableRenderer::new().render_table(&headers(), &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "18.10.2026 - 14:05 by admin  *Current revision*");
        assert_eq!(lines[3], "17.10.2026 - 09:00 by admin  [Revert] [Delete]");
    }

    #[test]
    fn renders_links_with_target() {
        let rows = vec![TableRow {
            cells: vec![TableCell::Link {
                text: "17.10.2026".into(),
                href: "/view".into(),
                note: Some("Price change".into()),
            }],
            classes: vec![],
        }];
        let out = PlainTextTableRenderer::new().render_table(&headers(), &rows);
        assert!(out.contains("17.10.2026 </view> (Price change)"));
    }
}
