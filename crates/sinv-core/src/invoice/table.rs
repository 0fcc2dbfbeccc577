//! Line item extraction from detected tables.

use tracing::{debug, trace};

use crate::models::fields::LineItem;
use crate::pdf::PdfContent;

/// Trim a cell, mapping an absent cell to an empty string.
pub fn clean_cell(cell: Option<&str>) -> String {
    cell.map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Cleaned cell at a fixed position; out of range yields an empty string.
pub fn cell_at(row: &[Option<String>], index: usize) -> String {
    clean_cell(row.get(index).and_then(|c| c.as_deref()))
}

/// Whether the row's first cell is a serial number ("Sr. No." column).
pub fn is_line_item_row(row: &[Option<String>]) -> bool {
    match row.first().and_then(|c| c.as_deref()) {
        Some(first) => {
            let first = first.trim();
            !first.is_empty() && first.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Build a line item from a row by column position.
pub fn line_item_from_row(row: &[Option<String>]) -> LineItem {
    LineItem {
        sr_no: cell_at(row, 0),
        hs_code: cell_at(row, 1),
        description: cell_at(row, 2),
        qty: cell_at(row, 3),
        rate: cell_at(row, 4),
        amount: cell_at(row, 5),
    }
}

/// Scan every table on every page and keep rows that look like line items.
///
/// Rows are kept as-is: duplicates and short rows are not filtered.
pub fn extract_line_items(content: &PdfContent) -> Vec<LineItem> {
    let mut items = Vec::new();

    for page in &content.pages {
        for (table_idx, table) in page.tables.iter().enumerate() {
            let before = items.len();
            items.extend(
                table
                    .iter()
                    .filter(|row| is_line_item_row(row))
                    .map(|row| line_item_from_row(row)),
            );
            trace!(
                "Page {} table {}: {} of {} rows are line items",
                page.number,
                table_idx,
                items.len() - before,
                table.len()
            );
        }
    }

    debug!("Extracted {} line items", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfPage;
    use pretty_assertions::assert_eq;

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    fn content_with_table(table: Vec<Vec<Option<String>>>) -> PdfContent {
        PdfContent {
            pages: vec![PdfPage {
                number: 1,
                text: None,
                tables: vec![table],
            }],
        }
    }

    #[test]
    fn test_full_row_becomes_line_item() {
        let r = row(&[Some("7"), Some("8471"), Some("Laptop"), Some("2"), Some("500"), Some("1000")]);
        assert_eq!(
            line_item_from_row(&r),
            LineItem {
                sr_no: "7".to_string(),
                hs_code: "8471".to_string(),
                description: "Laptop".to_string(),
                qty: "2".to_string(),
                rate: "500".to_string(),
                amount: "1000".to_string(),
            }
        );
    }

    #[test]
    fn test_short_row_pads_with_empty() {
        let item = line_item_from_row(&row(&[Some(" 3 "), Some("0101"), None]));
        assert_eq!(item.sr_no, "3");
        assert_eq!(item.hs_code, "0101");
        assert_eq!(item.description, "");
        assert_eq!(item.amount, "");
    }

    #[test]
    fn test_row_classification() {
        assert!(is_line_item_row(&row(&[Some("12"), Some("x")])));
        assert!(is_line_item_row(&row(&[Some(" 4 ")])));
        assert!(!is_line_item_row(&row(&[Some("Sr. No."), Some("HS Code")])));
        assert!(!is_line_item_row(&row(&[Some(""), Some("1")])));
        assert!(!is_line_item_row(&row(&[Some("   ")])));
        assert!(!is_line_item_row(&row(&[None, Some("1")])));
        assert!(!is_line_item_row(&row(&[Some("1.5")])));
        assert!(!is_line_item_row(&row(&[Some("-1")])));
        assert!(!is_line_item_row(&[]));
    }

    #[test]
    fn test_extract_filters_header_and_totals() {
        let table = vec![
            row(&[Some("Sr. No."), Some("HS Code"), Some("Description"), Some("Qty"), Some("Rate"), Some("Amount")]),
            row(&[Some("1"), Some("8471"), Some("Laptop"), Some("2"), Some("500"), Some("1000")]),
            row(&[Some("2"), Some("8473"), Some("Charger"), Some("2"), Some("25"), Some("50")]),
            row(&[None, None, Some("Total"), None, None, Some("1050")]),
        ];

        let items = extract_line_items(&content_with_table(table));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Laptop");
        assert_eq!(items[1].sr_no, "2");
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let r = row(&[Some("1"), Some("8471")]);
        let items = extract_line_items(&content_with_table(vec![r.clone(), r]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }

    #[test]
    fn test_tables_across_pages() {
        let content = PdfContent {
            pages: vec![
                PdfPage {
                    number: 1,
                    text: None,
                    tables: vec![vec![row(&[Some("1")])], vec![row(&[Some("2")])]],
                },
                PdfPage {
                    number: 2,
                    text: Some("no tables here".to_string()),
                    tables: Vec::new(),
                },
                PdfPage {
                    number: 3,
                    text: None,
                    tables: vec![vec![row(&[Some("3")])]],
                },
            ],
        };

        let serials: Vec<String> = extract_line_items(&content)
            .into_iter()
            .map(|i| i.sr_no)
            .collect();
        assert_eq!(serials, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_tables_gives_empty_list() {
        assert!(extract_line_items(&PdfContent::from_page_texts(["Total 5"])).is_empty());
    }
}
