//! PDF text and table extraction using pdfplumber.

use pdfplumber::{Page, Pdf, PdfErrorKind, TableSettings, TextOptions};
use tracing::{debug, trace};

use super::{PdfProcessor, RawTable, Result};
use crate::error::PdfError;

/// PDF content extractor backed by pdfplumber.
pub struct PdfExtractor {
    document: Option<Pdf>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfContent {
    /// Pages with their content, in document order.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted plain text, `None` if the page has none.
    pub text: Option<String>,
    /// Tables detected on this page.
    pub tables: Vec<RawTable>,
}

impl PdfContent {
    /// Build content from per-page text only.
    pub fn from_page_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PdfPage {
                number: i as u32 + 1,
                text: non_empty(text.into()),
                tables: Vec::new(),
            })
            .collect();
        Self { pages }
    }

    /// Total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|p| p.tables.len()).sum()
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Open a PDF from bytes and return a loaded extractor.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    fn document(&self) -> Result<&Pdf> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    fn page(&self, page: u32) -> Result<Page> {
        let doc = self.document()?;
        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }
        doc.page((page - 1) as usize)
            .map_err(|e| PdfError::Parse(format!("page {}: {}", page, e)))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        // Documents locked with an empty user password open without one
        let doc = Pdf::open_bytes(data, None).map_err(|e| match e.kind() {
            PdfErrorKind::PasswordRequired | PdfErrorKind::InvalidPassword => PdfError::Encrypted,
            _ => PdfError::Parse(e.to_string()),
        })?;

        debug!("Loaded PDF with {} pages", doc.page_count());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.page_count() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<Option<String>> {
        let page = self.page(page)?;
        Ok(page_text(&page))
    }

    fn extract_page_tables(&self, page: u32) -> Result<Vec<RawTable>> {
        let page = self.page(page)?;
        Ok(page_tables(&page))
    }

    fn extract_all(&self) -> Result<PdfContent> {
        let doc = self.document()?;
        let mut pages = Vec::with_capacity(doc.page_count());

        // One interpretation pass per page serves both text and tables
        for (index, page) in doc.pages_iter().enumerate() {
            let number = index as u32 + 1;
            let page = page.map_err(|e| PdfError::Parse(format!("page {}: {}", number, e)))?;

            let text = page_text(&page);
            let tables = page_tables(&page);
            trace!(
                "Page {}: {} chars, {} tables",
                number,
                text.as_deref().map(str::len).unwrap_or(0),
                tables.len()
            );

            pages.push(PdfPage {
                number,
                text,
                tables,
            });
        }

        let content = PdfContent { pages };
        debug!(
            "PDF content: {} pages, {} tables",
            content.pages.len(),
            content.table_count()
        );
        Ok(content)
    }
}

fn page_text(page: &Page) -> Option<String> {
    non_empty(page.extract_text(&TextOptions::default()))
}

fn page_tables(page: &Page) -> Vec<RawTable> {
    page.find_tables(&TableSettings::default())
        .into_iter()
        .map(|table| {
            table
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.text).collect())
                .collect()
        })
        .collect()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_all(), Err(PdfError::Parse(_))));
        assert!(matches!(extractor.extract_page_text(1), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_garbage_fails() {
        let result = PdfExtractor::from_bytes(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_from_page_texts_drops_empty_text() {
        let content = PdfContent::from_page_texts(["first", "", "third"]);
        assert_eq!(content.pages.len(), 3);
        assert_eq!(content.pages[0].number, 1);
        assert_eq!(content.pages[1].text, None);
        assert_eq!(content.pages[2].text.as_deref(), Some("third"));
        assert_eq!(content.table_count(), 0);
    }
}
