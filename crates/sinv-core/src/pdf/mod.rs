//! PDF processing module.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A table as reported by the PDF library: rows of optional cell text.
pub type RawTable = Vec<Vec<Option<String>>>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract plain text from a specific page (1-indexed).
    ///
    /// Returns `None` when the page carries no text.
    fn extract_page_text(&self, page: u32) -> Result<Option<String>>;

    /// Extract every table detected on a specific page (1-indexed).
    fn extract_page_tables(&self, page: u32) -> Result<Vec<RawTable>>;

    /// Extract text and tables from every page, in page order.
    fn extract_all(&self) -> Result<PdfContent>;
}
