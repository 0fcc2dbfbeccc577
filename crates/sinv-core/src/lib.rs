//! Core library for sample invoice field extraction.
//!
//! This crate provides:
//! - PDF loading (per-page plain text and tables, via pdfplumber)
//! - Line and table-row extraction
//! - Keyword-anchored block capture
//! - The field record produced for one sample invoice

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{PdfError, Result, SinvError};
pub use invoice::{
    capture_block, extract_fields, extract_fields_from_bytes, extract_line_items,
    extract_text_lines, ExtractionResult, InvoiceParser, KeywordSet, SampleInvoiceParser,
};
pub use models::config::{ServerConfig, SinvConfig};
pub use models::fields::{FieldRecord, LineItem};
pub use pdf::{PdfContent, PdfExtractor, PdfPage, PdfProcessor, RawTable};
