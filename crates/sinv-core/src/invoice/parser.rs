//! Sample invoice parser composing line, block and table extraction.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::fields::FieldRecord;
use crate::pdf::{PdfContent, PdfExtractor, PdfProcessor};

use super::block::capture_block;
use super::lines::extract_text_lines;
use super::rules::{self, patterns::*};
use super::table::extract_line_items;

/// Result of invoice extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: FieldRecord,
    /// Lines the text rules ran over.
    pub lines: Vec<String>,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Anchored fields that were not found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse a loaded document.
    fn parse(&self, content: &PdfContent) -> ExtractionResult;
}

/// Keyword-anchored parser for the sample invoice template.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleInvoiceParser;

impl SampleInvoiceParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Run the text rules over already extracted lines.
    ///
    /// `line_items` is left empty; it comes from tables, not text.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> FieldRecord {
        let mut fields = FieldRecord::default();

        let exporter = capture_block(lines, &EXPORTER_START, &EXPORTER_STOP);
        if !exporter.is_empty() {
            let mut parts = exporter.split('\n');
            fields.exporter_name = parts.next().map(str::to_string);
            fields.exporter_address = Some(parts.collect::<Vec<_>>().join(" "));
        }

        fields.invoice_no_date = rules::extract_invoice_no_date(lines);
        fields.exporter_ref = rules::extract_exporter_ref(lines);

        let consignee = capture_block(lines, &CONSIGNEE_START, &CONSIGNEE_STOP);
        if !consignee.is_empty() {
            fields.consignee = Some(consignee);
        }

        let buyer = capture_block(lines, &BUYER_START, &BUYER_STOP);
        if !buyer.is_empty() {
            fields.buyer = Some(buyer);
        }

        fields.pre_carriage = rules::extract_pre_carriage(lines);
        fields.port_of_loading = rules::extract_port_of_loading(lines);
        fields.port_of_discharge = rules::extract_port_of_discharge(lines);
        fields.final_destination = rules::extract_final_destination(lines);

        fields.net_weight = rules::extract_net_weight(lines);
        fields.gross_weight = rules::extract_gross_weight(lines);
        fields.amount_in_words = rules::extract_amount_in_words(lines);
        fields.total_amount = rules::extract_total_amount(lines);

        fields.authorised_signature = rules::extract_authorised_signature(lines);

        fields
    }

    fn missing_fields(fields: &FieldRecord) -> Vec<String> {
        let checks = [
            ("exporter_name", fields.exporter_name.is_none()),
            ("invoice_no_date", fields.invoice_no_date.is_none()),
            ("consignee", fields.consignee.is_none()),
            ("buyer", fields.buyer.is_none()),
            ("port_of_loading", fields.port_of_loading.is_none()),
            ("port_of_discharge", fields.port_of_discharge.is_none()),
            ("total_amount", fields.total_amount.is_none()),
        ];

        let mut warnings: Vec<String> = checks
            .iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| format!("Could not extract {}", name))
            .collect();

        if fields.line_items.is_empty() {
            warnings.push("Could not extract line items".to_string());
        }
        warnings
    }
}

impl InvoiceParser for SampleInvoiceParser {
    fn parse(&self, content: &PdfContent) -> ExtractionResult {
        let start = Instant::now();

        let lines = extract_text_lines(content);
        debug!("Parsing {} lines from {} pages", lines.len(), content.pages.len());

        let mut fields = self.parse_lines(&lines);
        fields.line_items = extract_line_items(content);

        let warnings = Self::missing_fields(&fields);
        for warning in &warnings {
            debug!("{}", warning);
        }

        ExtractionResult {
            fields,
            lines,
            page_count: content.pages.len(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Extract the field record from PDF bytes.
pub fn extract_fields_from_bytes(data: &[u8]) -> Result<FieldRecord> {
    let extractor = PdfExtractor::from_bytes(data)?;
    let content = extractor.extract_all()?;
    let result = SampleInvoiceParser::new().parse(&content);

    info!(
        "Extracted {} line items from {} pages in {}ms",
        result.fields.line_items.len(),
        result.page_count,
        result.processing_time_ms
    );
    Ok(result.fields)
}

/// Extract the field record from a PDF file on disk.
pub fn extract_fields(path: &Path) -> Result<FieldRecord> {
    debug!("Extracting fields from {}", path.display());
    let data = std::fs::read(path)?;
    extract_fields_from_bytes(&data)
}
