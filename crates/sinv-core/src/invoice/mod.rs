//! Sample invoice field extraction module.

pub mod block;
pub mod lines;
mod parser;
pub mod rules;
pub mod table;

pub use block::{capture_block, KeywordSet};
pub use lines::extract_text_lines;
pub use parser::{
    extract_fields, extract_fields_from_bytes, ExtractionResult, InvoiceParser, SampleInvoiceParser,
};
pub use table::extract_line_items;
