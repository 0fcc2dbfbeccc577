//! Extracted field record for the sample invoice template.

use serde::{Deserialize, Serialize};

/// The full set of fields extracted from one sample invoice.
///
/// Every text field is optional and omitted from JSON when its anchor was not
/// found. `authorised_signature` and `line_items` are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// First line of the exporter block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exporter_name: Option<String>,

    /// Remaining exporter block lines joined by a space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exporter_address: Option<String>,

    /// Line following the "Invoice No" header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_no_date: Option<String>,

    /// Last token of the last line mentioning a reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exporter_ref: Option<String>,

    /// Consignee block, newline separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consignee: Option<String>,

    /// Buyer block, newline separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_carriage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_of_loading: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_of_discharge: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_destination: Option<String>,

    /// Raw net weight text, e.g. "12kg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_weight: Option<String>,

    /// Raw gross weight text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_words: Option<String>,

    /// Last token of the last "Total" line, unparsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,

    /// "Yes" when the signature caption is present, otherwise "".
    #[serde(default)]
    pub authorised_signature: String,

    /// Line items taken from the document tables.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// One invoice line taken positionally from a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sr_no: String,
    pub hs_code: String,
    pub description: String,
    pub qty: String,
    pub rate: String,
    pub amount: String,
}
