//! Keyword anchors for the sample invoice template.

use lazy_static::lazy_static;

use crate::invoice::block::KeywordSet;

// Block headers
pub const EXPORTER: &str = "Exporter";
pub const INVOICE_NO: &str = "Invoice No";
pub const CONSIGNEE: &str = "Consignee";
pub const BUYER: &str = "Buyer";
pub const PRE_CARRIAGE: &str = "Pre-carriage";
pub const PORT_OF_LOADING: &str = "Port of Loading";

// Single-line fields
pub const REFERENCE: &str = "REF";
pub const PORT_OF_DISCHARGE: &str = "Port of Discharge";
pub const FINAL_DESTINATION: &str = "Final Destination";
pub const NET_WEIGHT: &str = "Net Weight";
pub const GROSS_WEIGHT: &str = "Gross Weight";
pub const AMOUNT_IN_WORDS: &str = "Amount in words";
pub const TOTAL: &str = "Total";
pub const AUTHORISED_SIGNATURE: &str = "Authorised Signature";

/// Value reported when the signature caption is present.
pub const SIGNED: &str = "Yes";

lazy_static! {
    pub static ref EXPORTER_START: KeywordSet = KeywordSet::new([EXPORTER]).unwrap();
    pub static ref EXPORTER_STOP: KeywordSet = KeywordSet::new([INVOICE_NO, CONSIGNEE]).unwrap();

    pub static ref CONSIGNEE_START: KeywordSet = KeywordSet::new([CONSIGNEE]).unwrap();
    pub static ref CONSIGNEE_STOP: KeywordSet = KeywordSet::new([BUYER, PRE_CARRIAGE]).unwrap();

    pub static ref BUYER_START: KeywordSet = KeywordSet::new([BUYER]).unwrap();
    pub static ref BUYER_STOP: KeywordSet = KeywordSet::new([PRE_CARRIAGE, PORT_OF_LOADING]).unwrap();
}
