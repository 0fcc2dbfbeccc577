//! Rule-based field extractors for the sample invoice template.
//!
//! Each rule scans the extracted lines on its own. Rules marked "last wins"
//! keep the most recent match; the others stop at the first.

pub mod patterns;

use patterns::*;

fn as_strs<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = &str> {
    lines.iter().map(|l| l.as_ref())
}

/// Line that follows the first line satisfying `anchor`.
///
/// `Some("")` when the anchor is on the last line, `None` when it never matches.
pub fn line_after<S, F>(lines: &[S], anchor: F) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut rest = as_strs(lines).skip_while(|l| !anchor(*l));
    rest.next()?;
    Some(rest.next().map(str::to_string).unwrap_or_default())
}

/// Apply `extract` to every line satisfying `anchor`, keeping the last result.
pub fn last_match<S, F, E>(lines: &[S], anchor: F, extract: E) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
    E: Fn(&str) -> Option<String>,
{
    let mut found = None;
    for line in as_strs(lines) {
        if anchor(line) {
            if let Some(value) = extract(line) {
                found = Some(value);
            }
        }
    }
    found
}

/// Last whitespace-delimited token of a line.
pub fn last_token(line: &str) -> Option<String> {
    line.split_whitespace().last().map(str::to_string)
}

/// Exporter reference: last token of the last line whose uppercase form mentions "REF".
pub fn extract_exporter_ref<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    last_match(lines, |l| l.to_uppercase().contains(REFERENCE), last_token)
}

/// Invoice number and date: the line after the first "Invoice No" line (case-sensitive).
pub fn extract_invoice_no_date<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    line_after(lines, |l| l.contains(INVOICE_NO))
}

pub fn extract_pre_carriage<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    line_after(lines, |l| l.starts_with(PRE_CARRIAGE))
}

pub fn extract_port_of_loading<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    line_after(lines, |l| l.contains(PORT_OF_LOADING))
}

pub fn extract_port_of_discharge<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    as_strs(lines)
        .find(|l| l.contains(PORT_OF_DISCHARGE))
        .and_then(last_token)
}

pub fn extract_final_destination<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    as_strs(lines)
        .find(|l| l.contains(FINAL_DESTINATION))
        .and_then(last_token)
}

/// Text left after removing `label` from the line, trimmed. Last wins.
fn labelled_value<S: AsRef<str>>(lines: &[S], label: &str) -> Option<String> {
    last_match(
        lines,
        |l| l.contains(label),
        |l| Some(l.replace(label, "").trim().to_string()),
    )
}

pub fn extract_net_weight<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    labelled_value(lines, NET_WEIGHT)
}

pub fn extract_gross_weight<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    labelled_value(lines, GROSS_WEIGHT)
}

/// Amount in words: text after the first colon (whole line without one). Last wins.
pub fn extract_amount_in_words<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    last_match(
        lines,
        |l| l.contains(AMOUNT_IN_WORDS),
        |l| {
            let tail = l.split_once(':').map(|(_, rest)| rest).unwrap_or(l);
            Some(tail.trim().to_string())
        },
    )
}

/// Total amount: last token of the last line starting with "Total".
pub fn extract_total_amount<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    last_match(lines, |l| l.starts_with(TOTAL), last_token)
}

/// "Yes" if any line carries the signature caption, otherwise "".
pub fn extract_authorised_signature<S: AsRef<str>>(lines: &[S]) -> String {
    if as_strs(lines).any(|l| l.contains(AUTHORISED_SIGNATURE)) {
        SIGNED.to_string()
    } else {
        String::new()
    }
}
