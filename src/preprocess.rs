//! Text normalization applied before parsing
//!
//! Descriptors copied from reports often embed the gene symbol after the
//! accession, e.g. `NM_003331.4(TYK2):c.3318_3319insC`. The parser expects
//! the accession-only form.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// `<accession>.<version>(<GENE>):` at the start of a descriptor
static EMBEDDED_GENE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+\.\d+(?P<gene>\((?P<symbol>\w+)\)):").unwrap());

/// Remove an embedded `(GENE)` annotation following the accession
///
/// Returns the input unchanged when there is no such annotation.
///
/// # Examples
///
/// ```
/// use ferro_lvg::preprocess::strip_embedded_gene_name;
///
/// assert_eq!(
///     strip_embedded_gene_name("NM_003331.4(TYK2):c.3318_3319insC"),
///     "NM_003331.4:c.3318_3319insC"
/// );
/// assert_eq!(
///     strip_embedded_gene_name("NM_003331.4:c.3318_3319insC"),
///     "NM_003331.4:c.3318_3319insC"
/// );
/// ```
pub fn strip_embedded_gene_name(text: &str) -> Cow<'_, str> {
    match EMBEDDED_GENE_PATTERN
        .captures(text)
        .and_then(|caps| caps.name("gene"))
    {
        Some(gene) => {
            let mut stripped = String::with_capacity(text.len() - gene.len());
            stripped.push_str(&text[..gene.start()]);
            stripped.push_str(&text[gene.end()..]);
            Cow::Owned(stripped)
        }
        None => Cow::Borrowed(text),
    }
}

/// The gene symbol embedded after the accession, if any
pub fn embedded_gene_name(text: &str) -> Option<&str> {
    EMBEDDED_GENE_PATTERN
        .captures(text)
        .and_then(|caps| caps.name("symbol"))
        .map(|m| m.as_str())
}
