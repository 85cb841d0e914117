//! HGVS parser using nom
//!
//! Covers the subset of HGVS the variant generator consumes: accessioned
//! g./c./n./r./m./o. variants with substitution, deletion, duplication,
//! insertion, delins, inversion and identity edits, and p. variants with
//! substitution, deletion, duplication, insertion, delins, frameshift and
//! identity edits. It is not a general HGVS validator.

pub mod accession;
pub mod edit;
pub mod position;
pub mod variant;

use crate::error::LvgError;
use crate::hgvs::variant::SequenceVariant;
use memchr::memchr;

/// Parse an HGVS string into a variant
///
/// The whole input must be consumed; surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use ferro_lvg::parse_hgvs;
///
/// let variant = parse_hgvs("NM_003331.4:c.3318_3319insC").unwrap();
/// assert_eq!(variant.to_string(), "NM_003331.4:c.3318_3319insC");
/// assert!(parse_hgvs("NM_003331.4:c.3318_3319ins83").is_err());
/// ```
pub fn parse_hgvs(input: &str) -> Result<SequenceVariant, LvgError> {
    let trimmed = input.trim();

    // No separator means no accessioned variant; skip the combinators
    if memchr(b':', trimmed.as_bytes()).is_none() {
        return Err(LvgError::parse(0, "missing ':' after accession"));
    }

    match variant::parse_sequence_variant(trimmed) {
        Ok(("", v)) => Ok(v),
        Ok((remaining, _)) => Err(LvgError::parse(
            trimmed.len() - remaining.len(),
            format!("unexpected trailing input '{}'", remaining),
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(LvgError::parse(
            trimmed.len() - e.input.len(),
            format!("unexpected input '{}'", e.input),
        )),
        Err(nom::Err::Incomplete(_)) => Err(LvgError::parse(trimmed.len(), "incomplete input")),
    }
}
