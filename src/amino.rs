//! Amino-acid change mentions in free text
//!
//! Recognizes protein substitutions written the way they appear in papers
//! and clinical reports:
//! - long form: `Leu653Arg`, `(Trp288Ter)`, `Trp288*`
//! - short form: `L653R`, `W288*`, `W288X`

use crate::error::LvgError;
use crate::hgvs::location::AminoAcid;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const REF_THREE_LETTER: &str =
    "Ala|Arg|Asn|Asp|Cys|Gln|Glu|Gly|His|Ile|Leu|Lys|Met|Phe|Pro|Ser|Thr|Trp|Tyr|Val";
const REF_ONE_LETTER: &str = "[ACDEFGHIKLMNPQRSTVWY]";
const ALT_ONE_LETTER: &str = "[ACDEFGHIKLMNPQRSTVWYX]";

fn long_form_body() -> String {
    format!(
        r"(?P<ref>{aa})(?P<pos>[1-9][0-9]*)(?P<alt>(?:{aa}|Ter)\b|\*)",
        aa = REF_THREE_LETTER
    )
}

fn short_form_body() -> String {
    format!(
        r"(?P<ref>{r})(?P<pos>[1-9][0-9]*)(?P<alt>{a}\b|\*)",
        r = REF_ONE_LETTER,
        a = ALT_ONE_LETTER
    )
}

static LONG_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\(?\b{}\)?", long_form_body())).unwrap());

static SHORT_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\(?\b{}\)?", short_form_body())).unwrap());

static LONG_FORM_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{}$", long_form_body())).unwrap());

static SHORT_FORM_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{}$", short_form_body())).unwrap());

/// A protein substitution read from free text, in single-letter codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoChange {
    pub reference: char,
    pub position: u64,
    /// Replacement residue; `*` marks a stop
    pub alternative: char,
}

impl AminoChange {
    /// Render with three-letter codes, e.g. `Leu653Arg`
    pub fn to_long_form(&self) -> Option<String> {
        Some(format!(
            "{}{}{}",
            three_letter_code(self.reference)?,
            self.position,
            three_letter_code(self.alternative)?
        ))
    }
}

impl fmt::Display for AminoChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.reference, self.position, self.alternative)
    }
}

/// Three-letter code for a single-letter residue
///
/// Both `*` and `X` read as a stop (`Ter`), since `X` is how normalized
/// components spell a stop.
pub fn three_letter_code(c: char) -> Option<&'static str> {
    match c {
        '*' | 'X' => Some(AminoAcid::Ter.to_three_letter()),
        other => AminoAcid::from_one_letter(other).map(|aa| aa.to_three_letter()),
    }
}

fn one_letter_from_three(code: &str) -> Option<char> {
    if code == "*" {
        return Some('*');
    }
    AminoAcid::from_three_letter(code).map(|aa| aa.to_one_letter())
}

/// Parse a single amino-acid change
///
/// Accepts long or short form, with optional surrounding parentheses and an
/// optional `p.` prefix. The long form is tried first.
///
/// # Examples
///
/// ```
/// use ferro_lvg::amino::parse_amino_change;
///
/// let change = parse_amino_change("p.(Leu653Arg)").unwrap();
/// assert_eq!(change.to_string(), "L653R");
/// assert!(parse_amino_change("not a change").is_err());
/// ```
pub fn parse_amino_change(text: &str) -> Result<AminoChange, LvgError> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix("p.").unwrap_or(trimmed);
    let body = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .unwrap_or(body);

    if let Some(caps) = LONG_FORM_EXACT.captures(body) {
        let reference = one_letter_from_three(&caps["ref"]);
        let alternative = one_letter_from_three(&caps["alt"]);
        let position = caps["pos"].parse::<u64>().ok();
        if let (Some(reference), Some(position), Some(alternative)) =
            (reference, position, alternative)
        {
            return Ok(AminoChange {
                reference,
                position,
                alternative,
            });
        }
    }

    if let Some(caps) = SHORT_FORM_EXACT.captures(body) {
        let reference = caps["ref"].chars().next();
        let alternative = caps["alt"].chars().next();
        let position = caps["pos"].parse::<u64>().ok();
        if let (Some(reference), Some(position), Some(alternative)) =
            (reference, position, alternative)
        {
            return Ok(AminoChange {
                reference,
                position,
                alternative,
            });
        }
    }

    Err(LvgError::rejected(format!(
        "could not parse amino-change string '{}'",
        text
    )))
}

/// Find every amino-acid change mentioned in `text`
///
/// Long-form mentions win over any short-form match overlapping them.
/// Results are in order of appearance with parentheses removed.
///
/// # Examples
///
/// ```
/// use ferro_lvg::amino::find_all_amino_changes;
///
/// let found = find_all_amino_changes("EGFR (Leu858Arg) and T790M were both seen");
/// assert_eq!(found, vec!["Leu858Arg", "T790M"]);
/// ```
pub fn find_all_amino_changes(text: &str) -> Vec<String> {
    let mut spans: Vec<(usize, usize)> = LONG_FORM
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let short: Vec<(usize, usize)> = SHORT_FORM
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .filter(|(start, end)| {
            !spans
                .iter()
                .any(|(long_start, long_end)| start < long_end && long_start < end)
        })
        .collect();
    spans.extend(short);
    spans.sort_unstable();

    spans
        .into_iter()
        .map(|(start, end)| text[start..end].replace(['(', ')'], ""))
        .collect()
}
