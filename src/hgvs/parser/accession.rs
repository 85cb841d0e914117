//! Accession parsing
//!
//! Parses reference sequence accessions like NC_000007.14, NM_005228.3,
//! NP_005219.2 or bare names like chr7.

use crate::hgvs::variant::Accession;
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::preceded,
    IResult, Parser,
};

/// Parse an accession with optional `.version`
pub fn parse_accession(input: &str) -> IResult<&str, Accession> {
    let (input, name) = recognize((
        take_while1(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))
    .parse(input)?;
    let (input, version) = opt(preceded(char('.'), parse_version)).parse(input)?;
    Ok((input, Accession::new(name, version)))
}

/// Parse version number
#[inline]
fn parse_version(input: &str) -> IResult<&str, u32> {
    let (remaining, s) = digit1.parse(input)?;
    // Checked parsing so an overflowing version is an error rather than 0
    let version: u32 = s.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((remaining, version))
}
