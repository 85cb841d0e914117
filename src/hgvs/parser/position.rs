//! Position parsing
//!
//! Nucleotide positions (`123`, `-12`, `*45`, `100+5`, `100-2`), amino acids
//! and protein positions, and `start_end` intervals of either.

use crate::hgvs::location::{AminoAcid, Interval, NaPos, ProtPos};
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{map, opt},
    sequence::preceded,
    IResult, Parser,
};

fn parse_i64(input: &str) -> IResult<&str, i64> {
    let (remaining, digits) = digit1.parse(input)?;
    let value = digits.parse::<i64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((remaining, value))
}

fn parse_u64(input: &str) -> IResult<&str, u64> {
    let (remaining, digits) = digit1.parse(input)?;
    let value = digits.parse::<u64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((remaining, value))
}

/// Parse an intronic offset (`+5`, `-2`)
fn parse_offset(input: &str) -> IResult<&str, i64> {
    alt((
        preceded(char('+'), parse_i64),
        map(preceded(char('-'), parse_i64), |n| -n),
    ))
    .parse(input)
}

/// Parse a nucleotide position
pub fn parse_na_pos(input: &str) -> IResult<&str, NaPos> {
    let (input, utr3) = opt(char('*')).parse(input)?;
    let (input, base) = if utr3.is_some() {
        parse_i64(input)?
    } else {
        alt((map(preceded(char('-'), parse_i64), |n| -n), parse_i64)).parse(input)?
    };
    let (input, offset) = opt(parse_offset).parse(input)?;
    Ok((
        input,
        NaPos {
            base,
            utr3: utr3.is_some(),
            offset,
        },
    ))
}

/// Parse a nucleotide position or `start_end` range
pub fn parse_na_interval(input: &str) -> IResult<&str, Interval<NaPos>> {
    let (input, start) = parse_na_pos(input)?;
    let (input, end) = opt(preceded(char('_'), parse_na_pos)).parse(input)?;
    Ok((input, Interval { start, end }))
}

fn parse_amino_acid_three_letter(input: &str) -> IResult<&str, AminoAcid> {
    input
        .get(..3)
        .and_then(AminoAcid::from_three_letter)
        .map(|aa| (&input[3..], aa))
        .ok_or_else(|| nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)))
}

/// Parse a 1-letter amino acid code (upper-case letters and `*`)
pub fn parse_amino_acid_one_letter(input: &str) -> IResult<&str, AminoAcid> {
    let c = input.chars().next().ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Eof))
    })?;
    match AminoAcid::from_one_letter(c) {
        Some(aa) => Ok((&input[c.len_utf8()..], aa)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Parse an amino acid code (3-letter or 1-letter)
///
/// Tries 3-letter codes first so that `Val` is read as Val, not V followed by `al`.
pub fn parse_amino_acid(input: &str) -> IResult<&str, AminoAcid> {
    alt((parse_amino_acid_three_letter, parse_amino_acid_one_letter)).parse(input)
}

/// Parse a protein position (`Lys2569`, `K2569`)
pub fn parse_prot_pos(input: &str) -> IResult<&str, ProtPos> {
    let (input, (aa, number)) = (parse_amino_acid, parse_u64).parse(input)?;
    Ok((input, ProtPos::new(aa, number)))
}

/// Parse a protein position or `start_end` range
pub fn parse_prot_interval(input: &str) -> IResult<&str, Interval<ProtPos>> {
    let (input, start) = parse_prot_pos(input)?;
    let (input, end) = opt(preceded(char('_'), parse_prot_pos)).parse(input)?;
    Ok((input, Interval { start, end }))
}
