//! Edit parsing
//!
//! Parses the edit portion of HGVS variants (substitution, deletion, insertion, etc.)

use crate::hgvs::edit::{NaEdit, ProteinEdit};
use crate::hgvs::parser::position::parse_amino_acid;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, opt},
    multi::many1,
    sequence::preceded,
    IResult, Parser,
};

/// Valid nucleotide characters: upper-case IUPAC codes plus lower-case
/// `acgtun` for r. notation
const fn is_na_base(b: u8) -> bool {
    matches!(
        b,
        b'A' | b'C'
            | b'G'
            | b'T'
            | b'U'
            | b'N'
            | b'R'
            | b'Y'
            | b'S'
            | b'W'
            | b'K'
            | b'M'
            | b'B'
            | b'D'
            | b'H'
            | b'V'
            | b'a'
            | b'c'
            | b'g'
            | b't'
            | b'u'
            | b'n'
    )
}

/// Parse a nucleotide sequence, normalized to upper case
fn parse_sequence(input: &str) -> IResult<&str, String> {
    let end = input.bytes().take_while(|b| is_na_base(*b)).count();
    if end == 0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeWhile1,
        )));
    }
    Ok((&input[end..], input[..end].to_ascii_uppercase()))
}

fn parse_count(input: &str) -> IResult<&str, u64> {
    let (remaining, digits) = digit1.parse(input)?;
    let count = digits.parse::<u64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((remaining, count))
}

/// Parse a substitution (`A>G`)
fn parse_substitution(input: &str) -> IResult<&str, NaEdit> {
    map(
        (parse_sequence, char('>'), parse_sequence),
        |(reference, _, alternative)| NaEdit::Substitution {
            reference,
            alternative,
        },
    )
    .parse(input)
}

/// Parse a deletion-insertion (`delinsGT`, `delACinsGT`)
fn parse_delins(input: &str) -> IResult<&str, NaEdit> {
    map(
        (tag("del"), opt(parse_sequence), tag("ins"), parse_sequence),
        |(_, reference, _, alternative)| NaEdit::Delins {
            reference,
            alternative,
        },
    )
    .parse(input)
}

/// Parse a deletion (`del`, `delACGT`, `del18`)
fn parse_deletion(input: &str) -> IResult<&str, NaEdit> {
    let (input, _) = tag("del").parse(input)?;
    let (input, reference) = opt(parse_sequence).parse(input)?;
    let (input, length) = if reference.is_none() {
        opt(parse_count).parse(input)?
    } else {
        (input, None)
    };
    Ok((input, NaEdit::Deletion { reference, length }))
}

/// Parse a duplication (`dup`, `dupA`)
fn parse_duplication(input: &str) -> IResult<&str, NaEdit> {
    map(preceded(tag("dup"), opt(parse_sequence)), |reference| {
        NaEdit::Duplication { reference }
    })
    .parse(input)
}

/// Parse an insertion; the inserted sequence must be literal bases
fn parse_insertion(input: &str) -> IResult<&str, NaEdit> {
    map(preceded(tag("ins"), parse_sequence), |alternative| {
        NaEdit::Insertion { alternative }
    })
    .parse(input)
}

/// Parse an inversion (`inv`, `invACG`)
fn parse_inversion(input: &str) -> IResult<&str, NaEdit> {
    map(preceded(tag("inv"), opt(parse_sequence)), |reference| {
        NaEdit::Inversion { reference }
    })
    .parse(input)
}

/// Parse an identity (`A=`, `=`)
fn parse_identity(input: &str) -> IResult<&str, NaEdit> {
    map((opt(parse_sequence), char('=')), |(reference, _)| {
        NaEdit::Identity { reference }
    })
    .parse(input)
}

/// Parse a nucleotide edit
pub fn parse_na_edit(input: &str) -> IResult<&str, NaEdit> {
    alt((
        parse_delins,
        parse_deletion,
        parse_duplication,
        parse_insertion,
        parse_inversion,
        parse_substitution,
        parse_identity,
    ))
    .parse(input)
}

/// Parse a frameshift stop position (`Ter23`, `*23`, `X23`, `Ter?`, `*?`)
fn parse_frameshift_stop(input: &str) -> IResult<&str, String> {
    preceded(
        alt((tag("Ter"), tag("*"), tag("X"))),
        alt((
            map(digit1, |digits: &str| digits.to_string()),
            map(tag("?"), |q: &str| q.to_string()),
        )),
    )
    .parse(input)
}

/// Parse a protein frameshift (`fs`, `ProfsTer23`, `fs*23`)
fn parse_protein_frameshift(input: &str) -> IResult<&str, ProteinEdit> {
    map(
        (opt(parse_amino_acid), tag("fs"), opt(parse_frameshift_stop)),
        |(alternative, _, stop)| ProteinEdit::Frameshift { alternative, stop },
    )
    .parse(input)
}

/// Parse a protein edit
pub fn parse_protein_edit(input: &str) -> IResult<&str, ProteinEdit> {
    alt((
        map(preceded(tag("delins"), many1(parse_amino_acid)), |alternative| {
            ProteinEdit::Delins { alternative }
        }),
        map(tag("del"), |_| ProteinEdit::Deletion),
        map(tag("dup"), |_| ProteinEdit::Duplication),
        map(preceded(tag("ins"), many1(parse_amino_acid)), |alternative| {
            ProteinEdit::Insertion { alternative }
        }),
        parse_protein_frameshift,
        map(char('='), |_| ProteinEdit::Identity),
        map(parse_amino_acid, |alternative| ProteinEdit::Substitution {
            alternative,
        }),
    ))
    .parse(input)
}
