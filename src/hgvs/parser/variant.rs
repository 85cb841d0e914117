//! Full variant parsing
//!
//! Parses complete `<accession>:<kind>.<posedit>` strings into [`SequenceVariant`].

use crate::hgvs::parser::accession::parse_accession;
use crate::hgvs::parser::edit::{parse_na_edit, parse_protein_edit};
use crate::hgvs::parser::position::{parse_na_interval, parse_prot_interval};
use crate::hgvs::variant::{Placeholder, PosEdit, SequenceVariant, VariantKind};
use nom::{
    branch::alt,
    character::complete::{char, one_of},
    combinator::{map, map_opt},
    sequence::{delimited, terminated},
    IResult, Parser,
};

fn parse_kind(input: &str) -> IResult<&str, VariantKind> {
    terminated(map_opt(one_of("gcnprmo"), VariantKind::from_char), char('.')).parse(input)
}

fn parse_placeholder(input: &str) -> IResult<&str, Placeholder> {
    alt((
        map(char('='), |_| Placeholder::Identity),
        map(char('?'), |_| Placeholder::Unknown),
        map(char('0'), |_| Placeholder::NoProduct),
    ))
    .parse(input)
}

fn parse_na_posedit(input: &str) -> IResult<&str, PosEdit> {
    alt((
        map((parse_na_interval, parse_na_edit), |(interval, edit)| {
            PosEdit::Na { interval, edit }
        }),
        map(alt((char('='), char('?'))), |c| PosEdit::Placeholder {
            symbol: if c == '=' {
                Placeholder::Identity
            } else {
                Placeholder::Unknown
            },
            uncertain: false,
        }),
    ))
    .parse(input)
}

fn parse_protein_body(input: &str) -> IResult<&str, PosEdit> {
    alt((
        map(
            (parse_prot_interval, parse_protein_edit),
            |(interval, edit)| PosEdit::Protein {
                interval,
                edit,
                uncertain: false,
            },
        ),
        map(parse_placeholder, |symbol| PosEdit::Placeholder {
            symbol,
            uncertain: false,
        }),
    ))
    .parse(input)
}

fn parse_protein_posedit(input: &str) -> IResult<&str, PosEdit> {
    alt((
        map(
            delimited(char('('), parse_protein_body, char(')')),
            PosEdit::into_uncertain,
        ),
        parse_protein_body,
    ))
    .parse(input)
}

/// Parse a variant, returning any unconsumed input
pub fn parse_sequence_variant(input: &str) -> IResult<&str, SequenceVariant> {
    let (input, accession) = parse_accession(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, kind) = parse_kind(input)?;
    let (input, posedit) = match kind {
        VariantKind::Protein => parse_protein_posedit(input)?,
        _ => parse_na_posedit(input)?,
    };
    Ok((input, SequenceVariant::new(accession, kind, posedit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hgvs::edit::{NaEdit, ProteinEdit};

    #[test]
    fn test_parse_coding_deletion() {
        let (rest, v) = parse_sequence_variant("NM_005228.3:c.2240_2257del18").unwrap();
        assert_eq!(rest, "");
        assert_eq!(v.kind, VariantKind::Coding);
        assert!(matches!(
            v.posedit,
            PosEdit::Na {
                edit: NaEdit::Deletion {
                    length: Some(18),
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_parse_predicted_protein() {
        let (rest, v) =
            parse_sequence_variant("NP_005219.2:p.(Leu747_Pro753delinsSer)").unwrap();
        assert_eq!(rest, "");
        match v.posedit {
            PosEdit::Protein {
                edit, uncertain, ..
            } => {
                assert!(uncertain);
                assert!(matches!(edit, ProteinEdit::Delins { .. }));
            }
            other => panic!("unexpected posedit {:?}", other),
        }
    }

    #[test]
    fn test_parse_protein_placeholders() {
        for (text, symbol) in [
            ("NP_000001.1:p.?", Placeholder::Unknown),
            ("NP_000001.1:p.=", Placeholder::Identity),
            ("NP_000001.1:p.0", Placeholder::NoProduct),
        ] {
            let (_, v) = parse_sequence_variant(text).unwrap();
            assert_eq!(
                v.posedit,
                PosEdit::Placeholder {
                    symbol,
                    uncertain: false
                }
            );
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("r.").unwrap().1, VariantKind::Rna);
        assert!(parse_kind("x.").is_err());
        assert!(parse_kind("c").is_err());
    }
}
