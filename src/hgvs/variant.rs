//! HGVS variant types
//!
//! A [`SequenceVariant`] is an accession, a coordinate kind and a position/edit.
//! Its `Display` rendering is canonical and serves as the variant's identity
//! for deduplication.

use super::edit::{NaEdit, ProteinEdit};
use super::location::{Interval, NaPos, ProtPos};
use crate::error::LvgError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four sequence contexts the closure engine works across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeqType {
    #[serde(rename = "g")]
    Genomic,
    #[serde(rename = "c")]
    Coding,
    #[serde(rename = "n")]
    NonCoding,
    #[serde(rename = "p")]
    Protein,
}

impl SeqType {
    /// All sequence types in closure order
    pub const ALL: [SeqType; 4] = [
        SeqType::Genomic,
        SeqType::Coding,
        SeqType::NonCoding,
        SeqType::Protein,
    ];

    pub fn as_char(&self) -> char {
        match self {
            SeqType::Genomic => 'g',
            SeqType::Coding => 'c',
            SeqType::NonCoding => 'n',
            SeqType::Protein => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(SeqType::Genomic),
            'c' => Some(SeqType::Coding),
            'n' => Some(SeqType::NonCoding),
            'p' => Some(SeqType::Protein),
            _ => None,
        }
    }
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for SeqType {
    type Err = LvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => SeqType::from_char(c.to_ascii_lowercase()),
            _ => None,
        }
        .ok_or_else(|| LvgError::parse(0, format!("unknown sequence type '{}'", trimmed)))
    }
}

/// Coordinate prefix declared by a parsed variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    #[serde(rename = "g")]
    Genomic,
    #[serde(rename = "c")]
    Coding,
    #[serde(rename = "n")]
    NonCoding,
    #[serde(rename = "p")]
    Protein,
    #[serde(rename = "r")]
    Rna,
    #[serde(rename = "m")]
    Mitochondrial,
    #[serde(rename = "o")]
    Circular,
}

impl VariantKind {
    pub fn as_char(&self) -> char {
        match self {
            VariantKind::Genomic => 'g',
            VariantKind::Coding => 'c',
            VariantKind::NonCoding => 'n',
            VariantKind::Protein => 'p',
            VariantKind::Rna => 'r',
            VariantKind::Mitochondrial => 'm',
            VariantKind::Circular => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(VariantKind::Genomic),
            'c' => Some(VariantKind::Coding),
            'n' => Some(VariantKind::NonCoding),
            'p' => Some(VariantKind::Protein),
            'r' => Some(VariantKind::Rna),
            'm' => Some(VariantKind::Mitochondrial),
            'o' => Some(VariantKind::Circular),
            _ => None,
        }
    }

    /// The closure-engine sequence type, if this kind has one
    pub fn seqtype(&self) -> Option<SeqType> {
        match self {
            VariantKind::Genomic => Some(SeqType::Genomic),
            VariantKind::Coding => Some(SeqType::Coding),
            VariantKind::NonCoding => Some(SeqType::NonCoding),
            VariantKind::Protein => Some(SeqType::Protein),
            VariantKind::Rna | VariantKind::Mitochondrial | VariantKind::Circular => None,
        }
    }
}

impl From<SeqType> for VariantKind {
    fn from(seqtype: SeqType) -> Self {
        match seqtype {
            SeqType::Genomic => VariantKind::Genomic,
            SeqType::Coding => VariantKind::Coding,
            SeqType::NonCoding => VariantKind::NonCoding,
            SeqType::Protein => VariantKind::Protein,
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accession number with optional version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Accession {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Accession {
    pub fn new(name: impl Into<String>, version: Option<u32>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Full accession string including version, e.g. `NM_005228.3`
    pub fn full(&self) -> String {
        match self.version {
            Some(v) => format!("{}.{}", self.name, v),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(v) = self.version {
            write!(f, ".{}", v)?;
        }
        Ok(())
    }
}

/// Whole-sequence placeholder edits with no position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placeholder {
    /// `=`: no change
    Identity,
    /// `?`: effect unknown
    Unknown,
    /// `0`: no product
    NoProduct,
}

impl Placeholder {
    pub fn symbol(&self) -> char {
        match self {
            Placeholder::Identity => '=',
            Placeholder::Unknown => '?',
            Placeholder::NoProduct => '0',
        }
    }
}

/// Position plus edit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PosEdit {
    /// Bare `=`, `?` or `0`
    Placeholder {
        symbol: Placeholder,
        #[serde(default)]
        uncertain: bool,
    },
    /// Nucleotide interval and edit
    Na {
        interval: Interval<NaPos>,
        edit: NaEdit,
    },
    /// Protein interval and edit, optionally predicted (parenthesized)
    Protein {
        interval: Interval<ProtPos>,
        edit: ProteinEdit,
        #[serde(default)]
        uncertain: bool,
    },
}

impl PosEdit {
    /// Mark the posedit as predicted, rendered in parentheses
    pub fn into_uncertain(self) -> Self {
        match self {
            PosEdit::Placeholder { symbol, .. } => PosEdit::Placeholder {
                symbol,
                uncertain: true,
            },
            PosEdit::Protein { interval, edit, .. } => PosEdit::Protein {
                interval,
                edit,
                uncertain: true,
            },
            other => other,
        }
    }
}

impl fmt::Display for PosEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosEdit::Placeholder { symbol, uncertain } => {
                if *uncertain {
                    write!(f, "({})", symbol.symbol())
                } else {
                    write!(f, "{}", symbol.symbol())
                }
            }
            PosEdit::Na { interval, edit } => write!(f, "{}{}", interval, edit),
            PosEdit::Protein {
                interval,
                edit,
                uncertain,
            } => {
                if *uncertain {
                    write!(f, "({}{})", interval, edit)
                } else {
                    write!(f, "{}{}", interval, edit)
                }
            }
        }
    }
}

/// A parsed HGVS sequence variant
///
/// # Examples
///
/// ```
/// use ferro_lvg::hgvs::variant::{SeqType, SequenceVariant};
///
/// let v: SequenceVariant = "NM_005228.3:c.2240_2257del18".parse().unwrap();
/// assert_eq!(v.seqtype(), Some(SeqType::Coding));
/// assert_eq!(v.to_string(), "NM_005228.3:c.2240_2257del18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceVariant {
    pub accession: Accession,
    pub kind: VariantKind,
    pub posedit: PosEdit,
}

impl SequenceVariant {
    pub fn new(accession: Accession, kind: VariantKind, posedit: PosEdit) -> Self {
        Self {
            accession,
            kind,
            posedit,
        }
    }

    /// Sequence type for the closure engine; `None` for r./m./o. variants
    pub fn seqtype(&self) -> Option<SeqType> {
        self.kind.seqtype()
    }

    /// Full accession string, e.g. `NM_005228.3`
    pub fn ac(&self) -> String {
        self.accession.full()
    }
}

impl fmt::Display for SequenceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.accession, self.kind, self.posedit)
    }
}

impl FromStr for SequenceVariant {
    type Err = LvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::hgvs::parser::parse_hgvs(s)
    }
}
