//! Edit types for HGVS variants
//!
//! Nucleotide and protein edits, plus the [`EditType`] classification the
//! component decomposer and slang generator dispatch on.

use crate::hgvs::location::{one_letter_string, three_letter_string, AminoAcid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural classification of an edit
///
/// The textual form is the short upper-case code used in literature-mining
/// tables (`SUB`, `DEL`, `INDEL`, ...). Keyword input that names no known type
/// is preserved as [`EditType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EditType {
    Substitution,
    Deletion,
    Duplication,
    Insertion,
    InsertionDeletion,
    Frameshift,
    Inversion,
    Identity,
    Other(String),
}

impl EditType {
    /// Short upper-case code
    pub fn code(&self) -> &str {
        match self {
            EditType::Substitution => "SUB",
            EditType::Deletion => "DEL",
            EditType::Duplication => "DUP",
            EditType::Insertion => "INS",
            EditType::InsertionDeletion => "INDEL",
            EditType::Frameshift => "FS",
            EditType::Inversion => "INV",
            EditType::Identity => "IDENTITY",
            EditType::Other(text) => text,
        }
    }

    /// Normalize free-form edit type text
    ///
    /// Matching is case-insensitive and accepts both the short codes and the
    /// names used by structured parsers (`sub`, `del`, `delins`, `indel`, `fs`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_lvg::hgvs::edit::EditType;
    ///
    /// assert_eq!(EditType::from_text("delins"), EditType::InsertionDeletion);
    /// assert_eq!(EditType::from_text("DELINS"), EditType::InsertionDeletion);
    /// assert_eq!(EditType::from_text("SUB"), EditType::Substitution);
    /// assert_eq!(EditType::from_text("conv"), EditType::Other("CONV".to_string()));
    /// ```
    pub fn from_text(text: &str) -> Self {
        let upper = text.trim().to_ascii_uppercase();
        match upper.as_str() {
            "SUB" | "SUBSTITUTION" => EditType::Substitution,
            "DEL" | "DELETION" => EditType::Deletion,
            "DUP" | "DUPLICATION" => EditType::Duplication,
            "INS" | "INSERTION" => EditType::Insertion,
            "DELINS" | "INDEL" => EditType::InsertionDeletion,
            "FS" | "FRAMESHIFT" => EditType::Frameshift,
            "INV" | "INVERSION" => EditType::Inversion,
            "IDENTITY" | "=" => EditType::Identity,
            _ => EditType::Other(upper),
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for EditType {
    fn from(text: String) -> Self {
        EditType::from_text(&text)
    }
}

impl From<EditType> for String {
    fn from(edit_type: EditType) -> Self {
        edit_type.code().to_string()
    }
}

/// Nucleic acid edit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NaEdit {
    /// `A>G`
    Substitution { reference: String, alternative: String },
    /// `del`, `delACGT` or `del18`
    Deletion {
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        length: Option<u64>,
    },
    /// `dup` or `dupA`
    Duplication {
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
    },
    /// `insACGT`
    Insertion { alternative: String },
    /// `delinsACGT` or `delAinsT`
    Delins {
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
        alternative: String,
    },
    /// `inv` or `invACG`
    Inversion {
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
    },
    /// `A=` or `=`
    Identity {
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
    },
}

impl NaEdit {
    pub fn edit_type(&self) -> EditType {
        match self {
            NaEdit::Substitution { .. } => EditType::Substitution,
            NaEdit::Deletion { .. } => EditType::Deletion,
            NaEdit::Duplication { .. } => EditType::Duplication,
            NaEdit::Insertion { .. } => EditType::Insertion,
            NaEdit::Delins { .. } => EditType::InsertionDeletion,
            NaEdit::Inversion { .. } => EditType::Inversion,
            NaEdit::Identity { .. } => EditType::Identity,
        }
    }

    /// Reference bases named by the edit, if any
    pub fn reference(&self) -> Option<&str> {
        match self {
            NaEdit::Substitution { reference, .. } => Some(reference),
            NaEdit::Deletion { reference, .. }
            | NaEdit::Duplication { reference }
            | NaEdit::Delins { reference, .. }
            | NaEdit::Inversion { reference }
            | NaEdit::Identity { reference } => reference.as_deref(),
            NaEdit::Insertion { .. } => None,
        }
    }

    /// Alternate bases
    ///
    /// Deletions report an empty alternate; duplications and inversions have
    /// no alternate field at all.
    pub fn alternative(&self) -> Option<&str> {
        match self {
            NaEdit::Substitution { alternative, .. }
            | NaEdit::Insertion { alternative }
            | NaEdit::Delins { alternative, .. } => Some(alternative),
            NaEdit::Deletion { .. } => Some(""),
            NaEdit::Identity { reference } => reference.as_deref(),
            NaEdit::Duplication { .. } | NaEdit::Inversion { .. } => None,
        }
    }
}

impl fmt::Display for NaEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaEdit::Substitution {
                reference,
                alternative,
            } => write!(f, "{}>{}", reference, alternative),
            NaEdit::Deletion { reference, length } => {
                write!(f, "del")?;
                if let Some(reference) = reference {
                    write!(f, "{}", reference)?;
                } else if let Some(length) = length {
                    write!(f, "{}", length)?;
                }
                Ok(())
            }
            NaEdit::Duplication { reference } => {
                write!(f, "dup{}", reference.as_deref().unwrap_or(""))
            }
            NaEdit::Insertion { alternative } => write!(f, "ins{}", alternative),
            NaEdit::Delins {
                reference,
                alternative,
            } => write!(
                f,
                "del{}ins{}",
                reference.as_deref().unwrap_or(""),
                alternative
            ),
            NaEdit::Inversion { reference } => {
                write!(f, "inv{}", reference.as_deref().unwrap_or(""))
            }
            NaEdit::Identity { reference } => {
                write!(f, "{}=", reference.as_deref().unwrap_or(""))
            }
        }
    }
}

/// Protein edit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProteinEdit {
    /// `Lys2569Gly`: the reference residue is the interval start
    Substitution { alternative: AminoAcid },
    /// `Gly12del`
    Deletion,
    /// `Gly4_Gln6dup`
    Duplication,
    /// `Lys23_Leu24insArgSer`
    Insertion { alternative: Vec<AminoAcid> },
    /// `Leu747_Pro753delinsSer`
    Delins { alternative: Vec<AminoAcid> },
    /// `Arg97fs`, `Arg97ProfsTer23`
    Frameshift {
        #[serde(skip_serializing_if = "Option::is_none")]
        alternative: Option<AminoAcid>,
        /// Stop position, either digits or `?`
        #[serde(skip_serializing_if = "Option::is_none")]
        stop: Option<String>,
    },
    /// `Leu20=`
    Identity,
}

impl ProteinEdit {
    pub fn edit_type(&self) -> EditType {
        match self {
            ProteinEdit::Substitution { .. } => EditType::Substitution,
            ProteinEdit::Deletion => EditType::Deletion,
            ProteinEdit::Duplication => EditType::Duplication,
            ProteinEdit::Insertion { .. } => EditType::Insertion,
            ProteinEdit::Delins { .. } => EditType::InsertionDeletion,
            ProteinEdit::Frameshift { .. } => EditType::Frameshift,
            ProteinEdit::Identity => EditType::Identity,
        }
    }

    /// Alternate residues as single-letter codes
    pub fn alternative(&self) -> Option<String> {
        match self {
            ProteinEdit::Substitution { alternative } => {
                Some(alternative.to_one_letter().to_string())
            }
            ProteinEdit::Insertion { alternative } | ProteinEdit::Delins { alternative } => {
                Some(one_letter_string(alternative))
            }
            ProteinEdit::Frameshift { alternative, .. } => Some(
                alternative
                    .map(|aa| aa.to_one_letter().to_string())
                    .unwrap_or_default(),
            ),
            ProteinEdit::Deletion => Some(String::new()),
            ProteinEdit::Duplication | ProteinEdit::Identity => None,
        }
    }

    /// Stop position of a frameshift (`23` for `fsTer23`)
    pub fn frameshift_stop(&self) -> Option<&str> {
        match self {
            ProteinEdit::Frameshift { stop, .. } => stop.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ProteinEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProteinEdit::Substitution { alternative } => write!(f, "{}", alternative),
            ProteinEdit::Deletion => write!(f, "del"),
            ProteinEdit::Duplication => write!(f, "dup"),
            ProteinEdit::Insertion { alternative } => {
                write!(f, "ins{}", three_letter_string(alternative))
            }
            ProteinEdit::Delins { alternative } => {
                write!(f, "delins{}", three_letter_string(alternative))
            }
            ProteinEdit::Frameshift { alternative, stop } => {
                if let Some(aa) = alternative {
                    write!(f, "{}", aa)?;
                }
                write!(f, "fs")?;
                if let Some(stop) = stop {
                    write!(f, "Ter{}", stop)?;
                }
                Ok(())
            }
            ProteinEdit::Identity => write!(f, "="),
        }
    }
}
