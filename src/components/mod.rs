//! Variant components
//!
//! Decomposes a variant into the flat `{seqtype, edittype, ref, pos, alt}`
//! record used by literature-mining tables, and generates the informal
//! spellings ("slang") of its position/edit lexeme seen in papers.
//!
//! Components can be built three ways:
//! - from a parsed [`SequenceVariant`] ([`VariantComponents::from_variant`])
//! - from a free-text amino-acid change ([`VariantComponents::from_amino_change`])
//! - from keyword fields ([`VariantComponents::from_fields`])

mod slang;

use crate::amino::{parse_amino_change, three_letter_code, AminoChange};
use crate::error::LvgError;
use crate::hgvs::edit::EditType;
use crate::hgvs::location::AminoAcid;
use crate::hgvs::variant::{PosEdit, SeqType, SequenceVariant};
use serde::{Deserialize, Serialize};
use std::fmt;

const DNA_NUCLEOTIDES: &str = "ACTG";

/// How the components were obtained, kept for lexeme construction
#[derive(Debug, Clone, PartialEq)]
enum Origin {
    Variant(SequenceVariant),
    AminoChange(AminoChange),
    Fields,
}

/// Normalized components of a single variant
#[derive(Debug, Clone, PartialEq)]
pub struct VariantComponents {
    origin: Origin,
    pub seqtype: Option<SeqType>,
    pub edittype: Option<EditType>,
    pub reference: String,
    pub pos: String,
    pub alt: String,
    pub fs_pos: Option<String>,
    pub dupx: Option<String>,
}

impl VariantComponents {
    /// Decompose a parsed variant
    ///
    /// Fails with [`LvgError::RejectedVariant`] for bare placeholder edits
    /// (`p.?`, `p.=`, `p.0`) and for protein variants without a start residue.
    pub fn from_variant(variant: &SequenceVariant) -> Result<Self, LvgError> {
        let mut seqtype = variant.seqtype();
        if seqtype.is_none() {
            log::warn!(
                "SequenceVariant has unsupported seqtype '{}' ({})",
                variant.kind,
                variant
            );
        }

        let (edittype, reference, pos, alt, fs_pos) = match &variant.posedit {
            PosEdit::Placeholder { .. } => {
                return Err(LvgError::rejected(format!(
                    "SequenceVariant missing edit information ({})",
                    variant
                )));
            }
            PosEdit::Na { .. } if seqtype == Some(SeqType::Protein) => {
                return Err(LvgError::rejected("Protein entry incomplete (unusable)."));
            }
            PosEdit::Na { interval, edit } => {
                let alt = edit.alternative();
                if alt.is_none() && edit.edit_type() != EditType::Duplication {
                    log::warn!("SequenceVariant {} has no alternate allele", variant);
                }
                (
                    edit.edit_type(),
                    edit.reference().unwrap_or_default().to_string(),
                    interval.to_string(),
                    alt.unwrap_or_default().to_string(),
                    None,
                )
            }
            PosEdit::Protein { interval, edit, .. } => {
                let alt = edit.alternative();
                if alt.is_none() && edit.edit_type() != EditType::Duplication {
                    log::warn!("SequenceVariant {} has no alternate residue", variant);
                }
                (
                    edit.edit_type(),
                    normalize_stop(interval.start.aa.to_one_letter().to_string()),
                    interval.start.number.to_string(),
                    alt.unwrap_or_default(),
                    edit.frameshift_stop().map(str::to_string),
                )
            }
        };

        if seqtype.is_none() {
            seqtype = infer_seqtype(&reference, &alt);
        }

        Ok(Self {
            origin: Origin::Variant(variant.clone()),
            seqtype,
            edittype: Some(edittype),
            reference,
            pos,
            alt: normalize_stop(alt),
            fs_pos,
            dupx: None,
        })
    }

    /// Build protein components from a short- or long-form amino-acid change
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_lvg::components::VariantComponents;
    /// use ferro_lvg::hgvs::SeqType;
    ///
    /// let comp = VariantComponents::from_amino_change("Leu653Arg").unwrap();
    /// assert_eq!(comp.seqtype, Some(SeqType::Protein));
    /// assert_eq!(comp.posedit().unwrap(), "Leu653Arg");
    /// assert!(comp.posedit_slang().unwrap().contains(&"L653R".to_string()));
    /// ```
    pub fn from_amino_change(text: &str) -> Result<Self, LvgError> {
        let change = parse_amino_change(text)?;
        Ok(Self {
            origin: Origin::AminoChange(change),
            seqtype: Some(SeqType::Protein),
            edittype: None,
            reference: change.reference.to_string(),
            pos: change.position.to_string(),
            alt: normalize_stop(change.alternative.to_string()),
            fs_pos: None,
            dupx: None,
        })
    }

    /// Build components from keyword fields
    ///
    /// Keys are matched case-insensitively (`SeqType`, `EditType`, `Ref`,
    /// `Pos`, `Alt`, `FS_Pos`, `DupX`) and values are trimmed. Unknown keys are
    /// ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut components = Self {
            origin: Origin::Fields,
            seqtype: None,
            edittype: None,
            reference: String::new(),
            pos: String::new(),
            alt: String::new(),
            fs_pos: None,
            dupx: None,
        };

        for (key, value) in fields {
            let value = value.as_ref().trim();
            match key.as_ref().to_ascii_lowercase().as_str() {
                "seqtype" if !value.is_empty() => match value.parse::<SeqType>() {
                    Ok(seqtype) => components.seqtype = Some(seqtype),
                    Err(_) => log::warn!("Ignoring unsupported seqtype '{}'", value),
                },
                "edittype" if !value.is_empty() => {
                    components.edittype = Some(EditType::from_text(value))
                }
                "ref" => components.reference = value.to_string(),
                "pos" => components.pos = value.to_string(),
                "alt" => components.alt = normalize_stop(value.to_string()),
                "fs_pos" => components.fs_pos = Some(value.to_string()),
                "dupx" => components.dupx = Some(value.to_string()),
                _ => {}
            }
        }

        if components.seqtype.is_none() {
            components.seqtype = infer_seqtype(&components.reference, &components.alt);
        }
        components
    }

    /// Rebuild components from a flat record
    pub fn from_record(record: &ComponentsRecord) -> Self {
        let mut fields = vec![
            ("SeqType", record.seqtype.as_str()),
            ("EditType", record.edittype.as_str()),
            ("Ref", record.reference.as_str()),
            ("Pos", record.pos.as_str()),
            ("Alt", record.alt.as_str()),
        ];
        if let Some(fs_pos) = &record.fs_pos {
            fields.push(("FS_Pos", fs_pos.as_str()));
        }
        if let Some(dupx) = &record.dupx {
            fields.push(("DupX", dupx.as_str()));
        }
        Self::from_fields(fields)
    }

    /// The variant these components were decomposed from, if any
    pub fn variant(&self) -> Option<&SequenceVariant> {
        match &self.origin {
            Origin::Variant(variant) => Some(variant),
            _ => None,
        }
    }

    /// The official position/edit lexeme, e.g. `891C>T` or `Leu653Arg`
    pub fn posedit(&self) -> Result<String, LvgError> {
        match &self.origin {
            Origin::Variant(variant) => Ok(variant.posedit.to_string()),
            Origin::AminoChange(change) => Ok(protein_lexeme(
                change.reference,
                &self.pos,
                change.alternative,
            )),
            Origin::Fields => self.reconstruct_posedit(),
        }
    }

    fn reconstruct_posedit(&self) -> Result<String, LvgError> {
        if self.seqtype == Some(SeqType::Protein) {
            let reference = self.reference.chars().next().unwrap_or('X');
            if self.edittype == Some(EditType::Frameshift) {
                let stop = self
                    .fs_pos
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .map(|p| format!("Ter{}", p))
                    .unwrap_or_default();
                return Ok(format!(
                    "{}{}fs{}",
                    three_letter_code(reference).unwrap_or_default(),
                    self.pos,
                    stop
                ));
            }
            let alt = self.alt.chars().next().unwrap_or('X');
            return Ok(protein_lexeme(reference, &self.pos, alt));
        }

        match &self.edittype {
            Some(EditType::Substitution) => {
                Ok(format!("{}{}>{}", self.pos, self.reference, self.alt))
            }
            Some(EditType::Deletion) => Ok(format!("{}del{}", self.pos, self.reference)),
            Some(EditType::Duplication) => Ok(format!("{}dup{}", self.pos, self.reference)),
            Some(EditType::Insertion) => Ok(format!("{}ins{}", self.pos, self.alt)),
            Some(EditType::InsertionDeletion) => Ok(format!("{}delins{}", self.pos, self.alt)),
            other => Err(LvgError::UnsupportedEditType {
                edit_type: other.as_ref().map(|e| e.to_string()).unwrap_or_default(),
            }),
        }
    }

    /// Informal spellings of the position/edit lexeme
    ///
    /// Fails with [`LvgError::UnsupportedEditType`] for nucleotide edit types
    /// without a slang rule.
    pub fn posedit_slang(&self) -> Result<Vec<String>, LvgError> {
        slang::posedit_slang(self)
    }

    /// Flat projection with literature-mining column names
    pub fn to_record(&self) -> ComponentsRecord {
        let edittype = self.edittype.as_ref().map(|e| e.to_string()).unwrap_or_default();
        ComponentsRecord {
            fs_pos: (self.edittype == Some(EditType::Frameshift))
                .then(|| self.fs_pos.clone().unwrap_or_default()),
            dupx: (self.edittype == Some(EditType::Duplication))
                .then(|| self.dupx.clone().unwrap_or_default()),
            reference: self.reference.clone(),
            alt: self.alt.clone(),
            seqtype: self.seqtype.map(|s| s.to_string()).unwrap_or_default(),
            edittype,
            pos: self.pos.clone(),
        }
    }
}

impl fmt::Display for VariantComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} ref={} pos={} alt={}",
            self.seqtype.map(|s| s.as_char()).unwrap_or('?'),
            self.edittype.as_ref().map(|e| e.code()).unwrap_or("?"),
            self.posedit().unwrap_or_default(),
            self.reference,
            self.pos,
            self.alt
        )
    }
}

/// Flat record of components, as stored in literature-mining tables
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentsRecord {
    #[serde(rename = "Ref")]
    pub reference: String,
    #[serde(rename = "Alt")]
    pub alt: String,
    #[serde(rename = "SeqType")]
    pub seqtype: String,
    #[serde(rename = "EditType")]
    pub edittype: String,
    #[serde(rename = "Pos")]
    pub pos: String,
    /// Present only for frameshifts
    #[serde(rename = "FS_Pos", default, skip_serializing_if = "Option::is_none")]
    pub fs_pos: Option<String>,
    /// Present only for duplications
    #[serde(rename = "DupX", default, skip_serializing_if = "Option::is_none")]
    pub dupx: Option<String>,
}

/// Infer the sequence type from reference and alternate text
///
/// `U` anywhere means RNA (non-coding transcript). Otherwise any standard
/// amino-acid letter outside `ACTG` means protein. Anything else is
/// undecidable.
pub fn infer_seqtype(reference: &str, alt: &str) -> Option<SeqType> {
    let refalt = format!("{}{}", reference, alt).to_ascii_uppercase();
    if refalt.contains('U') {
        return Some(SeqType::NonCoding);
    }
    refalt
        .chars()
        .any(|c| !DNA_NUCLEOTIDES.contains(c) && AminoAcid::is_standard_one_letter(c))
        .then_some(SeqType::Protein)
}

/// A stop written `*` is stored as `X`, in both ref and alt
fn normalize_stop(alt: String) -> String {
    if alt == "*" {
        "X".to_string()
    } else {
        alt
    }
}

fn protein_lexeme(reference: char, pos: &str, alt: char) -> String {
    let three = |c: char| {
        three_letter_code(c)
            .map(str::to_string)
            .unwrap_or_else(|| c.to_string())
    };
    format!("{}{}{}", three(reference), pos, three(alt))
}
