//! Slang generation
//!
//! Each rule maps the official lexeme to the alternate spellings found in
//! literature. Rules are selected by `(seqtype, edittype)`; protein variants
//! share one rule regardless of edit type.

use super::VariantComponents;
use crate::error::LvgError;
use crate::hgvs::edit::EditType;
use crate::hgvs::variant::SeqType;

/// Informal replacements for `>` in substitutions
const SUBSTITUTION_SYMBOLS: [&str; 3] = ["->", "-->", "/"];

/// Informal spellings of the `Ter` stop codon
const STOP_SYMBOLS: [&str; 2] = ["*", "X"];

pub(super) fn posedit_slang(components: &VariantComponents) -> Result<Vec<String>, LvgError> {
    match (components.seqtype, components.edittype.as_ref()) {
        (Some(SeqType::Protein), _) => protein_slang(components),
        (_, Some(EditType::Substitution)) => substitution_slang(components),
        (_, Some(EditType::Deletion)) => Ok(vec![format!("{}del", components.pos)]),
        (_, Some(EditType::Duplication)) => Ok(vec![format!("{}dup", components.pos)]),
        (_, Some(EditType::Insertion | EditType::InsertionDeletion)) => Ok(Vec::new()),
        (_, other) => Err(LvgError::UnsupportedEditType {
            edit_type: other.map(|e| e.to_string()).unwrap_or_default(),
        }),
    }
}

fn push_unique(out: &mut Vec<String>, item: String) {
    if !out.contains(&item) {
        out.push(item);
    }
}

fn compact(components: &VariantComponents) -> String {
    format!(
        "{}{}{}",
        components.reference, components.pos, components.alt
    )
}

/// e.g. `Lys2569Gly` gives `Lys2569Gly` and `K2569G`; `Arg97ProfsTer23`
/// gives the stop spellings and `Arg97Profs`
fn protein_slang(components: &VariantComponents) -> Result<Vec<String>, LvgError> {
    let posedit = components.posedit()?.replace(['(', ')'], "");
    let mut out = Vec::new();
    for symbol in STOP_SYMBOLS {
        push_unique(&mut out, posedit.replace("Ter", symbol));
    }
    match posedit.find("fs") {
        Some(idx) => push_unique(&mut out, posedit[..idx + "fs".len()].to_string()),
        None => push_unique(&mut out, compact(components)),
    }
    Ok(out)
}

/// e.g. `891C>T` gives `891C->T`, `891C-->T`, `891C/T` and `C891T`
fn substitution_slang(components: &VariantComponents) -> Result<Vec<String>, LvgError> {
    let posedit = components.posedit()?;
    let mut out = Vec::new();
    for symbol in SUBSTITUTION_SYMBOLS {
        push_unique(&mut out, posedit.replace('>', symbol));
    }
    push_unique(&mut out, compact(components));
    Ok(out)
}
