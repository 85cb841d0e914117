//! Component decomposition and slang tests
//!
//! Covers the three ways of building components (parsed variants,
//! amino-acid change text, keyword fields) and the slang rules for each
//! edit type.

use ferro_lvg::components::{ComponentsRecord, VariantComponents};
use ferro_lvg::hgvs::EditType;
use ferro_lvg::{find_all_amino_changes, parse_hgvs, LvgError, SeqType};
use rstest::rstest;

fn slang(text: &str) -> Result<Vec<String>, LvgError> {
    let variant = parse_hgvs(text).unwrap();
    VariantComponents::from_variant(&variant)?.posedit_slang()
}

// =============================================================================
// Slang from parsed variants
// =============================================================================

#[rstest]
#[case("NM_014874.3:c.891C>T", &["891C->T", "891C-->T", "891C/T", "C891T"])]
#[case("NC_000017.11:g.43045712A>G", &["43045712A->G", "43045712A-->G", "43045712A/G", "A43045712G"])]
#[case("NM_007294.3:c.4964_4982delCTGGCCTGACCCCAGAAGA", &["4964_4982del"])]
#[case("NM_005228.3:c.2240_2257del18", &["2240_2257del"])]
#[case("NM_025114.3:c.6869dupA", &["6869dup"])]
#[case("NM_003331.4:c.3318_3319insC", &[])]
#[case("NM_000546.6:c.76_78delinsTT", &[])]
#[case("NP_000537.3:p.Lys2569Gly", &["Lys2569Gly", "K2569G"])]
#[case("NP_000537.3:p.(Lys2569Gly)", &["Lys2569Gly", "K2569G"])]
#[case("NP_000537.3:p.Trp288Ter", &["Trp288*", "Trp288X", "W288X"])]
#[case("NP_000537.3:p.Trp288*", &["Trp288*", "Trp288X", "W288X"])]
#[case("NP_000537.3:p.Ter110Gln", &["*110Gln", "X110Gln", "X110Q"])]
fn test_variant_slang(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(slang(input).unwrap(), expected, "slang for {}", input);
}

#[rstest]
#[case("NM_000546.6:c.100_200inv")]
#[case("NM_000546.6:c.100A=")]
fn test_variant_slang_unsupported(#[case] input: &str) {
    let err = slang(input).unwrap_err();
    assert!(
        matches!(err, LvgError::UnsupportedEditType { .. }),
        "unexpected error for {}: {:?}",
        input,
        err
    );
}

#[rstest]
#[case("NP_000537.3:p.?")]
#[case("NP_000537.3:p.=")]
#[case("NP_000537.3:p.0")]
fn test_placeholder_rejected(#[case] input: &str) {
    let variant = parse_hgvs(input).unwrap();
    let err = VariantComponents::from_variant(&variant).unwrap_err();
    assert!(err.is_rejected());
}

// =============================================================================
// Keyword fields
// =============================================================================

#[test]
fn test_coding_substitution_from_fields() {
    let components = VariantComponents::from_fields([
        ("SeqType", "c"),
        ("EditType", "SUB"),
        ("Ref", "C"),
        ("Pos", "891"),
        ("Alt", "T"),
    ]);
    assert_eq!(components.posedit().unwrap(), "891C>T");
    assert_eq!(
        components.posedit_slang().unwrap(),
        vec!["891C->T", "891C-->T", "891C/T", "C891T"]
    );
}

#[test]
fn test_fields_trimmed_and_case_insensitive() {
    let components = VariantComponents::from_fields([
        ("seqtype", " C "),
        ("edittype", "del"),
        ("ref", "AG "),
        ("POS", " 10_11"),
        ("alt", ""),
    ]);
    assert_eq!(components.seqtype, Some(SeqType::Coding));
    assert_eq!(components.edittype, Some(EditType::Deletion));
    assert_eq!(components.reference, "AG");
    assert_eq!(components.posedit().unwrap(), "10_11delAG");
}

#[test]
fn test_fields_infer_protein() {
    let components = VariantComponents::from_fields([
        ("EditType", "SUB"),
        ("Ref", "L"),
        ("Pos", "653"),
        ("Alt", "R"),
    ]);
    assert_eq!(components.seqtype, Some(SeqType::Protein));
    assert_eq!(components.posedit().unwrap(), "Leu653Arg");
}

#[test]
fn test_fields_frameshift() {
    let components = VariantComponents::from_fields([
        ("SeqType", "p"),
        ("EditType", "FS"),
        ("Ref", "R"),
        ("Pos", "97"),
        ("Alt", ""),
        ("FS_Pos", "23"),
    ]);
    assert_eq!(components.posedit().unwrap(), "Arg97fsTer23");
    assert_eq!(
        components.posedit_slang().unwrap(),
        vec!["Arg97fs*23", "Arg97fsX23", "Arg97fs"]
    );
}

#[rstest]
#[case("DELINS")]
#[case("indel")]
fn test_fields_delins_aliases(#[case] edittype: &str) {
    let components = VariantComponents::from_fields([
        ("SeqType", "c"),
        ("EditType", edittype),
        ("Pos", "76_78"),
        ("Alt", "TT"),
    ]);
    assert_eq!(components.edittype, Some(EditType::InsertionDeletion));
    assert_eq!(components.posedit().unwrap(), "76_78delinsTT");
    assert!(components.posedit_slang().unwrap().is_empty());
}

#[test]
fn test_fields_unknown_edit_type() {
    let components = VariantComponents::from_fields([
        ("SeqType", "c"),
        ("EditType", "CONVERSION"),
        ("Pos", "76_78"),
    ]);
    assert!(matches!(
        components.posedit_slang().unwrap_err(),
        LvgError::UnsupportedEditType { .. }
    ));
}

#[test]
fn test_record_json_column_names() {
    let variant = parse_hgvs("NM_025114.3:c.6869dupA").unwrap();
    let record = VariantComponents::from_variant(&variant).unwrap().to_record();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["Ref"], "A");
    assert_eq!(json["Pos"], "6869");
    assert_eq!(json["SeqType"], "c");
    assert_eq!(json["EditType"], "DUP");
    assert!(json.get("DupX").is_some());
    assert!(json.get("FS_Pos").is_none());

    let back: ComponentsRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

// =============================================================================
// Amino-acid change text
// =============================================================================

#[rstest]
#[case("Leu653Arg")]
#[case("L653R")]
#[case("p.Leu653Arg")]
#[case("p.(L653R)")]
fn test_amino_change_lexeme(#[case] input: &str) {
    let components = VariantComponents::from_amino_change(input).unwrap();
    assert_eq!(components.seqtype, Some(SeqType::Protein));
    assert_eq!(components.posedit().unwrap(), "Leu653Arg");
    let slang = components.posedit_slang().unwrap();
    assert!(slang.contains(&"Leu653Arg".to_string()));
    assert!(slang.contains(&"L653R".to_string()));
}

#[rstest]
#[case("boogers")]
#[case("653")]
#[case("Leu653")]
fn test_amino_change_rejected(#[case] input: &str) {
    let err = VariantComponents::from_amino_change(input).unwrap_err();
    assert!(err.is_rejected(), "{} should be rejected", input);
}

#[test]
fn test_find_amino_changes_in_text() {
    let text = "Patients carried V600E (Val600Glu) or the p.(Gly12Asp) allele";
    assert_eq!(
        find_all_amino_changes(text),
        vec!["V600E", "Val600Glu", "Gly12Asp"]
    );
}
