//! Exchange format tests
//!
//! JSON serialization of variant generation results and reconstruction of
//! the engine from a record.

use ferro_lvg::{ExchangeRecord, LvgError, MockMapper, Providers, VariantLvg};
use rstest::rstest;
use serde_json::json;

fn providers() -> Providers {
    Providers::new(MockMapper::with_test_data())
}

#[test]
fn test_embedded_gene_round_trip() {
    let providers = providers();
    let lvg = VariantLvg::new("NM_003331.4(TYK2):c.3318_3319insC", &providers).unwrap();
    assert_eq!(lvg.hgvs_text(), "NM_003331.4:c.3318_3319insC");

    let json = lvg.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["hgvs_text"], "NM_003331.4:c.3318_3319insC");
    assert_eq!(value["gene_name"], "TYK2");
    assert_eq!(value["hgvs_c"], json!(["NM_003331.4:c.3318_3319insC"]));

    let restored = VariantLvg::from_json(&json, &providers).unwrap();
    assert_eq!(restored.hgvs_text(), "NM_003331.4:c.3318_3319insC");
    assert_eq!(restored.hgvs_c(), lvg.hgvs_c());
    assert_eq!(restored.gene_name(), Some("TYK2"));
}

#[test]
fn test_full_round_trip() {
    let providers = providers();
    let lvg = VariantLvg::new("NM_005228.3:c.2240_2257del18", &providers).unwrap();
    let record = ExchangeRecord::from_lvg(&lvg);

    let restored = VariantLvg::from_record(&record, &providers).unwrap();
    assert_eq!(ExchangeRecord::from_lvg(&restored), record);
    assert_eq!(restored.seqvars(), lvg.seqvars());
    assert_eq!(restored.transcripts(), lvg.transcripts());
}

#[test]
fn test_record_lists_seed_engine_without_mapper() {
    let record = ExchangeRecord {
        hgvs_text: "NM_005228.3:c.2240_2257del18".to_string(),
        gene_name: Some("EGFR".to_string()),
        hgvs_g: vec!["NC_000007.14:g.55174777_55174794delGGAATTAAGAGAAGCAAC".to_string()],
        hgvs_c: Vec::new(),
        hgvs_n: Vec::new(),
        hgvs_p: vec!["NP_005219.2:p.(Leu747_Pro753delinsSer)".to_string()],
        transcripts: vec!["NM_005228.3".to_string()],
    };
    let restored = VariantLvg::from_record(&record, &Providers::new(MockMapper::new())).unwrap();
    assert_eq!(restored.hgvs_g(), record.hgvs_g);
    assert_eq!(restored.hgvs_p(), record.hgvs_p);
    assert_eq!(restored.hgvs_c(), vec!["NM_005228.3:c.2240_2257del18"]);
    assert!(restored.transcripts().contains("NM_005228.3"));
    assert_eq!(restored.gene_name(), Some("EGFR"));
}

#[test]
fn test_from_json_minimal_record() {
    let lvg = VariantLvg::from_json(
        r#"{"hgvs_text": "NM_003331.4:c.3318_3319insC"}"#,
        &providers(),
    )
    .unwrap();
    assert_eq!(lvg.hgvs_c(), vec!["NM_003331.4:c.3318_3319insC"]);
    assert_eq!(lvg.gene_name(), Some("TYK2"));
}

#[rstest]
#[case(r#"{"gene_name": "EGFR", "hgvs_c": []}"#)]
#[case(r#"{"hgvs_text": null}"#)]
#[case(r#""NM_003331.4:c.3318_3319insC""#)]
fn test_from_json_malformed_record(#[case] json: &str) {
    let err = VariantLvg::from_json(json, &providers()).unwrap_err();
    assert!(
        matches!(err, LvgError::MalformedRecord { .. }),
        "unexpected error for {}: {:?}",
        json,
        err
    );
}

#[test]
fn test_from_json_unparseable_text() {
    let err = VariantLvg::from_json(r#"{"hgvs_text": "boogers"}"#, &providers()).unwrap_err();
    assert!(matches!(err, LvgError::MalformedInput { .. }));
}

#[test]
fn test_from_json_bad_list_type() {
    let err = VariantLvg::from_json(
        r#"{"hgvs_text": "NM_003331.4:c.3318_3319insC", "hgvs_g": "oops"}"#,
        &providers(),
    )
    .unwrap_err();
    assert!(matches!(err, LvgError::Json { .. }));
}
