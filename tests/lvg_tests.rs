//! Variant generation tests
//!
//! End-to-end tests for the closure engine against the mock mapping
//! collaborators:
//! - EGFR exon 19 deletion across all sequence types
//! - Malformed input
//! - Length limits
//! - Deduplication, idempotence and determinism

use ferro_lvg::mapping::TxIdentity;
use ferro_lvg::{
    parse_hgvs, LvgError, LvgOptions, MappingError, MockMapper, Providers, SeqType, VariantLvg,
};
use rstest::rstest;
use std::sync::Arc;

const C_COUNT: &str = "NM_005228.3:c.2240_2257del18";
const C_SEQ: &str = "NM_005228.3:c.2240_2257delGGAATTAAGAGAAGCAAC";
const G: &str = "NC_000007.14:g.55174777_55174794delGGAATTAAGAGAAGCAAC";
const N: &str = "NM_005228.3:n.2486_2503delGGAATTAAGAGAAGCAAC";
const N_NONCODING: &str = "NR_047551.1:n.412_429delGGAATTAAGAGAAGCAAC";
const P: &str = "NP_005219.2:p.(Leu747_Pro753delinsSer)";

fn providers() -> Providers {
    Providers::new(MockMapper::with_test_data())
}

// =============================================================================
// EGFR exon 19 deletion
// =============================================================================

#[test]
fn test_egfr_coding_closure() {
    let lvg = VariantLvg::new(C_COUNT, &providers()).unwrap();

    assert_eq!(lvg.hgvs_text(), C_COUNT);
    assert_eq!(lvg.hgvs_g(), vec![G]);
    assert_eq!(lvg.hgvs_c(), vec![C_COUNT, C_SEQ]);
    assert_eq!(lvg.hgvs_n(), vec![N, N_NONCODING]);
    assert_eq!(lvg.hgvs_p(), vec![P]);
    assert!(lvg.hgvs_p()[0].contains("Leu747_Pro753delinsSer"));
    assert_eq!(
        lvg.transcripts().iter().collect::<Vec<_>>(),
        vec!["NM_005228.3", "NR_047551.1"]
    );
    assert_eq!(lvg.gene_name(), Some("EGFR"));
}

#[test]
fn test_seqvars_flattened_in_type_order() {
    let lvg = VariantLvg::new(C_COUNT, &providers()).unwrap();
    let all: Vec<String> = lvg.seqvars().iter().map(|v| v.to_string()).collect();
    assert_eq!(all, vec![G, C_COUNT, C_SEQ, N, N_NONCODING, P]);
}

#[test]
fn test_genomic_primary() {
    let lvg = VariantLvg::new(G, &providers()).unwrap();

    assert_eq!(lvg.hgvs_g(), vec![G]);
    // g. to c. only reaches the coding transcript
    assert_eq!(lvg.hgvs_c(), vec![C_SEQ]);
    assert_eq!(lvg.hgvs_n(), vec![N, N_NONCODING]);
    assert_eq!(lvg.hgvs_p(), vec![P]);
    assert_eq!(lvg.gene_name(), Some("EGFR"));
}

#[test]
fn test_embedded_gene_name_stripped() {
    let lvg = VariantLvg::new("NM_005228.3(EGFR):c.2240_2257del18", &providers()).unwrap();
    assert_eq!(lvg.hgvs_text(), C_COUNT);
    assert_eq!(lvg.hgvs_g(), vec![G]);
}

#[test]
fn test_same_result_through_two_transcripts_kept_once() {
    let g = "NC_000001.11:g.1000A>G";
    let shared = "NR_000001.1:n.50A>G";
    let mut mapper = MockMapper::new();
    mapper.add_transcripts(g, ["NM_000001.1", "NM_000002.1"]);
    for tx in ["NM_000001.1", "NM_000002.1"] {
        mapper.add_translation(g, SeqType::NonCoding, Some(tx), shared);
    }
    let mapper = Arc::new(mapper);
    let lvg = VariantLvg::new(g, &Providers::from_shared(Arc::clone(&mapper))).unwrap();

    assert_eq!(lvg.hgvs_n(), vec![shared]);
    assert_eq!(lvg.seqvars().len(), 2);
    // Stage 5 and stage 6 each ask once per transcript for g. to c. and g. to n.
    assert_eq!(mapper.translate_calls(), 8);
}

#[test]
fn test_unmapped_variant_keeps_primary() {
    let lvg = VariantLvg::new("NM_003331.4:c.3318_3319insC", &providers()).unwrap();
    assert!(lvg.hgvs_g().is_empty());
    assert!(lvg.hgvs_n().is_empty());
    assert!(lvg.hgvs_p().is_empty());
    assert_eq!(lvg.hgvs_c(), vec!["NM_003331.4:c.3318_3319insC"]);
    assert!(lvg.transcripts().is_empty());
    assert_eq!(lvg.gene_name(), Some("TYK2"));
}

// =============================================================================
// Malformed and unsupported input
// =============================================================================

#[rstest]
#[case("boogers")]
#[case("")]
#[case("NM_005228.3:c.")]
#[case("NM_005228.3:x.100A>G")]
fn test_malformed_input(#[case] input: &str) {
    let err = VariantLvg::new(input, &providers()).unwrap_err();
    assert!(
        matches!(err, LvgError::MalformedInput { .. }),
        "unexpected error for '{}': {:?}",
        input,
        err
    );
}

#[test]
fn test_unsupported_primary_type() {
    let lvg = VariantLvg::new("NM_000546.6:r.76a>u", &providers()).unwrap();
    assert_eq!(lvg.seqvar().to_string(), "NM_000546.6:r.76A>U");
    assert!(lvg.seqvars().is_empty());
    assert_eq!(lvg.gene_name(), None);
}

// =============================================================================
// Length limit
// =============================================================================

#[test]
fn test_length_limit_drops_long_protein() {
    let c = "NM_999999.1:c.10_11insGCCGCCGCC";
    let g = "NC_000001.11:g.1000_1001insGCCGCCGCC";
    let long_p = format!("NP_999999.1:p.Lys3_Leu4ins{}", "Ala".repeat(40));
    assert!(long_p.len() > 100);

    let mut mapper = MockMapper::new();
    mapper.add_translation(c, SeqType::Genomic, None, g);
    mapper.add_translation(c, SeqType::Protein, None, &long_p);
    let mapper = Arc::new(mapper);
    let providers = Providers::from_shared(Arc::clone(&mapper));

    let unlimited = VariantLvg::new(c, &providers).unwrap();
    assert_eq!(unlimited.hgvs_p().len(), 1);

    let options = LvgOptions::default().with_max_len(100);
    let limited = VariantLvg::with_options(c, options, &providers).unwrap();
    assert!(limited.hgvs_p().is_empty());
    assert_eq!(limited.hgvs_g(), vec![g]);
    assert_eq!(limited.hgvs_c(), vec![c]);
}

#[test]
fn test_length_limit_never_drops_primary() {
    let options = LvgOptions::default().with_max_len(10);
    let lvg = VariantLvg::with_options(C_COUNT, options, &providers()).unwrap();
    assert_eq!(lvg.hgvs_c(), vec![C_COUNT]);
    assert!(lvg.hgvs_g().is_empty());
}

// =============================================================================
// Enrichment, dedup and determinism
// =============================================================================

#[test]
fn test_enrichment_deduplicates() {
    let options = LvgOptions::default()
        .with_enrichment(SeqType::Genomic, [G, G])
        .with_enrichment(SeqType::Protein, [P]);
    let lvg = VariantLvg::with_options(C_COUNT, options, &providers()).unwrap();
    assert_eq!(lvg.hgvs_g(), vec![G]);
    assert_eq!(lvg.hgvs_p(), vec![P]);
}

#[test]
fn test_enrichment_filed_under_parsed_type() {
    let options = LvgOptions::default().with_enrichment(SeqType::Protein, [N_NONCODING]);
    let lvg =
        VariantLvg::with_options("NM_003331.4:c.3318_3319insC", options, &providers()).unwrap();
    assert!(lvg.hgvs_p().is_empty());
    assert_eq!(lvg.hgvs_n(), vec![N_NONCODING]);
}

#[test]
fn test_preseeded_transcripts() {
    let options = LvgOptions::default().with_transcripts(["NM_000000.1"]);
    let lvg =
        VariantLvg::with_options("NM_003331.4:c.3318_3319insC", options, &providers()).unwrap();
    assert!(lvg.transcripts().contains("NM_000000.1"));
}

#[test]
fn test_idempotent() {
    let first = VariantLvg::new(C_COUNT, &providers()).unwrap();
    let second = VariantLvg::new(first.hgvs_text(), &providers()).unwrap();
    assert_eq!(first.seqvars(), second.seqvars());
    assert_eq!(first.transcripts(), second.transcripts());
}

#[test]
fn test_deterministic() {
    let runs: Vec<Vec<String>> = (0..5)
        .map(|_| {
            let lvg = VariantLvg::new(C_COUNT, &providers()).unwrap();
            lvg.seqvars().iter().map(|v| v.to_string()).collect()
        })
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_parsed_variant_input() {
    let v = parse_hgvs(C_COUNT).unwrap();
    let from_text = VariantLvg::new(C_COUNT, &providers()).unwrap();
    let from_variant = VariantLvg::new(v, &providers()).unwrap();
    assert_eq!(from_text.seqvars(), from_variant.seqvars());
}

// =============================================================================
// Mapping failures
// =============================================================================

#[test]
fn test_mapping_failures_shrink_result() {
    let mut mapper = MockMapper::new();
    mapper.add_failure(C_COUNT, SeqType::Genomic, None, MappingError::internal("down"));
    mapper.add_failure(
        C_COUNT,
        SeqType::NonCoding,
        None,
        MappingError::UnsupportedPair {
            from: SeqType::Coding,
            to: SeqType::NonCoding,
        },
    );
    mapper.add_translation(C_COUNT, SeqType::Protein, None, P);
    let lvg = VariantLvg::new(C_COUNT, &Providers::new(mapper)).unwrap();
    assert!(lvg.hgvs_g().is_empty());
    assert!(lvg.hgvs_n().is_empty());
    assert_eq!(lvg.hgvs_p(), vec![P]);
}

// =============================================================================
// Gene name
// =============================================================================

#[test]
fn test_gene_name_prefers_coding() {
    let mut mapper = MockMapper::new();
    mapper.add_translation(C_COUNT, SeqType::Protein, None, P);
    mapper.add_tx_identity(TxIdentity::new("NM_005228.3", Some("EGFR")));
    mapper.add_tx_identity(TxIdentity::new("NP_005219.2", Some("OTHER")));
    let lvg = VariantLvg::new(C_COUNT, &Providers::new(mapper)).unwrap();
    assert_eq!(lvg.gene_name(), Some("EGFR"));
}

#[test]
fn test_gene_name_skips_empty_symbols() {
    let mut mapper = MockMapper::new();
    mapper.add_translation(C_COUNT, SeqType::Protein, None, P);
    mapper.add_tx_identity(TxIdentity::new("NM_005228.3", Some("")));
    mapper.add_tx_identity(TxIdentity::new("NP_005219.2", Some("EGFR")));
    let lvg = VariantLvg::new(C_COUNT, &Providers::new(mapper)).unwrap();
    assert_eq!(lvg.gene_name(), Some("EGFR"));
}

#[test]
fn test_gene_name_memoized() {
    let lvg = VariantLvg::new("NM_999999.1:c.1A>G", &providers()).unwrap();
    assert_eq!(lvg.gene_name(), None);
    assert_eq!(lvg.gene_name(), None);
}

#[test]
fn test_gene_name_concurrent_first_access() {
    let lvg = Arc::new(VariantLvg::new(C_COUNT, &providers()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lvg = Arc::clone(&lvg);
            std::thread::spawn(move || lvg.gene_name().map(str::to_string))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("EGFR"));
    }
}
