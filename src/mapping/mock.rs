//! Mock mapping collaborators for testing

use crate::hgvs::parser::parse_hgvs;
use crate::hgvs::variant::{SeqType, SequenceVariant};
use crate::mapping::provider::{
    MappingError, TranscriptResolver, TxIdentity, TxIdentityProvider, VariantMapper,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup key: input canonical string, target type, target transcript
type TranslationKey = (String, SeqType, Option<String>);

/// Table-driven mapper, resolver and identity oracle
///
/// Translations are stored as text and parsed on lookup, so a malformed
/// fixture surfaces as [`MappingError::Internal`].
#[derive(Debug, Default)]
pub struct MockMapper {
    translations: HashMap<TranslationKey, Result<String, MappingError>>,
    transcripts: HashMap<String, Result<Vec<String>, MappingError>>,
    identities: HashMap<String, TxIdentity>,
    translate_calls: AtomicUsize,
}

impl MockMapper {
    /// Create an empty mock mapper
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `input` translates to `output` in sequence type `to`
    pub fn add_translation(
        &mut self,
        input: &str,
        to: SeqType,
        transcript: Option<&str>,
        output: &str,
    ) {
        self.translations.insert(
            (input.to_string(), to, transcript.map(str::to_string)),
            Ok(output.to_string()),
        );
    }

    /// Record that translating `input` to `to` fails with `error`
    pub fn add_failure(
        &mut self,
        input: &str,
        to: SeqType,
        transcript: Option<&str>,
        error: MappingError,
    ) {
        self.translations.insert(
            (input.to_string(), to, transcript.map(str::to_string)),
            Err(error),
        );
    }

    /// Record the transcripts relevant to a genomic variant
    pub fn add_transcripts<I, S>(&mut self, genomic: &str, transcripts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transcripts.insert(
            genomic.to_string(),
            Ok(transcripts.into_iter().map(Into::into).collect()),
        );
    }

    /// Record that resolving transcripts for `genomic` fails with `error`
    pub fn add_resolver_failure(&mut self, genomic: &str, error: MappingError) {
        self.transcripts.insert(genomic.to_string(), Err(error));
    }

    /// Add transcript identity information
    pub fn add_tx_identity(&mut self, identity: TxIdentity) {
        self.identities.insert(identity.accession.clone(), identity);
    }

    /// Number of times the translation oracle has been invoked
    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::Relaxed)
    }

    /// Create a mapper with the EGFR exon 19 deletion and TYK2 fixtures
    ///
    /// `NM_005228.3:c.2240_2257del18` reaches one genomic, two coding, two
    /// non-coding and one protein representation, through the coding
    /// transcript `NM_005228.3` and the non-coding transcript `NR_047551.1`.
    pub fn with_test_data() -> Self {
        const C_COUNT: &str = "NM_005228.3:c.2240_2257del18";
        const C_SEQ: &str = "NM_005228.3:c.2240_2257delGGAATTAAGAGAAGCAAC";
        const G: &str = "NC_000007.14:g.55174777_55174794delGGAATTAAGAGAAGCAAC";
        const N: &str = "NM_005228.3:n.2486_2503delGGAATTAAGAGAAGCAAC";
        const N_NONCODING: &str = "NR_047551.1:n.412_429delGGAATTAAGAGAAGCAAC";
        const P: &str = "NP_005219.2:p.(Leu747_Pro753delinsSer)";

        let mut mapper = Self::new();

        for c in [C_COUNT, C_SEQ] {
            mapper.add_translation(c, SeqType::Genomic, None, G);
            mapper.add_translation(c, SeqType::NonCoding, None, N);
            mapper.add_translation(c, SeqType::Protein, None, P);
        }

        mapper.add_transcripts(G, ["NM_005228.3", "NR_047551.1"]);
        mapper.add_translation(G, SeqType::Coding, Some("NM_005228.3"), C_SEQ);
        mapper.add_translation(G, SeqType::NonCoding, Some("NM_005228.3"), N);
        mapper.add_translation(G, SeqType::NonCoding, Some("NR_047551.1"), N_NONCODING);

        mapper.add_tx_identity(TxIdentity {
            accession: "NM_005228.3".to_string(),
            cds_start: Some(247),
            cds_end: Some(3877),
            exon_lengths: vec![424, 123, 183, 114, 156],
            gene_symbol: Some("EGFR".to_string()),
        });
        mapper.add_tx_identity(TxIdentity::new("NP_005219.2", Some("EGFR")));
        mapper.add_tx_identity(TxIdentity::new("NR_047551.1", None));
        mapper.add_tx_identity(TxIdentity::new("NM_003331.4", Some("TYK2")));

        mapper
    }
}

impl VariantMapper for MockMapper {
    fn translate(
        &self,
        variant: &SequenceVariant,
        from: SeqType,
        to: SeqType,
        transcript: Option<&str>,
    ) -> Result<SequenceVariant, MappingError> {
        self.translate_calls.fetch_add(1, Ordering::Relaxed);

        let key = (variant.to_string(), to, transcript.map(str::to_string));
        match self.translations.get(&key) {
            Some(Ok(output)) => parse_hgvs(output).map_err(|e| MappingError::internal(e.to_string())),
            Some(Err(err)) => Err(err.clone()),
            None => Err(MappingError::not_available(format!(
                "no {} to {} translation for {}",
                from, to, variant
            ))),
        }
    }
}

impl TranscriptResolver for MockMapper {
    fn relevant_transcripts(
        &self,
        genomic: &SequenceVariant,
    ) -> Result<Vec<String>, MappingError> {
        self.transcripts
            .get(&genomic.to_string())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

impl TxIdentityProvider for MockMapper {
    fn tx_identity_info(&self, accession: &str) -> Result<Option<TxIdentity>, MappingError> {
        Ok(self.identities.get(accession).cloned())
    }
}
