//! Closure stages
//!
//! The closure is a fixed sequence of stages, each taking the state built so
//! far and returning the extended state. It is a single bounded pass: a
//! variant discovered late (for example a coding variant found through a
//! transcript in stage 6) is not fed back into earlier stages other than the
//! final coding to protein step.

use crate::hgvs::parser::parse_hgvs;
use crate::hgvs::variant::{SeqType, SequenceVariant};
use crate::lvg::translate::Translator;
use crate::lvg::LvgOptions;
use crate::mapping::TranscriptResolver;
use crate::preprocess::strip_embedded_gene_name;
use std::collections::{BTreeMap, BTreeSet};

/// Variants known for each sequence type, keyed by canonical string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantSets {
    genomic: BTreeMap<String, SequenceVariant>,
    coding: BTreeMap<String, SequenceVariant>,
    noncoding: BTreeMap<String, SequenceVariant>,
    protein: BTreeMap<String, SequenceVariant>,
}

impl VariantSets {
    pub fn get(&self, seqtype: SeqType) -> &BTreeMap<String, SequenceVariant> {
        match seqtype {
            SeqType::Genomic => &self.genomic,
            SeqType::Coding => &self.coding,
            SeqType::NonCoding => &self.noncoding,
            SeqType::Protein => &self.protein,
        }
    }

    fn get_mut(&mut self, seqtype: SeqType) -> &mut BTreeMap<String, SequenceVariant> {
        match seqtype {
            SeqType::Genomic => &mut self.genomic,
            SeqType::Coding => &mut self.coding,
            SeqType::NonCoding => &mut self.noncoding,
            SeqType::Protein => &mut self.protein,
        }
    }

    /// File a variant under its own sequence type
    ///
    /// Returns false if the variant has no supported sequence type or is
    /// already known.
    pub fn insert(&mut self, variant: SequenceVariant) -> bool {
        let Some(seqtype) = variant.seqtype() else {
            return false;
        };
        let key = variant.to_string();
        let set = self.get_mut(seqtype);
        if set.contains_key(&key) {
            return false;
        }
        set.insert(key, variant);
        true
    }

    /// Snapshot of the variants of one type
    fn snapshot(&self, seqtype: SeqType) -> Vec<SequenceVariant> {
        self.get(seqtype).values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        SeqType::ALL.iter().map(|t| self.get(*t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the closure has discovered so far
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureState {
    pub primary: SequenceVariant,
    pub variants: VariantSets,
    pub transcripts: BTreeSet<String>,
}

impl ClosureState {
    pub fn new(primary: SequenceVariant, transcripts: impl IntoIterator<Item = String>) -> Self {
        Self {
            primary,
            variants: VariantSets::default(),
            transcripts: transcripts.into_iter().collect(),
        }
    }
}

/// Collaborators and settings shared by all stages
pub(crate) struct ClosureContext<'a> {
    pub(crate) translator: Translator<'a>,
    pub(crate) resolver: &'a dyn TranscriptResolver,
    pub(crate) options: &'a LvgOptions,
}

impl ClosureContext<'_> {
    fn is_noncoding(&self, transcript: &str) -> bool {
        self.options
            .noncoding_prefixes
            .iter()
            .any(|prefix| transcript.starts_with(prefix.as_str()))
    }
}

type Stage = fn(ClosureState, &ClosureContext<'_>) -> ClosureState;

const STAGES: [Stage; 7] = [
    seed_enrichment,
    insert_primary,
    translate_coding,
    collect_transcripts,
    translate_primary_genomic,
    translate_genomic,
    translate_coding_to_protein,
];

/// Run every stage in order
pub(crate) fn run_closure(state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    STAGES.iter().fold(state, |state, stage| stage(state, ctx))
}

/// Stage 1: seed with caller-supplied enrichment variants
fn seed_enrichment(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    for listed_as in SeqType::ALL {
        for text in ctx.options.enrichment(listed_as) {
            let variant = match parse_hgvs(&strip_embedded_gene_name(text)) {
                Ok(variant) => variant,
                Err(err) => {
                    log::info!("Skipping unparseable enrichment entry '{}': {}", text, err);
                    continue;
                }
            };
            match variant.seqtype() {
                None => {
                    log::warn!(
                        "Skipping enrichment entry {} of unsupported type '{}'",
                        variant,
                        variant.kind
                    );
                    continue;
                }
                Some(seqtype) if seqtype != listed_as => log::debug!(
                    "Enrichment entry {} listed as {} but is {}",
                    variant,
                    listed_as,
                    seqtype
                ),
                Some(_) => {}
            }
            state.variants.insert(variant);
        }
    }
    state
}

/// Stage 2: the primary variant itself
fn insert_primary(mut state: ClosureState, _ctx: &ClosureContext<'_>) -> ClosureState {
    if state.primary.seqtype().is_none() {
        log::warn!(
            "Ignoring supplied variant of type '{}' (not supported) -- (input was {})",
            state.primary.kind,
            state.primary
        );
        return state;
    }
    let primary = state.primary.clone();
    state.variants.insert(primary);
    state
}

/// Stage 3: every known coding variant to every other type
fn translate_coding(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    for coding in state.variants.snapshot(SeqType::Coding) {
        for to in SeqType::ALL {
            if let Some(found) = ctx
                .translator
                .translate(&coding, SeqType::Coding, to, None)
            {
                state.variants.insert(found);
            }
        }
    }
    state
}

/// Stage 4: transcripts overlapping each genomic variant
fn collect_transcripts(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    for genomic in state.variants.get(SeqType::Genomic).values() {
        match ctx.resolver.relevant_transcripts(genomic) {
            Ok(transcripts) => state.transcripts.extend(transcripts),
            Err(err) => log::warn!("Cannot resolve transcripts for {}: {}", genomic, err),
        }
    }
    state
}

/// Stage 5: a genomic primary variant onto each transcript
fn translate_primary_genomic(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    if state.primary.seqtype() != Some(SeqType::Genomic) {
        return state;
    }
    let transcripts: Vec<String> = state.transcripts.iter().cloned().collect();
    for transcript in &transcripts {
        for to in [SeqType::Coding, SeqType::NonCoding] {
            if let Some(found) =
                ctx.translator
                    .translate(&state.primary, SeqType::Genomic, to, Some(transcript))
            {
                state.variants.insert(found);
            }
        }
    }
    state
}

/// Stage 6: every genomic variant onto every transcript
fn translate_genomic(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    let transcripts: Vec<String> = state.transcripts.iter().cloned().collect();
    let genomic = state.variants.snapshot(SeqType::Genomic);
    for transcript in &transcripts {
        for variant in &genomic {
            if !ctx.is_noncoding(transcript) {
                if let Some(found) = ctx.translator.translate(
                    variant,
                    SeqType::Genomic,
                    SeqType::Coding,
                    Some(transcript),
                ) {
                    state.variants.insert(found);
                }
            }
            if let Some(found) = ctx.translator.translate(
                variant,
                SeqType::Genomic,
                SeqType::NonCoding,
                Some(transcript),
            ) {
                state.variants.insert(found);
            }
        }
    }
    state
}

/// Stage 7: every coding variant now known to protein
fn translate_coding_to_protein(mut state: ClosureState, ctx: &ClosureContext<'_>) -> ClosureState {
    for coding in state.variants.snapshot(SeqType::Coding) {
        if let Some(found) = ctx
            .translator
            .translate(&coding, SeqType::Coding, SeqType::Protein, None)
        {
            state.variants.insert(found);
        }
    }
    state
}
