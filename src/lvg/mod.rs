//! Lexical variant generation
//!
//! [`VariantLvg`] takes one variant and discovers its equivalent
//! representations across genomic, coding, non-coding and protein
//! coordinates, using the injected [`Providers`] for every translation.
//!
//! # Example
//!
//! ```
//! use ferro_lvg::lvg::VariantLvg;
//! use ferro_lvg::mapping::{MockMapper, Providers};
//!
//! let providers = Providers::new(MockMapper::with_test_data());
//! let lvg = VariantLvg::new("NM_005228.3:c.2240_2257del18", &providers).unwrap();
//!
//! assert_eq!(
//!     lvg.hgvs_g(),
//!     vec!["NC_000007.14:g.55174777_55174794delGGAATTAAGAGAAGCAAC"]
//! );
//! assert_eq!(lvg.hgvs_p(), vec!["NP_005219.2:p.(Leu747_Pro753delinsSer)"]);
//! assert_eq!(lvg.gene_name(), Some("EGFR"));
//! ```

pub mod closure;
mod translate;

use crate::error::LvgError;
use crate::hgvs::parser::parse_hgvs;
use crate::hgvs::variant::{SeqType, SequenceVariant};
use crate::mapping::{Providers, TxIdentityProvider};
use crate::preprocess::strip_embedded_gene_name;
use closure::{run_closure, ClosureContext, ClosureState, VariantSets};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, OnceLock};
use translate::Translator;

/// Accession prefixes of non-coding transcripts
pub const DEFAULT_NONCODING_PREFIXES: [&str; 2] = ["NR", "XR"];

/// Construction options for [`VariantLvg`]
#[derive(Debug, Clone, PartialEq)]
pub struct LvgOptions {
    /// Known genomic representations
    pub hgvs_g: Vec<String>,
    /// Known coding representations
    pub hgvs_c: Vec<String>,
    /// Known non-coding representations
    pub hgvs_n: Vec<String>,
    /// Known protein representations
    pub hgvs_p: Vec<String>,
    /// Transcripts known to be relevant before resolution
    pub transcripts: Vec<String>,
    /// Discard translations whose canonical string is longer than this
    pub max_len: Option<usize>,
    /// Gene name to report instead of resolving one
    pub gene_name: Option<String>,
    /// Transcripts with these prefixes are never translated to coding
    pub noncoding_prefixes: Vec<String>,
}

impl Default for LvgOptions {
    fn default() -> Self {
        Self {
            hgvs_g: Vec::new(),
            hgvs_c: Vec::new(),
            hgvs_n: Vec::new(),
            hgvs_p: Vec::new(),
            transcripts: Vec::new(),
            max_len: None,
            gene_name: None,
            noncoding_prefixes: DEFAULT_NONCODING_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl LvgOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrichment list for one sequence type
    pub fn enrichment(&self, seqtype: SeqType) -> &[String] {
        match seqtype {
            SeqType::Genomic => &self.hgvs_g,
            SeqType::Coding => &self.hgvs_c,
            SeqType::NonCoding => &self.hgvs_n,
            SeqType::Protein => &self.hgvs_p,
        }
    }

    /// Add known representations of one sequence type
    pub fn with_enrichment<I, S>(mut self, seqtype: SeqType, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = match seqtype {
            SeqType::Genomic => &mut self.hgvs_g,
            SeqType::Coding => &mut self.hgvs_c,
            SeqType::NonCoding => &mut self.hgvs_n,
            SeqType::Protein => &mut self.hgvs_p,
        };
        list.extend(variants.into_iter().map(Into::into));
        self
    }

    pub fn with_transcripts<I, S>(mut self, transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transcripts
            .extend(transcripts.into_iter().map(Into::into));
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_gene_name(mut self, gene_name: impl Into<String>) -> Self {
        self.gene_name = Some(gene_name.into());
        self
    }

    pub fn with_noncoding_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noncoding_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Primary input: descriptor text or an already parsed variant
#[derive(Debug, Clone, PartialEq)]
pub enum LvgInput {
    Text(String),
    Variant(SequenceVariant),
}

impl From<&str> for LvgInput {
    fn from(text: &str) -> Self {
        LvgInput::Text(text.to_string())
    }
}

impl From<String> for LvgInput {
    fn from(text: String) -> Self {
        LvgInput::Text(text)
    }
}

impl From<SequenceVariant> for LvgInput {
    fn from(variant: SequenceVariant) -> Self {
        LvgInput::Variant(variant)
    }
}

impl From<&SequenceVariant> for LvgInput {
    fn from(variant: &SequenceVariant) -> Self {
        LvgInput::Variant(variant.clone())
    }
}

/// Equivalent representations of one variant
///
/// All closure work happens in the constructor; afterwards the engine is
/// read-only apart from the lazily resolved gene name.
pub struct VariantLvg {
    hgvs_text: String,
    seqvar: SequenceVariant,
    variants: VariantSets,
    transcripts: BTreeSet<String>,
    gene_name: OnceLock<Option<String>>,
    identity: Arc<dyn TxIdentityProvider>,
}

impl VariantLvg {
    /// Run the closure with default options
    pub fn new(input: impl Into<LvgInput>, providers: &Providers) -> Result<Self, LvgError> {
        Self::with_options(input, LvgOptions::default(), providers)
    }

    /// Run the closure
    ///
    /// Fails with [`LvgError::MalformedInput`] if the primary input cannot be
    /// parsed. Nothing else is fatal: bad enrichment entries and mapping
    /// failures only shrink the result.
    pub fn with_options(
        input: impl Into<LvgInput>,
        options: LvgOptions,
        providers: &Providers,
    ) -> Result<Self, LvgError> {
        let (hgvs_text, seqvar) = match input.into() {
            LvgInput::Text(text) => {
                let stripped = strip_embedded_gene_name(&text).into_owned();
                let seqvar = parse_hgvs(&stripped).map_err(|err| {
                    log::info!(
                        "Cannot create SequenceVariant from hgvs_text '{}': {}",
                        stripped,
                        err
                    );
                    LvgError::MalformedInput {
                        input: text.clone(),
                        msg: err.to_string(),
                    }
                })?;
                (stripped, seqvar)
            }
            LvgInput::Variant(variant) => (variant.to_string(), variant),
        };

        let ctx = ClosureContext {
            translator: Translator::new(providers.mapper.as_ref(), options.max_len),
            resolver: providers.resolver.as_ref(),
            options: &options,
        };
        let state = run_closure(
            ClosureState::new(seqvar, options.transcripts.iter().cloned()),
            &ctx,
        );
        log::debug!(
            "LVG for {} found {} variants over {} transcripts",
            hgvs_text,
            state.variants.len(),
            state.transcripts.len()
        );

        let gene_name = match &options.gene_name {
            Some(name) => OnceLock::from(Some(name.clone())),
            None => OnceLock::new(),
        };

        Ok(Self {
            hgvs_text,
            seqvar: state.primary,
            variants: state.variants,
            transcripts: state.transcripts,
            gene_name,
            identity: Arc::clone(&providers.identity),
        })
    }

    /// The input text with any embedded gene name removed
    pub fn hgvs_text(&self) -> &str {
        &self.hgvs_text
    }

    /// The primary variant
    pub fn seqvar(&self) -> &SequenceVariant {
        &self.seqvar
    }

    /// Canonical strings of one sequence type, in sorted order
    pub fn hgvs(&self, seqtype: SeqType) -> Vec<&str> {
        self.variants
            .get(seqtype)
            .keys()
            .map(String::as_str)
            .collect()
    }

    pub fn hgvs_g(&self) -> Vec<&str> {
        self.hgvs(SeqType::Genomic)
    }

    pub fn hgvs_c(&self) -> Vec<&str> {
        self.hgvs(SeqType::Coding)
    }

    pub fn hgvs_n(&self) -> Vec<&str> {
        self.hgvs(SeqType::NonCoding)
    }

    pub fn hgvs_p(&self) -> Vec<&str> {
        self.hgvs(SeqType::Protein)
    }

    /// Variants of one sequence type
    pub fn variants(&self, seqtype: SeqType) -> impl Iterator<Item = &SequenceVariant> {
        self.variants.get(seqtype).values()
    }

    /// All variants, genomic first, then coding, non-coding and protein
    pub fn seqvars(&self) -> Vec<&SequenceVariant> {
        SeqType::ALL
            .iter()
            .flat_map(|seqtype| self.variants(*seqtype))
            .collect()
    }

    pub fn transcripts(&self) -> &BTreeSet<String> {
        &self.transcripts
    }

    /// Gene symbol of the variant
    ///
    /// Resolved on first access from the identity oracle over the coding,
    /// non-coding and then protein variants; the first non-empty symbol wins.
    /// The outcome, including "not found", is remembered.
    pub fn gene_name(&self) -> Option<&str> {
        self.gene_name
            .get_or_init(|| self.resolve_gene_name())
            .as_deref()
    }

    fn resolve_gene_name(&self) -> Option<String> {
        let candidates = [SeqType::Coding, SeqType::NonCoding, SeqType::Protein]
            .into_iter()
            .flat_map(|seqtype| self.variants(seqtype));

        for variant in candidates {
            let accession = variant.ac();
            match self.identity.tx_identity_info(&accession) {
                Ok(Some(identity)) => {
                    if let Some(symbol) = identity.gene_symbol.filter(|s| !s.is_empty()) {
                        return Some(symbol);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::debug!("No transcript identity for {}: {}", accession, err);
                }
            }
        }
        None
    }
}

impl fmt::Display for VariantLvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HGVS input: {}", self.hgvs_text)?;
        write!(f, "{}", self.seqvar)
    }
}

impl fmt::Debug for VariantLvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantLvg")
            .field("hgvs_text", &self.hgvs_text)
            .field("seqvar", &self.seqvar.to_string())
            .field("variants", &self.variants.len())
            .field("transcripts", &self.transcripts)
            .field("gene_name", &self.gene_name.get())
            .finish_non_exhaustive()
    }
}
