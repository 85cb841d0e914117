//! Mapping collaborator traits
//!
//! The closure engine never maps coordinates itself. It asks three injected
//! collaborators:
//! - [`VariantMapper`] translates a variant between sequence types
//! - [`TranscriptResolver`] lists transcripts overlapping a genomic variant
//! - [`TxIdentityProvider`] looks up transcript identity (gene symbol etc.)
//!
//! Implementations might include:
//! - [`MockMapper`](crate::mapping::MockMapper) for testing
//! - a UTA-backed mapper against a transcript database
//! - a remote variant-mapping web service

use crate::hgvs::variant::{SeqType, SequenceVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why a collaborator produced no result
///
/// The closure engine logs every variant of this error and treats it as
/// "no result"; it is never propagated to engine callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The mapper has no route between these sequence types
    #[error("Mapping from {from} to {to} is not supported")]
    UnsupportedPair { from: SeqType, to: SeqType },

    /// Required reference data is missing
    #[error("Data not available: {msg}")]
    DataNotAvailable { msg: String },

    /// Unexpected failure inside the collaborator
    #[error("Internal mapping error: {msg}")]
    Internal { msg: String },
}

impl MappingError {
    pub fn not_available(msg: impl Into<String>) -> Self {
        MappingError::DataNotAvailable { msg: msg.into() }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        MappingError::Internal { msg: msg.into() }
    }
}

/// Transcript identity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIdentity {
    /// Transcript accession, e.g. `NM_005228.3`
    pub accession: String,
    /// Coding sequence start (transcript coordinates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds_start: Option<u64>,
    /// Coding sequence end (transcript coordinates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds_end: Option<u64>,
    #[serde(default)]
    pub exon_lengths: Vec<u64>,
    /// HGNC gene symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_symbol: Option<String>,
}

impl TxIdentity {
    pub fn new(accession: impl Into<String>, gene_symbol: Option<&str>) -> Self {
        Self {
            accession: accession.into(),
            cds_start: None,
            cds_end: None,
            exon_lengths: Vec::new(),
            gene_symbol: gene_symbol.map(str::to_string),
        }
    }
}

/// Translation oracle
pub trait VariantMapper: Send + Sync {
    /// Translate `variant` from one sequence type to another
    ///
    /// `transcript` names the target transcript when translating from
    /// genomic coordinates.
    fn translate(
        &self,
        variant: &SequenceVariant,
        from: SeqType,
        to: SeqType,
        transcript: Option<&str>,
    ) -> Result<SequenceVariant, MappingError>;
}

/// Transcript resolver
pub trait TranscriptResolver: Send + Sync {
    /// Accessions of transcripts relevant to a genomic variant
    fn relevant_transcripts(&self, genomic: &SequenceVariant)
        -> Result<Vec<String>, MappingError>;
}

/// Transcript identity oracle
pub trait TxIdentityProvider: Send + Sync {
    /// Identity of a transcript or protein accession; `Ok(None)` if unknown
    fn tx_identity_info(&self, accession: &str) -> Result<Option<TxIdentity>, MappingError>;
}

/// The collaborators injected into the closure engine
#[derive(Clone)]
pub struct Providers {
    pub mapper: Arc<dyn VariantMapper>,
    pub resolver: Arc<dyn TranscriptResolver>,
    pub identity: Arc<dyn TxIdentityProvider>,
}

impl Providers {
    /// Use one value for all three roles
    pub fn new<P>(provider: P) -> Self
    where
        P: VariantMapper + TranscriptResolver + TxIdentityProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Use one shared value for all three roles, keeping a handle for the caller
    pub fn from_shared<P>(provider: Arc<P>) -> Self
    where
        P: VariantMapper + TranscriptResolver + TxIdentityProvider + 'static,
    {
        Self {
            mapper: provider.clone(),
            resolver: provider.clone(),
            identity: provider,
        }
    }

    /// Combine separately implemented collaborators
    pub fn from_parts(
        mapper: Arc<dyn VariantMapper>,
        resolver: Arc<dyn TranscriptResolver>,
        identity: Arc<dyn TxIdentityProvider>,
    ) -> Self {
        Self {
            mapper,
            resolver,
            identity,
        }
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}
