//! Mapping collaborators
//!
//! Traits for the translation oracle, transcript resolver and transcript
//! identity oracle, plus an in-memory implementation.

pub mod mock;
pub mod provider;

pub use mock::MockMapper;
pub use provider::{
    MappingError, Providers, TranscriptResolver, TxIdentity, TxIdentityProvider, VariantMapper,
};
