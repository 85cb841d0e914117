// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-lvg: lexical variant generation for HGVS variants
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Given one variant description, ferro-lvg finds its equivalent genomic,
//! coding, non-coding and protein descriptors through an injected mapping
//! service, and generates the informal "slang" spellings used in the
//! literature.
//!
//! # Example
//!
//! ```
//! use ferro_lvg::{MockMapper, Providers, VariantComponents, VariantLvg};
//!
//! // Discover equivalent representations
//! let providers = Providers::new(MockMapper::with_test_data());
//! let lvg = VariantLvg::new("NM_005228.3:c.2240_2257del18", &providers).unwrap();
//! assert_eq!(lvg.hgvs_c().len(), 2);
//!
//! // Generate slang for an amino-acid change
//! let components = VariantComponents::from_amino_change("Leu653Arg").unwrap();
//! assert!(components.posedit_slang().unwrap().contains(&"L653R".to_string()));
//! ```

pub mod amino;
pub mod components;
pub mod config;
pub mod error;
pub mod exchange;
pub mod hgvs;
pub mod lvg;
pub mod mapping;
pub mod preprocess;

// Re-export commonly used types
pub use amino::{find_all_amino_changes, parse_amino_change, AminoChange};
pub use components::VariantComponents;
pub use config::LvgConfig;
pub use error::{ErrorCode, LvgError};
pub use exchange::ExchangeRecord;
pub use hgvs::parser::parse_hgvs;
pub use hgvs::variant::{SeqType, SequenceVariant};
pub use lvg::{LvgInput, LvgOptions, VariantLvg};
pub use mapping::{MappingError, MockMapper, Providers};
pub use preprocess::strip_embedded_gene_name;

/// Result type alias for ferro-lvg operations
pub type Result<T> = std::result::Result<T, LvgError>;
