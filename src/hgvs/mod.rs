//! HGVS types and parser
//!
//! The value types for representing sequence variants and a nom-based parser
//! for the HGVS forms consumed by the variant generator.

pub mod edit;
pub mod location;
pub mod parser;
pub mod variant;

// Re-export commonly used types
pub use edit::{EditType, NaEdit, ProteinEdit};
pub use location::{AminoAcid, Interval, NaPos, ProtPos};
pub use parser::parse_hgvs;
pub use variant::{Accession, Placeholder, PosEdit, SeqType, SequenceVariant, VariantKind};
