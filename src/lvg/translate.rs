//! Translation call contract
//!
//! Wraps the injected [`VariantMapper`] so the closure stages see a plain
//! `Option`: every way a translation can fail becomes "no result" here.

use crate::components::VariantComponents;
use crate::hgvs::variant::{SeqType, SequenceVariant};
use crate::mapping::{MappingError, VariantMapper};

pub(crate) struct Translator<'a> {
    mapper: &'a dyn VariantMapper,
    max_len: Option<usize>,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(mapper: &'a dyn VariantMapper, max_len: Option<usize>) -> Self {
        Self { mapper, max_len }
    }

    /// Translate `variant` from `from` to `to`
    ///
    /// Same-type requests, requests from protein, genomic to protein, and
    /// genomic requests without a transcript return `None` without calling
    /// the mapper.
    pub(crate) fn translate(
        &self,
        variant: &SequenceVariant,
        from: SeqType,
        to: SeqType,
        transcript: Option<&str>,
    ) -> Option<SequenceVariant> {
        if from == to || from == SeqType::Protein {
            return None;
        }
        if from == SeqType::Genomic && (to == SeqType::Protein || transcript.is_none()) {
            return None;
        }

        match self.mapper.translate(variant, from, to, transcript) {
            Ok(result) => self.within_length(result),
            Err(MappingError::UnsupportedPair { .. }) => {
                log::debug!("Cannot map {} to {}: unsupported by mapper", variant, to);
                None
            }
            Err(err @ MappingError::DataNotAvailable { .. }) => {
                log::debug!("Cannot map {} to {}: {}", variant, to, err);
                None
            }
            Err(err @ MappingError::Internal { .. }) => {
                log::warn!("Cannot map {} to {}: {}", variant, to, err);
                None
            }
        }
    }

    /// Apply the length limit to a translation result
    ///
    /// Results that cannot be decomposed into components (typically a
    /// protein with no edit) are kept regardless of length.
    fn within_length(&self, result: SequenceVariant) -> Option<SequenceVariant> {
        let Some(max_len) = self.max_len else {
            return Some(result);
        };
        if let Err(err) = VariantComponents::from_variant(&result) {
            if err.is_rejected() {
                return Some(result);
            }
        }
        let len = result.to_string().len();
        if len > max_len {
            log::debug!(
                "Discarding {}: length {} exceeds limit {}",
                result,
                len,
                max_len
            );
            return None;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hgvs::parse_hgvs;
    use crate::mapping::MockMapper;

    const C: &str = "NM_005228.3:c.2240_2257del18";
    const G: &str = "NC_000007.14:g.55174777_55174794delGGAATTAAGAGAAGCAAC";

    #[test]
    fn test_short_circuits_skip_mapper() {
        let mapper = MockMapper::with_test_data();
        let translator = Translator::new(&mapper, None);
        let c = parse_hgvs(C).unwrap();
        let g = parse_hgvs(G).unwrap();

        assert!(translator
            .translate(&c, SeqType::Coding, SeqType::Coding, None)
            .is_none());
        assert!(translator
            .translate(&c, SeqType::Protein, SeqType::Coding, None)
            .is_none());
        assert!(translator
            .translate(&g, SeqType::Genomic, SeqType::Protein, Some("NM_005228.3"))
            .is_none());
        assert!(translator
            .translate(&g, SeqType::Genomic, SeqType::Coding, None)
            .is_none());
        assert_eq!(mapper.translate_calls(), 0);
    }

    #[test]
    fn test_failures_become_none() {
        let mut mapper = MockMapper::new();
        mapper.add_failure(
            C,
            SeqType::Genomic,
            None,
            MappingError::internal("connection reset"),
        );
        mapper.add_failure(
            C,
            SeqType::NonCoding,
            None,
            MappingError::UnsupportedPair {
                from: SeqType::Coding,
                to: SeqType::NonCoding,
            },
        );
        let translator = Translator::new(&mapper, None);
        let c = parse_hgvs(C).unwrap();
        for to in [SeqType::Genomic, SeqType::NonCoding, SeqType::Protein] {
            assert!(translator.translate(&c, SeqType::Coding, to, None).is_none());
        }
        assert_eq!(mapper.translate_calls(), 3);
    }

    #[test]
    fn test_length_limit() {
        let mapper = MockMapper::with_test_data();
        let c = parse_hgvs(C).unwrap();

        let strict = Translator::new(&mapper, Some(20));
        assert!(strict
            .translate(&c, SeqType::Coding, SeqType::Genomic, None)
            .is_none());

        let loose = Translator::new(&mapper, Some(100));
        assert!(loose
            .translate(&c, SeqType::Coding, SeqType::Genomic, None)
            .is_some());
    }

    #[test]
    fn test_length_limit_keeps_rejected() {
        let mut mapper = MockMapper::new();
        mapper.add_translation(C, SeqType::Protein, None, "NP_005219.2:p.?");
        let translator = Translator::new(&mapper, Some(1));
        let c = parse_hgvs(C).unwrap();
        let p = translator
            .translate(&c, SeqType::Coding, SeqType::Protein, None)
            .unwrap();
        assert_eq!(p.to_string(), "NP_005219.2:p.?");
    }
}
