//! JSON exchange format for [`VariantLvg`]
//!
//! A record carries the input text, the gene name and every discovered
//! representation. Rebuilding an engine from a record re-runs the closure
//! with the record's lists as enrichment.

use crate::error::LvgError;
use crate::hgvs::variant::SeqType;
use crate::lvg::{LvgOptions, VariantLvg};
use crate::mapping::Providers;
use serde::{Deserialize, Serialize};

/// Serialized form of a [`VariantLvg`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub hgvs_text: String,
    pub gene_name: Option<String>,
    #[serde(default)]
    pub hgvs_g: Vec<String>,
    #[serde(default)]
    pub hgvs_c: Vec<String>,
    #[serde(default)]
    pub hgvs_n: Vec<String>,
    #[serde(default)]
    pub hgvs_p: Vec<String>,
    #[serde(default)]
    pub transcripts: Vec<String>,
}

fn owned(list: Vec<&str>) -> Vec<String> {
    list.into_iter().map(str::to_string).collect()
}

impl ExchangeRecord {
    /// Capture an engine. Resolves the gene name if it has not been yet.
    pub fn from_lvg(lvg: &VariantLvg) -> Self {
        Self {
            hgvs_text: lvg.hgvs_text().to_string(),
            gene_name: lvg.gene_name().map(str::to_string),
            hgvs_g: owned(lvg.hgvs_g()),
            hgvs_c: owned(lvg.hgvs_c()),
            hgvs_n: owned(lvg.hgvs_n()),
            hgvs_p: owned(lvg.hgvs_p()),
            transcripts: lvg.transcripts().iter().cloned().collect(),
        }
    }

    /// Engine options equivalent to this record, layered over `base`
    pub fn to_options(&self, base: LvgOptions) -> LvgOptions {
        let mut options = base
            .with_enrichment(SeqType::Genomic, self.hgvs_g.iter().cloned())
            .with_enrichment(SeqType::Coding, self.hgvs_c.iter().cloned())
            .with_enrichment(SeqType::NonCoding, self.hgvs_n.iter().cloned())
            .with_enrichment(SeqType::Protein, self.hgvs_p.iter().cloned())
            .with_transcripts(self.transcripts.iter().cloned());
        if let Some(gene_name) = &self.gene_name {
            options = options.with_gene_name(gene_name.clone());
        }
        options
    }
}

impl VariantLvg {
    /// Rebuild an engine from a record
    pub fn from_record(record: &ExchangeRecord, providers: &Providers) -> Result<Self, LvgError> {
        Self::from_record_with_options(record, LvgOptions::default(), providers)
    }

    /// Rebuild an engine from a record with non-default engine settings
    pub fn from_record_with_options(
        record: &ExchangeRecord,
        options: LvgOptions,
        providers: &Providers,
    ) -> Result<Self, LvgError> {
        Self::with_options(
            record.hgvs_text.as_str(),
            record.to_options(options),
            providers,
        )
    }

    /// Serialize to the JSON exchange format
    pub fn to_json(&self) -> Result<String, LvgError> {
        Ok(serde_json::to_string(&ExchangeRecord::from_lvg(self))?)
    }

    /// Deserialize from the JSON exchange format and re-run the closure
    pub fn from_json(json: &str, providers: &Providers) -> Result<Self, LvgError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let Some(object) = value.as_object() else {
            return Err(LvgError::MalformedRecord {
                msg: "expected a JSON object".to_string(),
            });
        };
        match object.get("hgvs_text") {
            Some(serde_json::Value::String(_)) => {}
            Some(_) => {
                return Err(LvgError::MalformedRecord {
                    msg: "'hgvs_text' must be a string".to_string(),
                })
            }
            None => {
                return Err(LvgError::MalformedRecord {
                    msg: "missing required field 'hgvs_text'".to_string(),
                })
            }
        }
        let record: ExchangeRecord = serde_json::from_value(value)?;
        Self::from_record(&record, providers)
    }
}
