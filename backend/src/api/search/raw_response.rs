//! Wire shapes returned by the research backend, before normalization.
//!
//! Scalars are decoded loosely: the backend sends counts as numbers or
//! strings and leaves missing values as null. Structural mismatches (a graph
//! that is not an object, a list row that is not a pair) are still errors.

use std::collections::BTreeMap;

use common::search_result::Graph;
use serde::{Deserialize, Deserializer, de::Error};

/// String, number, bool or null, read as text. Null becomes `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LooseText(pub String);

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let text = match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => return Err(D::Error::custom(format!("expected a scalar, got {}", other))),
        };
        Ok(LooseText(text))
    }
}

impl From<LooseText> for String {
    fn from(value: LooseText) -> Self {
        value.0
    }
}

/// Boolean sent as bool, 0/1, "true"/"false" or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LooseFlag(pub bool);

impl<'de> Deserialize<'de> for LooseFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let flag = match value {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => b,
            serde_json::Value::Number(n) => n.as_f64().map(|x| x != 0.0).unwrap_or(false),
            serde_json::Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
            other => return Err(D::Error::custom(format!("expected a flag, got {}", other))),
        };
        Ok(LooseFlag(flag))
    }
}

/// Number or numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LooseNumber(pub f64);

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => n.as_f64().map(LooseNumber).ok_or_else(|| D::Error::custom("number out of range")),
            serde_json::Value::String(s) => s.trim().parse::<f64>().map(LooseNumber).map_err(|_| D::Error::custom(format!("not a number: {:?}", s))),
            other => Err(D::Error::custom(format!("expected a number, got {}", other))),
        }
    }
}

/// A `[name, count]` list row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPair(pub LooseText, pub LooseText);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Object { name: LooseText, lat: LooseNumber, lng: LooseNumber },
    Row(LooseText, LooseNumber, LooseNumber),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawPagination {
    pub current_page: Option<LooseNumber>,
    pub total_pages: Option<LooseNumber>,
}

/// Body of a `/initial-search` response. Metadata stays untyped here and is
/// decoded per variant by the normalizer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchResponse {
    pub metadata: Option<serde_json::Value>,
    pub list: Option<Vec<RawPair>>,
    pub graph: Option<Graph>,
    pub coordinates: Option<Vec<RawCoordinate>>,
    pub metadata_pagination: Option<RawPagination>,
    pub extra_metadata: Option<BTreeMap<String, serde_json::Value>>,
}

/// Body of the graph-only endpoints.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawGraphResponse {
    pub graph: Option<Graph>,
}

// per-variant metadata, one struct per field table

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct InstitutionMetadata {
    pub name: LooseText,
    pub hbcu: LooseFlag,
    pub cited_count: LooseText,
    pub author_count: LooseText,
    pub works_count: LooseText,
    pub homepage: LooseText,
    pub oa_link: LooseText,
    pub ror: LooseText,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TopicMetadata {
    pub name: LooseText,
    pub topic_clusters: Option<Vec<LooseText>>,
    pub cited_by_count: LooseText,
    pub researchers: LooseText,
    pub work_count: LooseText,
    pub oa_link: LooseText,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResearcherMetadata {
    pub current_institution: LooseText,
    pub name: LooseText,
    pub orcid: LooseText,
    pub cited_by_count: LooseText,
    pub work_count: LooseText,
    pub oa_link: LooseText,
    pub institution_url: LooseText,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResearcherInstitutionMetadata {
    pub homepage: LooseText,
    pub institution_name: LooseText,
    pub researcher_name: LooseText,
    pub orcid: LooseText,
    pub work_count: LooseText,
    pub cited_by_count: LooseText,
    pub ror: LooseText,
    pub institution_oa_link: LooseText,
    pub researcher_oa_link: LooseText,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TopicResearcherMetadata {
    pub current_institution: LooseText,
    pub topic_name: LooseText,
    pub researcher_name: LooseText,
    pub orcid: LooseText,
    pub work_count: LooseText,
    pub cited_by_count: LooseText,
    pub topic_oa_link: LooseText,
    pub researcher_oa_link: LooseText,
    pub topic_clusters: Option<Vec<LooseText>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TopicInstitutionMetadata {
    pub institution_name: LooseText,
    pub topic_name: LooseText,
    pub homepage: LooseText,
    pub cited_by_count: LooseText,
    pub work_count: LooseText,
    pub people_count: LooseText,
    pub institution_oa_link: LooseText,
    pub topic_oa_link: LooseText,
    pub ror: LooseText,
    pub topic_clusters: Option<Vec<LooseText>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AllThreeMetadata {
    pub homepage: LooseText,
    pub institution_name: LooseText,
    pub researcher_name: LooseText,
    pub topic_name: LooseText,
    pub orcid: LooseText,
    pub work_count: LooseText,
    pub cited_by_count: LooseText,
    pub ror: LooseText,
    pub institution_oa_link: LooseText,
    pub topic_oa_link: LooseText,
    pub researcher_oa_link: LooseText,
    pub topic_clusters: Option<Vec<LooseText>>,
}
