use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Summary granularity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Low,
    Medium,
    High,
}

impl Granularity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Whether a summary is structured (bulleted/sectioned) or free prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Structured,
    Unstructured,
}

impl Structure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Unstructured => "unstructured",
        }
    }
}

/// One of the six fixed granularity × structure summary variants.
///
/// The string form (`"medium_structured"`) doubles as the JSON field name in
/// fixture records and as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SummaryKey {
    pub granularity: Granularity,
    pub structure: Structure,
}

impl SummaryKey {
    #[must_use]
    pub const fn new(granularity: Granularity, structure: Structure) -> Self {
        Self {
            granularity,
            structure,
        }
    }

    /// All six keys, in fixture order.
    pub const ALL: [Self; 6] = [
        Self::new(Granularity::Low, Structure::Unstructured),
        Self::new(Granularity::Low, Structure::Structured),
        Self::new(Granularity::Medium, Structure::Unstructured),
        Self::new(Granularity::Medium, Structure::Structured),
        Self::new(Granularity::High, Structure::Unstructured),
        Self::new(Granularity::High, Structure::Structured),
    ];
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}",
            self.granularity.as_str(),
            self.structure.as_str()
        )
    }
}

impl FromStr for SummaryKey {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (g, st) = s
            .split_once('_')
            .ok_or_else(|| ProtocolError::InvalidKey(s.to_string()))?;
        let granularity = match g {
            "low" => Granularity::Low,
            "medium" => Granularity::Medium,
            "high" => Granularity::High,
            other => return Err(ProtocolError::InvalidGranularity(other.to_string())),
        };
        let structure = match st {
            "structured" => Structure::Structured,
            "unstructured" => Structure::Unstructured,
            other => return Err(ProtocolError::InvalidStructure(other.to_string())),
        };
        Ok(Self::new(granularity, structure))
    }
}

impl TryFrom<String> for SummaryKey {
    type Error = ProtocolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SummaryKey> for String {
    fn from(key: SummaryKey) -> Self {
        key.to_string()
    }
}

/// One value per summary variant, deserialized from an object keyed by the
/// six `<granularity>_<structure>` field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryObject {
    #[serde(default)]
    pub low_unstructured: String,
    #[serde(default)]
    pub low_structured: String,
    #[serde(default)]
    pub medium_unstructured: String,
    #[serde(default)]
    pub medium_structured: String,
    #[serde(default)]
    pub high_unstructured: String,
    #[serde(default)]
    pub high_structured: String,
}

impl SummaryObject {
    /// Text for one summary variant.
    #[must_use]
    pub fn get(&self, key: SummaryKey) -> &str {
        match (key.granularity, key.structure) {
            (Granularity::Low, Structure::Unstructured) => &self.low_unstructured,
            (Granularity::Low, Structure::Structured) => &self.low_structured,
            (Granularity::Medium, Structure::Unstructured) => &self.medium_unstructured,
            (Granularity::Medium, Structure::Structured) => &self.medium_structured,
            (Granularity::High, Structure::Unstructured) => &self.high_unstructured,
            (Granularity::High, Structure::Structured) => &self.high_structured,
        }
    }

    pub fn set(&mut self, key: SummaryKey, value: String) {
        match (key.granularity, key.structure) {
            (Granularity::Low, Structure::Unstructured) => self.low_unstructured = value,
            (Granularity::Low, Structure::Structured) => self.low_structured = value,
            (Granularity::Medium, Structure::Unstructured) => self.medium_unstructured = value,
            (Granularity::Medium, Structure::Structured) => self.medium_structured = value,
            (Granularity::High, Structure::Unstructured) => self.high_unstructured = value,
            (Granularity::High, Structure::Structured) => self.high_structured = value,
        }
    }
}
