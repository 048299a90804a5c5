use serde::{Deserialize, Serialize};

use crate::keys::{Granularity, Structure, SummaryKey};

/// A verbatim code snippet declared by the annotation pipeline, optionally
/// carrying a 1-based line hint.
///
/// Snippets may be multi-line, whitespace-inexact, or slightly misquoted;
/// locating them in the actual code is the resolver's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSegment {
    #[serde(default)]
    pub code: String,

    /// 1-based line hint. Fixtures encode this as a number or a numeric
    /// string; anything non-positive or unparsable becomes `None`.
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub line: Option<u32>,
}

impl CodeSegment {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            line: None,
        }
    }

    #[must_use]
    pub fn with_line(code: impl Into<String>, line: u32) -> Self {
        Self {
            code: code.into(),
            line: Some(line),
        }
    }
}

/// A declared correspondence between one summary phrase and zero or more
/// code snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCodeMapping {
    #[serde(default, rename = "summaryComponent")]
    pub summary_component: String,

    #[serde(default, rename = "codeSegments")]
    pub code_segments: Vec<CodeSegment>,

    /// 1-based ordinal selecting which occurrence of the phrase in the
    /// summary text this mapping refers to. Absent means the first.
    #[serde(default, rename = "disambigIndex", deserialize_with = "lenient::opt_u32")]
    pub disambig_index: Option<u32>,
}

impl SummaryCodeMapping {
    /// Effective occurrence ordinal: declared value, clamped to >= 1.
    #[must_use]
    pub fn occurrence(&self) -> u32 {
        self.disambig_index.map_or(1, |n| n.max(1))
    }
}

/// Mapping sequences for one code version, keyed by summary variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSet {
    #[serde(default)]
    pub low_unstructured: Vec<SummaryCodeMapping>,
    #[serde(default)]
    pub low_structured: Vec<SummaryCodeMapping>,
    #[serde(default)]
    pub medium_unstructured: Vec<SummaryCodeMapping>,
    #[serde(default)]
    pub medium_structured: Vec<SummaryCodeMapping>,
    #[serde(default)]
    pub high_unstructured: Vec<SummaryCodeMapping>,
    #[serde(default)]
    pub high_structured: Vec<SummaryCodeMapping>,
}

impl MappingSet {
    /// Mapping sequence for one summary variant.
    #[must_use]
    pub fn get(&self, key: SummaryKey) -> &[SummaryCodeMapping] {
        match (key.granularity, key.structure) {
            (Granularity::Low, Structure::Unstructured) => &self.low_unstructured,
            (Granularity::Low, Structure::Structured) => &self.low_structured,
            (Granularity::Medium, Structure::Unstructured) => &self.medium_unstructured,
            (Granularity::Medium, Structure::Structured) => &self.medium_structured,
            (Granularity::High, Structure::Unstructured) => &self.high_unstructured,
            (Granularity::High, Structure::Structured) => &self.high_structured,
        }
    }
}

/// Lenient deserializers for the pipeline's stringly-typed optional numbers.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numberish {
        Int(i64),
        Float(f64),
        Text(String),
        Null,
    }

    /// Accepts a JSON number, a numeric string, or null. Non-positive and
    /// unparsable values collapse to `None`.
    pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Numberish>::deserialize(deserializer)?;
        let n = match value {
            Some(Numberish::Int(n)) => n,
            Some(Numberish::Float(f)) if f.fract() == 0.0 => f as i64,
            Some(Numberish::Text(s)) => match s.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => return Ok(None),
            },
            _ => return Ok(None),
        };
        if n <= 0 {
            return Ok(None);
        }
        Ok(u32::try_from(n).ok())
    }
}
