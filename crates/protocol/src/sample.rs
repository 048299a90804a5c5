use serde::{Deserialize, Serialize};

use crate::keys::{Granularity, Structure, SummaryKey, SummaryObject};

/// Outcome of running a generated patch against the task's test case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestResult {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    /// Anything else the harness emitted (timeouts, crashes, absent field).
    #[default]
    #[serde(other)]
    Unknown,
}

impl TestResult {
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Pass/fail verdict per summary variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub low_unstructured: TestResult,
    #[serde(default)]
    pub low_structured: TestResult,
    #[serde(default)]
    pub medium_unstructured: TestResult,
    #[serde(default)]
    pub medium_structured: TestResult,
    #[serde(default)]
    pub high_unstructured: TestResult,
    #[serde(default)]
    pub high_structured: TestResult,
}

impl ResultSet {
    #[must_use]
    pub const fn get(&self, key: SummaryKey) -> TestResult {
        match (key.granularity, key.structure) {
            (Granularity::Low, Structure::Unstructured) => self.low_unstructured,
            (Granularity::Low, Structure::Structured) => self.low_structured,
            (Granularity::Medium, Structure::Unstructured) => self.medium_unstructured,
            (Granularity::Medium, Structure::Structured) => self.medium_structured,
            (Granularity::High, Structure::Unstructured) => self.high_unstructured,
            (Granularity::High, Structure::Structured) => self.high_structured,
        }
    }
}

/// One precomputed benchmark sample, as stored in the `.jsonl` fixtures.
///
/// `output_summary` holds the model output produced under summary mediation
/// for each of the six variants; `output_direct` is the single output
/// produced from the direct edit instruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default)]
    pub buggy_code: String,

    #[serde(default)]
    pub instruction: String,

    #[serde(default)]
    pub ground_truth: String,

    #[serde(default)]
    pub output_direct: String,

    #[serde(default)]
    pub output_summary: SummaryObject,

    #[serde(default)]
    pub original_summary: SummaryObject,

    #[serde(default)]
    pub edited_summary: SummaryObject,

    #[serde(default)]
    pub result_direct: TestResult,

    #[serde(default)]
    pub error_direct: String,

    #[serde(default)]
    pub result_summary: ResultSet,

    /// Harness error text per summary variant, empty when the run passed.
    #[serde(default)]
    pub error_summary: SummaryObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_parses_harness_strings() {
        assert_eq!(
            serde_json::from_str::<TestResult>(r#""PASS""#).expect("json"),
            TestResult::Pass
        );
        assert_eq!(
            serde_json::from_str::<TestResult>(r#""FAIL""#).expect("json"),
            TestResult::Fail
        );
        assert_eq!(
            serde_json::from_str::<TestResult>(r#""TIMEOUT""#).expect("json"),
            TestResult::Unknown
        );
    }

    #[test]
    fn sample_tolerates_sparse_records() {
        let sample: Sample = serde_json::from_str(
            r#"{
                "buggy_code": "def f():\n    return 1\n",
                "instruction": "make f return 2",
                "result_direct": "PASS",
                "result_summary": {"medium_structured": "FAIL"}
            }"#,
        )
        .expect("json");

        assert!(sample.result_direct.passed());
        let key = SummaryKey::new(Granularity::Medium, Structure::Structured);
        assert_eq!(sample.result_summary.get(key), TestResult::Fail);
        assert_eq!(sample.ground_truth, "");
    }
}
