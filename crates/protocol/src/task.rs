use serde::{Deserialize, Serialize};

use crate::keys::SummaryObject;
use crate::mapping::{lenient, MappingSet};

/// One annotation task as it appears in `tasks-input.json`: the code pair
/// under review plus its surrounding context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    pub id: String,

    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub old_code: String,

    #[serde(default)]
    pub new_code: String,

    #[serde(default)]
    pub old_context: String,

    #[serde(default)]
    pub new_context: String,

    /// 1-based line of the old snippet within its file. Encoded as a number
    /// or numeric string by the pipeline.
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub old_start_line: Option<u32>,

    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub new_start_line: Option<u32>,
}

/// Per-version annotation output: the six summaries plus their mapping
/// sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionAnnotation {
    #[serde(default)]
    pub summary: SummaryObject,

    #[serde(default)]
    pub mappings: MappingSet,
}

/// One record from `tasks-output.json`, joined to its input by
/// `task_id == TaskInput::id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task_id: String,

    #[serde(default)]
    pub metadata: serde_json::Value,

    #[serde(default)]
    pub old_code: VersionAnnotation,

    #[serde(default)]
    pub new_code: VersionAnnotation,
}

/// One code version of a merged task: code, context, and its annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskVersion {
    pub code: String,
    pub context: String,
    /// 1-based start line in the source file; 0 when the pipeline omitted it.
    pub start_line: u32,
    pub summary: SummaryObject,
    pub mappings: MappingSet,
}

/// A task input joined with its annotation output. Old and new versions are
/// independent; their mapping sets are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTask {
    pub id: String,
    pub path: String,
    pub meta: serde_json::Value,
    pub old: TaskVersion,
    pub new: TaskVersion,
}

impl MergedTask {
    /// Join one input with its output record.
    #[must_use]
    pub fn join(input: TaskInput, output: TaskOutput) -> Self {
        Self {
            id: input.id,
            path: input.file_path,
            meta: output.metadata,
            old: TaskVersion {
                code: input.old_code,
                context: input.old_context,
                start_line: input.old_start_line.unwrap_or(0),
                summary: output.old_code.summary,
                mappings: output.old_code.mappings,
            },
            new: TaskVersion {
                code: input.new_code,
                context: input.new_context,
                start_line: input.new_start_line.unwrap_or(0),
                summary: output.new_code.summary,
                mappings: output.new_code.mappings,
            },
        }
    }
}
