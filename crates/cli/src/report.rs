//! JSON output shapes for the `--json` flag.

use serde::Serialize;
use sumlens_diff::{DiffKind, DiffOp};
use sumlens_protocol::{SummaryCodeMapping, SummaryKey};
use sumlens_resolve::Region;

#[derive(Serialize)]
pub(crate) struct DiffReport {
    pub ops: Vec<DiffOpEntry>,
}

#[derive(Serialize)]
pub(crate) struct DiffOpEntry {
    pub kind: &'static str,
    pub text: String,
}

impl DiffReport {
    pub(crate) fn new(ops: &[DiffOp]) -> Self {
        let ops = ops
            .iter()
            .map(|op| DiffOpEntry {
                kind: match op.kind {
                    DiffKind::Equal => "equal",
                    DiffKind::Insert => "insert",
                    DiffKind::Delete => "delete",
                },
                text: op.text.clone(),
            })
            .collect();
        Self { ops }
    }
}

#[derive(Serialize)]
pub(crate) struct RegionsReport {
    pub task_id: String,
    pub key: String,
    pub version: &'static str,
    pub regions: Vec<RegionEntry>,
}

#[derive(Serialize)]
pub(crate) struct RegionEntry {
    pub start: usize,
    pub end: usize,
    pub mapping_index: usize,
    pub phrase: String,
}

impl RegionsReport {
    pub(crate) fn new(
        task_id: &str,
        key: SummaryKey,
        version: &'static str,
        regions: &[Region],
        mappings: &[SummaryCodeMapping],
    ) -> Self {
        let regions = regions
            .iter()
            .map(|region| RegionEntry {
                start: region.start,
                end: region.end,
                mapping_index: region.mapping_index,
                phrase: mappings
                    .get(region.mapping_index)
                    .map(|m| m.summary_component.clone())
                    .unwrap_or_default(),
            })
            .collect();
        Self {
            task_id: task_id.to_string(),
            key: key.to_string(),
            version,
            regions,
        }
    }
}
