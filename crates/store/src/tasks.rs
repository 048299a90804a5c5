use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use sumlens_protocol::{MergedTask, TaskInput, TaskOutput};

use crate::cursor::Cursor;

/// Annotation tasks merged from the paired `tasks-input.json` and
/// `tasks-output.json` exports, with a navigation cursor.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<MergedTask>,
    cursor: Cursor,
}

impl TaskStore {
    /// Load and join the two fixture files. Inputs are kept in file order;
    /// an input with no matching output record is dropped with a warning.
    pub fn load(input_path: &Path, output_path: &Path) -> Result<Self> {
        let inputs = read_array::<TaskInput>(input_path)
            .with_context(|| format!("reading task inputs {}", input_path.display()))?;
        let outputs = read_array::<TaskOutput>(output_path)
            .with_context(|| format!("reading task outputs {}", output_path.display()))?;
        Ok(Self::from_parts(inputs, outputs))
    }

    /// Join inputs with outputs by id. Duplicate output ids keep the last
    /// record, matching how the annotation pipeline overwrites re-exports.
    #[must_use]
    pub fn from_parts(inputs: Vec<TaskInput>, outputs: Vec<TaskOutput>) -> Self {
        let mut by_id: HashMap<String, TaskOutput> = outputs
            .into_iter()
            .map(|output| (output.task_id.clone(), output))
            .collect();

        let mut tasks = Vec::with_capacity(inputs.len());
        for input in inputs {
            match by_id.remove(&input.id) {
                Some(output) => tasks.push(MergedTask::join(input, output)),
                None => warn!("task {} has no annotation output, skipping", input.id),
            }
        }
        info!("merged {} task(s)", tasks.len());

        let cursor = Cursor::new(tasks.len());
        Self { tasks, cursor }
    }

    #[must_use]
    pub fn tasks(&self) -> &[MergedTask] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task under the cursor, if any merged.
    #[must_use]
    pub fn current(&self) -> Option<&MergedTask> {
        self.tasks.get(self.cursor.index())
    }

    /// Find a task by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&MergedTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

fn read_array<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    let records = serde_json::from_str(&text)?;
    Ok(records)
}
