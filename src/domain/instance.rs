use crate::domain::errors::PredictorError;
use crate::domain::labels::{EntryKind, Label};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only view of an instance as consumed by the evaluator.
pub trait EvaluatedInstance {
    /// Variant id: 0 for the original instance, nonzero for perturbed variants.
    fn vid(&self) -> u32;

    /// Entry of the given kind recorded for `predictor`.
    fn get_entry(&self, kind: EntryKind, predictor: &str) -> Option<&Label>;
}

/// In-memory instance with entries keyed by kind and predictor name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "InstanceRecord", into = "InstanceRecord")]
pub struct Instance {
    pub qid: String,
    pub vid: u32,
    entries: HashMap<(EntryKind, String), Label>,
}

impl Instance {
    pub fn new(qid: impl Into<String>, vid: u32) -> Self {
        Self {
            qid: qid.into(),
            vid,
            entries: HashMap::new(),
        }
    }

    pub fn set_entry(&mut self, kind: EntryKind, predictor: impl Into<String>, label: Label) {
        self.entries.insert((kind, predictor.into()), label);
    }

    pub fn with_entry(mut self, kind: EntryKind, predictor: impl Into<String>, label: Label) -> Self {
        self.set_entry(kind, predictor, label);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl EvaluatedInstance for Instance {
    fn vid(&self) -> u32 {
        self.vid
    }

    fn get_entry(&self, kind: EntryKind, predictor: &str) -> Option<&Label> {
        self.entries.get(&(kind, predictor.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    kind: String,
    predictor: String,
    label: String,
    #[serde(default)]
    perform: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InstanceRecord {
    qid: String,
    #[serde(default)]
    vid: u32,
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

impl TryFrom<InstanceRecord> for Instance {
    type Error = PredictorError;

    fn try_from(record: InstanceRecord) -> Result<Self, Self::Error> {
        let mut instance = Instance::new(record.qid, record.vid);
        for entry in record.entries {
            let kind: EntryKind = entry.kind.parse()?;
            instance.set_entry(
                kind,
                entry.predictor,
                Label {
                    label: entry.label,
                    perform: entry.perform,
                },
            );
        }
        Ok(instance)
    }
}

impl From<Instance> for InstanceRecord {
    fn from(instance: Instance) -> Self {
        let mut entries: Vec<EntryRecord> = instance
            .entries
            .into_iter()
            .map(|((kind, predictor), label)| EntryRecord {
                kind: kind.as_str().to_string(),
                predictor,
                label: label.label,
                perform: label.perform,
            })
            .collect();
        // Stable output regardless of map iteration order
        entries.sort_by(|a, b| (&a.predictor, &a.kind).cmp(&(&b.predictor, &b.kind)));

        Self {
            qid: instance.qid,
            vid: instance.vid,
            entries,
        }
    }
}
