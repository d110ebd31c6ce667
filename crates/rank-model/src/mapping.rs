use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// An ordered, immutable set of class names shared by a predicted-label
/// column and its per-class confidence columns.
///
/// Index-encoded label columns store `u32` positions into this mapping, so a
/// column's values stay meaningful only together with the mapping instance it
/// was encoded against. Columns share a mapping through `Arc`; a column that
/// must not be affected by the originals takes [`LabelMapping::detached`]
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMapping {
    labels: Vec<String>,
    indices: BTreeMap<String, u32>,
}

impl LabelMapping {
    /// Build a mapping from class names in their stored order.
    ///
    /// Rejects empty names and duplicates; both indicate a broken scoring
    /// export rather than something worth repairing silently.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut indices = BTreeMap::new();
        for label in labels {
            let label: String = label.into();
            if label.is_empty() {
                return Err(RankError::EmptyClass);
            }
            let index = ordered.len() as u32;
            if indices.insert(label.clone(), index).is_some() {
                return Err(RankError::DuplicateClass(label));
            }
            ordered.push(label);
        }
        Ok(Self {
            labels: ordered,
            indices,
        })
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Class names in stored order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Position of a class name, if present.
    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.indices.get(label).copied()
    }

    /// Class name at a position, if in range.
    pub fn label_of(&self, index: u32) -> Option<&str> {
        self.labels.get(index as usize).map(String::as_str)
    }

    /// An independent clone of this mapping.
    ///
    /// The returned instance never aliases `self`, so columns encoded against
    /// it are insulated from whatever happens to the original later.
    pub fn detached(&self) -> Arc<LabelMapping> {
        Arc::new(self.clone())
    }
}
