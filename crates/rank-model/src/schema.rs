use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mapping::LabelMapping;

/// Logical value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Char,
    Num,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Char => "char",
            ValueType::Num => "num",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role a column plays in a scored dataset.
///
/// Rank positions are 1-based: `RankedLabel(1)` is the most confident
/// prediction for a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ColumnRole {
    /// A feature or passthrough column with no scoring semantics.
    Regular,
    /// The single predicted class label produced by a classifier.
    PredictedLabel,
    /// A per-class confidence score; carries the class name it scores.
    Confidence(String),
    /// The class label at the given rank position.
    RankedLabel(u32),
    /// The confidence score at the given rank position.
    RankedConfidence(u32),
}

impl ColumnRole {
    /// The class a confidence column scores, if this is one.
    pub fn confidence_class(&self) -> Option<&str> {
        match self {
            ColumnRole::Confidence(class) => Some(class),
            _ => None,
        }
    }

    /// The 1-based rank position for rank columns.
    pub fn rank(&self) -> Option<u32> {
        match self {
            ColumnRole::RankedLabel(rank) | ColumnRole::RankedConfidence(rank) => Some(*rank),
            _ => None,
        }
    }

    /// Human-readable role description for logs and schema listings.
    pub fn describe(&self) -> String {
        match self {
            ColumnRole::Regular => "regular".to_string(),
            ColumnRole::PredictedLabel => "predicted label".to_string(),
            ColumnRole::Confidence(class) => format!("confidence for class \"{class}\""),
            ColumnRole::RankedLabel(rank) => format!("rank {rank} label"),
            ColumnRole::RankedConfidence(rank) => format!("rank {rank} confidence"),
        }
    }
}

/// Metadata describing one column of a scored dataset.
///
/// A `Char` column with a mapping is index-encoded: its physical values are
/// `u32` positions into the mapping rather than strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    pub value_type: ValueType,
    pub role: ColumnRole,
    pub mapping: Option<Arc<LabelMapping>>,
}

impl ColumnMeta {
    pub fn regular(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            role: ColumnRole::Regular,
            mapping: None,
        }
    }

    pub fn predicted_label(name: impl Into<String>, mapping: Arc<LabelMapping>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Char,
            role: ColumnRole::PredictedLabel,
            mapping: Some(mapping),
        }
    }

    pub fn confidence(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Num,
            role: ColumnRole::Confidence(class.into()),
            mapping: None,
        }
    }

    pub fn ranked_label(name: impl Into<String>, rank: u32, mapping: Arc<LabelMapping>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Char,
            role: ColumnRole::RankedLabel(rank),
            mapping: Some(mapping),
        }
    }

    pub fn ranked_confidence(name: impl Into<String>, rank: u32) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Num,
            role: ColumnRole::RankedConfidence(rank),
            mapping: None,
        }
    }

    /// True when the column stores `u32` indices into its mapping.
    pub fn is_index_encoded(&self) -> bool {
        self.value_type == ValueType::Char && self.mapping.is_some()
    }
}
