pub mod error;
pub mod mapping;
pub mod schema;
pub mod summary;

pub use error::{RankError, Result};
pub use mapping::LabelMapping;
pub use schema::{ColumnMeta, ColumnRole, ValueType};
pub use summary::{ClassCount, RankingOutcome, RankingSummary};
