//! Combination mode of a composite filter.

use serde::{Deserialize, Serialize};

/// How a composite filter combines its children's verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Every child must match; vacuously true with no children.
    And,
    /// At least one child must match; vacuously false with no children.
    Or,
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
        }
    }
}
