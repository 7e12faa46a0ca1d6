//! Include filter — a predicate tree over registry entries.

use entityfilter_registry::RegistryEntry;
use serde::{Deserialize, Serialize};

use crate::operator::FilterOperator;

/// A predicate deciding whether a registry entry belongs in a group.
///
/// Built once per group configuration (see
/// [`create_filter`](crate::config::create_filter)) and queried once per
/// candidate entry. Nodes are immutable and evaluation is pure, so a single
/// tree serves any number of queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncludeFilter {
    /// Matches entries whose domain equals `domain` exactly.
    ///
    /// Exact string comparison: no case folding, no trimming.
    Domain { domain: String },
    /// Combines child filters with [`FilterOperator`].
    Composite {
        filters: Vec<IncludeFilter>,
        operator: FilterOperator,
    },
}

impl IncludeFilter {
    /// Leaf matching a single domain.
    #[must_use]
    pub fn domain(domain: impl Into<String>) -> Self {
        Self::Domain {
            domain: domain.into(),
        }
    }

    /// Composite over `filters`, combined with `operator`.
    #[must_use]
    pub fn composite(filters: Vec<Self>, operator: FilterOperator) -> Self {
        Self::Composite { filters, operator }
    }

    /// Return `true` when the entry should be included in the group,
    /// `false` when it should be discarded.
    ///
    /// Children are consulted in construction order. They are side-effect
    /// free, so the short-circuiting of [`Iterator::all`]/[`Iterator::any`]
    /// cannot change the verdict.
    #[must_use]
    pub fn is_valid(&self, entry: &RegistryEntry) -> bool {
        match self {
            Self::Domain { domain } => entry.domain() == domain,
            Self::Composite { filters, operator } => match operator {
                FilterOperator::And => filters.iter().all(|filter| filter.is_valid(entry)),
                FilterOperator::Or => filters.iter().any(|filter| filter.is_valid(entry)),
            },
        }
    }
}

impl std::fmt::Display for IncludeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain { domain } => write!(f, "domain({domain})"),
            Self::Composite { filters, operator } => {
                write!(f, "{operator}(")?;
                for (index, filter) in filters.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{filter}")?;
                }
                f.write_str(")")
            }
        }
    }
}
