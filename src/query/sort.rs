//! Client-selectable orderings for the rocket list.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::query::model::RocketView;

/// Field a rocket list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, lexicographic.
    Id,
    /// Ascending, lexicographic.
    Name,
    /// Inactive first; unknown counts as inactive.
    Active,
    /// Descending, unknown rates last.
    SuccessRatePct,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "active" => Ok(Self::Active),
            "success_rate_pct" => Ok(Self::SuccessRatePct),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Active => "active",
            Self::SuccessRatePct => "success_rate_pct",
        }
    }

    /// Interpret the `sort` query parameter. Unrecognized values mean
    /// "no sort" and are only logged.
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        match value?.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring sort parameter");
                None
            }
        }
    }

    /// Total order between two rockets for this key.
    pub fn compare(&self, a: &RocketView, b: &RocketView) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Active => a.active.unwrap_or(false).cmp(&b.active.unwrap_or(false)),
            Self::SuccessRatePct => match (a.success_rate_pct, b.success_rate_pct) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Stable sort; ties keep upstream order.
pub fn sort_rockets(rockets: &mut [RocketView], key: SortKey) {
    rockets.sort_by(|a, b| key.compare(a, b));
}
