//! Upstream records and the views served to clients.
//!
//! Raw records model only the fields the facade reads. Unknown upstream
//! fields are ignored and `null` or missing values never fail parsing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::query::date::format_launch_date;

/// Deserialize `null` as the type's default. Pair with `#[serde(default)]`
/// so a missing key behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rocket as returned by `v4/rockets`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRocket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `None` when upstream does not say.
    pub active: Option<bool>,
    pub success_rate_pct: Option<i64>,
}

/// Rocket as served by `/api/rockets/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RocketView {
    pub id: String,
    pub name: String,
    pub active: Option<bool>,
    pub success_rate_pct: Option<i64>,
}

impl From<RawRocket> for RocketView {
    fn from(raw: RawRocket) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            active: raw.active,
            success_rate_pct: raw.success_rate_pct,
        }
    }
}

/// Launch as returned by `v4/launches`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLaunch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Identifier of the rocket that flew this launch.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rocket: String,
    /// Epoch seconds.
    pub date_unix: Option<i64>,
}

/// Launch as served by `/api/launches/id/{rocketId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchView {
    pub id: String,
    pub name: String,
    pub rocket: String,
    /// Formatted New York date, empty when unknown.
    pub date: String,
}

impl LaunchView {
    /// Name carried by the placeholder record.
    pub const NO_LAUNCHES: &'static str = "No Launches";

    /// Stand-in returned when a rocket has no launches.
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            name: Self::NO_LAUNCHES.to_string(),
            rocket: String::new(),
            date: String::new(),
        }
    }
}

impl From<RawLaunch> for LaunchView {
    fn from(raw: RawLaunch) -> Self {
        Self {
            date: format_launch_date(raw.date_unix),
            id: raw.id,
            name: raw.name,
            rocket: raw.rocket,
        }
    }
}

/// Parse a `v4/rockets` body.
pub fn parse_rockets(body: &str) -> Result<Vec<RawRocket>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Parse a `v4/launches` body.
pub fn parse_launches(body: &str) -> Result<Vec<RawLaunch>, serde_json::Error> {
    serde_json::from_str(body)
}
