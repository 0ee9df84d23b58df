//! Launch queries.

use std::sync::Arc;

use crate::query::model::{parse_launches, LaunchView, RawLaunch};
use crate::query::QueryResult;
use crate::upstream::{fetch_or_message, SpaceDataSource, LAUNCHES_ENDPOINT};

/// Serves launch listings from the upstream launch history.
#[derive(Clone)]
pub struct LaunchService {
    source: Arc<dyn SpaceDataSource>,
    placeholder_on_empty: bool,
}

impl LaunchService {
    /// With `placeholder_on_empty`, a rocket without launches yields a single
    /// "No Launches" record instead of an empty list.
    pub fn new(source: Arc<dyn SpaceDataSource>, placeholder_on_empty: bool) -> Self {
        Self {
            source,
            placeholder_on_empty,
        }
    }

    /// Launches flown by `rocket_id` (exact, case-sensitive match).
    pub async fn list_by_rocket_id(&self, rocket_id: &str) -> QueryResult<Vec<LaunchView>> {
        let body = self.source.launches_data().await?;
        let launches = parse_launches(&body)?;
        let views = launches_for_rocket(launches, rocket_id, self.placeholder_on_empty);
        tracing::debug!(rocket_id = %rocket_id, count = views.len(), "Listed launches");
        Ok(views)
    }

    /// Upstream launch history, unparsed.
    pub async fn raw_launches(&self) -> QueryResult<String> {
        Ok(self.source.launches_data().await?)
    }

    /// Upstream launch history, or the legacy error text on failure.
    pub async fn raw_launches_or_message(&self) -> String {
        fetch_or_message(self.source.as_ref(), LAUNCHES_ENDPOINT).await
    }
}

/// Keep launches of `rocket_id` and project them.
pub fn launches_for_rocket(
    launches: Vec<RawLaunch>,
    rocket_id: &str,
    placeholder_on_empty: bool,
) -> Vec<LaunchView> {
    let views: Vec<LaunchView> = launches
        .into_iter()
        .filter(|launch| launch.rocket == rocket_id)
        .map(LaunchView::from)
        .collect();

    if views.is_empty() && placeholder_on_empty {
        return vec![LaunchView::placeholder()];
    }
    views
}
