//! Rocket queries.

use std::sync::Arc;

use crate::query::model::{parse_rockets, RawRocket, RocketView};
use crate::query::sort::{sort_rockets, SortKey};
use crate::query::QueryResult;
use crate::upstream::SpaceDataSource;

/// Serves rocket listings from the upstream catalogue.
#[derive(Clone)]
pub struct RocketService {
    source: Arc<dyn SpaceDataSource>,
}

impl RocketService {
    pub fn new(source: Arc<dyn SpaceDataSource>) -> Self {
        Self { source }
    }

    /// Every rocket, optionally sorted. Upstream order is kept without a key.
    pub async fn list_all(&self, sort: Option<SortKey>) -> QueryResult<Vec<RocketView>> {
        let rockets = self.fetch().await?;
        let views = project_all(rockets, sort);
        tracing::debug!(
            count = views.len(),
            sort = sort.map(|k| k.as_str()).unwrap_or("none"),
            "Listed rockets"
        );
        Ok(views)
    }

    /// Rockets whose `active` flag is explicitly true.
    pub async fn list_active(&self) -> QueryResult<Vec<RocketView>> {
        let rockets = self.fetch().await?;
        let views = project_active(rockets);
        tracing::debug!(count = views.len(), "Listed active rockets");
        Ok(views)
    }

    async fn fetch(&self) -> QueryResult<Vec<RawRocket>> {
        let body = self.source.rockets_data().await?;
        Ok(parse_rockets(&body)?)
    }
}

/// Project every rocket, then apply `sort` if given.
pub fn project_all(rockets: Vec<RawRocket>, sort: Option<SortKey>) -> Vec<RocketView> {
    let mut views: Vec<RocketView> = rockets.into_iter().map(RocketView::from).collect();
    if let Some(key) = sort {
        sort_rockets(&mut views, key);
    }
    views
}

/// Project only rockets with `active == Some(true)`, keeping upstream order.
pub fn project_active(rockets: Vec<RawRocket>) -> Vec<RocketView> {
    rockets
        .into_iter()
        .filter(|rocket| rocket.active == Some(true))
        .map(RocketView::from)
        .collect()
}
