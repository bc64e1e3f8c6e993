//! Fetching of service data into the store.
//!
//! A fetch is split in two so that no borrow of the store is held across the
//! network round trip: `begin_*` marks the request as started and hands out
//! the future, `complete_*` stores whatever the future resolved to.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::data_types::{RequestStatus, SiteKey, WaterLevelSeries, WellLog};
use crate::error::FetchError;
use crate::store::{Action, Store};

/// Source of parsed service payloads.
pub trait DataService {
    fn fetch_series(&self, site: &SiteKey) -> BoxFuture<'static, Result<WaterLevelSeries, FetchError>>;

    fn fetch_well_log(&self, site: &SiteKey) -> BoxFuture<'static, Result<WellLog, FetchError>>;
}

/// Starts a series request unless one for `site` is already in flight.
pub fn begin_series_fetch(
    store: &mut Store,
    service: &dyn DataService,
    site: &SiteKey,
) -> Option<BoxFuture<'static, Result<WaterLevelSeries, FetchError>>> {
    if store.state().series_status(site) == Some(RequestStatus::Started) {
        debug!(%site, "series request already in flight");
        return None;
    }
    store.dispatch(Action::SetSeriesStatus {
        site: site.clone(),
        status: RequestStatus::Started,
    });
    Some(service.fetch_series(site))
}

/// Stores the outcome of a series request. A failure is stored as an
/// error-flagged empty series.
pub fn complete_series_fetch(
    store: &mut Store,
    site: &SiteKey,
    result: Result<WaterLevelSeries, FetchError>,
) {
    let series = match result {
        Ok(series) => series,
        Err(err) => {
            warn!(%site, error = %err, "series fetch failed");
            WaterLevelSeries::failed(err.to_string())
        }
    };
    store.dispatch(Action::SetSeries {
        site: site.clone(),
        series: Arc::new(series),
    });
    store.dispatch(Action::SetSeriesStatus {
        site: site.clone(),
        status: RequestStatus::Done,
    });
}

/// Fetches and stores the series of `site`. Returns `false` if a request was
/// already in flight.
pub async fn retrieve_series(store: &mut Store, service: &dyn DataService, site: &SiteKey) -> bool {
    let Some(request) = begin_series_fetch(store, service, site) else {
        return false;
    };
    let result = request.await;
    complete_series_fetch(store, site, result);
    true
}

/// Starts a well-log request unless one for `site` is already in flight.
pub fn begin_well_log_fetch(
    store: &mut Store,
    service: &dyn DataService,
    site: &SiteKey,
) -> Option<BoxFuture<'static, Result<WellLog, FetchError>>> {
    if store.state().well_log_status(site) == Some(RequestStatus::Started) {
        debug!(%site, "well log request already in flight");
        return None;
    }
    store.dispatch(Action::SetWellLogStatus {
        site: site.clone(),
        status: RequestStatus::Started,
    });
    Some(service.fetch_well_log(site))
}

/// Stores the outcome of a well-log request. A failure is stored as an empty log.
pub fn complete_well_log_fetch(store: &mut Store, site: &SiteKey, result: Result<WellLog, FetchError>) {
    let log = match result {
        Ok(log) => log,
        Err(err) => {
            warn!(%site, error = %err, "well log fetch failed");
            WellLog::default()
        }
    };
    store.dispatch(Action::SetWellLog {
        site: site.clone(),
        log: Arc::new(log),
    });
    store.dispatch(Action::SetWellLogStatus {
        site: site.clone(),
        status: RequestStatus::Done,
    });
}

pub async fn retrieve_well_log(store: &mut Store, service: &dyn DataService, site: &SiteKey) -> bool {
    let Some(request) = begin_well_log_fetch(store, service, site) else {
        return false;
    };
    let result = request.await;
    complete_well_log_fetch(store, site, result);
    true
}
