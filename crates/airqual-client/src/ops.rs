//! The three query operations against the QualAr map server.
//!
//! Each operation builds a request descriptor, issues one blocking GET
//! through the [`Transport`] seam and validates the response before handing
//! the typed feature list to the caller.

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::query::{PredicateBuilder, RequestDescriptor};
use crate::transport::{HttpResponse, Transport};
use airqual_types::{Feature, FeatureCollection};
use chrono::{TimeDelta, Utc};

// Wire attribute names used in filter expressions and ordering.
const ATTR_DATE: &str = "data";
const ATTR_STATION_ID: &str = "estacao_id";
const ATTR_POLLUTANT_ABV: &str = "poluente_abv";

// Map-server layers backing each report.
const LAYER_INDEXES: u32 = 0;
const LAYER_STATIONS: u32 = 1;
const LAYER_ALERTS: u32 = 9;

/// Optional constraints shared by the indexes and alerts operations.
///
/// Every field may be absent or empty; empty strings are treated the same as
/// absent values and contribute no filter clause.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub date: Option<String>,
    pub date_min: Option<String>,
    pub date_max: Option<String>,
    pub station: Option<String>,
    pub pollutant: Option<String>,
}

impl QueryParams {
    fn has_date_constraint(&self) -> bool {
        [&self.date, &self.date_min, &self.date_max]
            .iter()
            .any(|v| matches!(v, Some(s) if !s.is_empty()))
    }

    fn predicate(&self) -> PredicateBuilder {
        PredicateBuilder::new()
            .eq(ATTR_DATE, self.date.as_deref().unwrap_or(""))
            .at_least(ATTR_DATE, self.date_min.as_deref().unwrap_or(""))
            .at_most(ATTR_DATE, self.date_max.as_deref().unwrap_or(""))
            .eq(ATTR_STATION_ID, self.station.as_deref().unwrap_or(""))
            .eq(ATTR_POLLUTANT_ABV, self.pollutant.as_deref().unwrap_or(""))
    }
}

/// Lists measurement stations active on the given date.
///
/// Defaults to yesterday when no date is given; the source publishes station
/// data with a one-day lag.
pub fn stations(
    config: &ServiceConfig,
    transport: &dyn Transport,
    date: Option<String>,
) -> Result<Vec<Feature>> {
    let date = date
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| short_date(Utc::now() - TimeDelta::days(1)));

    let descriptor = PredicateBuilder::new().eq(ATTR_DATE, &date).build(
        config.layer_url(LAYER_STATIONS),
        "concelho_nome,estacao_id,estacao_nome",
        "concelho_nome,estacao_nome",
    );

    fetch(transport, &descriptor)
}

/// Fetches pollutant index measurements.
///
/// When no date constraint is given at all, the query defaults to today; a
/// single call, never the historical yesterday-and-today pair.
pub fn indexes(
    config: &ServiceConfig,
    transport: &dyn Transport,
    mut params: QueryParams,
) -> Result<Vec<Feature>> {
    if !params.has_date_constraint() {
        params.date = Some(short_date(Utc::now()));
    }

    let descriptor = params.predicate().build(
        config.layer_url(LAYER_INDEXES),
        "*",
        "data,estacao_nome,poluente_abv",
    );

    fetch(transport, &descriptor)
}

/// Fetches threshold-exceedance alerts.
///
/// The alerts layer holds the full history, so at least one constraint is
/// required; an unfiltered query is rejected before any request is made.
pub fn alerts(
    config: &ServiceConfig,
    transport: &dyn Transport,
    params: QueryParams,
) -> Result<Vec<Feature>> {
    let predicate = params.predicate();
    if predicate.is_empty() {
        return Err(Error::Usage(
            "please specify one of the following: date, datemin, datemax, station or pollutant"
                .to_string(),
        ));
    }

    let descriptor = predicate.build(
        config.layer_url(LAYER_ALERTS),
        "*",
        "estacao_nome,data,poluente_abv",
    );

    fetch(transport, &descriptor)
}

fn fetch(transport: &dyn Transport, descriptor: &RequestDescriptor) -> Result<Vec<Feature>> {
    let url = descriptor.url()?;
    let HttpResponse { status, body } = transport.get(&url)?;

    if status != 200 {
        return Err(Error::Transport(status));
    }

    let collection: FeatureCollection = serde_json::from_str(&body)?;

    if let Some(error) = collection.error {
        return Err(Error::Service(error.to_string()));
    }
    if collection.features.is_empty() {
        return Err(Error::NoData);
    }

    Ok(collection.features)
}

fn short_date(moment: chrono::DateTime<Utc>) -> String {
    moment.format("%Y-%m-%d").to_string()
}
