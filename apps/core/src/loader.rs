use crate::cities::City;
use crate::error::LoadError;
use crate::model::CityFoods;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// Where city data files come from: `fetch` in the browser, the file system
/// in the terminal.
pub trait DataSource {
    fn fetch_city(&self, city: &'static City)
        -> impl Future<Output = Result<CityFoods, LoadError>>;
}

pub fn parse_city_foods(payload: &str) -> Result<CityFoods, LoadError> {
    Ok(serde_json::from_str(payload)?)
}

/// Starts one load per city and reports each outcome as soon as it settles,
/// in completion order. A failing city never holds up the others.
pub async fn load_all<S, F>(source: &S, cities: &'static [City], mut on_settled: F)
where
    S: DataSource,
    F: FnMut(&'static City, Result<CityFoods, LoadError>),
{
    let mut pending: FuturesUnordered<_> = cities
        .iter()
        .map(|city| async move { (city, source.fetch_city(city).await) })
        .collect();

    while let Some((city, result)) = pending.next().await {
        on_settled(city, result);
    }
}
