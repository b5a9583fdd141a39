use crate::source::FsDataSource;
use food_map_core::{CityFoods, LoadError, CITIES};
use tokio::sync::mpsc::UnboundedSender;

/// Outcome of one city's load, tagged with the city key.
pub type LoadMessage = (&'static str, Result<CityFoods, LoadError>);

/// Starts one task per registered city. Results arrive on `tx` in
/// completion order; the event loop drains them between frames.
pub fn spawn_loads(source: &FsDataSource, tx: &UnboundedSender<LoadMessage>) {
    for city in &CITIES {
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_city_file(city).await;
            if tx.send((city.key, result)).is_err() {
                tracing::debug!(city = city.key, "event loop gone, dropping load result");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::spawn_loads;
    use crate::source::FsDataSource;
    use food_map_core::CITIES;
    use std::path::PathBuf;

    #[tokio::test]
    async fn every_city_reports_exactly_once() {
        let source =
            FsDataSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_loads(&source, &tx);
        drop(tx);

        let mut keys = Vec::new();
        let mut failed = Vec::new();
        while let Some((key, result)) = rx.recv().await {
            keys.push(key);
            if result.is_err() {
                failed.push(key);
            }
        }

        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CITIES.len());
        assert!(failed.contains(&"hupo"));
        assert!(!failed.contains(&"seoul"));
    }
}
