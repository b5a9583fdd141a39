use food_map_core::loader::parse_city_foods;
use food_map_core::{City, CityFoods, DataSource, LoadError};
use std::path::PathBuf;

/// Reads `<base_dir>/<city>.json` from disk.
#[derive(Debug, Clone)]
pub struct FsDataSource {
    base_dir: PathBuf,
}

impl FsDataSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn path_for(&self, city: &City) -> PathBuf {
        self.base_dir.join(format!("{}.json", city.key))
    }

    pub async fn fetch_city_file(&self, city: &City) -> Result<CityFoods, LoadError> {
        let path = self.path_for(city);
        tracing::debug!(city = city.key, path = %path.display(), "reading city data");
        let payload = tokio::fs::read_to_string(&path).await?;
        parse_city_foods(&payload)
    }
}

impl DataSource for FsDataSource {
    async fn fetch_city(&self, city: &'static City) -> Result<CityFoods, LoadError> {
        self.fetch_city_file(city).await
    }
}

#[cfg(test)]
mod tests {
    use super::FsDataSource;
    use food_map_core::cities::find;
    use food_map_core::loader::load_all;
    use food_map_core::{DataSource, Language, LoadError, CITIES};
    use std::path::PathBuf;

    fn shipped_data() -> FsDataSource {
        FsDataSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
    }

    #[tokio::test]
    async fn reads_shipped_city_files() {
        let source = shipped_data();
        let jeonju = source.fetch_city(find("jeonju").unwrap()).await.unwrap();
        let bibimbap = jeonju.dish("bibimbap").unwrap();
        assert_eq!(bibimbap.name.get(Language::Ko), "비빔밥");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = shipped_data();
        let error = source.fetch_city(find("hupo").unwrap()).await.unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn every_shipped_file_parses() {
        let source = shipped_data();
        let mut malformed = Vec::new();
        load_all(&source, &CITIES, |city, result| {
            if let Err(LoadError::Malformed(err)) = result {
                malformed.push(format!("{}: {err}", city.key));
            }
        })
        .await;
        assert!(malformed.is_empty(), "{malformed:?}");
    }
}
