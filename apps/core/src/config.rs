use crate::locale::Language;
use std::time::Duration;

pub const DEFAULT_DATA_PATH: &str = "data";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Map settings shared by both front ends.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Directory or URL prefix holding `<city>.json` files.
    pub data_base_path: String,
    pub initial_language: Language,
    pub center: (f64, f64),
    pub zoom: u8,
    /// Zoom used when a highlighted marker is re-centered.
    pub highlight_zoom: u8,
    pub tile_url_template: String,
    pub tile_attribution: String,
    /// Delay between opening a city panel from search and emphasizing the dish.
    pub emphasis_delay: Duration,
    pub emphasis_duration: Duration,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            data_base_path: DEFAULT_DATA_PATH.to_string(),
            initial_language: Language::Ko,
            center: (36.5, 127.5),
            zoom: 7,
            highlight_zoom: 8,
            tile_url_template: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            emphasis_delay: Duration::from_millis(500),
            emphasis_duration: Duration::from_millis(2000),
        }
    }
}

impl MapConfig {
    /// Location of a city's data file, e.g. `data/hupo.json`.
    pub fn data_path(&self, city_key: &str) -> String {
        let base = self.data_base_path.trim_end_matches('/');
        if base.is_empty() {
            format!("{city_key}.json")
        } else {
            format!("{base}/{city_key}.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapConfig;

    #[test]
    fn data_path_joins_base_and_key() {
        let mut config = MapConfig::default();
        assert_eq!(config.data_path("hupo"), "data/hupo.json");

        config.data_base_path = "/srv/food/".to_string();
        assert_eq!(config.data_path("seoul"), "/srv/food/seoul.json");

        config.data_base_path = String::new();
        assert_eq!(config.data_path("jeju"), "jeju.json");
    }
}
