use crate::cities::City;
use crate::locale::Language;
use tracing::debug;

/// The slippy-map widget the markers live on.
///
/// `place_marker` must arrange for a click on the returned marker to reach
/// the app as `UiEvent::MarkerClicked(city.key)`.
pub trait MapWidget {
    type Marker;

    fn initialize(&mut self, center_lat: f64, center_lng: f64, zoom: u8);
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);
    fn place_marker(&mut self, city: &'static City) -> Self::Marker;
    fn bind_popup(&mut self, marker: &Self::Marker, label: &str);
    fn set_popup_content(&mut self, marker: &Self::Marker, label: &str);
    fn set_highlight_state(&mut self, marker: &Self::Marker, highlighted: bool);
    fn pan_to(&mut self, lat: f64, lng: f64, zoom: u8);
}

/// Keeps exactly one marker per city and at most one highlighted marker.
pub struct MarkerController<M: MapWidget> {
    map: M,
    markers: Vec<(&'static City, M::Marker)>,
    highlighted: Option<usize>,
    highlight_zoom: u8,
}

impl<M: MapWidget> MarkerController<M> {
    pub fn new(map: M, highlight_zoom: u8) -> Self {
        Self {
            map,
            markers: Vec::new(),
            highlighted: None,
            highlight_zoom,
        }
    }

    /// Places the marker for `city`. A second call for the same city is
    /// ignored and returns `false`.
    pub fn create_marker(&mut self, city: &'static City, lang: Language) -> bool {
        if self.has_marker(city.key) {
            debug!(city = city.key, "marker already exists");
            return false;
        }

        debug!(city = city.key, lat = city.lat, lng = city.lng, "creating marker");
        let marker = self.map.place_marker(city);
        self.map.bind_popup(&marker, city.name(lang));
        self.markers.push((city, marker));
        true
    }

    pub fn refresh_popups(&mut self, lang: Language) {
        for (city, marker) in &self.markers {
            self.map.set_popup_content(marker, city.name(lang));
        }
    }

    /// Moves the highlight to `city_key` and re-centers the map on it. Only
    /// clears when the city has no marker.
    pub fn highlight(&mut self, city_key: &str) {
        self.clear_highlight();

        let Some(index) = self.index_of(city_key) else {
            debug!(city = city_key, "no marker to highlight");
            return;
        };

        let (city, marker) = &self.markers[index];
        self.map.set_highlight_state(marker, true);
        self.map.pan_to(city.lat, city.lng, self.highlight_zoom);
        self.highlighted = Some(index);
    }

    pub fn clear_highlight(&mut self) {
        if let Some(index) = self.highlighted.take() {
            let (_, marker) = &self.markers[index];
            self.map.set_highlight_state(marker, false);
        }
    }

    pub fn highlighted(&self) -> Option<&'static str> {
        self.highlighted.map(|index| self.markers[index].0.key)
    }

    pub fn has_marker(&self, city_key: &str) -> bool {
        self.index_of(city_key).is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn cities(&self) -> impl Iterator<Item = &'static City> + '_ {
        self.markers.iter().map(|(city, _)| *city)
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    fn index_of(&self, city_key: &str) -> Option<usize> {
        self.markers.iter().position(|(city, _)| city.key == city_key)
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerController;
    use crate::cities::{find, CITIES};
    use crate::locale::Language;
    use crate::testing::FakeMap;

    fn controller() -> MarkerController<FakeMap> {
        let mut markers = MarkerController::new(FakeMap::default(), 8);
        for city in &CITIES {
            markers.create_marker(city, Language::Ko);
        }
        markers
    }

    #[test]
    fn one_marker_per_city() {
        let mut markers = controller();
        assert_eq!(markers.marker_count(), 16);
        assert!(!markers.create_marker(find("seoul").unwrap(), Language::En));
        assert_eq!(markers.map().markers.len(), 16);
    }

    #[test]
    fn popups_follow_the_language() {
        let mut markers = controller();
        assert_eq!(markers.map().popup("busan"), Some("부산"));

        markers.refresh_popups(Language::En);
        assert_eq!(markers.map().popup("busan"), Some("Busan"));
        assert_eq!(markers.map().markers.len(), 16);
    }

    #[test]
    fn highlight_moves_and_clears() {
        let mut markers = controller();

        markers.highlight("seoul");
        markers.highlight("jeju");
        assert_eq!(markers.map().highlighted(), vec!["jeju"]);
        assert_eq!(markers.highlighted(), Some("jeju"));
        let jeju = find("jeju").unwrap();
        assert_eq!(markers.map().pans.last(), Some(&(jeju.lat, jeju.lng, 8)));

        markers.clear_highlight();
        markers.clear_highlight();
        assert!(markers.map().highlighted().is_empty());
        assert_eq!(markers.highlighted(), None);
    }

    #[test]
    fn highlighting_an_unknown_city_only_clears() {
        let mut markers = controller();
        markers.highlight("andong");
        let pans = markers.map().pans.len();

        markers.highlight("atlantis");
        assert!(markers.map().highlighted().is_empty());
        assert_eq!(markers.map().pans.len(), pans);
    }
}
