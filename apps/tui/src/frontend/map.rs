use food_map_core::{City, MapWidget};

#[derive(Debug, Clone)]
pub struct TerminalMarker {
    pub city: &'static City,
    pub popup: String,
    pub highlighted: bool,
}

/// Canvas-backed map: remembers the viewport and the marker states the
/// map widget draws.
#[derive(Debug, Default)]
pub struct TerminalMap {
    pub center: (f64, f64),
    pub zoom: u8,
    pub attribution: Option<String>,
    pub markers: Vec<TerminalMarker>,
}

/// Degrees of longitude shown across the canvas at zoom 7.
const BASE_SPAN: f64 = 6.0;

impl TerminalMap {
    /// Longitude and latitude bounds of the current viewport.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let span = BASE_SPAN / 2_f64.powi(i32::from(self.zoom.saturating_sub(7)));
        let (lat, lng) = self.center;
        (
            [lng - span / 2.0, lng + span / 2.0],
            [lat - span / 2.0, lat + span / 2.0],
        )
    }

    pub fn highlighted(&self) -> Option<&TerminalMarker> {
        self.markers.iter().find(|marker| marker.highlighted)
    }
}

impl MapWidget for TerminalMap {
    type Marker = usize;

    fn initialize(&mut self, center_lat: f64, center_lng: f64, zoom: u8) {
        self.center = (center_lat, center_lng);
        self.zoom = zoom;
    }

    fn add_tile_layer(&mut self, _url_template: &str, attribution: &str) {
        // tiles are replaced by the canvas world map
        self.attribution = Some(attribution.to_string());
    }

    fn place_marker(&mut self, city: &'static City) -> usize {
        self.markers.push(TerminalMarker {
            city,
            popup: String::new(),
            highlighted: false,
        });
        self.markers.len() - 1
    }

    fn bind_popup(&mut self, marker: &usize, label: &str) {
        self.set_popup_content(marker, label);
    }

    fn set_popup_content(&mut self, marker: &usize, label: &str) {
        if let Some(marker) = self.markers.get_mut(*marker) {
            marker.popup = label.to_string();
        }
    }

    fn set_highlight_state(&mut self, marker: &usize, highlighted: bool) {
        if let Some(marker) = self.markers.get_mut(*marker) {
            marker.highlighted = highlighted;
        }
    }

    fn pan_to(&mut self, lat: f64, lng: f64, zoom: u8) {
        self.center = (lat, lng);
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalMap;
    use food_map_core::MapWidget;

    #[test]
    fn zooming_in_halves_the_span() {
        let mut map = TerminalMap::default();
        map.initialize(36.5, 127.5, 7);
        let (lng, lat) = map.bounds();
        assert!((lng[1] - lng[0] - 6.0).abs() < f64::EPSILON);
        assert!((lat[0] - 33.5).abs() < f64::EPSILON);

        map.pan_to(35.0, 129.0, 8);
        let (lng, _) = map.bounds();
        assert!((lng[1] - lng[0] - 3.0).abs() < f64::EPSILON);
        assert!((lng[0] - 127.5).abs() < f64::EPSILON);
    }
}
