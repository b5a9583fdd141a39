use crate::cities::City;
use crate::error::LoadError;
use crate::loader::DataSource;
use crate::locale::Language;
use crate::map::MapWidget;
use crate::model::{CityFoods, Dish, LocalizedText};
use crate::view::{BoundProperty, PanelContent, ResultsContent, TranslationBinding, ViewTree};
use crate::{DeferredTask, Scheduler};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

pub fn dish(id: &str, ko: &str, en: &str) -> Dish {
    let text = |suffix_ko: &str, suffix_en: &str| {
        LocalizedText::new(format!("{ko} {suffix_ko}"), format!("{en} {suffix_en}"))
    };
    Dish {
        id: id.to_string(),
        name: LocalizedText::new(ko, en),
        description: text("설명", "description"),
        origin: text("유래", "origin"),
        history: text("역사", "history"),
        geography: text("지리", "geography"),
    }
}

pub fn foods(dishes: Vec<Dish>) -> CityFoods {
    CityFoods { foods: dishes }
}

#[derive(Debug)]
pub struct FakeMarker {
    pub city: &'static str,
    pub popup: String,
    pub highlighted: bool,
}

#[derive(Debug, Default)]
pub struct FakeMap {
    pub initialized: Option<(f64, f64, u8)>,
    pub tile_layers: Vec<(String, String)>,
    pub markers: Vec<FakeMarker>,
    pub pans: Vec<(f64, f64, u8)>,
}

impl FakeMap {
    pub fn popup(&self, city: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|marker| marker.city == city)
            .map(|marker| marker.popup.as_str())
    }

    pub fn highlighted(&self) -> Vec<&'static str> {
        self.markers
            .iter()
            .filter(|marker| marker.highlighted)
            .map(|marker| marker.city)
            .collect()
    }
}

impl MapWidget for FakeMap {
    type Marker = usize;

    fn initialize(&mut self, center_lat: f64, center_lng: f64, zoom: u8) {
        self.initialized = Some((center_lat, center_lng, zoom));
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        self.tile_layers
            .push((url_template.to_string(), attribution.to_string()));
    }

    fn place_marker(&mut self, city: &'static City) -> usize {
        self.markers.push(FakeMarker {
            city: city.key,
            popup: String::new(),
            highlighted: false,
        });
        self.markers.len() - 1
    }

    fn bind_popup(&mut self, marker: &usize, label: &str) {
        self.markers[*marker].popup = label.to_string();
    }

    fn set_popup_content(&mut self, marker: &usize, label: &str) {
        self.markers[*marker].popup = label.to_string();
    }

    fn set_highlight_state(&mut self, marker: &usize, highlighted: bool) {
        self.markers[*marker].highlighted = highlighted;
    }

    fn pan_to(&mut self, lat: f64, lng: f64, zoom: u8) {
        self.pans.push((lat, lng, zoom));
    }
}

#[derive(Debug)]
pub struct FakeElement {
    pub key: &'static str,
    pub property: BoundProperty,
    pub text: String,
}

#[derive(Debug)]
pub struct FakeView {
    pub elements: Vec<FakeElement>,
    pub document_title: String,
    pub active_language: Option<Language>,
    pub header: String,
    pub panel: Option<PanelContent>,
    pub panel_renders: usize,
    pub results: Option<ResultsContent>,
    pub results_visible: bool,
    pub search_input: String,
    pub emphasized: HashSet<String>,
}

impl Default for FakeView {
    fn default() -> Self {
        let element = |key, property| FakeElement {
            key,
            property,
            text: String::new(),
        };
        let mut elements = vec![
            element("main_title", BoundProperty::Text),
            element("about", BoundProperty::Text),
            element("about", BoundProperty::Title),
            element("search_placeholder", BoundProperty::Placeholder),
            element("select_city", BoundProperty::Text),
            element("welcome_message", BoundProperty::Text),
            element("legacy_banner", BoundProperty::Text),
        ];
        elements[6].text = "static banner".to_string();

        Self {
            elements,
            document_title: String::new(),
            active_language: None,
            header: String::new(),
            panel: None,
            panel_renders: 0,
            results: None,
            results_visible: false,
            search_input: String::new(),
            emphasized: HashSet::new(),
        }
    }
}

impl FakeView {
    pub fn text_of(&self, key: &str) -> &str {
        self.elements
            .iter()
            .find(|element| element.key == key)
            .map_or("", |element| element.text.as_str())
    }

    pub fn bound_texts(&self) -> Vec<String> {
        self.elements
            .iter()
            .map(|element| element.text.clone())
            .collect()
    }
}

impl ViewTree for FakeView {
    type Element = usize;

    fn translation_bindings(&mut self) -> Vec<TranslationBinding<usize>> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| TranslationBinding {
                element: index,
                key: element.key.to_string(),
                property: element.property,
            })
            .collect()
    }

    fn set_bound_text(&mut self, element: &usize, property: BoundProperty, text: &str) {
        let element = &mut self.elements[*element];
        assert_eq!(element.property, property);
        element.text = text.to_string();
    }

    fn set_document_title(&mut self, title: &str) {
        self.document_title = title.to_string();
    }

    fn set_active_language(&mut self, lang: Language) {
        self.active_language = Some(lang);
    }

    fn set_panel_header(&mut self, text: &str) {
        self.header = text.to_string();
    }

    fn render_panel(&mut self, content: &PanelContent) {
        self.panel = Some(content.clone());
        self.panel_renders += 1;
        self.emphasized.clear();
    }

    fn show_results(&mut self, content: &ResultsContent) {
        self.results = Some(content.clone());
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn clear_search_input(&mut self) {
        self.search_input.clear();
    }

    fn emphasize_dish(&mut self, dish_id: &str, emphasized: bool) -> bool {
        let rendered = self
            .panel
            .as_ref()
            .is_some_and(|panel| panel.dish_ids().contains(&dish_id));
        if !rendered {
            return false;
        }
        if emphasized {
            self.emphasized.insert(dish_id.to_string());
        } else {
            self.emphasized.remove(dish_id);
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct FakeScheduler {
    pub tasks: Vec<(Duration, DeferredTask)>,
}

impl Scheduler for FakeScheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        self.tasks.push((delay, task));
    }
}

/// Serves fixtures from memory; cities without a fixture answer 404.
#[derive(Debug, Default)]
pub struct FakeSource {
    cities: HashMap<&'static str, CityFoods>,
    failing: HashSet<&'static str>,
}

impl FakeSource {
    pub fn with_city(mut self, city: &'static str, foods: CityFoods) -> Self {
        self.cities.insert(city, foods);
        self
    }

    pub fn failing(mut self, city: &'static str) -> Self {
        self.failing.insert(city);
        self
    }
}

impl DataSource for FakeSource {
    async fn fetch_city(&self, city: &'static City) -> Result<CityFoods, LoadError> {
        if self.failing.contains(city.key) {
            return Err(LoadError::Transport("connection refused".to_string()));
        }
        self.cities
            .get(city.key)
            .cloned()
            .ok_or(LoadError::Status(404))
    }
}
