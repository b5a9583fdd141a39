use crate::cities::{self, CITIES};
use crate::config::MapConfig;
use crate::error::LoadError;
use crate::language::LanguageSwitcher;
use crate::locale::{translate, Language, UiKey};
use crate::map::{MapWidget, MarkerController};
use crate::model::{CityFoods, FoodCollection};
use crate::panel::{PanelController, PanelState};
use crate::search::{search, SearchOutcome};
use crate::view::{ResultsContent, ViewTree};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Everything a user can do, as dispatched by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    MarkerClicked(String),
    LanguageSelected(Language),
    SearchInput(String),
    SearchFocused,
    /// A click landed outside the search container.
    OutsideClick,
    ResultSelected { city: String, dish: String },
    DishClicked { city: String, dish: String },
    BackClicked(String),
    ClosePanel,
}

/// Work the app asks to be done later, fed back through [`App::run_deferred`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    EmphasizeDish { city: &'static str, dish_id: String },
    /// Only the release matching the latest emphasis takes effect.
    ReleaseEmphasis { dish_id: String, generation: u64 },
}

/// Timer capability of the host (setTimeout, an event-loop deadline queue).
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask);
}

/// The app controller. Owns the session state: current language, loaded
/// data, markers, highlight and panel view.
pub struct App<M: MapWidget, V: ViewTree, S: Scheduler> {
    config: MapConfig,
    language: Language,
    foods: FoodCollection,
    markers: MarkerController<M>,
    panel: PanelController,
    switcher: LanguageSwitcher<V::Element>,
    view: V,
    scheduler: S,
    results_open: bool,
    emphasis_generation: u64,
}

impl<M: MapWidget, V: ViewTree, S: Scheduler> App<M, V, S> {
    /// Sets up the map, places every city marker and renders the initial
    /// language and welcome panel. Markers never wait for data.
    pub fn new(config: MapConfig, mut map: M, mut view: V, scheduler: S) -> Self {
        let (lat, lng) = config.center;
        map.initialize(lat, lng, config.zoom);
        map.add_tile_layer(&config.tile_url_template, &config.tile_attribution);

        let language = config.initial_language;
        let mut markers = MarkerController::new(map, config.highlight_zoom);
        for city in &CITIES {
            markers.create_marker(city, language);
        }
        debug!(count = markers.marker_count(), "markers created");

        let switcher = LanguageSwitcher::new(view.translation_bindings());

        let mut app = Self {
            config,
            language,
            foods: FoodCollection::new(),
            markers,
            panel: PanelController::new(),
            switcher,
            view,
            scheduler,
            results_open: false,
            emphasis_generation: 0,
        };
        app.view.set_active_language(language);
        app.switcher.apply(&mut app.view, language);
        app.panel.show_welcome(&mut app.view, language);
        app
    }

    pub fn handle(&mut self, event: UiEvent) {
        debug!(?event, "ui event");
        match event {
            UiEvent::MarkerClicked(city) | UiEvent::BackClicked(city) => self.show_city(&city),
            UiEvent::LanguageSelected(lang) => self.set_language(lang),
            UiEvent::SearchInput(query) => {
                self.search(&query);
            }
            UiEvent::SearchFocused => {
                if self.results_open {
                    self.view.set_results_visible(true);
                }
            }
            UiEvent::OutsideClick => self.view.set_results_visible(false),
            UiEvent::ResultSelected { city, dish } => self.select_result(&city, &dish),
            UiEvent::DishClicked { city, dish } => self.show_detail(&city, &dish),
            UiEvent::ClosePanel => self.close_panel(),
        }
    }

    /// Stores a settled load. Failures only get logged; the city keeps its
    /// marker and shows the placeholder.
    pub fn on_city_loaded(&mut self, city_key: &str, result: Result<CityFoods, LoadError>) {
        let Some(city) = cities::find(city_key) else {
            warn!(city = city_key, "data arrived for an unknown city");
            return;
        };

        match result {
            Ok(foods) => {
                debug!(city = city.key, dishes = foods.foods.len(), "city data loaded");
                self.foods.insert(city.key, foods);
            }
            Err(err) => {
                error!(
                    city = city.key,
                    path = %self.config.data_path(city.key),
                    "failed to load city data: {err}"
                );
            }
        }
    }

    /// Switches the UI language. The welcome panel follows immediately; an
    /// open city or dish panel keeps its old language until the user
    /// navigates again.
    pub fn set_language(&mut self, lang: Language) {
        debug!(%lang, "switching language");
        self.language = lang;
        self.view.set_active_language(lang);
        self.switcher.apply(&mut self.view, lang);
        self.markers.refresh_popups(lang);
        if *self.panel.state() == PanelState::Welcome {
            self.panel.show_welcome(&mut self.view, lang);
        }
    }

    /// Runs a query and renders its outcome into the results container.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let outcome = search(&self.foods, self.language, query);
        match &outcome {
            SearchOutcome::NoQuery => {
                self.results_open = false;
                self.view.set_results_visible(false);
                self.markers.clear_highlight();
            }
            SearchOutcome::Hits(hits) => {
                let content = if hits.is_empty() {
                    ResultsContent::Empty {
                        message: translate(self.language, UiKey::NoResults),
                    }
                } else {
                    ResultsContent::Hits(hits.clone())
                };
                self.view.show_results(&content);
                self.view.set_results_visible(true);
                self.results_open = true;
            }
        }
        outcome
    }

    /// Jumps from a search result to its city and schedules the emphasis of
    /// the dish entry. Stale results are ignored.
    pub fn select_result(&mut self, city_key: &str, dish_id: &str) {
        let Some(city) = cities::find(city_key) else {
            warn!(city = city_key, "search result for an unknown city");
            return;
        };
        if self.foods.dish(city.key, dish_id).is_none() {
            warn!(city = city.key, dish = dish_id, "ignoring stale search result");
            return;
        }

        self.results_open = false;
        self.view.set_results_visible(false);
        self.view.clear_search_input();
        self.markers.highlight(city.key);
        self.show_city(city.key);
        self.scheduler.schedule(
            self.config.emphasis_delay,
            DeferredTask::EmphasizeDish {
                city: city.key,
                dish_id: dish_id.to_string(),
            },
        );
    }

    pub fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::EmphasizeDish { city, dish_id } => {
                if !self.view.emphasize_dish(&dish_id, true) {
                    debug!(city, dish = %dish_id, "dish entry not rendered, skipping emphasis");
                    return;
                }
                self.emphasis_generation += 1;
                self.scheduler.schedule(
                    self.config.emphasis_duration,
                    DeferredTask::ReleaseEmphasis {
                        dish_id,
                        generation: self.emphasis_generation,
                    },
                );
            }
            DeferredTask::ReleaseEmphasis {
                dish_id,
                generation,
            } => {
                if generation != self.emphasis_generation {
                    debug!(dish = %dish_id, generation, "superseded emphasis release");
                    return;
                }
                self.view.emphasize_dish(&dish_id, false);
            }
        }
    }

    pub fn show_city(&mut self, city_key: &str) {
        let Some(city) = cities::find(city_key) else {
            warn!(city = city_key, "no such city");
            return;
        };
        let source_path = self.config.data_path(city.key);
        self.panel.show_city(
            &mut self.view,
            city,
            self.foods.get(city.key),
            self.language,
            &source_path,
        );
    }

    /// Opens a dish's detail view. A dish that does not resolve leaves the
    /// panel untouched.
    pub fn show_detail(&mut self, city_key: &str, dish_id: &str) {
        let Some(city) = cities::find(city_key) else {
            warn!(city = city_key, "no such city");
            return;
        };
        let Some(dish) = self.foods.dish(city.key, dish_id) else {
            warn!(city = city.key, dish = dish_id, "ignoring click on unknown dish");
            return;
        };
        self.panel.show_detail(&mut self.view, city, dish, self.language);
    }

    pub fn close_panel(&mut self) {
        self.panel.show_welcome(&mut self.view, self.language);
        self.markers.clear_highlight();
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    pub const fn foods(&self) -> &FoodCollection {
        &self.foods
    }

    pub const fn markers(&self) -> &MarkerController<M> {
        &self.markers
    }

    pub const fn panel_state(&self) -> &PanelState {
        self.panel.state()
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub const fn results_open(&self) -> bool {
        self.results_open
    }
}

#[cfg(test)]
mod tests {
    use super::{App, DeferredTask, UiEvent};
    use crate::cities::CITIES;
    use crate::config::MapConfig;
    use crate::error::LoadError;
    use crate::loader::load_all;
    use crate::locale::Language;
    use crate::panel::PanelState;
    use crate::search::SearchOutcome;
    use crate::testing::{dish, foods, FakeMap, FakeScheduler, FakeSource, FakeView};
    use crate::view::{PanelContent, ResultsContent};
    use futures::executor::block_on;
    use std::time::Duration;

    type TestApp = App<FakeMap, FakeView, FakeScheduler>;

    fn app() -> TestApp {
        App::new(
            MapConfig::default(),
            FakeMap::default(),
            FakeView::default(),
            FakeScheduler::default(),
        )
    }

    fn loaded_app() -> TestApp {
        let mut app = app();
        app.on_city_loaded(
            "seoul",
            Ok(foods(vec![
                dish("seolleongtang", "설렁탕", "Ox Bone Soup"),
                dish("naengmyeon", "냉면", "Cold Noodles"),
            ])),
        );
        app.on_city_loaded(
            "jeonju",
            Ok(foods(vec![
                dish("bibimbap", "비빔밥", "Bibimbap"),
                dish("kongnamul", "콩나물국밥", "Bean Sprout Soup"),
            ])),
        );
        app.on_city_loaded("hupo", Err(LoadError::Status(404)));
        app
    }

    #[test]
    fn initialization_sets_up_map_and_welcome_panel() {
        let app = app();
        let map = app.markers().map();
        assert_eq!(map.initialized, Some((36.5, 127.5, 7)));
        assert_eq!(map.tile_layers.len(), 1);
        assert_eq!(map.markers.len(), CITIES.len());
        assert_eq!(app.panel_state(), &PanelState::Welcome);
        assert_eq!(app.view().header, "도시를 선택하세요");
        assert_eq!(app.view().document_title, "한국 전통 요리 지도");
        assert_eq!(app.view().active_language, Some(Language::Ko));
    }

    #[test]
    fn one_marker_per_city_whatever_the_load_outcome() {
        let mut app = app();
        let source = FakeSource::default()
            .with_city("seoul", foods(vec![dish("a", "가", "A")]))
            .failing("hupo");

        block_on(load_all(&source, &CITIES, |city, result| {
            app.on_city_loaded(city.key, result);
        }));

        let map = app.markers().map();
        for city in &CITIES {
            let count = map.markers.iter().filter(|m| m.city == city.key).count();
            assert_eq!(count, 1, "{}", city.key);
        }
        assert_eq!(app.foods().loaded_cities(), 1);
    }

    #[test]
    fn failed_city_keeps_marker_and_shows_placeholder() {
        let mut app = loaded_app();
        assert!(app.markers().has_marker("hupo"));

        app.handle(UiEvent::MarkerClicked("hupo".to_string()));
        assert_eq!(app.panel_state(), &PanelState::CityList { city: "hupo" });
        match app.view().panel.as_ref().unwrap() {
            PanelContent::Unavailable { source_path, .. } => {
                assert_eq!(source_path, "data/hupo.json");
            }
            other => panic!("unexpected panel: {other:?}"),
        }

        let SearchOutcome::Hits(hits) = app.search("후") else {
            panic!("expected hits");
        };
        assert!(hits.iter().all(|hit| hit.city != "hupo"));
    }

    #[test]
    fn blank_search_hides_results_but_no_match_renders_message() {
        let mut app = loaded_app();

        app.handle(UiEvent::SearchInput("   ".to_string()));
        assert!(!app.view().results_visible);
        assert!(!app.results_open());

        app.handle(UiEvent::SearchInput("xyz-no-match".to_string()));
        assert!(app.view().results_visible);
        assert_eq!(
            app.view().results,
            Some(ResultsContent::Empty {
                message: "검색 결과가 없습니다."
            })
        );
    }

    #[test]
    fn blank_search_clears_highlight() {
        let mut app = loaded_app();
        app.select_result("seoul", "naengmyeon");
        assert_eq!(app.markers().highlighted(), Some("seoul"));

        app.handle(UiEvent::SearchInput(String::new()));
        assert_eq!(app.markers().highlighted(), None);
    }

    #[test]
    fn same_query_matches_differently_per_language() {
        let mut app = loaded_app();
        app.set_language(Language::En);
        let SearchOutcome::Hits(en_hits) = app.search("soup") else {
            panic!("expected hits");
        };
        assert_eq!(en_hits.len(), 2);
        assert_eq!(en_hits[0].city_name, "Seoul");

        app.set_language(Language::Ko);
        assert_eq!(app.search("soup"), SearchOutcome::Hits(Vec::new()));
    }

    #[test]
    fn selecting_a_result_opens_city_and_emphasizes_dish() {
        let mut app = loaded_app();
        app.view_mut().search_input = "비빔".to_string();
        app.handle(UiEvent::SearchInput("비빔".to_string()));
        app.handle(UiEvent::ResultSelected {
            city: "jeonju".to_string(),
            dish: "bibimbap".to_string(),
        });

        assert!(!app.view().results_visible);
        assert!(app.view().search_input.is_empty());
        assert_eq!(app.markers().highlighted(), Some("jeonju"));
        assert_eq!(app.panel_state(), &PanelState::CityList { city: "jeonju" });

        let (delay, task) = app.scheduler_mut().tasks.remove(0);
        assert_eq!(delay, Duration::from_millis(500));
        app.run_deferred(task);
        assert!(app.view().emphasized.contains("bibimbap"));

        let (delay, task) = app.scheduler_mut().tasks.remove(0);
        assert_eq!(delay, Duration::from_millis(2000));
        assert_eq!(
            task,
            DeferredTask::ReleaseEmphasis {
                dish_id: "bibimbap".to_string(),
                generation: 1,
            }
        );
        app.run_deferred(task);
        assert!(app.view().emphasized.is_empty());
    }

    #[test]
    fn emphasis_is_skipped_when_entry_is_gone() {
        let mut app = loaded_app();
        app.select_result("jeonju", "bibimbap");
        app.close_panel();

        let (_, task) = app.scheduler_mut().tasks.remove(0);
        app.run_deferred(task);
        assert!(app.view().emphasized.is_empty());
        assert!(app.scheduler().tasks.is_empty());
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut app = loaded_app();
        app.show_city("seoul");
        app.select_result("jeonju", "no-such-dish");

        assert_eq!(app.panel_state(), &PanelState::CityList { city: "seoul" });
        assert_eq!(app.markers().highlighted(), None);
        assert!(app.scheduler().tasks.is_empty());

        app.handle(UiEvent::DishClicked {
            city: "seoul".to_string(),
            dish: "gone".to_string(),
        });
        assert_eq!(app.panel_state(), &PanelState::CityList { city: "seoul" });
    }

    #[test]
    fn detail_and_back_return_the_same_list() {
        let mut app = loaded_app();
        app.handle(UiEvent::MarkerClicked("jeonju".to_string()));
        let before = app.view().panel.clone();

        app.handle(UiEvent::DishClicked {
            city: "jeonju".to_string(),
            dish: "kongnamul".to_string(),
        });
        assert_eq!(
            app.panel_state(),
            &PanelState::Detail {
                city: "jeonju",
                dish_id: "kongnamul".to_string()
            }
        );

        app.handle(UiEvent::BackClicked("jeonju".to_string()));
        assert_eq!(app.view().panel, before);
        assert_eq!(before.unwrap().dish_ids(), vec!["bibimbap", "kongnamul"]);
    }

    #[test]
    fn close_returns_to_welcome_and_clears_highlight() {
        let mut app = loaded_app();
        app.select_result("seoul", "seolleongtang");
        app.set_language(Language::En);

        app.handle(UiEvent::ClosePanel);
        assert_eq!(app.panel_state(), &PanelState::Welcome);
        assert_eq!(app.markers().highlighted(), None);
        assert_eq!(app.view().header, "Select a City");
        assert_eq!(
            app.view().panel,
            Some(PanelContent::Welcome {
                message: "Click on city markers on the map to explore traditional cuisine!"
            })
        );
    }

    #[test]
    fn language_round_trip_restores_static_text() {
        let mut app = loaded_app();
        let before = app.view().bound_texts();

        app.handle(UiEvent::LanguageSelected(Language::En));
        assert_ne!(app.view().bound_texts(), before);
        assert_eq!(app.markers().map().popup("seoul"), Some("Seoul"));
        assert_eq!(app.view().active_language, Some(Language::En));

        app.handle(UiEvent::LanguageSelected(Language::Ko));
        assert_eq!(app.view().bound_texts(), before);
        assert_eq!(app.markers().map().popup("seoul"), Some("서울"));
    }

    #[test]
    fn language_switch_leaves_open_panel_alone() {
        let mut app = loaded_app();
        app.show_city("seoul");
        let renders = app.view().panel_renders;

        app.set_language(Language::En);
        assert_eq!(app.view().panel_renders, renders);
        assert_eq!(app.view().header, "서울");
    }

    #[test]
    fn language_switch_rerenders_welcome_panel() {
        let mut app = loaded_app();
        assert_eq!(app.view().header, "도시를 선택하세요");

        app.set_language(Language::En);
        assert_eq!(app.panel_state(), &PanelState::Welcome);
        assert_eq!(app.view().header, "Select a City");
        assert_eq!(
            app.view().panel,
            Some(PanelContent::Welcome {
                message: "Click on city markers on the map to explore traditional cuisine!"
            })
        );
    }

    #[test]
    fn earlier_release_does_not_cut_a_newer_emphasis_short() {
        let mut app = loaded_app();
        app.select_result("jeonju", "bibimbap");
        let (_, emphasize) = app.scheduler_mut().tasks.remove(0);
        app.run_deferred(emphasize);
        let (_, first_release) = app.scheduler_mut().tasks.remove(0);

        app.select_result("jeonju", "bibimbap");
        let (_, emphasize) = app.scheduler_mut().tasks.remove(0);
        app.run_deferred(emphasize);
        let (_, second_release) = app.scheduler_mut().tasks.remove(0);

        app.run_deferred(first_release);
        assert!(app.view().emphasized.contains("bibimbap"));

        app.run_deferred(second_release);
        assert!(app.view().emphasized.is_empty());
    }

    #[test]
    fn focus_reopens_results_only_when_a_query_is_active() {
        let mut app = loaded_app();
        app.handle(UiEvent::SearchFocused);
        assert!(!app.view().results_visible);

        app.handle(UiEvent::SearchInput("면".to_string()));
        app.handle(UiEvent::OutsideClick);
        assert!(!app.view().results_visible);

        app.handle(UiEvent::SearchFocused);
        assert!(app.view().results_visible);
    }

    #[test]
    fn data_arriving_after_click_is_used_on_next_visit() {
        let mut app = app();
        app.show_city("busan");
        assert!(matches!(
            app.view().panel,
            Some(PanelContent::Unavailable { .. })
        ));

        app.on_city_loaded("busan", Ok(foods(vec![dish("milmyeon", "밀면", "Milmyeon")])));
        app.show_city("busan");
        assert_eq!(app.view().panel.as_ref().unwrap().dish_ids(), vec!["milmyeon"]);
    }
}
