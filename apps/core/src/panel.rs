use crate::cities::City;
use crate::locale::{translate, Language, UiKey};
use crate::model::{CityFoods, Dish, LocalizedText};
use crate::view::{DetailSection, DishEntry, PanelContent, ViewTree};
use tracing::debug;

/// Which view the panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Welcome,
    CityList {
        city: &'static str,
    },
    Detail {
        city: &'static str,
        dish_id: String,
    },
}

pub fn welcome_content(lang: Language) -> PanelContent {
    PanelContent::Welcome {
        message: translate(lang, UiKey::WelcomeMessage),
    }
}

/// The dish list of a city, or the placeholder when its data is missing.
pub fn city_content(
    city: &'static City,
    foods: Option<&CityFoods>,
    lang: Language,
    source_path: &str,
) -> PanelContent {
    let Some(foods) = foods else {
        return PanelContent::Unavailable {
            city: city.key,
            loading: translate(lang, UiKey::LoadingCity),
            check_source: translate(lang, UiKey::CheckDataSource),
            source_path: source_path.to_string(),
        };
    };

    PanelContent::CityList {
        city: city.key,
        dishes: foods
            .foods
            .iter()
            .map(|dish| DishEntry {
                id: dish.id.clone(),
                name: dish.name.get(lang).to_string(),
                summary: dish.description.get(lang).to_string(),
            })
            .collect(),
    }
}

pub fn detail_content(city: &'static City, dish: &Dish, lang: Language) -> PanelContent {
    let section = |key, text: &LocalizedText| DetailSection {
        heading: translate(lang, key),
        body: text.get(lang).to_string(),
    };

    PanelContent::Detail {
        city: city.key,
        dish_id: dish.id.clone(),
        back_label: translate(lang, UiKey::Back),
        name: dish.name.get(lang).to_string(),
        sections: [
            section(UiKey::Origin, &dish.origin),
            section(UiKey::History, &dish.history),
            section(UiKey::Geography, &dish.geography),
        ],
    }
}

/// Renders panel views and remembers which one is showing.
#[derive(Debug, Default)]
pub struct PanelController {
    state: PanelState,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn show_welcome<V: ViewTree>(&mut self, view: &mut V, lang: Language) {
        debug!("panel -> welcome");
        view.set_panel_header(translate(lang, UiKey::SelectCity));
        view.render_panel(&welcome_content(lang));
        self.state = PanelState::Welcome;
    }

    pub fn show_city<V: ViewTree>(
        &mut self,
        view: &mut V,
        city: &'static City,
        foods: Option<&CityFoods>,
        lang: Language,
        source_path: &str,
    ) {
        debug!(city = city.key, loaded = foods.is_some(), "panel -> city list");
        view.set_panel_header(city.name(lang));
        view.render_panel(&city_content(city, foods, lang, source_path));
        self.state = PanelState::CityList { city: city.key };
    }

    pub fn show_detail<V: ViewTree>(
        &mut self,
        view: &mut V,
        city: &'static City,
        dish: &Dish,
        lang: Language,
    ) {
        debug!(city = city.key, dish = %dish.id, "panel -> detail");
        view.set_panel_header(city.name(lang));
        view.render_panel(&detail_content(city, dish, lang));
        self.state = PanelState::Detail {
            city: city.key,
            dish_id: dish.id.clone(),
        };
    }
}
