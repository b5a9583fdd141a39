use crate::locale::Language;
use crate::search::SearchHit;

/// Which property of an element a translation binding writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundProperty {
    Text,
    Placeholder,
    Title,
}

/// One statically registered translatable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBinding<E> {
    pub element: E,
    pub key: String,
    pub property: BoundProperty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishEntry {
    pub id: String,
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub body: String,
}

/// What the panel's content region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Welcome {
        message: &'static str,
    },
    CityList {
        city: &'static str,
        dishes: Vec<DishEntry>,
    },
    /// The city's data has not arrived (or never will).
    Unavailable {
        city: &'static str,
        loading: &'static str,
        check_source: &'static str,
        source_path: String,
    },
    Detail {
        city: &'static str,
        dish_id: String,
        back_label: &'static str,
        name: String,
        sections: [DetailSection; 3],
    },
}

impl PanelContent {
    /// Dish ids listed by a city list, in display order.
    pub fn dish_ids(&self) -> Vec<&str> {
        match self {
            Self::CityList { dishes, .. } => dishes.iter().map(|dish| dish.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsContent {
    Hits(Vec<SearchHit>),
    Empty { message: &'static str },
}

/// The document the app renders into. Implementations own the panel and
/// results containers and replace their content on every render.
pub trait ViewTree {
    type Element;

    /// Elements tagged for translation. Called once during setup.
    fn translation_bindings(&mut self) -> Vec<TranslationBinding<Self::Element>>;
    fn set_bound_text(&mut self, element: &Self::Element, property: BoundProperty, text: &str);
    fn set_document_title(&mut self, title: &str);
    /// Moves the active indicator on the language selector controls.
    fn set_active_language(&mut self, lang: Language);
    fn set_panel_header(&mut self, text: &str);
    fn render_panel(&mut self, content: &PanelContent);
    fn show_results(&mut self, content: &ResultsContent);
    fn set_results_visible(&mut self, visible: bool);
    fn clear_search_input(&mut self);
    /// Scrolls to and emphasizes (or releases) a rendered dish entry.
    /// Returns `false` when no entry for `dish_id` is rendered.
    fn emphasize_dish(&mut self, dish_id: &str, emphasized: bool) -> bool;
}
