use food_map_core::{
    BoundProperty, Language, PanelContent, ResultsContent, TranslationBinding, ViewTree,
};
use std::collections::HashMap;

/// Translatable places in the terminal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    TitleBar,
    AboutTab,
    SearchBox,
    MapBlock,
}

/// Bindings registered once at startup, the way markup tags its elements.
const BINDINGS: [(Slot, &str, BoundProperty); 5] = [
    (Slot::TitleBar, "main_title", BoundProperty::Text),
    (Slot::AboutTab, "about", BoundProperty::Text),
    (Slot::AboutTab, "about", BoundProperty::Title),
    (Slot::SearchBox, "search_placeholder", BoundProperty::Placeholder),
    (Slot::MapBlock, "title", BoundProperty::Title),
];

/// Retained state of everything the terminal draws besides the map.
#[derive(Debug)]
pub struct TerminalView {
    texts: HashMap<(Slot, BoundProperty), String>,
    pub document_title: String,
    pub active_language: Language,
    pub header: String,
    pub panel: PanelContent,
    pub dish_cursor: usize,
    pub results: Option<ResultsContent>,
    pub results_visible: bool,
    pub result_cursor: usize,
    pub search_input: String,
    pub emphasized: Option<String>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            texts: HashMap::new(),
            document_title: String::new(),
            active_language: Language::default(),
            header: String::new(),
            panel: PanelContent::Welcome { message: "" },
            dish_cursor: 0,
            results: None,
            results_visible: false,
            result_cursor: 0,
            search_input: String::new(),
            emphasized: None,
        }
    }
}

impl TerminalView {
    pub fn text(&self, slot: Slot, property: BoundProperty) -> &str {
        self.texts
            .get(&(slot, property))
            .map_or("", String::as_str)
    }

    /// Number of entries the cursor can move over in the panel.
    pub fn dish_count(&self) -> usize {
        match &self.panel {
            PanelContent::CityList { dishes, .. } => dishes.len(),
            _ => 0,
        }
    }

    pub fn result_count(&self) -> usize {
        match &self.results {
            Some(ResultsContent::Hits(hits)) => hits.len(),
            _ => 0,
        }
    }
}

impl ViewTree for TerminalView {
    type Element = Slot;

    fn translation_bindings(&mut self) -> Vec<TranslationBinding<Slot>> {
        BINDINGS
            .iter()
            .map(|(slot, key, property)| TranslationBinding {
                element: *slot,
                key: (*key).to_string(),
                property: *property,
            })
            .collect()
    }

    fn set_bound_text(&mut self, element: &Slot, property: BoundProperty, text: &str) {
        self.texts.insert((*element, property), text.to_string());
    }

    fn set_document_title(&mut self, title: &str) {
        self.document_title = title.to_string();
    }

    fn set_active_language(&mut self, lang: Language) {
        self.active_language = lang;
    }

    fn set_panel_header(&mut self, text: &str) {
        self.header = text.to_string();
    }

    fn render_panel(&mut self, content: &PanelContent) {
        self.panel = content.clone();
        self.dish_cursor = 0;
        self.emphasized = None;
    }

    fn show_results(&mut self, content: &ResultsContent) {
        self.results = Some(content.clone());
        self.result_cursor = 0;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn clear_search_input(&mut self) {
        self.search_input.clear();
    }

    fn emphasize_dish(&mut self, dish_id: &str, emphasized: bool) -> bool {
        let Some(index) = self.panel.dish_ids().iter().position(|id| *id == dish_id) else {
            return false;
        };

        if emphasized {
            self.dish_cursor = index;
            self.emphasized = Some(dish_id.to_string());
        } else if self.emphasized.as_deref() == Some(dish_id) {
            self.emphasized = None;
        }
        true
    }
}
