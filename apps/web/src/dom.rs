use food_map_core::view::{DetailSection, DishEntry};
use food_map_core::{
    BoundProperty, Language, PanelContent, ResultsContent, TranslationBinding, ViewTree,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
};

pub const SEARCH_INPUT_ID: &str = "food-search";
pub const RESULTS_ID: &str = "search-results";
pub const PANEL_CONTENT_ID: &str = "panel-content";
pub const CLOSE_PANEL_ID: &str = "close-panel";
pub const SEARCH_CONTAINER: &str = ".search-container";
pub const LANGUAGE_BUTTON: &str = ".lang-btn";

const EMPHASIS_BACKGROUND: &str = "#e3f2fd";

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has an unexpected element type")))
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The page the app renders into.
pub struct DomView {
    document: Document,
    panel_header: Element,
    panel_content: Element,
    results: HtmlElement,
    search_input: HtmlInputElement,
}

impl DomView {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let panel_header = document
            .query_selector(".panel-header h3")?
            .ok_or_else(|| JsValue::from_str("missing .panel-header h3"))?;
        Ok(Self {
            panel_content: by_id(&document, PANEL_CONTENT_ID)?,
            results: by_id(&document, RESULTS_ID)?,
            search_input: by_id(&document, SEARCH_INPUT_ID)?,
            panel_header,
            document,
        })
    }

    fn element(&self, tag: &str, class: Option<&str>, text: Option<&str>) -> Option<Element> {
        let element = self.document.create_element(tag).ok()?;
        if let Some(class) = class {
            element.set_class_name(class);
        }
        if let Some(text) = text {
            element.set_text_content(Some(text));
        }
        Some(element)
    }

    fn append(parent: &Element, child: Option<Element>) {
        let Some(child) = child else {
            tracing::warn!("failed to create element");
            return;
        };
        if let Err(err) = parent.append_child(&child) {
            tracing::warn!(?err, "failed to append element");
        }
    }

    fn dish_item(&self, city: &str, dish: &DishEntry) -> Option<Element> {
        let item = self.element("div", Some("food-item"), None)?;
        item.set_attribute("data-food-id", &dish.id).ok()?;
        item.set_attribute("data-city", city).ok()?;
        Self::append(&item, self.element("h4", None, Some(&dish.name)));
        Self::append(&item, self.element("p", None, Some(&dish.summary)));
        Some(item)
    }

    fn detail_section(&self, section: &DetailSection) -> Option<Element> {
        let block = self.element("div", Some("detail-section"), None)?;
        Self::append(&block, self.element("h4", None, Some(section.heading)));
        Self::append(&block, self.element("p", None, Some(&section.body)));
        Some(block)
    }

    fn build_panel(&self, content: &PanelContent) -> Option<Element> {
        match content {
            PanelContent::Welcome { message } => self.element("p", None, Some(message)),
            PanelContent::CityList { city, dishes } => {
                let list = self.element("div", Some("city-foods"), None)?;
                for dish in dishes {
                    Self::append(&list, self.dish_item(city, dish));
                }
                Some(list)
            }
            PanelContent::Unavailable {
                loading,
                check_source,
                source_path,
                ..
            } => {
                let notice = self.element("div", Some("city-foods"), None)?;
                Self::append(&notice, self.element("p", None, Some(loading)));
                let hint = format!("{check_source} {source_path}");
                Self::append(&notice, self.element("p", None, Some(&hint)));
                Some(notice)
            }
            PanelContent::Detail {
                city,
                back_label,
                name,
                sections,
                ..
            } => {
                let detail = self.element("div", Some("food-detail"), None)?;
                let back = self.element("button", Some("back-btn"), Some(back_label))?;
                back.set_attribute("data-city", city).ok()?;
                Self::append(&detail, Some(back));
                Self::append(&detail, self.element("h3", None, Some(name)));
                for section in sections {
                    Self::append(&detail, self.detail_section(section));
                }
                Some(detail)
            }
        }
    }

    fn rendered_dish(&self, dish_id: &str) -> Option<HtmlElement> {
        let items = self.panel_content.query_selector_all("[data-food-id]").ok()?;
        (0..items.length())
            .filter_map(|index| items.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .find(|item| item.get_attribute("data-food-id").as_deref() == Some(dish_id))
    }
}

impl ViewTree for DomView {
    type Element = Element;

    fn translation_bindings(&mut self) -> Vec<TranslationBinding<Element>> {
        let tagged = [
            ("data-i18n", BoundProperty::Text),
            ("data-i18n-placeholder", BoundProperty::Placeholder),
            ("data-i18n-title", BoundProperty::Title),
        ];

        tagged
            .into_iter()
            .flat_map(|(attribute, property)| {
                query_all(&self.document, &format!("[{attribute}]"))
                    .into_iter()
                    .filter_map(move |element| {
                        let key = element.get_attribute(attribute)?;
                        Some(TranslationBinding {
                            element,
                            key,
                            property,
                        })
                    })
            })
            .collect()
    }

    fn set_bound_text(&mut self, element: &Element, property: BoundProperty, text: &str) {
        let result = match property {
            BoundProperty::Text => {
                element.set_text_content(Some(text));
                Ok(())
            }
            BoundProperty::Placeholder => element.set_attribute("placeholder", text),
            BoundProperty::Title => element.set_attribute("title", text),
        };
        if let Err(err) = result {
            tracing::warn!(?err, ?property, "failed to apply translation");
        }
    }

    fn set_document_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_active_language(&mut self, lang: Language) {
        for button in query_all(&self.document, LANGUAGE_BUTTON) {
            let active = button.get_attribute("data-lang").as_deref() == Some(lang.as_str());
            if let Err(err) = button.class_list().toggle_with_force("active", active) {
                tracing::warn!(?err, "failed to mark language button");
            }
        }
    }

    fn set_panel_header(&mut self, text: &str) {
        self.panel_header.set_text_content(Some(text));
    }

    fn render_panel(&mut self, content: &PanelContent) {
        self.panel_content.set_text_content(None);
        let built = self.build_panel(content);
        Self::append(&self.panel_content, built);
    }

    fn show_results(&mut self, content: &ResultsContent) {
        self.results.set_text_content(None);
        match content {
            ResultsContent::Empty { message } => {
                let item = self.element("div", Some("search-result-item"), Some(message));
                Self::append(&self.results, item);
            }
            ResultsContent::Hits(hits) => {
                for hit in hits {
                    let Some(item) = self.element("div", Some("search-result-item"), None) else {
                        continue;
                    };
                    let tagged = item
                        .set_attribute("data-city", hit.city)
                        .and_then(|()| item.set_attribute("data-dish", &hit.dish_id));
                    if let Err(err) = tagged {
                        tracing::warn!(?err, "failed to tag search result");
                        continue;
                    }
                    Self::append(&item, self.element("strong", None, Some(&hit.dish_name)));
                    let city = self
                        .document
                        .create_text_node(&format!(" - {}", hit.city_name));
                    if let Err(err) = item.append_child(&city) {
                        tracing::warn!(?err, "failed to append city name");
                    }
                    Self::append(&self.results, Some(item));
                }
            }
        }
    }

    fn set_results_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.results.style().set_property("display", display) {
            tracing::warn!(?err, "failed to toggle search results");
        }
    }

    fn clear_search_input(&mut self) {
        self.search_input.set_value("");
    }

    fn emphasize_dish(&mut self, dish_id: &str, emphasized: bool) -> bool {
        let Some(item) = self.rendered_dish(dish_id) else {
            return false;
        };

        let style = item.style();
        let result = if emphasized {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            item.scroll_into_view_with_scroll_into_view_options(&options);
            style.set_property("background", EMPHASIS_BACKGROUND)
        } else {
            style.remove_property("background").map(|_| ())
        };
        if let Err(err) = result {
            tracing::warn!(?err, dish = dish_id, "failed to style dish entry");
        }
        true
    }
}
