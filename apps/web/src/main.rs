mod dom;
mod events;
mod fetch;
mod leaflet;
mod logging;
mod timers;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use food_map_core::loader::load_all;
use food_map_core::{App, Language, MapConfig, UiEvent, CITIES};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement, Node};

use dom::DomView;
use events::{closest_target, listen, EventSink, Message};
use fetch::FetchDataSource;
use leaflet::LeafletMap;
use timers::TimeoutScheduler;

type FoodMap = App<LeafletMap, DomView, TimeoutScheduler>;

const MAP_CONTAINER_ID: &str = "map";

fn main() {
    logging::init_logging();
    if let Err(err) = start() {
        web_sys::console::error_1(&err);
    }
}

fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = MapConfig::default();
    let sink = EventSink::default();

    let app = FoodMap::new(
        config.clone(),
        LeafletMap::new(MAP_CONTAINER_ID, sink.clone()),
        DomView::new(document.clone())?,
        TimeoutScheduler::new(sink.clone()),
    );
    let app = Rc::new(RefCell::new(app));
    sink.connect(dispatcher(Rc::downgrade(&app)));

    wire_dom(&document, &sink)?;

    let loads = sink.clone();
    spawn_local(async move {
        let source = FetchDataSource::new(config);
        load_all(&source, &CITIES, |city, result| {
            loads.send(Message::Loaded(city.key, result));
        })
        .await;
        tracing::info!("all city loads settled");
    });

    Ok(())
}

fn dispatcher(app: Weak<RefCell<FoodMap>>) -> impl Fn(Message) {
    move |message| {
        let Some(app) = app.upgrade() else {
            return;
        };
        let Ok(mut app) = app.try_borrow_mut() else {
            tracing::warn!(?message, "app busy, message dropped");
            return;
        };
        match message {
            Message::Ui(event) => app.handle(event),
            Message::Deferred(task) => app.run_deferred(task),
            Message::Loaded(city, result) => app.on_city_loaded(city, result),
        }
    }
}

fn wire_dom(document: &Document, sink: &EventSink) -> Result<(), JsValue> {
    for button in dom::query_all(document, dom::LANGUAGE_BUTTON) {
        let Some(lang) = button
            .get_attribute("data-lang")
            .as_deref()
            .and_then(Language::parse)
        else {
            tracing::warn!("language button without a usable data-lang");
            continue;
        };
        let sink = sink.clone();
        listen(&button, "click", move |_| {
            sink.ui(UiEvent::LanguageSelected(lang));
        })?;
    }

    let input: HtmlInputElement = dom::by_id(document, dom::SEARCH_INPUT_ID)?;
    {
        let sink = sink.clone();
        let field = input.clone();
        listen(&input, "input", move |_| {
            sink.ui(UiEvent::SearchInput(field.value()));
        })?;
    }
    {
        let sink = sink.clone();
        listen(&input, "focus", move |_| sink.ui(UiEvent::SearchFocused))?;
    }

    if let Some(container) = document.query_selector(dom::SEARCH_CONTAINER)? {
        let sink = sink.clone();
        listen(document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| container.contains(Some(&node)));
            if !inside {
                sink.ui(UiEvent::OutsideClick);
            }
        })?;
    }

    let close: web_sys::Element = dom::by_id(document, dom::CLOSE_PANEL_ID)?;
    {
        let sink = sink.clone();
        listen(&close, "click", move |_| sink.ui(UiEvent::ClosePanel))?;
    }

    let panel: web_sys::Element = dom::by_id(document, dom::PANEL_CONTENT_ID)?;
    {
        let sink = sink.clone();
        listen(&panel, "click", move |event| {
            if let Some(back) = closest_target(&event, ".back-btn") {
                if let Some(city) = back.get_attribute("data-city") {
                    sink.ui(UiEvent::BackClicked(city));
                }
                return;
            }
            if let Some(item) = closest_target(&event, "[data-food-id]") {
                if let (Some(city), Some(dish)) =
                    (item.get_attribute("data-city"), item.get_attribute("data-food-id"))
                {
                    sink.ui(UiEvent::DishClicked { city, dish });
                }
            }
        })?;
    }

    let results: web_sys::Element = dom::by_id(document, dom::RESULTS_ID)?;
    let sink = sink.clone();
    listen(&results, "click", move |event| {
        if let Some(item) = closest_target(&event, "[data-dish]") {
            if let (Some(city), Some(dish)) =
                (item.get_attribute("data-city"), item.get_attribute("data-dish"))
            {
                sink.ui(UiEvent::ResultSelected { city, dish });
            }
        }
    })?;

    Ok(())
}
