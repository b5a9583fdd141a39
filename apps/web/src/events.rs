use food_map_core::{CityFoods, DeferredTask, LoadError, UiEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

/// Everything that can reach the app from outside: DOM and map events,
/// fired timers and settled loads.
#[derive(Debug)]
pub enum Message {
    Ui(UiEvent),
    Deferred(DeferredTask),
    Loaded(&'static str, Result<CityFoods, LoadError>),
}

type Handler = Rc<dyn Fn(Message)>;

/// Late-bound route into the app. The map and the scheduler are built
/// before the app exists, so they hold a sink and the app is connected
/// once constructed.
#[derive(Clone, Default)]
pub struct EventSink {
    handler: Rc<RefCell<Option<Handler>>>,
}

impl EventSink {
    pub fn connect(&self, handler: impl Fn(Message) + 'static) {
        *self.handler.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn send(&self, message: Message) {
        let handler = self.handler.borrow().clone();
        match handler {
            Some(handler) => handler(message),
            None => tracing::warn!(?message, "dropped message sent before startup finished"),
        }
    }

    pub fn ui(&self, event: UiEvent) {
        self.send(Message::Ui(event));
    }
}

/// Registers `listener` for `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    listener: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(listener);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// The element matching `selector` that the event started in, if any.
pub fn closest_target(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}
