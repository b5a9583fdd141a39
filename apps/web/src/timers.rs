use crate::events::{EventSink, Message};
use food_map_core::{DeferredTask, Scheduler};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `window.setTimeout` scheduler. Fired tasks go back through the sink.
pub struct TimeoutScheduler {
    sink: EventSink,
}

impl TimeoutScheduler {
    pub const fn new(sink: EventSink) -> Self {
        Self { sink }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let sink = self.sink.clone();
        let callback = Closure::once_into_js(move || sink.send(Message::Deferred(task)));
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis,
        ) {
            tracing::warn!(?err, "setTimeout failed, deferred task dropped");
        }
    }
}
