use food_map_core::loader::parse_city_foods;
use food_map_core::{City, CityFoods, DataSource, LoadError, MapConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Loads `<base>/<city>.json` with `fetch`, relative to the page.
pub struct FetchDataSource {
    config: MapConfig,
}

impl FetchDataSource {
    pub const fn new(config: MapConfig) -> Self {
        Self { config }
    }
}

fn transport(context: &str, err: &wasm_bindgen::JsValue) -> LoadError {
    LoadError::Transport(format!("{context}: {err:?}"))
}

impl DataSource for FetchDataSource {
    async fn fetch_city(&self, city: &'static City) -> Result<CityFoods, LoadError> {
        let window =
            web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;
        let url = self.config.data_path(city.key);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|err| transport("invalid request", &err))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| transport("fetch failed", &err))?;

        let response = response_value
            .dyn_into::<Response>()
            .map_err(|err| transport("not a response", &err))?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response
            .text()
            .map_err(|err| transport("unreadable body", &err))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|err| transport("unreadable body", &err))?;
        let payload = text
            .as_string()
            .ok_or_else(|| LoadError::Transport(format!("{url}: body is not text")))?;

        parse_city_foods(&payload)
    }
}
