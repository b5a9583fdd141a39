use color_eyre::eyre::eyre;
use dotenv::dotenv;
use food_map_core::{Language, MapConfig};
use std::env;
use std::path::PathBuf;

/// Settings of the terminal front end.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub map: MapConfig,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub debug: bool,
}

/// Builds the configuration from `.env` and the environment. Flags are
/// applied beforehand through `CliArgs::apply_env_overrides`.
pub fn init_app_config() -> color_eyre::eyre::Result<TuiConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let data_dir = get_data_dir();
    let data_base_path = data_dir
        .to_str()
        .ok_or_else(|| eyre!("Invalid data directory: {}", data_dir.display()))?
        .to_string();

    let initial_language = match env::var("FOOD_MAP_LANG") {
        Ok(value) => Language::parse(&value)
            .ok_or_else(|| eyre!("Unsupported language '{value}', expected ko or en"))?,
        Err(_) => Language::default(),
    };

    let map = MapConfig {
        data_base_path,
        initial_language,
        ..MapConfig::default()
    };

    Ok(TuiConfig {
        map,
        data_dir,
        log_dir: get_log_dir(),
        debug: env::var("FOOD_MAP_DEBUG").is_ok_and(|value| value != "0"),
    })
}

/// Gets the directory holding `<city>.json` files
pub fn get_data_dir() -> PathBuf {
    env::var("FOOD_MAP_DATA_DIR").map_or_else(|_| PathBuf::from("./data"), PathBuf::from)
}

/// Gets the directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    env::var("FOOD_MAP_LOG_DIR").map_or_else(|_| PathBuf::from("."), PathBuf::from)
}
