use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "food_map_tui", version, about = "Korean traditional food map")]
pub struct CliArgs {
    /// Print a per-city load summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the city data directory
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Start in this language (ko or en)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Override the log directory
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_dir: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.data_dir {
            std::env::set_var("FOOD_MAP_DATA_DIR", dir);
        }
        if let Some(lang) = &self.lang {
            std::env::set_var("FOOD_MAP_LANG", lang);
        }
        if let Some(dir) = &self.log_dir {
            std::env::set_var("FOOD_MAP_LOG_DIR", dir);
        }
        if self.debug {
            std::env::set_var("FOOD_MAP_DEBUG", "1");
        }
    }
}
