use clap::Parser;
use color_eyre::Result;
use food_map_tui::cli::CliArgs;
use food_map_tui::config::init_app_config;
use food_map_tui::logging::init_logging;
use food_map_tui::{event, terminal, App, FsDataSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let _log_guard = init_logging(&config.log_dir, config.debug)?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting food map");

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&config, args.json).await;
    }

    let source = FsDataSource::new(config.data_dir.clone());
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    event::spawn_loads(&source, &tx);
    drop(tx);

    let mut app = App::new(config.map);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, rx).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
