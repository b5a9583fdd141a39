// Export our modules for use in binaries and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod frontend;
pub mod logging;
pub mod source;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use source::FsDataSource;
