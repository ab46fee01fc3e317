//! Engine module: CLI parsing, option setup and command handlers

pub mod arg_parser;
pub mod cli;
pub mod handlers;
pub mod progress;

pub use arg_parser::{Cli, Commands, FetchArgs, WallpaperArgs};
pub use cli::handle_run;
pub use handlers::{handle_fetch, handle_wallpapers};
