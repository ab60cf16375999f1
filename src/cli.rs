//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_check_result, format_config_json, format_config_text, format_config_toml,
    format_paths_text, format_urls_json, format_urls_text,
};
pub use route::RunContext;
