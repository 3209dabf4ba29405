pub mod error;
pub mod models;

pub use error::{LaunchError, Result};
pub use models::{
    LaunchConfig, LaunchOutcome, LaunchStatus, COMMANDLINE_ARGS_VAR, DEFAULT_COMMANDLINE_ARGS,
    DEFAULT_INTERPRETER, DEFAULT_WEBUI_DIR, WEBUI_ENTRY_POINT,
};
