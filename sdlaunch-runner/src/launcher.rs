use sdlaunch_core::{
    LaunchConfig, LaunchError, LaunchOutcome, LaunchStatus, Result, COMMANDLINE_ARGS_VAR,
};
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::{error, info};

use crate::process::resolve_interpreter;

/// Launches the Stable Diffusion webui and waits for it to exit.
///
/// The launch sequence mutates process-wide state: `COMMANDLINE_ARGS`
/// is set and the working directory becomes the webui checkout before
/// the child is spawned. Neither mutation is undone afterwards.
#[derive(Debug, Clone)]
pub struct WebuiLauncher {
    config: LaunchConfig,
}

impl WebuiLauncher {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig::default(),
        }
    }

    pub fn with_config(config: LaunchConfig) -> Self {
        Self { config }
    }

    pub fn with_webui_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config = self.config.with_webui_dir(dir);
        self
    }

    pub fn with_interpreter<P: AsRef<Path>>(mut self, interpreter: P) -> Self {
        self.config = self.config.with_interpreter(interpreter);
        self
    }

    pub fn with_commandline_args<S: Into<String>>(mut self, args: S) -> Self {
        self.config = self.config.with_commandline_args(args);
        self
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Run the webui to completion.
    ///
    /// Only a non-zero exit of the child is recovered, as a `Failed`
    /// outcome with a printed diagnostic. A missing webui directory, a
    /// failed interpreter lookup, and a failed spawn are all fatal and
    /// surface as `Err` before or instead of the child running.
    pub fn run(&self) -> Result<LaunchOutcome> {
        // The child reads its startup flags from the environment, so the
        // variable must be in place before the spawn.
        env::set_var(COMMANDLINE_ARGS_VAR, &self.config.commandline_args);

        env::set_current_dir(&self.config.webui_dir).map_err(|e| {
            LaunchError::WorkDirError(format!("{}: {}", self.config.webui_dir.display(), e))
        })?;

        let interpreter = resolve_interpreter(self.config.interpreter.as_deref())?;

        info!(
            interpreter = %interpreter.display(),
            webui_dir = %self.config.webui_dir.display(),
            entry_point = %self.config.entry_point,
            "Launching webui"
        );

        let status = Command::new(&interpreter)
            .arg(&self.config.entry_point)
            .status()?;

        if status.success() {
            info!("Webui exited cleanly");
            Ok(LaunchOutcome {
                status: LaunchStatus::Success,
                exit_code: status.code(),
            })
        } else {
            eprintln!("Error launching WebUI: {}", status);
            error!(exit_code = ?status.code(), "Webui exited with failure");
            Ok(LaunchOutcome {
                status: LaunchStatus::Failed,
                exit_code: status.code(),
            })
        }
    }
}

impl Default for WebuiLauncher {
    fn default() -> Self {
        Self::new()
    }
}
