use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable the webui reads its startup flags from.
pub const COMMANDLINE_ARGS_VAR: &str = "COMMANDLINE_ARGS";

/// Startup flags handed to the webui through the environment.
pub const DEFAULT_COMMANDLINE_ARGS: &str =
    "--listen --port 8888 --enable-insecure-extension-access --xformers";

/// Webui checkout location on a SageMaker notebook instance.
pub const DEFAULT_WEBUI_DIR: &str = "/home/ec2-user/SageMaker/stable-diffusion-webui";

/// Entry point script inside the webui directory.
pub const WEBUI_ENTRY_POINT: &str = "launch.py";

/// Interpreter name resolved on PATH when no explicit path is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Describes one webui launch: where to run, what to run, and the flags
/// passed down through the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchConfig {
    pub commandline_args: String,
    pub webui_dir: PathBuf,
    pub entry_point: String,
    /// Explicit interpreter path; resolved from PATH when `None`.
    pub interpreter: Option<PathBuf>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            commandline_args: DEFAULT_COMMANDLINE_ARGS.to_string(),
            webui_dir: PathBuf::from(DEFAULT_WEBUI_DIR),
            entry_point: WEBUI_ENTRY_POINT.to_string(),
            interpreter: None,
        }
    }
}

impl LaunchConfig {
    pub fn with_webui_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.webui_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_interpreter<P: AsRef<Path>>(mut self, interpreter: P) -> Self {
        self.interpreter = Some(interpreter.as_ref().to_path_buf());
        self
    }

    pub fn with_commandline_args<S: Into<String>>(mut self, args: S) -> Self {
        self.commandline_args = args.into();
        self
    }

    pub fn with_entry_point<S: Into<String>>(mut self, entry_point: S) -> Self {
        self.entry_point = entry_point.into();
        self
    }
}

/// Terminal state of a single webui launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Failed,
}

/// Result of one launch attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub status: LaunchStatus,
    /// Raw exit code of the child, when the platform reports one.
    pub exit_code: Option<i32>,
}

impl LaunchOutcome {
    /// Exit code this process should terminate with.
    pub fn process_exit_code(&self) -> i32 {
        match self.status {
            LaunchStatus::Success => 0,
            LaunchStatus::Failed => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_sagemaker_checkout() {
        let config = LaunchConfig::default();
        assert_eq!(
            config.commandline_args,
            "--listen --port 8888 --enable-insecure-extension-access --xformers"
        );
        assert_eq!(
            config.webui_dir,
            PathBuf::from("/home/ec2-user/SageMaker/stable-diffusion-webui")
        );
        assert_eq!(config.entry_point, "launch.py");
        assert!(config.interpreter.is_none());
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = LaunchConfig::default()
            .with_webui_dir("/tmp/webui")
            .with_interpreter("/usr/bin/python3.11")
            .with_commandline_args("--port 9999");
        assert_eq!(config.webui_dir, PathBuf::from("/tmp/webui"));
        assert_eq!(
            config.interpreter,
            Some(PathBuf::from("/usr/bin/python3.11"))
        );
        assert_eq!(config.commandline_args, "--port 9999");
        assert_eq!(config.entry_point, "launch.py");
    }

    #[test]
    fn test_outcome_exit_code_mapping() {
        let ok = LaunchOutcome {
            status: LaunchStatus::Success,
            exit_code: Some(0),
        };
        assert_eq!(ok.process_exit_code(), 0);

        let failed = LaunchOutcome {
            status: LaunchStatus::Failed,
            exit_code: Some(7),
        };
        assert_eq!(failed.process_exit_code(), 1);

        let killed = LaunchOutcome {
            status: LaunchStatus::Failed,
            exit_code: None,
        };
        assert_eq!(killed.process_exit_code(), 1);
    }
}
