use std::process::{Command, ExitStatus};

use tracing::{debug, warn};

use super::{Toolchain, ToolchainParams};
use crate::board::{DetectedBoard, parse_board_list};
use crate::error::{ArduError, Result};

/// Drives the `arduino-cli` executable as a child process.
pub struct ArduinoCli {
    params: ToolchainParams,
}

impl ArduinoCli {
    pub fn new(params: ToolchainParams) -> Self {
        Self { params }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(program = %self.params.program, ?args, "running toolchain");
        let mut cmd = Command::new(&self.params.program);
        cmd.args(args).current_dir(&self.params.workdir);
        cmd
    }

    fn launch_error(&self, source: std::io::Error) -> ArduError {
        ArduError::ToolLaunch {
            program: self.params.program.clone(),
            source,
        }
    }

    fn run_checked(&self, step: &str, args: &[&str]) -> Result<()> {
        let status = self
            .command(args)
            .status()
            .map_err(|e| self.launch_error(e))?;
        check(step, status)
    }
}

fn check(step: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(ArduError::ToolFailure {
            step: step.to_string(),
            code: status.code(),
        })
    }
}

impl Toolchain for ArduinoCli {
    fn board_list(&self, fqbn: &str) -> Result<Vec<DetectedBoard>> {
        let out = self
            .command(&["board", "list", "--fqbn", fqbn, "--format", "json"])
            .output()
            .map_err(|e| self.launch_error(e))?;
        check("board list", out.status)?;
        if !out.stderr.is_empty() {
            warn!(
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "board list wrote to stderr"
            );
        }
        let stdout = String::from_utf8(out.stdout)
            .map_err(|e| ArduError::Format(format!("board list output: {e}")))?;
        parse_board_list(&stdout)
    }

    fn compile(&self, fqbn: &str, target: &str) -> Result<()> {
        self.run_checked("compile", &["compile", "--fqbn", fqbn, target])
    }

    fn upload(&self, port: &str, fqbn: &str, target: &str) -> Result<()> {
        self.run_checked("upload", &["upload", "-p", port, "--fqbn", fqbn, target])
    }

    fn monitor(&self, port: &str, baudrate: u32) -> Result<()> {
        let config = format!("baudrate={baudrate}");
        // Ctrl-C ends the session; its exit status is not an error.
        super::interrupt::leave_to_child()?;
        let status = self
            .command(&["monitor", "-p", port, "--config", &config])
            .status()
            .map_err(|e| self.launch_error(e))?;
        debug!(?status, "monitor session ended");
        Ok(())
    }
}
