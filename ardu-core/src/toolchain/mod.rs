// ardu_core/src/toolchain/mod.rs
use crate::board::DetectedBoard;
use crate::error::Result;
use std::path::PathBuf;

pub mod interrupt;

#[derive(Clone, Debug)]
pub struct ToolchainParams {
    pub program: String,
    pub workdir: PathBuf,
}

/// The external board toolchain, reduced to the four operations the driver uses.
pub trait Toolchain {
    fn board_list(&self, fqbn: &str) -> Result<Vec<DetectedBoard>>;

    fn compile(&self, fqbn: &str, target: &str) -> Result<()>;

    fn upload(&self, port: &str, fqbn: &str, target: &str) -> Result<()>;

    /// Interactive; returns once the session ends, however it ended.
    fn monitor(&self, port: &str, baudrate: u32) -> Result<()>;
}

pub mod arduino_cli;
