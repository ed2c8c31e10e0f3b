use crate::config::BoardConfig;
use crate::toolchain::arduino_cli::ArduinoCli;
use crate::toolchain::{Toolchain, ToolchainParams};
use std::path::Path;

pub enum Backend {
    ArduinoCli,
}

pub fn open_toolchain(backend: Backend, p: ToolchainParams) -> Box<dyn Toolchain> {
    match backend {
        Backend::ArduinoCli => Box::new(ArduinoCli::new(p)),
    }
}

pub fn params_for(board: &BoardConfig, workdir: &Path) -> ToolchainParams {
    ToolchainParams {
        program: board.program.clone(),
        workdir: workdir.to_path_buf(),
    }
}
