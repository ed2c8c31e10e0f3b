use crate::board::Discovery;
use crate::config::BoardConfig;
use crate::error::{ArduError, Result};
use crate::toolchain::Toolchain;
use std::io::Write;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Build,
    Upload,
    Monitor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Built,
    Uploaded { port: String },
    UploadSkipped { candidates: usize },
    Monitored { port: String },
    MonitorSkipped { candidates: usize },
}

/// Runs one verb against a toolchain, writing operator notices to `out`.
pub struct Driver<'a> {
    toolchain: &'a dyn Toolchain,
    board: &'a BoardConfig,
}

impl<'a> Driver<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, board: &'a BoardConfig) -> Self {
        Self { toolchain, board }
    }

    pub fn discover(&self) -> Result<Discovery> {
        let boards = self.toolchain.board_list(&self.board.fqbn)?;
        let d = Discovery::from_boards(&boards);
        debug!(candidates = d.candidates(), "board discovery");
        Ok(d)
    }

    pub fn run(&self, verb: Verb, out: &mut dyn Write) -> Result<Outcome> {
        let discovery = self.discover()?;
        let b = self.board;

        if verb == Verb::Monitor {
            return match discovery {
                Discovery::One(port) => {
                    self.toolchain.monitor(&port, b.baudrate)?;
                    Ok(Outcome::Monitored { port })
                }
                Discovery::None => Err(ArduError::NoDeviceFound),
                Discovery::Many(ports) => {
                    writeln!(
                        out,
                        "Not monitoring because I found {} boards: {}",
                        ports.len(),
                        ports.join(", ")
                    )?;
                    Ok(Outcome::MonitorSkipped {
                        candidates: ports.len(),
                    })
                }
            };
        }

        writeln!(out, "Compiling {} for {}", b.target, b.fqbn)?;
        out.flush()?;
        self.toolchain.compile(&b.fqbn, &b.target)?;
        if verb == Verb::Build {
            return Ok(Outcome::Built);
        }

        match discovery {
            Discovery::One(port) => {
                writeln!(out, "Found one board at {port}, uploading")?;
                out.flush()?;
                self.toolchain.upload(&port, &b.fqbn, &b.target)?;
                self.toolchain.monitor(&port, b.baudrate)?;
                Ok(Outcome::Uploaded { port })
            }
            other => {
                writeln!(out, "Not uploading because I didn't find exactly one board")?;
                Ok(Outcome::UploadSkipped {
                    candidates: other.candidates(),
                })
            }
        }
    }
}
