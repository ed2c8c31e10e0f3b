use crate::embed::array::{self, ByteArrayEmbedder};
use crate::embed::print::{self, RawPrintEmbedder};
use crate::error::{ArduError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "ardu.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub board: BoardConfig,
    pub favicon: ArrayJob,
    pub html: PrintJob,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Toolchain executable, looked up on PATH unless it contains a separator.
    pub program: String,
    pub fqbn: String,
    /// Sketch directory handed to compile/upload.
    pub target: String,
    pub baudrate: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            program: "arduino-cli".into(),
            fqbn: "arduino:renesas_uno:unor4wifi".into(),
            target: "UnoR4WiFi_DHT22".into(),
            baudrate: 115200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub symbol: String,
    pub chunk_width: NonZeroUsize,
}

impl Default for ArrayJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from("webpage/favicon.ico"),
            output: PathBuf::from("UnoR4WiFi_DHT22/favicon.h"),
            symbol: array::DEFAULT_SYMBOL.into(),
            chunk_width: array::DEFAULT_WIDTH,
        }
    }
}

impl ArrayJob {
    pub fn embedder(&self) -> ByteArrayEmbedder {
        ByteArrayEmbedder::new(self.symbol.clone(), self.chunk_width)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub symbol: String,
    pub chunk_width: NonZeroUsize,
    pub delimiter: String,
}

impl Default for PrintJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from("webpage/dist/index.html"),
            output: PathBuf::from("UnoR4WiFi_DHT22/write_html.h"),
            symbol: print::DEFAULT_SYMBOL.into(),
            chunk_width: print::DEFAULT_WIDTH,
            delimiter: print::DEFAULT_DELIMITER.into(),
        }
    }
}

impl PrintJob {
    pub fn embedder(&self) -> RawPrintEmbedder {
        RawPrintEmbedder::new(self.symbol.clone(), self.chunk_width, self.delimiter.clone())
    }
}

impl ProjectConfig {
    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config_err = |message: String| ArduError::Config {
            path: path.to_path_buf(),
            message,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        Self::from_json(&text).map_err(|e| config_err(e.to_string()))
    }
}

/// A config together with the directory its relative paths hang off.
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: ProjectConfig,
    pub base_dir: PathBuf,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// `explicit` must exist; otherwise `ardu.json` in `cwd` is used if present, else defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let found = match explicit {
            Some(p) => Some(cwd.join(p)),
            None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };
        let loaded = match found {
            Some(path) => Self {
                config: ProjectConfig::load(&path)?,
                base_dir: path.parent().unwrap_or(cwd).to_path_buf(),
                source: Some(path),
            },
            None => Self {
                config: ProjectConfig::default(),
                base_dir: cwd.to_path_buf(),
                source: None,
            },
        };
        debug!(source = ?loaded.source, base = %loaded.base_dir.display(), "config resolved");
        Ok(loaded)
    }

    pub fn path(&self, p: &Path) -> PathBuf {
        self.base_dir.join(p)
    }

    /// `p` relative to the base directory with `/` separators, for generated-file comments.
    pub fn display_rel(&self, p: &Path) -> String {
        let rel = p.strip_prefix(&self.base_dir).unwrap_or(p);
        rel.components()
            .filter_map(|c| match c {
                Component::CurDir => None,
                Component::RootDir => Some(String::new()),
                other => Some(other.as_os_str().to_string_lossy().into_owned()),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
