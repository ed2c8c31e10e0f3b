// ardu_core/src/board.rs
use crate::error::{ArduError, Result};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Port {
    pub address: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BoardMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fqbn: Option<String>,
}

/// One entry of `board list --format json`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DetectedBoard {
    pub port: Port,
    #[serde(default)]
    pub matching_boards: Vec<BoardMatch>,
}

// Older toolchains print a bare array, newer ones wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoardListDoc {
    Flat(Vec<DetectedBoard>),
    Wrapped {
        #[serde(default)]
        detected_ports: Vec<DetectedBoard>,
    },
}

pub fn parse_board_list(json: &str) -> Result<Vec<DetectedBoard>> {
    let doc: BoardListDoc = serde_json::from_str(json)
        .map_err(|e| ArduError::Format(format!("board list decode: {e}")))?;
    Ok(match doc {
        BoardListDoc::Flat(v) => v,
        BoardListDoc::Wrapped { detected_ports } => detected_ports,
    })
}

/// What a board query found, reduced to the only distinction the driver cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Discovery {
    None,
    One(String),
    Many(Vec<String>),
}

impl Discovery {
    pub fn from_boards(boards: &[DetectedBoard]) -> Self {
        match boards {
            [] => Discovery::None,
            [only] => Discovery::One(only.port.address.clone()),
            many => Discovery::Many(many.iter().map(|b| b.port.address.clone()).collect()),
        }
    }

    pub fn port(&self) -> Option<&str> {
        match self {
            Discovery::One(p) => Some(p),
            _ => None,
        }
    }

    pub fn candidates(&self) -> usize {
        match self {
            Discovery::None => 0,
            Discovery::One(_) => 1,
            Discovery::Many(v) => v.len(),
        }
    }
}
