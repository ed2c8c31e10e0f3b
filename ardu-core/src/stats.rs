use serde::{Deserialize, Serialize};

/// Summary of one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertStats {
    pub input_bytes: u64,
    pub chunks: u64,
    pub chunk_width: u64,
    pub output_bytes: u64,
}
