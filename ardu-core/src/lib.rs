#![forbid(unsafe_code)]

pub mod error;
pub mod config;

pub mod chunking;
pub mod domain;
pub mod stats;

pub mod embed;

pub mod convert;

pub mod board;
pub mod toolchain;
pub mod toolchain_factory;

pub mod driver;

// Re-exports: stable API surface
pub use config::{LoadedConfig, ProjectConfig};
pub use convert::convert;
pub use domain::{HeaderLabels, SourceFile};
pub use driver::{Driver, Outcome, Verb};
pub use embed::Embedder;
pub use embed::array::ByteArrayEmbedder;
pub use embed::print::RawPrintEmbedder;
pub use stats::ConvertStats;
