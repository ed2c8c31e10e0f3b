use crate::domain::{HeaderLabels, SourceFile};
use crate::error::Result;
use std::io::Write;
use std::num::NonZeroUsize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmbedderId {
    ByteArray,
    RawPrint,
}

pub trait Embedder {
    fn id(&self) -> EmbedderId;
    fn chunk_width(&self) -> NonZeroUsize;
    /// Write the whole header for `src` and return the number of chunks emitted.
    ///
    /// Inputs the embedder cannot represent fail before the first byte reaches `dst`.
    fn render(&self, src: &SourceFile, labels: &HeaderLabels, dst: &mut dyn Write)
    -> Result<usize>;
}

/// `favicon` -> `FAVICON_H`
pub fn guard_symbol(symbol: &str) -> String {
    format!("{}_H", symbol.to_ascii_uppercase())
}

/// `favicon` -> `FAVICON_SIZE`
pub fn size_macro(symbol: &str) -> String {
    format!("{}_SIZE", symbol.to_ascii_uppercase())
}

pub(crate) fn write_preamble(
    dst: &mut dyn Write,
    labels: &HeaderLabels,
    symbol: &str,
    len: usize,
) -> Result<()> {
    let guard = guard_symbol(symbol);
    writeln!(
        dst,
        "// Generated from {} by {}, DO NOT EDIT",
        labels.source, labels.generator
    )?;
    writeln!(dst, "#ifndef {guard}")?;
    writeln!(dst, "#define {guard}")?;
    writeln!(dst, "#define {} ({len})", size_macro(symbol))?;
    Ok(())
}

pub(crate) fn write_trailer(dst: &mut dyn Write, symbol: &str) -> Result<()> {
    writeln!(dst, "#endif // #ifndef {}", guard_symbol(symbol))?;
    Ok(())
}

pub mod array;
pub mod hex;
pub mod print;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedders_report_their_id() {
        assert_eq!(array::ByteArrayEmbedder::default().id(), EmbedderId::ByteArray);
        assert_eq!(print::RawPrintEmbedder::default().id(), EmbedderId::RawPrint);
        assert_ne!(EmbedderId::ByteArray, EmbedderId::RawPrint);
    }
}
