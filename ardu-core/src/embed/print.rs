use super::{Embedder, EmbedderId, write_preamble, write_trailer};
use crate::chunking::FixedChunker;
use crate::domain::{HeaderLabels, SourceFile};
use crate::error::{ArduError, Result};
use std::io::Write;
use std::num::NonZeroUsize;

pub const DEFAULT_SYMBOL: &str = "write_html";
pub const DEFAULT_WIDTH: NonZeroUsize = NonZeroUsize::new(256).unwrap();
pub const DEFAULT_DELIMITER: &str = "I_am_unique";

/// Longest d-char-sequence a C++ raw string literal accepts.
const MAX_DELIMITER_LEN: usize = 16;

/// Embeds a page as a `<symbol>(Print&)` function of `out.print(F(R"d(...)d"))` statements,
/// one per chunk, with the chunk bytes copied verbatim.
#[derive(Clone, Debug)]
pub struct RawPrintEmbedder {
    pub symbol: String,
    pub width: NonZeroUsize,
    pub delimiter: String,
}

impl Default for RawPrintEmbedder {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            width: DEFAULT_WIDTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl RawPrintEmbedder {
    pub fn new(
        symbol: impl Into<String>,
        width: NonZeroUsize,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            width,
            delimiter: delimiter.into(),
        }
    }

    fn check_delimiter(&self) -> Result<()> {
        let d = &self.delimiter;
        let bad_char = |c: char| !c.is_ascii() || c.is_ascii_control() || " ()\\".contains(c);
        if d.is_empty() || d.len() > MAX_DELIMITER_LEN || d.chars().any(bad_char) {
            return Err(ArduError::InvalidDelimiter(d.clone()));
        }
        Ok(())
    }

    /// Reject a bad delimiter, or one that occurs anywhere in `src`.
    pub fn check(&self, src: &SourceFile) -> Result<()> {
        self.check_delimiter()?;
        if let Some(offset) = find(&src.bytes, self.delimiter.as_bytes()) {
            return Err(ArduError::DelimiterCollision {
                delimiter: self.delimiter.clone(),
                offset,
            });
        }
        Ok(())
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

impl Embedder for RawPrintEmbedder {
    fn id(&self) -> EmbedderId {
        EmbedderId::RawPrint
    }

    fn chunk_width(&self) -> NonZeroUsize {
        self.width
    }

    fn render(
        &self,
        src: &SourceFile,
        labels: &HeaderLabels,
        dst: &mut dyn Write,
    ) -> Result<usize> {
        self.check(src)?;
        let d = &self.delimiter;

        write_preamble(dst, labels, &self.symbol, src.len())?;
        writeln!(dst, "void {}(Print& out) {{", self.symbol)?;
        let mut statements = 0usize;
        for chunk in FixedChunker::new(&src.bytes, self.width) {
            write!(dst, "  out.print(F(R\"{d}(")?;
            dst.write_all(chunk.bytes)?;
            writeln!(dst, "){d}\"));")?;
            statements += 1;
        }
        writeln!(dst, "}}")?;
        write_trailer(dst, &self.symbol)?;
        Ok(statements)
    }
}
