use super::hex::byte_row;
use super::{Embedder, EmbedderId, size_macro, write_preamble, write_trailer};
use crate::chunking::FixedChunker;
use crate::domain::{HeaderLabels, SourceFile};
use crate::error::Result;
use std::io::Write;
use std::num::NonZeroUsize;

pub const DEFAULT_SYMBOL: &str = "favicon";
pub const DEFAULT_WIDTH: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Embeds arbitrary bytes as a `PROGMEM` array plus a `write_<symbol>(Print&)` accessor.
#[derive(Clone, Debug)]
pub struct ByteArrayEmbedder {
    pub symbol: String,
    pub width: NonZeroUsize,
}

impl Default for ByteArrayEmbedder {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl ByteArrayEmbedder {
    pub fn new(symbol: impl Into<String>, width: NonZeroUsize) -> Self {
        Self {
            symbol: symbol.into(),
            width,
        }
    }
}

impl Embedder for ByteArrayEmbedder {
    fn id(&self) -> EmbedderId {
        EmbedderId::ByteArray
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
        let size = size_macro(&self.symbol);
        let data = format!("{}_data", self.symbol);

        write_preamble(dst, labels, &self.symbol, src.len())?;
        writeln!(dst, "const uint8_t {data}[{size}] PROGMEM = {{")?;
        let mut rows = 0usize;
        for chunk in FixedChunker::new(&src.bytes, self.width) {
            let sep = if chunk.is_last { "" } else { "," };
            writeln!(dst, "  {}{sep}", byte_row(chunk.bytes))?;
            rows += 1;
        }
        // closes the initializer even when there were no rows
        writeln!(dst, "}};")?;
        writeln!(dst, "void write_{}(Print& out) {{", self.symbol)?;
        writeln!(dst, "  for (size_t i=0; i<{size}; i++)")?;
        writeln!(dst, "    out.write(pgm_read_byte_near({data}+i));")?;
        writeln!(dst, "}}")?;
        write_trailer(dst, &self.symbol)?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bytes: &[u8], width: usize) -> (String, usize) {
        let e = ByteArrayEmbedder::new("favicon", NonZeroUsize::new(width).unwrap());
        let src = SourceFile::from_bytes("favicon.ico", bytes);
        let labels = HeaderLabels::new("webpage/favicon.ico", "ardudev favicon");
        let mut out = Vec::new();
        let rows = e.render(&src, &labels, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), rows)
    }

    #[test]
    fn renders_exact_header() {
        let (text, rows) = render(&[0x00, 0x01, 0x02, 0xfe, 0xff], 2);
        assert_eq!(rows, 3);
        let want = "\
// Generated from webpage/favicon.ico by ardudev favicon, DO NOT EDIT
#ifndef FAVICON_H
#define FAVICON_H
#define FAVICON_SIZE (5)
const uint8_t favicon_data[FAVICON_SIZE] PROGMEM = {
  0x00, 0x01,
  0x02, 0xfe,
  0xff
};
void write_favicon(Print& out) {
  for (size_t i=0; i<FAVICON_SIZE; i++)
    out.write(pgm_read_byte_near(favicon_data+i));
}
#endif // #ifndef FAVICON_H
";
        assert_eq!(text, want);
    }

    #[test]
    fn empty_input_has_no_rows() {
        let (text, rows) = render(&[], 20);
        assert_eq!(rows, 0);
        assert!(text.contains("#define FAVICON_SIZE (0)\n"));
        assert!(text.contains("PROGMEM = {\n};\nvoid write_favicon"));
    }

    #[test]
    fn row_count_is_ceil_of_len_over_width() {
        for (len, width, want) in [(1, 20, 1), (20, 20, 1), (21, 20, 2), (41, 20, 3), (3, 1, 3)] {
            let data = vec![0xaa; len];
            let (text, rows) = render(&data, width);
            assert_eq!(rows, want, "len={len} width={width}");
            let data_rows = text.lines().filter(|l| l.starts_with("  0x")).count();
            assert_eq!(data_rows, want);
            assert!(text.contains(&format!("#define FAVICON_SIZE ({len})\n")));
        }
    }

    #[test]
    fn only_last_row_lacks_trailing_comma() {
        let (text, _) = render(&[1, 2, 3, 4, 5, 6, 7], 3);
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("  0x")).collect();
        assert_eq!(rows, vec!["  0x01, 0x02, 0x03,", "  0x04, 0x05, 0x06,", "  0x07"]);
    }
}
