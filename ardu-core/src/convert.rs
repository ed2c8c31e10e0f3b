use crate::domain::{HeaderLabels, SourceFile};
use crate::embed::Embedder;
use crate::error::Result;
use crate::stats::ConvertStats;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Read `input`, render it with `embedder` and replace `output` with the result.
///
/// The header is rendered fully in memory first, so an unreadable source or a
/// rejected input leaves `output` exactly as it was.
pub fn convert(
    embedder: &dyn Embedder,
    input: &Path,
    output: &Path,
    labels: &HeaderLabels,
) -> Result<ConvertStats> {
    let src = SourceFile::read(input)?;
    debug!(path = %input.display(), bytes = src.len(), "read source");
    convert_source(embedder, &src, output, labels)
}

pub fn convert_source(
    embedder: &dyn Embedder,
    src: &SourceFile,
    output: &Path,
    labels: &HeaderLabels,
) -> Result<ConvertStats> {
    let header = render_to_vec(embedder, src, labels)?;
    write_replace(output, &header.bytes)?;
    debug!(
        path = %output.display(),
        embedder = ?embedder.id(),
        chunks = header.chunks,
        "wrote header"
    );
    Ok(ConvertStats {
        input_bytes: src.len() as u64,
        chunks: header.chunks as u64,
        chunk_width: embedder.chunk_width().get() as u64,
        output_bytes: header.bytes.len() as u64,
    })
}

pub struct RenderedHeader {
    pub bytes: Vec<u8>,
    pub chunks: usize,
}

pub fn render_to_vec(
    embedder: &dyn Embedder,
    src: &SourceFile,
    labels: &HeaderLabels,
) -> Result<RenderedHeader> {
    // hex literals take six output bytes per input byte
    let mut bytes = Vec::with_capacity(src.len() * 6 + 512);
    let chunks = embedder.render(src, labels, &mut bytes)?;
    debug!(out_bytes = bytes.len(), "rendered header");
    Ok(RenderedHeader { bytes, chunks })
}

/// Write `bytes` to a temp file next to `path`, then rename it over `path`.
pub fn write_replace(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
