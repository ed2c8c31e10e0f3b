use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use ardu_core::config::LoadedConfig;
use ardu_core::error::Result;
use ardu_core::toolchain_factory::{Backend, open_toolchain, params_for};
use ardu_core::{ConvertStats, Driver, Embedder, HeaderLabels, ProjectConfig, Verb, convert};
use tracing::debug;

/// Command-line replacements for a converter's configured job.
#[derive(Default)]
pub struct JobOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub chunk_width: Option<NonZeroUsize>,
}

/// Config paths hang off the config's directory, command-line paths off `cwd`.
fn job_paths(
    loaded: &LoadedConfig,
    cwd: &Path,
    input: &Path,
    output: &Path,
    o: &JobOverrides,
) -> (PathBuf, PathBuf) {
    let input = o
        .input
        .as_ref()
        .map(|p| cwd.join(p))
        .unwrap_or_else(|| loaded.path(input));
    let output = o
        .output
        .as_ref()
        .map(|p| cwd.join(p))
        .unwrap_or_else(|| loaded.path(output));
    (input, output)
}

fn generator(subcommand: &str) -> String {
    format!("{} {subcommand}", env!("CARGO_PKG_NAME"))
}

pub fn handle_driver(cwd: &Path, config: Option<&Path>, verb: Verb) -> Result<()> {
    let loaded = LoadedConfig::resolve(config, cwd)?;
    let board = &loaded.config.board;
    let toolchain = open_toolchain(Backend::ArduinoCli, params_for(board, &loaded.base_dir));
    let mut out = std::io::stdout().lock();
    let outcome = Driver::new(toolchain.as_ref(), board).run(verb, &mut out)?;
    debug!(?verb, ?outcome, "done");
    Ok(())
}

pub fn handle_favicon(cwd: &Path, config: Option<&Path>, o: JobOverrides) -> Result<()> {
    let line = convert_favicon(cwd, config, o)?;
    println!("{line}");
    Ok(())
}

pub fn handle_html(cwd: &Path, config: Option<&Path>, o: JobOverrides) -> Result<()> {
    let line = convert_html(cwd, config, o)?;
    println!("{line}");
    Ok(())
}

/// A finished conversion, with paths as the user should see them.
struct Converted {
    input: String,
    output: String,
    stats: ConvertStats,
}

/// Resolve the config, let `job` pick the embedder and paths, apply the
/// command-line overrides and convert.
fn convert_job<E: Embedder>(
    cwd: &Path,
    config: Option<&Path>,
    o: &JobOverrides,
    subcommand: &str,
    job: impl FnOnce(&ProjectConfig, Option<NonZeroUsize>) -> (E, PathBuf, PathBuf),
) -> Result<Converted> {
    let loaded = LoadedConfig::resolve(config, cwd)?;
    let (embedder, input, output) = job(&loaded.config, o.chunk_width);
    let (input, output) = job_paths(&loaded, cwd, &input, &output, o);
    let labels = HeaderLabels::new(loaded.display_rel(&input), generator(subcommand));

    let stats = convert(&embedder, &input, &output, &labels)?;
    Ok(Converted {
        input: loaded.display_rel(&input),
        output: loaded.display_rel(&output),
        stats,
    })
}

fn convert_favicon(cwd: &Path, config: Option<&Path>, o: JobOverrides) -> Result<String> {
    let c = convert_job(cwd, config, &o, "favicon", |cfg, width| {
        let mut job = cfg.favicon.clone();
        job.chunk_width = width.unwrap_or(job.chunk_width);
        (job.embedder(), job.input, job.output)
    })?;
    Ok(format!(
        "Converted {} to {}, {} bytes",
        c.input, c.output, c.stats.input_bytes
    ))
}

fn convert_html(cwd: &Path, config: Option<&Path>, o: JobOverrides) -> Result<String> {
    let c = convert_job(cwd, config, &o, "html", |cfg, width| {
        let mut job = cfg.html.clone();
        job.chunk_width = width.unwrap_or(job.chunk_width);
        (job.embedder(), job.input, job.output)
    })?;
    Ok(format!(
        "Converted {} to {}, {} bytes split into {} chunks of {} bytes",
        c.input, c.output, c.stats.input_bytes, c.stats.chunks, c.stats.chunk_width
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ardu_core::error::ArduError;
    use std::fs;

    fn project() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("webpage/dist")).unwrap();
        fs::create_dir_all(tmp.path().join("UnoR4WiFi_DHT22")).unwrap();
        tmp
    }

    #[test]
    fn favicon_uses_default_layout() {
        let tmp = project();
        fs::write(tmp.path().join("webpage/favicon.ico"), [0u8, 1, 2]).unwrap();

        let line = convert_favicon(tmp.path(), None, JobOverrides::default()).unwrap();
        assert_eq!(
            line,
            "Converted webpage/favicon.ico to UnoR4WiFi_DHT22/favicon.h, 3 bytes"
        );
        let header = fs::read_to_string(tmp.path().join("UnoR4WiFi_DHT22/favicon.h")).unwrap();
        assert!(header.starts_with(
            "// Generated from webpage/favicon.ico by ardudev favicon, DO NOT EDIT\n"
        ));
    }

    #[test]
    fn html_reports_chunking() {
        let tmp = project();
        fs::write(tmp.path().join("webpage/dist/index.html"), vec![b'x'; 600]).unwrap();

        let line = convert_html(tmp.path(), None, JobOverrides::default()).unwrap();
        assert_eq!(
            line,
            "Converted webpage/dist/index.html to UnoR4WiFi_DHT22/write_html.h, \
             600 bytes split into 3 chunks of 256 bytes"
        );
    }

    #[test]
    fn overrides_and_config_file_are_honoured() {
        let tmp = project();
        fs::write(
            tmp.path().join("ardu.json"),
            r#"{"html":{"input":"page.html","output":"out.h","symbol":"send_page","delimiter":"zz"}}"#,
        )
        .unwrap();
        fs::write(tmp.path().join("page.html"), "<p>a</p>").unwrap();

        let o = JobOverrides {
            chunk_width: NonZeroUsize::new(4),
            ..Default::default()
        };
        let line = convert_html(tmp.path(), None, o).unwrap();
        assert!(line.ends_with("8 bytes split into 2 chunks of 4 bytes"), "{line}");
        let header = fs::read_to_string(tmp.path().join("out.h")).unwrap();
        assert!(header.contains("void send_page(Print& out) {\n  out.print(F(R\"zz(<p>a)zz\"));\n"));
    }

    #[test]
    fn favicon_honours_path_overrides() {
        let tmp = project();
        fs::write(tmp.path().join("icon.ico"), [7u8; 5]).unwrap();

        let o = JobOverrides {
            input: Some("icon.ico".into()),
            output: Some("build/icon.h".into()),
            chunk_width: NonZeroUsize::new(2),
        };
        fs::create_dir_all(tmp.path().join("build")).unwrap();
        let line = convert_favicon(tmp.path(), None, o).unwrap();
        assert_eq!(line, "Converted icon.ico to build/icon.h, 5 bytes");
        let header = fs::read_to_string(tmp.path().join("build/icon.h")).unwrap();
        assert!(header.contains("  0x07, 0x07,\n  0x07, 0x07,\n  0x07\n"), "{header}");
    }

    #[test]
    fn missing_page_is_reported_and_nothing_written() {
        let tmp = project();
        let err = convert_html(tmp.path(), None, JobOverrides::default()).unwrap_err();
        assert!(matches!(err, ArduError::FileAccess { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!tmp.path().join("UnoR4WiFi_DHT22/write_html.h").exists());
    }
}
