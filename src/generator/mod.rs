//! Module for the core logic of the generator

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info_span, trace};

use crate::{
    config::GeneratorConfig,
    error::{Error, io_error},
    report::GenerationReport,
};


///
/// Writes header, one line per index in `[0, test_count)`, and footer to `writer`.
/// Returns the number of bytes written.
///
pub fn write_tests<F>(mut writer: impl Write, config: &GeneratorConfig<F>) -> std::io::Result<u64>
where
    F: Fn(usize) -> String,
{
    let mut bytes = 0u64;

    if !config.header.is_empty() {
        writer.write_all(config.header.as_bytes())?;
        bytes += config.header.len() as u64;
    }

    for index in 0..config.test_count {
        let line = (config.line_template)(index);
        writer.write_all(line.as_bytes())?;
        bytes += line.len() as u64;
    }

    if !config.footer.is_empty() {
        writer.write_all(config.footer.as_bytes())?;
        bytes += config.footer.len() as u64;
    }

    Ok(bytes)
}

///
/// Creates (or truncates) the configured output file and fills it via [`write_tests`].
///
/// The file is flushed and synced before returning. On failure the handle is still closed, but
/// whatever was written so far stays on disk.
///
pub fn generate<F>(config: &GeneratorConfig<F>) -> Result<GenerationReport, Error>
where
    F: Fn(usize) -> String,
{
    let path = &config.output_path;
    let _span = info_span!("generate", path = %path.display(), test_count = config.test_count)
        .entered();

    let file = File::create(path).map_err(io_error(path))?;
    trace!("output file opened");

    let mut writer = BufWriter::new(file);
    let bytes_written = write_tests(&mut writer, config).map_err(io_error(path))?;

    let file = writer
        .into_inner()
        .map_err(|e| io_error(path)(e.into_error()))?;
    file.sync_all().map_err(io_error(path))?;

    let report = GenerationReport {
        path: path.clone(),
        tests_written: config.test_count,
        bytes_written,
    };
    debug!("{report}");
    Ok(report)
}
