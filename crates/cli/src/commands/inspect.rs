use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use img3_core::img3::Container;
use img3_core::report::{data_banner, format_header, format_section, ContainerReport};
use log::{debug, info};

use crate::commands::errors::InspectError;

/// Read the whole file at `path` into memory.
///
/// The file handle is dropped before this returns, so nothing stays open while
/// the buffer is decoded.
pub fn load_container_bytes(path: &Path) -> Result<Vec<u8>, InspectError> {
    fs::metadata(path)
        .map_err(|source| InspectError::NotFound { path: path.to_path_buf(), source })?;

    let mut file = File::open(path)
        .map_err(|source| InspectError::Open { path: path.to_path_buf(), source })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|source| InspectError::Open { path: path.to_path_buf(), source })?;

    debug!("read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Inspect the container at `path` and print the report to stdout.
pub fn inspect_command(path: &Path, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    inspect_to(path, json, &mut out)
}

/// Inspect the container at `path`, writing the report to `out`.
pub fn inspect_to(path: &Path, json: bool, out: &mut impl Write) -> Result<()> {
    info!("inspecting {}", path.display());
    let buffer = load_container_bytes(path)?;

    if json {
        write_json_report(&buffer, out)
    } else {
        write_text_report(&buffer, out)
    }
}

/// Stream the text report, one section at a time.
///
/// Sections decoded before a failure are still written.
pub fn write_text_report(buffer: &[u8], out: &mut impl Write) -> Result<()> {
    let container = Container::parse(buffer).map_err(InspectError::from)?;

    write!(out, "{}", format_header(container.header())).context("Failed to write report")?;
    write!(out, "{}", data_banner()).context("Failed to write report")?;

    for item in container.sections() {
        match item {
            Ok((offset, section)) => {
                write!(out, "{}", format_section(offset, &section))
                    .context("Failed to write report")?;
            }
            Err(err) => {
                out.flush().context("Failed to write report")?;
                return Err(InspectError::from(err).into());
            }
        }
    }

    out.flush().context("Failed to write report")?;
    Ok(())
}

/// Collect the full report and write it as pretty JSON.
///
/// Nothing is written if decoding fails.
pub fn write_json_report(buffer: &[u8], out: &mut impl Write) -> Result<()> {
    let report = ContainerReport::from_buffer(buffer).map_err(InspectError::from)?;
    let serialized =
        serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?;
    writeln!(out, "{}", serialized).context("Failed to write report")?;
    Ok(())
}
