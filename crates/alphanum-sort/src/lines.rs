use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

/// Reads every line of `paths` in order. An empty list, or a `-` entry, reads
/// stdin.
pub fn read_lines(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        return read_from(io::stdin().lock(), "stdin");
    }

    let mut lines = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            lines.extend(read_from(io::stdin().lock(), "stdin")?);
            continue;
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;
        let read = read_from(BufReader::new(file), &path.to_string_lossy())?;
        tracing::debug!("read {} lines from `{}`", read.len(), path.display());
        lines.extend(read);
    }

    Ok(lines)
}

/// Splits on `\n`, dropping a trailing `\r`.
pub fn read_from(reader: impl BufRead, name: &str) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read `{name}`"))
}

pub fn write_lines(writer: impl Write, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
