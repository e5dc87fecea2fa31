//! Subcommand implementations.
//!
//! Each command takes paths, does one pass of file I/O through
//! `matrix_protocol`, and returns a value `main` can print.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use matrix_protocol::binary_codec::{decode_matrix, decode_vector, read_header};
use matrix_protocol::csv_codec::{
    format_matrix_csv, format_vector_csv, parse_matrix_csv, parse_vector_csv,
};
use matrix_protocol::wire_types::{blob_len, HEADER_LEN, MAGIC, WORD_SIZE};
use matrix_protocol::{save_matrix, save_vector};

/// What `encode` wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeSummary {
    pub rows: usize,
    pub cols: usize,
    pub bytes: u64,
}

/// Header and size report for a blob on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub path: PathBuf,
    pub magic: i64,
    pub known_magic: bool,
    pub rows: i64,
    pub cols: i64,
    pub reserved: [i64; 2],
    pub payload_bytes: usize,
    /// `None` when the header shape is negative or overflows.
    pub expected_bytes: Option<usize>,
    pub actual_bytes: usize,
}

impl Inspection {
    /// Header shape agrees with the file size.
    pub fn is_consistent(&self) -> bool {
        self.expected_bytes == Some(self.actual_bytes)
    }
}

/// Parse CSV at `input` and write it as a blob to `output`.
pub fn encode_csv(input: &Path, output: &Path, vector: bool) -> Result<EncodeSummary> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let (rows, cols) = if vector {
        let v = parse_vector_csv(&text).with_context(|| format!("parsing {}", input.display()))?;
        save_vector(output, v.as_slice())?;
        (v.len(), 1)
    } else {
        let m = parse_matrix_csv(&text).with_context(|| format!("parsing {}", input.display()))?;
        save_matrix(output, m.as_slice(), m.rows(), m.cols())?;
        (m.rows(), m.cols())
    };

    let bytes = fs::metadata(output)
        .with_context(|| format!("stat {}", output.display()))?
        .len();
    info!(rows, cols, bytes, path = %output.display(), "encoded");

    Ok(EncodeSummary { rows, cols, bytes })
}

/// Decode the blob at `input` and render it as CSV.
///
/// With `strict_magic`, a blob whose first word is not [`MAGIC`] is
/// rejected before the payload is looked at.
pub fn decode_to_csv(input: &Path, vector: bool, strict_magic: bool) -> Result<String> {
    let blob = read_blob(input)?;

    let header = read_header(&blob)?;
    if !header.has_known_magic() {
        if strict_magic {
            bail!(
                "{}: magic {:#018x} is not {:#018x}",
                input.display(),
                header.magic,
                MAGIC
            );
        }
        warn!(magic = header.magic, path = %input.display(), "unknown magic word");
    }

    let csv = if vector {
        format_vector_csv(&decode_vector(&blob)?)
    } else {
        format_matrix_csv(&decode_matrix(&blob)?)
    };
    debug!(rows = header.rows, cols = header.cols, "decoded");

    Ok(csv)
}

/// Report the header of the blob at `input` without decoding the payload.
pub fn inspect(input: &Path) -> Result<Inspection> {
    let blob = read_blob(input)?;
    let header = read_header(&blob)?;

    let expected_bytes = header
        .shape()
        .ok()
        .and_then(|s| blob_len(s.rows, s.cols));

    Ok(Inspection {
        path: input.to_path_buf(),
        magic: header.magic,
        known_magic: header.has_known_magic(),
        rows: header.rows,
        cols: header.cols,
        reserved: header.reserved,
        payload_bytes: blob.len() - HEADER_LEN,
        expected_bytes,
        actual_bytes: blob.len(),
    })
}

/// Human-readable rendering of an [`Inspection`].
pub fn render_inspection(report: &Inspection) -> String {
    let mut out = String::new();
    out.push_str(&format!("path:      {}\n", report.path.display()));
    out.push_str(&format!(
        "magic:     {:#018x}{}\n",
        report.magic,
        if report.known_magic { "" } else { " (unknown)" }
    ));
    out.push_str(&format!("shape:     {}x{}\n", report.rows, report.cols));
    out.push_str(&format!(
        "payload:   {} bytes ({} words)\n",
        report.payload_bytes,
        report.payload_bytes / WORD_SIZE
    ));
    match report.expected_bytes {
        Some(n) => out.push_str(&format!("expected:  {} bytes\n", n)),
        None => out.push_str("expected:  invalid shape\n"),
    }
    out.push_str(&format!("actual:    {} bytes\n", report.actual_bytes));
    out.push_str(&format!(
        "status:    {}\n",
        if report.is_consistent() { "ok" } else { "MISMATCH" }
    ));
    out
}

fn read_blob(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}
