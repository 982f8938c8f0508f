//! Reading and writing the gzip-compressed matrix container.
//!
//! The container is line oriented. The first line is `@` followed by a JSON
//! object holding the header parameters together with `group_labels`,
//! `group_boundaries`, `sample_labels` and `sample_boundaries`. Every further
//! line is one matrix row:
//!
//! ```text
//! chrom  starts  ends  name  score  strand  v1 ... vN
//! ```
//!
//! Multi-block regions store comma-joined starts and ends, an absent score is
//! `.` and missing values are `nan`.

use crate::core::error::{MatrixError, Result};
use crate::core::io::{get_reader, get_writer};
use crate::matrix::grouping::{Dimension, Grouping};
use crate::matrix::handle::MatrixHandle;
use crate::matrix::params::{
    Parameters, GROUP_BOUNDARIES, GROUP_LABELS, SAMPLE_BOUNDARIES, SAMPLE_LABELS,
};
use crate::matrix::region::{Region, Strand};
use gzp::ZWriter;
use itertools::Itertools;
use log::{debug, info};
use ndarray::Array2;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use smartstring::alias::String as CompactString;
use std::io::{BufRead, Write};
use std::path::Path;

/// Number of region columns preceding the values on every row.
pub const REGION_FIELDS: usize = 6;

/// Settings for [`write_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Compression worker threads.
    pub threads: usize,
    /// Gzip compression level (0-9).
    pub compression_level: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            compression_level: 6,
        }
    }
}

/// Load a matrix file (`-` for stdin).
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<MatrixHandle> {
    info!("Reading matrix {}", path.as_ref().display());
    let reader = get_reader(&path)?;
    let handle = parse_matrix(reader)?;
    info!(
        "Loaded {} x {} matrix with {} group(s) and {} sample(s)",
        handle.nrows(),
        handle.ncols(),
        handle.groups().len(),
        handle.samples().len()
    );
    Ok(handle)
}

/// Parse an already decompressed matrix stream.
///
/// Data lines are parsed on the global rayon pool; row order is preserved.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<MatrixHandle> {
    let mut lines = reader.lines();
    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(MatrixError::format(1, "file is empty")),
    };
    let (parameters, groups, samples) = parse_header(&header_line)?;

    let body: Vec<String> = lines.collect::<std::io::Result<_>>()?;
    let ncols = samples.total();
    let rows: Vec<(Region, Vec<f64>)> = body
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_row(line, ncols, idx + 2))
        .collect::<Result<_>>()?;

    if rows.len() != groups.total() {
        return Err(MatrixError::format(
            1,
            format!(
                "group boundaries cover {} rows but the file holds {}",
                groups.total(),
                rows.len()
            ),
        ));
    }

    let nrows = rows.len();
    let mut regions = Vec::with_capacity(nrows);
    let mut flat = Vec::with_capacity(nrows * ncols);
    for (region, values) in rows {
        regions.push(region);
        flat.extend(values);
    }
    let values = Array2::from_shape_vec((nrows, ncols), flat)?;
    debug!("Parsed {} rows of {} values", nrows, ncols);

    MatrixHandle::new(values, regions, groups, samples, parameters)
}

fn header_field<T: DeserializeOwned>(header: &Map<String, Value>, key: &str) -> Result<T> {
    let value = header
        .get(key)
        .cloned()
        .ok_or_else(|| MatrixError::format(1, format!("header lacks '{}'", key)))?;
    serde_json::from_value(value)
        .map_err(|e| MatrixError::format(1, format!("invalid '{}': {}", key, e)))
}

fn parse_header(line: &str) -> Result<(Parameters, Grouping, Grouping)> {
    let json = line
        .strip_prefix('@')
        .ok_or_else(|| MatrixError::format(1, "header line must start with '@'"))?;
    let header: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| MatrixError::format(1, format!("header is not a JSON object: {}", e)))?;

    let groups = Grouping::new(
        Dimension::Groups,
        header_field(&header, GROUP_LABELS)?,
        header_field(&header, GROUP_BOUNDARIES)?,
    )?;
    let samples = Grouping::new(
        Dimension::Samples,
        header_field(&header, SAMPLE_LABELS)?,
        header_field(&header, SAMPLE_BOUNDARIES)?,
    )?;

    Ok((Parameters::from_map(header), groups, samples))
}

fn parse_coords(field: &str, line: usize) -> Result<Vec<u64>> {
    field
        .split(',')
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.trim()
                .parse::<u64>()
                .map_err(|_| MatrixError::format(line, format!("invalid coordinate '{}'", x)))
        })
        .collect()
}

fn parse_value(field: &str, line: usize) -> Result<f64> {
    let field = field.trim();
    if field.eq_ignore_ascii_case("nan") || field.is_empty() {
        return Ok(f64::NAN);
    }
    field
        .parse::<f64>()
        .map_err(|_| MatrixError::format(line, format!("invalid value '{}'", field)))
}

fn parse_row(line: &str, ncols: usize, line_no: usize) -> Result<(Region, Vec<f64>)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != REGION_FIELDS + ncols {
        return Err(MatrixError::format(
            line_no,
            format!(
                "expected {} fields ({} region + {} values), found {}",
                REGION_FIELDS + ncols,
                REGION_FIELDS,
                ncols,
                fields.len()
            ),
        ));
    }

    let starts = parse_coords(fields[1], line_no)?;
    let ends = parse_coords(fields[2], line_no)?;
    if starts.is_empty() || starts.len() != ends.len() {
        return Err(MatrixError::format(
            line_no,
            format!("{} block starts but {} block ends", starts.len(), ends.len()),
        ));
    }

    let score = match fields[4] {
        "." | "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|_| MatrixError::format(line_no, format!("invalid score '{}'", raw)))?,
        ),
    };
    let strand = fields[5]
        .parse::<Strand>()
        .map_err(|e| MatrixError::format(line_no, e.to_string()))?;

    let region = Region {
        chrom: CompactString::from(fields[0]),
        blocks: starts.into_iter().zip(ends).collect(),
        name: fields[3].to_string(),
        strand,
        score,
    };
    let values = fields[REGION_FIELDS..]
        .iter()
        .map(|field| parse_value(field, line_no))
        .collect::<Result<Vec<f64>>>()?;

    Ok((region, values))
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}

/// Serialize a matrix into any writer, uncompressed.
pub fn write_to<W: Write>(handle: &MatrixHandle, writer: &mut W) -> Result<()> {
    let mut header = handle.parameters().as_map().clone();
    header.insert(GROUP_LABELS.to_string(), serde_json::to_value(handle.group_labels())?);
    header.insert(
        GROUP_BOUNDARIES.to_string(),
        serde_json::to_value(handle.groups().boundaries())?,
    );
    header.insert(SAMPLE_LABELS.to_string(), serde_json::to_value(handle.sample_labels())?);
    header.insert(
        SAMPLE_BOUNDARIES.to_string(),
        serde_json::to_value(handle.samples().boundaries())?,
    );
    writeln!(writer, "@{}", serde_json::to_string(&Value::Object(header))?)?;

    for (region, row) in handle.regions().iter().zip(handle.values().rows()) {
        let score = region
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| ".".to_string());
        write!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            region.chrom,
            region.blocks.iter().map(|(start, _)| start).join(","),
            region.blocks.iter().map(|(_, end)| end).join(","),
            region.name,
            score,
            region.strand,
        )?;
        for value in row.iter() {
            write!(writer, "\t{}", format_value(*value))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write a matrix as gzip to `path` (`-` for stdout), creating parent directories.
pub fn write_matrix<P: AsRef<Path>>(
    handle: &MatrixHandle,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    info!(
        "Writing {} x {} matrix to {}",
        handle.nrows(),
        handle.ncols(),
        path.as_ref().display()
    );
    let mut writer = get_writer(&path, options.threads, options.compression_level)?;
    let written = write_to(handle, &mut writer)
        .and_then(|()| writer.flush().map_err(MatrixError::from))
        .and_then(|()| writer.finish().map_err(MatrixError::from));
    if written.is_err() {
        // A parallel compressor that failed to close retries on drop and panics.
        std::mem::forget(writer);
    }
    written
}
