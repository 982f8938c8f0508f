use crate::core::error::Result;
use crate::core::fs::{has_gzip_magic, is_std_stream, make_parent_dirs};
use flate2::bufread::MultiGzDecoder;
use grep_cli::stdout;
use gzp::{deflate::Gzip, Compression, ZBuilder, ZWriter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use termcolor::ColorChoice;

/// Open a matrix file (or stdin for `-`) as a line-oriented reader.
///
/// Gzip input is recognised by its magic bytes, so the file extension is irrelevant.
pub fn get_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let mut raw_reader: Box<dyn BufRead> = if is_std_stream(&path) {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path.as_ref())?))
    };

    if has_gzip_magic(&mut raw_reader)? {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(raw_reader))))
    } else {
        Ok(raw_reader)
    }
}

/// Build a gzip writer targeting a file or stdout.
///
/// Callers must `flush` and then `finish` the writer; errors raised while the
/// stream is closed are only reported by `finish`.
pub fn get_writer<P: AsRef<Path>>(
    path: P,
    threads: usize,
    compression_level: u32,
) -> Result<Box<dyn ZWriter>> {
    let raw_writer: Box<dyn Write + Send> = if is_std_stream(&path) {
        Box::new(stdout(ColorChoice::Never))
    } else {
        make_parent_dirs(&path)?;
        Box::new(BufWriter::new(File::create(path.as_ref())?))
    };

    Ok(ZBuilder::<Gzip, _>::new()
        .num_threads(threads)
        .compression_level(Compression::new(compression_level))
        .from_writer(raw_writer))
}

/// Build a tab-separated CSV writer for plain-text reports on stdout.
pub fn get_table_writer(write_headers: bool) -> csv::Writer<Box<dyn Write>> {
    let raw_writer: Box<dyn Write> = Box::new(stdout(ColorChoice::Never));
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(write_headers)
        .from_writer(raw_writer)
}
