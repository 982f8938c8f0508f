//! Region records: one per matrix row.

use crate::core::error::MatrixError;
use smartstring::alias::String as CompactString;
use std::fmt;
use std::str::FromStr;

/// Orientation of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
            Strand::Unknown => ".",
        }
    }
}

impl FromStr for Strand {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            "." => Ok(Strand::Unknown),
            other => Err(MatrixError::InvalidInput(format!(
                "strand must be one of '+', '-' or '.', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A genomic region backing one matrix row.
///
/// `blocks` holds the `(start, end)` pairs of the region; single-interval regions
/// have exactly one block, transcript-style (BED12/GTF metagene) regions have one
/// per exon. `name` is the key used to match rows across matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub chrom: CompactString,
    pub blocks: Vec<(u64, u64)>,
    pub name: String,
    pub strand: Strand,
    pub score: Option<f64>,
}

impl Region {
    /// Single-block region without a score.
    pub fn new<C, N>(chrom: C, start: u64, end: u64, name: N, strand: Strand) -> Self
    where
        C: AsRef<str>,
        N: Into<String>,
    {
        Self {
            chrom: CompactString::from(chrom.as_ref()),
            blocks: vec![(start, end)],
            name: name.into(),
            strand,
            score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strand_parsing() {
        assert_eq!("+".parse::<Strand>().unwrap(), Strand::Forward);
        assert_eq!("-".parse::<Strand>().unwrap(), Strand::Reverse);
        assert_eq!(".".parse::<Strand>().unwrap(), Strand::Unknown);
        assert!("*".parse::<Strand>().is_err());
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn new_region_has_one_block_and_no_score() {
        let region = Region::new("chr1", 100, 150, "tx1", Strand::Forward);
        assert_eq!(region.chrom.as_str(), "chr1");
        assert_eq!(region.blocks, vec![(100, 150)]);
        assert_eq!(region.score, None);
    }
}
