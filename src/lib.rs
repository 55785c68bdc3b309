// enrichmaps: Krona and TERM2GENE mapping files from taxonomy and functional tables.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! enrichmaps is a library and a command-line client for reformatting the
//! output of amplicon and functional prediction pipelines into small mapping
//! files:
//!
//!   - Class-level count tables for [Krona](https://github.com/marbl/Krona)
//!     from a [GTDB](https://gtdb.ecogenomic.org/) taxonomy table.
//!   - TERM2GENE tables for the `enricher` function of
//!     [clusterProfiler](https://bioconductor.org/packages/clusterProfiler)
//!     from a GTDB taxonomy table, a
//!     [PICRUSt2](https://github.com/picrust/picrust2) KO abundance matrix,
//!     or a KO TERM2GENE table joined with the
//!     [KEGG](https://rest.kegg.jp/link/pathway/ko) KO to pathway links.
//!
//! All inputs are tab-separated plain text and may be gzip-compressed.
//!
//! ## Usage
//!
//! ### Command line
//!
//! The enrichmaps CLI supports the following subcommands:
//!   - `enrichmaps krona` count features per taxonomic class for Krona.
//!   - `enrichmaps ko-term2gene` map KOs to the features predicted to carry them.
//!   - `enrichmaps taxon-term2gene` map taxa at a selected rank to their features.
//!   - `enrichmaps pathway-term2gene` map KEGG pathways to features through their KOs.
//!
//! ### Rust API
//!
//! Each subcommand has a `*_from_read_to_write` function that processes a
//! whole stream from [Read] to [Write], and a `read_*` function that returns
//! the aggregated table so that it can be inspected before anything is
//! written.
//!
//! The building blocks are:
//!
//!   - [parser]: line readers for the supported input tables.
//!   - [aggregate]: the insertion-ordered mapping tables built from the parsed rows.
//!   - [printer]: formatters writing the aggregated tables as plain text.
//!
//! Output rows always appear in the order their keys were first seen in the
//! input, so running the same command twice yields identical files.
//!

use std::io::Read;
use std::io::Write;

use aggregate::ko::KoFeatures;
use aggregate::krona::KronaCounts;
use aggregate::pathway::FeatureKos;
use aggregate::pathway::FeaturePathways;
use aggregate::pathway::KoPathways;
use aggregate::rank::RankGroups;
use parser::decompress;
use parser::matrix::MatrixReader;
use parser::taxonomy::TaxonomyReader;

pub mod aggregate;
pub mod parser;
pub mod printer;

type E = Box<dyn std::error::Error>;

/// Sentinel name for a rank that is missing from a taxonomy path.
pub const UNCLASSIFIED: &str = "Unclassified";

/// The only domain accepted in Krona input.
pub const ACCEPTED_DOMAIN: &str = "Bacteria";

/// Taxonomic ranks used as token prefixes in GTDB taxonomy strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Domain,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl Rank {
    /// Ranks accepted as a TERM2GENE grouping level.
    pub const SELECTABLE: [Rank; 5] = [Rank::Genus, Rank::Class, Rank::Phylum, Rank::Order, Rank::Family];

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "d" => Some(Rank::Domain),
            "p" => Some(Rank::Phylum),
            "c" => Some(Rank::Class),
            "o" => Some(Rank::Order),
            "f" => Some(Rank::Family),
            "g" => Some(Rank::Genus),
            "s" => Some(Rank::Species),
            _ => None,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Rank::Domain => "d",
            Rank::Phylum => "p",
            Rank::Class => "c",
            Rank::Order => "o",
            Rank::Family => "f",
            Rank::Genus => "g",
            Rank::Species => "s",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Domain => "domain",
            Rank::Phylum => "phylum",
            Rank::Class => "class",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Genus => "genus",
            Rank::Species => "species",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a TERM2GENE rank selector.
///
/// Only the letters in [Rank::SELECTABLE] are accepted.
impl std::str::FromStr for Rank {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Rank::from_prefix(s) {
            Some(rank) if Rank::SELECTABLE.contains(&rank) => Ok(rank),
            _ => Err(TableError::UnrecognizedRank { given: s.to_string() }),
        }
    }
}

/// A single `rank__name` token from a taxonomy string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxonToken {
    pub rank: Rank,
    /// Text after the rank prefix, up to the next `__` if any. May be empty.
    pub name: String,
}

/// One row of a GTDB taxonomy table.
///
/// Only tokens with a recognised rank prefix are kept, in the order they
/// appear in the taxonomy string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TaxonomyRecord {
    pub feature: String,
    pub tokens: Vec<TaxonToken>,
}

impl TaxonomyRecord {
    /// Names of all non-empty tokens of `rank`, in input order.
    pub fn names_at(&self, rank: Rank) -> impl Iterator<Item = &str> {
        self.tokens.iter()
            .filter(move |token| token.rank == rank && !token.name.is_empty())
            .map(|token| token.name.as_str())
    }

    /// Name of the last non-empty token of `rank`.
    pub fn last_name_at(&self, rank: Rank) -> Option<&str> {
        self.names_at(rank).last()
    }
}

/// Fatal problems found in the input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A line has fewer columns than the table requires.
    MalformedRow { line_no: usize, line: String, min_columns: usize },
    /// A `d__` token names something other than [ACCEPTED_DOMAIN].
    DisallowedDomain { found: String },
    /// A class was seen under two different values of a higher rank.
    RankConflict { class: String, rank: Rank, previous: String, found: String },
    /// The rank selector is not one of [Rank::SELECTABLE].
    UnrecognizedRank { given: String },
    /// A KO abundance cell is not an integer.
    InvalidAbundance { line_no: usize, value: String },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TableError::MalformedRow { line_no, line, min_columns } => {
                write!(f, "line {} has fewer than {} columns: {}", line_no, min_columns, line)
            },
            TableError::DisallowedDomain { found } => {
                write!(f, "domain different from {}: {}", ACCEPTED_DOMAIN, found)
            },
            TableError::RankConflict { class, rank, previous, found } => {
                write!(f, "class {} has more than one {} ({}, then {})", class, rank, previous, found)
            },
            TableError::UnrecognizedRank { given } => {
                write!(f, "taxon rank {} not recognized, expected one of g, c, p, o, f", given)
            },
            TableError::InvalidAbundance { line_no, value } => {
                write!(f, "line {}: abundance '{}' is not an integer", line_no, value)
            },
        }
    }
}

impl std::error::Error for TableError {}

/// Read a GTDB taxonomy table and count its features per class.
///
/// Fails on the first [TableError::DisallowedDomain] or
/// [TableError::MalformedRow], and on any [TableError::RankConflict].
pub fn read_krona_counts<R: Read>(
    conn_in: &mut R,
) -> Result<KronaCounts, E> {
    let mut reader = TaxonomyReader::new(decompress(conn_in)?);
    let counts = KronaCounts::from_records(reader.by_ref())?;
    log::debug!("read {} lines of taxonomy", reader.line_no());
    Ok(counts)
}

/// Convert a GTDB taxonomy table from [Read] into a Krona text file in [Write].
///
/// Nothing is written if the input contains an error.
///
/// ## Usage
///
/// ```rust
/// use enrichmaps::krona_from_read_to_write;
/// use std::io::Cursor;
///
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"OTU1\td__Bacteria;p__Firmicutes;c__Bacilli\t0.99\n".to_vec());
/// input_bytes.append(&mut b"OTU2\td__Bacteria;p__Firmicutes;c__Bacilli\t0.95\n".to_vec());
/// input_bytes.append(&mut b"OTU3\td__Bacteria;p__Firmicutes\t0.80\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let mut output: Vec<u8> = Vec::new();
/// krona_from_read_to_write(&mut input, &mut output).unwrap();
///
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"2\tBacteria\tFirmicutes\tBacilli\n".to_vec());
/// expected.append(&mut b"1\tBacteria\tFirmicutes\tUnclassified\n".to_vec());
///
/// assert_eq!(output, expected);
/// ```
///
pub fn krona_from_read_to_write<R: Read, W: Write>(
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<(), E> {
    let counts = read_krona_counts(conn_in)?;
    printer::krona::format_krona_file(&counts, conn_out)?;
    Ok(())
}

/// Read a KO abundance matrix and collect the features carrying each KO.
pub fn read_ko_features<R: Read>(
    conn_in: &mut R,
) -> Result<KoFeatures, E> {
    let reader = MatrixReader::new(decompress(conn_in)?)?;
    KoFeatures::from_rows(reader)
}

/// Convert a KO abundance matrix from [Read] into a KO TERM2GENE table in [Write].
///
/// ## Usage
///
/// ```rust
/// use enrichmaps::ko_term2gene_from_read_to_write;
/// use std::io::Cursor;
///
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"sequence\tK00001\tK00002\n".to_vec());
/// input_bytes.append(&mut b"ASV1\t0\t2\n".to_vec());
/// input_bytes.append(&mut b"ASV2\t1\t3\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let mut output: Vec<u8> = Vec::new();
/// ko_term2gene_from_read_to_write(&mut input, &mut output).unwrap();
///
/// // KOs are listed in the order they first received a feature
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"K00002\tASV1\n".to_vec());
/// expected.append(&mut b"K00002\tASV2\n".to_vec());
/// expected.append(&mut b"K00001\tASV2\n".to_vec());
///
/// assert_eq!(output, expected);
/// ```
///
pub fn ko_term2gene_from_read_to_write<R: Read, W: Write>(
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<(), E> {
    let kos = read_ko_features(conn_in)?;
    printer::term2gene::format_term2gene_file(kos.rows(), conn_out)?;
    Ok(())
}

/// Read a GTDB taxonomy table and group its features by taxon at `rank`.
pub fn read_rank_groups<R: Read>(
    rank: Rank,
    conn_in: &mut R,
) -> Result<RankGroups, E> {
    let mut reader = TaxonomyReader::new(decompress(conn_in)?);
    let groups = RankGroups::from_records(rank, reader.by_ref())?;
    log::debug!("read {} lines of taxonomy", reader.line_no());
    Ok(groups)
}

/// Convert a GTDB taxonomy table from [Read] into a TERM2GENE table grouped
/// at `rank` in [Write].
///
/// ## Usage
///
/// ```rust
/// use enrichmaps::{taxon_term2gene_from_read_to_write, Rank};
/// use std::io::Cursor;
///
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"OTU1\td__Bacteria;p__Firmicutes;c__Bacilli;o__Lactobacillales;f__Streptococcaceae;g__Lactococcus\t0.99\n".to_vec());
/// input_bytes.append(&mut b"OTU2\td__Bacteria;p__Firmicutes;c__Bacilli\t0.95\n".to_vec());
/// input_bytes.append(&mut b"OTU3\td__Bacteria;p__Firmicutes;c__Bacilli;o__Lactobacillales;f__Streptococcaceae;g__Lactococcus\t0.80\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let mut output: Vec<u8> = Vec::new();
/// taxon_term2gene_from_read_to_write("g".parse::<Rank>().unwrap(), &mut input, &mut output).unwrap();
///
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"Unclassified\tOTU2\n".to_vec());
/// expected.append(&mut b"Lactococcus\tOTU1\n".to_vec());
/// expected.append(&mut b"Lactococcus\tOTU3\n".to_vec());
///
/// assert_eq!(output, expected);
/// ```
///
pub fn taxon_term2gene_from_read_to_write<R: Read, W: Write>(
    rank: Rank,
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<(), E> {
    let groups = read_rank_groups(rank, conn_in)?;
    printer::term2gene::format_term2gene_file(groups.rows(), conn_out)?;
    Ok(())
}

/// Join a feature to KO TERM2GENE table with KEGG KO to pathway links.
///
/// `feature_ko_conn` contains `KO<TAB>feature` rows and `ko_pathway_conn`
/// contains `ko:ID<TAB>path:ID` rows.
pub fn read_feature_pathways<R1: Read, R2: Read>(
    feature_ko_conn: &mut R1,
    ko_pathway_conn: &mut R2,
) -> Result<FeaturePathways, E> {
    let ko_pathways = KoPathways::from_read(decompress(ko_pathway_conn)?)?;
    let feature_kos = FeatureKos::from_read(decompress(feature_ko_conn)?)?;
    log::debug!("{} KOs with KEGG pathways, {} features with KOs", ko_pathways.n_kos(), feature_kos.n_features());
    Ok(aggregate::pathway::join(&feature_kos, &ko_pathways))
}

/// Convert a feature to KO TERM2GENE table and KEGG KO to pathway links
/// into a pathway TERM2GENE table in [Write].
///
/// ## Usage
///
/// ```rust
/// use enrichmaps::pathway_term2gene_from_read_to_write;
/// use std::io::Cursor;
///
/// let mut links: Cursor<Vec<u8>> = Cursor::new(b"ko:K00001\tpath:map00010\nko:K00001\tpath:ko00010\nko:K00002\tpath:map00010\n".to_vec());
/// let mut kos: Cursor<Vec<u8>> = Cursor::new(b"K00001\tASV1\nK00002\tASV1\nK09999\tASV2\n".to_vec());
///
/// let mut output: Vec<u8> = Vec::new();
/// pathway_term2gene_from_read_to_write(&mut kos, &mut links, &mut output).unwrap();
///
/// // ASV2 has no KO with a known pathway and is left out
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"map00010\tASV1\n".to_vec());
/// expected.append(&mut b"ko00010\tASV1\n".to_vec());
/// expected.append(&mut b"map00010\tASV1\n".to_vec());
///
/// assert_eq!(output, expected);
/// ```
///
pub fn pathway_term2gene_from_read_to_write<R1: Read, R2: Read, W: Write>(
    feature_ko_conn: &mut R1,
    ko_pathway_conn: &mut R2,
    conn_out: &mut W,
) -> Result<(), E> {
    let pathways = read_feature_pathways(feature_ko_conn, ko_pathway_conn)?;
    printer::term2gene::format_term2gene_file(pathways.rows(), conn_out)?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn rank_from_str_selectable() {
        use super::Rank;

        let got: Vec<Rank> = ["g", "c", "p", "o", "f"].iter().map(|x| x.parse::<Rank>().unwrap()).collect();
        let expected = vec![Rank::Genus, Rank::Class, Rank::Phylum, Rank::Order, Rank::Family];

        assert_eq!(got, expected);
    }

    #[test]
    fn rank_from_str_rejects_domain_and_species() {
        use super::Rank;
        use super::TableError;

        for given in ["d", "s", "genus", "G", ""] {
            let got = given.parse::<Rank>();
            assert_eq!(got, Err(TableError::UnrecognizedRank { given: given.to_string() }));
        }
    }

    #[test]
    fn taxonomy_record_last_name_at_skips_empty() {
        use super::{Rank, TaxonToken, TaxonomyRecord};

        let record = TaxonomyRecord {
            feature: "OTU1".to_string(),
            tokens: vec![
                TaxonToken { rank: Rank::Class, name: "Bacilli".to_string() },
                TaxonToken { rank: Rank::Class, name: "Clostridia".to_string() },
                TaxonToken { rank: Rank::Class, name: "".to_string() },
            ],
        };

        assert_eq!(record.last_name_at(Rank::Class), Some("Clostridia"));
        assert_eq!(record.last_name_at(Rank::Phylum), None);
    }

    #[test]
    fn krona_from_read_to_write() {
        use super::krona_from_read_to_write;
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"OTU1\td__Bacteria;p__Firmicutes;c__Bacilli\t0.99\n".to_vec());
        input_bytes.append(&mut b"OTU2\td__Bacteria;p__Proteobacteria\t0.91\n".to_vec());
        input_bytes.append(&mut b"OTU3\td__Bacteria;p__Firmicutes;c__Bacilli\t0.95\n".to_vec());
        input_bytes.append(&mut b"OTU4\td__Bacteria;p__Firmicutes\t0.80\n".to_vec());
        input_bytes.append(&mut b"OTU5\td__Bacteria;p__Proteobacteria;c__Gammaproteobacteria\t0.97\n".to_vec());
        input_bytes.append(&mut b"OTU6\td__Bacteria;p__Proteobacteria\t0.70\n".to_vec());
        let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);

        let mut expected: Vec<u8> = Vec::new();
        expected.append(&mut b"2\tBacteria\tFirmicutes\tBacilli\n".to_vec());
        expected.append(&mut b"1\tBacteria\tProteobacteria\tGammaproteobacteria\n".to_vec());
        expected.append(&mut b"2\tBacteria\tProteobacteria\tUnclassified\n".to_vec());
        expected.append(&mut b"1\tBacteria\tFirmicutes\tUnclassified\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        krona_from_read_to_write(&mut input, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn krona_from_read_to_write_archaea_writes_nothing() {
        use super::krona_from_read_to_write;
        use super::TableError;
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"OTU1\td__Bacteria;p__Firmicutes;c__Bacilli\t0.99\n".to_vec());
        input_bytes.append(&mut b"OTU2\td__Archaea;p__Halobacteriota;c__Methanomicrobia\t0.99\n".to_vec());
        let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);

        let mut got: Vec<u8> = Vec::new();
        let err = krona_from_read_to_write(&mut input, &mut got).unwrap_err();

        assert_eq!(err.downcast_ref::<TableError>(), Some(&TableError::DisallowedDomain { found: "Archaea".to_string() }));
        assert!(got.is_empty());
    }

    #[test]
    fn krona_from_read_to_write_empty_domain_writes_nothing() {
        use super::krona_from_read_to_write;
        use super::TableError;
        use std::io::Cursor;

        let mut input: Cursor<Vec<u8>> = Cursor::new(b"OTU1\td__;p__Firmicutes;c__Bacilli\t0.9\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        let err = krona_from_read_to_write(&mut input, &mut got).unwrap_err();

        assert_eq!(err.downcast_ref::<TableError>(), Some(&TableError::DisallowedDomain { found: "".to_string() }));
        assert!(got.is_empty());
    }

    #[test]
    fn taxon_term2gene_from_read_to_write_empty_name() {
        use super::taxon_term2gene_from_read_to_write;
        use super::Rank;
        use std::io::Cursor;

        let mut input: Cursor<Vec<u8>> = Cursor::new(b"OTU1\td__Bacteria;g__\t0.9\nOTU2\td__Bacteria\t0.9\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        taxon_term2gene_from_read_to_write(Rank::Genus, &mut input, &mut got).unwrap();

        assert_eq!(got, b"Unclassified\tOTU2\n\tOTU1\n".to_vec());
    }

    #[test]
    fn krona_from_read_to_write_conflicting_phylum() {
        use super::krona_from_read_to_write;
        use super::{Rank, TableError};
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"f1\td__Bacteria;p__X;c__Y\t0.9\n".to_vec());
        input_bytes.append(&mut b"f2\td__Bacteria;p__Z;c__Y\t0.9\n".to_vec());
        let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);

        let mut got: Vec<u8> = Vec::new();
        let err = krona_from_read_to_write(&mut input, &mut got).unwrap_err();

        let expected = TableError::RankConflict { class: "Y".to_string(), rank: Rank::Phylum, previous: "X".to_string(), found: "Z".to_string() };
        assert_eq!(err.downcast_ref::<TableError>(), Some(&expected));
        assert!(got.is_empty());
    }

    #[test]
    fn krona_from_read_to_write_is_repeatable() {
        use super::krona_from_read_to_write;
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"OTU9\td__Bacteria;p__Actinobacteriota;c__Actinomycetia\t0.99\n".to_vec());
        input_bytes.append(&mut b"OTU2\td__Bacteria;p__Firmicutes\t0.91\n".to_vec());
        input_bytes.append(&mut b"OTU5\td__Bacteria;p__Firmicutes;c__Bacilli\t0.95\n".to_vec());
        input_bytes.append(&mut b"OTU1\td__Bacteria\t0.50\n".to_vec());

        let mut first: Vec<u8> = Vec::new();
        krona_from_read_to_write(&mut Cursor::new(input_bytes.clone()), &mut first).unwrap();
        let mut second: Vec<u8> = Vec::new();
        krona_from_read_to_write(&mut Cursor::new(input_bytes), &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn krona_from_read_to_write_gzipped() {
        use super::krona_from_read_to_write;
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::{Cursor, Write};

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"OTU1\td__Bacteria;p__Firmicutes;c__Bacilli\t0.99\n").unwrap();
        encoder.write_all(b"OTU2\td__Bacteria;p__Firmicutes\t0.80\n").unwrap();
        let mut input: Cursor<Vec<u8>> = Cursor::new(encoder.finish().unwrap());

        let mut expected: Vec<u8> = Vec::new();
        expected.append(&mut b"1\tBacteria\tFirmicutes\tBacilli\n".to_vec());
        expected.append(&mut b"1\tBacteria\tFirmicutes\tUnclassified\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        krona_from_read_to_write(&mut input, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn ko_term2gene_from_read_to_write() {
        use super::ko_term2gene_from_read_to_write;
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"sequence\tK00001\tK00002\tK00003\n".to_vec());
        input_bytes.append(&mut b"ASV1\t1\t0\t0\n".to_vec());
        input_bytes.append(&mut b"ASV2\t0\t0\t4\n".to_vec());
        input_bytes.append(&mut b"ASV3\t2\t0\t1\n".to_vec());
        let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);

        let mut expected: Vec<u8> = Vec::new();
        expected.append(&mut b"K00001\tASV1\n".to_vec());
        expected.append(&mut b"K00001\tASV3\n".to_vec());
        expected.append(&mut b"K00003\tASV2\n".to_vec());
        expected.append(&mut b"K00003\tASV3\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        ko_term2gene_from_read_to_write(&mut input, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn taxon_term2gene_from_read_to_write_keeps_every_match() {
        use super::taxon_term2gene_from_read_to_write;
        use super::Rank;
        use std::io::Cursor;

        let mut input_bytes: Vec<u8> = Vec::new();
        input_bytes.append(&mut b"OTU1\td__Bacteria;p__Firmicutes;p__Firmicutes_A\t0.99\n".to_vec());
        input_bytes.append(&mut b"OTU2\td__Bacteria\t0.95\n".to_vec());
        input_bytes.append(&mut b"OTU3\td__Bacteria;p__Firmicutes\t0.80\n".to_vec());
        let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);

        let mut expected: Vec<u8> = Vec::new();
        expected.append(&mut b"Unclassified\tOTU2\n".to_vec());
        expected.append(&mut b"Firmicutes\tOTU1\n".to_vec());
        expected.append(&mut b"Firmicutes\tOTU3\n".to_vec());
        expected.append(&mut b"Firmicutes_A\tOTU1\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        taxon_term2gene_from_read_to_write(Rank::Phylum, &mut input, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn pathway_term2gene_from_read_to_write() {
        use super::pathway_term2gene_from_read_to_write;
        use std::io::Cursor;

        let mut links_bytes: Vec<u8> = Vec::new();
        links_bytes.append(&mut b"ko:K00001\tpath:map00010\n".to_vec());
        links_bytes.append(&mut b"ko:K00001\tpath:map00071\n".to_vec());
        links_bytes.append(&mut b"ko:K00002\tpath:map00010\n".to_vec());
        let mut links: Cursor<Vec<u8>> = Cursor::new(links_bytes);

        let mut kos_bytes: Vec<u8> = Vec::new();
        kos_bytes.append(&mut b"K00002\tASV2\n".to_vec());
        kos_bytes.append(&mut b"K00001\tASV1\n".to_vec());
        kos_bytes.append(&mut b"K00001\tASV2\n".to_vec());
        let mut kos: Cursor<Vec<u8>> = Cursor::new(kos_bytes);

        let mut expected: Vec<u8> = Vec::new();
        expected.append(&mut b"map00010\tASV2\n".to_vec());
        expected.append(&mut b"map00010\tASV2\n".to_vec());
        expected.append(&mut b"map00071\tASV2\n".to_vec());
        expected.append(&mut b"map00010\tASV1\n".to_vec());
        expected.append(&mut b"map00071\tASV1\n".to_vec());

        let mut got: Vec<u8> = Vec::new();
        pathway_term2gene_from_read_to_write(&mut kos, &mut links, &mut got).unwrap();

        assert_eq!(got, expected);
    }
}
