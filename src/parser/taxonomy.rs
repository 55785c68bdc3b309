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
use std::io::BufRead;

use crate::Rank;
use crate::TaxonToken;
use crate::TaxonomyRecord;
use crate::parser::TableLines;
use crate::parser::split_columns;

type E = Box<dyn std::error::Error>;

/// Separator between rank tokens in a taxonomy string.
const TOKEN_SEPARATOR: char = ';';

/// Separator between a rank prefix and the taxon name.
const RANK_DELIMITER: &str = "__";

/// Parse a single `rank__name` token.
///
/// The name ends at the next `__` if the token contains more than one.
/// Returns None for tokens without a recognised rank prefix.
///
pub fn read_taxon_token(
    token: &str,
) -> Option<TaxonToken> {
    let (prefix, rest) = token.trim().split_once(RANK_DELIMITER)?;
    let rank = Rank::from_prefix(prefix)?;
    let name = rest.split(RANK_DELIMITER).next().unwrap_or_default();
    Some(TaxonToken{ rank, name: name.to_string() })
}

/// Parse a line from a GTDB taxonomy table
///
/// Reads `feature<TAB>taxonomy` and ignores any further columns. Terminates
/// with a [MalformedRow](crate::TableError::MalformedRow) if the line has
/// fewer than two columns.
///
pub fn read_taxonomy_line(
    line: &str,
    line_no: usize,
) -> Result<TaxonomyRecord, E> {
    let columns = split_columns(line, line_no, 2)?;

    let tokens: Vec<TaxonToken> = columns[1]
        .split(TOKEN_SEPARATOR)
        .filter_map(read_taxon_token)
        .collect();

    Ok(TaxonomyRecord{ feature: columns[0].to_string(), tokens })
}

/// Iterates over the records of a GTDB taxonomy table.
pub struct TaxonomyReader<R: BufRead> {
    lines: TableLines<R>,
}

impl<R: BufRead> TaxonomyReader<R> {
    pub fn new(
        reader: R,
    ) -> Self {
        TaxonomyReader{ lines: TableLines::new(reader) }
    }

    pub fn line_no(&self) -> usize {
        self.lines.line_no()
    }
}

impl<R: BufRead> Iterator for TaxonomyReader<R> {
    type Item = Result<TaxonomyRecord, E>;

    fn next(
        &mut self,
    ) -> Option<Self::Item> {
        let (line_no, line) = match self.lines.next()? {
            Ok(x) => x,
            Err(e) => return Some(Err(e)),
        };
        Some(read_taxonomy_line(&line, line_no))
    }
}
