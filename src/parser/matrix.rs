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
use std::num::IntErrorKind;

use crate::TableError;
use crate::parser::TableLines;
use crate::parser::split_columns;

type E = Box<dyn std::error::Error>;

/// A data row from a KO abundance matrix.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatrixRow {
    pub feature: String,
    /// One abundance per KO column, in header order. May be shorter than the header.
    pub abundances: Vec<i64>,
}

/// Parse the header line of a KO abundance matrix
///
/// Returns the KO identifiers, skipping the first column that names the
/// feature column.
///
pub fn read_matrix_header(
    line: &str,
) -> Vec<String> {
    line.split('\t').skip(1).map(|ko| ko.to_string()).collect()
}

/// Parse one abundance cell
///
/// Integers outside the range of i64 saturate to i64::MAX or i64::MIN since
/// only the sign of an abundance is used.
///
pub fn read_abundance(
    value: &str,
    line_no: usize,
) -> Result<i64, TableError> {
    match value.parse::<i64>() {
        Ok(abundance) => Ok(abundance),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(TableError::InvalidAbundance{ line_no, value: value.to_string() }),
        },
    }
}

/// Parse a data line from a KO abundance matrix
///
/// Terminates with a [MalformedRow](TableError::MalformedRow) if the line has
/// more abundance columns than `n_kos`, and with an
/// [InvalidAbundance](TableError::InvalidAbundance) if a cell is not an
/// integer.
///
pub fn read_matrix_line(
    line: &str,
    line_no: usize,
    n_kos: usize,
) -> Result<MatrixRow, E> {
    let columns = split_columns(line, line_no, 1)?;
    if columns.len() > n_kos + 1 {
        return Err(Box::new(TableError::MalformedRow{ line_no, line: line.to_string(), min_columns: n_kos + 1 }))
    }

    let abundances = columns[1..].iter()
        .map(|value| read_abundance(value, line_no))
        .collect::<Result<Vec<i64>, TableError>>()?;

    Ok(MatrixRow{ feature: columns[0].to_string(), abundances })
}

/// Iterates over the data rows of a KO abundance matrix.
///
/// The header line is consumed by [MatrixReader::new].
pub struct MatrixReader<R: BufRead> {
    lines: TableLines<R>,
    kos: Vec<String>,
}

impl<R: BufRead> MatrixReader<R> {
    pub fn new(
        reader: R,
    ) -> Result<Self, E> {
        let mut lines = TableLines::new(reader);
        let kos = match lines.next() {
            Some(header) => read_matrix_header(&header?.1),
            None => Vec::new(),
        };
        Ok(MatrixReader{ lines, kos })
    }

    /// KO identifiers from the header, in column order.
    pub fn kos(&self) -> &[String] {
        &self.kos
    }
}

impl<R: BufRead> Iterator for MatrixReader<R> {
    type Item = Result<MatrixRow, E>;

    fn next(
        &mut self,
    ) -> Option<Self::Item> {
        let (line_no, line) = match self.lines.next()? {
            Ok(x) => x,
            Err(e) => return Some(Err(e)),
        };
        Some(read_matrix_line(&line, line_no, self.kos.len()))
    }
}
