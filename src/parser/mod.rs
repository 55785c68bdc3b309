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

//! Readers for the supported tab-separated input tables.
//!
//! Every table is read one line at a time with [TableLines], which trims
//! surrounding whitespace from each line and tracks the 1-based line number
//! for error messages. The format specific line parsers live in:
//!
//!   - [taxonomy]: GTDB taxonomy tables (`feature<TAB>d__...;p__...<TAB>confidence`).
//!   - [matrix]: PICRUSt2 KO abundance matrices.
//!   - [kegg]: KEGG KO to pathway links and KO TERM2GENE tables.
//!
//! Inputs may be gzip-compressed, see [decompress].
//!

// Format specific implementations
pub mod kegg;
pub mod matrix;
pub mod taxonomy;

use crate::TableError;

use std::io::BufRead;
use std::io::BufReader;
use std::io::Cursor;
use std::io::ErrorKind;
use std::io::Read;

use flate2::read::MultiGzDecoder;

type E = Box<dyn std::error::Error>;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Wraps `conn` in a buffered reader, inflating it if it is gzip-compressed.
///
/// Compression is detected from the first two bytes so that the file name
/// does not matter. Short reads are retried until both bytes are in or the
/// input ends.
pub fn decompress<'a, R: Read + 'a>(
    mut conn: R,
) -> Result<Box<dyn BufRead + 'a>, E> {
    let mut magic = [0_u8; 2];
    let mut n_read = 0;
    while n_read < magic.len() {
        match conn.read(&mut magic[n_read..]) {
            Ok(0) => break,
            Ok(n) => n_read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let reader = Cursor::new(magic[..n_read].to_vec()).chain(conn);
    if magic[..n_read] == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(BufReader::new(reader)))
    }
}

/// Splits a trimmed line on tabs and checks that it has at least `min_columns` fields.
pub fn split_columns<'a>(
    line: &'a str,
    line_no: usize,
    min_columns: usize,
) -> Result<Vec<&'a str>, TableError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < min_columns {
        return Err(TableError::MalformedRow { line_no, line: line.to_string(), min_columns })
    }
    Ok(columns)
}

/// Iterates over the lines of a table as `(line_no, line)`.
pub struct TableLines<R: BufRead> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> TableLines<R> {
    pub fn new(
        reader: R,
    ) -> Self {
        TableLines{ reader, line_no: 0 }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TableLines<R> {
    type Item = Result<(usize, String), E>;

    fn next(
        &mut self,
    ) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(Ok((self.line_no, line.trim().to_string())))
            },
            Err(e) => Some(Err(e.into())),
        }
    }
}
