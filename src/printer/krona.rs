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
use std::io::Write;

use crate::aggregate::krona::KronaCounts;
use crate::aggregate::krona::KronaRow;

type E = Box<dyn std::error::Error>;

/// Format a single row of Krona text input
///
/// Writes `count<TAB>domain<TAB>phylum<TAB>class` to `conn`.
///
pub fn format_krona_line<W: Write>(
    row: &KronaRow,
    conn: &mut W,
) -> Result<(), E> {
    let separator: char = '\t';
    let mut formatted: String = row.count.to_string();
    for field in [row.domain, row.phylum, row.class] {
        formatted.push(separator);
        formatted += field;
    }
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format all rows of `counts` as Krona text input
///
/// Classified classes are written first, followed by the unclassified
/// buckets.
///
pub fn format_krona_file<W: Write>(
    counts: &KronaCounts,
    conn: &mut W,
) -> Result<(), E> {
    for row in counts.rows() {
        format_krona_line(&row, conn)?;
    }
    conn.flush()?;
    Ok(())
}
