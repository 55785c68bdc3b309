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

type E = Box<dyn std::error::Error>;

/// Format a single TERM2GENE row
///
/// Writes `term<TAB>feature` to `conn`.
///
pub fn format_term2gene_line<W: Write>(
    term: &str,
    feature: &str,
    conn: &mut W,
) -> Result<(), E> {
    let mut formatted: String = String::with_capacity(term.len() + feature.len() + 2);
    formatted += term;
    formatted += "\t";
    formatted += feature;
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format many TERM2GENE rows
///
/// Writes every `(term, feature)` pair from `rows` to `conn` in iteration
/// order.
///
pub fn format_term2gene_file<'a, I, W>(
    rows: I,
    conn: &mut W,
) -> Result<(), E>
where I: Iterator<Item = (&'a str, &'a str)>,
      W: Write {
    for (term, feature) in rows {
        format_term2gene_line(term, feature, conn)?;
    }
    conn.flush()?;
    Ok(())
}
