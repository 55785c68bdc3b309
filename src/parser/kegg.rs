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
use crate::parser::split_columns;

type E = Box<dyn std::error::Error>;

const KO_PREFIX: &str = "ko:";
const PATHWAY_PREFIX: &str = "path:";

/// Parse a line from the KEGG KO to pathway links
///
/// Reads a `ko:K00001<TAB>path:map00010` line as returned by
/// `https://rest.kegg.jp/link/pathway/ko` and returns the `(ko, pathway)`
/// pair with the `ko:` and `path:` prefixes removed. Values without the
/// prefix are returned as is.
///
pub fn read_ko_link_line(
    line: &str,
    line_no: usize,
) -> Result<(String, String), E> {
    let columns = split_columns(line, line_no, 2)?;
    let ko = columns[0].strip_prefix(KO_PREFIX).unwrap_or(columns[0]);
    let pathway = columns[1].strip_prefix(PATHWAY_PREFIX).unwrap_or(columns[1]);
    Ok((ko.to_string(), pathway.to_string()))
}

/// Parse a line from a KO TERM2GENE table
///
/// Reads a `K00001<TAB>feature` line and returns the `(ko, feature)` pair.
///
pub fn read_feature_ko_line(
    line: &str,
    line_no: usize,
) -> Result<(String, String), E> {
    let columns = split_columns(line, line_no, 2)?;
    Ok((columns[0].to_string(), columns[1].to_string()))
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_ko_link_line() {
        use super::read_ko_link_line;

        let got = read_ko_link_line("ko:K00001\tpath:map00010", 1).unwrap();
        let expected = ("K00001".to_string(), "map00010".to_string());

        assert_eq!(got, expected);
    }

    #[test]
    fn read_ko_link_line_without_prefixes() {
        use super::read_ko_link_line;

        let got = read_ko_link_line("K00001\tko00010", 1).unwrap();
        let expected = ("K00001".to_string(), "ko00010".to_string());

        assert_eq!(got, expected);
    }

    #[test]
    fn read_ko_link_line_single_column() {
        use crate::TableError;
        use super::read_ko_link_line;

        let got = read_ko_link_line("ko:K00001", 12).unwrap_err();
        let expected = TableError::MalformedRow{ line_no: 12, line: "ko:K00001".to_string(), min_columns: 2 };

        assert_eq!(got.downcast_ref::<TableError>(), Some(&expected));
    }

    #[test]
    fn read_feature_ko_line() {
        use super::read_feature_ko_line;

        let got = read_feature_ko_line("K02588\t5f0a8c3e9d", 1).unwrap();
        let expected = ("K02588".to_string(), "5f0a8c3e9d".to_string());

        assert_eq!(got, expected);
    }
}
