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

//! Formatters writing the aggregated tables as tab-separated plain text.
//!
//!   - [krona]: `count<TAB>domain<TAB>phylum<TAB>class` rows for Krona's `ktImportText`.
//!   - [term2gene]: `term<TAB>feature` rows for clusterProfiler's `enricher`.
//!
//! ## Usage
//!
//! ```rust
//! use enrichmaps::printer::term2gene::format_term2gene_file;
//!
//! let rows = vec![("K00001", "ASV1"), ("K00001", "ASV7")];
//!
//! let mut output: Vec<u8> = Vec::new();
//! format_term2gene_file(rows.into_iter(), &mut output).unwrap();
//!
//! assert_eq!(output, b"K00001\tASV1\nK00001\tASV7\n".to_vec());
//! ```
//!

// Format specific implementations
pub mod krona;
pub mod term2gene;
