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
use indexmap::map::IndexMap;
use indexmap::set::IndexSet;

use crate::parser::matrix::MatrixReader;
use crate::parser::matrix::MatrixRow;

use std::io::BufRead;

type E = Box<dyn std::error::Error>;

/// Features carrying each KO, both in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct KoFeatures {
    kos: IndexMap<String, IndexSet<String>>,
}

impl KoFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<R: BufRead>(
        mut reader: MatrixReader<R>,
    ) -> Result<Self, E> {
        let mut kos = KoFeatures::new();
        let header = reader.kos().to_vec();
        for row in reader.by_ref() {
            kos.add(&header, &row?);
        }
        Ok(kos)
    }

    /// Adds `row.feature` to every KO in `header` with a positive abundance.
    ///
    /// `header` must be at least as long as `row.abundances`.
    pub fn add(
        &mut self,
        header: &[String],
        row: &MatrixRow,
    ) {
        row.abundances.iter().zip(header.iter()).for_each(|(abundance, ko)| {
            if *abundance > 0 {
                self.kos.entry(ko.clone()).or_default().insert(row.feature.clone());
            }
        });
    }

    /// Number of KOs with at least one feature.
    pub fn n_kos(&self) -> usize {
        self.kos.len()
    }

    /// `(ko, feature)` pairs, grouped by KO in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.kos.iter().flat_map(|(ko, features)| {
            features.iter().map(move |feature| (ko.as_str(), feature.as_str()))
        })
    }
}
