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

use crate::parser::TableLines;
use crate::parser::kegg::read_feature_ko_line;
use crate::parser::kegg::read_ko_link_line;

use std::io::BufRead;

type E = Box<dyn std::error::Error>;

/// KEGG pathways linked to each KO, in file order with duplicates kept.
#[derive(Clone, Debug, Default)]
pub struct KoPathways {
    pathways: IndexMap<String, Vec<String>>,
}

impl KoPathways {
    pub fn from_read<R: BufRead>(
        reader: R,
    ) -> Result<Self, E> {
        let mut res = KoPathways::default();
        for line in TableLines::new(reader) {
            let (line_no, line) = line?;
            let (ko, pathway) = read_ko_link_line(&line, line_no)?;
            res.insert(ko, pathway);
        }
        Ok(res)
    }

    pub fn insert(
        &mut self,
        ko: String,
        pathway: String,
    ) {
        self.pathways.entry(ko).or_default().push(pathway);
    }

    pub fn get(
        &self,
        ko: &str,
    ) -> Option<&[String]> {
        self.pathways.get(ko).map(|x| x.as_slice())
    }

    pub fn n_kos(&self) -> usize {
        self.pathways.len()
    }
}

/// KOs associated with each feature, in file order with duplicates kept.
#[derive(Clone, Debug, Default)]
pub struct FeatureKos {
    kos: IndexMap<String, Vec<String>>,
}

impl FeatureKos {
    /// Reads a KO TERM2GENE table, `KO<TAB>feature` per line.
    pub fn from_read<R: BufRead>(
        reader: R,
    ) -> Result<Self, E> {
        let mut res = FeatureKos::default();
        for line in TableLines::new(reader) {
            let (line_no, line) = line?;
            let (ko, feature) = read_feature_ko_line(&line, line_no)?;
            res.insert(feature, ko);
        }
        Ok(res)
    }

    pub fn insert(
        &mut self,
        feature: String,
        ko: String,
    ) {
        self.kos.entry(feature).or_default().push(ko);
    }

    pub fn n_features(&self) -> usize {
        self.kos.len()
    }
}

/// Pathways reachable from each feature through its KOs.
#[derive(Clone, Debug, Default)]
pub struct FeaturePathways {
    pathways: IndexMap<String, Vec<String>>,
    /// Feature to KO associations whose KO has no pathway.
    pub n_unlinked: usize,
}

impl FeaturePathways {
    pub fn n_features(&self) -> usize {
        self.pathways.len()
    }

    /// `(pathway, feature)` pairs in join order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pathways.iter().flat_map(|(feature, pathways)| {
            pathways.iter().map(move |pathway| (pathway.as_str(), feature.as_str()))
        })
    }
}

/// Joins features to pathways through their KOs.
///
/// Iterates features in first-seen order, then each feature's KOs, then the
/// pathways of each KO. KOs without pathways are skipped and features left
/// without any pathway are not included. Duplicate pathways are kept.
pub fn join(
    feature_kos: &FeatureKos,
    ko_pathways: &KoPathways,
) -> FeaturePathways {
    let mut res = FeaturePathways::default();
    for (feature, kos) in feature_kos.kos.iter() {
        for ko in kos {
            let Some(pathways) = ko_pathways.get(ko) else {
                res.n_unlinked += 1;
                continue
            };
            res.pathways.entry(feature.clone()).or_default().extend(pathways.iter().cloned());
        }
    }
    if res.n_unlinked > 0 {
        log::debug!("{} feature-KO associations have no KEGG pathway", res.n_unlinked);
    }
    res
}
