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

use crate::Rank;
use crate::TaxonomyRecord;
use crate::UNCLASSIFIED;

type E = Box<dyn std::error::Error>;

/// Features grouped by their taxon at a single rank.
///
/// The [UNCLASSIFIED] group always exists and comes first. A feature is
/// added once for every token of the selected rank in its taxonomy, so it can
/// belong to several groups or appear twice in one. A token with an empty
/// name (`g__`) groups the feature under an empty taxon name.
#[derive(Clone, Debug)]
pub struct RankGroups {
    rank: Rank,
    groups: IndexMap<String, Vec<String>>,
}

impl RankGroups {
    pub fn new(
        rank: Rank,
    ) -> Self {
        let mut groups = IndexMap::new();
        groups.insert(UNCLASSIFIED.to_string(), Vec::new());
        RankGroups{ rank, groups }
    }

    pub fn from_records<I>(
        rank: Rank,
        records: I,
    ) -> Result<Self, E>
    where I: Iterator<Item = Result<TaxonomyRecord, E>> {
        let mut groups = RankGroups::new(rank);
        for record in records {
            groups.add(&record?);
        }
        Ok(groups)
    }

    pub fn add(
        &mut self,
        record: &TaxonomyRecord,
    ) {
        let mut found = false;
        for token in record.tokens.iter().filter(|token| token.rank == self.rank) {
            self.groups.entry(token.name.clone()).or_default().push(record.feature.clone());
            found = true;
        }
        if !found {
            self.groups[UNCLASSIFIED].push(record.feature.clone());
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Number of groups with at least one feature.
    pub fn n_taxa(&self) -> usize {
        self.groups.values().filter(|features| !features.is_empty()).count()
    }

    /// `(taxon, feature)` pairs, grouped by taxon in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|(taxon, features)| {
            features.iter().map(move |feature| (taxon.as_str(), feature.as_str()))
        })
    }
}
