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
use std::collections::HashMap;

use indexmap::map::IndexMap;

use crate::ACCEPTED_DOMAIN;
use crate::Rank;
use crate::TableError;
use crate::TaxonomyRecord;
use crate::UNCLASSIFIED;

type E = Box<dyn std::error::Error>;

/// Domain, phylum and class of a single feature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KronaAssignment {
    pub domain: String,
    pub phylum: String,
    pub class: String,
}

impl KronaAssignment {
    /// Resolves the ranks of `record`, the last token of each rank winning.
    ///
    /// Missing ranks become [UNCLASSIFIED]. Terminates with a
    /// [DisallowedDomain](TableError::DisallowedDomain) if any domain token,
    /// including one with an empty name, is not [ACCEPTED_DOMAIN].
    pub fn from_record(
        record: &TaxonomyRecord,
    ) -> Result<Self, TableError> {
        if let Some(found) = record.tokens.iter().find(|token| token.rank == Rank::Domain && token.name != ACCEPTED_DOMAIN) {
            return Err(TableError::DisallowedDomain{ found: found.name.clone() })
        }

        let resolve = |rank: Rank| record.last_name_at(rank).unwrap_or(UNCLASSIFIED).to_string();
        Ok(KronaAssignment{
            domain: resolve(Rank::Domain),
            phylum: resolve(Rank::Phylum),
            class: resolve(Rank::Class),
        })
    }
}

/// One line of Krona text output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KronaRow<'a> {
    pub count: usize,
    pub domain: &'a str,
    pub phylum: &'a str,
    pub class: &'a str,
}

/// Feature counts per class.
///
/// Classified features are counted per class name. Each class is tied to the
/// phylum and domain of the first feature seen with it. Features without a
/// class are counted per (domain, phylum) pair.
#[derive(Clone, Debug, Default)]
pub struct KronaCounts {
    classified: IndexMap<String, usize>,
    class_to_phylum: HashMap<String, String>,
    class_to_domain: HashMap<String, String>,
    unclassified: IndexMap<(String, String), usize>,
}

/// Records `value` as the `rank` of `class`, or checks it against the recorded one.
fn check_consistent(
    table: &mut HashMap<String, String>,
    class: &str,
    rank: Rank,
    value: &str,
) -> Result<(), TableError> {
    match table.get(class) {
        Some(previous) if previous != value => Err(TableError::RankConflict{
            class: class.to_string(),
            rank,
            previous: previous.clone(),
            found: value.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            table.insert(class.to_string(), value.to_string());
            Ok(())
        },
    }
}

impl KronaCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the counts from taxonomy records.
    ///
    /// A feature listed more than once is counted once, using its last
    /// taxonomy but its first position. All records are read before counting.
    pub fn from_records<I>(
        records: I,
    ) -> Result<Self, E>
    where I: Iterator<Item = Result<TaxonomyRecord, E>> {
        let mut assignments: IndexMap<String, KronaAssignment> = IndexMap::new();
        for record in records {
            let record = record?;
            let assignment = KronaAssignment::from_record(&record)?;
            if assignments.insert(record.feature.clone(), assignment).is_some() {
                log::debug!("feature {} listed more than once, keeping the last taxonomy", record.feature);
            }
        }

        let mut counts = KronaCounts::new();
        for assignment in assignments.values() {
            counts.add(assignment)?;
        }
        Ok(counts)
    }

    /// Counts one feature.
    pub fn add(
        &mut self,
        assignment: &KronaAssignment,
    ) -> Result<(), TableError> {
        if assignment.class == UNCLASSIFIED {
            let key = (assignment.domain.clone(), assignment.phylum.clone());
            *self.unclassified.entry(key).or_insert(0) += 1;
            return Ok(())
        }

        check_consistent(&mut self.class_to_phylum, &assignment.class, Rank::Phylum, &assignment.phylum)?;
        check_consistent(&mut self.class_to_domain, &assignment.class, Rank::Domain, &assignment.domain)?;

        *self.classified.entry(assignment.class.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Number of distinct classes.
    pub fn n_classes(&self) -> usize {
        self.classified.len()
    }

    /// Total number of features counted.
    pub fn n_features(&self) -> usize {
        self.classified.values().sum::<usize>() + self.unclassified.values().sum::<usize>()
    }

    /// Classified rows in first-seen order, then unclassified rows in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = KronaRow<'_>> {
        let classified = self.classified.iter().map(move |(class, count)| {
            KronaRow{
                count: *count,
                domain: &self.class_to_domain[class],
                phylum: &self.class_to_phylum[class],
                class,
            }
        });
        let unclassified = self.unclassified.iter().map(|((domain, phylum), count)| {
            KronaRow{ count: *count, domain, phylum, class: UNCLASSIFIED }
        });
        classified.chain(unclassified)
    }
}
