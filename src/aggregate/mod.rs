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

//! Insertion-ordered mapping tables built from parsed input rows.
//!
//! Each table remembers the order in which its keys were first seen, and the
//! printers write rows in that order:
//!
//!   - [krona::KronaCounts]: features per class, with an unclassified bucket per domain and phylum.
//!   - [rank::RankGroups]: features per taxon at one selected rank.
//!   - [ko::KoFeatures]: features per KO from an abundance matrix.
//!   - [pathway::FeaturePathways]: pathways per feature, joined through KOs.
//!

pub mod ko;
pub mod krona;
pub mod pathway;
pub mod rank;
