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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count features per class from a GTDB taxonomy table for Krona
    Krona {
        // GTDB taxonomy table: feature, taxonomy path, confidence
        #[arg(short = 'i', long = "input", required = true, value_name = "gtdb_taxonomy.tsv")]
        input_file: PathBuf,

        // Krona text file
        #[arg(short = 'o', long = "output", required = true, value_name = "krona.txt")]
        out_file: PathBuf,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    /// Map KOs to features from a PICRUSt2 KO abundance matrix
    KoTerm2gene {
        // PICRUSt2 KO_predicted.tsv(.gz)
        #[arg(short = 'i', long = "input", required = true, value_name = "KO_predicted.tsv")]
        input_file: PathBuf,

        // TERM2GENE output
        #[arg(short = 'o', long = "output", required = true, value_name = "term2gene.txt")]
        out_file: PathBuf,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    /// Map taxa at a rank to features from a GTDB taxonomy table
    TaxonTerm2gene {
        // GTDB taxonomy table: feature, taxonomy path, confidence
        #[arg(short = 'i', long = "input", required = true, value_name = "gtdb_taxonomy.tsv")]
        input_file: PathBuf,

        // TERM2GENE output
        #[arg(short = 'o', long = "output", required = true, value_name = "term2gene.txt")]
        out_file: PathBuf,

        // Rank letter
        #[arg(short = 'r', long = "rank", required = true, value_name = "g",
              help = "Rank to group by: g (genus), f (family), o (order), c (class) or p (phylum)")]
        rank: String,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    /// Map KEGG pathways to features through their KOs
    PathwayTerm2gene {
        // Output of ko-term2gene
        #[arg(long = "otu-ko", required = true, value_name = "otus_ko.txt")]
        feature_ko_file: PathBuf,

        // KEGG KO to pathway links from https://rest.kegg.jp/link/pathway/ko
        #[arg(long = "ko-map", required = true, value_name = "ko_pathway.txt")]
        ko_pathway_file: PathBuf,

        // TERM2GENE output
        #[arg(short = 'o', long = "output", required = true, value_name = "term2gene.txt")]
        out_file: PathBuf,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Krona { verbose, .. } => *verbose,
            Commands::KoTerm2gene { verbose, .. } => *verbose,
            Commands::TaxonTerm2gene { verbose, .. } => *verbose,
            Commands::PathwayTerm2gene { verbose, .. } => *verbose,
        }
    }
}
