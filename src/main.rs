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
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::CommandFactory;
use clap::Parser;

use enrichmaps::Rank;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) -> Result<(), E> {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()?;
    Ok(())
}

fn open_input(path: &Path) -> Result<File, E> {
    File::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e).into())
}

fn create_output(path: &Path) -> Result<BufWriter<File>, E> {
    let f = File::create(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    Ok(BufWriter::new(f))
}

fn run(cli: &cli::Cli) -> Result<(), E> {
    // Subcommands:
    match &cli.command {
        // Krona
        Some(cli::Commands::Krona {
            input_file,
            out_file,
            ..
        }) => {

            let mut conn_in = open_input(input_file)?;
            let counts = enrichmaps::read_krona_counts(&mut conn_in)?;
            log::info!("{} features in {} classes found in {}", counts.n_features(), counts.n_classes(), input_file.display());

            let mut conn_out = create_output(out_file)?;
            enrichmaps::printer::krona::format_krona_file(&counts, &mut conn_out)?;
        },

        // KO TERM2GENE
        Some(cli::Commands::KoTerm2gene {
            input_file,
            out_file,
            ..
        }) => {

            let mut conn_in = open_input(input_file)?;
            let kos = enrichmaps::read_ko_features(&mut conn_in)?;
            log::info!("{} KOs found in {}", kos.n_kos(), input_file.display());

            let mut conn_out = create_output(out_file)?;
            enrichmaps::printer::term2gene::format_term2gene_file(kos.rows(), &mut conn_out)?;
        },

        // Taxon TERM2GENE
        Some(cli::Commands::TaxonTerm2gene {
            input_file,
            out_file,
            rank,
            ..
        }) => {

            let rank = rank.parse::<Rank>()?;

            let mut conn_in = open_input(input_file)?;
            let groups = enrichmaps::read_rank_groups(rank, &mut conn_in)?;
            log::info!("{} taxa at {} level found in {}", groups.n_taxa(), groups.rank(), input_file.display());

            let mut conn_out = create_output(out_file)?;
            enrichmaps::printer::term2gene::format_term2gene_file(groups.rows(), &mut conn_out)?;
        },

        // Pathway TERM2GENE
        Some(cli::Commands::PathwayTerm2gene {
            feature_ko_file,
            ko_pathway_file,
            out_file,
            ..
        }) => {

            let mut feature_ko_conn = open_input(feature_ko_file)?;
            let mut ko_pathway_conn = open_input(ko_pathway_file)?;
            let pathways = enrichmaps::read_feature_pathways(&mut feature_ko_conn, &mut ko_pathway_conn)?;
            log::info!("{} features linked to KEGG pathways", pathways.n_features());

            let mut conn_out = create_output(out_file)?;
            enrichmaps::printer::term2gene::format_term2gene_file(pathways.rows(), &mut conn_out)?;
        },

        None => {
            cli::Cli::command().print_help()?;
            return Err("no subcommand given".into())
        },
    }
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();

    if let Some(command) = &cli.command {
        if let Err(e) = init_log(if command.verbose() { 3 } else { 2 }) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        // No logger without a subcommand.
        if !log::log_enabled!(log::Level::Error) {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
