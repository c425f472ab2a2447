// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! jsxnctl - inspect and validate JSON documents against strict record shapes
//!
//! # Usage
//!
//! ```bash
//! # List the fields a document declares
//! jsxnctl fields shape.json
//!
//! # Print the empty template record
//! jsxnctl template shape.json --name users --pretty
//!
//! # Check records (JSON array or JSON Lines) against a shape
//! jsxnctl validate --shape shape.json records.jsonl
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;

#[derive(Parser)]
#[command(name = "jsxnctl")]
#[command(about = "Strict record shapes derived from JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config file with defaults (shape_name, pretty, log_level)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print `index name` for every field of the derived shape
    Fields {
        /// Shape document (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Shape name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the template record of the derived shape
    Template {
        /// Shape document (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Shape name
        #[arg(short, long)]
        name: Option<String>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Build every record strictly against a shape
    Validate {
        /// Shape document
        #[arg(long, value_name = "FILE")]
        shape: PathBuf,

        /// Records: a JSON array of objects or JSON Lines (`-` for stdin)
        #[arg(value_name = "RECORDS")]
        records: PathBuf,

        /// Shape name
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn build_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut builder = Config::builder().base(base);
    match &cli.command {
        Commands::Fields { name, .. } | Commands::Validate { name, .. } => {
            if let Some(name) = name {
                builder = builder.shape_name(name.clone());
            }
        }
        Commands::Template { name, pretty, .. } => {
            if let Some(name) = name {
                builder = builder.shape_name(name.clone());
            }
            if *pretty {
                builder = builder.pretty(true);
            }
        }
    }
    if cli.verbose {
        builder = builder.log_level("jsxnctl=debug,jsxn=debug");
    }
    Ok(builder.build())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("jsxnctl=info,jsxn=warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        shape_name = %config.shape_name,
        pretty = config.pretty,
        "jsxnctl configured"
    );

    match &cli.command {
        Commands::Fields { input, .. } => {
            let document = commands::read_source(input)?;
            print!("{}", commands::fields(&document, &config)?);
        }
        Commands::Template { input, .. } => {
            let document = commands::read_source(input)?;
            print!("{}", commands::template(&document, &config)?);
        }
        Commands::Validate { shape, records, .. } => {
            let shape_document = commands::read_source(shape)?;
            let records = commands::read_source(records)?;
            let validation = commands::validate(&shape_document, &records, &config)?;
            print!("{}", validation.report);
            if !validation.is_ok() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
