// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `coffee-env` - inspect and export environment descriptors.
//!
//! ```text
//! coffee-env [show]          print the descriptor compiled into this build
//! coffee-env load <FILE>     load, validate and print a descriptor file
//! coffee-env export [DIR]    write the compiled descriptor to DIR/environment.json
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use coffee_shop_env::config::{DEFAULT_FILE_NAME, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV};
use coffee_shop_env::error::ConfigResult;
use coffee_shop_env::{environment, file, identity};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inspect and export coffee shop environment descriptors.
#[derive(Parser, Debug)]
#[command(name = "coffee-env", version, about, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand (defaults to `show`).
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the descriptor compiled into this build.
    Show,
    /// Load, validate and print a descriptor file.
    Load {
        /// Descriptor file to read.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Write the compiled descriptor to DIR/environment.json.
    Export {
        /// Target directory.
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays pipeable JSON
    match env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(command: Commands) -> ConfigResult<()> {
    match command {
        Commands::Show => {
            let env = environment();
            info!(
                production = env.production,
                issuer = %identity::issuer(&env.auth0),
                "Active environment descriptor"
            );
            println!("{}", file::to_json_string(env)?);
        }
        Commands::Load { file: path } => {
            let env = file::load(&path)?;
            println!("{}", file::to_json_string(&env)?);
        }
        Commands::Export { dir } => {
            let path = dir.join(DEFAULT_FILE_NAME);
            file::save(environment(), &path)?;
            info!(path = %path.display(), "Exported environment descriptor");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command.unwrap_or(Commands::Show)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, code = e.error_code(), "coffee-env failed");
            ExitCode::FAILURE
        }
    }
}
