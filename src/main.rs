// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface for the third-party page renderer.
//!
//! The CLI reads a YAML package listing, renders the fixed Markdown page for
//! the selected language, and writes it to the requested output path. An
//! invalid language selector is rejected during argument parsing, before any
//! file is touched.

use std::{io, path::PathBuf, process};

use clap::Parser;
use tppr::{Error, Language, load_packages, render_page, write_page};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering the third-party packages page.
#[derive(Debug, Parser)]
#[command(name = "tppr", version, about = "Render the third-party packages page")]
struct Cli {
    /// Path to the input YAML file listing third-party packages.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to the output file for the rendered page.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Documentation ecosystem the page is rendered for.
    #[arg(long = "language", value_name = "LANGUAGE", default_value_t = Language::Python)]
    language: Language
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Installs the compact stderr subscriber, honoring `RUST_LOG` when set.
fn init_tracing() {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from package loading, normalization, and
/// page output.
fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    run_render(&cli)
}

fn run_render(cli: &Cli) -> Result<(), Error> {
    let packages = load_packages(&cli.input)?;
    info!("Loaded {} packages for the {} page", packages.len(), cli.language);

    let page = render_page(&packages, cli.language);
    write_page(&cli.output, &page)?;
    info!("Page written successfully");

    Ok(())
}
