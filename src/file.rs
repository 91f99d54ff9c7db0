// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Page output helpers.
//!
//! The rendered document is written in one pass through a buffered writer.
//! Writing only starts once the full page string exists, so a failed run
//! never leaves a partially rendered page behind a successful exit status.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use tracing::info;

use crate::error::{self, Error};

/// Writes the rendered page to `path`, replacing any existing file.
///
/// Parent directories are not created; the destination directory must
/// already exist.
///
/// # Errors
///
/// Returns [`Error::PageIo`] when the file cannot be created, written, or
/// flushed.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use tppr::{Language, load_packages, render_page, write_page};
///
/// # fn main() -> Result<(), tppr::Error> {
/// let packages = load_packages(Path::new("packages.yml"))?;
/// let page = render_page(&packages, Language::Python);
/// write_page(Path::new("docs/third_party.md"), &page)?;
/// # Ok(())
/// # }
/// ```
pub fn write_page(path: &Path, contents: &str) -> Result<(), Error> {
    info!("Writing page to {}", path.display());
    let file = File::create(path).map_err(|source| error::page_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::page_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::page_io_error(path, source))
}
