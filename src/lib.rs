// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Utilities for rendering the third-party packages page of a documentation
//! site.
//!
//! The library exposes helpers that load YAML package listings, normalize
//! them into typed records, and render a fixed Markdown page ordered by
//! weekly downloads. All public APIs are documented with invariants, error
//! semantics, and minimal examples to facilitate integration in
//! documentation build tooling.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tppr::{Language, load_packages, render_page, write_page};
//!
//! # fn main() -> Result<(), tppr::Error> {
//! let packages = load_packages(Path::new("packages.yml"))?;
//! let page = render_page(&packages, Language::Python);
//! write_page(Path::new("docs/third_party.md"), &page)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod file;
mod language;
mod normalizer;
mod render;

pub use config::PackageEntry;
pub use error::{Error, io_error, page_io_error};
pub use file::write_page;
pub use language::Language;
pub use normalizer::{PackageRecord, load_packages, parse_packages};
pub use render::render_page;
