// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markdown assembly for the third-party packages page.
//!
//! Rendering is a pure function over normalized records: rows are ordered by
//! weekly downloads, formatted into a fixed five column table, and spliced
//! into the page template together with the packages manifest URL for the
//! selected language. The template text is kept byte for byte identical to
//! the published page, including soft-wrap trailing spaces.

use tracing::debug;

use crate::{language::Language, normalizer::PackageRecord};

/// Header row of the packages table.
const TABLE_HEADER: &str = "| Name | GitHub URL | Description | Weekly Downloads | Stars |";
/// Alignment separator emitted directly under the header row.
const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- | --- |";

/// Fixed page body. `{packages_url}` receives the manifest URL before
/// `{library_list}` receives the table, so row text can never be rescanned
/// as a placeholder.
const PAGE_TEMPLATE: &str = r"[//]: # (This file is automatically generated using a script in docs/_scripts. Do not edit this file directly!)
# 🚀 Prebuilt Agents

LangGraph includes a prebuilt React agent. For more information on how to use it, 
check out our [how-to guides](https://langchain-ai.github.io/langgraphjs/how-tos/#prebuilt-react-agent).

If you’re looking for other prebuilt libraries, explore the community-built options 
below. These libraries can extend LangGraph's functionality in various ways.

## 📚 Available Libraries

[//]: # (This file is automatically generated using a script in docs/_scripts. Do not edit this file directly!)
{library_list}

## ✨ Contributing Your Library

Have you built an awesome open-source library using LangGraph? We'd love to feature 
your project on the official LangGraph documentation pages! 🏆

To share your project, simply open a Pull Request adding an entry for your package in our [packages.yml]({packages_url}) file.

**Guidelines**

- Your repo must be distributed as an installable package (e.g., PyPI for Python, npm 
  for JavaScript/TypeScript, etc.) 📦
- The repo should either use the Graph API (exposing a `StateGraph` instance) or 
  the Functional API (exposing an `entrypoint`).
- The package must include documentation (e.g., a `README.md` or docs site) 
  explaining how to use it.

We'll review your contribution and merge it in!

Thanks for contributing! 🚀
";

/// Renders the complete Markdown page for the provided records.
///
/// Rows are ordered by weekly downloads, highest first; packages without a
/// resolved count order as zero. The ordering is stable, so packages with
/// equal counts keep their input order. The returned document always ends in
/// a newline.
///
/// # Example
///
/// ```
/// use tppr::{Language, parse_packages, render_page};
///
/// # fn main() -> Result<(), tppr::Error> {
/// let packages = parse_packages(
///     "- name: agentevals\n  repo: langchain-ai/agentevals\n  description: Evaluators.\n"
/// )?;
/// let page = render_page(&packages, Language::Python);
/// assert!(page.contains("**[agentevals](https://npmjs.com/package/agentevals)**"));
/// # Ok(())
/// # }
/// ```
pub fn render_page(packages: &[PackageRecord], language: Language) -> String {
    let mut ordered: Vec<&PackageRecord> = packages.iter().collect();
    ordered.sort_by(|a, b| b.sort_downloads().cmp(&a.sort_downloads()));
    debug!("Ordered {} packages by weekly downloads", ordered.len());

    let mut rows = Vec::with_capacity(ordered.len() + 2);
    rows.push(TABLE_HEADER.to_owned());
    rows.push(TABLE_SEPARATOR.to_owned());
    rows.extend(ordered.into_iter().map(render_row));

    PAGE_TEMPLATE
        .replacen("{packages_url}", language.packages_manifest_url(), 1)
        .replacen("{library_list}", &rows.join("\n"), 1)
}

/// Formats one table row. Data rows intentionally carry no trailing pipe.
fn render_row(package: &PackageRecord) -> String {
    let name_link = format!("**[{name}](https://npmjs.com/package/{name})**", name = package.name);
    let repo_link = render_repo_link(package);
    let downloads = package
        .weekly_downloads
        .map_or_else(|| "-".to_owned(), |count| count.to_string());
    let stars = format!(
        "![GitHub stars](https://img.shields.io/github/stars/{}?style=social)",
        package.repo
    );

    format!(
        "| {name_link} | {repo_link} | {description} | {downloads} | {stars}",
        description = package.description
    )
}

/// Builds the repository link, pointing into the monorepo when the package
/// lives under a sub-path.
fn render_repo_link(package: &PackageRecord) -> String {
    match package.monorepo_path.as_deref() {
        Some(path) => format!(
            "[{repo} : {path}](https://github.com/{repo}/tree/main/{path})",
            repo = package.repo
        ),
        None => format!("[{repo}](https://github.com/{repo})", repo = package.repo)
    }
}
