// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw document types describing third-party package listings.
//!
//! The types in this module mirror the structure of the YAML documents
//! consumed by the documentation build. They keep optional values flexible
//! and provide helper methods for deriving normalized values that satisfy
//! downstream invariants.

use serde::Deserialize;

/// Raw listing entry describing a single third-party package before
/// normalization.
///
/// Instances are typically created by deserializing YAML documents; the
/// listing is a top level sequence of these entries. Unknown keys are
/// ignored so the listing can carry upstream metadata the renderer does not
/// consume.
///
/// # Examples
///
/// ```
/// use tppr::PackageEntry;
///
/// let yaml = r"
/// - name: agentevals
///   repo: langchain-ai/agentevals
///   description: Evaluators for agent trajectories.
/// ";
/// let entries: Vec<PackageEntry> = serde_yaml::from_str(yaml).expect("valid listing");
/// assert_eq!(entries.len(), 1);
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct PackageEntry {
    /// Registry name of the package.
    pub name:             String,
    /// GitHub repository identifier in `org/repo` form.
    pub repo:             String,
    /// Optional path to the package root within a monorepo.
    #[serde(default)]
    pub monorepo_path:    Option<String>,
    /// Optional weekly download count resolved ahead of the build.
    #[serde(default)]
    pub weekly_downloads: Option<u64>,
    /// Brief description of what the package does.
    pub description:      String
}

impl PackageEntry {
    /// Returns the monorepo path with surrounding whitespace and the leading
    /// slash removed.
    ///
    /// Blank values collapse to `None` so downstream rendering treats the
    /// package as living at the repository root. A path consisting of a bare
    /// `/` collapses the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use tppr::PackageEntry;
    ///
    /// let entry = PackageEntry {
    ///     name:             "retriever".to_owned(),
    ///     repo:             "acme/tools".to_owned(),
    ///     monorepo_path:    Some("/libs/retriever".to_owned()),
    ///     weekly_downloads: None,
    ///     description:      "Retrieval helpers.".to_owned()
    /// };
    /// assert_eq!(entry.resolved_monorepo_path().as_deref(), Some("libs/retriever"));
    /// ```
    pub fn resolved_monorepo_path(&self) -> Option<String> {
        let trimmed = self.monorepo_path.as_deref()?.trim();
        let stripped = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if stripped.is_empty() {
            return None;
        }
        Some(stripped.to_owned())
    }
}
