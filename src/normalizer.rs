// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transformation logic that converts raw listing entries into normalized
//! package records.
//!
//! Normalization resolves every defaulting and clean-up rule exactly once at
//! load time, so rendering can rely on the record shape without re-checking
//! field contents. Input order is preserved; the renderer applies its own
//! ordering later.

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    config::PackageEntry,
    error::{self, Error}
};

/// Normalized third-party package record consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Registry name of the package. Never empty.
    pub name:             String,
    /// GitHub repository identifier in `org/repo` form. Never empty.
    pub repo:             String,
    /// Package root within a monorepo, stripped of its leading slash.
    pub monorepo_path:    Option<String>,
    /// Weekly download count when one was resolved ahead of the build.
    pub weekly_downloads: Option<u64>,
    /// Brief description shown verbatim in the table.
    pub description:      String
}

impl PackageRecord {
    /// Returns the download count used for ordering rows.
    ///
    /// Packages without a resolved count order as zero while still rendering
    /// a placeholder instead of a number.
    pub fn sort_downloads(&self) -> u64 {
        self.weekly_downloads.unwrap_or(0)
    }
}

/// Loads package records from the provided YAML listing file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or an entry violates invariants during normalization.
pub fn load_packages(path: &Path) -> Result<Vec<PackageRecord>, Error> {
    info!("Reading packages from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_packages(&contents)
}

/// Parses package records from the provided YAML document string.
///
/// The document must be a top level sequence of package mappings. An empty
/// sequence is valid and yields an empty record list.
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the YAML cannot be decoded and
/// [`Error::Validation`] when an entry carries a blank or whitespace-ridden
/// identifier.
pub fn parse_packages(contents: &str) -> Result<Vec<PackageRecord>, Error> {
    let entries: Vec<PackageEntry> = serde_yaml::from_str(contents)?;
    debug!("Parsed {} package entries", entries.len());
    normalize_entries(&entries)
}

/// Normalizes raw entries into records, preserving input order.
fn normalize_entries(entries: &[PackageEntry]) -> Result<Vec<PackageRecord>, Error> {
    let mut normalized = Vec::with_capacity(entries.len());
    for entry in entries {
        normalized.push(normalize_entry(entry)?);
    }
    Ok(normalized)
}

/// Converts a raw listing entry into a normalized record.
///
/// # Errors
///
/// Returns [`Error::Validation`] when `name` or `repo` is blank or contains
/// whitespace.
fn normalize_entry(entry: &PackageEntry) -> Result<PackageRecord, Error> {
    let name = normalize_identifier(&entry.name, "name")?;
    let repo = normalize_identifier(&entry.repo, "repo")?;

    Ok(PackageRecord {
        name,
        repo,
        monorepo_path: entry.resolved_monorepo_path(),
        weekly_downloads: entry.weekly_downloads,
        description: entry.description.clone()
    })
}

/// Validates identifier-like fields such as package names or repositories.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value is empty or contains
/// whitespace.
fn normalize_identifier(input: &str, field: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(Error::validation(format!("{field} cannot contain whitespace")));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{Error, load_packages, normalize_entry, normalize_identifier, parse_packages};
    use crate::config::PackageEntry;

    fn package_entry() -> PackageEntry {
        PackageEntry {
            name:             "agentevals".to_owned(),
            repo:             "langchain-ai/agentevals".to_owned(),
            monorepo_path:    None,
            weekly_downloads: Some(1200),
            description:      "Evaluators for agent trajectories.".to_owned()
        }
    }

    #[test]
    fn normalizes_plain_entry() {
        let record = normalize_entry(&package_entry()).expect("expected normalization success");

        assert_eq!(record.name, "agentevals");
        assert_eq!(record.repo, "langchain-ai/agentevals");
        assert!(record.monorepo_path.is_none());
        assert_eq!(record.weekly_downloads, Some(1200));
        assert_eq!(record.description, "Evaluators for agent trajectories.");
    }

    #[test]
    fn trims_name_and_repo() {
        let mut entry = package_entry();
        entry.name = "  agentevals  ".to_owned();
        entry.repo = "  langchain-ai/agentevals  ".to_owned();

        let record = normalize_entry(&entry).expect("expected identifiers to be trimmed");
        assert_eq!(record.name, "agentevals");
        assert_eq!(record.repo, "langchain-ai/agentevals");
    }

    #[test]
    fn strips_leading_slash_from_monorepo_path() {
        let mut entry = package_entry();
        entry.monorepo_path = Some("/libs/agentevals".to_owned());

        let record = normalize_entry(&entry).expect("expected normalization success");
        assert_eq!(record.monorepo_path.as_deref(), Some("libs/agentevals"));
    }

    #[test]
    fn collapses_bare_slash_monorepo_path() {
        let mut entry = package_entry();
        entry.monorepo_path = Some("/".to_owned());

        let record = normalize_entry(&entry).expect("expected normalization success");
        assert!(record.monorepo_path.is_none());
    }

    #[test]
    fn keeps_description_verbatim() {
        let mut entry = package_entry();
        entry.description = "  spaced | description  ".to_owned();

        let record = normalize_entry(&entry).expect("expected normalization success");
        assert_eq!(record.description, "  spaced | description  ");
    }

    #[test]
    fn rejects_empty_name() {
        let mut entry = package_entry();
        entry.name = "   ".to_owned();

        let error = normalize_entry(&entry).expect_err("expected validation failure");
        match error {
            Error::Validation {
                message
            } => {
                assert_eq!(message, "name cannot be empty");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn rejects_whitespace_in_repo() {
        let mut entry = package_entry();
        entry.repo = "langchain ai/agentevals".to_owned();

        let error = normalize_entry(&entry).expect_err("expected validation failure");
        match error {
            Error::Validation {
                message
            } => {
                assert_eq!(message, "repo cannot contain whitespace");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn normalize_identifier_rejects_internal_whitespace() {
        let error = normalize_identifier("bad value", "field").unwrap_err();
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn sort_downloads_defaults_to_zero() {
        let mut entry = package_entry();
        entry.weekly_downloads = None;

        let record = normalize_entry(&entry).expect("expected normalization success");
        assert_eq!(record.sort_downloads(), 0);
        assert!(record.weekly_downloads.is_none());
    }

    #[test]
    fn sort_downloads_uses_resolved_count() {
        let record = normalize_entry(&package_entry()).expect("expected normalization success");
        assert_eq!(record.sort_downloads(), 1200);
    }

    #[test]
    fn parse_packages_preserves_input_order() {
        let yaml = r"
- name: first
  repo: acme/first
  description: First package.
- name: second
  repo: acme/second
  description: Second package.
- name: third
  repo: acme/third
  description: Third package.
";

        let records = parse_packages(yaml).expect("expected parse success");
        let names: Vec<_> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn parse_packages_accepts_empty_sequence() {
        let records = parse_packages("[]").expect("expected empty listing to parse");
        assert!(records.is_empty());
    }

    #[test]
    fn parse_packages_rejects_mapping_document() {
        let result = parse_packages("name: agentevals");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn parse_packages_rejects_empty_document() {
        let result = parse_packages("");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn parse_packages_reports_missing_required_field() {
        let yaml = r"
- name: agentevals
  repo: langchain-ai/agentevals
";

        let error = parse_packages(yaml).expect_err("expected parse failure");
        match error {
            Error::Parse {
                ref source
            } => {
                assert!(source.to_string().contains("description"));
            }
            other => panic!("expected parse error, got {other:?}")
        }
    }

    #[test]
    fn parse_packages_rejects_negative_downloads() {
        let yaml = r"
- name: agentevals
  repo: langchain-ai/agentevals
  weekly_downloads: -5
  description: Evaluators for agent trajectories.
";

        let result = parse_packages(yaml);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn load_packages_reads_listing_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(
            file,
            "- name: agentevals\n  repo: langchain-ai/agentevals\n  description: Evaluators.\n"
        )
        .expect("expected write to succeed");

        let records = load_packages(file.path()).expect("expected load to succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "agentevals");
    }

    #[test]
    fn load_packages_reports_io_errors() {
        let path = std::path::Path::new("/nonexistent/packages.yml");
        let error = load_packages(path).expect_err("expected io error");
        assert!(matches!(error, Error::Io { .. }));
    }
}
