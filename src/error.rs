#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the renderer crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module so the generated implementations stay warning-free while the
//! error surface remains fully documented for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the package loader, renderer and CLI.
///
/// Each variant captures the context needed for diagnostics: read and write
/// failures carry the offending path, parse failures carry the serde_yaml
/// diagnostic, and validation failures carry a human readable message.
/// Instances are typically constructed through the [`io_error`] and
/// [`page_io_error`] helpers or by converting from [`serde_yaml::Error`].
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading the packages file.
    #[error("failed to read packages from {path:?}: {source}")]
    Io {
        /// Location of the packages file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors, including a top level that is not a
    /// sequence of mappings.
    #[error("failed to parse packages: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when an input violates invariants, such as an unknown
    /// language selector or a blank package name.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while writing the rendered page.
    #[error("failed to write page at {path:?}: {source}")]
    PageIo {
        /// Location of the page being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the packages file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::PageIo`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the rendered page that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn page_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::PageIo {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("something went wrong");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "something went wrong");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/packages.yml");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn page_io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/third_party.md");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = super::page_io_error(path, io_error);

        match error {
            Error::PageIo {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected page io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn parse_display_includes_yaml_diagnostic() {
        let source = serde_yaml::from_str::<Vec<usize>>("not-a-sequence").unwrap_err();
        let error = Error::Parse {
            source
        };
        assert!(error.to_display_string().starts_with("failed to parse packages:"));
    }
}
