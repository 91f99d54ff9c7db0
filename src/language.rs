// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Language selector identifying the documentation ecosystem a page is
//! rendered for.
//!
//! The selector is a closed enum on purpose: resolving the packages manifest
//! URL is an exhaustive match, so supporting another ecosystem is one new
//! variant plus one new arm and the compiler flags every site that needs
//! updating.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Packages manifest edited by Python contributors.
const PYTHON_PACKAGES_URL: &str =
    "https://github.com/langchain-ai/langgraph/blob/main/docs/_scripts/third_party_page/packages.yml";
/// Packages manifest edited by JavaScript contributors.
const JS_PACKAGES_URL: &str =
    "https://github.com/langchain-ai/langgraphjs/blob/main/docs/_scripts/third_party/packages.yml";

/// Documentation ecosystem that publishes a third-party packages page.
///
/// # Examples
///
/// ```
/// use tppr::Language;
///
/// let language: Language = "js".parse().expect("known selector");
/// assert_eq!(language, Language::Js);
/// assert_eq!(Language::default(), Language::Python);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Python distribution of the framework.
    #[default]
    Python,
    /// JavaScript/TypeScript distribution of the framework.
    Js
}

impl Language {
    /// Returns the URL of the packages manifest contributors should edit to
    /// register their library.
    pub fn packages_manifest_url(self) -> &'static str {
        match self {
            Self::Python => PYTHON_PACKAGES_URL,
            Self::Js => JS_PACKAGES_URL
        }
    }

    /// Returns the token accepted on the command line for this selector.
    pub fn token(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Js => "js"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses a selector token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the rejected value and the
    /// accepted tokens. No other failure mode exists, so a selector that
    /// survives parsing can always be rendered.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "python" => Ok(Self::Python),
            "js" => Ok(Self::Js),
            other => Err(Error::validation(format!(
                "invalid language '{other}'. Expected 'python' or 'js'."
            )))
        }
    }
}
