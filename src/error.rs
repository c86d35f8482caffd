// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! Errors raised while fetching site documents.

use relative_path::RelativePathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The document does not exist (the 404 of a static host).
    #[error("not found: {0}")]
    NotFound(RelativePathBuf),

    /// The path climbs out of the site root.
    #[error("refusing to fetch `{0}`: path leaves the site root")]
    OutsideRoot(RelativePathBuf),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: RelativePathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in `{path}`: {source}")]
    Json {
        path: RelativePathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{0}` is not valid UTF-8")]
    Utf8(RelativePathBuf),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
