// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use relative_path::{Component, RelativePath};
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Retrieves site documents by their site-relative path.
///
/// Implementations must be shareable between threads: text previews are
/// fetched concurrently.
pub trait Fetch: Sync {
    fn fetch(&self, path: &RelativePath) -> Result<Vec<u8>, FetchError>;
}

/// Serves documents out of a site source directory.
#[derive(Clone, Debug)]
pub struct LocalFetcher {
    root: PathBuf,
}

impl LocalFetcher {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_owned(),
        }
    }
}

impl Fetch for LocalFetcher {
    fn fetch(&self, path: &RelativePath) -> Result<Vec<u8>, FetchError> {
        let normalized = path.normalize();

        if normalized
            .components()
            .any(|component| component == Component::ParentDir)
        {
            return Err(FetchError::OutsideRoot(normalized));
        }

        let file = normalized.to_path(&self.root);
        log::debug!("Fetching {:?}", file);

        match std::fs::read(&file) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(normalized))
            }
            Err(source) => Err(FetchError::Io {
                path: normalized,
                source,
            }),
        }
    }
}

/// Fetch a document and decode it as JSON.
pub fn fetch_json<T, F>(fetcher: &F, path: &RelativePath) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let bytes = fetcher.fetch(path)?;

    serde_json::from_slice(&bytes).map_err(|source| FetchError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Fetch a document as UTF-8 text.
pub fn fetch_text<F>(fetcher: &F, path: &RelativePath) -> Result<String, FetchError>
where
    F: Fetch + ?Sized,
{
    String::from_utf8(fetcher.fetch(path)?).map_err(|_| FetchError::Utf8(path.to_owned()))
}

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;

    use relative_path::RelativePath;

    use super::Fetch;
    use crate::error::FetchError;

    /// In-memory site used by unit tests.
    #[derive(Default)]
    pub(crate) struct MemoryFetcher {
        files: HashMap<String, Vec<u8>>,
    }

    impl MemoryFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.to_owned(), contents.into());
            self
        }
    }

    impl Fetch for MemoryFetcher {
        fn fetch(&self, path: &RelativePath) -> Result<Vec<u8>, FetchError> {
            self.files
                .get(path.normalize().as_str())
                .cloned()
                .ok_or_else(|| FetchError::NotFound(path.to_owned()))
        }
    }
}

#[cfg(test)]
mod test {
    use relative_path::RelativePath;

    use super::{fetch_json, fetch_text, Fetch, LocalFetcher};
    use crate::error::FetchError;

    #[test]
    fn reads_files_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a")).unwrap();
        std::fs::write(dir.path().join("a/b.txt"), "hello").unwrap();

        let fetcher = LocalFetcher::new(dir.path());

        assert_eq!(
            fetch_text(&fetcher, RelativePath::new("a/b.txt")).unwrap(),
            "hello"
        );
        assert_eq!(
            fetch_text(&fetcher, RelativePath::new("a/./b.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFetcher::new(dir.path());

        let err = fetcher.fetch(RelativePath::new("nope.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn refuses_to_leave_root() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFetcher::new(&dir.path().join("site"));

        assert!(matches!(
            fetcher.fetch(RelativePath::new("../secret.txt")),
            Err(FetchError::OutsideRoot(_))
        ));
        assert!(matches!(
            fetcher.fetch(RelativePath::new("a/../../secret.txt")),
            Err(FetchError::OutsideRoot(_))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ nope").unwrap();
        let fetcher = LocalFetcher::new(dir.path());

        let result: Result<serde_json::Value, _> =
            fetch_json(&fetcher, RelativePath::new("bad.json"));
        assert!(matches!(result, Err(FetchError::Json { .. })));
    }
}
