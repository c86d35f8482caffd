// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! Typed loaders for the JSON documents a site publishes.
//!
//! Author manifests and folder metadata fail soft: a sparse library is
//! normal, so errors are logged and collapse to "nothing here". The visual
//! manifest is different, a missing one is an authoring error and is
//! returned to the caller.

use chrono::NaiveDate;
use relative_path::RelativePathBuf;
use serde::{Deserialize, Deserializer};

use crate::{
    config::{Author, Config},
    error::FetchError,
    fetch::{fetch_json, Fetch},
};

pub const FOLDER_MANIFEST: &str = "manifest.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const VISUAL_MANIFEST: &str = "visual-manifest.json";
pub const AUDIO_FILE: &str = "audio.mp3";
pub const TEXT_FILE: &str = "text.txt";

#[derive(Deserialize, Debug, Default)]
struct FolderManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    folders: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
struct VisualManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    visuals: Vec<Visual>,
}

#[derive(Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct EntryMetadata {
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poet: String,
}

#[derive(Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Video,
    #[default]
    #[serde(other)]
    Image,
}

impl VisualKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
        }
    }

    /// Directory under the visual base holding assets of this kind.
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Image => "images",
        }
    }
}

#[derive(Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Visual {
    pub filename: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: VisualKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribution: String,
}

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp. `null` means undated.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_date(&text)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", text)))
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

pub fn author_dir(config: &Config, author: &Author) -> RelativePathBuf {
    config.content_base().join(&author.slug)
}

pub fn folder_dir(config: &Config, author: &Author, folder: &str) -> RelativePathBuf {
    author_dir(config, author).join(folder)
}

/// Folder slugs listed by an author's manifest. Never fails.
pub fn list_folders<F: Fetch + ?Sized>(fetcher: &F, config: &Config, author: &Author) -> Vec<String> {
    let path = author_dir(config, author).join(FOLDER_MANIFEST);

    match fetch_json::<FolderManifest, _>(fetcher, &path) {
        Ok(manifest) => manifest.folders,
        Err(err) if err.is_not_found() => {
            log::info!("No manifest found for {}", author.slug);
            vec![]
        }
        Err(err) => {
            log::warn!("Ignoring manifest for {}: {}", author.slug, err);
            vec![]
        }
    }
}

/// Metadata for one folder, or `None` when it is missing or malformed.
pub fn load_metadata<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &Config,
    author: &Author,
    folder: &str,
) -> Option<EntryMetadata> {
    let path = folder_dir(config, author, folder).join(METADATA_FILE);

    match fetch_json(fetcher, &path) {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            log::error!("Error loading metadata for {}: {}", folder, err);
            None
        }
    }
}

/// Every visual in the global manifest, in manifest order.
pub fn load_visual_manifest<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &Config,
) -> Result<Vec<Visual>, FetchError> {
    let path = config.visual_base().join(VISUAL_MANIFEST);

    Ok(fetch_json::<VisualManifest, _>(fetcher, &path)?.visuals)
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{list_folders, load_metadata, load_visual_manifest, EntryMetadata, VisualKind};
    use crate::{
        config::{Author, Config},
        error::FetchError,
        fetch::memory::MemoryFetcher,
    };

    fn glover() -> Author {
        Author::new("laura-l-glover", "Laura L Glover")
    }

    #[test]
    fn folders_from_manifest() {
        let fetcher = MemoryFetcher::new().with(
            "resources/content/laura-l-glover/manifest.json",
            r#"{ "folders": ["b", "a"] }"#,
        );

        assert_eq!(
            list_folders(&fetcher, &Config::default(), &glover()),
            vec!["b".to_owned(), "a".to_owned()]
        );
    }

    #[test]
    fn missing_or_keyless_manifest_is_empty() {
        let config = Config::default();

        assert!(list_folders(&MemoryFetcher::new(), &config, &glover()).is_empty());

        let keyless = MemoryFetcher::new().with("resources/content/laura-l-glover/manifest.json", "{}");
        assert!(list_folders(&keyless, &config, &glover()).is_empty());

        let broken = MemoryFetcher::new().with("resources/content/laura-l-glover/manifest.json", "[1,");
        assert!(list_folders(&broken, &config, &glover()).is_empty());
    }

    #[test]
    fn metadata_present_absent_and_malformed() {
        let fetcher = MemoryFetcher::new()
            .with(
                "resources/content/laura-l-glover/one/metadata.json",
                r#"{ "date": "2024-03-05", "title": "Tide", "poet": "Laura L Glover" }"#,
            )
            .with("resources/content/laura-l-glover/empty/metadata.json", "{}")
            .with(
                "resources/content/laura-l-glover/bad-date/metadata.json",
                r#"{ "date": "someday", "title": "x" }"#,
            );
        let config = Config::default();

        assert_eq!(
            load_metadata(&fetcher, &config, &glover(), "one"),
            Some(EntryMetadata {
                date: NaiveDate::from_ymd_opt(2024, 3, 5),
                title: "Tide".into(),
                poet: "Laura L Glover".into(),
            })
        );
        assert_eq!(
            load_metadata(&fetcher, &config, &glover(), "empty"),
            Some(EntryMetadata {
                date: None,
                title: String::new(),
                poet: String::new(),
            })
        );
        assert_eq!(load_metadata(&fetcher, &config, &glover(), "bad-date"), None);
        assert_eq!(load_metadata(&fetcher, &config, &glover(), "missing"), None);
    }

    #[test]
    fn timestamps_reduce_to_dates() {
        assert_eq!(
            super::parse_date("2024-02-10T08:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
        assert_eq!(super::parse_date("10/02/2024"), None);
    }

    #[test]
    fn visuals_keep_order_and_default_to_image() {
        let fetcher = MemoryFetcher::new().with(
            "resources/visual/visual-manifest.json",
            r#"{ "visuals": [
                { "filename": "z.mp4", "type": "video", "description": "waves", "attribution": "Ann" },
                { "filename": "a.jpg", "description": "dunes" },
                { "filename": "m.gif", "type": "animation" }
            ] }"#,
        );

        let visuals = load_visual_manifest(&fetcher, &Config::default()).unwrap();
        let names: Vec<_> = visuals.iter().map(|v| v.filename.as_str()).collect();

        assert_eq!(names, vec!["z.mp4", "a.jpg", "m.gif"]);
        assert_eq!(visuals[0].kind, VisualKind::Video);
        assert_eq!(visuals[1].kind, VisualKind::Image);
        assert_eq!(visuals[1].attribution, "");
        assert_eq!(visuals[2].kind, VisualKind::Image);
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let fetcher = MemoryFetcher::new()
            .with(
                "resources/visual/visual-manifest.json",
                r#"{ "visuals": [
                    { "filename": "a.jpg", "type": null, "description": null, "attribution": null }
                ] }"#,
            )
            .with(
                "resources/content/laura-l-glover/one/metadata.json",
                r#"{ "date": null, "title": null, "poet": null }"#,
            )
            .with(
                "resources/content/laura-l-glover/manifest.json",
                r#"{ "folders": null }"#,
            );
        let config = Config::default();

        let visuals = load_visual_manifest(&fetcher, &config).unwrap();
        assert_eq!(visuals.len(), 1);
        assert_eq!(visuals[0].kind, VisualKind::Image);
        assert_eq!(visuals[0].description, "");
        assert_eq!(visuals[0].attribution, "");

        assert_eq!(
            load_metadata(&fetcher, &config, &glover(), "one"),
            Some(EntryMetadata {
                date: None,
                title: String::new(),
                poet: String::new(),
            })
        );
        assert!(list_folders(&fetcher, &config, &glover()).is_empty());

        let no_visuals =
            MemoryFetcher::new().with("resources/visual/visual-manifest.json", r#"{ "visuals": null }"#);
        assert!(load_visual_manifest(&no_visuals, &config).unwrap().is_empty());
    }

    #[test]
    fn missing_visual_manifest_is_an_error() {
        assert!(matches!(
            load_visual_manifest(&MemoryFetcher::new(), &Config::default()),
            Err(FetchError::NotFound(_))
        ));
    }
}
