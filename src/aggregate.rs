// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use relative_path::RelativePathBuf;

use crate::{
    config::{Author, Config},
    fetch::Fetch,
    manifest::{self, EntryMetadata},
};

/// One published reading: folder metadata joined with its folder slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub folder: String,
    pub date: Option<NaiveDate>,
    pub title: String,
    pub poet: String,
}

impl Entry {
    pub fn new(folder: &str, metadata: EntryMetadata) -> Self {
        Self {
            folder: folder.to_owned(),
            date: metadata.date,
            title: metadata.title,
            poet: metadata.poet,
        }
    }

    pub fn audio_path(&self, config: &Config, author: &Author) -> RelativePathBuf {
        manifest::folder_dir(config, author, &self.folder).join(manifest::AUDIO_FILE)
    }

    pub fn text_path(&self, config: &Config, author: &Author) -> RelativePathBuf {
        manifest::folder_dir(config, author, &self.folder).join(manifest::TEXT_FILE)
    }
}

#[derive(Debug, Clone)]
pub struct AuthorContent {
    pub author: Author,
    pub entries: Vec<Entry>,
}

/// Newest first. The sort is stable, so equal dates keep the order their
/// metadata was loaded in; undated entries sink to the end.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Every entry of one author whose metadata loads, newest first.
///
/// Folders are visited one at a time, in manifest order.
pub fn aggregate<F: Fetch + ?Sized>(fetcher: &F, config: &Config, author: &Author) -> Vec<Entry> {
    let folders = manifest::list_folders(fetcher, config, author);

    let mut entries: Vec<Entry> = folders
        .iter()
        .filter_map(|folder| {
            manifest::load_metadata(fetcher, config, author, folder)
                .map(|metadata| Entry::new(folder, metadata))
        })
        .collect();

    sort_entries(&mut entries);

    log::info!(
        "Loaded {} of {} entries for {}",
        entries.len(),
        folders.len(),
        author.slug
    );

    entries
}

/// Aggregate every configured author, sequentially and in configured order.
pub fn load_all<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Vec<AuthorContent> {
    config
        .authors
        .iter()
        .map(|author| AuthorContent {
            author: author.clone(),
            entries: aggregate(fetcher, config, author),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{aggregate, load_all};
    use crate::{
        config::{Author, Config},
        fetch::memory::MemoryFetcher,
    };

    const BASE: &str = "resources/content/georgia-gray";

    fn gray() -> Author {
        Author::new("georgia-gray", "Georgia Gray")
    }

    fn metadata(date: &str, title: &str) -> String {
        format!(
            r#"{{ "date": "{}", "title": "{}", "poet": "Georgia Gray" }}"#,
            date, title
        )
    }

    #[test]
    fn sorts_newest_first() {
        let fetcher = MemoryFetcher::new()
            .with(
                &format!("{}/manifest.json", BASE),
                r#"{ "folders": ["jan", "mar", "feb"] }"#,
            )
            .with(&format!("{}/jan/metadata.json", BASE), metadata("2024-01-01", "Jan"))
            .with(&format!("{}/mar/metadata.json", BASE), metadata("2024-03-05", "Mar"))
            .with(&format!("{}/feb/metadata.json", BASE), metadata("2024-02-10", "Feb"));

        let entries = aggregate(&fetcher, &Config::default(), &gray());
        let dates: Vec<_> = entries.iter().map(|e| e.date).collect();

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 5),
                NaiveDate::from_ymd_opt(2024, 2, 10),
                NaiveDate::from_ymd_opt(2024, 1, 1),
            ]
        );
        assert_eq!(entries[0].folder, "mar");
    }

    #[test]
    fn timestamps_compare_by_date() {
        let fetcher = MemoryFetcher::new()
            .with(&format!("{}/manifest.json", BASE), r#"{ "folders": ["a", "b"] }"#)
            .with(&format!("{}/a/metadata.json", BASE), metadata("2023-12-31T23:00:00Z", "A"))
            .with(&format!("{}/b/metadata.json", BASE), metadata("2024-01-01", "B"));

        let entries = aggregate(&fetcher, &Config::default(), &gray());

        assert_eq!(entries[0].title, "B");
        assert_eq!(entries[1].title, "A");
    }

    #[test]
    fn equal_dates_keep_load_order_and_undated_sink() {
        let fetcher = MemoryFetcher::new()
            .with(
                &format!("{}/manifest.json", BASE),
                r#"{ "folders": ["undated", "x", "y", "z"] }"#,
            )
            .with(&format!("{}/undated/metadata.json", BASE), r#"{ "title": "U" }"#)
            .with(&format!("{}/x/metadata.json", BASE), metadata("2024-05-01", "X"))
            .with(&format!("{}/y/metadata.json", BASE), metadata("2024-05-01", "Y"))
            .with(&format!("{}/z/metadata.json", BASE), metadata("2024-05-01", "Z"));

        let entries = aggregate(&fetcher, &Config::default(), &gray());
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(titles, vec!["X", "Y", "Z", "U"]);
    }

    #[test]
    fn drops_folders_without_metadata() {
        let fetcher = MemoryFetcher::new()
            .with(
                &format!("{}/manifest.json", BASE),
                r#"{ "folders": ["ok", "gone", "broken"] }"#,
            )
            .with(&format!("{}/ok/metadata.json", BASE), metadata("2024-01-01", "Ok"))
            .with(&format!("{}/broken/metadata.json", BASE), "{ not json");

        let entries = aggregate(&fetcher, &Config::default(), &gray());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].folder, "ok");
    }

    #[test]
    fn conventional_asset_paths() {
        let fetcher = MemoryFetcher::new()
            .with(&format!("{}/manifest.json", BASE), r#"{ "folders": ["ok"] }"#)
            .with(&format!("{}/ok/metadata.json", BASE), metadata("2024-01-01", "Ok"));
        let config = Config::default();

        let entry = &aggregate(&fetcher, &config, &gray())[0];

        assert_eq!(
            entry.audio_path(&config, &gray()).as_str(),
            "resources/content/georgia-gray/ok/audio.mp3"
        );
        assert_eq!(
            entry.text_path(&config, &gray()).as_str(),
            "resources/content/georgia-gray/ok/text.txt"
        );
    }

    #[test]
    fn every_author_in_configured_order() {
        let content = load_all(&MemoryFetcher::new(), &Config::default());
        let slugs: Vec<_> = content.iter().map(|c| c.author.slug.as_str()).collect();

        assert_eq!(slugs, vec!["laura-l-glover", "georgia-gray", "others"]);
        assert!(content.iter().all(|c| c.entries.is_empty()));
    }
}
