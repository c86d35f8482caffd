// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::Path;

use anyhow::Context;
use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

/// Name of the optional configuration file at the site source root.
pub const CONFIG_FILE: &str = "folio.yaml";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_content_base")]
    pub content_base: String,
    #[serde(default = "default_visual_base")]
    pub visual_base: String,
    pub stylesheet: Option<String>,
    pub script: Option<String>,
    #[serde(default = "default_authors")]
    pub authors: Vec<Author>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Author {
    pub slug: String,
    pub name: String,
}

impl Author {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_owned(),
            name: name.to_owned(),
        }
    }
}

fn default_title() -> String {
    "Content Portal".to_owned()
}

fn default_content_base() -> String {
    "resources/content".to_owned()
}

fn default_visual_base() -> String {
    "resources/visual".to_owned()
}

fn default_authors() -> Vec<Author> {
    vec![
        Author::new("laura-l-glover", "Laura L Glover"),
        Author::new("georgia-gray", "Georgia Gray"),
        Author::new("others", "Others"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            content_base: default_content_base(),
            visual_base: default_visual_base(),
            stylesheet: None,
            script: None,
            authors: default_authors(),
        }
    }
}

impl Config {
    /// Load `folio.yaml` from the source directory, falling back to the
    /// built-in defaults when the file is absent.
    pub fn load(source: &Path) -> anyhow::Result<Self> {
        let file = source.join(CONFIG_FILE);

        if !file.exists() {
            log::info!("No {} in {:?}, using defaults", CONFIG_FILE, source);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;

        Self::parse(&text).with_context(|| format!("parsing {}", file.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;

        if config.authors.is_empty() {
            log::warn!("Configuration lists no authors; the poems page will be empty");
        }

        Ok(config)
    }

    pub fn content_base(&self) -> RelativePathBuf {
        RelativePath::new(&self.content_base).normalize()
    }

    pub fn visual_base(&self) -> RelativePathBuf {
        RelativePath::new(&self.visual_base).normalize()
    }

    pub fn author(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.slug == slug)
    }
}

#[cfg(test)]
mod test {
    use super::{Author, Config};

    #[test]
    fn defaults_match_builtin_table() {
        let config = Config::default();

        assert_eq!(config.content_base().as_str(), "resources/content");
        assert_eq!(config.visual_base().as_str(), "resources/visual");
        assert_eq!(
            config.author("georgia-gray"),
            Some(&Author::new("georgia-gray", "Georgia Gray"))
        );
        assert_eq!(config.authors.len(), 3);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::parse(
            "title: Readings\nauthors:\n  - slug: ann\n    name: Ann Example\n",
        )
        .unwrap();

        assert_eq!(config.title, "Readings");
        assert_eq!(config.authors, vec![Author::new("ann", "Ann Example")]);
        assert_eq!(config.content_base, "resources/content");
        assert_eq!(config.stylesheet, None);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = Config::parse("content_base: site/content/\n").unwrap();

        assert_eq!(config.content_base().join("a").as_str(), "site/content/a");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }
}
