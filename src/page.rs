// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::{
    aggregate,
    config::Config,
    fetch::Fetch,
    gallery::Gallery,
    preview,
    render::entry::{render_author_section, render_entry, EntryFragment},
    ui::lightbox::Lightbox,
};

pub const POEMS: &str = "poems.html";
pub const VISUALS: &str = "visuals.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Poems,
    Visuals,
}

/// Page body plus the extra template variables it needs.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub content: String,
    pub vars: HashMap<&'static str, String>,
}

impl Page {
    /// Pick the page served at a path by its last segment. The bare site
    /// root shows the poems.
    pub fn route(path: &str) -> Option<Self> {
        match path.rsplit('/').next().unwrap_or("") {
            POEMS | "" => Some(Self::Poems),
            VISUALS => Some(Self::Visuals),
            _ => None,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            Self::Poems => POEMS,
            Self::Visuals => VISUALS,
        }
    }

    pub fn render<F: Fetch + ?Sized>(&self, fetcher: &F, config: &Config) -> Rendered {
        match self {
            Self::Poems => render_poems(fetcher, config),
            Self::Visuals => render_visuals(fetcher, config),
        }
    }
}

fn render_poems<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Rendered {
    let sections = aggregate::load_all(fetcher, config)
        .into_iter()
        .map(|content| {
            let mut fragments: Vec<EntryFragment> = content
                .entries
                .iter()
                .map(|entry| render_entry(config, &content.author, entry))
                .collect();

            preview::load_previews(fetcher, &mut fragments);

            render_author_section(&content.author, &fragments)
        })
        .collect::<Vec<String>>();

    Rendered {
        content: sections.join("\n"),
        vars: HashMap::new(),
    }
}

fn render_visuals<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Rendered {
    let gallery = Gallery::load(fetcher, config);

    Rendered {
        content: gallery.to_html(),
        vars: HashMap::from([("lightbox", Lightbox::new().to_html())]),
    }
}
