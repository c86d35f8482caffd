// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    config::{Config, CONFIG_FILE},
    fetch::{Fetch, LocalFetcher},
    page::{Page, POEMS, VISUALS},
    template::{Templates, TEMPLATE_DIR},
};

/// Pages built when none are asked for.
pub const DEFAULT_PAGES: [&str; 2] = [POEMS, VISUALS];

fn file_changed(old: &Path, new: &Path) -> std::io::Result<bool> {
    Ok(!new.exists() || new.metadata()?.modified()? < old.metadata()?.modified()?)
}

fn writeable(path: &Path) -> std::io::Result<std::fs::File> {
    use std::fs::{create_dir_all, File};

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    File::create(path)
}

/// Editor leftovers are never published.
fn filter_file(file: &Path) -> bool {
    let Some(filename) = file.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    let is_backup = filename.ends_with('~');
    let is_buffer = filename.ends_with('#') && filename.starts_with('#');

    file.is_file() && !is_buffer && !is_backup
}

pub struct Site<F: Fetch> {
    config: Config,
    fetcher: F,
    templates: Templates,
}

impl Site<LocalFetcher> {
    /// A site served out of a source directory.
    pub fn open(source: &Path) -> anyhow::Result<Self> {
        let config = Config::load(source)?;

        Ok(Self::new(
            config,
            LocalFetcher::new(source),
            Templates::new(source),
        ))
    }
}

impl<F: Fetch> Site<F> {
    pub fn new(config: Config, fetcher: F, templates: Templates) -> Self {
        Self {
            config,
            fetcher,
            templates,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Assemble one page, shell included.
    pub fn render_page(&self, page: Page) -> anyhow::Result<String> {
        log::info!("Rendering {}", page.filename());

        let rendered = page.render(&self.fetcher, &self.config);

        self.templates
            .render(
                page.filename(),
                &self.config,
                &rendered.content,
                Some(rendered.vars),
            )
            .with_context(|| format!("rendering the {} shell", page.filename()))
    }

    /// Write every requested page into `dest`. Names that route nowhere are skipped.
    pub fn build_pages(&self, dest: &Path, pages: &[String]) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = vec![];

        for name in pages {
            let Some(page) = Page::route(name) else {
                log::warn!("No page is served at `{}`, skipping", name);
                continue;
            };

            let out = self.render_page(page)?;
            let file = dest.join(page.filename());

            writeable(&file)
                .and_then(|mut handle| handle.write_all(out.as_bytes()))
                .with_context(|| format!("writing {}", file.display()))?;

            log::info!("Wrote {:?}", file);
            written.push(file);
        }

        Ok(written)
    }
}

/// Copy the site's static files (audio, transcripts, media, styles) into
/// `dest`, skipping files that are already up to date. Returns how many
/// files were copied.
pub fn copy_assets(source: &Path, dest: &Path) -> anyhow::Result<usize> {
    let root = source
        .canonicalize()
        .with_context(|| format!("opening {}", source.display()))?;
    std::fs::create_dir_all(dest)?;
    let dest = dest.canonicalize()?;

    let mut copied = 0;

    for file in walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_entry(|entry| entry.path() != dest)
    {
        let file = file?;
        let path = file.path();

        if !filter_file(path) {
            continue;
        }

        let relative = path.strip_prefix(&root)?;
        if relative.starts_with(TEMPLATE_DIR) || relative == Path::new(CONFIG_FILE) {
            continue;
        }

        let target = dest.join(relative);
        if !file_changed(path, &target)? {
            continue;
        }

        log::debug!("Copying {:?}", relative);

        writeable(&target)?.write_all(std::fs::read(path)?.as_slice())?;
        copied += 1;
    }

    log::info!("Copied {} asset(s) into {:?}", copied, dest);

    Ok(copied)
}
