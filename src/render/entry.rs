// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use build_html::{Container, ContainerType, Html, HtmlContainer};
use relative_path::RelativePathBuf;

use crate::{
    aggregate::Entry,
    config::{Author, Config},
    ui::{
        clipboard::CopyButton,
        collapsible::{Collapsible, Scope},
    },
    util::{escape, format_date},
};

pub const NO_CONTENT: &str = "No content available yet.";
pub const PREVIEW_LOADING: &str = "Loading text preview...";
pub const PREVIEW_FAILED: &str = "Error loading text preview";

/// State of an entry's transcript preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Loading,
    Loaded(String),
    Failed,
}

impl Preview {
    fn to_html(&self) -> String {
        match self {
            Self::Loading => format!("<em>{}</em>", PREVIEW_LOADING),
            // Transcript text is content, never markup.
            Self::Loaded(text) => escape(text),
            Self::Failed => format!("<em>{}</em>", PREVIEW_FAILED),
        }
    }
}

/// A rendered entry whose preview slot is filled in later.
#[derive(Debug, Clone)]
pub struct EntryFragment {
    pub folder: String,
    pub date: String,
    pub title: String,
    pub audio_path: RelativePathBuf,
    pub text_path: RelativePathBuf,
    pub preview: Preview,
}

pub fn render_entry(config: &Config, author: &Author, entry: &Entry) -> EntryFragment {
    EntryFragment {
        folder: entry.folder.clone(),
        date: format_date(entry.date),
        title: entry.title.clone(),
        audio_path: entry.audio_path(config, author),
        text_path: entry.text_path(config, author),
        preview: Preview::Loading,
    }
}

impl EntryFragment {
    pub fn to_html(&self) -> String {
        let section = Collapsible::new(Scope::Entry);
        let header_classes = section.header_classes().to_string();
        let content_classes = section.content_classes().to_string();

        let audio = escape(self.audio_path.as_str());
        let text = escape(self.text_path.as_str());

        let header = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", header_classes.as_str())])
            .with_raw(r#"<span class="entry-arrow"></span>"#)
            .with_raw(format!(r#"<span class="entry-date">{}</span>"#, escape(&self.date)))
            .with_raw(r#"<span class="entry-separator"> - </span>"#)
            .with_raw(format!(r#"<span class="entry-title">{}</span>"#, escape(&self.title)));

        let player = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", "audio-player")])
            .with_raw(format!(
                r#"<audio controls preload="metadata"><source src="{}" type="audio/mpeg">Your browser does not support the audio element.</audio>"#,
                audio
            ));

        let actions = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", "entry-actions")])
            .with_raw(format!(
                r#"<a href="{}" download class="btn btn-download-audio"><span>⬇</span> Download Audio</a>"#,
                audio
            ))
            .with_raw(format!(
                r#"<a href="{}" download class="btn btn-download-text"><span>⬇</span> Download Text</a>"#,
                text
            ))
            .with_raw(CopyButton::new(&self.text_path).to_html());

        let body = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", content_classes.as_str())])
            .with_container(player)
            .with_raw(format!(
                r#"<div class="text-preview" data-text-path="{}">{}</div>"#,
                text,
                self.preview.to_html()
            ))
            .with_container(actions);

        format!(
            r#"<div class="content-entry" data-folder="{}">{}{}</div>"#,
            escape(&self.folder),
            header.to_html_string(),
            body.to_html_string()
        )
    }
}

/// The inside of an author's content list.
pub fn render_listing(fragments: &[EntryFragment]) -> String {
    if fragments.is_empty() {
        return format!(r#"<div class="no-content">{}</div>"#, NO_CONTENT);
    }

    fragments
        .iter()
        .map(EntryFragment::to_html)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Author heading plus its (collapsed) content list.
pub fn render_author_section(author: &Author, fragments: &[EntryFragment]) -> String {
    let section = Collapsible::new(Scope::Author);
    let slug = escape(&author.slug);

    format!(
        r#"<section class="poet-section"><h2 class="{}">{}</h2><div class="{}" data-poet="{}">{}</div></section>"#,
        section.header_classes(),
        escape(&author.name),
        section.content_classes(),
        slug,
        render_listing(fragments)
    )
}
