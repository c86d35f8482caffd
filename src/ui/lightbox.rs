// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! The modal viewer on the visuals page.

use build_html::{Container, ContainerType, Html, HtmlContainer};

use super::ClassList;
use crate::{manifest::VisualKind, render::visual::Card, util::escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
}

/// The element mounted in the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image { src: String, alt: String },
    Video { src: String, playback: Playback },
}

impl Media {
    fn for_card(card: &Card) -> Self {
        match card.kind {
            VisualKind::Video => Self::Video {
                src: card.filepath.clone(),
                playback: Playback::Paused,
            },
            VisualKind::Image => Self::Image {
                src: card.filepath.clone(),
                alt: card.description.clone(),
            },
        }
    }

    fn pause(&mut self) {
        if let Self::Video { playback, .. } = self {
            *playback = Playback::Paused;
        }
    }

    fn to_html(&self) -> String {
        match self {
            Self::Image { src, alt } => {
                format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(alt))
            }
            Self::Video { src, .. } => format!(r#"<video controls src="{}"></video>"#, escape(src)),
        }
    }
}

/// What was clicked inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop itself.
    Overlay,
    /// Anything inside the viewer's content box.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    CloseButton,
    Click(ClickTarget),
    KeyDown(String),
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    overlay: ClassList,
    media: Option<Media>,
    description: String,
    attribution: String,
    download_href: String,
    download_name: String,
    scroll_locked: bool,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self {
            overlay: ClassList::new(&["lightbox"]),
            media: None,
            description: String::new(),
            attribution: String::new(),
            download_href: String::new(),
            download_name: String::new(),
            scroll_locked: false,
        }
    }
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.contains("active")
    }

    /// Page scroll is disabled while the viewer is up.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn download(&self) -> (&str, &str) {
        (&self.download_href, &self.download_name)
    }

    /// Show a card. Whatever was mounted before is discarded first, so this
    /// also works while already open.
    pub fn open(&mut self, card: &Card) {
        if let Some(mut previous) = self.media.take() {
            previous.pause();
        }

        self.media = Some(Media::for_card(card));
        self.description = card.description.clone();
        self.attribution = format!("by {}", card.attribution);
        self.download_href = card.filepath.clone();
        self.download_name = card.filename.clone();

        self.overlay.add("active");
        self.scroll_locked = true;

        log::debug!("Lightbox opened on {}", card.filename);
    }

    /// Hide the viewer and hand back the unmounted media, paused.
    pub fn close(&mut self) -> Option<Media> {
        if !self.is_open() {
            return None;
        }

        let mut media = self.media.take();
        if let Some(media) = media.as_mut() {
            media.pause();
        }

        self.overlay.remove("active");
        self.scroll_locked = false;

        media
    }

    /// Start playback of a mounted video. Returns false for images or when
    /// nothing is mounted.
    pub fn play(&mut self) -> bool {
        match self.media.as_mut() {
            Some(Media::Video { playback, .. }) => {
                *playback = Playback::Playing;
                true
            }
            _ => false,
        }
    }

    /// Returns whether the event dismissed the viewer.
    pub fn handle(&mut self, event: &LightboxEvent) -> bool {
        let dismiss = match event {
            LightboxEvent::CloseButton => true,
            LightboxEvent::Click(target) => *target == ClickTarget::Overlay,
            LightboxEvent::KeyDown(key) => key == "Escape",
        };

        dismiss && self.close().is_some()
    }

    pub fn to_html(&self) -> String {
        let classes = self.overlay.to_string();
        let media = self.media.as_ref().map(Media::to_html).unwrap_or_default();

        let info = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", "lightbox-info")])
            .with_raw(format!(
                r#"<p id="lightbox-description">{}</p>"#,
                escape(&self.description)
            ))
            .with_raw(format!(
                r#"<p id="lightbox-attribution">{}</p>"#,
                escape(&self.attribution)
            ))
            .with_raw(format!(
                r#"<a id="lightbox-download" class="btn btn-download" href="{}" download="{}"><span>⬇</span> Download</a>"#,
                escape(&self.download_href),
                escape(&self.download_name)
            ));

        let content = Container::new(ContainerType::Div)
            .with_attributes(vec![("class", "lightbox-content")])
            .with_raw(format!(r#"<div id="lightbox-media">{}</div>"#, media))
            .with_container(info);

        Container::new(ContainerType::Div)
            .with_attributes(vec![("id", "lightbox"), ("class", classes.as_str())])
            .with_raw(r#"<span class="lightbox-close">&times;</span>"#)
            .with_container(content)
            .to_html_string()
    }
}
