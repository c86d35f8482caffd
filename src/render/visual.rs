// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use crate::{
    config::Config,
    manifest::{Visual, VisualKind},
    util::escape,
};

pub const NO_VISUALS: &str = "No visuals available yet.";
pub const VISUALS_ERROR: &str = "Error loading visuals. Please try again later.";

/// The data a card carries, and hands to the lightbox when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub filename: String,
    pub kind: VisualKind,
    pub description: String,
    pub attribution: String,
    pub filepath: String,
}

impl Card {
    pub fn from_visual(config: &Config, visual: &Visual) -> Self {
        let filepath = config
            .visual_base()
            .join(visual.kind.directory())
            .join(&visual.filename);

        Self {
            filename: visual.filename.clone(),
            kind: visual.kind,
            description: visual.description.clone(),
            attribution: visual.attribution.clone(),
            filepath: filepath.as_str().to_owned(),
        }
    }

    pub fn to_html(&self) -> String {
        let path = escape(&self.filepath);
        let description = escape(&self.description);
        let attribution = escape(&self.attribution);
        let filename = escape(&self.filename);

        let thumbnail = match self.kind {
            VisualKind::Video => format!(
                r#"<video muted preload="metadata"><source src="{}#t=0.1" type="video/mp4"></video><div class="video-indicator">▶</div>"#,
                path
            ),
            VisualKind::Image => format!(r#"<img src="{}" alt="{}">"#, path, description),
        };

        format!(
            concat!(
                r#"<div class="visual-card" data-filename="{filename}" data-type="{kind}" "#,
                r#"data-description="{description}" data-attribution="{attribution}" data-filepath="{path}">"#,
                r#"<div class="visual-thumbnail">{thumbnail}</div>"#,
                r#"<div class="visual-info">"#,
                r#"<p class="visual-description">{description}</p>"#,
                r#"<p class="visual-attribution">by {attribution}</p>"#,
                r#"<div class="visual-actions">"#,
                r#"<a href="{path}" download="{filename}" class="btn btn-download" onclick="event.stopPropagation()"><span>⬇</span> Download</a>"#,
                r#"</div></div></div>"#
            ),
            filename = filename,
            kind = self.kind.as_str(),
            description = description,
            attribution = attribution,
            path = path,
            thumbnail = thumbnail,
        )
    }
}
