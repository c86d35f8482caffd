// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use crate::{
    config::Config,
    fetch::Fetch,
    manifest,
    render::visual::{Card, NO_VISUALS, VISUALS_ERROR},
    ui::lightbox::Lightbox,
};

/// Where on a card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    /// The card's own download link, which keeps the click to itself.
    DownloadLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gallery {
    Cards(Vec<Card>),
    Empty,
    Failed,
}

impl Gallery {
    pub fn load<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Self {
        match manifest::load_visual_manifest(fetcher, config) {
            Ok(visuals) if visuals.is_empty() => Self::Empty,
            Ok(visuals) => {
                log::info!("Loaded {} visuals", visuals.len());
                Self::Cards(
                    visuals
                        .iter()
                        .map(|visual| Card::from_visual(config, visual))
                        .collect(),
                )
            }
            Err(err) => {
                log::error!("Error loading visuals: {}", err);
                Self::Failed
            }
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards.as_slice(),
            _ => &[],
        }
    }

    /// Route a click on card `index`. Returns whether the lightbox opened.
    pub fn click(&self, index: usize, target: CardTarget, lightbox: &mut Lightbox) -> bool {
        let Some(card) = self.cards().get(index) else {
            return false;
        };

        match target {
            CardTarget::DownloadLink => false,
            CardTarget::Body => {
                lightbox.open(card);
                true
            }
        }
    }

    /// The inside of the grid.
    pub fn to_html(&self) -> String {
        match self {
            Self::Cards(cards) => cards
                .iter()
                .map(Card::to_html)
                .collect::<Vec<String>>()
                .join("\n"),
            Self::Empty => format!(r#"<div class="no-content">{}</div>"#, NO_VISUALS),
            Self::Failed => format!(r#"<div class="no-content">{}</div>"#, VISUALS_ERROR),
        }
    }
}
