// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! Expand/collapse for author sections and the entries nested in them.
//!
//! Touch input is only treated as a tap when the finger moved less than
//! [`SCROLL_THRESHOLD`] pixels vertically; anything more is a scroll.
//! A tap consumes the click the browser would synthesise after it, as long
//! as that click arrives within [`SYNTHETIC_CLICK_WINDOW`].

use std::time::{Duration, Instant};

use super::ClassList;

/// Vertical movement, in pixels, from which a touch counts as a scroll.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// A click this soon after a handled tap is the tap's own synthetic click.
pub const SYNTHETIC_CLICK_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Author,
    Entry,
}

impl Scope {
    fn header_classes(&self) -> &'static [&'static str] {
        match self {
            Self::Author => &["poet-name", "collapsible"],
            Self::Entry => &["entry-header", "collapsible-entry"],
        }
    }

    fn content_classes(&self) -> &'static [&'static str] {
        match self {
            Self::Author => &["content-list"],
            Self::Entry => &["entry-content"],
        }
    }

    pub fn collapsed_class(&self) -> &'static str {
        match self {
            Self::Author => "collapsed",
            Self::Entry => "collapsed-entry",
        }
    }

    fn stops_propagation(&self) -> bool {
        matches!(self, Self::Entry)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Click,
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub toggled: bool,
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

#[derive(Debug, Clone)]
pub struct Collapsible {
    scope: Scope,
    header: ClassList,
    content: ClassList,
    touch_start_y: f64,
    suppress_click_until: Option<Instant>,
}

impl Collapsible {
    /// A collapsed section.
    pub fn new(scope: Scope) -> Self {
        let mut content = ClassList::new(scope.content_classes());
        content.add(scope.collapsed_class());

        Self {
            scope,
            header: ClassList::new(scope.header_classes()),
            content,
            touch_start_y: 0.0,
            suppress_click_until: None,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn header_classes(&self) -> &ClassList {
        &self.header
    }

    pub fn content_classes(&self) -> &ClassList {
        &self.content
    }

    pub fn is_expanded(&self) -> bool {
        !self.content.contains(self.scope.collapsed_class())
    }

    pub fn toggle(&mut self) {
        self.header.toggle("active");
        self.content.toggle(self.scope.collapsed_class());
    }

    /// React to a gesture arriving at `now`.
    pub fn handle(&mut self, gesture: Gesture, now: Instant) -> Outcome {
        // Whatever comes next, a pending suppression is used up by it.
        let suppressing = self
            .suppress_click_until
            .take()
            .is_some_and(|until| now < until);

        match gesture {
            Gesture::TouchStart { y } => {
                // Passive listener: record and let the event continue.
                self.touch_start_y = y;
                Outcome::default()
            }
            Gesture::TouchEnd { y } => {
                if (y - self.touch_start_y).abs() >= SCROLL_THRESHOLD {
                    return Outcome::default();
                }

                self.toggle();
                self.suppress_click_until = Some(now + SYNTHETIC_CLICK_WINDOW);

                Outcome {
                    toggled: true,
                    stop_propagation: self.scope.stops_propagation(),
                    prevent_default: true,
                }
            }
            Gesture::Click if suppressing => {
                // The click synthesised after a handled tap never reaches anyone.
                Outcome {
                    toggled: false,
                    stop_propagation: true,
                    prevent_default: true,
                }
            }
            Gesture::Click => {
                self.toggle();
                Outcome {
                    toggled: true,
                    stop_propagation: self.scope.stops_propagation(),
                    prevent_default: self.scope.stops_propagation(),
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorSection {
    pub section: Collapsible,
    pub entries: Vec<Collapsible>,
}

/// Where an event is first delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Author(usize),
    Entry { author: usize, entry: usize },
}

/// Every collapsible on the poems page. Events on an entry bubble to the
/// author section containing it unless the entry stops them.
#[derive(Debug, Clone, Default)]
pub struct SectionTree {
    authors: Vec<AuthorSection>,
}

impl SectionTree {
    /// One author section per element, holding that many entries.
    pub fn new(entry_counts: &[usize]) -> Self {
        Self {
            authors: entry_counts
                .iter()
                .map(|&count| AuthorSection {
                    section: Collapsible::new(Scope::Author),
                    entries: (0..count).map(|_| Collapsible::new(Scope::Entry)).collect(),
                })
                .collect(),
        }
    }

    pub fn author(&self, index: usize) -> Option<&AuthorSection> {
        self.authors.get(index)
    }

    /// Deliver a gesture and return every section it toggled, innermost first.
    pub fn dispatch(&mut self, target: Target, gesture: Gesture, now: Instant) -> Vec<Target> {
        let mut toggled = vec![];

        let author = match target {
            Target::Author(author) => author,
            Target::Entry { author, entry } => {
                let Some(collapsible) = self
                    .authors
                    .get_mut(author)
                    .and_then(|section| section.entries.get_mut(entry))
                else {
                    log::warn!("No entry {} in author section {}", entry, author);
                    return toggled;
                };

                let outcome = collapsible.handle(gesture, now);
                if outcome.toggled {
                    toggled.push(target);
                }
                if outcome.stop_propagation {
                    return toggled;
                }

                author
            }
        };

        match self.authors.get_mut(author) {
            Some(section) => {
                if section.section.handle(gesture, now).toggled {
                    toggled.push(Target::Author(author));
                }
            }
            None => log::warn!("No author section {}", author),
        }

        toggled
    }
}
