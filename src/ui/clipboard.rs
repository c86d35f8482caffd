// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::time::{Duration, Instant};

use relative_path::{RelativePath, RelativePathBuf};
use thiserror::Error;

use super::ClassList;
use crate::{
    error::FetchError,
    fetch::{fetch_text, Fetch},
    util::escape,
};

/// How long the button shows its confirmation.
pub const COPIED_DURATION: Duration = Duration::from_secs(2);

pub const COPY_LABEL: &str = "<span>📋</span> Copy Text";
pub const COPIED_LABEL: &str = "<span>✓</span> Copied!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy text to clipboard. Please try again.";

#[derive(Error, Debug)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    hold: bool,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner, hold: false })
            .map_err(|err| ClipboardError(err.to_string()))
    }

    /// Keep serving written text until another program owns the clipboard.
    ///
    /// On Linux the selection dies with the process that set it, so a
    /// short-lived process has to block in `write_text` for the text to
    /// stay pasteable. Elsewhere the system keeps a copy and this is a no-op.
    pub fn holding(mut self) -> Self {
        self.hold = true;
        self
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        let result = if self.hold {
            log::info!("Holding the clipboard until it is replaced");
            self.inner.set().wait().text(text)
        } else {
            self.inner.set_text(text)
        };

        result.map_err(|err| ClipboardError(err.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|err| ClipboardError(err.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("failed to load text: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl CopyError {
    /// The alert shown to the reader, whatever went wrong.
    pub fn user_message(&self) -> &'static str {
        COPY_FAILED_MESSAGE
    }
}

/// A "Copy Text" button bound to one transcript.
#[derive(Debug, Clone)]
pub struct CopyButton {
    text_path: RelativePathBuf,
    classes: ClassList,
    copied_until: Option<Instant>,
}

impl CopyButton {
    pub fn new(text_path: &RelativePath) -> Self {
        Self {
            text_path: text_path.to_owned(),
            classes: ClassList::new(&["btn", "btn-copy"]),
            copied_until: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Copy the transcript. On failure the button is left as it was.
    pub fn activate<F, C>(&mut self, fetcher: &F, clipboard: &mut C, now: Instant) -> Result<(), CopyError>
    where
        F: Fetch + ?Sized,
        C: Clipboard + ?Sized,
    {
        let text = fetch_text(fetcher, &self.text_path)?;
        clipboard.write_text(&text)?;

        // A repeat activation just restarts the window.
        self.copied_until = Some(now + COPIED_DURATION);
        self.classes.add("copied");

        log::info!("Copied {} to the clipboard", self.text_path);

        Ok(())
    }

    /// Advance the clock; reverts the confirmation once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
            self.classes.remove("copied");
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<button class="{}" data-text-path="{}">{}</button>"#,
            self.classes,
            escape(self.text_path.as_str()),
            self.label()
        )
    }
}
