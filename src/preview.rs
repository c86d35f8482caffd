// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use rayon::prelude::*;

use crate::{
    fetch::{fetch_text, Fetch},
    render::entry::{EntryFragment, Preview},
};

/// Fill one fragment's preview slot from its transcript.
pub fn load_preview<F: Fetch + ?Sized>(fetcher: &F, fragment: &mut EntryFragment) {
    fragment.preview = match fetch_text(fetcher, &fragment.text_path) {
        Ok(text) => Preview::Loaded(text),
        Err(err) => {
            log::error!("Error loading text preview for {}: {}", fragment.folder, err);
            Preview::Failed
        }
    };
}

/// Load every preview concurrently. Each fragment succeeds or fails on its own.
pub fn load_previews<F: Fetch + ?Sized>(fetcher: &F, fragments: &mut [EntryFragment]) {
    fragments
        .par_iter_mut()
        .for_each(|fragment| load_preview(fetcher, fragment));
}
