// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! Interactive page components as explicit state machines.
//!
//! Each controller owns its state and exposes the resulting DOM state
//! (class lists, mounted media, labels) so transitions can be checked
//! without a browser.

pub mod clipboard;
pub mod collapsible;
pub mod lightbox;

use std::fmt;

/// The `class` attribute of one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new(classes: &[&str]) -> Self {
        let mut list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}
