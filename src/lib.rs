// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gallery;
pub mod manifest;
pub mod page;
pub mod preview;
pub mod render;
pub mod site;
pub mod template;
pub mod ui;
pub mod util;
