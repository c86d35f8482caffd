// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

//! Markup fragments. Every field that came from a manifest is escaped here.

pub mod entry;
pub mod visual;
