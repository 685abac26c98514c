// SPDX-License-Identifier: GPL-3.0-only

//! Layout policy interfaces.
//!
//! The policy engine that decides key-state variants and panel transitions
//! lives outside this crate; the layout model and controller only depend on
//! the [`LayoutUpdater`] trait defined here.

pub mod updater;

pub use updater::{ActivePanel, LayoutUpdater, SharedLayoutUpdater};
