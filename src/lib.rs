// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a transient notification ("snackbar") widget for the
//! Iced GUI toolkit.
//!
//! It provides a single reusable snackbar view with slide-in (spring) and
//! fade animation presets, auto-dismiss timing, and an action button,
//! driven entirely by the embedding application's update loop.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod error;
pub mod host;
pub mod snackbar;
pub mod ui;

pub use host::{HostRegion, SafeAreaInsets};
pub use snackbar::{
    AnimationDirection, AnimationType, EasingCurve, Message, Phase, Snackbar, SnackbarConfig,
    SwipeDirection, Transition,
};
