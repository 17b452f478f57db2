// SPDX-License-Identifier: MPL-2.0
//! Transient snackbar notification widget.
//!
//! A snackbar is a small, temporary, non-blocking notification anchored to
//! the top or bottom edge of the host window. It slides or fades in,
//! displays a message with an action button, and dismisses after a timeout
//! or on request.
//!
//! # Components
//!
//! - [`config`] - `SnackbarConfig` with every presentation knob
//! - [`animation`] - animation presets, easing curves, spring math
//! - [`state`] - the `Snackbar` lifecycle state machine
//! - [`widget`] - the Iced view rendering the active snackbar
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::{HostRegion, Snackbar, SnackbarConfig};
//! use std::time::Instant;
//!
//! // Create the snackbar once and attach the host window region.
//! let mut snackbar = Snackbar::new(SnackbarConfig::default());
//! snackbar.attach_host(HostRegion::new(800.0, 600.0));
//!
//! // Present it; tick it from a `time::every` subscription.
//! snackbar.present(Instant::now());
//!
//! // In your view function, render the overlay.
//! let overlay = snackbar.view(Instant::now()).map(Message::Snackbar);
//! ```
//!
//! # Design Considerations
//!
//! - One snackbar instance per host; a `present()` while one is active
//!   is a no-op, not a queue
//! - Auto-dismiss defaults to 2 s; the deadline starts at present-time
//! - Swipe-to-dismiss is an opt-in policy registered by the embedder

pub mod animation;
pub mod config;
pub mod state;
pub mod widget;

pub use animation::{AnimationDirection, AnimationType, EasingCurve, SpringCurve};
pub use config::SnackbarConfig;
pub use state::{
    LayoutState, Message, Phase, RenderFrame, Snackbar, SwipeDirection, Transition,
};
