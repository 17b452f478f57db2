// SPDX-License-Identifier: MPL-2.0
//! Host container contract.
//!
//! A snackbar does not own a window; the embedding application hands it the
//! region it should lay out against. `HostRegion` carries the window size and
//! the safe-area insets (the part of the display not obscured by system UI),
//! which is the reference frame for all margins and off-screen offsets.

use crate::snackbar::AnimationDirection;

/// Safe-area insets of the host window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// The region a snackbar is presented into: window size plus safe-area
/// insets. Desktop windows typically have zero insets; the field exists so
/// embedders on constrained displays can reserve space for system UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostRegion {
    pub width: f32,
    pub height: f32,
    pub insets: SafeAreaInsets,
}

impl HostRegion {
    /// Creates a host region with no safe-area insets.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            insets: SafeAreaInsets::default(),
        }
    }

    /// Sets the safe-area insets.
    #[must_use]
    pub fn with_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Width of the safe content area.
    #[must_use]
    pub fn safe_width(&self) -> f32 {
        (self.width - self.insets.left - self.insets.right).max(0.0)
    }

    /// The inset on the edge a snackbar is anchored to. Added to the view
    /// height when computing the off-screen dismiss offset, so the view
    /// clears any system UI on that edge.
    #[must_use]
    pub fn inset_along(&self, direction: AnimationDirection) -> f32 {
        match direction {
            AnimationDirection::Top => self.insets.top,
            AnimationDirection::Bottom => self.insets.bottom,
        }
    }
}
