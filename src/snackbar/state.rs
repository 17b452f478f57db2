// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle state machine.
//!
//! A `Snackbar` moves through `Hidden` → `Presenting` → `Shown` →
//! `Dismissing` → `Hidden` and is reusable once it returns to `Hidden`.
//! The phase enum is the single source of truth for the lifecycle; there is
//! no optional-handle inference, and because the phase also identifies the
//! in-flight transition, a `dismiss()` during a present animation replaces
//! that transition instead of racing it.
//!
//! All mutation happens on the Iced runtime thread inside the embedding
//! application's `update()`. The auto-dismiss timer is an `Instant`
//! deadline checked on `Tick` messages delivered by a `time::every`
//! subscription, so timer expiry re-enters through the same message channel
//! as every other input.

use crate::host::HostRegion;
use crate::snackbar::animation::{AnimationDirection, AnimationType, SpringCurve};
use crate::snackbar::config::{SnackbarConfig, DEFAULT_MIN_HEIGHT};
use std::fmt;
use std::time::Instant;

/// Lifecycle phase. `Presenting` and `Dismissing` are animated transitions;
/// `since` is when the transition started. `Dismissing` carries the frame
/// sampled at dismissal time, so a dismiss that interrupts the present
/// animation continues from the position and opacity the view had, with
/// no visual jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    Presenting { since: Instant },
    Shown { since: Instant },
    Dismissing { since: Instant, from: RenderFrame },
}

impl Phase {
    /// True from a successful `present()` until the dismiss animation
    /// completes.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Phase::Hidden)
    }
}

/// Layout parameters resolved at present-time against the host region.
///
/// The vertical anchor is a single enum value, so exactly one of the
/// top/bottom edges is ever active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub anchor: AnimationDirection,
    pub min_height: f32,
    pub host: HostRegion,
}

impl LayoutState {
    fn new(config: &SnackbarConfig, host: HostRegion) -> Self {
        Self {
            left_margin: config.left_margin,
            right_margin: config.right_margin,
            top_margin: config.top_margin,
            bottom_margin: config.bottom_margin,
            anchor: config.direction,
            min_height: DEFAULT_MIN_HEIGHT,
            host,
        }
    }

    /// Margin on the anchored edge.
    #[must_use]
    pub fn anchored_margin(&self) -> f32 {
        match self.anchor {
            AnimationDirection::Top => self.top_margin,
            AnimationDirection::Bottom => self.bottom_margin,
        }
    }

    /// Offset the view starts from when presenting. Negative values move
    /// the view past the anchored edge, off-screen. Fade keeps the view at
    /// its resting position for the whole transition.
    #[must_use]
    pub fn start_offset(&self, animation: AnimationType) -> f32 {
        match animation {
            AnimationType::Spring => -self.min_height,
            AnimationType::Fade => 0.0,
        }
    }

    /// Off-screen target when dismissing: the view height plus the
    /// safe-area inset on the anchored edge, so the view clears any system
    /// UI there.
    #[must_use]
    pub fn dismiss_offset(&self, animation: AnimationType) -> f32 {
        match animation {
            AnimationType::Spring => -(self.min_height + self.host.inset_along(self.anchor)),
            AnimationType::Fade => 0.0,
        }
    }
}

/// Animated values sampled for one rendered frame. `offset` is the
/// displacement from the resting position along the anchored edge
/// (negative = off-screen); `opacity` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub offset: f32,
    pub opacity: f32,
}

impl RenderFrame {
    const HIDDEN: Self = Self {
        offset: 0.0,
        opacity: 0.0,
    };

    const RESTING: Self = Self {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Direction of a swipe gesture reported by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The action button was pressed. Always triggers dismissal; the
    /// embedding application observes the same message for its own
    /// action handling.
    ActionPressed,
    /// A swipe gesture was reported. Ignored unless a swipe handler is
    /// registered.
    Swiped(SwipeDirection),
    /// Periodic tick driving animations and the auto-dismiss deadline.
    Tick(Instant),
}

/// What a tick changed, so the embedding application can react to
/// completed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// The present animation finished; the view is at rest, fully opaque.
    BecameShown,
    /// The dismiss animation finished; the view detached from the host.
    BecameHidden,
}

/// A single snackbar instance. Created once by the embedding application
/// and reused across presentations.
pub struct Snackbar {
    config: SnackbarConfig,
    host: Option<HostRegion>,
    phase: Phase,
    layout: Option<LayoutState>,
    dismiss_deadline: Option<Instant>,
    swipe_handler: Option<Box<dyn Fn(SwipeDirection) -> bool>>,
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("phase", &self.phase)
            .field("dismiss_deadline", &self.dismiss_deadline)
            .field("has_swipe_handler", &self.swipe_handler.is_some())
            .finish()
    }
}

impl Default for Snackbar {
    fn default() -> Self {
        Self::new(SnackbarConfig::default())
    }
}

impl Snackbar {
    #[must_use]
    pub fn new(config: SnackbarConfig) -> Self {
        Self {
            config: config.validated(),
            host: None,
            phase: Phase::Hidden,
            layout: None,
            dismiss_deadline: None,
            swipe_handler: None,
        }
    }

    /// Attaches (or refreshes) the host region the snackbar lays out
    /// against. Call again on window resize; an active layout picks up the
    /// new geometry immediately.
    pub fn attach_host(&mut self, host: HostRegion) {
        self.host = Some(host);
        if let Some(layout) = &mut self.layout {
            layout.host = host;
        }
    }

    #[must_use]
    pub fn config(&self) -> &SnackbarConfig {
        &self.config
    }

    /// Mutable access to the configuration. Margins and animation settings
    /// are captured into the layout at present-time, so changes take effect
    /// on the next `present()`.
    pub fn config_mut(&mut self) -> &mut SnackbarConfig {
        &mut self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// The resolved layout, present only while attached to the host.
    #[must_use]
    pub fn layout(&self) -> Option<&LayoutState> {
        self.layout.as_ref()
    }

    /// The pending auto-dismiss deadline. `Some` iff an auto-dismiss is
    /// scheduled.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.dismiss_deadline
    }

    /// Registers the swipe-to-dismiss policy. The handler decides, per
    /// direction, whether a swipe dismisses the snackbar. Without a handler
    /// swipes are ignored.
    pub fn set_swipe_handler(&mut self, handler: impl Fn(SwipeDirection) -> bool + 'static) {
        self.swipe_handler = Some(Box::new(handler));
    }

    pub fn clear_swipe_handler(&mut self) {
        self.swipe_handler = None;
    }

    /// Presents the snackbar: schedules the auto-dismiss deadline, resolves
    /// the layout against the host region with the off-screen start offset
    /// committed immediately, and starts the present transition. A call
    /// while already active is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if no host region has been attached. A missing host is a
    /// host-environment contract violation and intentionally fatal rather
    /// than silently degraded.
    pub fn present(&mut self, now: Instant) {
        let host = self
            .host
            .expect("snackbar presented without an attached host region");

        if self.phase.is_active() {
            return;
        }

        if self.config.auto_dismiss {
            self.dismiss_deadline = Some(now + self.config.duration());
        }

        // Committing the layout here is the synchronous first layout pass:
        // the first sampled frame is already at the start offset, and the
        // animation only advances on subsequent ticks.
        self.layout = Some(LayoutState::new(&self.config, host));
        self.phase = Phase::Presenting { since: now };
    }

    /// Starts the dismiss transition. Applies only while `Presenting` or
    /// `Shown`; calling it again while `Dismissing` or `Hidden` is an
    /// idempotent no-op. A dismiss during the present animation replaces
    /// the present transition, starting from the currently sampled
    /// position.
    pub fn dismiss(&mut self, now: Instant) {
        match self.phase {
            Phase::Presenting { .. } | Phase::Shown { .. } => {
                let from = self.frame(now);
                self.dismiss_deadline = None;
                self.phase = Phase::Dismissing { since: now, from };
            }
            Phase::Hidden | Phase::Dismissing { .. } => {}
        }
    }

    /// Advances the state machine to `now`: completes transitions whose
    /// animation time has elapsed and fires the auto-dismiss deadline.
    pub fn tick(&mut self, now: Instant) -> Transition {
        match self.phase {
            Phase::Hidden => Transition::None,
            Phase::Presenting { since } => {
                // A short duration can expire before the present animation
                // finishes; the timer wins and coalesces into a dismiss.
                if self.dismiss_deadline.is_some_and(|deadline| now >= deadline) {
                    self.dismiss(now);
                    return Transition::None;
                }
                if now.saturating_duration_since(since) >= self.config.transition_time() {
                    self.phase = Phase::Shown { since: now };
                    Transition::BecameShown
                } else {
                    Transition::None
                }
            }
            Phase::Shown { .. } => {
                if self.dismiss_deadline.is_some_and(|deadline| now >= deadline) {
                    self.dismiss(now);
                }
                Transition::None
            }
            Phase::Dismissing { since, .. } => {
                if now.saturating_duration_since(since) >= self.config.transition_time() {
                    self.detach();
                    Transition::BecameHidden
                } else {
                    Transition::None
                }
            }
        }
    }

    /// Samples the animated offset and opacity for `now`. Pure; does not
    /// advance the state machine.
    #[must_use]
    pub fn frame(&self, now: Instant) -> RenderFrame {
        let Some(layout) = self.layout else {
            return RenderFrame::HIDDEN;
        };

        match self.phase {
            Phase::Hidden => RenderFrame::HIDDEN,
            Phase::Shown { .. } => RenderFrame::RESTING,
            Phase::Presenting { since } => {
                let t = self.normalized_time(since, now);
                match self.config.animation {
                    AnimationType::Spring => {
                        let progress = self.spring().sample(t);
                        RenderFrame {
                            offset: layout.start_offset(AnimationType::Spring) * (1.0 - progress),
                            opacity: self.config.present_easing.apply(t),
                        }
                    }
                    AnimationType::Fade => RenderFrame {
                        offset: 0.0,
                        opacity: self.config.present_easing.apply(t),
                    },
                }
            }
            Phase::Dismissing { since, from } => {
                let t = self.normalized_time(since, now);
                // Fade out from whatever opacity the view had when the
                // dismiss started, so an interrupted present does not pop
                // back to fully opaque.
                let opacity = from.opacity * (1.0 - self.config.dismiss_easing.apply(t));
                match self.config.animation {
                    AnimationType::Spring => {
                        let progress = self.spring().sample(t);
                        let target = layout.dismiss_offset(AnimationType::Spring);
                        RenderFrame {
                            offset: from.offset + (target - from.offset) * progress,
                            opacity,
                        }
                    }
                    AnimationType::Fade => RenderFrame {
                        offset: from.offset,
                        opacity,
                    },
                }
            }
        }
    }

    /// Handles a snackbar message. Tick-driven transitions are reported
    /// back so the embedder can react to completion.
    pub fn handle_message(&mut self, message: &Message) -> Transition {
        match message {
            Message::ActionPressed => {
                self.dismiss(Instant::now());
                Transition::None
            }
            Message::Swiped(direction) => {
                let dismisses = self
                    .swipe_handler
                    .as_ref()
                    .is_some_and(|handler| handler(*direction));
                if dismisses {
                    self.dismiss(Instant::now());
                }
                Transition::None
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    fn detach(&mut self) {
        self.phase = Phase::Hidden;
        self.layout = None;
        self.dismiss_deadline = None;
    }

    fn spring(&self) -> SpringCurve {
        SpringCurve::new(self.config.spring_damping, self.config.spring_velocity)
    }

    /// Normalized transition time in `[0, 1]`, accounting for the
    /// configured delay. A zero-length animation jumps straight to 1.
    fn normalized_time(&self, since: Instant, now: Instant) -> f32 {
        let elapsed =
            now.saturating_duration_since(since).as_secs_f32() - self.config.animation_delay_secs;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.config.animation_duration_secs <= 0.0 {
            1.0
        } else {
            (elapsed / self.config.animation_duration_secs).min(1.0)
        }
    }
}
