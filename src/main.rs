// SPDX-License-Identifier: MPL-2.0
//! Demo application embedding the snackbar widget.
//!
//! Presents a snackbar over a plain screen, with controls for the animation
//! preset and direction. The snackbar is driven the way a real embedder
//! drives it: a conditional `time::every` tick subscription while active,
//! window-resize events feeding the host region, and the action button
//! wired through the snackbar's own message type.

use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{alignment, event, time, window, Element, Length, Size, Subscription, Task, Theme};
use iced_snackbar::snackbar::config as snackbar_config;
use iced_snackbar::snackbar::{self, Transition};
use iced_snackbar::{AnimationDirection, AnimationType, HostRegion, Snackbar, SnackbarConfig};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Tick rate while a snackbar animation or deadline is pending.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
enum Message {
    Present,
    PresentDelayed,
    DelayElapsed,
    Dismiss,
    ToggleDirection,
    ToggleAnimation,
    Snackbar(snackbar::Message),
    Tick(Instant),
    WindowResized(Size),
}

struct Demo {
    snackbar: Snackbar,
    presentations: u32,
    dismissals: u32,
}

impl Demo {
    fn new(config: SnackbarConfig) -> (Self, Task<Message>) {
        let mut snackbar = Snackbar::new(config);
        snackbar.attach_host(HostRegion::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        (
            Self {
                snackbar,
                presentations: 0,
                dismissals: 0,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "iced_snackbar demo".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Present => {
                self.snackbar.present(Instant::now());
                self.presentations += 1;
                Task::none()
            }
            Message::PresentDelayed => Task::perform(
                async { tokio::time::sleep(Duration::from_secs(1)).await },
                |()| Message::DelayElapsed,
            ),
            Message::DelayElapsed => {
                self.snackbar.present(Instant::now());
                self.presentations += 1;
                Task::none()
            }
            Message::Dismiss => {
                self.snackbar.dismiss(Instant::now());
                Task::none()
            }
            Message::ToggleDirection => {
                let config = self.snackbar.config_mut();
                config.direction = match config.direction {
                    AnimationDirection::Top => AnimationDirection::Bottom,
                    AnimationDirection::Bottom => AnimationDirection::Top,
                };
                Task::none()
            }
            Message::ToggleAnimation => {
                let config = self.snackbar.config_mut();
                config.animation = match config.animation {
                    AnimationType::Spring => AnimationType::Fade,
                    AnimationType::Fade => AnimationType::Spring,
                };
                Task::none()
            }
            Message::Snackbar(snackbar_message) => {
                if self.snackbar.handle_message(&snackbar_message) == Transition::BecameHidden {
                    self.dismissals += 1;
                }
                Task::none()
            }
            Message::Tick(now) => {
                if self.snackbar.tick(now) == Transition::BecameHidden {
                    self.dismissals += 1;
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.snackbar.attach_host(HostRegion::new(size.width, size.height));
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        // Tick only while something can change.
        if self.snackbar.is_active() {
            Subscription::batch([resize, time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            resize
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let config = self.snackbar.config();

        let controls = Column::new()
            .spacing(12.0)
            .align_x(alignment::Horizontal::Center)
            .push(text("iced_snackbar").size(24.0))
            .push(
                Row::new()
                    .spacing(8.0)
                    .push(button(text("Present")).on_press(Message::Present))
                    .push(button(text("Present in 1s")).on_press(Message::PresentDelayed))
                    .push(button(text("Dismiss")).on_press(Message::Dismiss)),
            )
            .push(
                Row::new()
                    .spacing(8.0)
                    .push(
                        button(text(format!("Direction: {:?}", config.direction)))
                            .on_press(Message::ToggleDirection),
                    )
                    .push(
                        button(text(format!("Animation: {:?}", config.animation)))
                            .on_press(Message::ToggleAnimation),
                    ),
            )
            .push(text(format!(
                "presented {} / dismissed {}",
                self.presentations, self.dismissals
            )));

        let screen = container(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(screen)
            .push(self.snackbar.view(Instant::now()).map(Message::Snackbar))
            .into()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(400.0, 300.0)),
        ..window::Settings::default()
    }
}

/// Builds the snackbar configuration from an optional config file and CLI
/// overrides.
fn load_config() -> SnackbarConfig {
    let mut args = pico_args::Arguments::from_env();

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or(None);
    let direction: Option<String> = args.opt_value_from_str("--direction").unwrap_or(None);
    let animation: Option<String> = args.opt_value_from_str("--animation").unwrap_or(None);
    let message: Option<String> = args.opt_value_from_str("--message").unwrap_or(None);

    let mut config = match config_path {
        Some(path) => snackbar_config::load_from_path(&path).unwrap_or_default(),
        None => snackbar_config::load("iced_snackbar").unwrap_or_default(),
    };

    match direction.as_deref() {
        Some("bottom") => config.direction = AnimationDirection::Bottom,
        Some("top") => config.direction = AnimationDirection::Top,
        _ => {}
    }
    match animation.as_deref() {
        Some("fade") => config.animation = AnimationType::Fade,
        Some("spring") => config.animation = AnimationType::Spring,
        _ => {}
    }
    if let Some(message) = message {
        config.message = message;
    }

    config.validated()
}

fn main() -> iced::Result {
    use std::cell::RefCell;

    let config = load_config();

    // Wrap the config in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce).
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        Demo::new(config)
    };

    iced::application(boot, Demo::update, Demo::view)
        .title(Demo::title)
        .theme(Demo::theme)
        .window(window_settings())
        .subscription(Demo::subscription)
        .run()
}
