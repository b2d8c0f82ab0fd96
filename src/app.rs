// SPDX-License-Identifier: MPL-2.0
//! Application root wiring the scene to the Iced runtime.
//!
//! The update loop is the single owner of all visual state: the fetch task
//! runs on the executor and re-enters here as [`Message::ImageFetched`],
//! ticks drive the entrance animation while it runs, and raw mouse events
//! are translated into scene pointer messages.

use crate::error::Error;
use crate::media::ImageData;
use crate::remote;
use crate::ui::scene::{self, Scene};
use crate::ui::stage::Stage;
use iced::{event, mouse, time, window, Element, Point, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Interval between entrance animation frames.
const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// Root application state.
pub struct App {
    scene: Scene,
    /// Last known cursor position, needed to resolve button presses.
    cursor_position: Option<Point>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The screen is up; start the entrance animation.
    Appeared,
    /// Animation frame while the entrance runs.
    Tick(Instant),
    /// The remote image fetch resolved.
    ImageFetched(Result<ImageData, Error>),
    /// Raw runtime event, routed to the scene as pointer input.
    RawEvent(event::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional image URL overriding the built-in moon.
    pub image_url: Option<String>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the scene and kicks off the image fetch alongside the
    /// appearance trigger. The two are independent: the entrance animation
    /// proceeds whether or not the fetch ever lands.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let url = flags
            .image_url
            .unwrap_or_else(|| remote::DEFAULT_IMAGE_URL.to_string());

        let app = App {
            scene: Scene::new(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            cursor_position: None,
        };

        let fetch = Task::perform(remote::fetch_image(url), Message::ImageFetched);

        (app, Task::batch([fetch, Task::done(Message::Appeared)]))
    }

    fn title(&self) -> String {
        String::from("Drag the Moon")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Tick only while the entrance animation runs; the scene is static
        // otherwise and redraws are driven by input.
        let tick_subscription = if self.scene.is_entering() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let event_subscription = event::listen_with(|event, _status, _window| match &event {
            event::Event::Mouse(_) => Some(Message::RawEvent(event.clone())),
            event::Event::Window(window::Event::Resized(_)) => {
                Some(Message::RawEvent(event.clone()))
            }
            _ => None,
        });

        Subscription::batch([tick_subscription, event_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Appeared => {
                self.scene.handle(scene::Message::Appeared(Instant::now()));
            }
            Message::Tick(now) => {
                self.scene.handle(scene::Message::AnimationTick(now));
            }
            Message::ImageFetched(result) => {
                // Failures are dropped here, silently: the caption and the
                // entrance animation never wait for the image.
                self.scene.handle(scene::Message::ImageFetched(result));
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }

        Task::none()
    }

    fn handle_raw_event(&mut self, event: event::Event) {
        match event {
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.scene.handle(scene::Message::PointerPressed(position));
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    self.scene.handle(scene::Message::PointerReleased);
                }
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    self.scene.handle(scene::Message::PointerMoved(position));
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.scene.handle(scene::Message::PointerReleased);
                }
                _ => {}
            },
            event::Event::Window(window::Event::Resized(size)) => {
                self.scene.handle(scene::Message::Resized(size));
            }
            _ => {}
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Stage::new(&self.scene).into_element()
    }
}
