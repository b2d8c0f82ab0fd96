// SPDX-License-Identifier: MPL-2.0
//! Scene state machine: entrance animation, caption reveal, and dragging.
//!
//! The scene is the single owner of the screen's mutable visual state. It
//! moves through `Initializing → Entering → Interactive` exactly once per
//! lifetime: the entrance animation has one outbound transition and no
//! cancellation or re-entry path, and drag input is ignored until the
//! `Interactive` phase is reached.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::state::entrance::ENTRANCE_RISE;
use crate::ui::state::{DragState, Entrance};
use iced::{Point, Rectangle, Size, Vector};
use std::time::Instant;

/// Caption revealed once the entrance animation completes.
pub const CAPTION: &str = "Drag the moon!";

/// Inset between the window edges and the image's initial frame.
pub const FRAME_MARGIN: f32 = 20.0;

/// Lifecycle phases of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Everything invisible, waiting for first appearance.
    Initializing,
    /// Entrance animation running since `started_at`.
    Entering { started_at: Instant },
    /// Terminal phase: caption shown, image draggable.
    Interactive,
}

/// Messages consumed by [`Scene::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The screen became visible for the first time.
    Appeared(Instant),
    /// Animation frame while the entrance is running.
    AnimationTick(Instant),
    /// The remote fetch resolved. Failures are discarded silently.
    ImageFetched(Result<ImageData, Error>),
    /// Mouse button pressed at a window position.
    PointerPressed(Point),
    /// Cursor moved to a window position.
    PointerMoved(Point),
    /// Mouse button released or cursor left the window.
    PointerReleased,
    /// The window was resized.
    Resized(Size),
}

/// Owner of the screen's visual state.
#[derive(Debug, Clone)]
pub struct Scene {
    phase: Phase,
    entrance: Entrance,
    bounds: Size,
    /// Frame the image occupies before the entrance moves it.
    initial_frame: Rectangle,
    /// Current frame of the image element; animation and drag move it.
    frame: Rectangle,
    opacity: f32,
    interactive: bool,
    caption_visible: bool,
    image: Option<ImageData>,
    drag: DragState,
}

impl Scene {
    /// Creates a scene for a window of the given size, with everything
    /// invisible and interaction disabled.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        let initial_frame = inset_frame(bounds);
        Self {
            phase: Phase::Initializing,
            entrance: Entrance::default(),
            bounds,
            initial_frame,
            frame: initial_frame,
            opacity: 0.0,
            interactive: false,
            caption_visible: false,
            image: None,
            drag: DragState::default(),
        }
    }

    /// Handles a scene message.
    #[allow(clippy::needless_pass_by_value)] // standard Iced update pattern
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Appeared(now) => {
                // One-shot: a second appearance must not restart the entrance.
                if self.phase == Phase::Initializing {
                    self.phase = Phase::Entering { started_at: now };
                }
            }
            Message::AnimationTick(now) => {
                if let Phase::Entering { started_at } = self.phase {
                    let elapsed = now.saturating_duration_since(started_at);
                    self.opacity = self.entrance.opacity_at(elapsed);
                    self.frame = self.initial_frame
                        + Vector::new(0.0, self.entrance.offset_at(elapsed));

                    if self.entrance.is_complete(elapsed) {
                        self.finish_entrance();
                    }
                }
            }
            Message::ImageFetched(Ok(image)) => {
                // Written exactly once; a duplicate fetch result is ignored.
                if self.image.is_none() {
                    self.image = Some(image);
                }
            }
            Message::ImageFetched(Err(_)) => {
                // Best-effort load: no retry, no error surface. The screen
                // carries on without an image.
            }
            Message::PointerPressed(position) => {
                if self.interactive && self.frame.contains(position) {
                    self.drag.begin(position);
                }
            }
            Message::PointerMoved(position) => {
                if let Some(delta) = self.drag.sample(position) {
                    self.frame = self.frame + delta;
                }
            }
            Message::PointerReleased => {
                self.drag.end();
            }
            Message::Resized(size) => {
                self.bounds = size;
                // Only re-seat the layout before the entrance has moved it.
                if self.phase == Phase::Initializing {
                    self.initial_frame = inset_frame(size);
                    self.frame = self.initial_frame;
                }
            }
        }
    }

    /// Single outbound transition of the `Entering` phase.
    fn finish_entrance(&mut self) {
        self.frame = self.initial_frame + Vector::new(0.0, -ENTRANCE_RISE);
        self.opacity = 1.0;
        self.interactive = true;
        self.caption_visible = true;
        self.phase = Phase::Interactive;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_entering(&self) -> bool {
        matches!(self.phase, Phase::Entering { .. })
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Current frame of the image element.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Window size the scene lays itself out in.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Opacity of the image element, `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The caption, once it has been revealed.
    #[must_use]
    pub fn caption(&self) -> Option<&'static str> {
        self.caption_visible.then_some(CAPTION)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

/// The image's initial frame: the window bounds inset on all edges.
fn inset_frame(bounds: Size) -> Rectangle {
    Rectangle {
        x: FRAME_MARGIN,
        y: FRAME_MARGIN,
        width: (bounds.width - 2.0 * FRAME_MARGIN).max(0.0),
        height: (bounds.height - 2.0 * FRAME_MARGIN).max(0.0),
    }
}
