// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the scene.
//!
//! Drawing only: pointer input is routed through the application's event
//! subscription, so the program carries no widget-local state.

use crate::ui::scene::Scene;
use iced::widget::canvas::{self, Canvas, Text};
use iced::{mouse, Color, Length, Pixels, Point, Rectangle, Renderer, Size, Theme};

/// Font size of the caption, matching the original screen.
const CAPTION_SIZE: f32 = 25.0;

/// Night-sky backdrop behind the moon.
const BACKGROUND: Color = Color::from_rgb(0.05, 0.06, 0.12);

/// Renders a [`Scene`] onto a full-window canvas.
pub struct Stage<'a> {
    scene: &'a Scene,
}

impl<'a> Stage<'a> {
    #[must_use]
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Wraps the stage in a window-filling canvas widget.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Stage<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        if let Some(image) = self.scene.image() {
            let target = fit_contain(
                self.scene.frame(),
                image.width as f32,
                image.height as f32,
            );
            frame.draw_image(
                target,
                canvas::Image::new(image.handle.clone()).opacity(self.scene.opacity()),
            );
        }

        if let Some(caption) = self.scene.caption() {
            frame.fill_text(Text {
                content: caption.to_string(),
                position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
                color: Color::WHITE,
                size: Pixels(CAPTION_SIZE),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Scales `width × height` to fit entirely inside `frame`, centered
/// (aspect-fit, no cropping).
fn fit_contain(frame: Rectangle, width: f32, height: f32) -> Rectangle {
    if width <= 0.0 || height <= 0.0 {
        return frame;
    }

    let scale = (frame.width / width).min(frame.height / height);
    let fitted = Size::new(width * scale, height * scale);

    Rectangle::new(
        Point::new(
            frame.x + (frame.width - fitted.width) / 2.0,
            frame.y + (frame.height - fitted.height) / 2.0,
        ),
        fitted,
    )
}
