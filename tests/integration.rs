// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the scene lifecycle: fetch success and failure,
//! transition ordering, and drag arithmetic.

use iced::{Point, Size};
use iced_moon::error::Error;
use iced_moon::media::ImageData;
use iced_moon::ui::scene::{Message, Phase, Scene, CAPTION};
use iced_moon::ui::state::entrance::ENTRANCE_DURATION;
use std::time::Instant;

fn started_scene() -> (Scene, Instant) {
    let mut scene = Scene::new(Size::new(800.0, 600.0));
    let start = Instant::now();
    scene.handle(Message::Appeared(start));
    (scene, start)
}

fn run_entrance(scene: &mut Scene, start: Instant) {
    scene.handle(Message::AnimationTick(start + ENTRANCE_DURATION));
}

#[test]
fn successful_fetch_displays_the_image() {
    let (mut scene, start) = started_scene();

    let image = ImageData::from_rgba(100, 100, vec![255u8; 100 * 100 * 4]);
    scene.handle(Message::ImageFetched(Ok(image)));
    run_entrance(&mut scene, start);

    let shown = scene.image().expect("image should be displayed");
    assert_eq!((shown.width, shown.height), (100, 100));
    assert_eq!(scene.phase(), Phase::Interactive);
}

#[test]
fn failed_fetch_still_reveals_the_caption() {
    let (mut scene, start) = started_scene();

    scene.handle(Message::ImageFetched(Err(Error::Http(
        "connection reset".into(),
    ))));
    run_entrance(&mut scene, start);

    assert!(scene.image().is_none());
    assert_eq!(scene.phase(), Phase::Interactive);
    assert_eq!(scene.caption(), Some("Drag the moon!"));
    assert_eq!(CAPTION, "Drag the moon!");
}

#[test]
fn transitions_follow_the_fixed_order() {
    let mut scene = Scene::new(Size::new(800.0, 600.0));
    assert_eq!(scene.phase(), Phase::Initializing);

    let start = Instant::now();
    scene.handle(Message::Appeared(start));
    assert!(matches!(scene.phase(), Phase::Entering { .. }));
    assert!(!scene.is_interactive());

    run_entrance(&mut scene, start);
    assert_eq!(scene.phase(), Phase::Interactive);
    assert!(scene.is_interactive());
}

#[test]
fn drag_input_before_interactive_is_a_no_op() {
    let (mut scene, _start) = started_scene();
    let frame = scene.frame();

    scene.handle(Message::PointerPressed(frame.center()));
    scene.handle(Message::PointerMoved(Point::new(
        frame.center().x + 40.0,
        frame.center().y + 40.0,
    )));
    scene.handle(Message::PointerReleased);

    assert_eq!(scene.frame(), frame);
}

#[test]
fn three_samples_net_the_exact_vector_sum() {
    let (mut scene, start) = started_scene();
    run_entrance(&mut scene, start);

    let before = scene.frame();
    let grab = before.center();

    // Deltas (5,0), (0,5), (-3,2) must net to exactly (2,7): each sample is
    // applied once, neither partially nor doubled.
    scene.handle(Message::PointerPressed(grab));
    scene.handle(Message::PointerMoved(Point::new(grab.x + 5.0, grab.y)));
    scene.handle(Message::PointerMoved(Point::new(grab.x + 5.0, grab.y + 5.0)));
    scene.handle(Message::PointerMoved(Point::new(grab.x + 2.0, grab.y + 7.0)));
    scene.handle(Message::PointerReleased);

    assert_eq!(scene.frame().x, before.x + 2.0);
    assert_eq!(scene.frame().y, before.y + 7.0);
    assert_eq!(scene.frame().width, before.width);
    assert_eq!(scene.frame().height, before.height);
}

#[test]
fn late_fetch_lands_after_the_entrance() {
    let (mut scene, start) = started_scene();
    run_entrance(&mut scene, start);

    // The loader has no ordering dependency on the animation: a result that
    // arrives after the entrance still populates the image element.
    let image = ImageData::from_rgba(10, 20, vec![0u8; 10 * 20 * 4]);
    scene.handle(Message::ImageFetched(Ok(image)));

    let shown = scene.image().expect("late image should still be displayed");
    assert_eq!((shown.width, shown.height), (10, 20));
}
