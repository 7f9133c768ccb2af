//! Full-pipeline renders of the fixed two-sphere scene.

use miniray::camera::Camera;
use miniray::scene::Scene;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;

#[test]
fn full_render_is_deterministic() {
    let scene = Scene::two_spheres();
    let camera = Camera::new(WIDTH, HEIGHT);

    let first = camera.render(&scene).unwrap();
    let second = camera.render(&scene).unwrap();

    assert_eq!(first.width(), WIDTH);
    assert_eq!(first.height(), HEIGHT);
    // Bit-identical across runs: no randomness anywhere in the pipeline.
    assert_eq!(first, second);
}

#[test]
fn rays_past_both_spheres_render_the_black_background() {
    let scene = Scene::two_spheres();
    let camera = Camera::new(WIDTH, HEIGHT);
    let frame = camera.render(&scene).unwrap();

    // The spheres sit in the middle of the viewport; all four corners
    // look past them.
    for (x, y) in [
        (0, 0),
        (WIDTH - 1, 0),
        (0, HEIGHT - 1),
        (WIDTH - 1, HEIGHT - 1),
    ] {
        assert_eq!(frame.pixel(x, y).unwrap(), [0, 0, 0]);
    }
}

#[test]
fn sphere_colors_do_not_bleed_across_channels() {
    let scene = Scene::two_spheres();
    let camera = Camera::new(WIDTH, HEIGHT);
    let frame = camera.render(&scene).unwrap();

    // Pixels are BGR. The red sphere must produce pixels that are red and
    // nothing else; same for the green one. The ambient term guarantees
    // every sphere pixel is visibly non-zero.
    let mut saw_pure_red = false;
    let mut saw_pure_green = false;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let [b, g, r] = frame.pixel(x, y).unwrap();
            saw_pure_red |= r > 0 && g == 0 && b == 0;
            saw_pure_green |= g > 0 && r == 0 && b == 0;
        }
    }
    assert!(saw_pure_red);
    assert!(saw_pure_green);
}

#[test]
fn left_half_shows_the_red_sphere() {
    let scene = Scene::two_spheres();
    let camera = Camera::new(WIDTH, HEIGHT);
    let frame = camera.render(&scene).unwrap();

    // The pixel aimed closest to the red sphere's center (u = 0.25,
    // v = 0.5) must be shaded red.
    let [b, g, r] = frame.pixel(WIDTH / 4, HEIGHT / 2).unwrap();
    assert!(r > 0);
    assert_eq!(g, 0);
    assert_eq!(b, 0);
}
