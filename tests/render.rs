use glam::Vec3A;
use whitted::camera::{Camera, HdrImage};
use whitted::output::{tone_map, write_ppm};
use whitted::scene::{Scene, BACKGROUND};

fn small_camera() -> Camera {
    Camera {
        image_width: 64,
        image_height: 48,
        ..Camera::new()
    }
}

fn pixel(image: &HdrImage, x: u32, y: u32) -> Vec3A {
    Vec3A::from_array(image.get_pixel(x, y).0)
}

#[test]
fn render_is_deterministic() {
    let scene = Scene::reference();
    let camera = small_camera();
    let a = camera.render(&scene);
    let b = camera.render(&scene);
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn corners_see_the_sky() {
    let image = small_camera().render(&Scene::reference());
    assert_eq!(pixel(&image, 0, 0), BACKGROUND);
    assert_eq!(pixel(&image, 63, 0), BACKGROUND);
    assert_eq!(pixel(&image, 0, 47), BACKGROUND);
    assert_eq!(pixel(&image, 32, 47), BACKGROUND);
}

#[test]
fn spheres_and_board_are_visible() {
    let image = small_camera().render(&Scene::reference());

    // Straight ahead is the emerald
    let center = pixel(&image, 32, 24);
    assert_ne!(center, BACKGROUND);
    assert!(center.is_finite());

    // Lower left of center is open floor: a multiple of a tile color, so never bluer than red
    let floor = pixel(&image, 20, 40);
    assert_ne!(floor, BACKGROUND);
    assert!(floor.z <= floor.x + 1e-6, "{floor:?}");
    assert!(floor.cmpge(Vec3A::ZERO).all());
}

#[test]
fn radiance_is_finite_and_non_negative() {
    let image = small_camera().render(&Scene::reference());
    for p in image.pixels() {
        let c = Vec3A::from_array(p.0);
        assert!(c.is_finite(), "{c:?}");
        assert!(c.cmpge(Vec3A::ZERO).all(), "{c:?}");
    }
}

#[test]
fn ppm_stream_has_header_and_one_triple_per_pixel() {
    let image = small_camera().render(&Scene::reference());
    let mut bytes = Vec::new();
    write_ppm(&image, &mut bytes).expect("in-memory write");

    let header = b"P6\n64 48\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 64 * 48 * 3);
    assert_eq!(&bytes[header.len()..header.len() + 3], &tone_map(BACKGROUND.to_array()));
}

/// Tone-mapped bytes of a 128x96 render of the reference scene, sampled away
/// from silhouettes and tile edges so small float differences can't move them.
const REFERENCE_PIXELS: [((u32, u32), [u8; 3]); 12] = [
    // sky
    ((2, 2), [51, 178, 204]),
    ((64, 93), [51, 178, 204]),
    // gray tile, then the brown tile beside it on the same row
    ((42, 78), [149, 149, 149]),
    ((45, 78), [149, 149, 149]),
    ((51, 78), [149, 99, 49]),
    ((54, 78), [149, 99, 49]),
    // a brown and a gray tile one row further back
    ((21, 74), [146, 97, 48]),
    ((29, 74), [146, 146, 146]),
    // pearl, turquoise, amethyst, dark side of the emerald
    ((100, 20), [196, 255, 246]),
    ((110, 55), [40, 142, 163]),
    ((30, 40), [106, 153, 240]),
    ((56, 70), [3, 8, 4]),
];

#[test]
fn reference_scene_matches_known_pixels() {
    let camera = Camera {
        image_width: 128,
        image_height: 96,
        ..Camera::new()
    };
    let image = camera.render(&Scene::reference());

    for ((x, y), expected) in REFERENCE_PIXELS {
        let actual = tone_map(image.get_pixel(x, y).0);
        let worst = actual
            .iter()
            .zip(expected)
            .map(|(a, b)| a.abs_diff(b))
            .max()
            .unwrap_or(0);
        assert!(
            worst <= 3,
            "pixel ({x}, {y}): got {actual:?}, expected {expected:?}"
        );
    }
}
